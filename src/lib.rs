pub mod entropy_coding;
pub mod error;
pub mod helpers;
pub mod macros;
pub mod models;

pub use error::{Error, Result};
