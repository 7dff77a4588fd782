//! Checked integer narrowing, with an opt-out for measured hot paths.
//!
//! With the `unsafe_conversions` feature the checks compile away; callers
//! only narrow values already bounded by the coder's invariants.

#[macro_export]
macro_rules! u8 {
    ($a:expr) => {
        if cfg!(feature = "unsafe_conversions") {
            unsafe { u8::try_from($a).unwrap_unchecked() }
        } else {
            u8::try_from($a).unwrap()
        }
    };
}

#[macro_export]
macro_rules! u16 {
    ($a:expr) => {
        if cfg!(feature = "unsafe_conversions") {
            unsafe { u16::try_from($a).unwrap_unchecked() }
        } else {
            u16::try_from($a).unwrap()
        }
    };
}

#[macro_export]
macro_rules! u32 {
    ($a:expr) => {
        if cfg!(feature = "unsafe_conversions") {
            unsafe { u32::try_from($a).unwrap_unchecked() }
        } else {
            u32::try_from($a).unwrap()
        }
    };
}
