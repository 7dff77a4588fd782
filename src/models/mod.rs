pub mod bit_tree;
pub mod shift;

pub use self::{bit_tree::BitTree, shift::ShiftModel};

use crate::entropy_coding::{ACRead, ACWrite, Decoder, Encoder};
use crate::error::Result;

/// A learned probability estimate for one binary decision.
///
/// The coded `encode`/`decode` pair always predicts first and adapts
/// second: the decoder can only mirror an estimate computed from bits it
/// has already seen.
pub trait Model {
    /// Current probability of the next bit being 1
    fn predict(&self) -> u16;

    /// Fold an observed bit into the estimate
    fn update(&mut self, bit: u8);

    /// Code `bit` with the current estimate, then adapt to it.
    fn encode<W: ACWrite>(&mut self, enc: &mut Encoder<W>, bit: u8) -> Result<()> {
        enc.encode(bit, self.predict())?;
        self.update(bit);
        Ok(())
    }

    /// Mirror of [`Model::encode`]; adapts to the decoded bit the same way
    /// the encoder side adapted when it coded it.
    fn decode<R: ACRead>(&mut self, dec: &mut Decoder<R>) -> Result<u8> {
        let bit = dec.decode(self.predict())?;
        self.update(bit);
        Ok(bit)
    }
}
