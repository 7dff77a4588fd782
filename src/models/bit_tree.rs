use super::Model;
use crate::entropy_coding::{ACRead, ACWrite, Decoder, Encoder};
use crate::error::{Error, Result};
use crate::u16;

/// Tree-shaped cascade of binary models coding `NUM_BITS`-wide symbols,
/// MSB first.
///
/// The first bit of a symbol is coded context-free, the second conditioned
/// on the first, and so on: `1 + 2 + 4 + ... = 2^NUM_BITS - 1` contexts,
/// each owning its own model. Numbering the MSB context 1 and shifting
/// coded bits in from the bottom walks the tree, so `ctx` is 1-based and
/// the backing slab is indexed by `ctx - 1`.
///
/// Only the per-context estimates persist across symbols; the walk itself
/// restarts at the root every symbol.
pub struct BitTree<M, const NUM_BITS: u32> {
    models: Box<[M]>,
}

impl<M: Model + Default, const NUM_BITS: u32> BitTree<M, NUM_BITS> {
    /// Size of the coded alphabet.
    pub const NUM_SYMS: usize = 1 << NUM_BITS;
    const MSB: usize = Self::NUM_SYMS >> 1;

    /// One model per tree node, allocated up front so coding never
    /// allocates.
    pub fn new() -> Self {
        assert!(
            (1..=16).contains(&NUM_BITS),
            "symbol width must be within 1..=16 bits"
        );
        let models = (1..Self::NUM_SYMS).map(|_| M::default()).collect();
        Self { models }
    }

    /// Encode `value`, rejecting anything outside the alphabet before a
    /// single bit is coded.
    pub fn encode<W: ACWrite>(&mut self, enc: &mut Encoder<W>, value: u16) -> Result<()> {
        let mut value = usize::from(value);
        if value >= Self::NUM_SYMS {
            return Err(Error::OutOfRange {
                value: u16!(value),
                num_bits: NUM_BITS,
            });
        }

        let mut ctx = 1;
        while ctx < Self::NUM_SYMS {
            let bit = u8::from(value & Self::MSB != 0);
            value += value; // shift value by 1 for the next level
            self.models[ctx - 1].encode(enc, bit)?;
            ctx += ctx + usize::from(bit); // shift the coded bit into ctx
        }
        Ok(())
    }

    /// Decode one symbol; the result is always within the alphabet.
    pub fn decode<R: ACRead>(&mut self, dec: &mut Decoder<R>) -> Result<u16> {
        let mut ctx = 1;
        while ctx < Self::NUM_SYMS {
            ctx += ctx + usize::from(self.models[ctx - 1].decode(dec)?);
        }
        Ok(u16!(ctx - Self::NUM_SYMS))
    }
}

impl<M: Model + Default, const NUM_BITS: u32> Default for BitTree<M, NUM_BITS> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::BitTree;
    use crate::error::Error;
    use crate::entropy_coding::{Decoder, Encoder};
    use crate::models::ShiftModel;

    fn round_trip<const NUM_BITS: u32>(symbols: &[u16]) {
        let mut enc = Encoder::new(Vec::new());
        let mut tree = BitTree::<ShiftModel<4>, NUM_BITS>::new();
        for &sym in symbols {
            tree.encode(&mut enc, sym).unwrap();
        }
        let coded = enc.finish().unwrap();

        let mut dec = Decoder::new(coded.as_slice()).unwrap();
        let mut tree = BitTree::<ShiftModel<4>, NUM_BITS>::new();
        for &sym in symbols {
            assert_eq!(tree.decode(&mut dec).unwrap(), sym);
        }
    }

    #[test]
    fn single_bit_alphabet() {
        let symbols: Vec<u16> = (0..512u32).map(|i| u16::from(i % 5 == 0)).collect();
        round_trip::<1>(&symbols);
    }

    #[test]
    fn two_bit_alphabet() {
        let symbols: Vec<u16> = (0..512u32).map(|i| (i * 7 % 4) as u16).collect();
        round_trip::<2>(&symbols);
    }

    #[test]
    fn byte_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        let symbols: Vec<u16> = (0..4096).map(|_| u16::from(rng.gen::<u8>())).collect();
        round_trip::<8>(&symbols);
    }

    #[test]
    fn sixteen_bit_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut symbols = vec![0, 1, u16::MAX, 0x8000, 0x7fff];
        symbols.extend((0..256).map(|_| rng.gen::<u16>()));
        round_trip::<16>(&symbols);
    }

    #[test]
    fn out_of_range_symbol_codes_nothing() {
        let mut enc = Encoder::new(Vec::new());
        let mut tree = BitTree::<ShiftModel<4>, 3>::new();
        assert!(matches!(
            tree.encode(&mut enc, 8),
            Err(Error::OutOfRange { value: 8, num_bits: 3 })
        ));

        // the rejected symbol must not have touched the stream: a clean
        // finish leaves nothing but the 4 flush bytes
        let coded = enc.finish().unwrap();
        assert_eq!(coded.len(), 4);
    }

    #[test]
    fn skewed_symbols_compress() {
        // text-ish distribution: few distinct bytes, one dominant
        let mut rng = StdRng::seed_from_u64(99);
        let symbols: Vec<u16> = (0..8192)
            .map(|_| match rng.gen_range(0..10u32) {
                0..=5 => 32u16,
                6..=8 => 101,
                _ => rng.gen_range(97..=122),
            })
            .collect();

        let mut enc = Encoder::new(Vec::new());
        let mut tree = BitTree::<ShiftModel<4>, 8>::new();
        for &sym in &symbols {
            tree.encode(&mut enc, sym).unwrap();
        }
        let coded = enc.finish().unwrap();

        // far below the 1 byte/symbol of a raw dump
        assert!(coded.len() < symbols.len() / 2);
    }

    proptest! {
        #[test]
        fn round_trip_any_bytes(
            symbols in proptest::collection::vec(0u16..256, 0..1024)
        ) {
            round_trip::<8>(&symbols);
        }
    }
}
