use super::Model;
use crate::entropy_coding::PROB_MAX;

/// Adaptive bit model with a shift-based update. Lower `INERTIA` adapts
/// faster, higher smooths harder.
///
/// These are pretty good on their own, and sophisticated coders are built
/// by keeping many of them and picking one per context (see
/// [`BitTree`](super::BitTree)).
pub struct ShiftModel<const INERTIA: u8> {
    prob: u16,
}

impl<const INERTIA: u8> ShiftModel<INERTIA> {
    /// Neutral prior: a coin flip.
    pub fn new() -> Self {
        // an inertia of 0 would jump straight to the interval ends
        assert!(INERTIA >= 1, "inertia must be at least 1");
        Self { prob: PROB_MAX / 2 }
    }
}

impl<const INERTIA: u8> Default for ShiftModel<INERTIA> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const INERTIA: u8> Model for ShiftModel<INERTIA> {
    fn predict(&self) -> u16 {
        self.prob
    }

    fn update(&mut self, bit: u8) {
        // moves a fraction of the way toward the observed end;
        // never reaches 0 or PROB_MAX from anywhere inside the interval
        match bit {
            0 => self.prob -= self.prob >> INERTIA,
            _ => self.prob += (PROB_MAX - self.prob) >> INERTIA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Model, ShiftModel, PROB_MAX};
    use crate::entropy_coding::{Decoder, Encoder};

    #[test]
    fn starts_neutral() {
        let model = ShiftModel::<4>::new();
        assert_eq!(model.predict(), PROB_MAX / 2);
    }

    #[test]
    #[should_panic(expected = "inertia")]
    fn zero_inertia_is_refused() {
        let _ = ShiftModel::<0>::new();
    }

    #[test]
    fn all_ones_converge_up_without_saturating() {
        let mut model = ShiftModel::<4>::new();
        let mut prev = model.predict();
        for _ in 0..10_000 {
            model.update(1);
            let p = model.predict();
            assert!(p >= prev);
            assert!(p < PROB_MAX);
            prev = p;
        }
        assert!(model.predict() > PROB_MAX - 64);
    }

    #[test]
    fn all_zeros_converge_down_without_saturating() {
        let mut model = ShiftModel::<4>::new();
        let mut prev = model.predict();
        for _ in 0..10_000 {
            model.update(0);
            let p = model.predict();
            assert!(p <= prev);
            assert!(p > 0);
            prev = p;
        }
        assert!(model.predict() < 64);
    }

    fn round_trip<const INERTIA: u8>(bits: &[u8]) {
        let mut enc = Encoder::new(Vec::new());
        let mut model = ShiftModel::<INERTIA>::new();
        for &bit in bits {
            model.encode(&mut enc, bit).unwrap();
        }
        let coded = enc.finish().unwrap();

        // an independently constructed model must track the same estimates
        let mut dec = Decoder::new(coded.as_slice()).unwrap();
        let mut model = ShiftModel::<INERTIA>::new();
        for &bit in bits {
            assert_eq!(model.decode(&mut dec).unwrap(), bit);
        }
    }

    #[test]
    fn adaptive_round_trip_across_inertias() {
        // bursty source: long runs with occasional flips
        let bits: Vec<u8> = (0..4096u32)
            .map(|i| u8::from(i % 512 < 400) ^ u8::from(i % 29 == 0))
            .collect();
        round_trip::<1>(&bits);
        round_trip::<2>(&bits);
        round_trip::<4>(&bits);
        round_trip::<6>(&bits);
    }

    #[test]
    fn adaptive_beats_coin_flip_on_biased_source() {
        let bits: Vec<u8> = (0..8192u32).map(|i| u8::from(i % 10 == 0)).collect();

        let mut enc = Encoder::new(Vec::new());
        let mut model = ShiftModel::<4>::new();
        for &bit in &bits {
            model.encode(&mut enc, bit).unwrap();
        }
        let coded = enc.finish().unwrap();

        // 10% ones has ~0.47 bits of entropy per bit; leave the model some
        // slack for adaptation lag
        assert!(coded.len() < bits.len() / 8 * 6 / 10);
    }
}
