use std::time::Instant;

use rand::{rngs::StdRng, Rng, SeedableRng};

use bitpress::entropy_coding::{Decoder, Encoder};
use bitpress::models::{Model, ShiftModel};
use bitpress::Result;

const INERTIA: u8 = 4;

/// Adaptive-model demo: the source re-rolls its bias every 200 bits in a
/// way opaque to the coder, and a single shift model chases it.
fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(2345);
    let mut source = Vec::new();
    for _ in 0..50 {
        let bias: f64 = rng.gen();
        for _ in 0..200 {
            source.push(u8::from(rng.gen_bool(bias)));
        }
    }

    let timer = Instant::now();
    let mut enc = Encoder::new(Vec::new());
    let mut model = ShiftModel::<INERTIA>::new();
    for &bit in &source {
        model.encode(&mut enc, bit)?;
    }
    let coded = enc.finish()?;

    println!(
        "[adaptive] csize: {} bytes (ratio: {:.3}), ctime: {:?}",
        coded.len(),
        coded.len() as f64 / (source.len() as f64 / 8.0),
        timer.elapsed()
    );

    let mut dec = Decoder::new(coded.as_slice())?;
    let mut model = ShiftModel::<INERTIA>::new();
    for &bit in &source {
        assert_eq!(model.decode(&mut dec)?, bit);
    }
    println!("[adaptive] decodes ok");

    Ok(())
}
