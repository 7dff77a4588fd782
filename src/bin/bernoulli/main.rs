use std::time::Instant;

use rand::{rngs::StdRng, Rng, SeedableRng};

use bitpress::entropy_coding::{Decoder, Encoder, PROB_MAX};
use bitpress::{helpers, Result};

/// Static-probability demo: a Bernoulli source with a known P(1) = 1/5,
/// coded at the matching fixed probability.
fn main() -> Result<()> {
    let prob_one = PROB_MAX / 5;
    let mut rng = StdRng::seed_from_u64(1234);
    let source: Vec<u8> = (0..10_000)
        .map(|_| u8::from(rng.gen_range(0..PROB_MAX) < prob_one))
        .collect();

    let timer = Instant::now();
    let mut enc = Encoder::new(Vec::new());
    for &bit in &source {
        enc.encode(bit, prob_one)?;
    }
    let coded = enc.finish()?;

    let bits_per_sym = helpers::entropy(f64::from(prob_one) / f64::from(PROB_MAX));
    println!(
        "[bernoulli] csize: {} bytes - entropy: {:.2} bytes, ctime: {:?}",
        coded.len(),
        source.len() as f64 * bits_per_sym / 8.0,
        timer.elapsed()
    );

    let mut dec = Decoder::new(coded.as_slice())?;
    for &bit in &source {
        assert_eq!(dec.decode(prob_one)?, bit);
    }
    println!("[bernoulli] decodes ok");

    Ok(())
}
