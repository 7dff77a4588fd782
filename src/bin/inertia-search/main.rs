use std::time::{Duration, Instant};
use std::{env, fs};

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use bitpress::entropy_coding::Encoder;
use bitpress::helpers::ByteCount;
use bitpress::models::{BitTree, ShiftModel};
use bitpress::Result;

/// Sweeps the shift-model inertia over a real file and reports the best
/// coded size. Each candidate codes independently, so they run in parallel.
fn main() -> Result<()> {
    let path = env::args().nth(1).unwrap_or_else(|| {
        println!("Usage: inertia-search <Path>");
        panic!("Provide a file to sweep over!");
    });
    let buf = fs::read(path)?;

    let inertias: Vec<u8> = (1..=8).collect();
    let results: Vec<_> = inertias
        .into_par_iter()
        .map(|inertia| {
            let res = match inertia {
                1 => exec::<1>(&buf),
                2 => exec::<2>(&buf),
                3 => exec::<3>(&buf),
                4 => exec::<4>(&buf),
                5 => exec::<5>(&buf),
                6 => exec::<6>(&buf),
                7 => exec::<7>(&buf),
                _ => exec::<8>(&buf),
            };
            (inertia, res)
        })
        .collect();

    let mut best = (u64::MAX, Duration::MAX, 0u8);
    for (inertia, res) in results {
        let (size, time) = res?;
        if size < best.0 || (size == best.0 && time < best.1) {
            best = (size, time, inertia);
        }
    }
    println!(
        "--> best: {} bytes in {:?} for [inertia: {}]",
        best.0, best.1, best.2
    );

    Ok(())
}

fn exec<const INERTIA: u8>(buf: &[u8]) -> Result<(u64, Duration)> {
    let timer = Instant::now();
    let mut enc = Encoder::new(ByteCount::new());
    let mut tree = BitTree::<ShiftModel<INERTIA>, 8>::new();

    for &byte in buf {
        tree.encode(&mut enc, u16::from(byte))?;
    }
    let sink = enc.finish()?;

    let time = timer.elapsed();
    println!(
        "[inertia-search] [inertia: {}] csize: {} (ratio: {:.3}), ctime: {:?}",
        INERTIA,
        sink.result(),
        sink.result() as f64 / buf.len() as f64,
        time
    );

    Ok((sink.result(), time))
}
