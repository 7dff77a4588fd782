use std::fs::File;
use std::io::{BufReader, Read, Result};
use std::path::Path;

use crate::entropy_coding::ACWrite;
use crate::error;

/// Order-0 binary entropy in bits per coded bit.
pub fn entropy(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }
    -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
}

/// Byte-compare two files, panicking at the first mismatch.
pub fn cmp(file1: &Path, file2: &Path) -> Result<()> {
    let f1 = File::open(file1)?;
    let f2 = File::open(file2)?;

    let l1 = f1.metadata()?.len();
    let l2 = f2.metadata()?.len();

    let r1 = BufReader::new(f1);
    let r2 = BufReader::new(f2);

    let bytes1 = r1.bytes().map(|b| b.unwrap());
    let bytes2 = r2.bytes().map(|b| b.unwrap());
    for (pos, (b1, b2)) in bytes1.zip(bytes2).enumerate() {
        assert_eq!(b1, b2, "Files differ at byte {pos}");
    }

    assert_eq!(l1, l2, "File 1 is {l1} bytes and file 2 is {l2} bytes");
    println!("Compare: OK");
    Ok(())
}

/// Counting sink: measures coded size without storing the stream.
pub struct ByteCount {
    bytes: u64,
}

impl ByteCount {
    pub fn new() -> Self {
        Self { bytes: 0 }
    }

    /// Bytes the encoder has emitted so far
    pub fn result(&self) -> u64 {
        self.bytes
    }
}

impl Default for ByteCount {
    fn default() -> Self {
        Self::new()
    }
}

impl ACWrite for ByteCount {
    fn write_byte(&mut self, _byte: u8) -> error::Result<()> {
        self.bytes += 1;
        Ok(())
    }

    fn flush(&mut self) -> error::Result<()> {
        Ok(())
    }
}
