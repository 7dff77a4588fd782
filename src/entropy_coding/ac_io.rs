use core::slice::from_mut as into_slice;
use std::io::{ErrorKind, Read, Write};

use crate::error::{Error, Result};

/// Byte sink for the encoder side. Append-only: once a byte is out it is
/// never rewritten, which is what the carry-less renormalization relies on.
pub trait ACWrite {
    fn write_byte(&mut self, byte: u8) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

/// Byte source for the decoder side. Forward-only cursor.
pub trait ACRead {
    /// Next byte, or `Error::OutOfData` past the end of input
    fn read_byte(&mut self) -> Result<u8>;

    /// 4 bytes BE as u32, `Error::OutOfData` if fewer remain
    fn read_u32(&mut self) -> Result<u32> {
        let bytes = [
            self.read_byte()?,
            self.read_byte()?,
            self.read_byte()?,
            self.read_byte()?,
        ];
        Ok(u32::from_be_bytes(bytes))
    }
}

impl ACWrite for Vec<u8> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl ACRead for &[u8] {
    fn read_byte(&mut self) -> Result<u8> {
        let (&byte, rest) = self.split_first().ok_or(Error::OutOfData)?;
        *self = rest;
        Ok(byte)
    }
}

/// Arithmetic coder write io for `io::Write` types
pub struct ACWriter<W> {
    inner: W,
}

impl<W: Write> ACWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ACWrite for ACWriter<W> {
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.inner.write_all(&[byte])?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Arithmetic coder read io for `io::Read` types
pub struct ACReader<R> {
    inner: R,
}

impl<R: Read> ACReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> ACRead for ACReader<R> {
    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = 0;
        match self.inner.read_exact(into_slice(&mut byte)) {
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => Err(Error::OutOfData),
            res => {
                res?;
                Ok(byte)
            }
        }
    }
}
