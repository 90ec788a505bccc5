use exifsplice_common::codec::{self, Endian};
use exifsplice_common::math::*;

use crate::error::{Error, Result};

/// Cursor over TIFF data
///
/// Offsets inside TIFF data are relative to the TIFF header, which is the
/// start of `data`.
#[derive(Debug, Clone)]
pub(crate) struct Raw<'a> {
    pub endian: Endian,
    data: &'a [u8],
    position: usize,
}

impl<'a> Raw<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            endian: Endian::Big,
            data,
            position: 0,
        }
    }

    pub fn position(&self) -> Result<u32> {
        Ok(self.position.u32()?)
    }

    pub fn seek_start(&mut self, seek: u32) -> Result<()> {
        self.position = seek.usize()?;
        Ok(())
    }

    pub fn read_exact<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.slice(self.position()?, N)?;
        let mut buf = [0; N];
        buf.copy_from_slice(bytes);
        self.position = self.position.safe_add(N)?;
        Ok(buf)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let value = codec::decode(self.data, self.position, 2, self.endian)?;
        self.position = self.position.safe_add(2)?;
        Ok(value.u16()?)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let value = codec::decode(self.data, self.position, 4, self.endian)?;
        self.position = self.position.safe_add(4)?;
        Ok(value)
    }

    /// Data at an offset, without moving the cursor
    pub fn slice(&self, offset: u32, len: usize) -> Result<&'a [u8]> {
        let start = offset.usize()?;
        let out_of_bounds = || {
            Error::Codec(codec::CodecError::OutOfBounds {
                start,
                width: len,
                len: self.data.len(),
            })
        };

        let end = start.checked_add(len).ok_or_else(out_of_bounds)?;
        self.data.get(start..end).ok_or_else(out_of_bounds)
    }
}
