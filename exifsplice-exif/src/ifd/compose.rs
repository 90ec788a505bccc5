use exifsplice_common::codec::{self, Endian};
use exifsplice_common::math::*;

use crate::error::{Error, Result, ResultExt};

/// Size of a directory record
pub const ENTRY_LEN: u32 = 12;
/// Size of the entry count and the next IFD pointer
pub const DIRECTORY_OVERHEAD: u32 = 6;

impl super::Ifd {
    /// Length of the directory records without out-of-line values
    pub fn directory_len(&self) -> Result<u32> {
        let n_entries = u32::from(self.n_entries()?);
        checked![n_entries];
        (n_entries * ENTRY_LEN + DIRECTORY_OVERHEAD)
            .check()
            .e(Error::SectionTooLarge)
    }

    /// Length of [`Self::compose`] output without encoding the IFD
    pub fn composed_len(&self) -> Result<u32> {
        let mut len = self.directory_len()?;
        for entry in self.entries() {
            let data_len = entry.value.data_len()?;
            if data_len > 4 {
                len = len.safe_add(data_len).e(Error::SectionTooLarge)?;
            }
        }

        Ok(len)
    }

    /// Encodes the IFD
    ///
    /// Values that don't fit into the four bytes of the record are placed
    /// after the next IFD pointer. Their offsets are calculated from
    /// [`Self::offset`], so the offset has to be set to the final position
    /// first.
    ///
    /// See 4.6.2 in v3.0 standard
    pub fn compose(&self, endian: Endian) -> Result<Vec<u8>> {
        let n_entries = self.n_entries()?;
        let mut value_offset = self
            .offset
            .safe_add(self.directory_len()?)
            .e(Error::SectionTooLarge)?;

        let mut directory = Vec::with_capacity(self.directory_len()?.usize()?);
        let mut values = Vec::new();

        codec::encode_into(&mut directory, n_entries.into(), 2, endian)?;

        for entry in self.entries() {
            let data = entry.value.encode(endian)?;
            if data.len() != entry.value.data_len()?.usize()? {
                return Err(Error::ValueLengthMismatch {
                    data_type: entry.data_type(),
                    count: entry.count()?,
                    len: data.len(),
                });
            }

            codec::encode_into(&mut directory, entry.tag.0.into(), 2, endian)?;
            codec::encode_into(&mut directory, entry.data_type().u16().into(), 2, endian)?;
            codec::encode_into(&mut directory, entry.count()?, 4, endian)?;

            if data.len() <= 4 {
                directory.extend_from_slice(&data);
                directory.resize(directory.len().safe_add(4_usize.safe_sub(data.len())?)?, 0);
            } else {
                codec::encode_into(&mut directory, value_offset, 4, endian)?;
                value_offset = value_offset
                    .safe_add(data.len().u32()?)
                    .e(Error::SectionTooLarge)?;
                values.extend_from_slice(&data);
            }
        }

        codec::encode_into(&mut directory, self.next_ifd_pointer, 4, endian)?;

        tracing::debug!(
            "Composed IFD at {} with {n_entries} entries, {} bytes of records and {} bytes of values",
            self.offset,
            directory.len(),
            values.len()
        );

        directory.extend(values);
        Ok(directory)
    }

    fn n_entries(&self) -> Result<u16> {
        self.len().u16().e(Error::TooManyEntries(self.len()))
    }
}
