use exifsplice_common::codec::{self, Endian};
use exifsplice_common::exif::{IfdKind, Tag};
use exifsplice_common::math::*;

use super::EXIF_IDENTIFIER_STRING;
use crate::error::{Error, Result, ResultExt};
use crate::raw::Raw;
use crate::{Entry, Ifd, Type, Value};

impl super::MetaData {
    /// Decode the payload of an APP1 segment, starting with `Exif\0\0`
    pub fn from_app1_payload(payload: &[u8]) -> Result<Self> {
        let tiff = payload
            .strip_prefix(EXIF_IDENTIFIER_STRING)
            .e(Error::IdentifierMissing)?;

        Self::decode(tiff)
    }

    /// Decode data starting with the TIFF header
    ///
    /// Only the primary IFD and its Exif and GPS sub-IFDs are decoded. The
    /// position of an IFD chained after the primary IFD is available as its
    /// [`Ifd::next_ifd_pointer`].
    ///
    /// See 4.5.2 in v3.0 standard
    pub fn decode(tiff: &[u8]) -> Result<Self> {
        let mut raw = Raw::new(tiff);

        let primary_offset = decode_header(&mut raw)?;
        let primary = decode_ifd(&mut raw, IfdKind::Primary, primary_offset)?;
        let mut metadata = Self::new(primary);

        for kind in [IfdKind::Exif, IfdKind::Gps] {
            let Some(tag) = kind.pointer_tag() else {
                continue;
            };
            let Some(entry) = metadata.primary.get(tag) else {
                continue;
            };
            let Some(offset) = entry.value.u32() else {
                tracing::info!(
                    "Pointer to IFD '{kind:?}' has unexpected type {:?}",
                    entry.data_type()
                );
                continue;
            };

            match decode_ifd(&mut raw, kind, offset) {
                Ok(ifd) => match kind {
                    IfdKind::Exif => metadata.exif = Some(ifd),
                    IfdKind::Gps => metadata.gps = Some(ifd),
                    IfdKind::Primary => {}
                },
                // Sometimes, not all IFD locations are actually valid
                Err(err) => tracing::info!("Failed to load IFD '{kind:?}' at {offset}: {err}"),
            }
        }

        Ok(metadata)
    }
}

fn decode_header(raw: &mut Raw) -> Result<u32> {
    raw.seek_start(0)?;

    let mark = raw.read_exact::<2>()?;
    raw.endian = Endian::from_byte_order_mark(mark).e(Error::UnknownByteOrder(mark))?;

    match raw.read_u16()? {
        42 => {}
        magic => return Err(Error::MagicBytesWrong(magic)),
    }

    raw.read_u32()
}

fn decode_ifd(raw: &mut Raw, kind: IfdKind, offset: u32) -> Result<Ifd> {
    raw.seek_start(offset)?;

    let n_entries = raw.read_u16()?;
    tracing::debug!("Reading IFD '{kind:?}' with {n_entries} entries at byte {offset}");

    let mut ifd = Ifd::new();
    ifd.offset = offset;

    for _ in 0..n_entries {
        let entry = read_entry(raw)?;
        let tag = entry.tag;
        if let Err(err) = ifd.insert(entry) {
            tracing::info!("Ignoring entry {tag:?} in IFD '{kind:?}': {err}");
        }
    }

    ifd.next_ifd_pointer = raw.read_u32()?;

    Ok(ifd)
}

/// Read a single entry from IFD
fn read_entry(raw: &mut Raw) -> Result<Entry> {
    let tag = Tag(raw.read_u16()?);
    let data_type = Type::from(raw.read_u16()?);
    let count = raw.read_u32()?;
    let value_offset = raw.read_exact::<4>()?;

    let data_len = count.safe_mul(data_type.size()).e(Error::ValueLengthMismatch {
        data_type,
        count,
        len: 0,
    })?;

    let data = if data_len <= 4 {
        value_offset
            .get(..data_len.usize()?)
            .unwrap_or_default()
    } else {
        let offset = codec::decode(&value_offset, 0, 4, raw.endian)?;
        raw.slice(offset, data_len.usize()?)?
    };

    let value = Value::decode(data_type, count, data, raw.endian)?;

    Ok(Entry::new(tag, value))
}
