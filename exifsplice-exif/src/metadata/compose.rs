use exifsplice_common::codec::{self, Endian};
use exifsplice_common::exif::IfdKind;
use exifsplice_common::math::*;

use super::{MetaData, EXIF_IDENTIFIER_STRING};
use crate::error::{Error, Result, ResultExt};
use crate::{Entry, Ifd};

/// Byte-order mark, magic number and primary IFD offset
pub const TIFF_HEADER_LEN: u32 = 8;
const TIFF_MAGIC: u32 = 42;

/// Settings for composing an APP1 payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComposeOptions {
    /// Byte order of the TIFF structure, big-endian by default
    pub endian: Endian,
}

/// Builds a new APP1 payload for `metadata`
///
/// The returned payload starts with the identifier of `original_payload`,
/// followed by a new TIFF header and the primary, Exif, and GPS IFDs. All
/// data of `original_payload` starting at the next IFD pointer of the
/// original primary IFD is appended unchanged, and the primary IFD is chained
/// to it.
///
/// `original` must be the decoded form of `original_payload`. The pointer
/// entries of the primary IFD are maintained here; `metadata` itself is not
/// modified.
pub fn compose_app1_payload(
    original: &MetaData,
    metadata: &MetaData,
    original_payload: &[u8],
    options: &ComposeOptions,
) -> Result<Vec<u8>> {
    let endian = options.endian;

    let identifier = original_payload
        .get(..EXIF_IDENTIFIER_STRING.len())
        .filter(|x| *x == EXIF_IDENTIFIER_STRING)
        .e(Error::IdentifierMissing)?;

    let mut primary = metadata.primary.clone();
    let mut exif = metadata.exif.clone();
    let mut gps = metadata.gps.clone();

    // Pass 1: fix the number of entries and with that all lengths
    for (kind, sub_ifd) in [(IfdKind::Exif, &exif), (IfdKind::Gps, &gps)] {
        let Some(tag) = kind.pointer_tag() else {
            continue;
        };

        if sub_ifd.is_some() {
            if !primary.contains(tag) {
                primary.replace(Entry::long(tag, 0));
            }
        } else if primary.remove(tag).is_some() {
            tracing::info!("Removing pointer to missing IFD '{kind:?}'");
        }
    }

    primary.offset = TIFF_HEADER_LEN;
    let sized_primary_len = primary.composed_len()?;
    let exif_len = composed_len(exif.as_ref())?;
    let gps_len = composed_len(gps.as_ref())?;

    tracing::debug!(
        "Sized IFDs: primary {sized_primary_len}, exif {exif_len}, gps {gps_len} bytes"
    );

    // Pass 2: resolve the pointers
    let exif_offset = TIFF_HEADER_LEN
        .safe_add(sized_primary_len)
        .e(Error::SectionTooLarge)?;
    let gps_offset = exif_offset.safe_add(exif_len).e(Error::SectionTooLarge)?;
    let remainder_offset = gps_offset.safe_add(gps_len).e(Error::SectionTooLarge)?;

    for (kind, offset, sub_ifd) in [
        (IfdKind::Exif, exif_offset, exif.as_mut()),
        (IfdKind::Gps, gps_offset, gps.as_mut()),
    ] {
        let (Some(tag), Some(sub_ifd)) = (kind.pointer_tag(), sub_ifd) else {
            continue;
        };

        primary.remove(tag);
        primary.insert(Entry::long(tag, offset))?;
        sub_ifd.offset = offset;
    }

    let remainder = original_remainder(original, original_payload)?;
    primary.next_ifd_pointer = if remainder.is_empty() {
        0
    } else {
        remainder_offset
    };

    let primary_data = primary.compose(endian)?;
    let resolved_primary_len = primary_data.len().u32()?;
    if resolved_primary_len != sized_primary_len {
        return Err(Error::PointerLayoutChanged {
            sized: sized_primary_len,
            resolved: resolved_primary_len,
        });
    }

    let exif_data = compose(exif.as_ref(), IfdKind::Exif, exif_len, endian)?;
    let gps_data = compose(gps.as_ref(), IfdKind::Gps, gps_len, endian)?;

    tracing::debug!(
        "Resolved offsets: exif {exif_offset}, gps {gps_offset}, remainder of {} bytes at {}",
        remainder.len(),
        primary.next_ifd_pointer
    );

    let mut payload = Vec::with_capacity(
        identifier
            .len()
            .safe_add(remainder_offset.usize()?)?
            .safe_add(remainder.len())?,
    );

    payload.extend_from_slice(identifier);
    payload.extend_from_slice(&endian.byte_order_mark());
    codec::encode_into(&mut payload, TIFF_MAGIC, 2, endian)?;
    codec::encode_into(&mut payload, TIFF_HEADER_LEN, 4, endian)?;
    payload.extend(primary_data);
    payload.extend(exif_data);
    payload.extend(gps_data);
    payload.extend_from_slice(remainder);

    Ok(payload)
}

/// Data of the original payload chained after the primary IFD
///
/// Usually the 1st IFD with the thumbnail. It is kept as opaque bytes.
fn original_remainder<'a>(original: &MetaData, original_payload: &'a [u8]) -> Result<&'a [u8]> {
    let next_ifd_pointer = original.primary.next_ifd_pointer;
    if next_ifd_pointer == 0 {
        return Ok(&[]);
    }

    let out_of_bounds = Error::RemainderOutOfBounds {
        offset: next_ifd_pointer,
        len: original_payload.len(),
    };

    let start = EXIF_IDENTIFIER_STRING
        .len()
        .safe_add(next_ifd_pointer.usize()?)?;

    original_payload.get(start..).e(out_of_bounds)
}

fn composed_len(ifd: Option<&Ifd>) -> Result<u32> {
    ifd.map_or(Ok(0), Ifd::composed_len)
}

/// Composes a sub-IFD that must have the length reserved for it
fn compose(ifd: Option<&Ifd>, kind: IfdKind, sized: u32, endian: Endian) -> Result<Vec<u8>> {
    let data = ifd.map_or(Ok(Vec::new()), |x| x.compose(endian))?;

    let resolved = data.len().u32()?;
    if resolved != sized {
        return Err(Error::ComposedLengthMismatch {
            kind,
            sized,
            resolved,
        });
    }

    Ok(data)
}
