//! Replace the Exif metadata of JPEG images
//!
//! ```
//! # fn main() -> Result<(), exifsplice::Error> {
//! # let mut image = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x16];
//! # image.extend_from_slice(b"Exif\0\0MM\0\x2a\0\0\0\x08\0\0\0\0\0\0");
//! # image.extend_from_slice(&[0xFF, 0xD9]);
//! use exifsplice::exif::{Entry, Ifd, MetaData, Tag};
//!
//! let mut primary = Ifd::new();
//! primary.insert(Entry::ascii(Tag::MAKE, "Test"))?;
//!
//! let new_image = exifsplice::set_metadata(&image, &MetaData::new(primary))?;
//!
//! let metadata = exifsplice::parse_image(&new_image)?;
//! assert_eq!(
//!     metadata.primary.get(Tag::MAKE).unwrap().value.as_string()?,
//!     "Test"
//! );
//! # Ok(())
//! # }
//! ```

use exifsplice_common::codec::{self, CodecError, Endian};
use exifsplice_exif::{ComposeOptions, MetaData};
use exifsplice_jpeg::{Jpeg, Marker};

pub use exifsplice_common as common;
pub use exifsplice_exif as exif;
pub use exifsplice_jpeg as jpeg;

/// Start of the APP1 payload: SOI, APP1 marker and length field
const PAYLOAD_START: usize = 6;

/// Largest payload the 16-bit length field can describe
pub const MAX_APP1_PAYLOAD_LEN: usize = 65533;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Image doesn't start with SOI followed by APP1")]
    UnsupportedFormat,
    #[error("APP1 payload of {0} bytes exceeds the segment length limit")]
    App1TooLarge(usize),
    #[error("No Exif data found")]
    NoExif,
    #[error("Exif: {0}")]
    Exif(#[from] exifsplice_exif::Error),
    #[error("JPEG: {0}")]
    Jpeg(#[from] exifsplice_jpeg::Error),
    #[error("Codec: {0}")]
    Codec(#[from] CodecError),
}

/// Replaces the Exif data of a JPEG image
///
/// The image must start with SOI directly followed by an Exif APP1 segment.
/// Only that segment is rebuilt. All data after it are copied unchanged.
pub fn set_metadata(original_image: &[u8], metadata: &MetaData) -> Result<Vec<u8>, Error> {
    set_metadata_with_options(original_image, metadata, &ComposeOptions::default())
}

/// Same as [`set_metadata`] with control over the TIFF encoding
pub fn set_metadata_with_options(
    original_image: &[u8],
    metadata: &MetaData,
    options: &ComposeOptions,
) -> Result<Vec<u8>, Error> {
    let (head, payload_end) = app1_payload_range(original_image)?;
    let original_payload = original_image
        .get(PAYLOAD_START..payload_end)
        .ok_or(Error::UnsupportedFormat)?;
    let rest = original_image
        .get(payload_end..)
        .ok_or(Error::UnsupportedFormat)?;

    let original = MetaData::from_app1_payload(original_payload)?;
    let payload =
        exifsplice_exif::compose_app1_payload(&original, metadata, original_payload, options)?;

    if payload.len() > MAX_APP1_PAYLOAD_LEN {
        return Err(Error::App1TooLarge(payload.len()));
    }
    let length = u32::try_from(payload.len().saturating_add(2))
        .map_err(|_| Error::App1TooLarge(payload.len()))?;

    tracing::debug!(
        "Replacing APP1 payload of {} bytes with {} bytes",
        original_payload.len(),
        payload.len()
    );

    let mut image = Vec::with_capacity(
        original_image
            .len()
            .saturating_sub(original_payload.len())
            .saturating_add(payload.len()),
    );

    image.extend_from_slice(head);
    codec::encode_into(&mut image, length, 2, Endian::Big)?;
    image.extend(payload);
    image.extend_from_slice(rest);

    Ok(image)
}

/// Decodes the Exif data of the first Exif APP1 segment
pub fn parse_image(image: &[u8]) -> Result<MetaData, Error> {
    let jpeg = Jpeg::new(image)?;
    let segment = jpeg.exif().next().ok_or(Error::NoExif)?;

    Ok(MetaData::from_app1_payload(segment.data())?)
}

/// Returns SOI with APP1 marker and the end of the APP1 payload
fn app1_payload_range(image: &[u8]) -> Result<(&[u8], usize), Error> {
    let head = image.get(..4).ok_or(Error::UnsupportedFormat)?;
    let soi = [exifsplice_jpeg::MARKER_START, u8::from(Marker::SOI)];
    let app1 = [exifsplice_jpeg::MARKER_START, u8::from(Marker::APP1)];

    if head[..2] != soi || head[2..] != app1 {
        tracing::debug!("Unsupported image start {head:x?}");
        return Err(Error::UnsupportedFormat);
    }

    let length = codec::decode(image, 4, 2, Endian::Big).map_err(|_| Error::UnsupportedFormat)?;
    if length < 2 {
        return Err(Error::UnsupportedFormat);
    }

    // The length field counts itself
    let payload_end = usize::try_from(length)
        .ok()
        .and_then(|x| x.checked_add(4))
        .filter(|x| *x <= image.len())
        .ok_or(Error::UnsupportedFormat)?;

    Ok((head, payload_end))
}
