//! Fixed width unsigned integer codec
//!
//! Every integer inside a TIFF structure is 1 to 4 bytes wide and stored in
//! the byte order announced by the TIFF header. JPEG segment lengths use the
//! same codec but are always big-endian.

use crate::math::*;

pub const MAX_WIDTH: usize = 4;

/// Byte order of encoded integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endian {
    /// Most significant byte first, `MM`
    #[default]
    Big,
    /// Least significant byte first, `II`
    Little,
}

impl Endian {
    pub const BIG_MARK: [u8; 2] = *b"MM";
    pub const LITTLE_MARK: [u8; 2] = *b"II";

    pub fn from_byte_order_mark(mark: [u8; 2]) -> Option<Self> {
        match mark {
            Self::BIG_MARK => Some(Self::Big),
            Self::LITTLE_MARK => Some(Self::Little),
            _ => None,
        }
    }

    /// Mark written at the start of a TIFF header
    pub fn byte_order_mark(self) -> [u8; 2] {
        match self {
            Self::Big => Self::BIG_MARK,
            Self::Little => Self::LITTLE_MARK,
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid integer width {0}, must be between 1 and 4 bytes")]
    InvalidWidth(usize),
    #[error("Value {value} does not fit into {width} bytes")]
    Overflow { value: u32, width: usize },
    #[error("Reading {width} bytes at {start} exceeds data of length {len}")]
    OutOfBounds {
        start: usize,
        width: usize,
        len: usize,
    },
}

fn check_width(width: usize) -> Result<(), CodecError> {
    if (1..=MAX_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(CodecError::InvalidWidth(width))
    }
}

/// Decode `width` bytes starting at `start` into an integer
///
/// ```
/// # use exifsplice_common::codec::{decode, Endian};
/// let data = [0, 0, 0, 1, 2, 3, 0];
/// assert_eq!(decode(&data, 3, 2, Endian::Big), Ok(0x102));
/// assert_eq!(decode(&data, 3, 3, Endian::Little), Ok(0x30201));
/// ```
pub fn decode(bytes: &[u8], start: usize, width: usize, endian: Endian) -> Result<u32, CodecError> {
    check_width(width)?;

    let out_of_bounds = || CodecError::OutOfBounds {
        start,
        width,
        len: bytes.len(),
    };

    let end = start.checked_add(width).ok_or_else(out_of_bounds)?;
    let slice = bytes.get(start..end).ok_or_else(out_of_bounds)?;

    let mut buf = [0; MAX_WIDTH];
    match endian {
        Endian::Big => {
            // Right align into the big-endian buffer
            let (_, tail) = buf.split_at_mut(MAX_WIDTH.saturating_sub(width));
            tail.copy_from_slice(slice);
            Ok(u32::from_be_bytes(buf))
        }
        Endian::Little => {
            let (head, _) = buf.split_at_mut(width);
            head.copy_from_slice(slice);
            Ok(u32::from_le_bytes(buf))
        }
    }
}

/// Encode `value` into exactly `width` bytes
///
/// ```
/// # use exifsplice_common::codec::{encode, Endian};
/// assert_eq!(encode(0x1FF, 2, Endian::Big), Ok(vec![1, 0xFF]));
/// assert_eq!(encode(0x1FF, 2, Endian::Little), Ok(vec![0xFF, 1]));
/// assert!(encode(0x1FF, 1, Endian::Big).is_err());
/// ```
pub fn encode(value: u32, width: usize, endian: Endian) -> Result<Vec<u8>, CodecError> {
    check_width(width)?;

    let bits = width.safe_mul(8).map_err(|_| CodecError::InvalidWidth(width))?;
    let overflow = u64::from(value)
        .checked_shr(bits.u32().map_err(|_| CodecError::InvalidWidth(width))?)
        .is_some_and(|rest| rest != 0);
    if overflow {
        return Err(CodecError::Overflow { value, width });
    }

    Ok(match endian {
        Endian::Big => {
            let bytes = value.to_be_bytes();
            bytes
                .get(MAX_WIDTH.saturating_sub(width)..)
                .unwrap_or_default()
                .to_vec()
        }
        Endian::Little => {
            let bytes = value.to_le_bytes();
            bytes.get(..width).unwrap_or_default().to_vec()
        }
    })
}

/// Encode and append to `out`
pub fn encode_into(
    out: &mut Vec<u8>,
    value: u32,
    width: usize,
    endian: Endian,
) -> Result<(), CodecError> {
    out.extend(encode(value, width, endian)?);
    Ok(())
}
