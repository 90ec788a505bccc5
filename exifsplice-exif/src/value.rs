use exifsplice_common::codec::{self, Endian};
use exifsplice_common::math::*;

use crate::error::{Error, Result, ResultExt};
use crate::Type;

/// Typed value of an IFD entry
///
/// The variant determines the [`Type`] written to the directory record and
/// the number of elements determines its count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Byte(Vec<u8>),
    /// Raw ASCII data including the terminating NULL byte
    Ascii(Vec<u8>),
    Short(Vec<u16>),
    Long(Vec<u32>),
    /// Numerator and denominator
    Rational(Vec<(u32, u32)>),
    SByte(Vec<i8>),
    Undefined(Vec<u8>),
    SShort(Vec<i16>),
    SLong(Vec<i32>),
    SRational(Vec<(i32, i32)>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Utf8(Vec<u8>),
    /// Type without known interpretation, data is kept as is
    Unknown { type_id: u16, data: Vec<u8> },
}

macro_rules! accessor {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $t:ty) => {
        $(#[$meta])*
        pub fn $name(&self) -> Result<&[$t]> {
            match self {
                Self::$variant(v) => Ok(v.as_slice()),
                other => Err(Error::TypeMismatch {
                    expected: Type::$variant,
                    actual: other.data_type(),
                }),
            }
        }
    };
}

impl Value {
    pub fn data_type(&self) -> Type {
        match self {
            Self::Byte(_) => Type::Byte,
            Self::Ascii(_) => Type::Ascii,
            Self::Short(_) => Type::Short,
            Self::Long(_) => Type::Long,
            Self::Rational(_) => Type::Rational,
            Self::SByte(_) => Type::SByte,
            Self::Undefined(_) => Type::Undefined,
            Self::SShort(_) => Type::SShort,
            Self::SLong(_) => Type::SLong,
            Self::SRational(_) => Type::SRational,
            Self::Float(_) => Type::Float,
            Self::Double(_) => Type::Double,
            Self::Utf8(_) => Type::Utf8,
            Self::Unknown { type_id, .. } => Type::from(*type_id),
        }
    }

    /// Number of values of [`Self::data_type`]
    pub fn count(&self) -> Result<u32> {
        let len = match self {
            Self::Byte(v) | Self::Ascii(v) | Self::Undefined(v) | Self::Utf8(v) => v.len(),
            Self::Unknown { type_id, data } => {
                // Registered types would be written with their unit size
                let data_type = Type::from(*type_id);
                if !matches!(data_type, Type::Unknown(_)) {
                    return Err(Error::ValueLengthMismatch {
                        data_type,
                        count: data.len().u32()?,
                        len: data.len(),
                    });
                }
                data.len()
            }
            Self::Short(v) => v.len(),
            Self::Long(v) => v.len(),
            Self::Rational(v) => v.len(),
            Self::SByte(v) => v.len(),
            Self::SShort(v) => v.len(),
            Self::SLong(v) => v.len(),
            Self::SRational(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Double(v) => v.len(),
        };

        Ok(len.u32()?)
    }

    /// Length of the encoded value in bytes
    pub fn data_len(&self) -> Result<u32> {
        self.count()?
            .checked_mul(self.data_type().size())
            .e(Error::SectionTooLarge)
    }

    /// Encode value with the given byte order
    pub fn encode(&self, endian: Endian) -> Result<Vec<u8>> {
        let mut out = Vec::new();

        match self {
            Self::Byte(v) | Self::Ascii(v) | Self::Undefined(v) | Self::Utf8(v) => {
                out.extend_from_slice(v)
            }
            Self::Unknown { data, .. } => out.extend_from_slice(data),
            Self::SByte(v) => out.extend(v.iter().flat_map(|x| x.to_be_bytes())),
            Self::Short(v) => {
                for x in v {
                    codec::encode_into(&mut out, u32::from(*x), 2, endian)?;
                }
            }
            Self::SShort(v) => {
                for x in v {
                    let x = u16::from_ne_bytes(x.to_ne_bytes());
                    codec::encode_into(&mut out, u32::from(x), 2, endian)?;
                }
            }
            Self::Long(v) => {
                for x in v {
                    codec::encode_into(&mut out, *x, 4, endian)?;
                }
            }
            Self::SLong(v) => {
                for x in v {
                    codec::encode_into(&mut out, u32::from_ne_bytes(x.to_ne_bytes()), 4, endian)?;
                }
            }
            Self::Rational(v) => {
                for (numerator, denominator) in v {
                    codec::encode_into(&mut out, *numerator, 4, endian)?;
                    codec::encode_into(&mut out, *denominator, 4, endian)?;
                }
            }
            Self::SRational(v) => {
                for (numerator, denominator) in v {
                    let numerator = u32::from_ne_bytes(numerator.to_ne_bytes());
                    let denominator = u32::from_ne_bytes(denominator.to_ne_bytes());
                    codec::encode_into(&mut out, numerator, 4, endian)?;
                    codec::encode_into(&mut out, denominator, 4, endian)?;
                }
            }
            Self::Float(v) => {
                for x in v {
                    codec::encode_into(&mut out, x.to_bits(), 4, endian)?;
                }
            }
            Self::Double(v) => {
                for x in v {
                    match endian {
                        Endian::Big => out.extend(x.to_be_bytes()),
                        Endian::Little => out.extend(x.to_le_bytes()),
                    }
                }
            }
        }

        Ok(out)
    }

    /// Decode `count` values of `data_type` from `data`
    ///
    /// `data` must have exactly the length of the encoded values.
    pub fn decode(data_type: Type, count: u32, data: &[u8], endian: Endian) -> Result<Self> {
        let mismatch = Error::ValueLengthMismatch {
            data_type,
            count,
            len: data.len(),
        };
        let expected_len = count.safe_mul(data_type.size()).e(mismatch.clone())?;
        if expected_len.usize()? != data.len() {
            return Err(mismatch);
        }

        let u16s = || -> Result<Vec<u16>> {
            data.chunks_exact(2)
                .map(|x| -> Result<u16> { Ok(codec::decode(x, 0, 2, endian)?.u16()?) })
                .collect()
        };
        let u32s = || -> Result<Vec<u32>> {
            data.chunks_exact(4)
                .map(|x| -> Result<u32> { Ok(codec::decode(x, 0, 4, endian)?) })
                .collect()
        };
        let pairs = || -> Result<Vec<(u32, u32)>> {
            data.chunks_exact(8)
                .map(|x| -> Result<(u32, u32)> {
                    Ok((codec::decode(x, 0, 4, endian)?, codec::decode(x, 4, 4, endian)?))
                })
                .collect()
        };
        let i32_from = |x: u32| i32::from_ne_bytes(x.to_ne_bytes());

        Ok(match data_type {
            Type::Byte => Self::Byte(data.to_vec()),
            Type::Ascii => Self::Ascii(data.to_vec()),
            Type::Undefined => Self::Undefined(data.to_vec()),
            Type::Utf8 => Self::Utf8(data.to_vec()),
            Type::Unknown(type_id) => Self::Unknown {
                type_id,
                data: data.to_vec(),
            },
            Type::SByte => Self::SByte(data.iter().map(|x| i8::from_ne_bytes([*x])).collect()),
            Type::Short => Self::Short(u16s()?),
            Type::SShort => Self::SShort(
                u16s()?
                    .into_iter()
                    .map(|x| i16::from_ne_bytes(x.to_ne_bytes()))
                    .collect(),
            ),
            Type::Long => Self::Long(u32s()?),
            Type::SLong => Self::SLong(u32s()?.into_iter().map(i32_from).collect()),
            Type::Rational => Self::Rational(pairs()?),
            Type::SRational => Self::SRational(
                pairs()?
                    .into_iter()
                    .map(|(x, y)| (i32_from(x), i32_from(y)))
                    .collect(),
            ),
            Type::Float => Self::Float(u32s()?.into_iter().map(f32::from_bits).collect()),
            Type::Double => Self::Double(
                data.chunks_exact(8)
                    .map(|x| -> Result<f64> {
                        let bytes: [u8; 8] = x.try_into().e(mismatch.clone())?;
                        Ok(match endian {
                            Endian::Big => f64::from_be_bytes(bytes),
                            Endian::Little => f64::from_le_bytes(bytes),
                        })
                    })
                    .collect::<Result<_>>()?,
            ),
        })
    }

    accessor!(as_byte, Byte, u8);
    accessor!(
        /// Raw ASCII data, including NULL bytes
        as_ascii,
        Ascii,
        u8
    );
    accessor!(as_short, Short, u16);
    accessor!(as_long, Long, u32);
    accessor!(as_rational, Rational, (u32, u32));
    accessor!(as_sbyte, SByte, i8);
    accessor!(as_undefined, Undefined, u8);
    accessor!(as_sshort, SShort, i16);
    accessor!(as_slong, SLong, i32);
    accessor!(as_srational, SRational, (i32, i32));
    accessor!(as_float, Float, f32);
    accessor!(as_double, Double, f64);

    /// Returns a field of [`Type::Ascii`] or [`Type::Utf8`]
    ///
    /// Removes all NULL bytes instead of just the last byte that should be
    /// NULL, since many Exif writers pad strings with NULL bytes.
    pub fn as_string(&self) -> Result<String> {
        let data = match self {
            Self::Ascii(v) | Self::Utf8(v) => v,
            other => {
                return Err(Error::TypeMismatch {
                    expected: Type::Ascii,
                    actual: other.data_type(),
                })
            }
        };

        let data = data.iter().copied().filter(|x| *x != 0).collect::<Vec<_>>();

        Ok(String::from_utf8_lossy(&data).to_string())
    }

    /// Single [`Type::Short`] or [`Type::Long`] as `u32`
    pub fn u32(&self) -> Option<u32> {
        match self {
            Self::Short(v) if v.len() == 1 => v.first().copied().map(u32::from),
            Self::Long(v) if v.len() == 1 => v.first().copied(),
            _ => None,
        }
    }
}
