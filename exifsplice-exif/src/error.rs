use exifsplice_common::codec::CodecError;
use exifsplice_common::exif::{IfdKind, Tag};
use exifsplice_common::math::MathError;

use crate::Type;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Codec: {0}")]
    Codec(#[from] CodecError),
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("Unknown byte order mark {0:x?}")]
    UnknownByteOrder([u8; 2]),
    #[error("Expected TIFF magic number 42, got {0}")]
    MagicBytesWrong(u16),
    #[error("APP1 payload does not start with the Exif identifier")]
    IdentifierMissing,
    #[error("{0:?} exists already in this IFD")]
    DuplicateTag(Tag),
    #[error("Expected value of type {expected:?}, got {actual:?}")]
    TypeMismatch { expected: Type, actual: Type },
    #[error("Data of length {len} does not fit {count} values of type {data_type:?}")]
    ValueLengthMismatch {
        data_type: Type,
        count: u32,
        len: usize,
    },
    #[error("IFD with {0} entries can not be encoded")]
    TooManyEntries(usize),
    #[error("Section exceeds the 32 bit offset range")]
    SectionTooLarge,
    #[error("Primary IFD changed length from {sized} to {resolved} bytes while resolving pointers")]
    PointerLayoutChanged { sized: u32, resolved: u32 },
    #[error("IFD '{kind:?}' was sized to {sized} bytes but composed to {resolved} bytes")]
    ComposedLengthMismatch {
        kind: IfdKind,
        sized: u32,
        resolved: u32,
    },
    #[error("Next IFD pointer {offset} lies outside the payload of {len} bytes")]
    RemainderOutOfBounds { offset: u32, len: usize },
}

pub(crate) trait ResultExt<T> {
    fn e(self, err: Error) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E> {
    fn e(self, err: Error) -> Result<T> {
        self.map_err(|_| err)
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn e(self, err: Error) -> Result<T> {
        self.ok_or(err)
    }
}
