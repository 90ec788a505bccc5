//! Exif metadata as image file directories
//!
//! [`MetaData`] holds the primary IFD with its optional Exif and GPS
//! sub-IFDs. It can be decoded from an APP1 payload and composed back into a
//! new payload with [`compose_app1_payload`].

pub mod error;
mod entry;
mod ifd;
mod metadata;
mod raw;
mod type_;
mod value;

pub use entry::Entry;
pub use error::{Error, Result};
pub use ifd::Ifd;
pub use metadata::{
    compose_app1_payload, ComposeOptions, MetaData, EXIF_IDENTIFIER_STRING, TIFF_HEADER_LEN,
};
pub use type_::Type;
pub use value::Value;

pub use exifsplice_common::codec::Endian;
pub use exifsplice_common::exif::{IfdKind, Tag};
