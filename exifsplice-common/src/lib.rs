//! Building blocks shared by the exifsplice crates
//!
//! Contains the endian-aware integer codec used for every TIFF field, the
//! identifiers for Exif tags and directories, and checked arithmetic helpers.

pub mod codec;
pub mod exif;
pub mod math;
pub mod utils;
