mod compose;
mod decode;

use exifsplice_common::exif::IfdKind;

pub use compose::{compose_app1_payload, ComposeOptions, TIFF_HEADER_LEN};

use crate::Ifd;

/// Identifier at the start of an Exif APP1 payload
pub const EXIF_IDENTIFIER_STRING: &[u8] = b"Exif\0\0";

/// Exif record of one image
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaData {
    pub primary: Ifd,
    pub exif: Option<Ifd>,
    pub gps: Option<Ifd>,
}

impl MetaData {
    pub fn new(primary: Ifd) -> Self {
        Self {
            primary,
            ..Default::default()
        }
    }

    pub fn ifd(&self, kind: IfdKind) -> Option<&Ifd> {
        match kind {
            IfdKind::Primary => Some(&self.primary),
            IfdKind::Exif => self.exif.as_ref(),
            IfdKind::Gps => self.gps.as_ref(),
        }
    }

    pub fn ifd_mut(&mut self, kind: IfdKind) -> Option<&mut Ifd> {
        match kind {
            IfdKind::Primary => Some(&mut self.primary),
            IfdKind::Exif => self.exif.as_mut(),
            IfdKind::Gps => self.gps.as_mut(),
        }
    }
}
