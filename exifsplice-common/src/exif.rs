/// Numeric identifier of an IFD entry
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub u16);

impl Tag {
    pub const GPS_LATITUDE_REF: Self = Self(0x1);
    pub const GPS_LATITUDE: Self = Self(0x2);
    pub const GPS_LONGITUDE_REF: Self = Self(0x3);
    pub const GPS_LONGITUDE: Self = Self(0x4);
    pub const GPS_ALTITUDE_REF: Self = Self(0x5);
    pub const GPS_ALTITUDE: Self = Self(0x6);

    pub const COMPRESSION: Self = Self(0x103);
    pub const IMAGE_DESCRIPTION: Self = Self(0x10E);
    pub const MAKE: Self = Self(0x10F);
    pub const MODEL: Self = Self(0x110);
    pub const ORIENTATION: Self = Self(0x112);
    pub const X_RESOLUTION: Self = Self(0x11A);
    pub const Y_RESOLUTION: Self = Self(0x11B);
    pub const RESOLUTION_UNIT: Self = Self(0x128);
    pub const SOFTWARE: Self = Self(0x131);
    pub const DATE_TIME: Self = Self(0x132);
    pub const JPEG_INTERCHANGE_FORMAT: Self = Self(0x201);
    pub const JPEG_INTERCHANGE_FORMAT_LENGTH: Self = Self(0x202);

    pub const EXPOSURE_TIME: Self = Self(0x829A);
    pub const F_NUMBER: Self = Self(0x829D);
    pub const PHOTOGRAPHIC_SENSITIVITY: Self = Self(0x8827);
    pub const DATE_TIME_ORIGINAL: Self = Self(0x9003);
    pub const FOCAL_LENGTH: Self = Self(0x920A);
    pub const MAKER_NOTE: Self = Self(0x927C);
    pub const USER_COMMENT: Self = Self(0x9286);

    pub const EXIF_IFD_POINTER: Self = Self(0x8769);
    pub const GPS_INFO_IFD_POINTER: Self = Self(0x8825);
    pub const INTEROPERABILITY_IFD_POINTER: Self = Self(0xA005);

    /// Sub-IFD this tag points to when stored in the primary IFD
    ///
    /// See 4.6.3 in v3.0 standard
    pub fn sub_ifd(&self) -> Option<IfdKind> {
        match *self {
            Self::EXIF_IFD_POINTER => Some(IfdKind::Exif),
            Self::GPS_INFO_IFD_POINTER => Some(IfdKind::Gps),
            _ => None,
        }
    }

    pub fn is_sub_ifd_pointer(&self) -> bool {
        self.sub_ifd().is_some()
    }
}

impl From<u16> for Tag {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// Image file directories that are edited
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IfdKind {
    Primary,
    Exif,
    Gps,
}

impl IfdKind {
    /// Tag of the primary IFD entry holding the offset of this IFD
    pub fn pointer_tag(self) -> Option<Tag> {
        match self {
            Self::Primary => None,
            Self::Exif => Some(Tag::EXIF_IFD_POINTER),
            Self::Gps => Some(Tag::GPS_INFO_IFD_POINTER),
        }
    }
}
