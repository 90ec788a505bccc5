mod error;

use std::ops::Range;

pub use error::Error;

pub const EXIF_IDENTIFIER_STRING: &[u8] = b"Exif\0\0";

pub const MARKER_START: u8 = 0xFF;

/// SOI marker including the marker start
pub const MAGIC_BYTES: &[u8] = &[MARKER_START, 0xD8];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    marker: Marker,
    pos: usize,
    data: &'a [u8],
}

impl<'a> Segment<'a> {
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Position of the length field
    ///
    /// For markers without a length field, this is the position directly
    /// after the marker.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Position of the first data byte
    pub fn data_pos(&self) -> usize {
        if self.marker.is_standalone() {
            self.pos
        } else {
            self.pos.saturating_add(2)
        }
    }

    /// Segment data without marker and length field
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Range of the data within the image
    pub fn data_range(&self) -> Range<usize> {
        let start = self.data_pos();
        start..start.saturating_add(self.data.len())
    }
}

#[derive(Debug, Clone)]
pub struct Jpeg<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Jpeg<'a> {
    /// Lists the segments of `data`
    ///
    /// Scanning stops after the SOS segment or at an EOI marker. The entropy
    /// coded data following SOS are not inspected.
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        let segments = Self::find_segments(data)?;
        Ok(Self { segments })
    }

    /// Checks if passed data have the JPEG SOI marker
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// List all segments in their order of appearance
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// List all segments with the given marker
    pub fn segments_marker(&self, marker: Marker) -> impl Iterator<Item = &Segment<'a>> {
        self.segments.iter().filter(move |x| x.marker == marker)
    }

    /// APP1 segments carrying Exif data
    pub fn exif(&self) -> impl Iterator<Item = &Segment<'a>> {
        self.segments_marker(Marker::APP1)
            .filter(|x| x.data().starts_with(EXIF_IDENTIFIER_STRING))
    }

    /// TIFF data of APP1 segments carrying Exif data
    pub fn exif_data(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.exif()
            .filter_map(|x| x.data().get(EXIF_IDENTIFIER_STRING.len()..))
    }

    fn find_segments(data: &'a [u8]) -> Result<Vec<Segment<'a>>, Error> {
        let soi = data.get(..MAGIC_BYTES.len()).ok_or(Error::UnexpectedEof)?;
        if soi != MAGIC_BYTES {
            return Err(Error::MissingSoi);
        }

        let mut pos = MAGIC_BYTES.len();
        let mut segments = Vec::new();
        loop {
            // Read tag
            let marker_start = *data.get(pos).ok_or(Error::UnexpectedEof)?;
            if marker_start != MARKER_START {
                return Err(Error::InvalidMarkerStart(marker_start));
            }
            pos = next(pos, 1)?;

            // Any number of fill bytes can precede a marker
            while data.get(pos) == Some(&MARKER_START) {
                pos = next(pos, 1)?;
            }

            let marker = Marker::from(*data.get(pos).ok_or(Error::UnexpectedEof)?);
            pos = next(pos, 1)?;

            if marker.is_standalone() {
                tracing::debug!("Found standalone marker {marker:?} at {pos}");
                segments.push(Segment {
                    marker,
                    pos,
                    data: &[],
                });

                if marker == Marker::EOI {
                    break;
                }
                continue;
            }

            // Read len
            let len_field = data
                .get(pos..next(pos, 2)?)
                .ok_or(Error::UnexpectedEof)?;
            let len = u16::from_be_bytes([len_field[0], len_field[1]]);
            if len < 2 {
                return Err(Error::InvalidLength(len));
            }

            let end = next(pos, usize::from(len))?;
            let segment_data = data.get(next(pos, 2)?..end).ok_or(Error::UnexpectedEof)?;

            tracing::debug!("Found segment {marker:?} at {pos} with length {len}");

            segments.push(Segment {
                marker,
                pos,
                data: segment_data,
            });

            if marker == Marker::SOS {
                break;
            }
            pos = end;
        }

        Ok(segments)
    }
}

fn next(pos: usize, n: usize) -> Result<usize, Error> {
    pos.checked_add(n).ok_or(Error::UnexpectedEof)
}

exifsplice_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub enum Marker {
        /// Temporary private use in arithmetic coding
        TEM = 0x01,
        SOF0 = 0xC0,
        SOF1 = 0xC1,
        SOF2 = 0xC2,
        /// Define Huffman table
        DHT = 0xC4,
        RST0 = 0xD0,
        RST1 = 0xD1,
        RST2 = 0xD2,
        RST3 = 0xD3,
        RST4 = 0xD4,
        RST5 = 0xD5,
        RST6 = 0xD6,
        RST7 = 0xD7,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        DQT = 0xDB,
        /// Define restart interval
        DRI = 0xDD,
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        APP3 = 0xE3,
        APP4 = 0xE4,
        APP5 = 0xE5,
        APP6 = 0xE6,
        APP7 = 0xE7,
        APP8 = 0xE8,
        /// Comment
        COM = 0xFE,
    }
);

impl Marker {
    /// Markers that are not followed by a length field
    pub fn is_standalone(self) -> bool {
        matches!(u8::from(self), 0x01 | 0xD0..=0xD9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone() {
        assert!(Marker::SOI.is_standalone());
        assert!(Marker::RST3.is_standalone());
        assert!(Marker::EOI.is_standalone());
        assert!(Marker::TEM.is_standalone());
        assert!(!Marker::APP1.is_standalone());
        assert!(!Marker::SOS.is_standalone());
    }

    #[test]
    fn marker_conversion() {
        assert_eq!(Marker::from(0xE1), Marker::APP1);
        assert_eq!(u8::from(Marker::COM), 0xFE);
        assert_eq!(Marker::from(0xEF), Marker::Unknown(0xEF));
    }
}
