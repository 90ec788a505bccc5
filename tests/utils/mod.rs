#![allow(dead_code)]

use exifsplice::exif::{Entry, Ifd, MetaData, Tag, Value, EXIF_IDENTIFIER_STRING};
use tracing_subscriber::prelude::*;

/// Log output controlled via `RUST_LOG`
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_test_writer(),
        )
        .try_init();
}

/// TIFF data with an empty primary IFD
pub fn empty_tiff() -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(b"MM");
    data.extend_from_slice(&[0, 42]);
    data.extend_from_slice(&8_u32.to_be_bytes());
    // Number entries
    data.extend_from_slice(&0_u16.to_be_bytes());
    // Next offset
    data.extend_from_slice(&[0, 0, 0, 0]);

    data
}

/// 1st IFD with an embedded thumbnail
pub fn thumbnail_ifd() -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(&1_u16.to_be_bytes());
    // Compression, JPEG
    data.extend_from_slice(&0x103_u16.to_be_bytes());
    data.extend_from_slice(&3_u16.to_be_bytes());
    data.extend_from_slice(&1_u32.to_be_bytes());
    data.extend_from_slice(&[0, 6, 0, 0]);
    data.extend_from_slice(&[0, 0, 0, 0]);
    data.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xD9]);

    data
}

/// TIFF data with an empty primary IFD chained to [`thumbnail_ifd`]
pub fn tiff_with_thumbnail() -> Vec<u8> {
    let mut data = empty_tiff();
    data.truncate(10);
    data.extend_from_slice(&14_u32.to_be_bytes());
    data.extend(thumbnail_ifd());
    data
}

pub fn app1_payload(tiff: &[u8]) -> Vec<u8> {
    let mut data = EXIF_IDENTIFIER_STRING.to_vec();
    data.extend_from_slice(tiff);
    data
}

pub fn segment(marker: u8, data: &[u8]) -> Vec<u8> {
    let mut segment = vec![0xFF, marker];
    let len = u16::try_from(data.len() + 2).unwrap();
    segment.extend_from_slice(&len.to_be_bytes());
    segment.extend_from_slice(data);
    segment
}

/// Everything following the APP1 segment in [`jpeg`]
pub fn image_tail() -> Vec<u8> {
    let mut data = Vec::new();

    data.extend(segment(0xDB, &[0, 1, 2, 3, 4, 5, 6, 7]));
    data.extend(segment(0xC0, &[8, 0, 1, 0, 1, 1, 1, 0x11, 0]));
    data.extend(segment(0xDA, &[1, 1, 0, 0, 0x3F, 0]));
    // Entropy coded data
    data.extend_from_slice(&[0xAB, 0xFF, 0x00, 0xCD, 0xFF, 0xD0, 0xEF]);
    data.extend_from_slice(&[0xFF, 0xD9]);

    data
}

/// JPEG image with SOI directly followed by an APP1 segment holding `tiff`
pub fn jpeg(tiff: &[u8]) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    data.extend(segment(0xE1, &app1_payload(tiff)));
    data.extend(image_tail());
    data
}

/// Metadata with entries in all three IFDs
pub fn sample_metadata() -> MetaData {
    let primary = [
        Entry::ascii(Tag::MAKE, "Test"),
        Entry::ascii(Tag::MODEL, "Model 2"),
        Entry::short(Tag::ORIENTATION, 6),
        Entry::rational(Tag::X_RESOLUTION, 72, 1),
        Entry::rational(Tag::Y_RESOLUTION, 72, 1),
        Entry::short(Tag::RESOLUTION_UNIT, 2),
    ]
    .into_iter()
    .collect();

    let exif = [
        Entry::ascii(Tag::DATE_TIME_ORIGINAL, "2024:01:02 03:04:05"),
        Entry::rational(Tag::EXPOSURE_TIME, 1, 125),
        Entry::rational(Tag::F_NUMBER, 28, 10),
        Entry::short(Tag::PHOTOGRAPHIC_SENSITIVITY, 100),
        Entry::new(Tag::USER_COMMENT, Value::Undefined(b"ASCII\0\0\0hello".to_vec())),
    ]
    .into_iter()
    .collect();

    let gps = [
        Entry::ascii(Tag::GPS_LATITUDE_REF, "N"),
        Entry::new(
            Tag::GPS_LATITUDE,
            Value::Rational(vec![(52, 1), (31, 1), (1234, 100)]),
        ),
        Entry::ascii(Tag::GPS_LONGITUDE_REF, "E"),
        Entry::new(
            Tag::GPS_LONGITUDE,
            Value::Rational(vec![(13, 1), (24, 1), (0, 1)]),
        ),
        Entry::new(Tag::GPS_ALTITUDE_REF, Value::Byte(vec![0])),
        Entry::rational(Tag::GPS_ALTITUDE, 34, 1),
    ]
    .into_iter()
    .collect();

    MetaData {
        primary,
        exif: Some(exif),
        gps: Some(gps),
    }
}

/// Entries without the pointers to sub-IFDs
pub fn plain_entries(ifd: &Ifd) -> Vec<&Entry> {
    ifd.entries()
        .filter(|x| !x.tag.is_sub_ifd_pointer())
        .collect()
}

/// Length of the APP1 payload stored in the length field
pub fn app1_payload_len(image: &[u8]) -> usize {
    usize::from(u16::from_be_bytes([image[4], image[5]])) - 2
}
