#![allow(dead_code)]

pub use exifsplice_exif::*;

/// TIFF data with an empty primary IFD
pub fn empty_tiff() -> Vec<u8> {
    let mut data = Vec::new();

    // Big endian
    data.extend_from_slice(b"MM");
    // Magic bits
    data.extend_from_slice(&[0, 42]);
    // Offset
    data.extend_from_slice(&8_u32.to_be_bytes());
    // Number entries
    data.extend_from_slice(&0_u16.to_be_bytes());
    // Next offset
    data.extend_from_slice(&[0, 0, 0, 0]);

    data
}

/// Data chained after the primary IFD of [`tiff_with_thumbnail`]
pub fn thumbnail_ifd() -> Vec<u8> {
    let mut data = Vec::new();

    // Number entries
    data.extend_from_slice(&1_u16.to_be_bytes());
    // Compression, JPEG
    data.extend_from_slice(&0x103_u16.to_be_bytes());
    data.extend_from_slice(&3_u16.to_be_bytes());
    data.extend_from_slice(&1_u32.to_be_bytes());
    data.extend_from_slice(&[0, 6, 0, 0]);
    // Next offset
    data.extend_from_slice(&[0, 0, 0, 0]);
    // Thumbnail
    data.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xD9]);

    data
}

/// TIFF data with an empty primary IFD and a 1st IFD at offset 14
pub fn tiff_with_thumbnail() -> Vec<u8> {
    let mut data = empty_tiff();
    let next = data.len() - 4;
    data[next..].copy_from_slice(&14_u32.to_be_bytes());
    data.extend(thumbnail_ifd());
    data
}

pub fn payload(tiff: &[u8]) -> Vec<u8> {
    let mut data = EXIF_IDENTIFIER_STRING.to_vec();
    data.extend_from_slice(tiff);
    data
}

/// Metadata with entries in all three IFDs
pub fn sample_metadata() -> MetaData {
    let primary = [
        Entry::ascii(Tag::MAKE, "Test"),
        Entry::ascii(Tag::MODEL, "Model 2"),
        Entry::short(Tag::ORIENTATION, 1),
        Entry::rational(Tag::X_RESOLUTION, 72, 1),
    ]
    .into_iter()
    .collect();

    let exif = [
        Entry::ascii(Tag::DATE_TIME_ORIGINAL, "2024:01:02 03:04:05"),
        Entry::rational(Tag::EXPOSURE_TIME, 1, 60),
        Entry::short(Tag::PHOTOGRAPHIC_SENSITIVITY, 400),
    ]
    .into_iter()
    .collect();

    let gps = [
        Entry::ascii(Tag::GPS_LATITUDE_REF, "N"),
        Entry::new(
            Tag::GPS_LATITUDE,
            Value::Rational(vec![(52, 1), (31, 1), (1234, 100)]),
        ),
        Entry::new(Tag::GPS_ALTITUDE_REF, Value::Byte(vec![0])),
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
