use exifsplice_jpeg::*;

fn segment(marker: u8, data: &[u8]) -> Vec<u8> {
    let mut segment = vec![0xFF, marker];
    let len = u16::try_from(data.len() + 2).unwrap();
    segment.extend_from_slice(&len.to_be_bytes());
    segment.extend_from_slice(data);
    segment
}

fn image() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];

    let mut exif = EXIF_IDENTIFIER_STRING.to_vec();
    exif.extend_from_slice(b"MM\0\x2a\0\0\0\x08\0\0\0\0\0\0");
    data.extend(segment(0xE1, &exif));
    data.extend(segment(0xDB, &[0; 5]));
    data.extend(segment(0xDA, &[1, 2, 3]));
    // Scan data
    data.extend_from_slice(&[0x12, 0xFF, 0x00, 0x34]);
    data.extend_from_slice(&[0xFF, 0xD9]);

    data
}

#[test]
fn find_segments() {
    let data = image();
    let jpeg = Jpeg::new(&data).unwrap();

    let markers = jpeg
        .segments()
        .iter()
        .map(|x| x.marker())
        .collect::<Vec<_>>();
    assert_eq!(markers, [Marker::APP1, Marker::DQT, Marker::SOS]);

    let app1 = &jpeg.segments()[0];
    assert_eq!(app1.pos(), 4);
    assert_eq!(app1.data_pos(), 6);
    assert_eq!(app1.data().len(), 20);
    assert_eq!(&data[app1.data_range()], app1.data());

    let sos = jpeg.segments_marker(Marker::SOS).next().unwrap();
    assert_eq!(sos.data(), [1, 2, 3]);
}

#[test]
fn exif() {
    let data = image();
    let jpeg = Jpeg::new(&data).unwrap();

    assert_eq!(jpeg.exif().count(), 1);
    let tiff = jpeg.exif_data().next().unwrap();
    assert!(tiff.starts_with(b"MM\0\x2a"));
    assert_eq!(tiff.len(), 14);
}

#[test]
fn no_exif() {
    let mut data = vec![0xFF, 0xD8];
    data.extend(segment(0xE0, b"JFIF\0\x01\x02"));
    data.extend(segment(0xE1, b"http://ns.adobe.com/xap/1.0/\0"));
    data.extend(segment(0xDA, &[]));

    let jpeg = Jpeg::new(&data).unwrap();
    assert_eq!(jpeg.segments_marker(Marker::APP1).count(), 1);
    assert_eq!(jpeg.exif().count(), 0);
}

#[test]
fn fill_bytes_and_standalone_markers() {
    let mut data = vec![0xFF, 0xD8];
    data.extend_from_slice(&[0xFF, 0xFF, 0xFF]);
    data.extend(segment(0xFE, b"comment"));
    data.extend_from_slice(&[0xFF, 0xD0]);
    data.extend_from_slice(&[0xFF, 0xD9]);
    // Not read
    data.extend_from_slice(&[0x00, 0x00]);

    let jpeg = Jpeg::new(&data).unwrap();
    let markers = jpeg
        .segments()
        .iter()
        .map(|x| x.marker())
        .collect::<Vec<_>>();
    assert_eq!(markers, [Marker::COM, Marker::RST0, Marker::EOI]);
    assert_eq!(jpeg.segments()[0].data(), b"comment");
    assert!(jpeg.segments()[1].data().is_empty());
}

#[test]
fn filetype() {
    assert!(Jpeg::is_filetype(&image()));
    assert!(!Jpeg::is_filetype(b"\x89PNG\r\n\x1a\n"));
    assert!(!Jpeg::is_filetype(&[0xFF]));
}

#[test]
fn errors() {
    assert_eq!(Jpeg::new(&[0xFF]).unwrap_err(), Error::UnexpectedEof);
    assert_eq!(Jpeg::new(&[0xFF, 0xD9]).unwrap_err(), Error::MissingSoi);
    assert_eq!(
        Jpeg::new(&[0xFF, 0xD8, 0x00, 0xE1]).unwrap_err(),
        Error::InvalidMarkerStart(0)
    );
    assert_eq!(
        Jpeg::new(&[0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x01]).unwrap_err(),
        Error::InvalidLength(1)
    );

    // Segment longer than data
    let mut data = image();
    data.truncate(10);
    assert_eq!(Jpeg::new(&data).unwrap_err(), Error::UnexpectedEof);

    // No SOS or EOI
    let mut data = vec![0xFF, 0xD8];
    data.extend(segment(0xE0, b"JFIF\0"));
    assert_eq!(Jpeg::new(&data).unwrap_err(), Error::UnexpectedEof);
}
