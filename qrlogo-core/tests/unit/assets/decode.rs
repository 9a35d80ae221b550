use std::io::Cursor;

use super::*;

fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_logo_keeps_straight_alpha() {
    let img = RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let decoded = decode_logo(&png_bytes(&img)).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.as_raw().as_slice(), &[100, 50, 200, 128]);
}

#[test]
fn decode_logo_rejects_garbage() {
    let err = decode_logo(b"definitely not an image").unwrap_err();
    assert!(matches!(err, QrLogoError::Decode(_)));
}

#[test]
fn open_logo_reads_file_and_reports_missing() {
    let dir = std::path::PathBuf::from("target").join("unit_open_logo");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("logo.png");
    let img = RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]));
    std::fs::write(&path, png_bytes(&img)).unwrap();

    assert_eq!(open_logo(&path).unwrap(), img);

    let missing = open_logo(&dir.join("nope.png")).unwrap_err();
    assert!(matches!(missing, QrLogoError::Other(_)));
    assert!(missing.to_string().contains("nope.png"));

    let bad = dir.join("bad.png");
    std::fs::write(&bad, b"garbage").unwrap();
    let err = open_logo(&bad).unwrap_err();
    assert!(matches!(err, QrLogoError::Decode(ref m) if m.contains("bad.png")));
}
