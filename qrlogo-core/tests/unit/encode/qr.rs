use super::*;

fn req(size: u32, border: bool) -> EncodeRequest {
    EncodeRequest {
        size,
        background: Color::WHITE,
        foreground: Color::BLACK,
        border,
    }
}

#[test]
fn output_is_requested_square() {
    let img = QrCodeEncoder
        .encode("https://example.com", &req(2048, true))
        .unwrap();
    assert_eq!(img.dimensions(), (2048, 2048));
    // quiet zone corner
    assert_eq!(*img.get_pixel(0, 0), Color::WHITE.to_rgba());
}

#[test]
fn only_configured_colours_are_used() {
    let r = EncodeRequest {
        size: 300,
        background: Color::rgb(250, 240, 230),
        foreground: Color::rgb(10, 20, 30),
        border: true,
    };
    let img = QrCodeEncoder.encode("hello", &r).unwrap();
    let (bg, fg) = (r.background.to_rgba(), r.foreground.to_rgba());
    assert!(img.pixels().all(|px| *px == bg || *px == fg));
    assert!(img.pixels().any(|px| *px == fg));
}

#[test]
fn tiny_size_grows_to_one_pixel_per_module() {
    let bordered = QrCodeEncoder.encode("hello", &req(1, true)).unwrap();
    let bare = QrCodeEncoder.encode("hello", &req(1, false)).unwrap();
    assert_eq!(bordered.width(), bare.width() + 2 * QUIET_ZONE_MODULES);
    assert!(bare.width() >= 21);
    // finder pattern corner module is always dark
    assert_eq!(*bare.get_pixel(0, 0), Color::BLACK.to_rgba());
}

#[test]
fn border_flag_moves_the_finder_pattern() {
    let bordered = QrCodeEncoder.encode("hello", &req(1, true)).unwrap();
    let q = QUIET_ZONE_MODULES;
    assert_eq!(*bordered.get_pixel(q - 1, q - 1), Color::WHITE.to_rgba());
    assert_eq!(*bordered.get_pixel(q, q), Color::BLACK.to_rgba());
}

#[test]
fn oversized_payload_is_an_encode_error() {
    let payload = "x".repeat(4000);
    let err = QrCodeEncoder.encode(&payload, &req(512, true)).unwrap_err();
    assert!(matches!(err, QrLogoError::Encode(_)));
}
