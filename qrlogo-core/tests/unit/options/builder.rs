use super::*;
use crate::foundation::error::QrLogoError;

#[test]
fn builder_starts_from_defaults() {
    assert_eq!(
        LogoOptionsBuilder::new().build().unwrap(),
        LogoOptions::default()
    );
}

#[test]
fn setters_accumulate() {
    let o = LogoOptions::builder()
        .background(Color::rgb(1, 2, 3))
        .code_color(Color::rgb(4, 5, 6))
        .disable_border(true)
        .logo_coverage(0.25)
        .padding(PaddingKind::Square)
        .padding_weight(7)
        .qr_size(1024)
        .build()
        .unwrap();
    assert_eq!(o.background, Color::rgb(1, 2, 3));
    assert_eq!(o.code_color, Color::rgb(4, 5, 6));
    assert!(o.disable_border);
    assert_eq!(o.logo_coverage, 0.25);
    assert_eq!(o.padding, PaddingKind::Square);
    assert_eq!(o.padding_weight, 7);
    assert_eq!(o.qr_size, 1024);
}

#[test]
fn later_setter_wins() {
    let o = LogoOptions::builder()
        .qr_size(10)
        .qr_size(300)
        .build()
        .unwrap();
    assert_eq!(o.qr_size, 300);
}

#[test]
fn from_options_keeps_base_values() {
    let base = LogoOptions {
        padding: PaddingKind::Circle,
        ..LogoOptions::default()
    };
    let o = LogoOptionsBuilder::from_options(base)
        .padding_weight(5)
        .build()
        .unwrap();
    assert_eq!(o.padding, PaddingKind::Circle);
    assert_eq!(o.padding_weight, 5);
}

#[test]
fn build_validates() {
    let err = LogoOptions::builder().qr_size(0).build().unwrap_err();
    assert!(matches!(err, QrLogoError::Validation(_)));
}
