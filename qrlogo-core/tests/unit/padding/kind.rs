use super::*;

#[test]
fn names_round_trip() {
    for kind in PaddingKind::ALL {
        assert_eq!(kind.as_str().parse::<PaddingKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn unknown_name_is_reported() {
    let err = "hexagon".parse::<PaddingKind>().unwrap_err();
    assert!(matches!(err, QrLogoError::UnknownPadding(ref n) if n == "hexagon"));
}

#[test]
fn names_are_case_sensitive() {
    assert!("Square".parse::<PaddingKind>().is_err());
}

#[test]
fn default_is_dilate() {
    assert_eq!(PaddingKind::default(), PaddingKind::Dilate);
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(
        serde_json::to_string(&PaddingKind::Circle).unwrap(),
        "\"circle\""
    );
    let kind: PaddingKind = serde_json::from_str("\"none\"").unwrap();
    assert_eq!(kind, PaddingKind::None);
    let err = serde_json::from_str::<PaddingKind>("\"star\"").unwrap_err();
    assert!(err.to_string().contains("unknown padding type 'star'"));
}
