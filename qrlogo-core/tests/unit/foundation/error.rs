use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(QrLogoError::decode("x").to_string().contains("decode error:"));
    assert!(QrLogoError::encode("x").to_string().contains("encode error:"));
    assert!(
        QrLogoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        QrLogoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn unknown_padding_names_the_offender() {
    let msg = QrLogoError::unknown_padding("hexagon").to_string();
    assert!(msg.contains("'hexagon'"));
    assert!(msg.contains("dilate"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = QrLogoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
