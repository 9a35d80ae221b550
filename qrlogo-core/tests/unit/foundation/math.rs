use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn centered_offset_truncates() {
    assert_eq!(centered_offset(2048, 915), 566);
    assert_eq!(centered_offset(10, 10), 0);
    assert_eq!(centered_offset(10, 7), 1);
    assert_eq!(centered_offset(7, 10), -1);
}

#[test]
fn padded_size_matches_area_fraction() {
    let side = padded_size(2048, 0.2);
    assert!((side - 915.9).abs() < 0.1);
    assert_eq!(side.floor() as u32, 915);
    assert_eq!(padded_size(100, 1.0), 100.0);
}
