use image::{Rgba, RgbaImage};

use super::*;

fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| Rgba([10, 20, 30, ((x * 37 + y * 11) % 256) as u8]))
}

#[test]
fn get_matches_source_alpha_everywhere() {
    let img = gradient(7, 5);
    let m = AlphaMatrix::from_image(&img);
    assert_eq!(m.width(), 7);
    assert_eq!(m.height(), 5);
    assert_eq!(m.values().len(), 35);
    for (x, y, px) in img.enumerate_pixels() {
        assert_eq!(m.get(x, y), u32::from(px.0[3]) * 257);
    }
}

#[test]
fn opaque_pixel_is_max_alpha() {
    let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
    assert_eq!(AlphaMatrix::from_image(&img).get(0, 0), MAX_ALPHA);
}

#[test]
fn cutoff_splits_8bit_alpha_at_128() {
    assert!(127 * 257 <= ALPHA_CUTOFF);
    assert!(128 * 257 > ALPHA_CUTOFF);
}

#[test]
fn checked_get_reports_out_of_bounds() {
    let m = AlphaMatrix::from_image(&gradient(3, 2));
    assert!(m.checked_get(2, 1).is_some());
    assert_eq!(m.checked_get(3, 0), None);
    assert_eq!(m.checked_get(0, 2), None);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn get_out_of_bounds_panics() {
    let m = AlphaMatrix::from_image(&gradient(3, 2));
    let _ = m.get(3, 0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn set_out_of_bounds_panics() {
    let mut m = AlphaMatrix::from_image(&gradient(3, 2));
    m.set(0, 2, 1);
}

#[test]
fn clone_snapshots_mutations_but_reload_resets() {
    let img = gradient(4, 4);
    let mut m = AlphaMatrix::from_image(&img);
    m.set(1, 1, 42);

    let snapshot = m.clone();
    assert_eq!(snapshot.get(1, 1), 42);

    let fresh = m.reloaded();
    assert_eq!(fresh.get(1, 1), u32::from(img.get_pixel(1, 1).0[3]) * 257);
}

#[test]
fn empty_image_has_no_values() {
    let m = AlphaMatrix::from_image(&RgbaImage::new(0, 0));
    assert!(m.values().is_empty());
    assert!(!m.contains(0, 0));
}
