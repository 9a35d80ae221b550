pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Offset that centres `inner` inside `outer` along one axis.
///
/// Integer division truncating toward zero, so an odd leftover pixel lands on the far side and an
/// oversized `inner` yields a negative offset.
pub fn centered_offset(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)) / 2
}

/// Side length of the logo area for a square code of `qr_size` pixels covering `coverage` of
/// its area.
pub fn padded_size(qr_size: u32, coverage: f64) -> f64 {
    let side = f64::from(qr_size);
    (side * side * coverage).sqrt()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
