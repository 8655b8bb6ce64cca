//! Unit conversion utilities.
//!
//! WordprocessingML measures indents in twips (1/20 pt) and font sizes in
//! half-points; the report configuration speaks centimetres and points.

pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_TWIP: i64 = 635;
pub const TWIPS_PER_PT: u32 = 20;

#[inline]
pub fn cm_to_emu(cm: f64) -> i64 {
    (cm * EMUS_PER_CM as f64).round() as i64
}

#[inline]
pub fn emu_to_twip_i64(emu: i64) -> i64 {
    (emu as f64 / EMUS_PER_TWIP as f64).round() as i64
}

/// Centimetres to twips, rounded to the nearest twip.
///
/// 1.25 cm is 709 twips, 2.5 cm is 1417 twips.
#[inline]
pub fn cm_to_twip(cm: f64) -> i32 {
    emu_to_twip_i64(cm_to_emu(cm)) as i32
}

/// Points to half-points (the unit of `w:sz`).
#[inline]
pub fn pt_to_half_points(pt: f64) -> u32 {
    (pt * 2.0).round() as u32
}

#[inline]
pub fn pt_to_twip(pt: f64) -> u32 {
    (pt * TWIPS_PER_PT as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_conversions() {
        assert_eq!(cm_to_twip(1.25), 709);
        assert_eq!(cm_to_twip(2.5), 1417);
        assert_eq!(cm_to_twip(0.0), 0);
    }

    #[test]
    fn test_font_size_conversion() {
        assert_eq!(pt_to_half_points(14.0), 28);
        assert_eq!(pt_to_half_points(10.5), 21);
    }

    #[test]
    fn test_pt_to_twip() {
        assert_eq!(pt_to_twip(0.0), 0);
        assert_eq!(pt_to_twip(12.0), 240);
    }
}
