/// Hue wheel color in ABGR for the `hue`-th body (wraps every 360).
pub(super) fn hue_color(hue: u32) -> u32 {
    let hue = hue % 360;
    let ramp = 1.0 - ((hue as f32 / 60.0) % 2.0 - 1.0).abs();
    let level = (255.0 * ramp) as u32;
    match hue / 60 {
        0 => 0xFF00_00FF + (level << 8),
        1 => 0xFF00_FF00 + level,
        2 => 0xFF00_FF00 + (level << 16),
        3 => 0xFFFF_0000 + (level << 8),
        4 => 0xFFFF_0000 + level,
        _ => 0xFF00_00FF + (level << 16),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_hits_the_primaries() {
        assert_eq!(hue_color(0), 0xFF00_00FF);
        assert_eq!(hue_color(60), 0xFF00_FFFF);
        assert_eq!(hue_color(120), 0xFF00_FF00);
        assert_eq!(hue_color(240), 0xFFFF_0000);
        assert_eq!(hue_color(360), hue_color(0));
    }

    #[test]
    fn every_color_is_opaque() {
        assert!((0..360).all(|h| hue_color(h) >> 24 == 0xFF));
    }
}
