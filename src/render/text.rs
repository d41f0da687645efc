//! Label font selection
//!
//! Mono fonts come in fixed sizes, so a scaled text size picks the ProFont
//! face whose glyph height is nearest to it.

use embedded_graphics::mono_font::MonoFont;
use profont::{
    PROFONT_10_POINT, PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT,
    PROFONT_7_POINT, PROFONT_9_POINT,
};

/// Available faces, smallest first
const FONTS: [&MonoFont<'static>; 7] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Font whose glyph height is closest to `px`. Ties go to the smaller face.
pub fn font_for_size(px: f32) -> &'static MonoFont<'static> {
    FONTS
        .iter()
        .copied()
        .min_by(|a, b| {
            let da = (a.character_size.height as f32 - px).abs();
            let db = (b.character_size.height as f32 - px).abs();
            da.total_cmp(&db)
        })
        .unwrap_or(&PROFONT_9_POINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiny_size_uses_smallest_face() {
        assert_eq!(
            font_for_size(1.0).character_size,
            PROFONT_7_POINT.character_size
        );
    }

    #[test]
    fn test_huge_size_uses_largest_face() {
        assert_eq!(
            font_for_size(500.0).character_size,
            PROFONT_24_POINT.character_size
        );
    }

    #[test]
    fn test_font_height_grows_with_size() {
        let mut prev = 0;
        for px in [6.0f32, 9.0, 12.0, 18.0, 27.0, 36.0] {
            let height = font_for_size(px).character_size.height;
            assert!(height >= prev, "{px}px");
            prev = height;
        }
    }
}
