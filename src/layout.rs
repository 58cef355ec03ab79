use crate::segment::{Dimensions, FontRange};

const AVG_GLYPH_WIDTH_RATIO: f64 = 0.6;
const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Approximate the rendered extent of `text` at `font_size`.
///
/// Width comes from the longest line at 0.6em per glyph, height from the line
/// count at 1.2em. No text shaping is involved; the constants are fixed so
/// font-fit decisions stay deterministic across runs.
pub fn estimate_size(text: &str, font_size: f64) -> Dimensions {
    let glyph_width = font_size * AVG_GLYPH_WIDTH_RATIO;
    let line_height = font_size * LINE_HEIGHT_RATIO;

    let mut lines = 0usize;
    let mut longest = 0usize;
    for line in text.split('\n') {
        lines += 1;
        longest = longest.max(line.chars().count());
    }

    Dimensions {
        width: longest as f64 * glyph_width,
        height: lines as f64 * line_height,
    }
}

/// Pick the largest legible font size in `range` whose estimated extent fits
/// a `box_width` x `box_height` box.
///
/// Phase 1 descends from the default in steps of 2 and keeps the first size
/// that fits. Phase 2 runs only when phase 1 ended back at the default
/// (either it fit immediately or nothing smaller did) and grows in steps of 2
/// until the estimate stops fitting. The two-phase shape is not equivalent to
/// a single monotonic search and is relied on for borderline inputs.
pub fn fit_font_size(text: &str, box_width: f64, box_height: f64, range: &FontRange) -> f64 {
    let fits = |size: f64| {
        let dims = estimate_size(text, size);
        dims.width <= box_width && dims.height <= box_height
    };

    let mut optimal = range.default;
    let mut size = range.default;
    while size >= range.min {
        if fits(size) {
            optimal = size;
            break;
        }
        size -= 2.0;
    }

    if optimal == range.default {
        let mut size = range.default + 2.0;
        while size <= range.max {
            if !fits(size) {
                break;
            }
            optimal = size;
            size += 2.0;
        }
    }

    optimal
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY_RANGE: FontRange = FontRange {
        min: 12.0,
        max: 24.0,
        default: 18.0,
    };

    #[test]
    fn single_line_estimate() {
        let dims = estimate_size("Hello", 10.0);
        assert_eq!(dims.width, 30.0);
        assert_eq!(dims.height, 12.0);
    }

    #[test]
    fn width_tracks_longest_line() {
        let dims = estimate_size("ab\nabcd\nabc", 10.0);
        assert_eq!(dims.width, 24.0);
        assert_eq!(dims.height, 36.0);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let dims = estimate_size("", 10.0);
        assert_eq!(dims.width, 0.0);
        assert_eq!(dims.height, 12.0);
    }

    #[test]
    fn multibyte_glyphs_count_once() {
        let dims = estimate_size("héllo", 10.0);
        assert_eq!(dims.width, 30.0);
    }

    #[test]
    fn short_text_grows_to_max() {
        // "short" fits at the default, so phase 2 keeps growing: 20, 22, 24
        // all fit within 620x340.
        assert_eq!(fit_font_size("short", 620.0, 340.0, &BODY_RANGE), 24.0);
    }

    #[test]
    fn growth_stops_at_first_non_fit() {
        // 50 glyphs: fits at 18 (540pt) and 20 (600pt) but not 22 (660pt).
        let text = "a".repeat(50);
        assert_eq!(fit_font_size(&text, 620.0, 340.0, &BODY_RANGE), 20.0);
    }

    #[test]
    fn long_text_shrinks_below_default() {
        // 60 glyphs per line: 18 -> 648pt too wide, 16 -> 576pt fits.
        let text = "a".repeat(60);
        assert_eq!(fit_font_size(&text, 620.0, 340.0, &BODY_RANGE), 16.0);
    }

    #[test]
    fn nothing_fits_falls_back_to_default() {
        let text = "a".repeat(500);
        assert_eq!(fit_font_size(&text, 620.0, 340.0, &BODY_RANGE), 18.0);
    }

    #[test]
    fn result_never_exceeds_max() {
        assert_eq!(fit_font_size("x", 10_000.0, 10_000.0, &BODY_RANGE), 24.0);
    }

    #[test]
    fn height_constraint_drives_shrinking() {
        // 20 short lines: height 20 * 1.2 * size; at 18 -> 432pt, at 14 ->
        // 336pt which is the first size fitting 340pt.
        let text = vec!["ab"; 20].join("\n");
        assert_eq!(fit_font_size(&text, 620.0, 340.0, &BODY_RANGE), 14.0);
    }
}
