//! # Cursor Mapping
//!
//! Bidirectional mapping between vertical pixel coordinates and character
//! offsets, under the fixed line-height layout described by [`LayoutModel`].
//! A click maps to a line, never a column, so round trips are stable to
//! within one line's worth of characters.
//!
//! Offsets are in characters, matching caret semantics on the edit surface.

use crate::model::LayoutModel;

/// Map a vertical pixel position to a character offset: the start of the
/// line under `y`. Clicks above the first line map to offset 0; clicks past
/// the last line clamp to the end of the text.
pub fn offset_from_y(y: f64, text: &str, layout: &LayoutModel) -> usize {
    let line = ((y - layout.top_padding) / layout.line_height)
        .floor()
        .max(0.0) as usize;

    let mut offset = 0;
    for l in text.split('\n').take(line) {
        offset += l.chars().count() + 1;
    }

    // The per-line walk adds one for a newline the final line may not have.
    offset.min(text.chars().count())
}

/// 1-based line number containing the given character offset.
pub fn line_of_offset(text: &str, offset: usize) -> usize {
    text.chars().take(offset).filter(|&c| c == '\n').count() + 1
}

/// Top pixel coordinate of a 1-based line number.
pub fn y_of_line(line: usize, layout: &LayoutModel) -> f64 {
    layout.top_padding + (line.saturating_sub(1)) as f64 * layout.line_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> LayoutModel {
        LayoutModel {
            line_height: 25.6,
            top_padding: 20.0,
        }
    }

    #[test]
    fn test_click_in_second_line() {
        let text = "line1\nline2\nline3";
        let layout = layout();
        // Mid-height of line 2.
        let y = layout.top_padding + 1.5 * layout.line_height;
        assert_eq!(offset_from_y(y, text, &layout), 6);
    }

    #[test]
    fn test_click_above_content() {
        assert_eq!(offset_from_y(0.0, "line1\nline2", &layout()), 0);
    }

    #[test]
    fn test_click_past_end_clamps_to_length() {
        let text = "line1\nline2"; // no trailing newline
        let layout = layout();
        let y = layout.top_padding + 50.0 * layout.line_height;
        assert_eq!(offset_from_y(y, text, &layout), text.chars().count());
    }

    #[test]
    fn test_never_exceeds_text_length() {
        let layout = layout();
        for text in ["", "a", "a\n", "a\nb\nc", "\n\n\n"] {
            for step in 0..40 {
                let y = step as f64 * 10.0;
                assert!(offset_from_y(y, text, &layout) <= text.chars().count());
            }
        }
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        let text = "héllo\nwörld";
        let layout = layout();
        let y = layout.top_padding + 1.5 * layout.line_height;
        // "héllo" is 5 characters, plus the newline.
        assert_eq!(offset_from_y(y, text, &layout), 6);
    }

    #[test]
    fn test_line_of_offset() {
        let text = "line1\nline2\nline3";
        assert_eq!(line_of_offset(text, 0), 1);
        assert_eq!(line_of_offset(text, 5), 1);
        assert_eq!(line_of_offset(text, 6), 2);
        assert_eq!(line_of_offset(text, text.chars().count()), 3);
    }

    #[test]
    fn test_y_of_line() {
        let layout = layout();
        assert_eq!(y_of_line(1, &layout), 20.0);
        assert_eq!(y_of_line(3, &layout), 20.0 + 2.0 * 25.6);
        // A zero line (out of contract) does not underflow.
        assert_eq!(y_of_line(0, &layout), 20.0);
    }

    #[test]
    fn test_same_line_offsets_share_a_y() {
        let text = "alpha\nbeta\ngamma";
        let layout = layout();
        // Offsets 6..=10 all sit in "beta".
        let ys: Vec<f64> = (6..=10)
            .map(|o| y_of_line(line_of_offset(text, o), &layout))
            .collect();
        assert!(ys.windows(2).all(|w| w[0] == w[1]));
    }
}
