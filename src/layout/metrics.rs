use crate::units::Pt;

/// Greedy word wrap: splits `text` into lines no wider than `max_width`
/// according to `width_of`.
///
/// This single function is the source of truth for wrapping. Both text-height
/// measurement and text drawing go through it, so the height a caller reserves
/// for a block always matches the height the block consumes when drawn — any
/// divergence between the two would show up as overlapping rows or borders
/// that stop short of their text.
///
/// Explicit newlines force a line break. A single word wider than `max_width`
/// is placed on a line of its own and left to overflow horizontally rather
/// than being split mid-word. Text with no visible characters produces no
/// lines at all.
pub fn wrap_text<F>(text: &str, max_width: Pt, width_of: F) -> Vec<String>
where
    F: Fn(&str) -> Pt,
{
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            // explicit blank line keeps its vertical space
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate_width = width_of(&current) + width_of(" ") + width_of(word);
            if candidate_width > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            } else {
                current.push(' ');
                current.push_str(word);
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    // trailing blank paragraphs carry no content
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

/// The wrapped height of `text` at the given line height: line count times
/// line height. Pure function of its inputs; calling it twice with identical
/// arguments always yields the identical value.
pub fn wrapped_height<F>(text: &str, max_width: Pt, line_height: Pt, width_of: F) -> Pt
where
    F: Fn(&str) -> Pt,
{
    let lines = wrap_text(text, max_width, width_of);
    line_height * lines.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    // ten points per character, spaces included
    fn width(text: &str) -> Pt {
        Pt(text.chars().count() as f32 * 10.0)
    }

    #[test]
    fn empty_text_has_no_lines_and_zero_height() {
        assert!(wrap_text("", Pt(100.0), width).is_empty());
        assert!(wrap_text("   ", Pt(100.0), width).is_empty());
        assert_eq!(wrapped_height("", Pt(100.0), Pt(12.0), width), Pt(0.0));
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("TIN No", Pt(100.0), width);
        assert_eq!(lines, vec!["TIN No".to_string()]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        // "alpha beta" is 100pt, "alpha beta gamma" would be 160pt
        let lines = wrap_text("alpha beta gamma", Pt(100.0), width);
        assert_eq!(lines, vec!["alpha beta".to_string(), "gamma".to_string()]);
    }

    #[test]
    fn over_wide_word_gets_its_own_line() {
        let lines = wrap_text("a extraordinarily b", Pt(80.0), width);
        assert_eq!(
            lines,
            vec![
                "a".to_string(),
                "extraordinarily".to_string(),
                "b".to_string()
            ]
        );
    }

    #[test]
    fn explicit_newlines_break_lines() {
        let lines = wrap_text("one\ntwo", Pt(200.0), width);
        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn measurement_is_idempotent() {
        let a = wrapped_height("alpha beta gamma delta", Pt(100.0), Pt(12.0), width);
        let b = wrapped_height("alpha beta gamma delta", Pt(100.0), Pt(12.0), width);
        assert_eq!(a, b);
    }

    #[test]
    fn height_is_line_count_times_line_height() {
        let h = wrapped_height("alpha beta gamma", Pt(100.0), Pt(12.0), width);
        assert_eq!(h, Pt(24.0));
    }
}
