//! # Caption Module
//!
//! Lays out user captions for the meme overlay Frinkiac renders on a frame.
//! Captions are greedily packed into lines of at most [`EM_WIDTH`] characters.

/// Amount of "M" letters that fit in a single line of a frame.
pub const EM_WIDTH: usize = 15;

/// Split a caption into several lines, unless the user already did it.
///
/// Words are packed greedily: a word goes on the current line as long as the
/// summed length of the words on that line stays within `max_width`. Spaces
/// between words are not counted. A word longer than `max_width` is never cut
/// and ends up alone on its own line. A new line is only started once the
/// current one holds a word, so an over-long first word does not leave an
/// empty line above it.
///
/// # Examples
///
/// ```rust
/// use frinkiac_bot::caption::{wrap_caption, EM_WIDTH};
///
/// assert_eq!(wrap_caption("give me the drugs lisa", EM_WIDTH), "give me the drugs\nlisa");
/// assert_eq!(wrap_caption("already\nsplit", EM_WIDTH), "already\nsplit");
/// ```
pub fn wrap_caption(caption: &str, max_width: usize) -> String {
    if caption.contains('\n') {
        return caption.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_width = 0;

    for word in caption.split(' ').filter(|w| !w.is_empty()) {
        let word_width = word.chars().count();

        if !current.is_empty() && current_width + word_width > max_width {
            lines.push(current.join(" "));
            current.clear();
            current_width = 0;
        }

        current.push(word);
        current_width += word_width;
    }
    lines.push(current.join(" "));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_caption_stays_on_one_line() {
        assert_eq!(wrap_caption("d'oh", EM_WIDTH), "d'oh");
    }

    #[test]
    fn test_greedy_packing_ignores_spaces() {
        // 4 + 2 + 3 + 5 = 14 fits, "lisa" would make it 18
        assert_eq!(
            wrap_caption("give me the drugs lisa", EM_WIDTH),
            "give me the drugs\nlisa"
        );
    }

    #[test]
    fn test_manual_line_breaks_are_respected() {
        let caption = "give me\nthe drugs lisa and a really long tail";
        assert_eq!(wrap_caption(caption, EM_WIDTH), caption);
    }

    #[test]
    fn test_repeated_spaces_are_collapsed() {
        assert_eq!(wrap_caption("  mmm    donuts  ", EM_WIDTH), "mmm donuts");
    }

    #[test]
    fn test_long_word_gets_its_own_line() {
        assert_eq!(
            wrap_caption("ok supercalifragilistic ok", EM_WIDTH),
            "ok\nsupercalifragilistic\nok"
        );
        assert_eq!(
            wrap_caption("supercalifragilistic", EM_WIDTH),
            "supercalifragilistic"
        );
    }

    #[test]
    fn test_long_first_word_has_no_blank_line_above() {
        assert_eq!(
            wrap_caption("supercalifragilistic is neat", EM_WIDTH),
            "supercalifragilistic\nis neat"
        );
    }

    #[test]
    fn test_empty_caption() {
        assert_eq!(wrap_caption("", EM_WIDTH), "");
        assert_eq!(wrap_caption("   ", EM_WIDTH), "");
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        // 7 + 7 = 14 characters, but well over 15 bytes
        assert_eq!(wrap_caption("ééééééé ééééééé", EM_WIDTH), "ééééééé ééééééé");
    }
}
