//! # Caption Tests
//!
//! Checks the layout properties of caption wrapping over a set of captions
//! and widths.

use frinkiac_bot::caption::{wrap_caption, EM_WIDTH};

#[cfg(test)]
mod tests {
    use super::*;

    const CAPTIONS: &[&str] = &[
        "d'oh",
        "give me the drugs lisa",
        "I'm so hungry I could eat at Arby's",
        "Me fail English? That's unpossible!",
        "  Everything's coming up   Milhouse  ",
        "Supercalifragilisticexpialidocious is a long word",
        "a b c d e f g h i j k l m n o p q r s t u v w x y z",
        "",
    ];

    const WIDTHS: &[usize] = &[1, 5, 10, EM_WIDTH, 40];

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    /// Test wrapping keeps every word, in order
    #[test]
    fn test_wrapping_preserves_words() {
        for caption in CAPTIONS {
            for &width in WIDTHS {
                let wrapped = wrap_caption(caption, width);
                assert_eq!(words(&wrapped), words(caption), "caption {caption:?} width {width}");
            }
        }
    }

    /// Test no line goes over the width unless it is a single long word
    #[test]
    fn test_lines_respect_width() {
        for caption in CAPTIONS {
            for &width in WIDTHS {
                for line in wrap_caption(caption, width).lines() {
                    let line_words = words(line);
                    let line_width: usize = line_words.iter().map(|w| w.chars().count()).sum();
                    assert!(
                        line_width <= width || line_words.len() == 1,
                        "line {line:?} too wide for {width}"
                    );
                }
            }
        }
    }

    /// Test wrapped captions contain no empty lines
    #[test]
    fn test_no_empty_lines() {
        for caption in CAPTIONS.iter().filter(|c| !c.trim().is_empty()) {
            for &width in WIDTHS {
                let wrapped = wrap_caption(caption, width);
                assert!(wrapped.split('\n').all(|line| !line.is_empty()), "{wrapped:?}");
            }
        }
    }

    /// Test captions with explicit line breaks are left alone, and wrapping is idempotent
    #[test]
    fn test_manual_layout_is_identity() {
        let manual = "Me fail English?\nThat's unpossible!";
        assert_eq!(wrap_caption(manual, EM_WIDTH), manual);

        for caption in CAPTIONS {
            let once = wrap_caption(caption, EM_WIDTH);
            if once.contains('\n') {
                assert_eq!(wrap_caption(&once, EM_WIDTH), once);
            }
        }
    }

    /// Test the reference examples
    #[test]
    fn test_reference_captions() {
        assert_eq!(wrap_caption("d'oh", EM_WIDTH), "d'oh");
        assert_eq!(
            wrap_caption("give me the drugs lisa", EM_WIDTH),
            "give me the drugs\nlisa"
        );
        assert_eq!(
            wrap_caption("Me fail English? That's unpossible!", EM_WIDTH),
            "Me fail English?\nThat's\nunpossible!"
        );
    }
}
