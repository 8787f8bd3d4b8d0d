//! Property tests for card name to image filename normalization.

use card_gallery::card_image_filename;
use proptest::prelude::*;

fn body(filename: &str) -> &str {
    filename
        .strip_suffix(".png")
        .expect("every filename ends with .png")
}

proptest! {
    #[test]
    fn always_ends_with_png(name in ".*") {
        prop_assert!(card_image_filename(&name).ends_with(".png"));
    }

    #[test]
    fn body_has_no_edge_hyphens(name in ".*") {
        let filename = card_image_filename(&name);
        let body = body(&filename);
        prop_assert!(!body.starts_with('-'), "body {:?}", body);
        prop_assert!(!body.ends_with('-'), "body {:?}", body);
    }

    #[test]
    fn body_has_no_whitespace_or_periods(name in ".*") {
        let filename = card_image_filename(&name);
        let body = body(&filename);
        prop_assert!(!body.chars().any(char::is_whitespace), "body {:?}", body);
        prop_assert!(!body.contains('.'), "body {:?}", body);
    }

    #[test]
    fn separators_only_yield_empty_body(name in "[ \t\n.\\-]*") {
        prop_assert_eq!(card_image_filename(&name), ".png");
    }

    #[test]
    fn ascii_words_join_with_single_hyphens(words in prop::collection::vec("[A-Za-z0-9]{1,8}", 1..5), gap in " {1,4}") {
        let name = words.join(&gap);
        let expected = format!("{}.png", words.join("-").to_lowercase());
        prop_assert_eq!(card_image_filename(&name), expected);
    }
}
