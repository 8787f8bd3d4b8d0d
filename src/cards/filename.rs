/// Extension appended to every normalized card name.
pub const IMAGE_EXTENSION: &str = "png";

/// Turn a card's display name into the filename of its image asset.
///
/// Surrounding whitespace is trimmed, every `.` is dropped, the rest is
/// lowercased, each whitespace run becomes a single `-` and hyphens left at
/// either end are stripped. Hyphens inside the name are kept verbatim, so
/// `"Barbarian - Hut"` maps to `barbarian---hut.png`.
///
/// Names that reduce to nothing yield `".png"`.
pub fn card_image_filename(name: &str) -> String {
    let without_periods: String = name.trim().chars().filter(|&ch| ch != '.').collect();
    let lowered = without_periods.to_lowercase();
    let hyphenated = hyphenate_whitespace(&lowered);
    let body = hyphenated.trim_matches('-');

    format!("{body}.{IMAGE_EXTENSION}")
}

fn hyphenate_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('-');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }

    out
}
