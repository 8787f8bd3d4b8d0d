use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Clip `text` to at most `max_width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_short_text() {
        assert_eq!(truncate_to_width("hog-rider.png", 20), "hog-rider.png");
    }

    #[test]
    fn clips_long_text() {
        assert_eq!(truncate_to_width("elite-barbarians.png", 8), "elite-b…");
        assert_eq!(truncate_to_width("golem.png", 0), "");
    }

    #[test]
    fn counts_wide_characters_as_two_columns() {
        assert_eq!(truncate_to_width("騎士騎士", 5), "騎士…");
    }
}
