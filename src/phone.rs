//! Kazakhstan phone mask: `+7 (XXX) XXX-XX-XX`.

const MAX_DIGITS: usize = 11;
const COUNTRY_DIGIT: char = '7';

/// Digits of `raw` with the country code normalized and the length capped.
fn normalized_digits(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.chars().next() {
        None => return digits,
        Some('8') => digits.replace_range(..1, "7"),
        Some(COUNTRY_DIGIT) => {}
        Some(_) => digits.insert(0, COUNTRY_DIGIT),
    }
    digits.truncate(MAX_DIGITS);
    digits
}

/// Number of digits in `raw`, before any normalization.
pub fn phone_digits(raw: &str) -> usize {
    raw.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Reformats free text into the national mask, emitting punctuation only
/// for groups that already have digits. Never fails.
pub fn format_phone(raw: &str) -> String {
    let digits = normalized_digits(raw);
    if digits.is_empty() {
        return String::new();
    }

    // Slice offsets into the 11 digits: country, 3, 3, 2, 2.
    let group = |from: usize, to: usize| digits.get(from..to.min(digits.len())).unwrap_or("");

    let mut out = String::from("+7");
    let area = group(1, 4);
    if !area.is_empty() {
        out.push_str(" (");
        out.push_str(area);
    }
    // The closing paren belongs to the exchange group, so deleting the last
    // exchange digit also deletes it.
    let exchange = group(4, 7);
    if !exchange.is_empty() {
        out.push_str(") ");
        out.push_str(exchange);
    }
    for (from, to) in [(7, 9), (9, 11)] {
        let part = group(from, to);
        if !part.is_empty() {
            out.push('-');
            out.push_str(part);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_number_is_grouped() {
        assert_eq!(format_phone("77751234567"), "+7 (775) 123-45-67");
    }

    #[test]
    fn leading_eight_becomes_country_code() {
        assert_eq!(format_phone("8775123456"), "+7 (775) 123-45-6");
        assert_eq!(format_phone("87751234567"), "+7 (775) 123-45-67");
    }

    #[test]
    fn missing_country_code_is_prepended() {
        assert_eq!(format_phone("9011234567"), "+7 (901) 123-45-67");
        assert_eq!(format_phone("5"), "+7 (5");
    }

    #[test]
    fn partial_input_grows_progressively() {
        assert_eq!(format_phone("7"), "+7");
        assert_eq!(format_phone("77"), "+7 (7");
        assert_eq!(format_phone("7775"), "+7 (775");
        assert_eq!(format_phone("77751"), "+7 (775) 1");
        assert_eq!(format_phone("77751234"), "+7 (775) 123-4");
    }

    #[test]
    fn deleting_last_char_always_shortens() {
        let full = "77751234567";
        for end in 1..=full.len() {
            let shown = format_phone(&full[..end]);
            let after_delete = format_phone(&shown[..shown.len() - 1]);
            assert!(after_delete.len() < shown.len(), "{shown:?} -> {after_delete:?}");
        }
        assert_eq!(format_phone("+7 (775"), "+7 (775");
        assert_eq!(format_phone("+7 (775) "), "+7 (775");
    }

    #[test]
    fn prefilled_value_is_normalized() {
        // Browser autofill usually hands over the local 8-prefixed form.
        assert_eq!(format_phone("8 701 234 56 78"), "+7 (701) 234-56-78");
        assert_eq!(format_phone("+77012345678"), "+7 (701) 234-56-78");
    }

    #[test]
    fn extra_digits_are_truncated() {
        assert_eq!(format_phone("+7 775 123 45 67 999"), "+7 (775) 123-45-67");
    }

    #[test]
    fn non_digits_are_stripped() {
        assert_eq!(format_phone("abc"), "");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("+7 (701) 234-56-78"), "+7 (701) 234-56-78");
    }

    #[test]
    fn formatting_is_idempotent() {
        for raw in ["", "8", "8775123456", "77751234567", "+7 701 234 56 78", "12", "999999999999"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn digit_count_ignores_punctuation() {
        assert_eq!(phone_digits("+7 701 234 56 78"), 11);
        assert_eq!(phone_digits("+7 (701)"), 4);
    }
}
