/// Parses the `id` query parameter of the detail page.
///
/// Reads like a browser's base-10 `parseInt`: leading whitespace is skipped,
/// a sign is allowed, and parsing stops at the first non-digit, so `"12abc"`
/// yields 12. Negative ids and values that overflow count as missing.
pub fn parse_business_id(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim_start();
    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<u64>().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::parse_business_id;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_business_id(Some("42")), Some(42));
        assert_eq!(parse_business_id(Some("  7")), Some(7));
        assert_eq!(parse_business_id(Some("+3")), Some(3));
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse_business_id(Some("12abc")), Some(12));
        assert_eq!(parse_business_id(Some("5.9")), Some(5));
    }

    #[test]
    fn only_decimal_digits_are_read() {
        assert_eq!(parse_business_id(Some("0x1f")), Some(0));
        assert_eq!(parse_business_id(Some("1e3")), Some(1));
    }

    #[test]
    fn missing_or_non_numeric_ids_are_rejected() {
        assert_eq!(parse_business_id(None), None);
        assert_eq!(parse_business_id(Some("")), None);
        assert_eq!(parse_business_id(Some("abc")), None);
        assert_eq!(parse_business_id(Some("-")), None);
        assert_eq!(parse_business_id(Some(" x1")), None);
    }

    #[test]
    fn negative_and_overflowing_ids_are_rejected() {
        assert_eq!(parse_business_id(Some("-4")), None);
        assert_eq!(parse_business_id(Some("99999999999999999999999")), None);
        assert_eq!(parse_business_id(Some("-0")), Some(0));
    }
}
