//! Integer parsing for raw path and query parameters.

/// Parse a decimal `i32`, accepting an optional sign and nothing else.
pub(crate) fn parse_int(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_int;

    #[test]
    fn accepts_signed_integers() {
        assert_eq!(parse_int("1"), Some(1));
        assert_eq!(parse_int("-250"), Some(-250));
        assert_eq!(parse_int("+7"), Some(7));
    }

    #[test]
    fn rejects_everything_else() {
        for raw in ["", "abc", " 1", "1 ", "1.5", "0x10", "2147483648"] {
            assert_eq!(parse_int(raw), None, "{raw:?} should not parse");
        }
    }
}
