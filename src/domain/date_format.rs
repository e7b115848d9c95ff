//! Translation of Logseq journal date formats into chrono format strings

use chrono::NaiveDate;

/// Vault tokens and their chrono equivalents, longest first for each letter.
///
/// `yyyy` must be tried before `yy`, `MM` before `M` and `dd` before `d`,
/// otherwise the short token would eat half of the long one.
const TOKENS: [(&str, &str); 6] = [
    ("yyyy", "%Y"),
    ("yy", "%y"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("dd", "%d"),
    ("d", "%-d"),
];

/// Translate a vault date format (e.g. `yyyy_MM_dd`) into a chrono format
/// string (e.g. `%Y_%m_%d`).
///
/// Characters that are not part of a token are copied through; a literal `%`
/// is escaped so chrono prints it as-is. There is no escape for literal
/// `M`/`d`/`y` characters.
pub fn translate(vault_format: &str) -> String {
    let mut out = String::with_capacity(vault_format.len() * 2);
    let mut rest = vault_format;

    'scan: while let Some(c) = rest.chars().next() {
        for (token, chrono_token) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(chrono_token);
                rest = tail;
                continue 'scan;
            }
        }

        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Format a date with a vault date format
pub fn format_date(date: NaiveDate, vault_format: &str) -> String {
    date.format(&translate(vault_format)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_translate_logseq_default() {
        assert_eq!(translate("yyyy_MM_dd"), "%Y_%m_%d");
    }

    #[test]
    fn test_translate_variants() {
        let cases = [
            ("yyyy_MM_d", "%Y_%m_%-d"),
            ("yyyy_M_d", "%Y_%-m_%-d"),
            ("yyyy_M_dd", "%Y_%-m_%d"),
            ("yy_MM_dd", "%y_%m_%d"),
            ("yy_M_dd", "%y_%-m_%d"),
            ("yy_M_d", "%y_%-m_%-d"),
            ("dd-MM-yyyy", "%d-%m-%Y"),
        ];
        for (input, expected) in cases {
            assert_eq!(translate(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_translate_without_tokens_is_unchanged() {
        assert_eq!(translate(""), "");
        assert_eq!(translate("journal_-"), "journal_-");
    }

    #[test]
    fn test_translate_escapes_percent() {
        assert_eq!(translate("100%_yyyy"), "100%%_%Y");
    }

    #[test]
    fn test_long_year_not_eaten_by_short_year() {
        assert_eq!(translate("yyyyyy"), "%Y%y");
        assert_eq!(format_date(date(2024, 3, 7), "yyyyyy"), "202424");
    }

    #[test]
    fn test_format_pads_and_unpads() {
        let d = date(2024, 3, 7);
        assert_eq!(format_date(d, "yyyy_MM_dd"), "2024_03_07");
        assert_eq!(format_date(d, "yy_M_d"), "24_3_7");
        assert_eq!(format_date(date(1999, 12, 31), "yy_M_d"), "99_12_31");
    }

    #[test]
    fn test_literal_letters_are_translated() {
        // No escaping: the `d` in "day" is a token too.
        assert_eq!(format_date(date(2024, 3, 7), "day_yyyy"), "7ay_2024");
    }
}
