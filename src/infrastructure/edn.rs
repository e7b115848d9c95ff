//! Reading Logseq's `config.edn`

use edn_format::Value;
use thiserror::Error;

/// Deepest nesting of lists, vectors, maps and sets accepted in a config file
pub const MAX_DEPTH: usize = 128;

#[derive(Debug, Error)]
pub enum EdnError {
    #[error("nesting deeper than {limit} levels at line {line}, column {column}")]
    TooDeep {
        line: usize,
        column: usize,
        limit: usize,
    },

    #[error("{0}")]
    Syntax(String),
}

/// Parse one EDN value from `input`.
///
/// The nesting depth is checked up front so a hostile or truncated file
/// cannot exhaust the stack of the recursive parser.
pub fn parse(input: &str) -> Result<Value, EdnError> {
    check_depth(input)?;
    edn_format::parse_str(input).map_err(|e| EdnError::Syntax(format!("{:?}", e)))
}

/// Scan `input` for open collections without building anything.
/// Strings, comments and character literals are skipped.
fn check_depth(input: &str) -> Result<(), EdnError> {
    let mut depth = 0usize;
    let mut line = 1;
    let mut column = 0;
    let mut in_string = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }

        if in_string {
            match c {
                '\\' => {
                    chars.next();
                    column += 1;
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            ';' => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                        column = 0;
                        break;
                    }
                }
            }
            '\\' => {
                chars.next();
                column += 1;
            }
            '(' | '[' | '{' => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(EdnError::TooDeep {
                        line,
                        column,
                        limit: MAX_DEPTH,
                    });
                }
            }
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_map() {
        let value = parse(r#"{:meta/version 1 :hidden [] :preferred-format "Markdown"}"#).unwrap();
        assert!(matches!(value, Value::Map(ref m) if m.len() == 3));
    }

    #[test]
    fn test_syntax_error() {
        let err = parse("{:meta/version 1 :preferred-format}").unwrap_err();
        assert!(matches!(err, EdnError::Syntax(_)));
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let input = "[".repeat(200_000);
        let err = parse(&input).unwrap_err();
        match err {
            EdnError::TooDeep {
                line,
                column,
                limit,
            } => {
                assert_eq!(line, 1);
                assert_eq!(column, MAX_DEPTH + 1);
                assert_eq!(limit, MAX_DEPTH);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_nesting_at_limit_is_accepted() {
        let input = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        assert!(check_depth(&input).is_ok());
    }

    #[test]
    fn test_brackets_in_strings_and_comments_do_not_count() {
        let brackets = "[".repeat(MAX_DEPTH * 2);
        let input = format!(
            "; {}\n{{:title \"{}\" :open \\[ :quoted \"\\\"[\"}}",
            brackets, brackets
        );
        assert!(check_depth(&input).is_ok());
    }

    #[test]
    fn test_depth_error_reports_line() {
        let input = format!("{{:a 1\n :b {}}}", "(".repeat(MAX_DEPTH));
        let err = check_depth(&input).unwrap_err();
        assert!(matches!(err, EdnError::TooDeep { line: 2, .. }));
        assert!(err.to_string().contains("nesting deeper than 128 levels"));
    }
}
