//! Markup dialect of the vault

use std::fmt;

/// Plain-text convention used by the vault; decides the journal extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupDialect {
    #[default]
    Markdown,
    Org,
}

impl MarkupDialect {
    /// Parse the `:preferred-format` value. Only "Org" (any case) selects Org;
    /// everything else, including an empty string, means Markdown.
    pub fn from_config_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("org") {
            MarkupDialect::Org
        } else {
            MarkupDialect::Markdown
        }
    }

    /// Journal file extension, including the dot
    pub fn extension(&self) -> &'static str {
        match self {
            MarkupDialect::Markdown => ".md",
            MarkupDialect::Org => ".org",
        }
    }
}

impl fmt::Display for MarkupDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupDialect::Markdown => write!(f, "Markdown"),
            MarkupDialect::Org => write!(f, "Org"),
        }
    }
}
