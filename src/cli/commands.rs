//! CLI definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lsq")]
#[command(about = "Open today's Logseq journal from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Use the built-in terminal editor instead of an external one
    #[arg(short = 't', long = "tui")]
    pub tui: bool,

    /// Vault directory, relative to the home directory unless absolute
    #[arg(short = 'd', long = "dir", default_value = "Logseq")]
    pub dir: PathBuf,

    /// Configuration directory inside the vault
    #[arg(short = 'l', long = "config-dir", default_value = "logseq")]
    pub config_dir: String,

    /// Configuration file inside the configuration directory
    #[arg(short = 'c', long = "config", default_value = "config.edn")]
    pub config_file: String,

    /// Editor program, or the name of an environment variable holding it
    #[arg(short = 'e', long = "editor", default_value = "EDITOR")]
    pub editor: String,

    /// Create today's journal if needed, print its path and exit
    #[arg(short = 'p', long = "print-path")]
    pub print_path: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["lsq"]);
        assert!(!cli.tui);
        assert_eq!(cli.dir, PathBuf::from("Logseq"));
        assert_eq!(cli.config_dir, "logseq");
        assert_eq!(cli.config_file, "config.edn");
        assert_eq!(cli.editor, "EDITOR");
        assert!(!cli.print_path);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from([
            "lsq", "-t", "-d", "/notes", "-l", "cfg", "-c", "lsq.edn", "-e", "nano", "-v",
        ]);
        assert!(cli.tui);
        assert_eq!(cli.dir, PathBuf::from("/notes"));
        assert_eq!(cli.config_dir, "cfg");
        assert_eq!(cli.config_file, "lsq.edn");
        assert_eq!(cli.editor, "nano");
        assert!(cli.verbose);
    }

    #[test]
    fn test_empty_editor_is_allowed() {
        let cli = Cli::parse_from(["lsq", "--editor", ""]);
        assert_eq!(cli.editor, "");
    }
}
