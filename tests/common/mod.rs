use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn lsq_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lsq").unwrap();
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `{vault}/logseq/config.edn`
#[allow(dead_code)]
pub fn write_config(vault: &Path, contents: &str) {
    let dir = vault.join("logseq");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.edn"), contents).unwrap();
}

/// The single path a successful run wrote to stdout
#[allow(dead_code)]
pub fn stdout_path(stdout: &[u8]) -> PathBuf {
    let text = String::from_utf8(stdout.to_vec()).unwrap();
    PathBuf::from(text.trim_end())
}

/// Run `lsq -d {vault} -p` and return the journal path it printed
#[allow(dead_code)]
pub fn print_journal_path(vault: &Path) -> PathBuf {
    let assert = lsq_cmd().arg("-d").arg(vault).arg("-p").assert().success();
    stdout_path(&assert.get_output().stdout)
}

/// stderr lines that are not log records
#[allow(dead_code)]
pub fn non_log_lines(stderr: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stderr)
        .lines()
        .filter(|line| !line.starts_with('['))
        .map(str::to_string)
        .collect()
}
