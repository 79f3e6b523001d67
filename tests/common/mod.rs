use assert_cmd::Command;
use std::path::Path;

/// Binary under test, run in `cwd` with a scrubbed environment
pub fn habitlog_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("habitlog").unwrap();
    cmd.current_dir(cwd);
    cmd.env_remove("HABITLOG_CONFIG");
    cmd.env_remove("HABITLOG_FILE");
    cmd.env_remove("HABITLOG_LOG");
    cmd.env_remove("RUST_LOG");
    cmd
}
