//! Shell scripts standing in for the dialog program.
//!
//! Each script first records its arguments (one per line) to `args.txt` in
//! its temp dir, then runs the given body.

#![cfg(unix)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;
use zdialog::program::Program;

pub struct FakeProgram {
    dir: TempDir,
    path: PathBuf,
}

impl FakeProgram {
    /// Write an executable script with `body` as its shell code.
    pub fn new(body: &str) -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("fake-zenity");
        let args_file = dir.path().join("args.txt");

        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n{}\n",
            args_file.display(),
            body
        );

        {
            let mut file = fs::File::create(&path)?;
            file.write_all(script.as_bytes())?;
            file.sync_all()?;
        }
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;

        Ok(Self { dir, path })
    }

    /// Print `stdout` verbatim and exit with `code`.
    pub fn printing(stdout: &str, code: i32) -> std::io::Result<Self> {
        let escaped = stdout.replace('\'', r"'\''");
        Self::new(&format!("printf '%s' '{escaped}'\nexit {code}"))
    }

    /// Copy stdin to `stdin.txt` until it is closed, then exit 0.
    pub fn capturing_stdin() -> std::io::Result<Self> {
        Self::new("cat > \"$(dirname \"$0\")/stdin.txt\"")
    }

    pub fn program(&self) -> Program {
        Program::from_path(&self.path)
    }

    /// Arguments the script was last called with.
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("args.txt"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// What `capturing_stdin` wrote, if it ran.
    pub fn captured_stdin(&self) -> Option<String> {
        fs::read_to_string(self.dir.path().join("stdin.txt")).ok()
    }
}
