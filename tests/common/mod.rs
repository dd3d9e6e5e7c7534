//! Common test utilities for wheelwright integration tests

use std::fs::File;
use std::path::PathBuf;
use tempfile::TempDir;

/// A test workspace holding wheel files, archives and stub interpreters
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &[u8]) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a placeholder wheel file
    pub fn write_wheel(&self, path: &str) -> PathBuf {
        self.write_file(path, b"wheel bytes")
    }

    /// Write a plain tar archive with the given (member name, content) pairs
    pub fn write_tar(&self, path: &str, members: &[(&str, &[u8])]) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        let file = File::create(&file_path).expect("Failed to create tar file");
        let mut builder = tar::Builder::new(file);
        append_members(&mut builder, members);
        builder.finish().expect("Failed to finish tar file");
        file_path
    }

    /// Write a gzip-compressed tar archive
    pub fn write_tar_gz(&self, path: &str, members: &[(&str, &[u8])]) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        let file = File::create(&file_path).expect("Failed to create tar.gz file");
        let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        let mut builder = tar::Builder::new(encoder);
        append_members(&mut builder, members);
        builder
            .into_inner()
            .expect("Failed to finish tar stream")
            .finish()
            .expect("Failed to finish gzip stream");
        file_path
    }

    /// Write an executable stub interpreter that logs its arguments.
    ///
    /// The stub appends each invocation's arguments to `args.log` in the
    /// workspace, writes `stderr_text` to stderr, and exits with `code`.
    #[cfg(unix)]
    pub fn write_stub_python(&self, name: &str, stderr_text: &str, code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let log = self.path.join("args.log");
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> \"{}\"\n{}exit {}\n",
            log.display(),
            if stderr_text.is_empty() {
                String::new()
            } else {
                format!("echo \"{stderr_text}\" >&2\n")
            },
            code
        );
        let path = self.write_file(name, script.as_bytes());
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat stub")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod stub");
        path
    }

    /// Read the argument log written by stub interpreters
    #[cfg(unix)]
    pub fn read_args_log(&self) -> String {
        std::fs::read_to_string(self.path.join("args.log")).unwrap_or_default()
    }
}

fn append_members<W: std::io::Write>(builder: &mut tar::Builder<W>, members: &[(&str, &[u8])]) {
    for (member_name, content) in members {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, member_name, *content)
            .expect("Failed to append tar member");
    }
}
