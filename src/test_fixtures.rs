//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Builds the tar and wheel files the unit tests exercise the pipeline
//! with, so individual test modules do not each carry their own archive
//! builder.

use std::fs::File;
use std::path::{Path, PathBuf};

/// Write a plain tar archive containing the given `(member name, content)`
/// pairs.
pub fn write_tar(dir: &Path, name: &str, members: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create tar file");
    let mut builder = tar::Builder::new(file);
    append_members(&mut builder, members);
    builder.finish().expect("Failed to finish tar file");
    path
}

/// Write a gzip-compressed tar archive.
pub fn write_tar_gz(dir: &Path, name: &str, members: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create tar.gz file");
    let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    let mut builder = tar::Builder::new(encoder);
    append_members(&mut builder, members);
    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish gzip stream");
    path
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

/// Write a small file, creating parent directories as needed.
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, b"content").expect("Failed to write file");
    path
}
