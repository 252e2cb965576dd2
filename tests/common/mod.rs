#![allow(dead_code)]

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use zip::{write::SimpleFileOptions, ZipWriter};

pub const RAR_FIXTURE: &str = "tests/fixtures/comic.rar";

/// Writes a zip holding `a.txt` and `dir/b.txt` with the given contents.
pub fn write_zip(path: &Path, a: &[u8], b: &[u8]) {
    let mut writer = ZipWriter::new(File::create(path).expect("Failed to create zip"));
    let options = SimpleFileOptions::default();

    writer.start_file("a.txt", options).unwrap();
    writer.write_all(a).unwrap();
    writer.start_file("dir/b.txt", options).unwrap();
    writer.write_all(b).unwrap();
    writer.finish().unwrap();
}

/// Copies the rar fixture next to the other inputs of a test.
pub fn copy_rar(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::copy(RAR_FIXTURE, &path).expect("Failed to copy rar fixture");
    path
}

pub fn scratch_dir(tag: &str) -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix(&format!("comics-repacker-test-{}-", tag))
        .tempdir()
        .expect("Failed to create temp dir")
}
