use std::fmt;
use std::fs::{self, File};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use memmap2::Mmap;
use thiserror::Error;

/// Strategy for bringing a transcription file into memory.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map the file.
    #[default]
    Mmap,
    /// Read the file into an owned buffer (portable fallback).
    Owned,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown load mode {0:?} (expected mmap or owned)")]
pub struct UnknownLoadMode(pub String);

impl FromStr for LoadMode {
    type Err = UnknownLoadMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mmap" => Ok(LoadMode::Mmap),
            "owned" => Ok(LoadMode::Owned),
            _ => Err(UnknownLoadMode(s.to_string())),
        }
    }
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoadMode::Mmap => "mmap",
            LoadMode::Owned => "owned",
        })
    }
}

enum Buffer {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Buffer {
    fn as_slice(&self) -> &[u8] {
        match self {
            Buffer::Mmap(m) => m.as_ref(),
            Buffer::Owned(v) => v.as_slice(),
        }
    }
}

/// Read a whole file and decode it as Latin-1.
///
/// The file is closed before this returns, whatever the outcome.
pub(crate) fn read_latin1(path: &Path, mode: LoadMode) -> Result<String> {
    let buffer = load_file(path, mode)?;
    Ok(decode_latin1(buffer.as_slice()))
}

/// Every byte maps to the code point of the same value, so decoding never fails.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

fn load_file(path: &Path, mode: LoadMode) -> Result<Buffer> {
    let buffer = match mode {
        LoadMode::Owned => fs::read(path).map(Buffer::Owned),
        LoadMode::Mmap => File::open(path)
            // SAFETY: the map is decoded into an owned string and dropped
            // before `read_latin1` returns.
            .and_then(|file| unsafe { Mmap::map(&file) })
            .map(Buffer::Mmap),
    };
    buffer.with_context(|| format!("reading {} ({mode})", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_bytes_decode_one_to_one() {
        let decoded = decode_latin1(b"f\xe9e\xff");
        assert_eq!(decoded, "f\u{e9}e\u{ff}");
        assert_eq!(decoded.chars().count(), 4);
    }

    #[test]
    fn load_modes_parse_case_insensitively() {
        assert_eq!("MMAP".parse::<LoadMode>(), Ok(LoadMode::Mmap));
        assert_eq!(" owned".parse::<LoadMode>(), Ok(LoadMode::Owned));
        assert_eq!(
            "stream".parse::<LoadMode>(),
            Err(UnknownLoadMode("stream".to_string()))
        );
        for mode in [LoadMode::Mmap, LoadMode::Owned] {
            assert_eq!(mode.to_string().parse::<LoadMode>(), Ok(mode));
        }
    }

    #[test]
    fn load_errors_name_path_and_mode() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.txt");
        let err = read_latin1(&missing, LoadMode::Owned).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("absent.txt"));
        assert!(message.contains("(owned)"));
    }
}
