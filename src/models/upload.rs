// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ResumeDrop contributors

//! Selected-resume domain model and validation rules (UI-agnostic).
//!
//! The rules mirror what the analyzer backend enforces on its upload
//! endpoint: PDF or plain text, at most 16 MiB. Keep the two in sync.

use std::fmt;
use std::path::{Path, PathBuf};

/// Maximum accepted resume size in bytes. The bound is inclusive: a file of
/// exactly this size passes.
pub const MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;

/// MIME types accepted for upload.
pub const ALLOWED_MIME_TYPES: [&str; 2] = ["application/pdf", "text/plain"];

/// A file the user picked or dropped, with the metadata validation needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original filesystem path.
    pub path: PathBuf,
    /// Display name (final path component).
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// MIME type guessed from the filename, as a browser would report it.
    pub mime: String,
}

impl SelectedFile {
    /// Build a selected file from its path and on-disk size.
    pub fn new(path: PathBuf, size: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let mime = guess_mime(&path);
        Self {
            path,
            name,
            size,
            mime,
        }
    }
}

/// Guess a MIME type from the file extension, defaulting to octet-stream.
pub fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Why a selected file was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadRejection {
    TooLarge,
    UnsupportedType,
}

impl fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadRejection::TooLarge => {
                write!(
                    f,
                    "File size too large. Please select a file smaller than 16MB."
                )
            }
            UploadRejection::UnsupportedType => {
                write!(f, "Invalid file type. Please upload a PDF or TXT file.")
            }
        }
    }
}

/// Decide acceptance of a selected file.
///
/// Rules are checked in fixed order: size first, then type. An oversized file
/// of the wrong type reports the size problem.
pub fn validate(file: &SelectedFile) -> Result<(), UploadRejection> {
    if file.size > MAX_FILE_BYTES {
        return Err(UploadRejection::TooLarge);
    }

    if !ALLOWED_MIME_TYPES.contains(&file.mime.as_str()) {
        return Err(UploadRejection::UnsupportedType);
    }

    Ok(())
}
