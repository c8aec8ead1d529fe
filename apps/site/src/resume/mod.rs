//! Resume asset loading and data-URI construction.
//!
//! The resume is one optional PDF at a configured path. A missing file is a
//! normal state, never an error; any other read failure is carried as a
//! reason string and rendered as a visible message in the section that asked
//! for it. The data-URI constructors are pure so the same bytes always
//! produce the same string.

use std::io::ErrorKind;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Largest payload embedded as an inline preview frame. Bigger files keep
/// the download link and get a size notice instead of the frame.
pub const INLINE_PREVIEW_CAP: usize = 8 * 1024 * 1024;

/// Outcome of a resume load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeState {
    /// File exists and was read in full. May be empty.
    Present(Vec<u8>),
    /// No file at the configured path. Expected, non-fatal.
    Absent,
    /// The file exists but could not be read (permissions, I/O).
    ReadError(String),
}

/// Reads the resume file. Never fails: `ErrorKind::NotFound` maps to
/// `Absent`, every other error to `ReadError` with the reason string.
pub fn load(path: &Path) -> ResumeState {
    match std::fs::read(path) {
        Ok(bytes) => ResumeState::Present(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => ResumeState::Absent,
        Err(e) => ResumeState::ReadError(e.to_string()),
    }
}

/// Octet-stream data URI for the download link. Pairs with a `download`
/// attribute carrying [`suggested_filename`] as the save name.
pub fn download_data_uri(content: &[u8]) -> String {
    format!(
        "data:application/octet-stream;base64,{}",
        STANDARD.encode(content)
    )
}

/// PDF data URI for the fixed-size inline preview frame.
pub fn inline_data_uri(content: &[u8]) -> String {
    format!("data:application/pdf;base64,{}", STANDARD.encode(content))
}

/// Save name suggested on the download link: the file's own name when it has
/// one.
pub fn suggested_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.pdf".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let state = load(&dir.path().join("no-such-resume.pdf"));
        assert_eq!(state, ResumeState::Absent);
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        // A directory exists but cannot be read as a file.
        let dir = tempfile::tempdir().unwrap();
        match load(dir.path()) {
            ResumeState::ReadError(reason) => assert!(!reason.is_empty()),
            other => panic!("Expected ReadError, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_byte_file_is_present_and_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"").unwrap();
        assert_eq!(load(&path), ResumeState::Present(Vec::new()));
    }

    #[test]
    fn test_empty_payload_produces_well_formed_uris() {
        assert_eq!(download_data_uri(&[]), "data:application/octet-stream;base64,");
        assert_eq!(inline_data_uri(&[]), "data:application/pdf;base64,");
    }

    #[test]
    fn test_download_uri_round_trips_original_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let payload: Vec<u8> = (0u16..1500).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &payload).unwrap();

        let bytes = match load(&path) {
            ResumeState::Present(bytes) => bytes,
            other => panic!("Expected Present, got {other:?}"),
        };
        let uri = download_data_uri(&bytes);
        let encoded = uri
            .strip_prefix("data:application/octet-stream;base64,")
            .expect("octet-stream prefix");
        assert_eq!(STANDARD.decode(encoded).unwrap(), payload);
    }

    #[test]
    fn test_inline_uri_round_trips_original_bytes() {
        let payload = b"%PDF-1.4 minimal".to_vec();
        let uri = inline_data_uri(&payload);
        let encoded = uri
            .strip_prefix("data:application/pdf;base64,")
            .expect("pdf prefix");
        assert_eq!(STANDARD.decode(encoded).unwrap(), payload);
    }

    #[test]
    fn test_data_uris_are_deterministic() {
        let payload = b"same bytes in, same string out";
        assert_eq!(download_data_uri(payload), download_data_uri(payload));
        assert_eq!(inline_data_uri(payload), inline_data_uri(payload));
    }

    #[test]
    fn test_suggested_filename_uses_file_name() {
        assert_eq!(
            suggested_filename(&PathBuf::from("assets/cv-2026.pdf")),
            "cv-2026.pdf"
        );
    }

    #[test]
    fn test_suggested_filename_falls_back_for_bare_root() {
        assert_eq!(suggested_filename(&PathBuf::from("/")), "resume.pdf");
    }
}
