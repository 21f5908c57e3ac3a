//! Document uploads.
//!
//! Only metadata enters the vault; file content is never stored. The type
//! is guessed from the file name the way a browser reports it, falling back
//! to `application/octet-stream`.

use crate::dates::today_string;
use onestop_core::id::random_id;
use onestop_core::student::{format_file_size, Document};

/// Builds a vault entry for an uploaded file.
pub fn document_from_upload(file_name: &str, size_bytes: u64) -> Document {
    let mime_type = mime_guess::from_path(file_name)
        .first_raw()
        .unwrap_or("application/octet-stream");

    Document {
        id: random_id("doc"),
        name: file_name.to_string(),
        mime_type: mime_type.to_string(),
        uploaded_date: today_string(),
        size: format_file_size(size_bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_guesses_mime_type() {
        let doc = document_from_upload("marksheet.pdf", 250_880);
        assert!(doc.id.starts_with("doc_"));
        assert_eq!(doc.mime_type, "application/pdf");
        assert_eq!(doc.size, "245 KB");
    }

    #[test]
    fn test_upload_falls_back_to_octet_stream() {
        let doc = document_from_upload("mystery.bin2", 10);
        assert_eq!(doc.mime_type, "application/octet-stream");
        assert_eq!(doc.size, "10 Bytes");
    }
}
