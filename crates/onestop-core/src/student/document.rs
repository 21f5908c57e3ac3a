//! Document vault domain model.
//!
//! Documents are simulated: only metadata is stored, never file content.

use serde::{Deserialize, Serialize};

/// One entry in the document vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique document identifier (`doc_<random>` for uploads,
    /// `digi_<random>` for DigiLocker imports)
    pub id: String,
    /// Display name (usually the original file name)
    pub name: String,
    /// MIME-like type string
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Upload date (`YYYY-MM-DD`)
    pub uploaded_date: String,
    /// Human-readable size ("245 KB")
    pub size: String,
}

/// Formats a byte count as a human-readable string using 1024-based units,
/// with up to two decimal places and trailing zeros trimmed ("1.5 MB",
/// "245 KB", "0 Bytes").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    let mut text = format!("{:.2}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{} {}", text, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(250_880), "245 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
        assert_eq!(format_file_size(1_610_612_736), "1.5 GB");
    }

    #[test]
    fn test_document_type_field_name() {
        let doc = Document {
            id: "doc_000000001".to_string(),
            name: "marksheet.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            uploaded_date: "2024-01-15".to_string(),
            size: "245 KB".to_string(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "application/pdf");
        assert_eq!(json["uploadedDate"], "2024-01-15");
    }
}
