//! Simulated DigiLocker document import.
//!
//! Reproduces the demo's step sequence over canned data: connect (fixed
//! delay), present the available-document list, import (fixed delay), then
//! append the imported documents to the vault. No government service is ever
//! contacted.

use crate::dates::today_string;
use crate::student_manager::StudentManager;
use onestop_core::error::Result;
use onestop_core::id::random_id;
use onestop_core::student::Document;
use std::time::Duration;

/// Artificial delay for the connect step.
pub const CONNECT_DELAY: Duration = Duration::from_millis(2000);
/// Artificial delay for the import step.
pub const IMPORT_DELAY: Duration = Duration::from_millis(2500);

/// One document DigiLocker offers for import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableDocument {
    pub name: &'static str,
    pub issuer: &'static str,
    pub kind: &'static str,
}

/// The canned list shown during the select step.
pub static AVAILABLE_DOCUMENTS: &[AvailableDocument] = &[
    AvailableDocument { name: "Class X Marksheet", issuer: "CBSE", kind: "Marksheet" },
    AvailableDocument { name: "Class XII Marksheet", issuer: "CBSE", kind: "Marksheet" },
    AvailableDocument { name: "Aadhaar Card", issuer: "UIDAI", kind: "ID Proof" },
    AvailableDocument { name: "PAN Card", issuer: "Income Tax Dept", kind: "ID Proof" },
    AvailableDocument { name: "Driving License", issuer: "Transport Dept", kind: "ID Proof" },
];

/// The documents an import actually produces: name and canned size.
const IMPORTED_DOCUMENTS: &[(&str, &str)] = &[
    ("Class X Marksheet (CBSE)", "245 KB"),
    ("Class XII Marksheet (CBSE)", "312 KB"),
    ("Aadhaar Card", "156 KB"),
];

/// Drives the import flow against a student manager.
#[derive(Clone)]
pub struct DigiLockerImporter {
    student: StudentManager,
    connect_delay: Duration,
    import_delay: Duration,
}

impl DigiLockerImporter {
    pub fn new(student: StudentManager) -> Self {
        Self::with_delays(student, CONNECT_DELAY, IMPORT_DELAY)
    }

    pub fn with_delays(
        student: StudentManager,
        connect_delay: Duration,
        import_delay: Duration,
    ) -> Self {
        Self {
            student,
            connect_delay,
            import_delay,
        }
    }

    /// Connect step: waits out the artificial delay and returns the
    /// available-document list.
    pub async fn connect(&self) -> &'static [AvailableDocument] {
        tokio::time::sleep(self.connect_delay).await;
        tracing::info!("connected to DigiLocker (simulated)");
        AVAILABLE_DOCUMENTS
    }

    /// Import step: waits out the artificial delay, builds the canned
    /// documents (`digi_` ids, PDF type, today's date), appends each to the
    /// vault, and returns them.
    pub async fn import(&self) -> Result<Vec<Document>> {
        tokio::time::sleep(self.import_delay).await;

        let date = today_string();
        let mut imported = Vec::with_capacity(IMPORTED_DOCUMENTS.len());
        for (name, size) in IMPORTED_DOCUMENTS {
            let document = Document {
                id: random_id("digi"),
                name: name.to_string(),
                mime_type: "application/pdf".to_string(),
                uploaded_date: date.clone(),
                size: size.to_string(),
            };
            self.student.add_document(document.clone()).await?;
            imported.push(document);
        }

        tracing::info!(count = imported.len(), "documents imported from DigiLocker (simulated)");
        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onestop_infrastructure::{JsonStore, JsonStudentRepository};
    use std::sync::Arc;
    use tempfile::TempDir;

    async fn importer() -> (TempDir, DigiLockerImporter, StudentManager) {
        let dir = TempDir::new().unwrap();
        let repo = Arc::new(JsonStudentRepository::new(JsonStore::new(dir.path())));
        let student = StudentManager::load(repo).await.unwrap();
        let importer = DigiLockerImporter::new(student.clone());
        (dir, importer, student)
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_lists_available_documents() {
        let (_dir, importer, _student) = importer().await;
        let available = importer.connect().await;
        assert_eq!(available.len(), 5);
        assert_eq!(available[2].issuer, "UIDAI");
    }

    #[tokio::test(start_paused = true)]
    async fn test_import_appends_canned_documents() {
        let (_dir, importer, student) = importer().await;
        let imported = importer.import().await.unwrap();

        assert_eq!(imported.len(), 3);
        assert!(imported.iter().all(|d| d.id.starts_with("digi_")));
        assert!(imported.iter().all(|d| d.mime_type == "application/pdf"));
        assert_eq!(imported[0].size, "245 KB");
        assert_eq!(imported[2].name, "Aadhaar Card");

        assert_eq!(student.documents().await, imported);
    }

    #[tokio::test(start_paused = true)]
    async fn test_import_twice_keeps_both_batches() {
        // No versioning and no dedup in the vault.
        let (_dir, importer, student) = importer().await;
        importer.import().await.unwrap();
        importer.import().await.unwrap();
        assert_eq!(student.documents().await.len(), 6);
    }
}
