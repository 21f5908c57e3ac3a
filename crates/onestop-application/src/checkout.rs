//! Application checkout.
//!
//! The "payment" here is a canned fee sum over the catalog; no gateway
//! exists. Submitting creates one application per selected university,
//! skipping any the student has already applied to (the manager itself does
//! not dedup, so the dedup lives here at the call site).

use crate::dates::today_string;
use crate::student_manager::StudentManager;
use onestop_core::error::Result;
use onestop_core::id::random_id;
use onestop_core::student::{Application, ApplicationStatus};
use onestop_core::university;

/// What a submit produced.
#[derive(Debug, Clone, Default)]
pub struct CheckoutOutcome {
    /// Applications created, in selection order.
    pub submitted: Vec<Application>,
    /// University ids skipped (already applied, or not in the catalog).
    pub skipped: Vec<String>,
    /// Sum of fees of the submitted applications, in rupees.
    pub total_fee: u32,
}

/// Creates applications from a university selection.
#[derive(Clone)]
pub struct ApplicationCheckout {
    student: StudentManager,
}

impl ApplicationCheckout {
    pub fn new(student: StudentManager) -> Self {
        Self { student }
    }

    /// Fee total for a selection as shown before submitting, regardless of
    /// whether some entries would be skipped. Unknown ids contribute zero.
    pub fn quote(&self, university_ids: &[&str]) -> u32 {
        university_ids
            .iter()
            .filter_map(|id| university::find(id))
            .map(|u| u.fee)
            .sum()
    }

    /// Creates one application per selected university: first listed course,
    /// today's date, status Applied, catalog fee. Already-applied and
    /// unknown ids are skipped.
    pub async fn submit(&self, university_ids: &[&str]) -> Result<CheckoutOutcome> {
        let mut outcome = CheckoutOutcome::default();

        for id in university_ids {
            let Some(uni) = university::find(id) else {
                tracing::warn!(university_id = id, "unknown university skipped");
                outcome.skipped.push(id.to_string());
                continue;
            };
            if self.student.has_applied(id).await {
                outcome.skipped.push(id.to_string());
                continue;
            }

            let application = Application {
                id: random_id("app"),
                university_id: uni.id.to_string(),
                university_name: uni.name.to_string(),
                course: uni
                    .courses
                    .first()
                    .copied()
                    .unwrap_or_default()
                    .to_string(),
                applied_date: today_string(),
                status: ApplicationStatus::Applied,
                fee: uni.fee,
            };
            self.student.add_application(application.clone()).await?;
            outcome.total_fee += application.fee;
            outcome.submitted.push(application);
        }

        tracing::info!(
            submitted = outcome.submitted.len(),
            skipped = outcome.skipped.len(),
            total_fee = outcome.total_fee,
            "checkout complete"
        );
        Ok(outcome)
    }
}
