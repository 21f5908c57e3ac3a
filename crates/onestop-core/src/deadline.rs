//! Exam and deadline tracker catalog.
//!
//! Like the university catalog, deadlines are fixed demo data; only the
//! day-count math depends on the current date, which callers pass in so the
//! helpers stay deterministic under test.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// What kind of date this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineKind {
    Exam,
    Application,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One tracked date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deadline {
    pub id: &'static str,
    pub title: &'static str,
    pub date: NaiveDate,
    pub kind: DeadlineKind,
    pub priority: Priority,
    pub description: &'static str,
}

impl Deadline {
    /// Signed number of days from `today` to this deadline. Negative means
    /// the date has passed.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid catalog date")
}

static CATALOG: Lazy<Vec<Deadline>> = Lazy::new(|| {
    vec![
        Deadline {
            id: "1",
            title: "JEE Main Session 2 Registration Ends",
            date: date(2024, 2, 15),
            kind: DeadlineKind::Application,
            priority: Priority::High,
            description: "Last date to register for JEE Main Session 2 examination.",
        },
        Deadline {
            id: "2",
            title: "NEET UG 2024 Exam",
            date: date(2024, 5, 5),
            kind: DeadlineKind::Exam,
            priority: Priority::High,
            description: "National Eligibility cum Entrance Test for medical admissions.",
        },
        Deadline {
            id: "3",
            title: "CUET UG Registration",
            date: date(2024, 3, 1),
            kind: DeadlineKind::Application,
            priority: Priority::Medium,
            description: "Common University Entrance Test registration begins.",
        },
        Deadline {
            id: "4",
            title: "JEE Advanced 2024",
            date: date(2024, 5, 26),
            kind: DeadlineKind::Exam,
            priority: Priority::High,
            description: "Joint Entrance Examination Advanced for IIT admissions.",
        },
        Deadline {
            id: "5",
            title: "BITSAT 2024 Exam Window",
            date: date(2024, 5, 20),
            kind: DeadlineKind::Exam,
            priority: Priority::Medium,
            description: "BITS Admission Test examination period starts.",
        },
        Deadline {
            id: "6",
            title: "Delhi University Application Deadline",
            date: date(2024, 6, 30),
            kind: DeadlineKind::Application,
            priority: Priority::Medium,
            description: "Last date for undergraduate admissions at DU.",
        },
        Deadline {
            id: "7",
            title: "JEE Main Session 1 Results",
            date: date(2024, 2, 20),
            kind: DeadlineKind::Result,
            priority: Priority::High,
            description: "Expected date for JEE Main Session 1 results.",
        },
        Deadline {
            id: "8",
            title: "VITEEE 2024",
            date: date(2024, 4, 19),
            kind: DeadlineKind::Exam,
            priority: Priority::Low,
            description: "VIT Engineering Entrance Examination.",
        },
    ]
});

/// The full deadline catalog, unsorted.
pub fn catalog() -> &'static [Deadline] {
    &CATALOG
}

/// Deadlines still ahead of `today`, soonest first.
pub fn upcoming(today: NaiveDate) -> Vec<&'static Deadline> {
    let mut items: Vec<&Deadline> = CATALOG
        .iter()
        .filter(|d| d.days_remaining(today) > 0)
        .collect();
    items.sort_by_key(|d| d.date);
    items
}

/// Upcoming deadlines within the next 7 days.
pub fn urgent(today: NaiveDate) -> Vec<&'static Deadline> {
    upcoming(today)
        .into_iter()
        .filter(|d| d.days_remaining(today) <= 7)
        .collect()
}
