//! University catalog.
//!
//! A fixed in-memory catalog stands in for a real university directory; the
//! browser screen filters it by free-text search and accepted exams.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Government or private institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UniversityKind {
    Government,
    Private,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct University {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub kind: UniversityKind,
    /// Offered courses; the first is used when applying.
    pub courses: &'static [&'static str],
    /// Ids of accepted entrance exams (see [`exams`]).
    pub exams: &'static [&'static str],
    /// Application fee in rupees
    pub fee: u32,
    pub rating: f32,
}

/// One entrance exam the catalog can be filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exam {
    pub id: &'static str,
    pub name: &'static str,
}

/// The entrance exams known to the catalog.
pub static EXAMS: &[Exam] = &[
    Exam { id: "jee-main", name: "JEE Main" },
    Exam { id: "jee-advanced", name: "JEE Advanced" },
    Exam { id: "neet", name: "NEET" },
    Exam { id: "cuet", name: "CUET" },
    Exam { id: "bitsat", name: "BITSAT" },
    Exam { id: "viteee", name: "VITEEE" },
    Exam { id: "srmjeee", name: "SRMJEEE" },
    Exam { id: "met", name: "MET" },
    Exam { id: "wbjee", name: "WBJEE" },
];

static CATALOG: Lazy<Vec<University>> = Lazy::new(|| {
    use UniversityKind::{Government, Private};
    vec![
        University {
            id: "1",
            name: "Indian Institute of Technology Delhi",
            location: "New Delhi",
            kind: Government,
            courses: &["B.Tech", "M.Tech", "PhD"],
            exams: &["jee-advanced"],
            fee: 2500,
            rating: 4.9,
        },
        University {
            id: "2",
            name: "Delhi University",
            location: "New Delhi",
            kind: Government,
            courses: &["BA", "B.Com", "B.Sc", "MA", "M.Sc"],
            exams: &["cuet"],
            fee: 800,
            rating: 4.5,
        },
        University {
            id: "3",
            name: "BITS Pilani",
            location: "Pilani, Rajasthan",
            kind: Private,
            courses: &["B.E.", "M.E.", "MBA"],
            exams: &["bitsat"],
            fee: 3500,
            rating: 4.7,
        },
        University {
            id: "4",
            name: "VIT Vellore",
            location: "Vellore, Tamil Nadu",
            kind: Private,
            courses: &["B.Tech", "M.Tech", "MCA"],
            exams: &["viteee", "jee-main"],
            fee: 2000,
            rating: 4.4,
        },
        University {
            id: "5",
            name: "Jamia Millia Islamia",
            location: "New Delhi",
            kind: Government,
            courses: &["BA", "B.Tech", "MBBS", "BBA"],
            exams: &["cuet", "jee-main", "neet"],
            fee: 600,
            rating: 4.3,
        },
        University {
            id: "6",
            name: "SRM Institute of Science and Technology",
            location: "Chennai, Tamil Nadu",
            kind: Private,
            courses: &["B.Tech", "M.Tech", "MBA", "MCA"],
            exams: &["srmjeee", "jee-main"],
            fee: 2800,
            rating: 4.2,
        },
        University {
            id: "7",
            name: "Jadavpur University",
            location: "Kolkata, West Bengal",
            kind: Government,
            courses: &["B.E.", "M.E.", "BA", "M.Sc"],
            exams: &["wbjee", "cuet"],
            fee: 500,
            rating: 4.6,
        },
        University {
            id: "8",
            name: "Manipal Academy of Higher Education",
            location: "Manipal, Karnataka",
            kind: Private,
            courses: &["MBBS", "B.Tech", "BDS", "B.Pharm"],
            exams: &["met", "neet"],
            fee: 4000,
            rating: 4.5,
        },
        University {
            id: "9",
            name: "NIT Trichy",
            location: "Tiruchirappalli, Tamil Nadu",
            kind: Government,
            courses: &["B.Tech", "M.Tech", "PhD"],
            exams: &["jee-main"],
            fee: 1500,
            rating: 4.7,
        },
        University {
            id: "10",
            name: "AIIMS Delhi",
            location: "New Delhi",
            kind: Government,
            courses: &["MBBS", "MD", "MS", "PhD"],
            exams: &["neet"],
            fee: 1000,
            rating: 4.9,
        },
        University {
            id: "11",
            name: "Banaras Hindu University",
            location: "Varanasi, Uttar Pradesh",
            kind: Government,
            courses: &["BA", "B.Sc", "B.Tech", "MBBS"],
            exams: &["cuet", "jee-main", "neet"],
            fee: 700,
            rating: 4.4,
        },
        University {
            id: "12",
            name: "Christ University",
            location: "Bangalore, Karnataka",
            kind: Private,
            courses: &["BA", "B.Com", "BBA", "B.Sc"],
            exams: &["cuet"],
            fee: 1200,
            rating: 4.3,
        },
    ]
});

/// The full catalog, in display order.
pub fn catalog() -> &'static [University] {
    &CATALOG
}

/// Looks up one university by catalog id.
pub fn find(id: &str) -> Option<&'static University> {
    CATALOG.iter().find(|u| u.id == id)
}

/// Filters the catalog the way the browser screen does: a case-insensitive
/// substring match on name or location, intersected with an exam filter
/// (empty exam list means no exam filtering).
pub fn search(query: &str, exam_ids: &[&str]) -> Vec<&'static University> {
    let query = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|u| {
            let matches_search = query.is_empty()
                || u.name.to_lowercase().contains(&query)
                || u.location.to_lowercase().contains(&query);
            let matches_exam =
                exam_ids.is_empty() || exam_ids.iter().any(|e| u.exams.contains(e));
            matches_search && matches_exam
        })
        .collect()
}
