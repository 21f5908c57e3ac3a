//! Student profile domain model.
//!
//! One flat record shared across every university application. All fields
//! default to empty strings (or `false` for the category flags) and are
//! mutated field-by-field through [`ProfileUpdate`]; nothing is ever null.

use serde::{Deserialize, Serialize};

/// The single unified student record.
///
/// Field names serialize in camelCase to match the persisted contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentProfile {
    // Personal details
    pub full_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,

    // Academic details
    pub tenth_board: String,
    pub tenth_school: String,
    pub tenth_year: String,
    pub tenth_percentage: String,
    pub twelfth_board: String,
    pub twelfth_school: String,
    pub twelfth_year: String,
    pub twelfth_percentage: String,
    pub stream: String,

    // Exam details
    pub jee_main_rank: String,
    pub jee_advanced_rank: String,
    pub neet_rank: String,
    pub cuet_score: String,
    pub other_exams: String,

    // Category
    pub category: String,
    #[serde(rename = "isEWS")]
    pub is_ews: bool,
    #[serde(rename = "isPWD")]
    pub is_pwd: bool,
}

/// A partial profile update: one optional value per field.
///
/// Merging is last-write-wins per field and performs no validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub tenth_board: Option<String>,
    pub tenth_school: Option<String>,
    pub tenth_year: Option<String>,
    pub tenth_percentage: Option<String>,
    pub twelfth_board: Option<String>,
    pub twelfth_school: Option<String>,
    pub twelfth_year: Option<String>,
    pub twelfth_percentage: Option<String>,
    pub stream: Option<String>,
    pub jee_main_rank: Option<String>,
    pub jee_advanced_rank: Option<String>,
    pub neet_rank: Option<String>,
    pub cuet_score: Option<String>,
    pub other_exams: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "isEWS")]
    pub is_ews: Option<bool>,
    #[serde(rename = "isPWD")]
    pub is_pwd: Option<bool>,
}

macro_rules! merge_fields {
    ($update:ident, $profile:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $update.$field {
                $profile.$field = value;
            }
        )+
    };
}

impl ProfileUpdate {
    /// Applies this update to a profile. Fields left as `None` keep their
    /// previous values.
    pub fn apply_to(self, profile: &mut StudentProfile) {
        let update = self;
        merge_fields!(
            update,
            profile,
            full_name,
            date_of_birth,
            gender,
            phone,
            email,
            address,
            city,
            state,
            pincode,
            tenth_board,
            tenth_school,
            tenth_year,
            tenth_percentage,
            twelfth_board,
            twelfth_school,
            twelfth_year,
            twelfth_percentage,
            stream,
            jee_main_rank,
            jee_advanced_rank,
            neet_rank,
            cuet_score,
            other_exams,
            category,
            is_ews,
            is_pwd,
        );
    }

    /// Builds a single-field update from a camelCase field name and a raw
    /// string value.
    ///
    /// The two boolean fields (`isEWS`, `isPWD`) accept `true`/`false`.
    /// Returns `None` for unknown field names or unparseable booleans.
    pub fn from_field(field: &str, value: &str) -> Option<Self> {
        let mut update = Self::default();
        match field {
            "fullName" => update.full_name = Some(value.to_string()),
            "dateOfBirth" => update.date_of_birth = Some(value.to_string()),
            "gender" => update.gender = Some(value.to_string()),
            "phone" => update.phone = Some(value.to_string()),
            "email" => update.email = Some(value.to_string()),
            "address" => update.address = Some(value.to_string()),
            "city" => update.city = Some(value.to_string()),
            "state" => update.state = Some(value.to_string()),
            "pincode" => update.pincode = Some(value.to_string()),
            "tenthBoard" => update.tenth_board = Some(value.to_string()),
            "tenthSchool" => update.tenth_school = Some(value.to_string()),
            "tenthYear" => update.tenth_year = Some(value.to_string()),
            "tenthPercentage" => update.tenth_percentage = Some(value.to_string()),
            "twelfthBoard" => update.twelfth_board = Some(value.to_string()),
            "twelfthSchool" => update.twelfth_school = Some(value.to_string()),
            "twelfthYear" => update.twelfth_year = Some(value.to_string()),
            "twelfthPercentage" => update.twelfth_percentage = Some(value.to_string()),
            "stream" => update.stream = Some(value.to_string()),
            "jeeMainRank" => update.jee_main_rank = Some(value.to_string()),
            "jeeAdvancedRank" => update.jee_advanced_rank = Some(value.to_string()),
            "neetRank" => update.neet_rank = Some(value.to_string()),
            "cuetScore" => update.cuet_score = Some(value.to_string()),
            "otherExams" => update.other_exams = Some(value.to_string()),
            "category" => update.category = Some(value.to_string()),
            "isEWS" => update.is_ews = Some(value.parse().ok()?),
            "isPWD" => update.is_pwd = Some(value.parse().ok()?),
            _ => return None,
        }
        Some(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_all_empty() {
        let profile = StudentProfile::default();
        assert_eq!(profile.full_name, "");
        assert_eq!(profile.cuet_score, "");
        assert!(!profile.is_ews);
        assert!(!profile.is_pwd);
    }

    #[test]
    fn test_apply_changes_only_named_field() {
        let mut profile = StudentProfile {
            full_name: "Asha".to_string(),
            city: "Pune".to_string(),
            ..Default::default()
        };
        let before = profile.clone();

        let update = ProfileUpdate {
            city: Some("Delhi".to_string()),
            ..Default::default()
        };
        update.apply_to(&mut profile);

        assert_eq!(profile.city, "Delhi");
        // Every other field is untouched.
        let expected = StudentProfile {
            city: "Delhi".to_string(),
            ..before
        };
        assert_eq!(profile, expected);
    }

    #[test]
    fn test_from_field_string_and_bool() {
        let update = ProfileUpdate::from_field("fullName", "Asha").unwrap();
        assert_eq!(update.full_name.as_deref(), Some("Asha"));

        let update = ProfileUpdate::from_field("isEWS", "true").unwrap();
        assert_eq!(update.is_ews, Some(true));

        assert!(ProfileUpdate::from_field("isPWD", "maybe").is_none());
        assert!(ProfileUpdate::from_field("noSuchField", "x").is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let profile = StudentProfile {
            full_name: "Asha".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["fullName"], "Asha");
        assert_eq!(json["isEWS"], false);
    }
}
