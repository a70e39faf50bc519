//! Request and response bodies for `/api/auth/*`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::{lenient_user_id, UserSummary};

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/auth/login`.
///
/// On failure only `success` and `message` are populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "lenient_user_id")]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub education_level: Option<EducationLevel>,
}

impl LoginResponse {
    /// The user record to cache alongside the token.
    pub fn user(&self) -> UserSummary {
        UserSummary {
            user_id: self.user_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
}

/// Response of `POST /api/auth/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_user_id")]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationLevel {
    MiddleSchool,
    HighSchool,
    University,
    PostGraduate,
    Other,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::MiddleSchool,
        EducationLevel::HighSchool,
        EducationLevel::University,
        EducationLevel::PostGraduate,
        EducationLevel::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EducationLevel::MiddleSchool => "Middle School",
            EducationLevel::HighSchool => "High School",
            EducationLevel::University => "University",
            EducationLevel::PostGraduate => "Post Graduate",
            EducationLevel::Other => "Other",
        }
    }
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "middle_school" => Ok(EducationLevel::MiddleSchool),
            "high_school" => Ok(EducationLevel::HighSchool),
            "university" => Ok(EducationLevel::University),
            "post_graduate" => Ok(EducationLevel::PostGraduate),
            "other" => Ok(EducationLevel::Other),
            _ => Err(format!("unknown education level: {}", s)),
        }
    }
}
