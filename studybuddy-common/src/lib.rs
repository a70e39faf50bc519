//! AI Study Buddy Common Types
//!
//! Wire types shared by the client library and anything else talking to the
//! Study Buddy API.

pub mod auth;
pub mod gamification;
pub mod user;

pub use auth::{EducationLevel, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use gamification::GamificationStats;
pub use user::UserSummary;
