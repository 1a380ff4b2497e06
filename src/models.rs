//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Dish data structure (matches backend wire format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    #[serde(rename = "task")]
    pub label: String,
    pub price: String,
    #[serde(rename = "art", default)]
    pub category: String,
    #[serde(default)]
    pub completed: bool,
}

/// Plan entry (matches backend wire format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    #[serde(rename = "plan")]
    pub label: String,
    #[serde(default)]
    pub dish_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Plan joined with its dish for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    pub plan_id: String,
    pub label: String,
    pub price: Option<String>,
    pub category: Option<String>,
    pub link: String,
}

impl PlanRow {
    pub fn is_orphaned(&self) -> bool {
        self.link == "orphaned"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
}

/// Admin session state, tagged by `status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AuthState {
    Anonymous,
    Authenticating,
    Authenticated(AuthUser),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn user_email(&self) -> Option<String> {
        match self {
            AuthState::Authenticated(user) => Some(user.email.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayView {
    pub date: String,
    pub weekday: String,
    pub today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekView {
    pub label: String,
    pub days: Vec<DayView>,
}
