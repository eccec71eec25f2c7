//! User domain model.

use crate::error::HelpdeskError;
use serde::{Deserialize, Serialize};

/// Access role attached to every user account.
///
/// Roles form a closed set so authorization decisions can match exhaustively
/// instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Agent,
    Admin,
}

impl Role {
    /// True for roles that work tickets on behalf of the helpdesk.
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Agent | Role::Admin)
    }

    /// The wire/display name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Agent => "agent",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "agent" => Ok(Role::Agent),
            "admin" => Ok(Role::Admin),
            other => Err(HelpdeskError::validation(format!(
                "unknown role '{other}' (expected customer, agent or admin)"
            ))),
        }
    }
}

/// A user account as returned by the server.
///
/// Immutable once fetched; replaced wholesale on re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Payload for creating a user account (admin screen).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), "\"agent\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn role_parses_from_str() {
        assert_eq!("customer".parse::<Role>().unwrap(), Role::Customer);
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn staff_roles() {
        assert!(Role::Agent.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(!Role::Customer.is_staff());
    }

    #[test]
    fn user_deserializes_from_server_shape() {
        let user: User = serde_json::from_str(
            r#"{"id":4,"name":"Dana","email":"dana@example.com","role":"agent"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Agent);
        assert_eq!(user.id, 4);
    }
}
