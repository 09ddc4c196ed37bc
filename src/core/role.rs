//! Account roles
//!
//! Roles form a closed set; every access decision in the system is keyed on
//! the actor's role rather than on per-user flags.

use crate::error::ServiceDeskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role tag carried by every user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Files tickets and sees only their own
    #[default]
    Employee,
    /// Works the unassigned pool plus tickets assigned to them
    Technician,
    /// Sees everything and manages accounts
    Admin,
}

impl Role {
    /// Whether this role may be the target of a ticket assignment
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Technician | Self::Admin)
    }

    /// Canonical stored form of the role tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "EMPLOYEE",
            Self::Technician => "TECHNICIAN",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ServiceDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EMPLOYEE" => Ok(Self::Employee),
            "TECHNICIAN" => Ok(Self::Technician),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(ServiceDeskError::InvalidRole {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("TECHNICIAN".parse::<Role>().unwrap(), Role::Technician);
        assert_eq!(" Employee ".parse::<Role>().unwrap(), Role::Employee);
        assert_eq!(Role::Admin.to_string(), "ADMIN");
    }

    #[test]
    fn test_role_parse_rejects_unknown_tags() {
        assert!(matches!(
            "superuser".parse::<Role>(),
            Err(ServiceDeskError::InvalidRole { .. })
        ));
    }

    #[test]
    fn test_staff_roles() {
        assert!(!Role::Employee.is_staff());
        assert!(Role::Technician.is_staff());
        assert!(Role::Admin.is_staff());
    }

    #[test]
    fn test_role_serde_uses_screaming_tags() {
        let yaml = serde_yaml::to_string(&Role::Technician).unwrap();
        assert_eq!(yaml.trim(), "TECHNICIAN");
        let parsed: Role = serde_yaml::from_str("ADMIN").unwrap();
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn test_default_role_is_employee() {
        assert_eq!(Role::default(), Role::Employee);
    }
}
