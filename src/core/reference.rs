//! Reference data: categories, statuses, and priorities
//!
//! These are small lookup tables seeded at store initialization and
//! read-only afterwards. Tickets reference rows by id; the rows themselves
//! are never mutated through the application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a category row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

/// Identifier of a status row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusId(pub u32);

/// Identifier of a priority row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PriorityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ticket category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

/// A ticket status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
    pub color: String,
}

/// A ticket priority with a numeric urgency level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Priority {
    pub id: PriorityId,
    pub name: String,
    pub level: u8,
}

/// The full set of reference rows, loaded in one piece
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    pub categories: Vec<Category>,
    pub statuses: Vec<Status>,
    pub priorities: Vec<Priority>,
}

impl ReferenceData {
    /// The rows written by `init`
    #[must_use]
    pub fn seed() -> Self {
        Self {
            categories: vec![
                category(1, "Hardware", "Workstations, printers, and peripherals"),
                category(2, "Software", "Installed applications and licensing"),
                category(3, "Network", "Connectivity, VPN, and access"),
                category(4, "Other", "Anything that fits nowhere else"),
            ],
            statuses: vec![
                status(1, "Open", "blue"),
                status(2, "In Progress", "orange"),
                status(3, "Resolved", "green"),
                status(4, "Closed", "gray"),
            ],
            priorities: vec![
                priority(1, "Low", 1),
                priority(2, "Medium", 2),
                priority(3, "High", 3),
                priority(4, "Critical", 4),
            ],
        }
    }

    /// Look up a category by id
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a status by id
    #[must_use]
    pub fn status(&self, id: StatusId) -> Option<&Status> {
        self.statuses.iter().find(|s| s.id == id)
    }

    /// Look up a priority by id
    #[must_use]
    pub fn priority(&self, id: PriorityId) -> Option<&Priority> {
        self.priorities.iter().find(|p| p.id == id)
    }

    /// The status new tickets start in (the row with the lowest id)
    #[must_use]
    pub fn initial_status(&self) -> Option<&Status> {
        self.statuses.iter().min_by_key(|s| s.id.0)
    }

    /// Resolve a status given either its id or its name (case-insensitive)
    #[must_use]
    pub fn resolve_status(&self, reference: &str) -> Option<&Status> {
        if let Ok(id) = reference.parse::<u32>() {
            return self.status(StatusId(id));
        }
        self.statuses
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(reference.trim()))
    }

    /// Resolve a category given either its id or its name (case-insensitive)
    #[must_use]
    pub fn resolve_category(&self, reference: &str) -> Option<&Category> {
        if let Ok(id) = reference.parse::<u32>() {
            return self.category(CategoryId(id));
        }
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(reference.trim()))
    }

    /// Resolve a priority given either its id or its name (case-insensitive)
    #[must_use]
    pub fn resolve_priority(&self, reference: &str) -> Option<&Priority> {
        if let Ok(id) = reference.parse::<u32>() {
            return self.priority(PriorityId(id));
        }
        self.priorities
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(reference.trim()))
    }
}

fn category(id: u32, name: &str, description: &str) -> Category {
    Category {
        id: CategoryId(id),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn status(id: u32, name: &str, color: &str) -> Status {
    Status {
        id: StatusId(id),
        name: name.to_string(),
        color: color.to_string(),
    }
}

fn priority(id: u32, name: &str, level: u8) -> Priority {
    Priority {
        id: PriorityId(id),
        name: name.to_string(),
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_all_tables() {
        let reference = ReferenceData::seed();
        assert!(!reference.categories.is_empty());
        assert!(!reference.statuses.is_empty());
        assert!(!reference.priorities.is_empty());
    }

    #[test]
    fn test_initial_status_is_lowest_id() {
        let reference = ReferenceData::seed();
        let initial = reference.initial_status().unwrap();
        assert_eq!(initial.id, StatusId(1));
        assert_eq!(initial.name, "Open");
    }

    #[test]
    fn test_lookup_by_id() {
        let reference = ReferenceData::seed();
        assert_eq!(reference.category(CategoryId(2)).unwrap().name, "Software");
        assert_eq!(reference.priority(PriorityId(4)).unwrap().level, 4);
        assert!(reference.status(StatusId(99)).is_none());
    }

    #[test]
    fn test_resolve_by_name_is_case_insensitive() {
        let reference = ReferenceData::seed();
        assert_eq!(
            reference.resolve_status("in progress").unwrap().id,
            StatusId(2)
        );
        assert_eq!(
            reference.resolve_category("NETWORK").unwrap().id,
            CategoryId(3)
        );
        assert!(reference.resolve_priority("urgent").is_none());
    }

    #[test]
    fn test_resolve_by_numeric_id() {
        let reference = ReferenceData::seed();
        assert_eq!(reference.resolve_status("3").unwrap().name, "Resolved");
        assert!(reference.resolve_status("42").is_none());
    }
}
