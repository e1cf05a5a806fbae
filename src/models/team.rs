//! Team member model.
//!
//! The roster record cost metrics and assignment validation consume.
//! The layout engine itself never looks at the team.

use serde::{Deserialize, Serialize};

/// A member of the project team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Unique member identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role description (e.g. "Backend Engineer").
    #[serde(default)]
    pub role: String,
    /// Billing rate per hour.
    #[serde(default)]
    pub hourly_rate: f64,
    /// Availability in percent (0.0 to 100.0).
    #[serde(default)]
    pub availability: f64,
}

impl TeamMember {
    /// Creates a new team member.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role: String::new(),
            hourly_rate: 0.0,
            availability: 100.0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the hourly billing rate.
    pub fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = rate;
        self
    }

    /// Sets the availability percentage.
    pub fn with_availability(mut self, percent: f64) -> Self {
        self.availability = percent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_builder() {
        let member = TeamMember::new("m1")
            .with_name("Ada")
            .with_role("Engineer")
            .with_hourly_rate(95.0)
            .with_availability(80.0);

        assert_eq!(member.id, "m1");
        assert_eq!(member.name, "Ada");
        assert_eq!(member.role, "Engineer");
        assert!((member.hourly_rate - 95.0).abs() < 1e-10);
        assert!((member.availability - 80.0).abs() < 1e-10);
    }

    #[test]
    fn test_member_wire_shape() {
        let json = r#"{"id": "m1", "name": "Ada", "role": "Engineer", "hourlyRate": 95.0, "availability": 80.0}"#;
        let member: TeamMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.name, "Ada");
        assert!((member.hourly_rate - 95.0).abs() < 1e-10);
    }
}
