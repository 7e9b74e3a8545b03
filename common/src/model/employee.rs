use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Leave days granted when the backend has no balance on record.
pub const DEFAULT_LEAVE_BALANCE: u32 = 20;

/// Employment status as exchanged with the backend.
///
/// The wire form is the human label (`"On Leave"`), which is also what the
/// status filter and the status badges display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl EmployeeStatus {
    /// All statuses in the order the status filter lists them.
    pub const ALL: [EmployeeStatus; 3] = [
        EmployeeStatus::Active,
        EmployeeStatus::Inactive,
        EmployeeStatus::OnLeave,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
            EmployeeStatus::OnLeave => "On Leave",
        }
    }

    /// Parses a status label. Returns `None` for anything that is not one of
    /// the three labels, including the empty "all statuses" option.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    /// CSS modifier used by status badges, e.g. `status-on-leave`.
    pub fn css_class(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "status-active",
            EmployeeStatus::Inactive => "status-inactive",
            EmployeeStatus::OnLeave => "status-on-leave",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An employee record as owned by the backend.
///
/// Optional columns stay `Option` so the default policy for each one is an
/// explicit accessor rather than a silent fallback during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub leave_balance: Option<u32>,
    #[serde(default)]
    pub leaves_taken: Option<u32>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// First letter of the first and last name, used for the avatar badge.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Status with the backend default applied (absent means active).
    pub fn status(&self) -> EmployeeStatus {
        self.status.unwrap_or_default()
    }

    pub fn salary(&self) -> f64 {
        self.salary.unwrap_or(0.0)
    }

    pub fn monthly_salary(&self) -> f64 {
        self.salary() / 12.0
    }

    pub fn daily_salary(&self) -> f64 {
        self.salary() / 365.0
    }

    pub fn leave_balance(&self) -> u32 {
        self.leave_balance.unwrap_or(DEFAULT_LEAVE_BALANCE)
    }

    pub fn leaves_taken(&self) -> u32 {
        self.leaves_taken.unwrap_or(0)
    }

    pub fn leave_remaining(&self) -> u32 {
        self.leave_balance().saturating_sub(self.leaves_taken())
    }
}

/// Body of a create (POST) or update (PUT) request: every employee field
/// except the backend-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: Option<NaiveDate>,
    pub status: EmployeeStatus,
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_balance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaves_taken: Option<u32>,
}

#[cfg(test)]
pub(crate) fn sample(id: i64, first_name: &str, last_name: &str) -> Employee {
    Employee {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@worksphere.test",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: None,
        department: "Engineering".to_string(),
        position: "Engineer".to_string(),
        salary: Some(60_000.0),
        hire_date: None,
        status: Some(EmployeeStatus::Active),
        address: None,
        leave_balance: None,
        leaves_taken: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape_with_missing_optionals() {
        let json = r#"{
            "id": 7,
            "firstName": "Asha",
            "lastName": "Rao",
            "email": "asha@corp.in",
            "phone": null,
            "department": "HR",
            "position": "Recruiter",
            "salary": 540000.0,
            "hireDate": "2024-03-15",
            "status": "On Leave"
        }"#;

        let employee: Employee = serde_json::from_str(json).expect("should parse employee");

        assert_eq!(employee.id, 7);
        assert_eq!(employee.status(), EmployeeStatus::OnLeave);
        assert_eq!(employee.hire_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(employee.phone, None);
        assert_eq!(employee.leave_balance(), DEFAULT_LEAVE_BALANCE);
        assert_eq!(employee.leaves_taken(), 0);
    }

    #[test]
    fn absent_status_defaults_to_active() {
        let mut employee = sample(1, "Bob", "Stone");
        employee.status = None;

        assert_eq!(employee.status(), EmployeeStatus::Active);
    }

    #[test]
    fn leave_remaining_never_underflows() {
        let mut employee = sample(1, "Bob", "Stone");
        employee.leave_balance = Some(5);
        employee.leaves_taken = Some(9);

        assert_eq!(employee.leave_remaining(), 0);
    }

    #[test]
    fn initials_and_full_name() {
        let employee = sample(1, "alice", "Wong");

        assert_eq!(employee.initials(), "AW");
        assert_eq!(employee.full_name(), "alice Wong");
    }

    #[test]
    fn status_labels_round_trip_through_from_label() {
        for status in EmployeeStatus::ALL {
            assert_eq!(EmployeeStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(EmployeeStatus::from_label(""), None);
        assert_eq!(EmployeeStatus::from_label("on leave"), None);
    }

    #[test]
    fn payload_serializes_camel_case_without_id() {
        let payload = EmployeePayload {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@corp.in".to_string(),
            phone: None,
            department: "HR".to_string(),
            position: "Recruiter".to_string(),
            salary: 1000.0,
            hire_date: None,
            status: EmployeeStatus::OnLeave,
            address: None,
            leave_balance: None,
            leaves_taken: None,
        };

        let value = serde_json::to_value(&payload).expect("should serialize payload");

        assert_eq!(value["firstName"], "Asha");
        assert_eq!(value["status"], "On Leave");
        assert!(value.get("id").is_none());
        assert!(value.get("leaveBalance").is_none());
    }
}
