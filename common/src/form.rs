//! Create/edit form model and the client-side validation that runs before
//! any request leaves the browser.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::model::employee::{Employee, EmployeePayload, EmployeeStatus};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    Salary,
    HireDate,
    Status,
    Address,
}

/// Field-level messages from a rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .messages.len())]
pub struct ValidationErrors {
    messages: BTreeMap<FormField, &'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    pub fn clear(&mut self, field: FormField) {
        self.messages.remove(&field);
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.messages.insert(field, message);
    }
}

/// Raw text of every form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub salary: String,
    /// `YYYY-MM-DD`, the value format of a date input.
    pub hire_date: String,
    pub status: EmployeeStatus,
    pub address: String,
    leave_balance: Option<u32>,
    leaves_taken: Option<u32>,
}

impl EmployeeDraft {
    /// Pre-fills the form for editing `employee`.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone().unwrap_or_default(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            salary: employee.salary.map(|s| s.to_string()).unwrap_or_default(),
            hire_date: employee
                .hire_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            status: employee.status(),
            address: employee.address.clone().unwrap_or_default(),
            leave_balance: employee.leave_balance,
            leaves_taken: employee.leaves_taken,
        }
    }

    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::FirstName => self.first_name.clone(),
            FormField::LastName => self.last_name.clone(),
            FormField::Email => self.email.clone(),
            FormField::Phone => self.phone.clone(),
            FormField::Department => self.department.clone(),
            FormField::Position => self.position.clone(),
            FormField::Salary => self.salary.clone(),
            FormField::HireDate => self.hire_date.clone(),
            FormField::Status => self.status.label().to_string(),
            FormField::Address => self.address.clone(),
        }
    }

    /// Stores an input's new text. Unknown status labels are ignored.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Department => self.department = value,
            FormField::Position => self.position = value,
            FormField::Salary => self.salary = value,
            FormField::HireDate => self.hire_date = value,
            FormField::Status => {
                if let Some(status) = EmployeeStatus::from_label(&value) {
                    self.status = status;
                }
            }
            FormField::Address => self.address = value,
        }
    }

    /// Stable text form of the draft, used to detect unsaved edits.
    pub fn fingerprint(&self) -> String {
        [
            FormField::FirstName,
            FormField::LastName,
            FormField::Email,
            FormField::Phone,
            FormField::Department,
            FormField::Position,
            FormField::Salary,
            FormField::HireDate,
            FormField::Status,
            FormField::Address,
        ]
        .into_iter()
        .map(|field| self.value(field))
        .collect::<Vec<_>>()
        .join("\u{1f}")
    }

    /// Checks every rule and returns the request body, or all messages at once.
    pub fn validate(&self) -> Result<EmployeePayload, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let required = [
            (FormField::FirstName, &self.first_name, "First name is required"),
            (FormField::LastName, &self.last_name, "Last name is required"),
            (FormField::Department, &self.department, "Department is required"),
            (FormField::Position, &self.position, "Position is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.insert(field, message);
            }
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(FormField::Email, "Email is required");
        } else if !EMAIL_RE.is_match(email) {
            errors.insert(FormField::Email, "Email is invalid");
        }

        let salary = self.salary.trim();
        let parsed_salary = if salary.is_empty() {
            errors.insert(FormField::Salary, "Salary is required");
            None
        } else {
            match salary.parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => Some(value),
                Ok(_) => {
                    errors.insert(FormField::Salary, "Salary must be greater than 0");
                    None
                }
                Err(_) => {
                    errors.insert(FormField::Salary, "Salary must be a number");
                    None
                }
            }
        };

        let hire_date = self.hire_date.trim();
        let parsed_hire_date = if hire_date.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(hire_date, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.insert(FormField::HireDate, "Hire date is invalid");
                    None
                }
            }
        };

        match parsed_salary {
            Some(salary) if errors.is_empty() => Ok(EmployeePayload {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email: email.to_string(),
                phone: optional(&self.phone),
                department: self.department.trim().to_string(),
                position: self.position.trim().to_string(),
                salary,
                hire_date: parsed_hire_date,
                status: self.status,
                address: optional(&self.address),
                leave_balance: self.leave_balance,
                leaves_taken: self.leaves_taken,
            }),
            _ => Err(errors),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::sample;

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha.rao@corp.in".to_string(),
            department: "HR".to_string(),
            position: "Recruiter".to_string(),
            salary: "540000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_draft_produces_trimmed_payload() {
        let mut draft = valid_draft();
        draft.first_name = "  Asha ".to_string();
        draft.phone = "   ".to_string();
        draft.hire_date = "2024-03-15".to_string();

        let payload = draft.validate().expect("draft should validate");

        assert_eq!(payload.first_name, "Asha");
        assert_eq!(payload.phone, None);
        assert_eq!(payload.salary, 540_000.0);
        assert_eq!(payload.hire_date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(payload.status, EmployeeStatus::Active);
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = EmployeeDraft::default()
            .validate()
            .expect_err("empty draft should be rejected");

        assert_eq!(errors.get(FormField::FirstName), Some("First name is required"));
        assert_eq!(errors.get(FormField::LastName), Some("Last name is required"));
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(errors.get(FormField::Department), Some("Department is required"));
        assert_eq!(errors.get(FormField::Position), Some("Position is required"));
        assert_eq!(errors.get(FormField::Salary), Some("Salary is required"));
        assert_eq!(errors.get(FormField::Phone), None);
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["asha", "asha@corp", "as ha@corp.in", "@corp.in"] {
            let mut draft = valid_draft();
            draft.email = email.to_string();

            let errors = draft.validate().expect_err("email should be rejected");

            assert_eq!(errors.get(FormField::Email), Some("Email is invalid"), "{email}");
        }
    }

    #[test]
    fn salary_must_be_positive_number() {
        let mut draft = valid_draft();

        draft.salary = "0".to_string();
        let errors = draft.validate().expect_err("zero salary should be rejected");
        assert_eq!(errors.get(FormField::Salary), Some("Salary must be greater than 0"));

        draft.salary = "-10".to_string();
        assert!(draft.validate().is_err());

        draft.salary = "lots".to_string();
        let errors = draft.validate().expect_err("text salary should be rejected");
        assert_eq!(errors.get(FormField::Salary), Some("Salary must be a number"));
    }

    #[test]
    fn bad_hire_date_is_rejected() {
        let mut draft = valid_draft();
        draft.hire_date = "15/03/2024".to_string();

        let errors = draft.validate().expect_err("date should be rejected");

        assert_eq!(errors.get(FormField::HireDate), Some("Hire date is invalid"));
    }

    #[test]
    fn clearing_a_field_error() {
        let mut errors = EmployeeDraft::default()
            .validate()
            .expect_err("empty draft should be rejected");

        errors.clear(FormField::Email);

        assert_eq!(errors.get(FormField::Email), None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn edit_draft_keeps_leave_figures() {
        let mut employee = sample(9, "Bob", "Stone");
        employee.leave_balance = Some(12);
        employee.hire_date = NaiveDate::from_ymd_opt(2023, 1, 9);

        let draft = EmployeeDraft::from_employee(&employee);
        let payload = draft.validate().expect("existing employee should validate");

        assert_eq!(draft.hire_date, "2023-01-09");
        assert_eq!(draft.salary, "60000");
        assert_eq!(payload.leave_balance, Some(12));
    }

    #[test]
    fn fingerprint_tracks_edits() {
        let mut draft = valid_draft();
        let before = draft.fingerprint();

        draft.set(FormField::Status, "On Leave".to_string());

        assert_ne!(draft.fingerprint(), before);
        assert_eq!(draft.status, EmployeeStatus::OnLeave);
    }
}
