//! Column sorting for the roster table.

use std::cmp::Reverse;

use crate::model::employee::Employee;

/// Columns the roster can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    #[default]
    Id,
    FirstName,
    Email,
    Phone,
    Department,
    Position,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Arrow shown next to the active column header.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Number(i64),
    Text(String),
}

impl SortField {
    fn key(self, employee: &Employee) -> SortKey {
        let text = match self {
            SortField::Id => return SortKey::Number(employee.id),
            SortField::FirstName => employee.first_name.as_str(),
            SortField::Email => employee.email.as_str(),
            SortField::Phone => employee.phone.as_deref().unwrap_or_default(),
            SortField::Department => employee.department.as_str(),
            SortField::Position => employee.position.as_str(),
            SortField::Status => employee.status().label(),
        };
        SortKey::Text(text.to_lowercase())
    }
}

/// Stable sort in place. Keys are computed once per row. Descending order
/// reverses the key only, so rows with equal keys keep their input order in
/// both directions.
pub fn sort(rows: &mut [&Employee], spec: SortSpec) {
    match spec.direction {
        SortDirection::Asc => rows.sort_by_cached_key(|employee| spec.field.key(employee)),
        SortDirection::Desc => {
            rows.sort_by_cached_key(|employee| Reverse(spec.field.key(employee)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::sample;

    fn sorted_ids(employees: &[Employee], field: SortField, direction: SortDirection) -> Vec<i64> {
        let mut rows: Vec<&Employee> = employees.iter().collect();
        sort(&mut rows, SortSpec { field, direction });
        rows.iter().map(|employee| employee.id).collect()
    }

    #[test]
    fn first_name_sort_ignores_case() {
        let employees = vec![sample(1, "Bob", "Stone"), sample(2, "alice", "Wong")];

        assert_eq!(
            sorted_ids(&employees, SortField::FirstName, SortDirection::Asc),
            vec![2, 1]
        );
    }

    #[test]
    fn id_sorts_numerically() {
        let employees = vec![sample(10, "A", "A"), sample(9, "B", "B"), sample(100, "C", "C")];

        assert_eq!(
            sorted_ids(&employees, SortField::Id, SortDirection::Asc),
            vec![9, 10, 100]
        );
        assert_eq!(
            sorted_ids(&employees, SortField::Id, SortDirection::Desc),
            vec![100, 10, 9]
        );
    }

    #[test]
    fn missing_phone_sorts_first() {
        let mut with_phone = sample(1, "A", "A");
        with_phone.phone = Some("+91 98450 00000".to_string());
        let without_phone = sample(2, "B", "B");
        let employees = vec![with_phone, without_phone];

        assert_eq!(
            sorted_ids(&employees, SortField::Phone, SortDirection::Asc),
            vec![2, 1]
        );
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let mut employees = vec![
            sample(1, "Dee", "A"),
            sample(2, "Ann", "B"),
            sample(3, "Dee", "C"),
            sample(4, "Ann", "D"),
        ];
        employees[1].department = "Sales".to_string();

        assert_eq!(
            sorted_ids(&employees, SortField::FirstName, SortDirection::Asc),
            vec![2, 4, 1, 3]
        );
        assert_eq!(
            sorted_ids(&employees, SortField::FirstName, SortDirection::Desc),
            vec![1, 3, 2, 4]
        );
        assert_eq!(
            sorted_ids(&employees, SortField::Department, SortDirection::Desc),
            vec![2, 1, 3, 4]
        );
    }
}
