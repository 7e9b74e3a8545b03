use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::employee::EmployeeStatus;

/// Workforce aggregate computed by the backend for the dashboard.
///
/// The client never aggregates the roster itself; it only derives ratios
/// from these numbers, and every ratio is zero when there are no employees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsSummary {
    pub total_employees: u64,
    pub total_salary: f64,
    pub average_salary: f64,
    /// Employees hired within the last 30 days.
    pub recent_hires: u64,
    pub status_breakdown: BTreeMap<String, u64>,
    pub department_breakdown: BTreeMap<String, u64>,
}

/// One coloured segment of the status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSegment {
    pub status: EmployeeStatus,
    pub count: u64,
    pub percentage: f64,
}

/// Order in which status segments and their legend are drawn.
const SEGMENT_ORDER: [EmployeeStatus; 3] = [
    EmployeeStatus::Active,
    EmployeeStatus::OnLeave,
    EmployeeStatus::Inactive,
];

impl StatisticsSummary {
    /// `count` as a percentage of all employees, 0 when there are none.
    pub fn percentage(&self, count: u64) -> f64 {
        if self.total_employees == 0 {
            return 0.0;
        }
        count as f64 / self.total_employees as f64 * 100.0
    }

    pub fn status_count(&self, status: EmployeeStatus) -> u64 {
        self.status_breakdown
            .get(status.label())
            .copied()
            .unwrap_or(0)
    }

    pub fn status_percentage(&self, status: EmployeeStatus) -> f64 {
        self.percentage(self.status_count(status))
    }

    /// Payroll per month, rounded to a whole amount.
    pub fn monthly_cost(&self) -> f64 {
        (self.total_salary / 12.0).round()
    }

    /// Status bar segments; statuses with no employees get no segment.
    pub fn status_segments(&self) -> Vec<StatusSegment> {
        SEGMENT_ORDER
            .into_iter()
            .filter_map(|status| {
                let count = self.status_count(status);
                (count > 0).then(|| StatusSegment {
                    status,
                    count,
                    percentage: self.percentage(count),
                })
            })
            .collect()
    }

    /// Department head counts, largest first; equal counts keep name order.
    pub fn departments_by_size(&self) -> Vec<(&str, u64)> {
        let mut departments: Vec<(&str, u64)> = self
            .department_breakdown
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        departments.sort_by(|a, b| b.1.cmp(&a.1));
        departments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total: u64, statuses: &[(&str, u64)]) -> StatisticsSummary {
        StatisticsSummary {
            total_employees: total,
            status_breakdown: statuses
                .iter()
                .map(|(name, count)| (name.to_string(), *count))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn status_segments_follow_breakdown_shares() {
        let stats = summary(10, &[("Active", 8), ("On Leave", 2)]);

        let segments = stats.status_segments();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].status, EmployeeStatus::Active);
        assert_eq!(segments[0].percentage, 80.0);
        assert_eq!(segments[1].status, EmployeeStatus::OnLeave);
        assert_eq!(segments[1].percentage, 20.0);
        assert_eq!(stats.status_percentage(EmployeeStatus::Inactive), 0.0);
    }

    #[test]
    fn empty_workforce_yields_zero_not_nan() {
        let stats = summary(0, &[]);

        let active = stats.status_percentage(EmployeeStatus::Active);

        assert_eq!(active, 0.0);
        assert!(!active.is_nan());
        assert!(stats.status_segments().is_empty());
        assert_eq!(stats.monthly_cost(), 0.0);
    }

    #[test]
    fn monthly_cost_is_rounded() {
        let stats = StatisticsSummary {
            total_salary: 1_000_000.0,
            ..Default::default()
        };

        assert_eq!(stats.monthly_cost(), 83_333.0);
    }

    #[test]
    fn departments_sorted_by_count_descending() {
        let stats = StatisticsSummary {
            department_breakdown: [("HR", 2), ("IT", 5), ("Sales", 2)]
                .into_iter()
                .map(|(name, count)| (name.to_string(), count))
                .collect(),
            ..Default::default()
        };

        assert_eq!(
            stats.departments_by_size(),
            vec![("IT", 5), ("HR", 2), ("Sales", 2)]
        );
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let stats: StatisticsSummary =
            serde_json::from_str(r#"{"totalEmployees": 3, "statusBreakdown": {"Active": 3}}"#)
                .expect("should parse statistics");

        assert_eq!(stats.total_employees, 3);
        assert_eq!(stats.average_salary, 0.0);
        assert!(stats.department_breakdown.is_empty());
        assert_eq!(stats.status_count(EmployeeStatus::Active), 3);
    }
}
