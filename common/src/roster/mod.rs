//! Roster view-model: the employee snapshot plus the search, filter, sort and
//! paging inputs, and the pure `derive` step that projects them into the page
//! the table renders.
//!
//! Every setter that changes which rows match, or their order, sends the
//! user back to page 1. Moving between pages never touches the filters.

pub mod filter;
pub mod paginate;
pub mod sort;

use crate::model::employee::{Employee, EmployeeStatus};

pub use filter::RosterFilter;
pub use paginate::PageItem;
pub use sort::{SortDirection, SortField, SortSpec};

/// Rows per page offered by the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn rows(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    pub fn from_rows(rows: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.rows() == rows)
    }
}

/// Everything the roster table needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    /// Rows on the current page, already filtered and sorted.
    pub rows: Vec<Employee>,
    /// Number of employees matching the filters.
    pub matched: usize,
    /// Size of the whole snapshot.
    pub total: usize,
    pub current_page: usize,
    pub total_pages: usize,
    /// 1-based ordinal of the first row on the page, 0 when nothing matched.
    pub first_row: usize,
    /// 1-based ordinal of the last row on the page.
    pub last_row: usize,
    pub page_items: Vec<PageItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterState {
    employees: Vec<Employee>,
    filter: RosterFilter,
    sort: SortSpec,
    current_page: usize,
    page_size: PageSize,
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterState {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            filter: RosterFilter::default(),
            sort: SortSpec::default(),
            current_page: 1,
            page_size: PageSize::default(),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn filter(&self) -> &RosterFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Installs a fresh snapshot from the backend. The current page is kept
    /// when it still exists, otherwise it moves to the last page.
    pub fn replace_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    /// Drops the snapshot, e.g. after a failed reload.
    pub fn clear_employees(&mut self) {
        self.employees.clear();
        self.current_page = 1;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.current_page = 1;
    }

    /// `None` or an empty name shows every department.
    pub fn set_department_filter(&mut self, department: Option<String>) {
        self.filter.department = department.filter(|name| !name.is_empty());
        self.current_page = 1;
    }

    pub fn set_status_filter(&mut self, status: Option<EmployeeStatus>) {
        self.filter.status = status;
        self.current_page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filter = RosterFilter::default();
        self.current_page = 1;
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filter.is_empty()
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.current_page = 1;
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order.
    pub fn toggle_sort(&mut self, field: SortField) {
        let direction = if self.sort.field == field {
            self.sort.direction.flipped()
        } else {
            SortDirection::Asc
        };
        self.set_sort(SortSpec { field, direction });
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Moves to `page`, clamped to the pages that exist.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn total_pages(&self) -> usize {
        let matched = self
            .employees
            .iter()
            .filter(|employee| self.filter.matches(employee))
            .count();
        paginate::total_pages(matched, self.page_size.rows())
    }

    /// Distinct departments in first-seen order, for the department select.
    pub fn departments(&self) -> Vec<String> {
        let mut departments: Vec<String> = Vec::new();
        for employee in &self.employees {
            if !departments.contains(&employee.department) {
                departments.push(employee.department.clone());
            }
        }
        departments
    }

    /// Filter, then sort, then cut out the current page.
    pub fn derive(&self) -> DerivedView {
        let per_page = self.page_size.rows();
        let mut matched = filter::filter(&self.employees, &self.filter);
        sort::sort(&mut matched, self.sort);

        let total_pages = paginate::total_pages(matched.len(), per_page);
        let current_page = self.current_page.clamp(1, total_pages);
        let rows: Vec<Employee> = paginate::page_slice(&matched, current_page, per_page)
            .iter()
            .map(|employee| (*employee).clone())
            .collect();

        let offset = (current_page - 1) * per_page;
        let (first_row, last_row) = if rows.is_empty() {
            (0, 0)
        } else {
            (offset + 1, offset + rows.len())
        };

        DerivedView {
            matched: matched.len(),
            total: self.employees.len(),
            current_page,
            total_pages,
            first_row,
            last_row,
            page_items: paginate::page_items(current_page, total_pages),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::sample;

    fn state_with(count: i64) -> RosterState {
        let mut state = RosterState::new();
        state.replace_employees(
            (1..=count)
                .map(|id| sample(id, &format!("Name{id}"), "Person"))
                .collect(),
        );
        state
    }

    #[test]
    fn twenty_five_employees_make_three_pages() {
        let mut state = state_with(25);

        state.go_to_page(3);
        let view = state.derive();

        assert_eq!(view.total_pages, 3);
        assert_eq!(view.rows.len(), 5);
        assert_eq!((view.first_row, view.last_row), (21, 25));
        assert_eq!(view.matched, 25);
    }

    #[test]
    fn filter_changes_reset_to_first_page() {
        let mut state = state_with(25);

        state.go_to_page(2);
        state.set_search_term("Name");
        assert_eq!(state.current_page(), 1);

        state.go_to_page(2);
        state.set_department_filter(Some("Engineering".to_string()));
        assert_eq!(state.current_page(), 1);

        state.go_to_page(2);
        state.set_status_filter(Some(EmployeeStatus::Active));
        assert_eq!(state.current_page(), 1);

        state.go_to_page(2);
        state.set_page_size(PageSize::Twenty);
        assert_eq!(state.current_page(), 1);

        state.go_to_page(2);
        state.toggle_sort(SortField::Email);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn paging_keeps_filters() {
        let mut state = state_with(25);
        state.set_department_filter(Some("Engineering".to_string()));

        state.go_to_page(2);

        assert_eq!(state.current_page(), 2);
        assert_eq!(state.filter().department.as_deref(), Some("Engineering"));
    }

    #[test]
    fn go_to_page_clamps_to_existing_pages() {
        let mut state = state_with(25);

        state.go_to_page(9);
        assert_eq!(state.current_page(), 3);

        state.go_to_page(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn shrinking_snapshot_moves_to_last_page() {
        let mut state = state_with(25);
        state.go_to_page(3);

        state.replace_employees(state.employees()[..15].to_vec());

        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn toggle_sort_flips_active_column() {
        let mut state = state_with(3);

        state.toggle_sort(SortField::FirstName);
        assert_eq!(state.sort().direction, SortDirection::Asc);
        state.toggle_sort(SortField::FirstName);
        assert_eq!(state.sort().direction, SortDirection::Desc);
        state.toggle_sort(SortField::Email);
        assert_eq!(
            state.sort(),
            SortSpec {
                field: SortField::Email,
                direction: SortDirection::Asc
            }
        );
    }

    #[test]
    fn derive_sorts_before_paging() {
        let mut state = state_with(12);
        state.set_sort(SortSpec {
            field: SortField::Id,
            direction: SortDirection::Desc,
        });

        let view = state.derive();

        assert_eq!(view.rows.first().map(|e| e.id), Some(12));
        assert_eq!(view.rows.last().map(|e| e.id), Some(3));
    }

    #[test]
    fn empty_result_reports_zero_rows() {
        let mut state = state_with(4);
        state.set_search_term("nobody");

        let view = state.derive();

        assert_eq!(view.matched, 0);
        assert_eq!(view.total, 4);
        assert_eq!(view.total_pages, 1);
        assert_eq!((view.first_row, view.last_row), (0, 0));
    }

    #[test]
    fn departments_are_unique_in_first_seen_order() {
        let mut state = state_with(3);
        let mut employees = state.employees().to_vec();
        employees[0].department = "Sales".to_string();
        employees[2].department = "Sales".to_string();
        state.replace_employees(employees);

        assert_eq!(state.departments(), vec!["Sales", "Engineering"]);
    }

    #[test]
    fn empty_department_clears_the_filter() {
        let mut state = state_with(3);

        state.set_department_filter(Some(String::new()));

        assert!(!state.has_active_filters());
    }

    #[test]
    fn page_size_round_trips_through_rows() {
        for size in PageSize::ALL {
            assert_eq!(PageSize::from_rows(size.rows()), Some(size));
        }
        assert_eq!(PageSize::from_rows(25), None);
    }

    #[test]
    fn default_state_starts_on_first_page() {
        let state = RosterState::default();

        assert_eq!(state.current_page(), 1);
        assert_eq!(state, RosterState::new());
        assert_eq!(state.derive().current_page, 1);
    }
}
