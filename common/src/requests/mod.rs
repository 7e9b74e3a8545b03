use crate::model::employee::EmployeeStatus;

/// Query parameters accepted by `GET /api/employees/search`.
///
/// Every parameter is optional and the backend ANDs the ones present, which
/// mirrors the roster's client-side filter minus the id match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub search_term: Option<String>,
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
}

impl SearchParams {
    /// Key/value pairs for the query string, skipping absent parameters.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(term) = &self.search_term {
            pairs.push(("searchTerm", term.clone()));
        }
        if let Some(department) = &self.department {
            pairs.push(("department", department.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.label().to_string()));
        }
        pairs
    }
}
