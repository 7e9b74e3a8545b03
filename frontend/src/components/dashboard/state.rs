use common::model::statistics::StatisticsSummary;

/// Dashboard state: the last statistics snapshot and the request status.
pub struct DashboardComponent {
    /// `None` until the first successful load, and again after a failure.
    pub statistics: Option<StatisticsSummary>,
    pub loading: bool,
    /// Guards against overlapping requests from repeated refresh clicks.
    pub in_flight: bool,
    pub error: Option<String>,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            statistics: None,
            loading: true,
            in_flight: false,
            error: None,
        }
    }
}
