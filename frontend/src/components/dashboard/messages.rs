use common::model::statistics::StatisticsSummary;

pub enum Msg {
    /// Fetch the statistics, unless a fetch is already running.
    Load,
    Loaded(StatisticsSummary),
    LoadFailed(String),
}
