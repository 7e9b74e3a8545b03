//! Rendering for the dashboard. All numbers come from the backend summary;
//! the only arithmetic here is the share of each count in the total.

use yew::prelude::*;

use common::format::{format_count, format_currency, format_percentage};
use common::model::employee::EmployeeStatus;
use common::model::statistics::StatisticsSummary;

use super::messages::Msg;
use super::state::DashboardComponent;
use crate::components::layout::card_grid::CardGrid;

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();
    let on_refresh = link.callback(|_: MouseEvent| Msg::Load);

    if component.loading {
        return html! { <div class="loading">{"Loading dashboard..."}</div> };
    }

    if let Some(error) = &component.error {
        return html! {
            <div class="error">
                <p>{ error.clone() }</p>
                <button class="btn btn-secondary" onclick={on_refresh}>{"Retry"}</button>
            </div>
        };
    }

    let Some(statistics) = &component.statistics else {
        return Html::default();
    };

    html! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1>{"Dashboard Overview"}</h1>
                <button class="btn btn-secondary" onclick={on_refresh}>{"Refresh"}</button>
            </div>
            { metric_cards(statistics) }
            <CardGrid columns={2}>
                { financial_overview(statistics) }
                <div class="panel">
                    { department_distribution(statistics) }
                    { status_distribution(statistics) }
                </div>
            </CardGrid>
        </div>
    }
}

fn metric_card(title: &str, value: String, caption: String) -> Html {
    html! {
        <div class="metric-card">
            <span class="metric-title">{ title.to_string() }</span>
            <strong class="metric-value">{ value }</strong>
            <span class="metric-caption">{ caption }</span>
        </div>
    }
}

fn metric_cards(statistics: &StatisticsSummary) -> Html {
    let active = statistics.status_count(EmployeeStatus::Active);
    let inactive = statistics.status_count(EmployeeStatus::Inactive);

    html! {
        <CardGrid columns={4}>
            { metric_card(
                "Total Employees",
                format_count(statistics.total_employees),
                "All records".to_string(),
            ) }
            { metric_card(
                "Active Employees",
                format_count(active),
                format!(
                    "{} of total",
                    format_percentage(statistics.status_percentage(EmployeeStatus::Active), 0)
                ),
            ) }
            { metric_card(
                "Recent Hires",
                format_count(statistics.recent_hires),
                "Last 30 days".to_string(),
            ) }
            { metric_card(
                "Inactive",
                format_count(inactive),
                format!(
                    "{} of total",
                    format_percentage(statistics.status_percentage(EmployeeStatus::Inactive), 0)
                ),
            ) }
        </CardGrid>
    }
}

fn financial_overview(statistics: &StatisticsSummary) -> Html {
    html! {
        <div class="panel">
            <h2>{"Financial Overview"}</h2>
            <div class="finance-row">
                <span>{"Total Payroll"}</span>
                <strong>{ format_currency(statistics.total_salary) }</strong>
                <small>{ format!("{} employees", format_count(statistics.total_employees)) }</small>
            </div>
            <div class="finance-row">
                <span>{"Average Salary"}</span>
                <strong>{ format_currency(statistics.average_salary) }</strong>
            </div>
            <div class="finance-row">
                <span>{"Monthly Cost"}</span>
                <strong>{ format_currency(statistics.monthly_cost()) }</strong>
            </div>
        </div>
    }
}

fn department_distribution(statistics: &StatisticsSummary) -> Html {
    let departments = statistics.departments_by_size();
    if departments.is_empty() {
        return html! {
            <>
                <h2>{"Department Distribution"}</h2>
                <p class="no-results">{"No departments yet"}</p>
            </>
        };
    }

    html! {
        <>
            <h2>{"Department Distribution"}</h2>
            <div class="department-list">
                { for departments.into_iter().map(|(department, count)| {
                    let percentage = statistics.percentage(count);
                    html! {
                        <div class="department-item" key={department.to_string()}>
                            <div class="department-label">
                                <span>{ department.to_string() }</span>
                                <span>{ format!("{} ({})", count, format_percentage(percentage, 1)) }</span>
                            </div>
                            <div class="progress-bar">
                                <div class="progress-fill" style={format!("width: {percentage}%")}></div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </>
    }
}

fn status_distribution(statistics: &StatisticsSummary) -> Html {
    let legend = [
        EmployeeStatus::Active,
        EmployeeStatus::OnLeave,
        EmployeeStatus::Inactive,
    ];

    html! {
        <>
            <h2>{"Status Distribution"}</h2>
            <div class="status-bar">
                { for statistics.status_segments().into_iter().map(|segment| html! {
                    <div
                        key={segment.status.label()}
                        class={classes!("status-segment", segment.status.css_class())}
                        style={format!("width: {}%", segment.percentage)}
                        title={format!("{}: {}", segment.status, segment.count)}
                    ></div>
                }) }
            </div>
            <div class="status-legend">
                { for legend.into_iter().map(|status| html! {
                    <div class="legend-item" key={status.label()}>
                        <span class={classes!("legend-dot", status.css_class())}></span>
                        { format!("{} ({})", status, statistics.status_count(status)) }
                    </div>
                }) }
            </div>
        </>
    }
}
