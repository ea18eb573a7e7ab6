use dioxus::prelude::*;
use stafftrack::{
    model::stats::ChartDto,
    service::ChartKind,
    view::{format::format_currency, Dashboard as DashboardView},
};

use crate::client::{
    components::{Page, StatCard},
    context::AppContext,
};

#[component]
pub fn Dashboard() -> Element {
    let ctx = use_context::<AppContext>();

    let data = use_resource(move || {
        let gateway = ctx.gateway.clone();
        async move { DashboardView::new(&gateway).load().await }
    });

    rsx!(
        document::Title { "Dashboard | StaffTrack" }
        Page { title: "Dashboard", subtitle: "Workforce overview",
            match &*data.read() {
                None => rsx!(
                    p { class: "loading", "Loading dashboard..." }
                ),
                Some(Err(_)) => rsx!(
                    p { class: "form-error", "Failed to load dashboard data." }
                ),
                Some(Ok(data)) => {
                    let summary = &data.summary;
                    rsx!(
                        div { class: "stat-grid",
                            StatCard { title: "Total Employees", value: summary.total_employees.to_string() }
                            StatCard { title: "Average Salary", value: format_currency(summary.average_salary) }
                            StatCard { title: "Median Salary", value: format_currency(summary.median_salary) }
                            StatCard { title: "Highest Salary", value: format_currency(summary.max_salary) }
                            StatCard { title: "Lowest Salary", value: format_currency(summary.min_salary) }
                        }
                        div { class: "chart-grid",
                            ChartCard { kind: ChartKind::SalaryDistribution, chart: data.salary_chart.clone() }
                            ChartCard { kind: ChartKind::DepartmentPie, chart: data.department_chart.clone() }
                        }
                        if !summary.employees_by_dept.is_empty() {
                            div { class: "table-card",
                                h2 { class: "chart-title", "Headcount by Department" }
                                ul { class: "headcount-list",
                                    for (department, count) in summary.employees_by_dept.iter() {
                                        li { key: "{department}",
                                            span { "{department}" }
                                            span { class: "font-semibold", "{count}" }
                                        }
                                    }
                                }
                            }
                        }
                    )
                }
            }
        }
    )
}

#[component]
fn ChartCard(
    kind: ChartKind,
    #[props(!optional)]
    chart: Option<ChartDto>,
) -> Element {
    let title = kind.title();

    rsx!(
        div { class: "chart-card",
            h2 { class: "chart-title", "{title}" }
            if let Some(chart) = chart {
                img { class: "chart-image", src: chart.data_uri(), alt: "{title}" }
            } else {
                p { class: "empty-state", "No data to chart yet." }
            }
        }
    )
}
