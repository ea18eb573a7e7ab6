use dioxus_logger::tracing;
use futures::future::join3;

use crate::{
    error::{ApiError, Error},
    gateway::{ApiGateway, Transport},
    model::stats::{ChartDto, StatsSummaryDto},
    service::{ChartKind, StatsService},
};

/// Everything the dashboard shows, fetched fresh on each visit.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub summary: StatsSummaryDto,
    /// `None` when the backend has nothing to plot.
    pub salary_chart: Option<ChartDto>,
    pub department_chart: Option<ChartDto>,
}

pub struct Dashboard<'a, T> {
    service: StatsService<'a, T>,
}

impl<'a, T: Transport> Dashboard<'a, T> {
    pub fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self {
            service: StatsService::new(gateway),
        }
    }

    /// Fetch the summary and both charts concurrently.
    ///
    /// The backend answers 400 for charts of a company without employees; such a chart is
    /// reported as absent. Any other failure fails the whole load.
    pub async fn load(&self) -> Result<DashboardData, Error> {
        let (summary, salary_chart, department_chart) = join3(
            self.service.summary(),
            self.service.chart(ChartKind::SalaryDistribution),
            self.service.chart(ChartKind::DepartmentPie),
        )
        .await;

        Ok(DashboardData {
            summary: summary?,
            salary_chart: optional_chart(ChartKind::SalaryDistribution, salary_chart)?,
            department_chart: optional_chart(ChartKind::DepartmentPie, department_chart)?,
        })
    }
}

fn optional_chart(
    kind: ChartKind,
    result: Result<ChartDto, Error>,
) -> Result<Option<ChartDto>, Error> {
    match result {
        Ok(chart) => Ok(Some(chart)),
        Err(Error::ApiError(ApiError::Rejected { status: 400, detail })) => {
            tracing::debug!("No {} chart available: {}", kind.title(), detail);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
