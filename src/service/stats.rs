use crate::{
    error::{ApiError, Error},
    gateway::{ApiGateway, Transport},
    model::stats::{ChartDto, StatsSummaryDto},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    SalaryDistribution,
    DepartmentPie,
}

impl ChartKind {
    pub fn path(&self) -> &'static str {
        match self {
            Self::SalaryDistribution => "/api/charts/salary_distribution",
            Self::DepartmentPie => "/api/charts/department_pie",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SalaryDistribution => "Salary Distribution",
            Self::DepartmentPie => "Employees by Department",
        }
    }
}

/// Read-only workforce analytics.
pub struct StatsService<'a, T> {
    gateway: &'a ApiGateway<T>,
}

impl<'a, T: Transport> StatsService<'a, T> {
    pub fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self { gateway }
    }

    pub async fn summary(&self) -> Result<StatsSummaryDto, Error> {
        Ok(self.gateway.get_json("/api/stats/summary").await?)
    }

    /// Fetch a rendered chart, checking that the image payload decodes.
    pub async fn chart(&self, kind: ChartKind) -> Result<ChartDto, Error> {
        let chart: ChartDto = self.gateway.get_json(kind.path()).await?;

        chart.png_bytes().map_err(|e| {
            ApiError::Decode(format!("Invalid image in {} chart: {}", kind.title(), e))
        })?;

        Ok(chart)
    }
}
