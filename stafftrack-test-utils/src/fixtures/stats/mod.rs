pub mod factory;
pub mod mockito;

use crate::TestSetup;

pub static SALARY_CHART_PATH: &str = "/api/charts/salary_distribution";

pub static DEPARTMENT_CHART_PATH: &str = "/api/charts/department_pie";

pub struct StatsFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}
