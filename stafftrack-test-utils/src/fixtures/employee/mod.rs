pub mod factory;
pub mod mockito;

use crate::TestSetup;

pub struct EmployeeFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}
