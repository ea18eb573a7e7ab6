pub mod factory;
pub mod mockito;

use crate::TestSetup;

pub struct DepartmentFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}
