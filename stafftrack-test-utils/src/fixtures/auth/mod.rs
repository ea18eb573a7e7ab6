pub mod factory;
pub mod mockito;

use crate::TestSetup;

pub struct AuthFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}
