pub mod builder;
pub mod constant;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{
            auth::factory as auth_factory, department::factory as department_factory,
            employee::factory as employee_factory, error_body,
            stats::factory as stats_factory,
        },
        TestBuilder, TestSetup,
    };
}
