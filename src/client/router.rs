use dioxus::prelude::*;

use crate::client::{
    components::auth::AuthLayout,
    routes::{
        auth::{Dashboard, Departments, Employees},
        Login, NotFound, Signup,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::login())]

    #[route("/login?:username&:company")]
    Login { username: String, company: String },

    #[route("/signup")]
    Signup {},

    #[layout(AuthLayout)]

        #[route("/dashboard")]
        Dashboard {},

        #[route("/employees")]
        Employees {},

        #[route("/departments")]
        Departments {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Login page with nothing prefilled.
    pub fn login() -> Self {
        Route::Login {
            username: String::new(),
            company: String::new(),
        }
    }
}
