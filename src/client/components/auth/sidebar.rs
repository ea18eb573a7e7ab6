use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBuilding, FaChartPie, FaRightFromBracket, FaUsers,
};
use dioxus_free_icons::Icon;
use stafftrack::service::AuthService;

use crate::client::{context::AppContext, router::Route};

#[component]
pub fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let current_route = use_route::<Route>();

    let session = ctx.gateway.session().current();

    let logout = move |_: MouseEvent| {
        AuthService::new(&ctx.gateway).logout();
        navigator.replace(Route::login());
    };

    let link_class = |route: &Route| {
        if *route == current_route {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        }
    };

    rsx!(
        aside { class: "sidebar",
            div { class: "sidebar-brand",
                p { class: "text-xl font-bold", "StaffTrack" }
                if let Some(session) = session {
                    p { class: "text-sm", "{session.username}" }
                    if !session.company_name.is_empty() {
                        p { class: "text-xs", "{session.company_name}" }
                    }
                }
            }
            nav { class: "sidebar-nav",
                Link { to: Route::Dashboard {}, class: link_class(&Route::Dashboard {}),
                    Icon { width: 18, height: 18, icon: FaChartPie }
                    span { "Dashboard" }
                }
                Link { to: Route::Employees {}, class: link_class(&Route::Employees {}),
                    Icon { width: 18, height: 18, icon: FaUsers }
                    span { "Employees" }
                }
                Link { to: Route::Departments {}, class: link_class(&Route::Departments {}),
                    Icon { width: 18, height: 18, icon: FaBuilding }
                    span { "Departments" }
                }
            }
            button { class: "btn-logout", onclick: logout,
                Icon { width: 18, height: 18, icon: FaRightFromBracket }
                span { "Logout" }
            }
        }
    )
}
