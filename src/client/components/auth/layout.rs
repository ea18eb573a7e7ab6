use dioxus::prelude::*;
use stafftrack::guard::{GuardState, RouteGuard};

use crate::client::{components::auth::Sidebar, context::AppContext, router::Route};

/// Wraps every protected view. Renders nothing and sends the visitor to the login page
/// unless a session token is present when the layout mounts.
///
/// Only [`GuardState::Allowed`] renders the sidebar and outlet; both `Checking` and
/// `Denied` render `rsx! {}`, so protected content never appears, not even for a frame.
#[component]
pub fn AuthLayout() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let decision = use_hook(|| RouteGuard::new(ctx.gateway.session()).check());

    use_effect(move || {
        if decision == GuardState::Denied {
            navigator.replace(Route::login());
        }
    });

    if decision != GuardState::Allowed {
        return rsx! {};
    }

    rsx!(
        div { class: "layout",
            Sidebar {}
            main { class: "layout-content",
                Outlet::<Route> {}
            }
        }
    )
}
