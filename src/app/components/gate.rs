//! Protected-route gate: the layout around every operations page.

use dioxus::prelude::*;

use super::Shell;
use crate::app::session::use_session;
use crate::app::Route;
use crate::session::{gate, GateDecision};

#[component]
pub fn AuthGate() -> Element {
    let ctx = use_session();
    let nav = use_navigator();
    let state = ctx.state;
    let policy = ctx.policy;

    // Navigation happens after render and only once the session is resolved
    use_effect(move || {
        let decision = gate::decide(&state.read(), policy);
        if let GateDecision::Redirect { to, replace } = decision {
            let target = to.parse::<Route>().unwrap_or(Route::Login {});
            tracing::debug!(to, "Gate redirect");
            if replace {
                let _ = nav.replace(target);
            } else {
                let _ = nav.push(target);
            }
        }
    });

    let decision = gate::decide(&state.read(), policy);
    match decision {
        GateDecision::Loading => rsx! {
            div { class: "gate-loading", aria_busy: "true", "Loading..." }
        },
        GateDecision::Redirect { .. } => rsx! {},
        GateDecision::Render => rsx! {
            Shell {
                Outlet::<Route> {}
            }
        },
    }
}
