//! Public landing page.

use dioxus::prelude::*;

use crate::app::components::PublicFrame;
use crate::app::session::use_session;
use crate::app::Route;

#[component]
pub fn Landing() -> Element {
    let ctx = use_session();
    let session = ctx.session();

    rsx! {
        PublicFrame { title: "Welcome".to_string(),
            hgroup {
                h1 { "Smart Stadium" }
                p { "Ticketing, crowd flow, energy and retail for venue operations staff." }
            }

            if let Some(user) = session.identity() {
                article {
                    p { "Signed in as " strong { "{user.username}" } "." }
                    Link { class: "secondary", to: Route::Dashboard {}, "Open the console" }
                }
            } else if session.is_resolved() {
                div { class: "grid",
                    Link { role: "button", to: Route::Login {}, "Sign in" }
                    Link { role: "button", class: "outline", to: Route::Register {}, "Create account" }
                }
            } else {
                article { aria_busy: "true", "Checking session..." }
            }
        }
    }
}
