//! Sidebar navigation with the signed-in operator and a logout button.

use dioxus::prelude::*;

use crate::app::session::use_session;
use crate::app::Route;

/// Sidebar entries, in display order.
fn nav_items() -> [(&'static str, Route); 7] {
    [
        ("Dashboard", Route::Dashboard {}),
        ("Ticketing", Route::Ticketing {}),
        ("Crowd", Route::Crowd {}),
        ("Energy", Route::Energy {}),
        ("Merchandise", Route::Merchandise {}),
        ("Analytics", Route::Analytics {}),
        ("Sustainability", Route::Sustainability {}),
    ]
}

#[component]
pub fn Nav() -> Element {
    let ctx = use_session();
    let current = use_route::<Route>();
    let mut menu_open = use_signal(|| false);
    let mut signing_out = use_signal(|| false);

    let session = ctx.session();
    let identity = session.identity().cloned();

    let logout = move |_: MouseEvent| {
        let ctx = ctx.clone();
        signing_out.set(true);
        spawn(async move {
            ctx.logout().await;
            signing_out.set(false);
        });
    };

    let links_class = if menu_open() { "nav-links open" } else { "nav-links" };

    rsx! {
        aside {
            Link { class: "brand", to: Route::Landing {}, "Smart Stadium" }

            button {
                class: "outline secondary",
                r#type: "button",
                onclick: move |_| menu_open.toggle(),
                "Menu"
            }

            nav { class: "{links_class}",
                small { "MAIN MENU" }
                for (label, route) in nav_items() {
                    Link {
                        key: "{label}",
                        class: if route == current { "nav-link active".to_string() } else { "nav-link".to_string() },
                        to: route.clone(),
                        onclick: move |_| menu_open.set(false),
                        "{label}"
                    }
                }
            }

            div { class: "operator",
                if let Some(user) = identity {
                    div { class: "avatar", {user.initials()} }
                    div {
                        strong { "{user.username}" }
                        br {}
                        small { "{user.email}" }
                    }
                    button {
                        class: "secondary",
                        r#type: "button",
                        disabled: signing_out(),
                        aria_busy: if signing_out() { "true" } else { "false" },
                        onclick: logout,
                        "Log out"
                    }
                } else {
                    div { class: "avatar", "?" }
                    div {
                        strong { "Guest" }
                        br {}
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
