//! Login page.

use dioxus::prelude::*;

use stadium_types::Credentials;

use crate::app::components::PublicFrame;
use crate::app::session::use_session;
use crate::app::Route;

#[component]
pub fn Login() -> Element {
    let ctx = use_session();
    let nav = use_navigator();
    let state = ctx.state;

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Already signed in (or just signed in): go to the console
    use_effect(move || {
        if state.read().identity().is_some() {
            let _ = nav.replace(Route::Dashboard {});
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let user = username.read().trim().to_string();
        let pass = password.read().clone();
        if user.is_empty() || pass.is_empty() {
            error.set(Some("Username and password are required".to_string()));
            return;
        }

        let ctx = ctx.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let outcome = ctx.login(Credentials::new(user, pass)).await;
            submitting.set(false);
            if outcome.success {
                password.set(String::new());
                let _ = nav.replace(Route::Dashboard {});
            } else {
                error.set(outcome.failure.map(|f| f.to_string()));
            }
        });
    };

    rsx! {
        PublicFrame { title: "Sign in".to_string(),
            article {
                header {
                    h2 { "Sign in" }
                    small { "Operations staff access" }
                }

                if let Some(msg) = error() {
                    p { class: "status-err", role: "alert", "{msg}" }
                }

                form { onsubmit: submit,
                    label {
                        "Username"
                        input {
                            r#type: "text",
                            name: "username",
                            autocomplete: "username",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    label {
                        "Password"
                        input {
                            r#type: "password",
                            name: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: submitting(),
                        aria_busy: if submitting() { "true" } else { "false" },
                        "Sign in"
                    }
                }

                footer {
                    small { "No account yet? " }
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
