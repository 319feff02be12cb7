//! Registration page.

use dioxus::prelude::*;

use stadium_types::RegistrationProfile;

use crate::app::components::PublicFrame;
use crate::app::session::use_session;
use crate::app::Route;

/// Check the form locally before it goes to the backend.
fn validate(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegistrationProfile, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(RegistrationProfile {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[component]
pub fn Register() -> Element {
    let ctx = use_session();
    let nav = use_navigator();
    let state = ctx.state;

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

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
        let profile = match validate(&username.read(), &email.read(), &password.read(), &confirm.read()) {
            Ok(profile) => profile,
            Err(msg) => {
                error.set(Some(msg.to_string()));
                return;
            }
        };

        let ctx = ctx.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let outcome = ctx.register(profile).await;
            submitting.set(false);
            if outcome.success {
                let _ = nav.replace(Route::Dashboard {});
            } else {
                error.set(outcome.failure.map(|f| f.to_string()));
            }
        });
    };

    rsx! {
        PublicFrame { title: "Register".to_string(),
            article {
                header {
                    h2 { "Create account" }
                }

                if let Some(msg) = error() {
                    p { class: "status-err", role: "alert", "{msg}" }
                }

                form { onsubmit: submit,
                    label {
                        "Username"
                        input {
                            r#type: "text",
                            autocomplete: "username",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    label {
                        "Email"
                        input {
                            r#type: "email",
                            autocomplete: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    label {
                        "Password"
                        input {
                            r#type: "password",
                            autocomplete: "new-password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    label {
                        "Confirm password"
                        input {
                            r#type: "password",
                            autocomplete: "new-password",
                            value: "{confirm}",
                            oninput: move |e| confirm.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: submitting(),
                        aria_busy: if submitting() { "true" } else { "false" },
                        "Register"
                    }
                }

                footer {
                    small { "Already registered? " }
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_form() {
        let profile = validate(" alice ", "alice@venue.io", "pw", "pw").unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "alice@venue.io");
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert_eq!(validate("", "a@b.c", "pw", "pw").unwrap_err(), "All fields are required");
        assert_eq!(validate("alice", "  ", "pw", "pw").unwrap_err(), "All fields are required");
        assert_eq!(validate("alice", "a@b.c", "", "").unwrap_err(), "All fields are required");
    }

    #[test]
    fn test_validate_rejects_mismatch_and_bad_email() {
        assert_eq!(validate("alice", "a@b.c", "pw", "px").unwrap_err(), "Passwords do not match");
        assert_eq!(
            validate("alice", "alice", "pw", "pw").unwrap_err(),
            "Enter a valid email address"
        );
    }
}
