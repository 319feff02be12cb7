//! Page frames: the operations shell (sidebar + content) and the bare frame
//! used by the public pages.

use dioxus::prelude::*;

use super::nav::Nav;

/// CSS for the console (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; --accent: #7c3aed; }
.shell { display: flex; min-height: 100vh; }
.shell aside { width: 16rem; border-right: 1px solid var(--pico-muted-border-color); padding: 1.5rem 1rem; display: flex; flex-direction: column; }
.shell main { flex: 1; padding: 2rem; overflow-x: auto; }
.brand { font-weight: 800; font-size: 1.2rem; margin-bottom: 2rem; display: block; }
.nav-link { display: block; padding: 0.6rem 1rem; border-radius: 0.6rem; text-decoration: none; }
.nav-link.active { background: var(--pico-primary-background); color: var(--pico-primary-inverse); font-weight: 600; }
.operator { margin-top: auto; display: flex; gap: 0.75rem; align-items: center; }
.avatar { width: 2rem; height: 2rem; border-radius: 50%; background: var(--accent); color: #fff; display: flex; align-items: center; justify-content: center; font-size: 0.7rem; font-weight: 700; }
.kpi-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1rem; margin-bottom: 1.5rem; }
.kpi { padding: 1rem 1.25rem; margin: 0; }
.kpi .value { font-size: 1.8rem; font-weight: 800; }
.status-green, .status-ok { color: var(--pico-ins-color); }
.status-yellow { color: #d97706; }
.status-red, .status-err { color: var(--pico-del-color); }
.gate-loading { display: flex; height: 100vh; align-items: center; justify-content: center; color: var(--accent); }
.public { max-width: 28rem; margin: 4rem auto; }
small { color: var(--pico-muted-color); }
aside > button { display: none; }
@media (max-width: 768px) {
  .shell { flex-direction: column; }
  .shell aside { width: auto; }
  aside > button { display: inline-block; }
  .nav-links { display: none; }
  .nav-links.open { display: block; }
}
"#;

/// Head elements shared by every frame.
#[component]
fn Head(title: String) -> Element {
    let full_title = format!("{} - Smart Stadium", title);

    rsx! {
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }
    }
}

/// Application shell wrapping the operations pages.
#[component]
pub fn Shell(children: Element) -> Element {
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        Head { title: "Operations".to_string() }
        div { class: "shell",
            Nav {}
            main {
                {children}
                footer {
                    small { "Smart Stadium Console v{version}" }
                }
            }
        }
    }
}

/// Minimal frame for the landing, login and register pages.
#[component]
pub fn PublicFrame(title: String, children: Element) -> Element {
    rsx! {
        Head { title: title.clone() }
        main { class: "container public",
            {children}
        }
    }
}
