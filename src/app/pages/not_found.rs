use dioxus::prelude::*;

use crate::app::components::PublicFrame;
use crate::app::Route;

/// Fallback for any path the router does not know.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        PublicFrame { title: "Not found".to_string(),
            h1 { "Page not found" }
            p { "Nothing lives at " code { "{path}" } "." }
            Link { to: Route::Landing {}, "Back to the start page" }
        }
    }
}
