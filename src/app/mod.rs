//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod poll;
pub mod session;

use components::AuthGate;
use pages::{
    Analytics, Crowd, Dashboard, Energy, Landing, Login, Merchandise, NotFound, Register,
    Sustainability, Ticketing,
};
use session::use_session_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // One session store for the whole app; bootstrap starts here
    use_session_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},

    #[layout(AuthGate)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/crowd")]
        Crowd {},
        #[route("/ticketing")]
        Ticketing {},
        #[route("/energy")]
        Energy {},
        #[route("/merchandise")]
        Merchandise {},
        #[route("/analytics")]
        Analytics {},
        #[route("/sustainability")]
        Sustainability {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
