//! SIP Trunk Console - Dioxus Application
//!
//! Admin console for listing, creating and deleting SIP trunks against a
//! carrier-facing voice platform. All data lives in memory for the session.
//!
//! Runs in the browser (web, default) or as a desktop window (`desktop` feature).

mod clipboard;
mod components;
mod config;
mod models;
mod routes;
mod state;

use dioxus::prelude::*;
use routes::Route;
use components::common::Notification;
use config::ConsoleConfig;
use state::{provide_trunk_store, provide_ui_state};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let mut filter = tracing_subscriber::EnvFilter::from_default_env();
        if let Ok(directive) = "sip_trunk_console=info".parse::<tracing_subscriber::filter::Directive>() {
            filter = filter.add_directive(directive);
        }
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter)
            .init();
    }

    tracing::info!("Starting SIP Trunk Console");

    // Launch the Dioxus app
    dioxus::launch(App);
}

fn load_config() -> ConsoleConfig {
    #[cfg(not(target_arch = "wasm32"))]
    let config = ConsoleConfig::from_env();

    #[cfg(target_arch = "wasm32")]
    let config = ConsoleConfig::default();

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            tracing::warn!("Invalid console configuration ({}), using defaults", e);
            ConsoleConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);
    provide_trunk_store();
    provide_ui_state();

    rsx! {
        // Tailwind utilities + console theme
        document::Script { src: "https://cdn.tailwindcss.com" }
        style { {include_str!("../assets/styles.css")} }

        // Notification toast
        Notification {}

        Router::<Route> {}
    }
}

/// Console shell wrapping every routed page
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div { class: "h-screen flex flex-col overflow-hidden",
            // Top bar
            TopBar {}

            // Main content area
            div { class: "flex flex-1 overflow-hidden",
                Sidebar {}

                // Main content - Outlet renders the matched route
                main { class: "flex-1 overflow-y-auto bg-td-canvas",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    let mut search = use_signal(String::new);

    rsx! {
        header { class: "flex items-center justify-between px-4 h-12 flex-shrink-0 bg-td-header",
            // Logo
            div { class: "flex items-center gap-2",
                div { class: "w-7 h-7 rounded-md bg-white/20 flex items-center justify-center text-white text-sm",
                    "\u{1F4E1}"
                }
                span { class: "text-white font-semibold text-sm hidden md:block", "Talkdesk" }
            }

            // Search
            div { class: "flex-1 max-w-md mx-6",
                input {
                    class: "w-full bg-white/15 text-white placeholder-white/50 text-sm rounded-md px-3 py-1.5 focus:outline-none focus:bg-white/20 transition-colors",
                    placeholder: "Search apps, actions and more...",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
            }

            // User menu
            div { class: "flex items-center gap-3",
                div { class: "relative text-white/80",
                    "\u{1F514}"
                    span { class: "absolute -top-1 -right-1 w-3.5 h-3.5 bg-red-500 rounded-full text-[9px] text-white flex items-center justify-center font-bold",
                        "2"
                    }
                }
                div { class: "flex items-center gap-1.5",
                    div { class: "w-7 h-7 rounded-full bg-white/20 flex items-center justify-center text-white text-xs font-semibold",
                        "A"
                    }
                    span { class: "text-white/80 text-xs hidden md:block", "Admin" }
                }
            }
        }
    }
}

const NAV_SECTIONS: &[(&str, &[&str])] = &[
    ("ACCOUNT", &["Customization", "Preferences", "Holiday Hours", "Security Settings", "Emergency Calls"]),
    ("PEOPLE", &["Users", "Teams", "Roles & Permissions"]),
    ("SERVICE SETTINGS", &["SIP Trunks", "Numbers", "Devices", "Sites", "Call Patterns"]),
    ("ROUTING", &["Dispositions", "Storage and Retention"]),
];

#[component]
fn Sidebar() -> Element {
    rsx! {
        aside { class: "w-56 bg-white border-r border-gray-100 overflow-y-auto flex-shrink-0",
            div { class: "px-4 pt-3 pb-2",
                div { class: "flex items-center gap-2 px-2 py-1.5 rounded-md hover:bg-td-purple-hover",
                    div { class: "w-6 h-6 rounded bg-td-purple flex items-center justify-center text-white text-xs font-bold", "A" }
                    span { class: "text-xs font-semibold text-gray-800", "Admin" }
                }
            }

            nav { class: "pb-4",
                for (section, items) in NAV_SECTIONS.iter() {
                    div { key: "{section}", class: "mt-1",
                        div { class: "px-4 py-1.5 text-[10px] font-semibold text-gray-400 uppercase tracking-wider",
                            "{section}"
                        }
                        for label in items.iter() {
                            // Only the trunk pages exist in this console
                            if *label == "SIP Trunks" {
                                Link {
                                    to: Route::Trunks {},
                                    class: "flex items-center gap-2.5 mx-2 px-3 py-2 rounded-md text-sm bg-td-purple-light text-td-purple font-semibold border-l-2 border-td-purple",
                                    "{label}"
                                }
                            } else {
                                div {
                                    class: "flex items-center gap-2.5 mx-2 px-3 py-2 rounded-md text-sm text-gray-600 hover:bg-td-purple-hover hover:text-gray-800 transition-colors",
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
