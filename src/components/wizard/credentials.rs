use std::collections::HashSet;

use dioxus::prelude::*;
use crate::clipboard::copy_to_clipboard;
use crate::components::common::CopyButton;
use crate::config::ConsoleConfig;
use crate::models::find_region;
use crate::state::TrunkWizard;

use super::inbound_routing::InboundRoutingPanel;

/// Registered mode: generated SIP credentials, one set per endpoint
#[component]
pub fn CredentialsStep(mut wizard: Signal<TrunkWizard>) -> Element {
    let config = use_context::<ConsoleConfig>();
    let mut revealed = use_signal(HashSet::<u32>::new);

    let state = wizard.read();
    let form = state.form();
    let count = form.endpoint_count;
    let credentials = form.credentials.clone();
    let sbc_host = form
        .region
        .as_deref()
        .and_then(find_region)
        .map(|r| r.sbc_host);
    let max_endpoints = config.max_endpoints;
    let registration_port = config.registration_port;
    drop(state);

    rsx! {
        div { class: "space-y-5",
            div {
                h2 { class: "text-lg font-bold text-gray-900", "SIP Registration Credentials" }
                p { class: "text-sm text-gray-500 mt-0.5",
                    "Select how many endpoints your carrier will register. We'll generate unique credentials for each."
                }
            }

            div { class: "flex items-end gap-4",
                div {
                    label { class: "td-label", "Number of endpoints" }
                    input {
                        class: "td-input w-24",
                        r#type: "number",
                        min: "1",
                        max: "{max_endpoints}",
                        value: "{count}",
                        oninput: move |e| {
                            wizard.write().set_endpoint_count_input(&e.value());
                            revealed.write().clear();
                        },
                    }
                }
                button {
                    class: "td-btn-secondary",
                    onclick: move |_| {
                        wizard.write().regenerate_credentials();
                        revealed.write().clear();
                    },
                    "\u{21BB} Regenerate all"
                }
                button {
                    class: "td-btn-secondary",
                    onclick: move |_| copy_to_clipboard(&wizard.read().credentials_csv()),
                    "\u{29C9} Copy all as CSV"
                }
            }

            div { class: "border border-gray-200 rounded-lg overflow-hidden",
                table { class: "w-full text-sm",
                    thead {
                        tr { class: "bg-gray-50 border-b border-gray-200",
                            th { class: "px-4 py-2.5 text-left text-xs font-semibold text-gray-500 w-10", "#" }
                            th { class: "px-4 py-2.5 text-left text-xs font-semibold text-gray-500", "SIP Username" }
                            th { class: "px-4 py-2.5 text-left text-xs font-semibold text-gray-500", "SIP Password" }
                            th { class: "px-4 py-2.5 w-20" }
                        }
                    }
                    tbody {
                        for cred in credentials {
                            CredentialRow {
                                key: "{cred.id}",
                                id: cred.id,
                                username: cred.username.clone(),
                                password: cred.password.clone(),
                                pair: cred.pair(),
                                shown: revealed.read().contains(&cred.id),
                                on_toggle: move |id: u32| {
                                    let mut set = revealed.write();
                                    if !set.remove(&id) {
                                        set.insert(id);
                                    }
                                },
                            }
                        }
                    }
                }
            }

            if let Some(sbc_host) = sbc_host {
                div { class: "bg-blue-50 border border-blue-200 rounded-lg px-4 py-3 flex items-start gap-2.5",
                    span { class: "text-blue-500 flex-shrink-0", "\u{2139}" }
                    p { class: "text-sm text-blue-800",
                        "Configure your carrier to register to: "
                        span { class: "font-mono font-semibold", "{sbc_host}:{registration_port}" }
                    }
                }
            }

            InboundRoutingPanel {}
        }
    }
}

#[component]
fn CredentialRow(
    id: u32,
    username: String,
    password: String,
    pair: String,
    shown: bool,
    on_toggle: EventHandler<u32>,
) -> Element {
    let masked = "\u{2022}".repeat(12);

    rsx! {
        tr { class: "border-b border-gray-100 last:border-0 hover:bg-gray-50",
            td { class: "px-4 py-2.5 text-gray-400 text-xs", "{id}" }
            td { class: "px-4 py-2.5 font-mono text-xs text-gray-800", "{username}" }
            td { class: "px-4 py-2.5 font-mono text-xs text-gray-800",
                if shown { "{password}" } else { "{masked}" }
            }
            td { class: "px-4 py-2.5",
                div { class: "flex items-center gap-1 justify-end",
                    button {
                        class: "td-btn-ghost text-xs py-1 px-2",
                        title: if shown { "Hide password" } else { "Show password" },
                        onclick: move |_| on_toggle.call(id),
                        if shown { "\u{1F648}" } else { "\u{1F441}" }
                    }
                    CopyButton { text: pair, title: "Copy username:password" }
                }
            }
        }
    }
}
