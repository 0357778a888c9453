use dioxus::prelude::*;
use crate::components::common::FieldError;
use crate::models::Transport;
use crate::state::{FieldKey, TrunkWizard};

use super::inbound_routing::InboundRoutingPanel;

/// Static mode: carrier addresses, each with its own transport
#[component]
pub fn StaticEndpointsStep(mut wizard: Signal<TrunkWizard>) -> Element {
    let rows: Vec<(u64, String, Transport, Option<String>, bool)> = {
        let state = wizard.read();
        state
            .form()
            .static_endpoints
            .iter()
            .map(|ep| {
                let error = state.error_message(FieldKey::Endpoint(ep.id));
                let invalid = error.is_some();
                (ep.id, ep.address.clone(), ep.transport, error, invalid)
            })
            .collect()
    };
    let removable = rows.len() > 1;

    rsx! {
        div { class: "space-y-5",
            div {
                h2 { class: "text-lg font-bold text-gray-900", "Carrier Endpoints" }
                p { class: "text-sm text-gray-500 mt-0.5",
                    "Add the IP addresses or FQDNs of your carrier's SIP endpoints."
                }
            }

            div { class: "space-y-3",
                for (id, address, transport, error, invalid) in rows {
                    div { key: "{id}",
                        div { class: "flex items-start gap-3",
                            div { class: "flex-1",
                                input {
                                    class: "td-input font-mono",
                                    class: if invalid { "border-red-400" },
                                    r#type: "text",
                                    placeholder: "e.g. 203.0.113.10 or sip.carrier.example.com",
                                    value: "{address}",
                                    oninput: move |e| wizard.write().set_endpoint_address(id, e.value()),
                                }
                                FieldError { message: error }
                            }
                            select {
                                class: "td-select w-44",
                                onchange: move |e| {
                                    if let Some(transport) = Transport::parse(&e.value()) {
                                        wizard.write().set_endpoint_transport(id, transport);
                                    }
                                },
                                for option in Transport::ALL {
                                    option {
                                        key: "{option}",
                                        value: "{option}",
                                        selected: option == transport,
                                        "{option.option_label()}"
                                    }
                                }
                            }
                            if removable {
                                button {
                                    class: "td-btn-ghost text-gray-400 hover:text-red-500 py-2 px-2",
                                    title: "Remove endpoint",
                                    onclick: move |_| {
                                        wizard.write().remove_static_endpoint(id);
                                    },
                                    "\u{1F5D1}"
                                }
                            }
                        }
                    }
                }
            }

            button {
                class: "td-btn-secondary",
                onclick: move |_| {
                    wizard.write().add_static_endpoint();
                },
                "+ Add Endpoint"
            }

            InboundRoutingPanel {}
        }
    }
}
