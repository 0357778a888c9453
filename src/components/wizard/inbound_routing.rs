use dioxus::prelude::*;
use crate::components::common::CopyButton;
use crate::config::ConsoleConfig;

/// How carriers must tag inbound INVITEs with the target account
#[component]
pub fn InboundRoutingPanel() -> Element {
    let config = use_context::<ConsoleConfig>();
    let request_uri = config.request_uri_example();
    let header = config.account_header();
    let account_host = config.account_host();

    rsx! {
        div { class: "border border-indigo-200 bg-indigo-50 rounded-lg p-4 space-y-3",
            div { class: "flex items-start gap-2.5",
                span { class: "text-indigo-500 flex-shrink-0", "\u{2913}" }
                div {
                    h4 { class: "text-sm font-semibold text-indigo-900",
                        "Inbound Routing \u{2014} Required Carrier Configuration"
                    }
                    p { class: "text-xs text-indigo-700 mt-0.5 leading-relaxed",
                        "Your carrier must identify the target Talkdesk account on every inbound INVITE using "
                        strong { "one" }
                        " of the two methods below."
                    }
                }
            }

            RoutingMethod {
                title: "Method 1 \u{2014} Request-URI domain",
                value: request_uri,
                copy_title: "Copy example",
                p { class: "text-xs text-gray-500",
                    "Send INVITE to "
                    code { class: "bg-gray-100 px-1 rounded", "sip:<user|number>@{account_host}" }
                }
            }

            RoutingMethod {
                title: "Method 2 \u{2014} Custom SIP header",
                value: header,
                copy_title: "Copy header",
                p { class: "text-xs text-gray-500",
                    "Add the "
                    code { class: "bg-gray-100 px-1 rounded", "X-Account-Id" }
                    " header to every inbound INVITE."
                }
            }

            div { class: "flex items-center gap-2 text-xs text-indigo-800",
                span { "Your Account ID:" }
                code { class: "font-mono font-semibold", "{config.account_id}" }
                CopyButton { text: config.account_id.clone(), title: "Copy account ID" }
            }
        }
    }
}

#[component]
fn RoutingMethod(title: String, value: String, copy_title: String, children: Element) -> Element {
    rsx! {
        div { class: "bg-white rounded border border-indigo-100 p-3 space-y-1.5",
            p { class: "text-xs font-semibold text-gray-600 uppercase tracking-wide", "{title}" }
            {children}
            div { class: "flex items-center gap-2 mt-1.5",
                code { class: "flex-1 font-mono text-xs bg-gray-50 border border-gray-200 rounded px-2.5 py-1.5 text-gray-700 truncate",
                    "{value}"
                }
                CopyButton { text: value.clone(), title: copy_title }
            }
        }
    }
}
