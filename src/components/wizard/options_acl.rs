use dioxus::prelude::*;
use crate::config::ConsoleConfig;
use crate::state::TrunkWizard;

#[component]
pub fn OptionsAclStep(mut wizard: Signal<TrunkWizard>) -> Element {
    let config = use_context::<ConsoleConfig>();
    let mut acl_input = use_signal(String::new);

    let (options, acl) = {
        let state = wizard.read();
        (state.form().options, state.form().acl.clone())
    };
    let interval = config.options_interval_secs;

    let mut add_entry = move || {
        let entry = acl_input();
        if wizard.write().add_acl_entry(&entry) {
            acl_input.set(String::new());
        }
    };

    rsx! {
        div { class: "space-y-6",
            div {
                h2 { class: "text-lg font-bold text-gray-900", "Keepalive & Access Control" }
                p { class: "text-sm text-gray-500 mt-0.5",
                    "Configure OPTIONS keepalive and restrict allowed source IPs."
                }
            }

            // OPTIONS keepalive
            div { class: "td-card p-5",
                div { class: "flex items-start justify-between gap-4",
                    div {
                        h3 { class: "font-semibold text-gray-800 text-sm", "SIP OPTIONS Keepalive" }
                        p { class: "text-xs text-gray-500 mt-1",
                            "Talkdesk will send SIP OPTIONS pings every {interval} seconds to verify endpoint reachability."
                        }
                    }
                    button {
                        r#type: "button",
                        role: "switch",
                        class: "relative inline-flex h-6 w-11 flex-shrink-0 rounded-full transition-colors",
                        class: if options { "bg-td-purple" } else { "bg-gray-200" },
                        onclick: move |_| wizard.write().toggle_options(),
                        span {
                            class: "inline-block h-5 w-5 mt-0.5 rounded-full bg-white shadow transition-transform",
                            class: if options { "translate-x-5" } else { "translate-x-0.5" },
                        }
                    }
                }
                if options {
                    div { class: "mt-3 flex items-center gap-2 text-xs text-green-700 bg-green-50 border border-green-200 rounded-md px-3 py-2",
                        span { "\u{2713}" }
                        "OPTIONS ping active \u{2014} interval: {interval}s"
                    }
                }
            }

            // ACL
            div { class: "td-card p-5",
                div { class: "flex items-center gap-2 mb-1",
                    h3 { class: "font-semibold text-gray-800 text-sm", "Allowed Source IPs / CIDR Ranges" }
                    span { class: "text-[11px] px-2 py-0.5 rounded-full bg-gray-100 text-gray-500", "Optional \u{2014} Advanced" }
                }

                div { class: "flex gap-2 mt-3",
                    input {
                        class: "td-input font-mono flex-1",
                        r#type: "text",
                        placeholder: "e.g. 203.0.113.0/24 or 198.51.100.5",
                        value: "{acl_input}",
                        oninput: move |e| acl_input.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                add_entry();
                            }
                        },
                    }
                    button {
                        class: "td-btn-secondary",
                        onclick: move |_| add_entry(),
                        "+ Add"
                    }
                }

                if !acl.is_empty() {
                    div { class: "flex flex-wrap gap-2 mt-3",
                        for entry in acl {
                            span {
                                key: "{entry}",
                                class: "inline-flex items-center gap-1.5 px-2.5 py-1 rounded-full bg-td-purple-light border border-td-purple-border text-td-purple text-xs font-mono",
                                "{entry}"
                                button {
                                    class: "hover:text-red-500",
                                    title: "Remove",
                                    onclick: {
                                        let entry = entry.clone();
                                        move |_| wizard.write().remove_acl_entry(&entry)
                                    },
                                    "\u{00D7}"
                                }
                            }
                        }
                    }
                }

                div { class: "mt-4 flex items-start gap-2.5 bg-amber-50 border border-amber-200 rounded-lg px-4 py-3",
                    span { class: "text-amber-500 flex-shrink-0", "\u{26A0}" }
                    p { class: "text-xs text-amber-800 leading-relaxed",
                        "If no ACL rules are defined, Talkdesk will automatically allow traffic from the IP addresses and resolved DNS entries of the endpoints you configured. We recommend explicitly defining your allowed sources in production."
                    }
                }
            }
        }
    }
}
