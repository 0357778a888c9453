use dioxus::prelude::*;
use crate::config::ConsoleConfig;
use crate::models::{find_region, TrunkMode};
use crate::state::TrunkWizard;

#[component]
pub fn ReviewStep(wizard: Signal<TrunkWizard>, on_submit: EventHandler<MouseEvent>) -> Element {
    let config = use_context::<ConsoleConfig>();
    let form = wizard.read().form().clone();

    let region = form.region.as_deref().and_then(find_region);
    let region_flag = region.map(|r| r.flag).unwrap_or_default();
    let region_label = region.map(|r| r.label).unwrap_or_default();
    let mode_label = form.mode.map(|m| m.display_name().to_string()).unwrap_or_default();
    let is_static = form.mode == Some(TrunkMode::Static);

    let credential_count = form.credentials.len();
    let credential_summary = format!(
        "{} endpoint{} with generated credentials",
        credential_count,
        if credential_count == 1 { "" } else { "s" }
    );
    let options_label = if form.options {
        format!("\u{2713} Enabled ({}s interval)", config.options_interval_secs)
    } else {
        "Disabled".to_string()
    };
    let acl_summary = form.acl.join(", ");
    let masked = "\u{2022}".repeat(12);

    rsx! {
        div { class: "space-y-5",
            div {
                h2 { class: "text-lg font-bold text-gray-900", "Review Configuration" }
                p { class: "text-sm text-gray-500 mt-0.5", "Please review your SIP trunk settings before creating." }
            }

            div { class: "td-card divide-y divide-gray-100",
                // Trunk details
                div { class: "px-5 py-4",
                    h3 { class: "text-xs font-semibold text-gray-400 uppercase tracking-wider mb-3", "Trunk Details" }
                    div { class: "grid grid-cols-2 gap-y-2.5 text-sm",
                        span { class: "text-gray-500", "Name" }
                        span { class: "font-semibold text-gray-800", "{form.name}" }
                        span { class: "text-gray-500", "Region" }
                        span { class: "font-semibold text-gray-800 flex items-center gap-1.5", "{region_flag} {region_label}" }
                        span { class: "text-gray-500", "Mode" }
                        span { class: "font-semibold text-gray-800", "{mode_label}" }
                    }
                }

                // Endpoints
                div { class: "px-5 py-4",
                    h3 { class: "text-xs font-semibold text-gray-400 uppercase tracking-wider mb-3", "Endpoints" }
                    if is_static {
                        div { class: "space-y-1.5",
                            for (i, endpoint) in form.static_endpoints.iter().enumerate() {
                                div { key: "{endpoint.id}", class: "flex items-center gap-3 text-sm bg-gray-50 rounded px-3 py-1.5",
                                    span { class: "text-gray-400 w-4", {(i + 1).to_string()} }
                                    span { class: "font-mono text-gray-700 flex-1",
                                        if endpoint.address.is_empty() { "\u{2014}" } else { "{endpoint.address}" }
                                    }
                                    span { class: "text-xs px-2 py-0.5 rounded-full font-medium {endpoint.transport.color_class()}",
                                        "{endpoint.transport}"
                                    }
                                }
                            }
                        }
                    } else {
                        div { class: "space-y-1.5",
                            p { class: "text-sm text-gray-600 mb-2", "{credential_summary}" }
                            for cred in form.credentials.iter() {
                                div { key: "{cred.id}", class: "flex items-center gap-2 text-sm bg-gray-50 rounded px-3 py-1.5",
                                    span { class: "font-mono text-gray-700", "{cred.username}" }
                                    span { class: "text-gray-400", "/ {masked}" }
                                }
                            }
                        }
                    }
                }

                // Options and ACL only apply to static trunks
                if is_static {
                    div { class: "px-5 py-4",
                        h3 { class: "text-xs font-semibold text-gray-400 uppercase tracking-wider mb-3", "Options & ACL" }
                        div { class: "grid grid-cols-2 gap-y-2.5 text-sm",
                            span { class: "text-gray-500", "OPTIONS Keepalive" }
                            span {
                                class: "font-semibold",
                                class: if form.options { "text-green-700" } else { "text-gray-500" },
                                "{options_label}"
                            }
                            span { class: "text-gray-500", "ACL Rules" }
                            if form.acl.is_empty() {
                                span { class: "text-amber-600", "Auto-derived from endpoint IPs" }
                            } else {
                                span { class: "font-semibold text-gray-800", "{acl_summary}" }
                            }
                        }
                    }
                }
            }

            button {
                class: "td-btn-primary w-full justify-center py-3 text-base",
                onclick: move |e| on_submit.call(e),
                "\u{1F5A7} Create SIP Trunk"
            }
        }
    }
}
