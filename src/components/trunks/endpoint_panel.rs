//! Collapsible reference panel listing every region's SIP and media endpoints

use dioxus::prelude::*;
use crate::models::{all_regions, Region};
use crate::components::common::CopyButton;

#[component]
pub fn EndpointInfoPanel() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "td-card overflow-hidden",
            button {
                class: "w-full flex items-center justify-between px-5 py-4 hover:bg-gray-50 transition-colors text-left",
                onclick: move |_| open.set(!open()),
                div { class: "flex items-center gap-2",
                    span { class: "text-td-purple", "\u{1F5A5}" }
                    span { class: "font-semibold text-gray-800 text-sm", "Talkdesk SIP Endpoints & Media Engine" }
                    span { class: "text-xs text-gray-400 font-normal", "\u{2014} Available regions & connection details" }
                }
                span { class: "text-gray-400 flex-shrink-0",
                    if open() { "\u{25B2}" } else { "\u{25BC}" }
                }
            }

            if open() {
                div { class: "border-t border-gray-100 p-5",
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        for region in all_regions().iter() {
                            RegionCard { key: "{region.id}", region: *region }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RegionCard(region: Region) -> Element {
    let media_ips = region.media_ips.join(", ");

    rsx! {
        div { class: "td-card p-4",
            div { class: "flex items-center justify-between mb-3",
                div { class: "flex items-center gap-2",
                    span { class: "text-lg", "{region.flag}" }
                    div {
                        span { class: "font-mono font-semibold text-gray-800 text-sm", "{region.id}" }
                        span { class: "text-gray-500 text-xs ml-1", "\u{2014} {region.short_label}" }
                    }
                }
                CopyButton { text: region.srv_summary(), with_label: true, title: "Copy SRV records" }
            }

            // SRV records
            div { class: "mb-3",
                div { class: "text-[11px] font-semibold text-gray-500 uppercase tracking-wide mb-1.5",
                    "SIP SRV Records"
                }
                div { class: "bg-gray-50 rounded-md border border-gray-100 divide-y divide-gray-100",
                    for srv in region.srv.iter() {
                        div { key: "{srv.proto}", class: "px-3 py-1.5 flex items-center justify-between gap-2 text-xs",
                            span { class: "font-mono text-indigo-700 font-medium min-w-0 truncate", "{srv.name()}" }
                            span { class: "text-gray-400 flex-shrink-0", "\u{2192}" }
                            span { class: "font-mono text-gray-700 flex-shrink-0", "{srv.target_addr()}" }
                        }
                    }
                }
            }

            // Media engine
            div {
                div { class: "text-[11px] font-semibold text-gray-500 uppercase tracking-wide mb-1.5",
                    "Media Engine"
                }
                div { class: "bg-gray-50 rounded-md border border-gray-100 px-3 py-2 text-xs space-y-1",
                    div { class: "flex gap-2",
                        span { class: "text-gray-500 w-20 flex-shrink-0", "IP Ranges:" }
                        span { class: "font-mono text-gray-700", "{media_ips}" }
                    }
                    div { class: "flex gap-2",
                        span { class: "text-gray-500 w-20 flex-shrink-0", "RTP Ports:" }
                        span { class: "font-mono text-gray-700", "{region.rtp_ports}" }
                    }
                }
            }
        }
    }
}
