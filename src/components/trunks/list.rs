use dioxus::prelude::*;
use crate::models::Trunk;
use crate::routes::Route;
use crate::components::common::Badge;
use crate::components::trunks::{DeleteTrunkDialog, EndpointInfoPanel};
use crate::state::{use_trunk_store, use_ui_state, NotificationType};

#[component]
pub fn TrunkList() -> Element {
    let mut store = use_trunk_store();
    let mut ui_state = use_ui_state();
    let mut to_delete = use_signal(|| None::<Trunk>);

    let trunks: Vec<Trunk> = store.read().iter().cloned().collect();
    let no_trunks = store.read().is_empty();

    let confirm_delete = move |id: String| {
        let name = store.read().get(&id).map(|t| t.name.clone());
        store.write().remove(&id);
        if let Some(name) = name {
            ui_state
                .write()
                .show_notification(format!("Trunk {} deleted", name), NotificationType::Success);
        }
        to_delete.set(None);
    };

    rsx! {
        div { class: "p-6 max-w-7xl mx-auto space-y-5",
            // Header
            div { class: "flex items-center justify-between",
                div {
                    h1 { class: "text-xl font-bold text-gray-900", "SIP Trunks" }
                    p { class: "text-sm text-gray-500 mt-0.5", "Manage your SIP trunk connections" }
                }
                Link { class: "td-btn-primary", to: Route::NewTrunk {},
                    "+ Configure New Trunk"
                }
            }

            // Trunk table
            div { class: "td-card overflow-hidden",
                if no_trunks {
                    EmptyState {}
                } else {
                    div { class: "overflow-x-auto",
                        table { class: "w-full",
                            thead {
                                tr { class: "border-b border-gray-100 bg-gray-50",
                                    for heading in ["Name", "Region", "Mode", "Transport", "Endpoints", "Status", "Actions"] {
                                        th { class: "px-5 py-3 text-left text-xs font-semibold text-gray-500 uppercase tracking-wider",
                                            "{heading}"
                                        }
                                    }
                                }
                            }
                            tbody { class: "divide-y divide-gray-50",
                                for trunk in trunks.iter() {
                                    TrunkRow {
                                        key: "{trunk.id}",
                                        trunk: trunk.clone(),
                                        on_delete: move |t| to_delete.set(Some(t)),
                                    }
                                }
                            }
                        }
                    }
                }
            }

            EndpointInfoPanel {}

            if let Some(trunk) = to_delete() {
                DeleteTrunkDialog {
                    trunk,
                    on_confirm: confirm_delete,
                    on_cancel: move |_| to_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn TrunkRow(trunk: Trunk, on_delete: EventHandler<Trunk>) -> Element {
    let mut ui_state = use_ui_state();
    let mut menu_open = use_signal(|| false);
    let trunk_id = trunk.id.clone();
    let trunk_name = trunk.name.clone();
    let trunk_for_delete = trunk.clone();

    rsx! {
        tr { class: "hover:bg-gray-50 transition-colors",
            td { class: "px-5 py-3.5",
                div { class: "flex items-center gap-2",
                    div { class: "w-7 h-7 rounded-md bg-td-purple-light text-td-purple flex items-center justify-center flex-shrink-0 text-xs",
                        "\u{260E}"
                    }
                    span { class: "font-semibold text-gray-800 text-sm", "{trunk.name}" }
                }
            }
            td { class: "px-5 py-3.5",
                Badge { text: trunk.region.clone(), color_class: "bg-gray-100 text-gray-600 border border-gray-200 font-mono" }
            }
            td { class: "px-5 py-3.5",
                Badge { text: trunk.mode.badge_label().to_string(), color_class: trunk.mode.color_class().to_string() }
            }
            td { class: "px-5 py-3.5",
                div { class: "flex items-center gap-1 flex-wrap",
                    for transport in trunk.transports.iter() {
                        Badge {
                            key: "{transport}",
                            text: transport.to_string(),
                            color_class: transport.color_class().to_string(),
                        }
                    }
                }
            }
            td { class: "px-5 py-3.5",
                span { class: "text-sm text-gray-600", "{trunk.endpoint_label()}" }
            }
            td { class: "px-5 py-3.5",
                Badge { text: trunk.status.display_name().to_string(), color_class: trunk.status.color_class().to_string() }
            }
            td { class: "px-5 py-3.5",
                div { class: "flex items-center gap-2",
                    button {
                        class: "td-btn-secondary py-1 px-3 text-xs",
                        onclick: move |_| {
                            tracing::info!("Editing trunk {} is not available", trunk_id);
                            ui_state.write().show_notification(
                                format!("Editing {} is not available yet", trunk_name),
                                NotificationType::Info,
                            );
                        },
                        "\u{2699} Configure"
                    }
                    div { class: "relative",
                        button {
                            class: "td-btn-ghost p-1.5",
                            onclick: move |_| menu_open.set(!menu_open()),
                            "\u{22EE}"
                        }
                        if menu_open() {
                            div { class: "absolute right-0 top-8 z-10 w-40 td-card py-1 shadow-lg",
                                button {
                                    class: "w-full flex items-center gap-2 px-3 py-2 text-sm text-red-600 hover:bg-red-50",
                                    onclick: move |_| {
                                        menu_open.set(false);
                                        on_delete.call(trunk_for_delete.clone());
                                    },
                                    "\u{1F5D1} Delete Trunk"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmptyState() -> Element {
    rsx! {
        div { class: "py-16 flex flex-col items-center gap-4 text-center",
            div { class: "w-16 h-16 rounded-full bg-td-purple-light text-td-purple flex items-center justify-center text-2xl",
                "\u{260E}"
            }
            div {
                h3 { class: "font-semibold text-gray-800 text-base mb-1", "No SIP trunks configured yet" }
                p { class: "text-gray-500 text-sm max-w-xs",
                    "Connect your carrier by configuring your first SIP trunk."
                }
            }
            Link { class: "td-btn-primary", to: Route::NewTrunk {},
                "+ Configure New Trunk"
            }
        }
    }
}
