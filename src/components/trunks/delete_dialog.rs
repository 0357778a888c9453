use dioxus::prelude::*;
use crate::models::Trunk;

#[component]
pub fn DeleteTrunkDialog(
    trunk: Trunk,
    on_confirm: EventHandler<String>,
    on_cancel: EventHandler<MouseEvent>,
) -> Element {
    let trunk_id = trunk.id.clone();

    rsx! {
        div { class: "fixed inset-0 bg-black/40 flex items-center justify-center z-50 p-4",
            onclick: move |e| on_cancel.call(e),
            div {
                class: "td-card w-full max-w-md p-6",
                onclick: move |e| e.stop_propagation(),

                div { class: "flex items-center gap-3 mb-4",
                    div { class: "w-10 h-10 rounded-full bg-red-100 text-red-600 flex items-center justify-center flex-shrink-0",
                        "!"
                    }
                    div {
                        h3 { class: "font-semibold text-gray-900", "Delete SIP Trunk" }
                        p { class: "text-sm text-gray-500", "This action cannot be undone." }
                    }
                }

                p { class: "text-sm text-gray-700 mb-5",
                    "Are you sure you want to delete "
                    strong { "{trunk.name}" }
                    "? All associated endpoints and routing rules will be permanently removed."
                }

                // Action buttons
                div { class: "flex gap-3 justify-end",
                    button {
                        class: "td-btn-secondary",
                        onclick: move |e| on_cancel.call(e),
                        "Cancel"
                    }
                    button {
                        class: "td-btn-danger",
                        onclick: move |_| on_confirm.call(trunk_id.clone()),
                        "\u{1F5D1} Delete Trunk"
                    }
                }
            }
        }
    }
}
