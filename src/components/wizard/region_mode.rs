use dioxus::prelude::*;
use crate::components::common::FieldError;
use crate::models::{all_regions, TrunkMode};
use crate::state::{FieldKey, TrunkWizard};

const MODE_CHOICES: [(TrunkMode, &str, &str, &str); 2] = [
    (
        TrunkMode::Registered,
        "\u{1F464}",
        "Registered",
        "Your carrier registers to Talkdesk. We generate SIP credentials per endpoint.",
    ),
    (
        TrunkMode::Static,
        "\u{1F5A5}",
        "Static IP / FQDN",
        "You provide your carrier's IP addresses or FQDNs. No registration required.",
    ),
];

#[component]
pub fn RegionModeStep(mut wizard: Signal<TrunkWizard>) -> Element {
    let state = wizard.read();
    let form = state.form();
    let name_error = state.error_message(FieldKey::Name);
    let region_error = state.error_message(FieldKey::Region);
    let mode_error = state.error_message(FieldKey::Mode);
    let name_invalid = name_error.is_some();
    let region_invalid = region_error.is_some();
    let selected_region = form.region.clone().unwrap_or_default();
    let selected_mode = form.mode;

    rsx! {
        div { class: "space-y-6",
            div {
                h2 { class: "text-lg font-bold text-gray-900", "Region & Registration Mode" }
                p { class: "text-sm text-gray-500 mt-0.5",
                    "Choose where this trunk terminates and how your carrier connects."
                }
            }

            // Trunk name
            div {
                label { class: "td-label",
                    "Trunk Name "
                    span { class: "text-red-500", "*" }
                }
                input {
                    class: "td-input",
                    class: if name_invalid { "border-red-400" },
                    r#type: "text",
                    placeholder: "e.g. Carrier-Primary-EU",
                    value: "{form.name}",
                    oninput: move |e| wizard.write().set_name(e.value()),
                }
                FieldError { message: name_error }
            }

            // Region
            div {
                label { class: "td-label",
                    "Region "
                    span { class: "text-red-500", "*" }
                }
                select {
                    class: "td-select",
                    class: if region_invalid { "border-red-400" },
                    onchange: move |e| wizard.write().set_region(Some(e.value())),
                    option { value: "", selected: selected_region.is_empty(), "\u{2014} Select a region \u{2014}" }
                    for region in all_regions().iter() {
                        option {
                            key: "{region.id}",
                            value: "{region.id}",
                            selected: selected_region == region.id,
                            "{region.label}"
                        }
                    }
                }
                FieldError { message: region_error }
                p { class: "text-xs text-gray-400 mt-1.5",
                    "\u{2139} Only one region per trunk. Multiple trunks can serve the same region."
                }
            }

            // Mode
            div {
                label { class: "td-label",
                    "Registration Mode "
                    span { class: "text-red-500", "*" }
                }
                div { class: "grid grid-cols-2 gap-3",
                    for (mode, icon, title, description) in MODE_CHOICES {
                        button {
                            key: "{title}",
                            r#type: "button",
                            class: "flex flex-col gap-2 p-4 rounded-lg border-2 text-left transition-all",
                            class: if selected_mode == Some(mode) {
                                "border-td-purple bg-td-purple-light"
                            } else {
                                "border-gray-200 bg-white hover:border-gray-300"
                            },
                            onclick: move |_| wizard.write().set_mode(mode),
                            div { class: "flex items-center justify-between",
                                span { class: "text-xl", "{icon}" }
                                if selected_mode == Some(mode) {
                                    span { class: "text-td-purple", "\u{2713}" }
                                }
                            }
                            div {
                                div {
                                    class: "font-semibold text-sm",
                                    class: if selected_mode == Some(mode) { "text-td-purple" } else { "text-gray-800" },
                                    "{title}"
                                }
                                div { class: "text-xs text-gray-500 mt-0.5 leading-relaxed", "{description}" }
                            }
                        }
                    }
                }
                FieldError { message: mode_error }
            }
        }
    }
}
