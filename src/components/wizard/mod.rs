//! Trunk creation wizard views
//!
//! The container owns a [`TrunkWizard`] signal and hands it to each step body.
//! All navigation and validation decisions live in the controller.

mod region_mode;
mod credentials;
mod static_endpoints;
mod options_acl;
mod review;
mod inbound_routing;

use dioxus::prelude::*;

use crate::config::ConsoleConfig;
use crate::models::{CredentialGenerator, TrunkMode};
use crate::routes::Route;
use crate::state::{use_trunk_store, use_ui_state, NotificationType, TrunkWizard, WizardStep};

use credentials::CredentialsStep;
use options_acl::OptionsAclStep;
use region_mode::RegionModeStep;
use review::ReviewStep;
use static_endpoints::StaticEndpointsStep;

#[component]
pub fn CreateTrunkWizard() -> Element {
    let config = use_context::<ConsoleConfig>();
    let mut store = use_trunk_store();
    let mut ui_state = use_ui_state();
    let max_endpoints = config.max_endpoints;
    let mut wizard = use_signal(move || {
        TrunkWizard::new(CredentialGenerator::from_clock()).with_max_endpoints(max_endpoints)
    });
    let mut created = use_signal(|| None::<String>);

    let submit = move |_| {
        let result = wizard.write().submit();
        match result {
            Ok(draft) => {
                let name = draft.name.clone();
                store.write().add(draft);
                created.set(Some(name));
            }
            Err(e) => {
                tracing::debug!("Trunk submission blocked: {}", e);
                ui_state.write().show_notification(e.to_string(), NotificationType::Error);
            }
        }
    };

    if let Some(name) = created() {
        return rsx! {
            div { class: "p-6 max-w-3xl mx-auto",
                div { class: "td-card p-8",
                    SuccessState { name }
                }
            }
        };
    }

    let (step, max_reached, mode, is_first, is_last) = {
        let state = wizard.read();
        (state.step(), state.max_reached(), state.form().mode, state.is_first(), state.is_last())
    };

    rsx! {
        div { class: "p-6 max-w-3xl mx-auto",
            // Back breadcrumb
            Link { class: "flex items-center gap-1 text-sm text-gray-500 hover:text-gray-800 mb-4", to: Route::Trunks {},
                "\u{2039} Back to SIP Trunks"
            }

            div { class: "td-card p-8",
                StepIndicator { current: step, max_reached, mode }

                div { class: "min-h-[320px]",
                    match (step, mode) {
                        (WizardStep::RegionAndMode, _) => rsx! { RegionModeStep { wizard } },
                        (WizardStep::Endpoints, Some(TrunkMode::Registered)) => rsx! { CredentialsStep { wizard } },
                        (WizardStep::Endpoints, _) => rsx! { StaticEndpointsStep { wizard } },
                        (WizardStep::OptionsAndAcl, _) => rsx! { OptionsAclStep { wizard } },
                        (WizardStep::Review, _) => rsx! { ReviewStep { wizard, on_submit: submit } },
                    }
                }

                // Navigation buttons
                if !is_last {
                    div { class: "flex justify-between mt-8 pt-6 border-t border-gray-100",
                        button {
                            class: "td-btn-secondary",
                            onclick: move |_| {
                                if is_first {
                                    wizard.write().reset();
                                    navigator().push(Route::Trunks {});
                                } else {
                                    wizard.write().retreat();
                                }
                            },
                            if is_first { "\u{2039} Cancel" } else { "\u{2039} Back" }
                        }
                        button {
                            class: "td-btn-primary",
                            onclick: move |_| {
                                wizard.write().advance();
                            },
                            "Continue \u{203A}"
                        }
                    }
                } else {
                    div { class: "flex justify-start mt-6 pt-6 border-t border-gray-100",
                        button {
                            class: "td-btn-secondary",
                            onclick: move |_| wizard.write().retreat(),
                            "\u{2039} Back to edit"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StepIndicator(current: WizardStep, max_reached: WizardStep, mode: Option<TrunkMode>) -> Element {
    let steps = WizardStep::sequence(mode);
    let current_index = steps.iter().position(|s| *s == current).unwrap_or(0);
    let items: Vec<(usize, WizardStep, String)> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| (i, *step, step.number().to_string()))
        .collect();

    rsx! {
        div { class: "flex items-center justify-center mb-8",
            for (i, step, number) in items {
                div { key: "{step.number()}", class: "flex items-center",
                    div { class: "flex flex-col items-center",
                        div {
                            class: "w-8 h-8 rounded-full flex items-center justify-center text-sm font-semibold transition-all",
                            class: if i < current_index {
                                "bg-td-purple text-white"
                            } else if i == current_index {
                                "bg-td-purple text-white ring-4 ring-td-purple-soft"
                            } else {
                                "bg-gray-100 text-gray-400"
                            },
                            if i < current_index { "\u{2713}" } else { "{number}" }
                        }
                        span {
                            class: "mt-1.5 text-xs font-medium whitespace-nowrap",
                            class: if i == current_index {
                                "text-td-purple"
                            } else if step <= max_reached {
                                "text-gray-600"
                            } else {
                                "text-gray-400"
                            },
                            "{step.label()}"
                        }
                    }
                    if i + 1 < steps.len() {
                        div {
                            class: "h-px w-16 -mt-3.5 mx-2",
                            class: if i < current_index { "bg-td-purple" } else { "bg-gray-200" },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SuccessState(name: String) -> Element {
    rsx! {
        div { class: "py-10 flex flex-col items-center gap-5 text-center",
            div { class: "w-16 h-16 rounded-full bg-green-100 text-green-500 flex items-center justify-center text-3xl",
                "\u{2713}"
            }
            div {
                h2 { class: "text-xl font-bold text-gray-900", "Trunk created successfully!" }
                p { class: "text-sm text-gray-500 mt-1",
                    strong { "{name}" }
                    " has been configured and is being provisioned."
                }
            }
            Link { class: "td-btn-primary py-2.5 px-6", to: Route::Trunks {},
                "View All Trunks"
            }
        }
    }
}
