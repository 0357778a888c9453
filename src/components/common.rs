use dioxus::prelude::*;
use crate::clipboard::copy_to_clipboard;
use crate::config::ConsoleConfig;
use crate::state::{use_ui_state, NotificationType};

/// Sleep on whichever runtime the renderer provides
pub async fn delay_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}

#[component]
pub fn Badge(text: String, #[props(default = "bg-gray-100 text-gray-600 border border-gray-200".to_string())] color_class: String) -> Element {
    rsx! {
        span { class: "inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium {color_class}",
            "{text}"
        }
    }
}

#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "text-red-500 text-xs mt-1", "{message}" }
        },
        None => rsx! {},
    }
}

/// Copy button that flips to a check mark for a moment after clicking
#[component]
pub fn CopyButton(
    text: String,
    #[props(default = false)]
    with_label: bool,
    #[props(default = "Copy".to_string())]
    title: String,
) -> Element {
    let config = use_context::<ConsoleConfig>();
    let mut copied = use_signal(|| false);

    let copy = move |_| {
        copy_to_clipboard(&text);
        copied.set(true);
        let feedback_ms = config.copy_feedback_ms;
        spawn(async move {
            delay_ms(feedback_ms).await;
            copied.set(false);
        });
    };

    rsx! {
        button {
            class: "td-btn-ghost text-xs py-1 px-2 flex-shrink-0",
            title: "{title}",
            onclick: copy,
            if copied() {
                span { class: "text-green-600", "\u{2713}" }
            } else {
                span { "\u{29C9}" }
            }
            if with_label {
                if copied() { "Copied" } else { "Copy" }
            }
        }
    }
}

#[component]
pub fn Notification() -> Element {
    let mut ui_state = use_ui_state();
    let config = use_context::<ConsoleConfig>();
    let notification = ui_state.read().notification.clone();

    // Auto-dismiss
    let toast_ms = config.toast_ms;
    use_effect(move || {
        let current = ui_state.read().notification.as_ref().map(|n| n.id);
        if let Some(id) = current {
            spawn(async move {
                delay_ms(toast_ms).await;
                ui_state.write().dismiss_notification(id);
            });
        }
    });

    if let Some(notif) = notification {
        let color_class = notif.notification_type.color_class();
        let icon = match notif.notification_type {
            NotificationType::Success => "\u{2705}",
            NotificationType::Error => "\u{274C}",
            NotificationType::Info => "\u{2139}",
        };
        rsx! {
            div {
                class: "fixed top-4 right-4 z-50 {color_class} text-white px-5 py-3 rounded-lg shadow-xl max-w-sm",
                div { class: "flex items-start gap-3",
                    span { class: "flex-shrink-0", "{icon}" }
                    p { class: "flex-1 text-sm font-medium", "{notif.message}" }
                    button {
                        class: "ml-2 text-white hover:text-gray-200 flex-shrink-0",
                        onclick: move |_| ui_state.write().clear_notification(),
                        "\u{2715}"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}
