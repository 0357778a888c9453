use dioxus::prelude::*;

/// Transient UI state shared across views
#[derive(Clone, Default, PartialEq)]
pub struct UiState {
    pub notification: Option<Notification>,
    next_notification_id: u64,
}

#[derive(Clone, PartialEq)]
pub struct Notification {
    /// Increases with every toast so dismiss timers can tell them apart
    pub id: u64,
    pub message: String,
    pub notification_type: NotificationType,
}

#[derive(Clone, Copy, PartialEq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
}

impl NotificationType {
    pub fn color_class(&self) -> &str {
        match self {
            NotificationType::Success => "bg-green-600",
            NotificationType::Error => "bg-red-600",
            NotificationType::Info => "bg-td-purple",
        }
    }
}

impl UiState {
    /// Replace the current toast. Returns the new toast's id.
    pub fn show_notification(&mut self, message: impl Into<String>, notification_type: NotificationType) -> u64 {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notification = Some(Notification {
            id,
            message: message.into(),
            notification_type,
        });
        id
    }

    pub fn clear_notification(&mut self) {
        self.notification = None;
    }

    /// Clear the toast only if it is still the one with `id`
    pub fn dismiss_notification(&mut self, id: u64) {
        if self.notification.as_ref().is_some_and(|n| n.id == id) {
            self.notification = None;
        }
    }
}

pub fn provide_ui_state() -> Signal<UiState> {
    use_context_provider(|| Signal::new(UiState::default()))
}

pub fn use_ui_state() -> Signal<UiState> {
    use_context::<Signal<UiState>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_ids_increase() {
        let mut ui = UiState::default();
        let first = ui.show_notification("one", NotificationType::Success);
        let second = ui.show_notification("two", NotificationType::Info);
        assert!(second > first);
        assert_eq!(ui.notification.as_ref().map(|n| n.message.as_str()), Some("two"));
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_toast() {
        let mut ui = UiState::default();
        let first = ui.show_notification("Trunk A deleted", NotificationType::Success);
        let second = ui.show_notification("Trunk B deleted", NotificationType::Success);

        // timer of the first toast fires while the second is showing
        ui.dismiss_notification(first);
        assert_eq!(ui.notification.as_ref().map(|n| n.id), Some(second));

        ui.dismiss_notification(second);
        assert!(ui.notification.is_none());
    }

    #[test]
    fn test_clear_notification() {
        let mut ui = UiState::default();
        ui.show_notification("Region & Mode step has 3 invalid field(s)", NotificationType::Error);
        ui.clear_notification();
        assert!(ui.notification.is_none());
    }
}
