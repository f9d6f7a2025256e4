use crate::list::{Action, AddError, FormField, Outcome, ShoppingList};
use crate::models::ItemId;
use crate::prompt::{Confirmation, Decision};
use crate::ui::util::{clamp_cursor, format_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Editing,
    Command,
    Confirm,
    Alert,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "LIST"),
            Self::Editing => write!(f, "EDIT"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
            Self::Alert => write!(f, "ALERT"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    RemoveItem { id: ItemId, text: String },
}

/// Modal message shown after a rejected add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alert {
    pub(crate) title: &'static str,
    pub(crate) message: &'static str,
    pub(crate) detail: Option<String>,
}

impl From<&AddError> for Alert {
    fn from(err: &AddError) -> Self {
        Self {
            title: err.title(),
            message: err.message(),
            detail: err.detail(),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) list: ShoppingList,
    pub(crate) input_mode: InputMode,
    /// Field receiving keystrokes while in `InputMode::Editing`.
    pub(crate) field: FormField,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) item_index: usize,
    pub(crate) item_scroll: usize,

    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm: Option<Confirmation>,
    pub(crate) alert: Option<Alert>,
    /// Mode to go back to once the alert is dismissed.
    pub(crate) alert_return: InputMode,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(list: ShoppingList) -> Self {
        Self {
            running: true,
            list,
            input_mode: InputMode::Editing,
            field: FormField::Name,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            item_index: 0,
            item_scroll: 0,

            pending_action: None,
            confirm: None,
            alert: None,
            alert_return: InputMode::Editing,

            visible_rows: 10,
        }
    }

    pub(crate) fn selected_id(&self) -> Option<ItemId> {
        self.list.items().get(self.item_index).map(|i| i.id)
    }

    /// Item id for a 1-based position as shown on screen.
    pub(crate) fn id_at(&self, position: usize) -> Option<ItemId> {
        position
            .checked_sub(1)
            .and_then(|i| self.list.items().get(i))
            .map(|i| i.id)
    }

    pub(crate) fn focus_field(&mut self, field: FormField) {
        self.field = field;
        self.input_mode = InputMode::Editing;
    }

    pub(crate) fn focus_list(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Submit the form. A rejection raises an alert and leaves the form as
    /// typed so it can be corrected.
    pub(crate) fn submit_item(&mut self) {
        match self.list.apply(Action::Add) {
            Ok(Outcome::Added(id)) => {
                self.item_index = self.list.len().saturating_sub(1);
                if self.item_index >= self.item_scroll + self.visible_rows {
                    self.item_scroll = self.item_index + 1 - self.visible_rows;
                }
                if let Some(item) = self.list.get(id) {
                    let msg = format!("Added: {} - {}", item.text, format_amount(item.price));
                    self.set_status(msg);
                }
                if self.input_mode == InputMode::Editing {
                    self.field = FormField::Name;
                }
            }
            Ok(_) => {}
            Err(err) => self.show_alert(&err),
        }
    }

    pub(crate) fn toggle(&mut self, id: ItemId) {
        if let Ok(Outcome::Toggled { completed, .. }) = self.list.apply(Action::Toggle(id)) {
            let text = self.list.get(id).map(|i| i.text.clone()).unwrap_or_default();
            if completed {
                self.set_status(format!("Picked up: {text}"));
            } else {
                self.set_status(format!("Back on the list: {text}"));
            }
        }
    }

    /// Open the removal prompt for `id`. Nothing happens when the id is gone.
    pub(crate) fn request_remove(&mut self, id: ItemId) {
        let Some(item) = self.list.get(id) else {
            return;
        };
        self.confirm = Some(Confirmation::remove_item(item));
        self.pending_action = Some(PendingAction::RemoveItem {
            id,
            text: item.text.clone(),
        });
        self.input_mode = InputMode::Confirm;
    }

    /// Settle the open prompt with the user's answer.
    pub(crate) fn resolve_pending(&mut self, decision: Decision) {
        if let Some(PendingAction::RemoveItem { id, text }) = self.pending_action.take() {
            let action = Action::Remove { id, decision };
            match self.list.apply(action) {
                Ok(Outcome::Removed(_)) => {
                    clamp_cursor(&mut self.item_index, &mut self.item_scroll, self.list.len());
                    self.set_status(format!("Deleted: {text}"));
                }
                Ok(Outcome::Kept) => self.set_status("Cancelled"),
                _ => {}
            }
        }
        self.confirm = None;
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn show_alert(&mut self, err: &AddError) {
        if self.input_mode != InputMode::Alert {
            self.alert_return = self.input_mode;
        }
        self.alert = Some(Alert::from(err));
        self.input_mode = InputMode::Alert;
    }

    /// Close the alert and go back to wherever it was raised from.
    pub(crate) fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = self.alert_return;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
