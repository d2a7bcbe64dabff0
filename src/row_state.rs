//! Row View State
//!
//! Ephemeral per-row UI state. Never persisted.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMode {
    #[default]
    Idle,
    Confirming,
}

/// User input on a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    StartEdit,
    /// Enter in the edit field; leaves edit mode even when blank
    SubmitEdit(String),
    /// ✓ button; a blank field keeps edit mode open
    ConfirmEdit(String),
    CancelEdit,
    StartDelete,
    ConfirmDelete,
    CancelDelete,
}

/// Store mutation requested by a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    SetText(String),
    Remove,
}

/// Edit and delete flags, independent of each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowState {
    pub edit: EditMode,
    pub delete: DeleteMode,
}

impl RowState {
    pub fn is_editing(&self) -> bool {
        self.edit == EditMode::Editing
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.delete == DeleteMode::Confirming
    }

    /// Apply an event, returning the store mutation it triggers, if any.
    ///
    /// Events that don't match the current mode are ignored.
    pub fn apply(&mut self, event: RowEvent) -> Option<RowAction> {
        match (event, self.edit, self.delete) {
            (RowEvent::StartEdit, EditMode::Viewing, _) => {
                self.edit = EditMode::Editing;
                None
            }
            (RowEvent::SubmitEdit(text), EditMode::Editing, _) => {
                self.edit = EditMode::Viewing;
                if text.trim().is_empty() {
                    None
                } else {
                    Some(RowAction::SetText(text))
                }
            }
            (RowEvent::ConfirmEdit(text), EditMode::Editing, _) => {
                if text.trim().is_empty() {
                    None
                } else {
                    self.edit = EditMode::Viewing;
                    Some(RowAction::SetText(text))
                }
            }
            (RowEvent::CancelEdit, EditMode::Editing, _) => {
                self.edit = EditMode::Viewing;
                None
            }
            (RowEvent::StartDelete, _, DeleteMode::Idle) => {
                self.delete = DeleteMode::Confirming;
                None
            }
            (RowEvent::ConfirmDelete, _, DeleteMode::Confirming) => {
                self.delete = DeleteMode::Idle;
                Some(RowAction::Remove)
            }
            (RowEvent::CancelDelete, _, DeleteMode::Confirming) => {
                self.delete = DeleteMode::Idle;
                None
            }
            _ => None,
        }
    }
}
