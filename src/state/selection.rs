//! Table row selection.
//!
//! The selection set is never stored: it is whatever the row checkboxes say.
//! These helpers decide how a click or checkbox change moves one row, and the
//! row highlight is always re-derived from the resulting checked state.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// What inside a row received the click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The row's own checkbox; its `change` event handles the sync.
    Checkbox,
    /// An anchor (or something inside one), which navigates instead.
    Link,
    /// Any other cell content.
    Cell,
}

impl ClickTarget {
    /// Classify a click from the target's tag name, its `type` attribute and
    /// whether it sits inside an anchor.
    pub fn classify(tag_name: &str, input_type: Option<&str>, inside_link: bool) -> Self {
        if input_type.is_some_and(|t| t.eq_ignore_ascii_case("checkbox")) {
            Self::Checkbox
        } else if inside_link || tag_name.eq_ignore_ascii_case("a") {
            Self::Link
        } else {
            Self::Cell
        }
    }
}

/// Observable state of one table row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowState {
    pub checked: bool,
    /// The signed-in account's own row, which cannot be selected by row click.
    pub is_self: bool,
}

impl RowState {
    /// The highlight class must always mirror the checkbox.
    pub fn highlighted(self) -> bool {
        self.checked
    }
}

/// An interaction on one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowEvent {
    Click(ClickTarget),
    /// The checkbox itself changed; carries its new checked state.
    CheckboxChanged(bool),
}

/// Apply `event` to `row`. Returns the new state, or `None` when the event
/// leaves the row untouched.
pub fn apply_row_event(row: RowState, event: RowEvent) -> Option<RowState> {
    match event {
        RowEvent::Click(ClickTarget::Cell) if !row.is_self => Some(RowState { checked: !row.checked, ..row }),
        RowEvent::Click(_) => None,
        RowEvent::CheckboxChanged(checked) => Some(RowState { checked, ..row }),
    }
}

/// Size of the selection set derived from checkbox states.
pub fn checked_count(checked: impl IntoIterator<Item = bool>) -> usize {
    checked.into_iter().filter(|c| *c).count()
}
