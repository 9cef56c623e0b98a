//! Interactive screens, page capabilities, and per-screen validation.
//!
//! DESIGN
//! ======
//! A page is probed once at boot and reduced to a `Capabilities` set. Every
//! later decision ("is there a status modal?", "which screens need wiring?")
//! reads that set instead of repeating element lookups.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use std::collections::BTreeSet;

use crate::config::{Messages, ids};
use crate::state::prefs::Patch;

/// How a capability is detected in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// An element with this id exists.
    Id(&'static str),
    /// At least one element matches this selector.
    Query(&'static str),
}

/// An optional page region that enables some behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Layout,
    ToggleIcon,
    FontSlider,
    FontLabel,
    DateDisplay,
    StatusModal,
    AlertModal,
    BulkForm,
    ConstantForm,
    RankForm,
    RankSelector,
    CreateUserForm,
    RowTable,
    SelectedCount,
    PasswordToggle,
    ImageUpload,
}

impl Capability {
    pub const ALL: [Self; 16] = [
        Self::Layout,
        Self::ToggleIcon,
        Self::FontSlider,
        Self::FontLabel,
        Self::DateDisplay,
        Self::StatusModal,
        Self::AlertModal,
        Self::BulkForm,
        Self::ConstantForm,
        Self::RankForm,
        Self::RankSelector,
        Self::CreateUserForm,
        Self::RowTable,
        Self::SelectedCount,
        Self::PasswordToggle,
        Self::ImageUpload,
    ];

    pub fn probe(self) -> Probe {
        match self {
            Self::Layout => Probe::Id(ids::ADMIN_LAYOUT),
            Self::ToggleIcon => Probe::Id(ids::TOGGLE_ICON),
            Self::FontSlider => Probe::Id(ids::FONT_SIZE_RANGE),
            Self::FontLabel => Probe::Id(ids::FONT_SIZE_VALUE),
            Self::DateDisplay => Probe::Id(ids::CURRENT_DATE),
            Self::StatusModal => Probe::Id(ids::STATUS_MODAL),
            Self::AlertModal => Probe::Id(ids::ALERT_MODAL),
            Self::BulkForm => Probe::Id(Screen::UserList.form_id()),
            Self::ConstantForm => Probe::Id(Screen::Constants.form_id()),
            Self::RankForm => Probe::Id(Screen::RankUpdate.form_id()),
            Self::RankSelector => Probe::Query(RANK_INPUT_SELECTOR),
            Self::CreateUserForm => Probe::Id(Screen::CreateUser.form_id()),
            Self::RowTable => Probe::Query(USER_ROW_SELECTOR),
            Self::SelectedCount => Probe::Id(ids::SELECTED_COUNT),
            Self::PasswordToggle => Probe::Id(ids::TOGGLE_PASSWORD),
            Self::ImageUpload => Probe::Query(FILE_INPUT_SELECTOR),
        }
    }
}

pub const USER_ROW_SELECTOR: &str = ".user-row";
pub const ROW_CHECKBOX_SELECTOR: &str = ".row-checkbox";
pub const RANK_INPUT_SELECTOR: &str = r#"input[name="rank"]"#;
pub const CHECKED_RANK_SELECTOR: &str = r#"input[name="rank"]:checked"#;
pub const CHECKED_ROW_SELECTOR: &str = ".row-checkbox:checked";
pub const PASSWORD_INPUT_SELECTOR: &str = r#"input[type="password"]"#;
pub const FILE_INPUT_SELECTOR: &str = r#"input[type="file"]"#;

/// The capabilities present on the current page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    present: BTreeSet<Capability>,
}

impl Capabilities {
    /// Probe every capability once.
    pub fn resolve(exists: impl Fn(Probe) -> bool) -> Self {
        Self {
            present: Capability::ALL.into_iter().filter(|c| exists(c.probe())).collect(),
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.present.contains(&capability)
    }

    /// Screens whose regions are all on this page, in wiring order.
    pub fn screens(&self) -> Vec<Screen> {
        Screen::ALL
            .into_iter()
            .filter(|s| s.requires().iter().all(|c| self.has(*c)))
            .collect()
    }

    /// Whether the page has the region `patch` writes to. Body and root
    /// element patches always apply.
    pub fn admits(&self, patch: &Patch) -> bool {
        match patch {
            Patch::BodyClass(_) | Patch::ActiveModeButton(_) | Patch::RootFontSize(_) => true,
            Patch::FontLabel(_) => self.has(Capability::FontLabel),
            Patch::FontSlider(_) => self.has(Capability::FontSlider),
            Patch::Sidebar { .. } => self.has(Capability::Layout),
        }
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self { present: iter.into_iter().collect() }
    }
}

/// How a screen's trigger(s) are found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerSelector {
    Id(&'static str),
    /// Every element with this class is a trigger for the same form.
    Class(&'static str),
}

/// A screen with a choreographed submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// User list: bulk delete/restore driven by `data-action` triggers.
    UserList,
    /// System constant update.
    Constants,
    /// Bulk rank change.
    RankUpdate,
    /// Account creation.
    CreateUser,
}

impl Screen {
    pub const ALL: [Self; 4] = [Self::UserList, Self::Constants, Self::RankUpdate, Self::CreateUser];

    pub fn form_id(self) -> &'static str {
        match self {
            Self::UserList => "user-bulk-form",
            Self::Constants => "constant-update-form",
            Self::RankUpdate => "rank-update-form",
            Self::CreateUser => "create-user-form",
        }
    }

    pub fn trigger(self) -> TriggerSelector {
        match self {
            Self::UserList => TriggerSelector::Class(ids::ACTION_TRIGGER_CLASS),
            Self::Constants => TriggerSelector::Id("save-trigger"),
            Self::RankUpdate => TriggerSelector::Id("submit-trigger"),
            Self::CreateUser => TriggerSelector::Id("submit-btn"),
        }
    }

    /// Regions that must all be present before the screen is wired. A rank
    /// form without rank options could never pass validation.
    pub fn requires(self) -> &'static [Capability] {
        match self {
            Self::UserList => &[Capability::BulkForm],
            Self::Constants => &[Capability::ConstantForm],
            Self::RankUpdate => &[Capability::RankForm, Capability::RankSelector],
            Self::CreateUser => &[Capability::CreateUserForm],
        }
    }

    /// Whether activation runs a validation predicate at all.
    pub fn is_validated(self) -> bool {
        matches!(self, Self::UserList | Self::RankUpdate)
    }

    /// Presence checks gating submission. Screens without a predicate always pass.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] to show the user when the selection is incomplete.
    pub fn validate(self, snapshot: SelectionSnapshot, messages: &Messages) -> Result<(), Rejection> {
        match self {
            Self::UserList if snapshot.checked_rows == 0 => Err(Rejection {
                modal_message: Some(messages.select_users.clone()),
                alert_message: messages.select_target.clone(),
            }),
            Self::RankUpdate if snapshot.checked_rows == 0 || snapshot.checked_ranks != 1 => {
                Err(Rejection::alert(messages.select_rank.clone()))
            }
            _ => Ok(()),
        }
    }
}

/// Live selection counts read at activation time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub checked_rows: usize,
    pub checked_ranks: usize,
}

/// A failed validation and how to tell the user about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    /// Text for the alert modal, when the page has one. `None` forces a native alert.
    pub modal_message: Option<String>,
    /// Text for the native alert dialog.
    pub alert_message: String,
}

impl Rejection {
    pub fn alert(message: String) -> Self {
        Self { modal_message: None, alert_message: message }
    }

    /// Pick the channel: the alert modal needs both a modal on the page and
    /// a modal message, anything else falls back to the native alert.
    pub fn display(&self, has_alert_modal: bool) -> RejectionDisplay<'_> {
        match &self.modal_message {
            Some(message) if has_alert_modal => RejectionDisplay::Modal(message),
            _ => RejectionDisplay::Alert(&self.alert_message),
        }
    }
}

/// Where a rejection message is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionDisplay<'a> {
    /// Text for `#alert-modal-msg`, then show the alert modal.
    Modal(&'a str),
    /// `window.alert` text.
    Alert(&'a str),
}
