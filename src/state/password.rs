//! Password visibility toggle.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Whether a password input currently shows its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Revealed,
}

impl PasswordVisibility {
    /// Derive the state from the input's `type` attribute.
    pub fn from_input_type(input_type: Option<&str>) -> Self {
        if input_type.is_some_and(|t| t.eq_ignore_ascii_case("password")) {
            Self::Masked
        } else {
            Self::Revealed
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }

    /// `type` attribute value for the input.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Revealed => "text",
        }
    }

    /// Material icon name shown on the toggle control.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Masked => "visibility_off",
            Self::Revealed => "visibility",
        }
    }
}
