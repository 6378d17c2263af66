//! Password field helpers.

/// Zero-width space some text widgets keep in an otherwise empty field.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// True when the password holds no real characters.
pub fn is_password_empty(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(ZERO_WIDTH_SPACE), None) => true,
        _ => false,
    }
}

/// How the password field renders its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    Standard,
    #[default]
    Password,
}

/// The "show password" eye toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordVisibility {
    visible: bool,
}

impl PasswordVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn input_kind(&self) -> InputKind {
        if self.visible {
            InputKind::Standard
        } else {
            InputKind::Password
        }
    }

    /// Flip visibility and return the input kind the field should switch to.
    pub fn toggle(&mut self) -> InputKind {
        self.visible = !self.visible;
        log::trace!("password visibility: {}", self.visible);
        self.input_kind()
    }
}
