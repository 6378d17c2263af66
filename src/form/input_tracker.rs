//! Caret and focus tracking for a single text field.

use cgmath::Vector2;

/// Events produced by an [`InputTracker`].
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Field gained (`true`) or lost (`false`) focus, with its text at that moment.
    Focus { focused: bool, text: String },
    /// Caret moved onto a glyph whose origin is `position` in world space.
    CaretMoved { position: Vector2<f32>, text: String },
}

/// Watches one text field.
///
/// Polling is only active while the field has focus. Text layout stays with
/// the host: it passes the world-space origin of every laid-out glyph.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    enabled: bool,
    prev_caret: Option<usize>,
}

impl InputTracker {
    /// `focused` is the field's focus state at creation time.
    pub fn new(focused: bool) -> Self {
        Self {
            enabled: focused,
            prev_caret: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn select(&mut self, text: &str) -> InputEvent {
        self.enabled = true;
        InputEvent::Focus {
            focused: true,
            text: text.to_string(),
        }
    }

    pub fn deselect(&mut self, text: &str) -> InputEvent {
        self.enabled = false;
        InputEvent::Focus {
            focused: false,
            text: text.to_string(),
        }
    }

    /// Check the caret. Emits an event when the caret index changed and
    /// sits before a laid-out glyph; a caret past the last glyph is recorded
    /// but not reported.
    pub fn poll(&mut self, caret: usize, glyph_origins: &[Vector2<f32>], text: &str) -> Option<InputEvent> {
        if !self.enabled || self.prev_caret == Some(caret) {
            return None;
        }
        self.prev_caret = Some(caret);

        glyph_origins.get(caret).map(|&position| InputEvent::CaretMoved {
            position,
            text: text.to_string(),
        })
    }
}
