//! Floating placeholder label: shrinks when an empty field gains focus and
//! grows back when it loses focus while still empty.

use crate::animation::{duration_for_speed, FloatTween};

/// Placeholder animation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderConfig {
    /// Scale of the label while the field is focused
    pub min_scale: f32,
    /// Scale units per second
    pub scale_speed: f32,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.4,
            scale_speed: 5.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlaceholderController {
    config: PlaceholderConfig,
    max_scale: f32,
    scale: f32,
    tween: Option<FloatTween>,
}

impl PlaceholderController {
    /// `initial_scale` is the label's resting scale and becomes its maximum.
    pub fn new(initial_scale: f32) -> Self {
        Self::with_config(initial_scale, PlaceholderConfig::default())
    }

    pub fn with_config(initial_scale: f32, config: PlaceholderConfig) -> Self {
        Self {
            config,
            max_scale: initial_scale,
            scale: initial_scale,
            tween: None,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn on_focus(&mut self, text: &str) {
        self.on_focus_changed(true, text);
    }

    pub fn on_focus_out(&mut self, text: &str) {
        self.on_focus_changed(false, text);
    }

    fn on_focus_changed(&mut self, focused: bool, text: &str) {
        // A filled field keeps its label where it is
        if !text.is_empty() {
            return;
        }
        let end = if focused { self.config.min_scale } else { self.max_scale };
        let duration = duration_for_speed(self.scale, end, self.config.scale_speed);
        self.tween = Some(FloatTween::new(self.scale, end, duration));
    }

    pub fn update(&mut self, dt: f32) -> f32 {
        if let Some(tween) = &mut self.tween {
            self.scale = tween.advance(dt);
            if tween.is_complete() {
                self.tween = None;
            }
        }
        self.scale
    }
}
