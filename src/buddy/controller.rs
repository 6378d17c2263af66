//! Buddy event handling and head-turn animation.

use crate::animation::{duration_for_speed, FloatTween};
use cgmath::{InnerSpace, Vector2};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Look behaviour tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuddyConfig {
    /// Head parameter units per second, per axis
    pub look_velocity: Vector2<f32>,
    /// Multiplier applied to the normalized look distance
    pub look_force: f32,
    /// Distance (in unscaled UI units) at which the head reaches full turn
    pub max_look_distance: f32,
}

impl Default for BuddyConfig {
    fn default() -> Self {
        Self {
            look_velocity: Vector2::new(1.0, 1.0),
            look_force: 1.2,
            max_look_distance: 700.0,
        }
    }
}

/// Parameters the host writes into the buddy's animator every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimatorParams {
    /// Head yaw blend, `[-1, 1]`
    pub horizontal: f32,
    /// Head pitch blend, `[-1, 1]`
    pub vertical: f32,
    /// Hands up over the eyes
    pub is_hiding: bool,
    /// Peeking through the fingers
    pub is_prying: bool,
}

/// Text fields the buddy follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

/// Everything the form reports to the buddy. `S` identifies selectable widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent<S> {
    /// Caret moved to a world-space position inside `field`.
    CaretMoved { field: Field, position: Vector2<f32> },
    /// `field` gained or lost keyboard focus.
    FieldFocus { field: Field, focused: bool },
    /// The globally selected widget changed.
    FocusChanged(Option<S>),
    /// The password eye toggle changed.
    PasswordVisibility(bool),
}

#[derive(Debug, Clone)]
pub struct BuddyController<S> {
    config: BuddyConfig,
    eyes_center: Vector2<f32>,
    ui_scale: f32,
    password_selectables: HashSet<S>,
    params: AnimatorParams,
    horizontal_tween: Option<FloatTween>,
    vertical_tween: Option<FloatTween>,
}

impl<S: Eq + Hash + Debug> BuddyController<S> {
    /// `password_selectables` are the widgets that make the buddy hide its eyes.
    pub fn new(password_selectables: impl IntoIterator<Item = S>, eyes_center: Vector2<f32>) -> Self {
        Self::with_config(password_selectables, eyes_center, BuddyConfig::default())
    }

    pub fn with_config(
        password_selectables: impl IntoIterator<Item = S>,
        eyes_center: Vector2<f32>,
        config: BuddyConfig,
    ) -> Self {
        Self {
            config,
            eyes_center,
            ui_scale: 1.0,
            password_selectables: password_selectables.into_iter().collect(),
            params: AnimatorParams::default(),
            horizontal_tween: None,
            vertical_tween: None,
        }
    }

    pub fn params(&self) -> AnimatorParams {
        self.params
    }

    pub fn config(&self) -> &BuddyConfig {
        &self.config
    }

    /// World-space point the look direction is measured from.
    pub fn set_eyes_center(&mut self, eyes_center: Vector2<f32>) {
        self.eyes_center = eyes_center;
    }

    /// World scale of the UI root; world distances are divided by it.
    pub fn set_ui_scale(&mut self, ui_scale: f32) {
        self.ui_scale = ui_scale;
    }

    pub fn is_turning(&self) -> bool {
        self.horizontal_tween.is_some() || self.vertical_tween.is_some()
    }

    pub fn handle(&mut self, event: FormEvent<S>) {
        log::trace!("buddy: {event:?}");
        match event {
            FormEvent::CaretMoved { position, .. } => self.look_at(position),
            FormEvent::FieldFocus { field: Field::Email, focused: false } => self.turn_head(0.0, 0.0),
            // Hands follow the global focus instead of the password field itself
            FormEvent::FieldFocus { .. } => {}
            FormEvent::FocusChanged(selected) => {
                self.params.is_hiding = selected
                    .as_ref()
                    .is_some_and(|s| self.password_selectables.contains(s));
            }
            FormEvent::PasswordVisibility(visible) => self.params.is_prying = visible,
        }
    }

    /// Angle (radians) and UI-space distance from the eyes to `target`.
    pub fn look_params(&self, target: Vector2<f32>) -> (f32, f32) {
        let dir = target - self.eyes_center;
        let angle = dir.y.atan2(dir.x);
        let distance = dir.magnitude() / self.ui_scale;
        (angle, distance)
    }

    /// Head blend values for looking at `target`, each clamped to `[-1, 1]`.
    pub fn head_target(&self, target: Vector2<f32>) -> (f32, f32) {
        let (angle, distance) = self.look_params(target);
        let factor = distance / self.config.max_look_distance * self.config.look_force;
        let horizontal = (angle.cos() * factor).clamp(-1.0, 1.0);
        let vertical = (angle.sin() * factor).clamp(-1.0, 1.0);
        (horizontal, vertical)
    }

    fn look_at(&mut self, target: Vector2<f32>) {
        let (horizontal, vertical) = self.head_target(target);
        self.turn_head(horizontal, vertical);
    }

    /// Both axes share one duration so the head moves in a straight line.
    fn turn_head(&mut self, horizontal: f32, vertical: f32) {
        let velocity = self.config.look_velocity;
        let duration = duration_for_speed(self.params.horizontal, horizontal, velocity.x)
            .max(duration_for_speed(self.params.vertical, vertical, velocity.y));

        self.horizontal_tween = Some(FloatTween::new(self.params.horizontal, horizontal, duration));
        self.vertical_tween = Some(FloatTween::new(self.params.vertical, vertical, duration));
    }

    /// Advance the head tweens and return the parameters for this frame.
    pub fn update(&mut self, dt: f32) -> AnimatorParams {
        if let Some(tween) = &mut self.horizontal_tween {
            self.params.horizontal = tween.advance(dt);
            if tween.is_complete() {
                self.horizontal_tween = None;
            }
        }
        if let Some(tween) = &mut self.vertical_tween {
            self.params.vertical = tween.advance(dt);
            if tween.is_complete() {
                self.vertical_tween = None;
            }
        }
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buddy() -> BuddyController<&'static str> {
        BuddyController::new(["password", "eye"], Vector2::new(0.0, 0.0))
    }

    #[test]
    fn test_caret_turns_head() {
        let mut buddy = buddy();
        buddy.handle(FormEvent::CaretMoved {
            field: Field::Email,
            position: Vector2::new(350.0, 0.0),
        });
        assert!(buddy.is_turning());

        let params = buddy.update(0.3);
        assert!(params.horizontal > 0.0 && params.horizontal < 0.6);

        let params = buddy.update(1.0);
        assert!((params.horizontal - 0.6).abs() < 1e-5);
        assert_eq!(params.vertical, 0.0);
        assert!(!buddy.is_turning());
    }

    #[test]
    fn test_far_caret_is_clamped() {
        let buddy = buddy();
        let (h, v) = buddy.head_target(Vector2::new(0.0, -5000.0));
        assert!(h.abs() < 1e-5);
        assert_eq!(v, -1.0);
    }

    #[test]
    fn test_ui_scale_shrinks_distance() {
        let mut buddy = buddy();
        buddy.set_ui_scale(2.0);
        let (_, distance) = buddy.look_params(Vector2::new(30.0, 40.0));
        assert_eq!(distance, 25.0);
    }

    #[test]
    fn test_email_blur_recentres_head() {
        let mut buddy = buddy();
        buddy.handle(FormEvent::CaretMoved {
            field: Field::Email,
            position: Vector2::new(-700.0, 0.0),
        });
        buddy.update(5.0);
        assert_eq!(buddy.params().horizontal, -1.0);

        buddy.handle(FormEvent::FieldFocus { field: Field::Email, focused: false });
        assert_eq!(buddy.update(5.0).horizontal, 0.0);
    }

    #[test]
    fn test_password_blur_keeps_head() {
        let mut buddy = buddy();
        buddy.handle(FormEvent::CaretMoved {
            field: Field::Password,
            position: Vector2::new(0.0, 350.0),
        });
        buddy.update(5.0);
        buddy.handle(FormEvent::FieldFocus { field: Field::Password, focused: false });
        assert!(!buddy.is_turning());
        assert!((buddy.params().vertical - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_hands_follow_focus() {
        let mut buddy = buddy();
        buddy.handle(FormEvent::FocusChanged(Some("eye")));
        assert!(buddy.params().is_hiding);
        buddy.handle(FormEvent::FocusChanged(Some("email")));
        assert!(!buddy.params().is_hiding);
        buddy.handle(FormEvent::FocusChanged(Some("password")));
        buddy.handle(FormEvent::FocusChanged(None));
        assert!(!buddy.params().is_hiding);
    }

    #[test]
    fn test_visibility_toggles_prying() {
        let mut buddy = buddy();
        buddy.handle(FormEvent::PasswordVisibility(true));
        assert!(buddy.params().is_prying);
        buddy.handle(FormEvent::PasswordVisibility(false));
        assert!(!buddy.params().is_prying);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut buddy = buddy();
        buddy.handle(FormEvent::CaretMoved {
            field: Field::Email,
            position: Vector2::new(700.0, 0.0),
        });
        let midway = buddy.update(0.2).horizontal;
        buddy.handle(FormEvent::CaretMoved {
            field: Field::Email,
            position: Vector2::new(-700.0, 0.0),
        });
        assert_eq!(buddy.update(0.0).horizontal, midway);
    }

    #[test]
    fn test_clone_carries_running_turn() {
        let mut buddy = buddy();
        buddy.handle(FormEvent::FocusChanged(Some("password")));
        buddy.handle(FormEvent::CaretMoved {
            field: Field::Email,
            position: Vector2::new(350.0, 0.0),
        });
        buddy.update(0.1);

        let mut copy = buddy.clone();
        assert_eq!(copy.params(), buddy.params());
        assert!(copy.is_turning());
        assert_eq!(copy.update(0.2), buddy.update(0.2));
        assert!(format!("{copy:?}").contains("BuddyController"));
    }
}
