//! Frame-driven tweens and timers.
//!
//! The host calls `advance`/`tick` once per frame with the elapsed time in
//! seconds. Nothing here owns a clock.

/// Easing curve applied to a tween's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Decelerating quadratic. The default, as with most UI tween libraries.
    #[default]
    OutQuad,
}

impl Ease {
    /// Map progress in `[0, 1]` onto the eased curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::OutQuad => t * (2.0 - t),
        }
    }
}

/// Time needed to travel from `from` to `to` at `speed` units per second.
///
/// A non-positive speed means "jump": zero duration.
pub fn duration_for_speed(from: f32, to: f32, speed: f32) -> f32 {
    if speed > 0.0 {
        (to - from).abs() / speed
    } else {
        0.0
    }
}

/// A single float animated from one value to another over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatTween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl FloatTween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn value(&self) -> f32 {
        if self.is_complete() {
            return self.to;
        }
        let t = self.ease.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    /// Step the tween forward and return the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    /// Jump straight to the end value.
    pub fn complete(&mut self) -> f32 {
        self.elapsed = self.duration;
        self.to
    }
}

/// Fires once after a delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayedCall {
    remaining: f32,
    fired: bool,
}

impl DelayedCall {
    pub fn new(delay: f32) -> Self {
        Self {
            remaining: delay.max(0.0),
            fired: false,
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns `true` on the one tick where the delay runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.fired {
            return false;
        }
        self.remaining -= dt.max(0.0);
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.fired = true;
            return true;
        }
        false
    }
}
