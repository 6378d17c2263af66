//! # Buddy Character
//!
//! The buddy watches the login form. It turns its head towards the caret of
//! whichever field is being typed in, covers its eyes while a
//! password-related widget has focus, and peeks through its fingers when the
//! password is made visible.
//!
//! ## Usage
//!
//! ```
//! use buddy_ui::buddy::{BuddyController, Field, FormEvent};
//! use cgmath::Vector2;
//!
//! let mut buddy = BuddyController::new(["password", "eye"], Vector2::new(0.0, 0.0));
//! buddy.handle(FormEvent::FocusChanged(Some("password")));
//! buddy.handle(FormEvent::CaretMoved { field: Field::Password, position: Vector2::new(350.0, 0.0) });
//! let params = buddy.update(1.0);
//! assert!(params.is_hiding);
//! assert!(params.horizontal > 0.0);
//! ```

pub mod controller;

pub use controller::{AnimatorParams, BuddyConfig, BuddyController, Field, FormEvent};
