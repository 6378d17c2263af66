//! # Login Form Glue
//!
//! Host-driven state machines for the widgets around the buddy: focus and
//! caret tracking, tab navigation, the floating placeholder, the password
//! eye toggle and the panel show/restart flow.
//!
//! None of these talk to a UI toolkit. The host polls or notifies them and
//! applies what they return.

pub mod focus;
pub mod input_tracker;
pub mod password;
pub mod placeholder;
pub mod presenter;
pub mod scale_fitter;
pub mod tab_navigator;

pub use focus::FocusTracker;
pub use input_tracker::{InputEvent, InputTracker};
pub use password::{is_password_empty, InputKind, PasswordVisibility};
pub use placeholder::{PlaceholderConfig, PlaceholderController};
pub use presenter::{FormCommand, FormPresenter, FormTimings};
pub use scale_fitter::fit_scale;
pub use tab_navigator::TabNavigator;
