//! Headless soroban: thirteen rods of two heaven and five earth beads, the
//! bead movement rules, the board's numeric value, and a linear undo/redo
//! history of every change.
//!
//! Drawing and input capture live outside this crate. A presentation layer
//! reports bead presses through [`AbacusCalculator::on_user_gesture`] (or the
//! `web` bindings when built for the browser) and redraws from
//! [`AbacusCalculator::view`].

pub mod abacus;
pub mod calculator;
pub mod error;
pub mod history;
pub mod interaction;
pub mod readout;
pub mod rod;
pub mod settings;
pub mod snapshot;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use abacus::Abacus;
pub use calculator::AbacusCalculator;
pub use error::{AbacusError, Result};
pub use history::History;
pub use interaction::{Action, BeadRef, Gesture, Key, Modifiers};
pub use readout::{AbacusView, format_grouped};
pub use rod::{AbacusRod, Bead, BeadKind, HeavenCap, ROD_COUNT};
pub use settings::AbacusSettings;
pub use snapshot::{RodSnapshot, Snapshot};
