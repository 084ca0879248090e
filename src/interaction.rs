//! Maps raw presentation-layer gestures onto abacus actions.
//!
//! Nothing here touches abacus state; the resolved [`Action`] is handed to
//! [`AbacusCalculator::apply`](crate::calculator::AbacusCalculator::apply).

use serde::{Deserialize, Serialize};

use crate::error::{AbacusError, Result};
use crate::rod::BeadKind;

/// Identifies one bead by rod, kind and position within that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeadRef {
    pub rod: usize,
    pub kind: BeadKind,
    pub index: usize,
}

impl BeadRef {
    pub fn new(rod: usize, kind: BeadKind, index: usize) -> Self {
        Self { rod, kind, index }
    }

    /// Builds a reference from the kind name a page script sends.
    pub fn from_kind_name(rod: usize, kind: &str, index: usize) -> Result<Self> {
        let kind = BeadKind::parse(kind).ok_or_else(|| AbacusError::UnknownBeadKind(kind.into()))?;
        Ok(Self::new(rod, kind, index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false, meta: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false, meta: false };

    /// Shift turns a bead press into a reset of the whole rod.
    pub fn clears_rod(&self) -> bool {
        self.shift
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Tab,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Press { bead: BeadRef, modifiers: Modifiers },
    Touch { bead: BeadRef },
    Key { bead: BeadRef, key: Key },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    ToggleBead { rod: usize, kind: BeadKind, index: usize },
    ResetRod { rod: usize },
    ResetAll,
}

impl Action {
    /// Parses a tagged action such as `{"action": "reset_rod", "rod": 3}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(AbacusError::InvalidAction)
    }
}

pub fn resolve(bead: BeadRef, modifiers: Modifiers) -> Action {
    if modifiers.clears_rod() {
        Action::ResetRod { rod: bead.rod }
    } else {
        Action::ToggleBead { rod: bead.rod, kind: bead.kind, index: bead.index }
    }
}

/// Resolves any gesture; keys other than the vertical arrows do nothing.
pub fn resolve_gesture(gesture: Gesture) -> Option<Action> {
    match gesture {
        Gesture::Press { bead, modifiers } => Some(resolve(bead, modifiers)),
        Gesture::Touch { bead } => Some(resolve(bead, Modifiers::NONE)),
        Gesture::Key { bead, key: Key::ArrowUp | Key::ArrowDown } => {
            Some(resolve(bead, Modifiers::NONE))
        }
        Gesture::Key { .. } => None,
    }
}
