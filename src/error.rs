use thiserror::Error;

use crate::rod::{BeadKind, ROD_COUNT};

#[derive(Debug, Error)]
pub enum AbacusError {
    #[error("rod index {rod} out of range (abacus has {} rods)", ROD_COUNT)]
    RodOutOfRange { rod: usize },

    #[error("{kind} bead index {index} out of range (rod has {} {kind} beads)", .kind.count())]
    BeadOutOfRange { kind: BeadKind, index: usize },

    #[error("unknown bead kind {0:?}")]
    UnknownBeadKind(String),

    #[error("invalid action: {0}")]
    InvalidAction(serde_json::Error),

    #[error("invalid abacus settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AbacusError>;
