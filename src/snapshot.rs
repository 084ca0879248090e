//! Immutable captures of bead positions.
//!
//! A [`Snapshot`] only holds copies of the activation flags, so a stored
//! snapshot can never observe later changes to the abacus it came from.

use serde::Serialize;

use crate::rod::{EARTH_BEAD_COUNT, HEAVEN_BEAD_COUNT, ROD_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct RodSnapshot {
    heaven: [bool; HEAVEN_BEAD_COUNT],
    earth: [bool; EARTH_BEAD_COUNT],
}

impl RodSnapshot {
    pub(crate) fn new(heaven: [bool; HEAVEN_BEAD_COUNT], earth: [bool; EARTH_BEAD_COUNT]) -> Self {
        Self { heaven, earth }
    }

    pub fn heaven(&self) -> [bool; HEAVEN_BEAD_COUNT] {
        self.heaven
    }

    pub fn earth(&self) -> [bool; EARTH_BEAD_COUNT] {
        self.earth
    }
}

/// Bead state of every rod, ones place first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    rods: [RodSnapshot; ROD_COUNT],
}

impl Snapshot {
    pub(crate) fn new(rods: [RodSnapshot; ROD_COUNT]) -> Self {
        Self { rods }
    }

    pub fn rods(&self) -> &[RodSnapshot; ROD_COUNT] {
        &self.rods
    }

    pub fn rod(&self, index: usize) -> Option<&RodSnapshot> {
        self.rods.get(index)
    }

    /// True when no bead on any rod is active.
    pub fn is_clear(&self) -> bool {
        self.rods
            .iter()
            .all(|rod| !rod.heaven.contains(&true) && !rod.earth.contains(&true))
    }
}
