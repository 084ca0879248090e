use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AbacusError, Result};
use crate::snapshot::RodSnapshot;

pub const ROD_COUNT: usize = 13;
pub const HEAVEN_BEAD_COUNT: usize = 2;
pub const EARTH_BEAD_COUNT: usize = 5;
pub const HEAVEN_BEAD_VALUE: u64 = 5;
pub const EARTH_BEAD_VALUE: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeadKind {
    Heaven,
    Earth,
}

impl BeadKind {
    /// Number of beads of this kind on every rod.
    pub const fn count(self) -> usize {
        match self {
            BeadKind::Heaven => HEAVEN_BEAD_COUNT,
            BeadKind::Earth => EARTH_BEAD_COUNT,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "heaven" => Some(BeadKind::Heaven),
            "earth" => Some(BeadKind::Earth),
            _ => None,
        }
    }
}

impl fmt::Display for BeadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BeadKind::Heaven => "heaven",
            BeadKind::Earth => "earth",
        })
    }
}

/// How many heaven beads may be active on one rod at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeavenCap {
    /// Each heaven bead toggles on its own; both active adds 10.
    #[default]
    Uncapped,
    /// Activating a heaven bead lowers the other one, so a rod tops out at 10.
    Single,
}

/// Read-only view of one bead, as the presentation layer draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bead {
    pub kind: BeadKind,
    pub index: usize,
    pub active: bool,
}

/// One decimal place of the abacus.
///
/// Earth beads are stored in physical order starting at the beam, and the
/// active ones always form a prefix of that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbacusRod {
    place: u32,
    heaven: [bool; HEAVEN_BEAD_COUNT],
    earth: [bool; EARTH_BEAD_COUNT],
}

impl AbacusRod {
    /// Builds an empty rod for the given place; places past the top rod are rejected.
    pub fn new(place: u32) -> Result<Self> {
        if place as usize >= ROD_COUNT {
            return Err(AbacusError::RodOutOfRange { rod: place as usize });
        }
        Ok(Self::at(place))
    }

    /// Callers guarantee `place < ROD_COUNT`.
    pub(crate) fn at(place: u32) -> Self {
        Self {
            place,
            heaven: [false; HEAVEN_BEAD_COUNT],
            earth: [false; EARTH_BEAD_COUNT],
        }
    }

    /// Position of the rod, counting from the ones place.
    pub fn place(&self) -> u32 {
        self.place
    }

    pub fn place_value(&self) -> u64 {
        10u64.pow(self.place)
    }

    pub fn toggle_heaven(&mut self, index: usize) -> Result<()> {
        let bead = self
            .heaven
            .get_mut(index)
            .ok_or(AbacusError::BeadOutOfRange { kind: BeadKind::Heaven, index })?;
        *bead = !*bead;
        debug!(place = self.place, index, active = *bead, "heaven bead toggled");
        Ok(())
    }

    /// Toggles a heaven bead under the given cap.
    pub fn toggle_heaven_capped(&mut self, index: usize, cap: HeavenCap) -> Result<()> {
        if index >= HEAVEN_BEAD_COUNT {
            return Err(AbacusError::BeadOutOfRange { kind: BeadKind::Heaven, index });
        }
        if cap == HeavenCap::Single && !self.heaven[index] {
            for (i, bead) in self.heaven.iter_mut().enumerate() {
                if i != index {
                    *bead = false;
                }
            }
        }
        self.toggle_heaven(index)
    }

    /// Activating an earth bead raises every bead between it and the beam;
    /// deactivating one drops it together with every bead behind it.
    pub fn toggle_earth(&mut self, index: usize) -> Result<()> {
        let activate = match self.earth.get(index) {
            Some(active) => !*active,
            None => return Err(AbacusError::BeadOutOfRange { kind: BeadKind::Earth, index }),
        };

        if activate {
            self.earth[..=index].fill(true);
        } else {
            self.earth[index..].fill(false);
        }
        debug!(place = self.place, index, activate, "earth beads moved");
        Ok(())
    }

    pub fn toggle(&mut self, kind: BeadKind, index: usize, cap: HeavenCap) -> Result<()> {
        match kind {
            BeadKind::Heaven => self.toggle_heaven_capped(index, cap),
            BeadKind::Earth => self.toggle_earth(index),
        }
    }

    pub fn reset(&mut self) {
        self.heaven = [false; HEAVEN_BEAD_COUNT];
        self.earth = [false; EARTH_BEAD_COUNT];
    }

    pub fn is_active(&self, kind: BeadKind, index: usize) -> Result<bool> {
        let beads: &[bool] = match kind {
            BeadKind::Heaven => &self.heaven,
            BeadKind::Earth => &self.earth,
        };
        beads
            .get(index)
            .copied()
            .ok_or(AbacusError::BeadOutOfRange { kind, index })
    }

    pub fn active_heaven(&self) -> usize {
        self.heaven.iter().filter(|active| **active).count()
    }

    pub fn active_earth(&self) -> usize {
        self.earth.iter().filter(|active| **active).count()
    }

    /// Earth count plus five per heaven bead. Not clamped to 9.
    pub fn digit_value(&self) -> u64 {
        self.active_earth() as u64 * EARTH_BEAD_VALUE
            + self.active_heaven() as u64 * HEAVEN_BEAD_VALUE
    }

    /// Heaven beads first, then earth beads, each in index order.
    pub fn beads(&self) -> impl Iterator<Item = Bead> + '_ {
        let heaven = self.heaven.iter().enumerate().map(|(index, &active)| Bead {
            kind: BeadKind::Heaven,
            index,
            active,
        });
        let earth = self.earth.iter().enumerate().map(|(index, &active)| Bead {
            kind: BeadKind::Earth,
            index,
            active,
        });
        heaven.chain(earth)
    }

    pub fn snapshot(&self) -> RodSnapshot {
        RodSnapshot::new(self.heaven, self.earth)
    }

    pub fn restore(&mut self, snapshot: &RodSnapshot) {
        self.heaven = snapshot.heaven();
        self.earth = snapshot.earth();
    }
}
