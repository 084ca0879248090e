use std::array;

use tracing::{debug, info, warn};

use crate::error::{AbacusError, Result};
use crate::rod::{AbacusRod, BeadKind, HeavenCap, ROD_COUNT};
use crate::snapshot::Snapshot;

/// The full board: thirteen rods, ones place at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abacus {
    rods: [AbacusRod; ROD_COUNT],
    heaven_cap: HeavenCap,
}

impl Abacus {
    pub fn new(heaven_cap: HeavenCap) -> Self {
        Self {
            rods: array::from_fn(|i| AbacusRod::at(i as u32)),
            heaven_cap,
        }
    }

    pub fn heaven_cap(&self) -> HeavenCap {
        self.heaven_cap
    }

    pub fn rods(&self) -> &[AbacusRod; ROD_COUNT] {
        &self.rods
    }

    pub fn rod(&self, rod_index: usize) -> Result<&AbacusRod> {
        self.rods
            .get(rod_index)
            .ok_or(AbacusError::RodOutOfRange { rod: rod_index })
    }

    fn rod_mut(&mut self, rod_index: usize) -> Result<&mut AbacusRod> {
        match self.rods.get_mut(rod_index) {
            Some(rod) => Ok(rod),
            None => {
                warn!("rod index {} out of bounds", rod_index);
                Err(AbacusError::RodOutOfRange { rod: rod_index })
            }
        }
    }

    pub fn toggle_bead(
        &mut self,
        rod_index: usize,
        kind: BeadKind,
        bead_index: usize,
    ) -> Result<()> {
        let cap = self.heaven_cap;
        let rod = self.rod_mut(rod_index)?;
        if let Err(err) = rod.toggle(kind, bead_index, cap) {
            warn!(rod = rod_index, "{err}");
            return Err(err);
        }
        Ok(())
    }

    pub fn reset_rod(&mut self, rod_index: usize) -> Result<()> {
        self.rod_mut(rod_index)?.reset();
        debug!(rod = rod_index, "rod cleared");
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for rod in &mut self.rods {
            rod.reset();
        }
        info!("abacus cleared");
    }

    pub fn column_value(&self, rod_index: usize) -> Result<u64> {
        Ok(self.rod(rod_index)?.digit_value())
    }

    /// Digit shown on every rod, ones place first.
    pub fn column_values(&self) -> [u64; ROD_COUNT] {
        array::from_fn(|i| self.rods[i].digit_value())
    }

    pub fn total_value(&self) -> u64 {
        self.rods
            .iter()
            .map(|rod| rod.digit_value() * rod.place_value())
            .sum()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(array::from_fn(|i| self.rods[i].snapshot()))
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        for (rod, saved) in self.rods.iter_mut().zip(snapshot.rods()) {
            rod.restore(saved);
        }
    }
}

impl Default for Abacus {
    fn default() -> Self {
        Self::new(HeavenCap::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_abacus_is_zero() {
        let abacus = Abacus::default();
        assert_eq!(abacus.total_value(), 0);
        assert!(abacus.snapshot().is_clear());
    }

    #[test]
    fn total_weights_each_rod_by_place() {
        let mut abacus = Abacus::default();
        abacus.toggle_bead(0, BeadKind::Earth, 2).unwrap();
        abacus.toggle_bead(2, BeadKind::Heaven, 0).unwrap();
        abacus.toggle_bead(12, BeadKind::Earth, 0).unwrap();
        assert_eq!(abacus.total_value(), 1_000_000_000_503);
        assert_eq!(abacus.column_value(2).unwrap(), 5);
        assert_eq!(abacus.column_values()[12], 1);
    }

    #[test]
    fn largest_board_fits_in_u64() {
        let mut abacus = Abacus::default();
        for rod in 0..ROD_COUNT {
            abacus.toggle_bead(rod, BeadKind::Heaven, 0).unwrap();
            abacus.toggle_bead(rod, BeadKind::Heaven, 1).unwrap();
            abacus.toggle_bead(rod, BeadKind::Earth, 4).unwrap();
        }
        assert_eq!(abacus.total_value(), 15 * 1_111_111_111_111);
    }

    #[test]
    fn single_cap_applies_through_the_board() {
        let mut abacus = Abacus::new(HeavenCap::Single);
        assert_eq!(abacus.heaven_cap(), HeavenCap::Single);
        abacus.toggle_bead(0, BeadKind::Heaven, 0).unwrap();
        abacus.toggle_bead(0, BeadKind::Heaven, 1).unwrap();
        assert_eq!(abacus.total_value(), 5);
    }

    #[test]
    fn reset_rod_leaves_other_rods() {
        let mut abacus = Abacus::default();
        abacus.toggle_bead(0, BeadKind::Earth, 1).unwrap();
        abacus.toggle_bead(1, BeadKind::Earth, 1).unwrap();
        abacus.reset_rod(1).unwrap();
        assert_eq!(abacus.total_value(), 2);
    }

    #[test]
    fn reset_all_zeroes_total() {
        let mut abacus = Abacus::default();
        abacus.toggle_bead(5, BeadKind::Heaven, 1).unwrap();
        abacus.toggle_bead(7, BeadKind::Earth, 3).unwrap();
        abacus.reset_all();
        assert_eq!(abacus.total_value(), 0);
    }

    #[test]
    fn out_of_range_rod_is_rejected() {
        let mut abacus = Abacus::default();
        assert!(matches!(
            abacus.toggle_bead(ROD_COUNT, BeadKind::Earth, 0),
            Err(AbacusError::RodOutOfRange { rod: 13 })
        ));
        assert!(matches!(abacus.reset_rod(99), Err(AbacusError::RodOutOfRange { rod: 99 })));
        assert!(abacus.column_value(13).is_err());
        assert_eq!(abacus, Abacus::default());
    }

    #[test]
    fn restore_round_trips_total() {
        let mut abacus = Abacus::default();
        abacus.toggle_bead(3, BeadKind::Earth, 4).unwrap();
        abacus.toggle_bead(0, BeadKind::Heaven, 0).unwrap();
        let before = abacus.total_value();
        let snapshot = abacus.snapshot();

        abacus.reset_all();
        abacus.restore(&snapshot);
        assert_eq!(abacus.total_value(), before);
        assert_eq!(abacus.snapshot(), snapshot);
    }

    #[test]
    fn stored_snapshot_is_not_affected_by_later_moves() {
        let mut abacus = Abacus::default();
        abacus.toggle_bead(0, BeadKind::Earth, 0).unwrap();
        let snapshot = abacus.snapshot();
        abacus.toggle_bead(0, BeadKind::Earth, 4).unwrap();
        assert_eq!(snapshot.rod(0).unwrap().earth(), [true, false, false, false, false]);
    }
}
