use tracing::{debug, info};

use crate::abacus::Abacus;
use crate::error::Result;
use crate::history::History;
use crate::interaction::{self, Action, BeadRef, Gesture, Modifiers};
use crate::readout::AbacusView;
use crate::rod::BeadKind;
use crate::settings::AbacusSettings;
use crate::snapshot::Snapshot;

/// Pairs the board with its history. Every successful action commits one
/// snapshot; undo and redo restore the snapshot under the moved cursor.
#[derive(Debug, Clone)]
pub struct AbacusCalculator {
    abacus: Abacus,
    history: History,
    settings: AbacusSettings,
}

impl AbacusCalculator {
    pub fn new(settings: AbacusSettings) -> Self {
        let abacus = Abacus::new(settings.heaven_cap);
        let mut history = History::new();
        if settings.record_initial_state {
            history.commit(abacus.snapshot());
        }
        info!(heaven_cap = ?settings.heaven_cap, "abacus calculator ready");
        Self { abacus, history, settings }
    }

    pub fn settings(&self) -> &AbacusSettings {
        &self.settings
    }

    pub fn abacus(&self) -> &Abacus {
        &self.abacus
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Performs `action`, records the result and returns the new total.
    ///
    /// A rejected action changes nothing and records nothing.
    pub fn apply(&mut self, action: Action) -> Result<u64> {
        match action {
            Action::ToggleBead { rod, kind, index } => self.abacus.toggle_bead(rod, kind, index)?,
            Action::ResetRod { rod } => self.abacus.reset_rod(rod)?,
            Action::ResetAll => self.abacus.reset_all(),
        }
        self.history.commit(self.abacus.snapshot());

        let total = self.abacus.total_value();
        debug!(?action, total, "action applied");
        Ok(total)
    }

    pub fn on_user_gesture(
        &mut self,
        rod: usize,
        kind: BeadKind,
        index: usize,
        modifiers: Modifiers,
    ) -> Result<u64> {
        self.apply(interaction::resolve(BeadRef::new(rod, kind, index), modifiers))
    }

    /// Applies whatever `gesture` resolves to; `Ok(None)` if it resolves to nothing.
    pub fn handle(&mut self, gesture: Gesture) -> Result<Option<u64>> {
        interaction::resolve_gesture(gesture)
            .map(|action| self.apply(action))
            .transpose()
    }

    pub fn toggle_bead(&mut self, rod: usize, kind: BeadKind, index: usize) -> Result<u64> {
        self.apply(Action::ToggleBead { rod, kind, index })
    }

    pub fn reset_rod(&mut self, rod: usize) -> Result<u64> {
        self.apply(Action::ResetRod { rod })
    }

    pub fn reset_all(&mut self) -> Result<u64> {
        self.apply(Action::ResetAll)
    }

    /// Returns `false` when there is nothing older to go back to.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.abacus.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.abacus.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn total_value(&self) -> u64 {
        self.abacus.total_value()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.abacus.snapshot()
    }

    pub fn view(&self) -> AbacusView {
        AbacusView::new(
            self.abacus.total_value(),
            self.settings.group_separator,
            &self.abacus.column_values(),
            self.abacus.snapshot().rods(),
            self.can_undo(),
            self.can_redo(),
        )
    }

    pub fn view_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.view())
    }
}

impl Default for AbacusCalculator {
    fn default() -> Self {
        Self::new(AbacusSettings::default())
    }
}
