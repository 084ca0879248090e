//! Browser entry point. The page's script owns the DOM and forwards bead
//! presses here, then redraws from [`WebAbacus::view`].

use wasm_bindgen::prelude::*;

use crate::calculator::AbacusCalculator;
use crate::interaction::{self, Action, BeadRef, Gesture, Key, Modifiers};
use crate::settings::AbacusSettings;

#[wasm_bindgen]
pub struct WebAbacus {
    calculator: AbacusCalculator,
}

#[wasm_bindgen]
impl WebAbacus {
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<WebAbacus, JsError> {
        let settings = match settings_json {
            Some(json) => AbacusSettings::from_json(&json)?,
            None => AbacusSettings::default(),
        };
        Ok(Self { calculator: AbacusCalculator::new(settings) })
    }

    /// Mouse press on a bead. Totals stay below 2^53, so `f64` is exact.
    pub fn gesture(
        &mut self,
        rod: usize,
        kind: &str,
        index: usize,
        shift: bool,
    ) -> Result<f64, JsError> {
        let bead = BeadRef::from_kind_name(rod, kind, index)?;
        let modifiers = Modifiers { shift, ..Modifiers::NONE };
        Ok(self.calculator.apply(interaction::resolve(bead, modifiers))? as f64)
    }

    pub fn touch(&mut self, rod: usize, kind: &str, index: usize) -> Result<f64, JsError> {
        let bead = BeadRef::from_kind_name(rod, kind, index)?;
        let total = self.calculator.handle(Gesture::Touch { bead })?;
        Ok(total.unwrap_or_else(|| self.calculator.total_value()) as f64)
    }

    /// Key press on a focused bead; `undefined` when the key does nothing.
    pub fn key(
        &mut self,
        rod: usize,
        kind: &str,
        index: usize,
        key: &str,
    ) -> Result<Option<f64>, JsError> {
        let bead = BeadRef::from_kind_name(rod, kind, index)?;
        let key = Key::from_name(key);
        Ok(self.calculator.handle(Gesture::Key { bead, key })?.map(|total| total as f64))
    }

    #[wasm_bindgen(js_name = applyAction)]
    pub fn apply_action(&mut self, action_json: &str) -> Result<f64, JsError> {
        let action = Action::from_json(action_json)?;
        Ok(self.calculator.apply(action)? as f64)
    }

    pub fn undo(&mut self) -> bool {
        self.calculator.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.calculator.redo()
    }

    #[wasm_bindgen(js_name = resetAll)]
    pub fn reset_all(&mut self) -> Result<f64, JsError> {
        Ok(self.calculator.reset_all()? as f64)
    }

    #[wasm_bindgen(js_name = resetRod)]
    pub fn reset_rod(&mut self, rod: usize) -> Result<f64, JsError> {
        Ok(self.calculator.reset_rod(rod)? as f64)
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.calculator.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.calculator.can_redo()
    }

    #[wasm_bindgen(js_name = totalValue)]
    pub fn total_value(&self) -> f64 {
        self.calculator.total_value() as f64
    }

    #[wasm_bindgen(js_name = formattedTotal)]
    pub fn formatted_total(&self) -> String {
        self.calculator.view().formatted_total
    }

    /// Bead flags of every rod, ones place first, as JSON.
    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.calculator.snapshot())?)
    }

    /// Full render view as JSON, most significant rod first.
    pub fn view(&self) -> Result<String, JsError> {
        Ok(self.calculator.view_json()?)
    }
}
