use serde::Serialize;

use crate::rod::ROD_COUNT;
use crate::snapshot::RodSnapshot;

/// Everything the presentation layer needs to draw one frame.
///
/// Rods are listed most significant first, left to right as they sit on
/// the frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbacusView {
    pub total: u64,
    pub formatted_total: String,
    pub columns: Vec<u64>,
    pub rods: Vec<RodSnapshot>,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl AbacusView {
    pub(crate) fn new(
        total: u64,
        separator: char,
        columns: &[u64; ROD_COUNT],
        rods: &[RodSnapshot; ROD_COUNT],
        can_undo: bool,
        can_redo: bool,
    ) -> Self {
        Self {
            total,
            formatted_total: format_grouped(total, separator),
            columns: columns.iter().rev().copied().collect(),
            rods: rods.iter().rev().copied().collect(),
            can_undo,
            can_redo,
        }
    }
}

/// Writes `value` with `separator` between each group of three digits.
pub fn format_grouped(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}
