//! Shift symbols.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value a slot can hold. An empty slot is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftSymbol {
    /// Day shift.
    #[serde(rename = "D")]
    Day,
    /// Night shift.
    #[serde(rename = "N")]
    Night,
    /// Holiday / leave.
    #[serde(rename = "U")]
    Holiday,
}

/// A single (worker, day) cell value.
pub type Slot = Option<ShiftSymbol>;

/// The two shift kinds the engine staffs each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftKind {
    #[serde(rename = "D")]
    Day,
    #[serde(rename = "N")]
    Night,
}

impl ShiftKind {
    /// Both kinds, in the order they are resolved each day.
    pub const ALL: [ShiftKind; 2] = [ShiftKind::Day, ShiftKind::Night];

    /// The slot symbol for this kind.
    #[inline]
    pub fn symbol(self) -> ShiftSymbol {
        match self {
            Self::Day => ShiftSymbol::Day,
            Self::Night => ShiftSymbol::Night,
        }
    }

    /// Single-letter label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "D",
            Self::Night => "N",
        }
    }
}

impl ShiftSymbol {
    /// Parses a slot value. Anything other than `D`, `N`, `U` is empty.
    pub fn parse(value: &str) -> Slot {
        match value {
            "D" => Some(Self::Day),
            "N" => Some(Self::Night),
            "U" => Some(Self::Holiday),
            _ => None,
        }
    }

    /// The working-shift kind, if this is D or N.
    #[inline]
    pub fn kind(self) -> Option<ShiftKind> {
        match self {
            Self::Day => Some(ShiftKind::Day),
            Self::Night => Some(ShiftKind::Night),
            Self::Holiday => None,
        }
    }

    /// Single-letter label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "D",
            Self::Night => "N",
            Self::Holiday => "U",
        }
    }
}

impl fmt::Display for ShiftSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts consecutive `symbol` slots immediately before `index`.
pub fn run_before(slots: &[Slot], index: usize, symbol: ShiftSymbol) -> usize {
    slots[..index.min(slots.len())]
        .iter()
        .rev()
        .take_while(|slot| **slot == Some(symbol))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ShiftSymbol::parse("D"), Some(ShiftSymbol::Day));
        assert_eq!(ShiftSymbol::parse("U"), Some(ShiftSymbol::Holiday));
        assert_eq!(ShiftSymbol::parse("X"), None);
        assert_eq!(ShiftSymbol::parse(""), None);
    }

    #[test]
    fn test_run_before() {
        let d = Some(ShiftSymbol::Day);
        let n = Some(ShiftSymbol::Night);
        let slots = vec![d, d, n, d, d, d, None];
        assert_eq!(run_before(&slots, 0, ShiftSymbol::Day), 0);
        assert_eq!(run_before(&slots, 2, ShiftSymbol::Day), 2);
        assert_eq!(run_before(&slots, 3, ShiftSymbol::Night), 1);
        assert_eq!(run_before(&slots, 6, ShiftSymbol::Day), 3);
        assert_eq!(run_before(&slots, 7, ShiftSymbol::Day), 0);
    }

    #[test]
    fn test_symbol_json() {
        let slots: Vec<Slot> = serde_json::from_str(r#"["D", null, "N", "U"]"#).unwrap();
        assert_eq!(
            slots,
            vec![
                Some(ShiftSymbol::Day),
                None,
                Some(ShiftSymbol::Night),
                Some(ShiftSymbol::Holiday)
            ]
        );
    }
}
