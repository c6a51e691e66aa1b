//! Stroke color tables.
//!
//! A stroke stores a small color index; which name it maps to depends on the
//! color mode chosen for the decode call.

use serde::{Deserialize, Serialize};

/// Which color table a decode call resolves stroke colors against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// black / grey / white
    #[default]
    Standard,
    /// blue / red / white / yellow, for colored annotation export
    Annotated,
}

impl ColorMode {
    pub const fn table(self) -> ColorTable {
        match self {
            ColorMode::Standard => STANDARD_COLORS,
            ColorMode::Annotated => ANNOTATED_COLORS,
        }
    }
}

/// Mapping from color index to symbolic color name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTable {
    names: &'static [&'static str],
}

/// Standard table, used for plain page exports.
pub const STANDARD_COLORS: ColorTable = ColorTable {
    names: &["black", "grey", "white"],
};

/// Annotated table.
pub const ANNOTATED_COLORS: ColorTable = ColorTable {
    names: &["blue", "red", "white", "yellow"],
};

/// Index the eraser always paints with.
pub const ERASER_COLOR_INDEX: u32 = 2;

/// Index the highlighter paints with in annotated mode.
pub const HIGHLIGHT_COLOR_INDEX: u32 = 3;

impl ColorTable {
    /// Look up a color index.
    pub fn get(&self, index: u32) -> Option<&'static str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.names.get(i))
            .copied()
    }

    /// Look up a color index, falling back to the first entry for indices the
    /// table does not define.
    pub fn resolve(&self, index: u32) -> &'static str {
        match self.get(index) {
            Some(name) => name,
            None => {
                tracing::warn!(
                    "color index {} not in table, using {}",
                    index,
                    self.names[0]
                );
                self.names[0]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table() {
        let table = ColorMode::Standard.table();
        assert_eq!(table.get(0), Some("black"));
        assert_eq!(table.get(1), Some("grey"));
        assert_eq!(table.get(2), Some("white"));
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn annotated_table() {
        let table = ColorMode::Annotated.table();
        assert_eq!(table.get(0), Some("blue"));
        assert_eq!(table.get(1), Some("red"));
        assert_eq!(table.get(HIGHLIGHT_COLOR_INDEX), Some("yellow"));
        assert_eq!(table.get(ERASER_COLOR_INDEX), Some("white"));
    }

    #[test]
    fn resolve_falls_back_to_first_entry() {
        assert_eq!(STANDARD_COLORS.resolve(3), "black");
        assert_eq!(ANNOTATED_COLORS.resolve(u32::MAX), "blue");
    }
}
