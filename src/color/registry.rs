use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{DEFAULT_PALETTE, Palette, STRESS_PALETTE, THERMAL_PALETTE};

/// Named palettes shared by dashboard panels.
///
/// Registration order is preserved, both when listing and in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteRegistry {
    palettes: IndexMap<String, Palette>,
}

impl PaletteRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with `default`, `thermal` and `stress`.
    pub fn with_builtins() -> ChartResult<Self> {
        let mut registry = Self::new();
        registry.insert("default", Palette::from_hex(DEFAULT_PALETTE)?);
        registry.insert("thermal", Palette::from_hex(THERMAL_PALETTE)?);
        registry.insert("stress", Palette::from_hex(STRESS_PALETTE)?);
        Ok(registry)
    }

    /// Registers `palette`, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, palette: Palette) -> Option<Palette> {
        self.palettes.insert(name.into(), palette)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(name)
    }

    pub fn resolve(&self, name: &str) -> ChartResult<&Palette> {
        self.get(name)
            .ok_or_else(|| ChartError::InvalidInput(format!("unknown palette `{name}`")))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
