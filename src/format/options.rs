use serde::{Deserialize, Serialize};

/// Where the `unit` string is placed relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum UnitPlacement {
    /// `350 bar`, `12%`.
    #[default]
    Suffix,
    /// `$1.2M`; attached without a separator.
    Prefix,
}

/// Display options accepted by [`format_value`](super::format_value).
///
/// Every field is optional; JSON keys follow the dashboard's camelCase
/// convention (`isScientific`, `perUnit`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    pub unit: Option<String>,
    /// Decimal digits. When unset, defaults apply and trailing zeros are trimmed.
    pub precision: Option<u8>,
    pub compact: bool,
    pub is_scientific: bool,
    /// Denominator such as `/kg`; a missing leading `/` is added.
    pub per_unit: Option<String>,
    pub unit_placement: UnitPlacement,
}

impl FormatOptions {
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_per_unit(mut self, per_unit: impl Into<String>) -> Self {
        self.per_unit = Some(per_unit.into());
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    #[must_use]
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    #[must_use]
    pub fn with_scientific(mut self, is_scientific: bool) -> Self {
        self.is_scientific = is_scientific;
        self
    }

    #[must_use]
    pub fn with_unit_placement(mut self, placement: UnitPlacement) -> Self {
        self.unit_placement = placement;
        self
    }

    pub(super) fn resolved_unit(&self) -> Option<&str> {
        non_blank(self.unit.as_deref())
    }

    pub(super) fn resolved_per_unit(&self) -> Option<&str> {
        non_blank(self.per_unit.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{FormatOptions, UnitPlacement};

    #[test]
    fn camel_case_json_is_accepted() {
        let options: FormatOptions = serde_json::from_str(
            r#"{"unit":"MJ","perUnit":"/kg","precision":2,"isScientific":true}"#,
        )
        .expect("parse options");
        assert_eq!(options.unit.as_deref(), Some("MJ"));
        assert_eq!(options.per_unit.as_deref(), Some("/kg"));
        assert_eq!(options.precision, Some(2));
        assert!(options.is_scientific);
        assert!(!options.compact);
        assert_eq!(options.unit_placement, UnitPlacement::Suffix);
    }

    #[test]
    fn empty_json_object_uses_defaults() {
        let options: FormatOptions = serde_json::from_str("{}").expect("parse options");
        assert_eq!(options, FormatOptions::default());
    }

    #[test]
    fn blank_units_resolve_to_none() {
        let options = FormatOptions::default().with_unit("  ").with_per_unit("");
        assert_eq!(options.resolved_unit(), None);
        assert_eq!(options.resolved_per_unit(), None);
    }
}
