//! Generator defaults.
//!
//! Every field has a `Default` and deserialization fills anything the page
//! leaves out, down to a single bound: `{ int: { count: { max: 1000 } } }`
//! raises the count limit and keeps every other default.

use serde::Deserialize;

/// Inclusive bounds and initial value of a numeric field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntBounds {
    pub min: i64,
    pub max: i64,
    pub value: i64,
}

impl IntBounds {
    pub const fn new(min: i64, max: i64, value: i64) -> Self {
        Self { min, max, value }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "IntGeneratorOverrides")]
pub struct IntGeneratorConfig {
    pub min: IntBounds,
    pub max: IntBounds,
    pub count: IntBounds,
}

impl Default for IntGeneratorConfig {
    fn default() -> Self {
        Self {
            min: IntBounds::new(0, 100, 0),
            max: IntBounds::new(0, 100, 100),
            count: IntBounds::new(1, 100, 1),
        }
    }
}

/// Partial `IntBounds` as written by the page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IntBoundsOverride {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub value: Option<i64>,
}

impl IntBoundsOverride {
    fn apply(self, base: IntBounds) -> IntBounds {
        IntBounds {
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
            value: self.value.unwrap_or(base.value),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IntGeneratorOverrides {
    pub min: IntBoundsOverride,
    pub max: IntBoundsOverride,
    pub count: IntBoundsOverride,
}

impl From<IntGeneratorOverrides> for IntGeneratorConfig {
    fn from(overrides: IntGeneratorOverrides) -> Self {
        let base = Self::default();
        Self {
            min: overrides.min.apply(base.min),
            max: overrides.max.apply(base.max),
            count: overrides.count.apply(base.count),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListGeneratorConfig {
    /// Entries shown before the user types anything.
    pub input: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub int: IntGeneratorConfig,
    pub list: ListGeneratorConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_defaults() {
        let cfg = IntGeneratorConfig::default();
        assert_eq!(cfg.min, IntBounds::new(0, 100, 0));
        assert_eq!(cfg.max, IntBounds::new(0, 100, 100));
        assert_eq!(cfg.count, IntBounds::new(1, 100, 1));
    }

    #[test]
    fn test_list_defaults_empty() {
        assert!(AppConfig::default().list.input.is_empty());
    }

    #[test]
    fn test_single_bound_override_keeps_other_defaults() {
        let cfg: AppConfig = serde_json::from_str(r#"{"int":{"count":{"max":1000}}}"#).unwrap();
        assert_eq!(cfg.int.count, IntBounds::new(1, 1000, 1));
        assert_eq!(cfg.int.min, IntBounds::new(0, 100, 0));
        assert_eq!(cfg.int.max, IntBounds::new(0, 100, 100));
        assert_eq!(cfg.list, ListGeneratorConfig::default());
    }

    #[test]
    fn test_empty_object_is_all_defaults() {
        let cfg: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, AppConfig::default());
        let cfg: AppConfig = serde_json::from_str(r#"{"int":{}}"#).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_list_override() {
        let cfg: AppConfig = serde_json::from_str(r#"{"list":{"input":["heads","tails"]}}"#).unwrap();
        assert_eq!(cfg.list.input, vec!["heads", "tails"]);
        assert_eq!(cfg.int, IntGeneratorConfig::default());
    }

    #[test]
    fn test_mistyped_bound_is_rejected() {
        assert!(serde_json::from_str::<AppConfig>(r#"{"int":{"min":{"max":"lots"}}}"#).is_err());
    }
}
