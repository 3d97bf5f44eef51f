//! Typed configuration values bound to form fields and URL parameters.

use crate::form::FieldValue;

/// Integer with inclusive bounds. Parsed input is always clamped into range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntValue {
    pub min: i64,
    pub max: i64,
    pub value: i64,
}

impl IntValue {
    /// `value` is clamped into `[min, max]`.
    pub fn new(min: i64, max: i64, value: i64) -> Self {
        Self {
            min,
            max,
            value: value.clamp(min, max.max(min)),
        }
    }

    /// Parse `raw` like a lenient integer reader: leading whitespace, an
    /// optional sign, an optional `0x` prefix, then as many digits as
    /// present. Anything after the digits is ignored. Input without digits
    /// parses to `min`.
    pub fn parse(&self, raw: &str) -> i64 {
        match leading_int(raw) {
            Some(v) => v.clamp(self.min, self.max.max(self.min)),
            None => self.min,
        }
    }

    pub fn export(&self) -> String {
        self.value.to_string()
    }
}

/// Leading signed integer of `raw`, saturating on overflow.
fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut seen = false;
    let mut acc: i64 = 0;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        let d = i64::from(d);
        acc = if negative {
            acc.saturating_mul(radix.into()).saturating_sub(d)
        } else {
            acc.saturating_mul(radix.into()).saturating_add(d)
        };
    }
    seen.then_some(acc)
}

/// List of strings edited one per line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringListValue {
    pub value: Vec<String>,
}

impl StringListValue {
    pub fn new(value: Vec<String>) -> Self {
        Self { value }
    }

    /// Split on line breaks, trim every line and drop the blank ones.
    /// Order and duplicates are preserved.
    pub fn parse(raw: &str) -> Vec<String> {
        raw.split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn export(&self) -> String {
        self.value.join("\n")
    }
}

/// A configuration datum owned by a generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigValue {
    Int(IntValue),
    StringList(StringListValue),
}

impl ConfigValue {
    /// Parse `raw` and store the result as the current value.
    pub fn parse_into(&mut self, raw: &str) {
        match self {
            Self::Int(v) => v.value = v.parse(raw),
            Self::StringList(v) => v.value = StringListValue::parse(raw),
        }
    }

    /// Canonical string form, used for URL parameters.
    pub fn export(&self) -> String {
        match self {
            Self::Int(v) => v.export(),
            Self::StringList(v) => v.export(),
        }
    }

    /// What to push into the bound form field.
    pub fn field(&self) -> FieldValue {
        match self {
            Self::Int(v) => FieldValue::Number {
                min: v.min,
                max: v.max,
                value: v.value,
            },
            Self::StringList(v) => FieldValue::Text { value: v.export() },
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v.value),
            Self::StringList(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(v) => Some(&v.value),
            Self::Int(_) => None,
        }
    }
}
