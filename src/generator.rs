//! Generators: a declared table of named config values plus a `generate`
//! step that turns a random source into preformatted markup.
//!
//! Form fields are addressed as `{prefix}-{key}` (e.g. `int-min`), URL
//! parameters by the bare key, and the page section as `{prefix}-gen`.

use crate::config::{IntBounds, IntGeneratorConfig, ListGeneratorConfig};
use crate::form::FormRenderer;
use crate::query::QueryParams;
use crate::rng::Random;
use crate::value::{ConfigValue, IntValue, StringListValue};

/// The available kinds of generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Independent integers in `[min, max]`.
    Int,
    /// Random permutation of a user-supplied list.
    List,
}

impl GeneratorKind {
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::List => "list",
        }
    }
}

/// One named configuration value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub key: &'static str,
    pub value: ConfigValue,
}

impl Param {
    fn int(key: &'static str, bounds: IntBounds) -> Self {
        Self {
            key,
            value: ConfigValue::Int(IntValue::new(bounds.min, bounds.max, bounds.value)),
        }
    }

    fn list(key: &'static str, items: Vec<String>) -> Self {
        Self {
            key,
            value: ConfigValue::StringList(StringListValue::new(items)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    kind: GeneratorKind,
    params: Vec<Param>,
}

impl Generator {
    pub fn int(config: &IntGeneratorConfig) -> Self {
        Self {
            kind: GeneratorKind::Int,
            params: vec![
                Param::int("min", config.min),
                Param::int("max", config.max),
                Param::int("count", config.count),
            ],
        }
    }

    pub fn list(config: &ListGeneratorConfig) -> Self {
        Self {
            kind: GeneratorKind::List,
            params: vec![Param::list("input", config.input.clone())],
        }
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    pub fn prefix(&self) -> &'static str {
        self.kind.prefix()
    }

    pub fn section_name(&self) -> String {
        format!("{}-gen", self.prefix())
    }

    pub fn value(&self, key: &str) -> Option<&ConfigValue> {
        self.params.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    fn field_id(&self, key: &str) -> String {
        format!("{}-{}", self.prefix(), key)
    }

    fn int_value(&self, key: &str) -> i64 {
        self.value(key).and_then(ConfigValue::as_int).unwrap_or_default()
    }

    pub fn show(&self, form: &mut impl FormRenderer) {
        form.set_section_visible(&self.section_name(), true);
    }

    pub fn hide(&self, form: &mut impl FormRenderer) {
        form.set_section_visible(&self.section_name(), false);
    }

    /// Pull every value from its form field. Absent fields leave the value as is.
    pub fn read_form(&mut self, form: &impl FormRenderer) {
        let prefix = self.prefix();
        for param in &mut self.params {
            if let Some(raw) = form.read_field(&format!("{prefix}-{}", param.key)) {
                param.value.parse_into(&raw);
            }
        }
    }

    /// Push every value, with its bounds, into its form field.
    pub fn configure_form(&self, form: &mut impl FormRenderer) {
        for param in &self.params {
            form.write_field(&self.field_id(param.key), param.value.field());
        }
    }

    /// Pull every value from the URL parameter of the same key. Absent
    /// parameters leave the value as is.
    pub fn read_params(&mut self, params: &QueryParams) {
        for param in &mut self.params {
            if let Some(raw) = params.get(param.key) {
                param.value.parse_into(raw);
            }
        }
    }

    pub fn export_params(&self, params: &mut QueryParams) {
        for param in &self.params {
            params.set(param.key, &param.value.export());
        }
    }

    /// Produce the result markup. Depends only on the current values and the
    /// draws taken from `rng`.
    pub fn generate(&self, rng: &mut impl Random) -> String {
        let lines = match self.kind {
            GeneratorKind::Int => {
                let min = self.int_value("min");
                let max = self.int_value("max");
                let count = self.int_value("count");
                (0..count)
                    .map(|_| rng.int(min, max).to_string())
                    .collect::<Vec<_>>()
            }
            GeneratorKind::List => {
                let input = self
                    .value("input")
                    .and_then(ConfigValue::as_list)
                    .unwrap_or_default();
                shuffle(input, rng)
            }
        };
        format!("<pre>{}</pre>", lines.join("\n"))
    }
}

/// Decorate each item with one `random()` draw, sort by the draws, strip them.
fn shuffle(items: &[String], rng: &mut impl Random) -> Vec<String> {
    let mut decorated: Vec<(f64, &String)> = items.iter().map(|item| (rng.random(), item)).collect();
    decorated.sort_by(|a, b| a.0.total_cmp(&b.0));
    decorated.into_iter().map(|(_, item)| item.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;
    use crate::rng::MersenneRandom;

    /// Replays a fixed list of unit draws; `int` returns `min`.
    struct Scripted {
        draws: Vec<f64>,
    }

    impl Random for Scripted {
        fn int(&mut self, min: i64, _max: i64) -> i64 {
            min
        }
        fn float(&mut self, min: f64, _max: f64) -> f64 {
            min
        }
        fn random(&mut self) -> f64 {
            self.draws.remove(0)
        }
    }

    fn list_of(items: &[&str]) -> Generator {
        Generator::list(&ListGeneratorConfig {
            input: items.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_names() {
        let int = Generator::int(&IntGeneratorConfig::default());
        let list = list_of(&[]);
        assert_eq!(int.prefix(), "int");
        assert_eq!(int.section_name(), "int-gen");
        assert_eq!(list.section_name(), "list-gen");
    }

    #[test]
    fn test_int_generate_fixed_range() {
        let mut gen = Generator::int(&IntGeneratorConfig::default());
        gen.read_params(&QueryParams::parse("min=5&max=5&count=3"));
        let mut rng = MersenneRandom::new(1);
        assert_eq!(gen.generate(&mut rng), "<pre>5\n5\n5</pre>");
    }

    #[test]
    fn test_int_generate_count_and_bounds() {
        let mut gen = Generator::int(&IntGeneratorConfig::default());
        gen.read_params(&QueryParams::parse("min=10&max=20&count=50"));
        let out = gen.generate(&mut MersenneRandom::new(77));
        let body = out.strip_prefix("<pre>").unwrap().strip_suffix("</pre>").unwrap();
        let values: Vec<i64> = body.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|v| (10..=20).contains(v)));
    }

    #[test]
    fn test_list_shuffle_sorts_by_draw() {
        let gen = list_of(&["a", "b", "c"]);
        let mut rng = Scripted { draws: vec![0.9, 0.1, 0.5] };
        assert_eq!(gen.generate(&mut rng), "<pre>b\nc\na</pre>");
    }

    #[test]
    fn test_list_shuffle_is_permutation() {
        let items = ["x", "y", "z", "x", "w", "v"];
        let gen = list_of(&items);
        let out = gen.generate(&mut MersenneRandom::new(31337));
        let body = out.strip_prefix("<pre>").unwrap().strip_suffix("</pre>").unwrap();
        let mut got: Vec<&str> = body.lines().collect();
        let mut want = items.to_vec();
        got.sort_unstable();
        want.sort_unstable();
        assert_eq!(got, want);
    }

    #[test]
    fn test_list_shuffle_deterministic_per_seed() {
        let gen = list_of(&["one", "two", "three", "four", "five"]);
        let a = gen.generate(&mut MersenneRandom::new(5));
        let b = gen.generate(&mut MersenneRandom::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_list_generates_empty_block() {
        let gen = list_of(&[]);
        assert_eq!(gen.generate(&mut MersenneRandom::new(0)), "<pre></pre>");
    }

    #[test]
    fn test_read_form_skips_missing_fields() {
        let mut gen = Generator::int(&IntGeneratorConfig::default());
        let form = FormState::with_fields([("int-max", "40"), ("list-input", "ignored")]);
        gen.read_form(&form);
        assert_eq!(gen.value("min").and_then(ConfigValue::as_int), Some(0));
        assert_eq!(gen.value("max").and_then(ConfigValue::as_int), Some(40));
        assert_eq!(gen.value("count").and_then(ConfigValue::as_int), Some(1));
    }

    #[test]
    fn test_read_params_keeps_value_when_missing() {
        let mut gen = Generator::int(&IntGeneratorConfig::default());
        gen.read_params(&QueryParams::parse("count=9"));
        gen.read_params(&QueryParams::parse("min=3"));
        assert_eq!(gen.value("count").and_then(ConfigValue::as_int), Some(9));
        assert_eq!(gen.value("min").and_then(ConfigValue::as_int), Some(3));
        assert_eq!(gen.value("max").and_then(ConfigValue::as_int), Some(100));
    }

    #[test]
    fn test_configure_form_writes_bounds() {
        let gen = Generator::int(&IntGeneratorConfig::default());
        let mut form = FormState::default();
        gen.configure_form(&mut form);
        assert_eq!(form.read_field("int-count").as_deref(), Some("1"));
        assert_eq!(form.bounds.get("int-count"), Some(&(1, 100)));
        assert_eq!(form.bounds.get("int-max"), Some(&(0, 100)));
    }

    #[test]
    fn test_configure_form_writes_list_text() {
        let gen = list_of(&["a", "b"]);
        let mut form = FormState::default();
        gen.configure_form(&mut form);
        assert_eq!(form.read_field("list-input").as_deref(), Some("a\nb"));
        assert!(form.bounds.is_empty());
    }

    #[test]
    fn test_export_params_uses_bare_keys() {
        let gen = list_of(&["a", "b"]);
        let mut params = QueryParams::new();
        gen.export_params(&mut params);
        assert_eq!(params.get("input"), Some("a\nb"));
        assert!(!params.has("list-input"));
    }

    #[test]
    fn test_show_hide_section() {
        let gen = list_of(&[]);
        let mut form = FormState::default();
        gen.show(&mut form);
        assert!(form.visible_sections.contains("list-gen"));
        gen.hide(&mut form);
        assert!(!form.visible_sections.contains("list-gen"));
    }
}
