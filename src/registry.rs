//! The fixed, ordered set of generators offered by the page.

use crate::config::AppConfig;
use crate::generator::Generator;

pub struct Registry {
    generators: Vec<Generator>,
}

impl Registry {
    /// Integer generator first, then the list shuffler.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            generators: vec![Generator::int(&config.int), Generator::list(&config.list)],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Generator> {
        self.generators.iter()
    }

    /// Index of the generator whose section name is `section`.
    pub fn position(&self, section: &str) -> Option<usize> {
        self.generators.iter().position(|g| g.section_name() == section)
    }

    pub fn get(&self, index: usize) -> Option<&Generator> {
        self.generators.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Generator> {
        self.generators.get_mut(index)
    }

    /// `(section name, prefix)` of every generator, in order.
    pub fn sections(&self) -> Vec<(String, &'static str)> {
        self.generators
            .iter()
            .map(|g| (g.section_name(), g.prefix()))
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorKind;

    #[test]
    fn test_order_and_sections() {
        let registry = Registry::default();
        assert_eq!(
            registry.sections(),
            vec![("int-gen".to_string(), "int"), ("list-gen".to_string(), "list")]
        );
    }

    #[test]
    fn test_lookup_by_section() {
        let registry = Registry::default();
        let idx = registry.position("list-gen").unwrap();
        assert_eq!(registry.get(idx).map(Generator::kind), Some(GeneratorKind::List));
        assert_eq!(registry.position("int"), None);
        assert_eq!(registry.position(""), None);
    }

    #[test]
    fn test_config_overrides_defaults() {
        let mut config = AppConfig::default();
        config.list.input = vec!["heads".into(), "tails".into()];
        let registry = Registry::new(&config);
        let list = registry.iter().find(|g| g.kind() == GeneratorKind::List).unwrap();
        assert_eq!(list.value("input").and_then(|v| v.as_list()).map(<[String]>::len), Some(2));
    }
}
