//! Application controller.
//!
//! Owns the registry, the current selection and the seed. Every event handler
//! takes the page form explicitly, so the same controller runs against the
//! DOM (through the wasm exports) and against an in-memory [`FormState`] in
//! tests.
//!
//! [`FormState`]: crate::form::FormState

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::form::{Clipboard, FieldValue, FormRenderer, SEED_FIELD};
use crate::generator::Generator;
use crate::hash::hash;
use crate::query::QueryParams;
use crate::registry::Registry;
use crate::rng::{fresh_seed, MersenneRandom};

/// URL parameter naming the selected generator's section.
pub const GENERATOR_PARAM: &str = "generator";
/// URL parameter carrying the seed string.
pub const SEED_PARAM: &str = "seed";

pub struct App {
    registry: Registry,
    selected: Option<usize>,
    seed: String,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            registry: Registry::new(config),
            selected: None,
            seed: String::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn selected(&self) -> Option<&Generator> {
        self.selected.and_then(|i| self.registry.get(i))
    }

    /// Seed string; empty means a fresh seed is drawn per generation.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Drop the selection and empty the result area.
    pub fn clear(&mut self, form: &mut impl FormRenderer) {
        self.select("", form);
        form.set_result("");
    }

    /// Select the generator with section name `name`, or nothing if no
    /// generator matches, then resync the form.
    pub fn select(&mut self, name: &str, form: &mut impl FormRenderer) {
        self.selected = self.registry.position(name);
        if self.selected.is_none() && !name.is_empty() {
            warn!(section = name, "unknown generator");
        }
        debug!(section = name, found = self.selected.is_some(), "select generator");
        self.configure_form(form);
    }

    /// Hide every section, then show and fill the selected one.
    pub fn configure_form(&self, form: &mut impl FormRenderer) {
        for generator in self.registry.iter() {
            generator.hide(form);
        }
        match self.selected() {
            Some(generator) => {
                generator.configure_form(form);
                generator.show(form);
                form.set_shared_controls_visible(true);
                form.set_selector(&generator.section_name());
            }
            None => {
                form.set_shared_controls_visible(false);
                form.set_selector("");
            }
        }
        form.write_field(
            SEED_FIELD,
            FieldValue::Text {
                value: self.seed.clone(),
            },
        );
    }

    /// Restore a shared configuration and generate straight away.
    ///
    /// Does nothing unless `params` names a generator.
    pub fn parse_search(&mut self, params: &QueryParams, form: &mut impl FormRenderer) {
        if !params.has(GENERATOR_PARAM) {
            return;
        }
        let section = params.get(GENERATOR_PARAM).unwrap_or_default();
        self.seed = params.get(SEED_PARAM).unwrap_or_default().to_string();
        self.select(section, form);

        let Some(generator) = self.selected.and_then(|i| self.registry.get_mut(i)) else {
            return;
        };
        generator.read_params(params);
        generator.configure_form(form);
        self.generate(form);
    }

    /// Read the form and render a fresh result. No-op without a selection.
    pub fn generate(&mut self, form: &mut impl FormRenderer) {
        let Some(generator) = self.selected.and_then(|i| self.registry.get_mut(i)) else {
            return;
        };
        if let Some(seed) = form.read_field(SEED_FIELD) {
            self.seed = seed;
        }
        generator.read_form(form);

        let seed = if self.seed.is_empty() {
            fresh_seed()
        } else {
            hash(&self.seed)
        };
        debug!(section = %generator.section_name(), seed, "generate");

        let html = generator.generate(&mut MersenneRandom::new(seed));
        form.set_result(&html);
    }

    /// Put a URL reproducing the current configuration on the clipboard.
    /// No-op without a selection.
    ///
    /// `base_url` is the page address; its query is replaced.
    pub fn copy_query(
        &mut self,
        base_url: &str,
        form: &impl FormRenderer,
        clipboard: &mut impl Clipboard,
    ) -> Result<(), AppError> {
        let Some(generator) = self.selected.and_then(|i| self.registry.get_mut(i)) else {
            return Ok(());
        };
        if let Some(seed) = form.read_field(SEED_FIELD) {
            self.seed = seed;
        }
        generator.read_form(form);

        let mut params = QueryParams::new();
        params.set(GENERATOR_PARAM, &generator.section_name());
        if !self.seed.is_empty() {
            params.set(SEED_PARAM, &self.seed);
        }
        generator.export_params(&mut params);

        let url = params.apply_to(base_url)?;
        debug!(%url, "copy query");
        clipboard.write_text(url.as_str());
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
