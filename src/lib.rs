//! WebAssembly random generators for the randomizer page.
//!
//! Exports a `WasmApp` class callable from JavaScript via wasm-bindgen. The
//! page keeps ownership of the DOM: it passes the current form as a plain
//! object `{ fields: { "int-min": "0", ... } }`, and every call returns the
//! updated form state (`fields`, `bounds`, `visibleSections`,
//! `sharedControlsVisible`, `selector`, `result`) for the page to apply.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod generator;
pub mod hash;
pub mod query;
pub mod registry;
pub mod rng;
pub mod value;

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use serde_wasm_bindgen::Serializer;
    use tracing::warn;
    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::AppConfig;
    use crate::error::AppError;
    use crate::form::{Clipboard, FormState};
    use crate::query::QueryParams;

    impl From<AppError> for JsValue {
        fn from(err: AppError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }

    /// `undefined` and `null` stand for "all defaults".
    fn from_js<T: DeserializeOwned + Default>(what: &'static str, value: JsValue) -> Result<T, AppError> {
        if value.is_undefined() || value.is_null() {
            return Ok(T::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| AppError::InvalidState {
            what,
            message: e.to_string(),
        })
    }

    /// Maps become plain objects, so the page can index `state.fields["int-min"]`.
    fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
        value
            .serialize(&Serializer::json_compatible())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Forwards the URL to a JS callback, typically `navigator.clipboard.writeText`.
    struct JsClipboard<'a> {
        write: &'a js_sys::Function,
    }

    impl Clipboard for JsClipboard<'_> {
        fn write_text(&mut self, text: &str) {
            if self.write.call1(&JsValue::NULL, &JsValue::from_str(text)).is_err() {
                warn!("clipboard callback threw");
            }
        }
    }

    /// Application state held by the page between events.
    #[wasm_bindgen]
    pub struct WasmApp {
        app: App,
    }

    #[wasm_bindgen]
    impl WasmApp {
        /// Create the app. `config` may override any generator default.
        #[wasm_bindgen(constructor)]
        pub fn new(config: JsValue) -> Result<WasmApp, JsValue> {
            let config: AppConfig = from_js("config", config)?;
            Ok(Self { app: App::new(&config) })
        }

        /// `[[sectionName, prefix], ...]` for building the selector.
        pub fn sections(&self) -> Result<JsValue, JsValue> {
            to_js(&self.app.registry().sections())
        }

        pub fn select(&mut self, name: &str, form: JsValue) -> Result<JsValue, JsValue> {
            let mut form: FormState = from_js("form", form)?;
            self.app.select(name, &mut form);
            to_js(&form)
        }

        /// Apply `window.location.search` on page load.
        #[wasm_bindgen(js_name = "parseSearch")]
        pub fn parse_search(&mut self, search: &str, form: JsValue) -> Result<JsValue, JsValue> {
            let mut form: FormState = from_js("form", form)?;
            self.app.parse_search(&QueryParams::parse(search), &mut form);
            to_js(&form)
        }

        pub fn generate(&mut self, form: JsValue) -> Result<JsValue, JsValue> {
            let mut form: FormState = from_js("form", form)?;
            self.app.generate(&mut form);
            to_js(&form)
        }

        /// Build the share URL from `href` and hand it to `write`.
        #[wasm_bindgen(js_name = "copyQuery")]
        pub fn copy_query(
            &mut self,
            href: &str,
            form: JsValue,
            write: &js_sys::Function,
        ) -> Result<(), JsValue> {
            let form: FormState = from_js("form", form)?;
            self.app.copy_query(href, &form, &mut JsClipboard { write })?;
            Ok(())
        }

        pub fn clear(&mut self, form: JsValue) -> Result<JsValue, JsValue> {
            let mut form: FormState = from_js("form", form)?;
            self.app.clear(&mut form);
            to_js(&form)
        }

        /// Current seed string.
        pub fn seed(&self) -> String {
            self.app.seed().to_string()
        }
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM randomizer ready".to_string()
    }
}
