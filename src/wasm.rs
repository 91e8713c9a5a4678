//! WASM bindings for texprose
//!
//! This module provides JavaScript-accessible functions for stripping LaTeX.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{OutputMode, StripOptions};

/// Stripping options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct StripConvertOptions {
    /// Treat the input as document body
    #[serde(default)]
    pub document: bool,
    /// `"plain"`, `"count"` or `"tts"`
    #[serde(default)]
    pub mode: Option<String>,
    /// Fail on unterminated constructs
    #[serde(default)]
    pub strict: bool,
    /// Remove `\iffalse ... \fi` blocks first
    #[serde(default = "default_true")]
    pub strip_iffalse: bool,
    /// Extra characters allowed in simple math
    #[serde(default)]
    pub extra_math_chars: Option<String>,
}

#[cfg(feature = "wasm")]
impl Default for StripConvertOptions {
    fn default() -> Self {
        Self {
            document: false,
            mode: None,
            strict: false,
            strip_iffalse: true,
            extra_math_chars: None,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
impl StripConvertOptions {
    fn to_options(&self) -> StripOptions {
        let output_mode = match self.mode.as_deref() {
            Some("count") => OutputMode::WordCount,
            Some("tts") => OutputMode::TextToSpeech,
            _ => OutputMode::Plain,
        };
        let mut options = StripOptions::new()
            .with_output_mode(output_mode)
            .with_document(self.document)
            .with_strict(self.strict);
        options.strip_iffalse = self.strip_iffalse;
        if let Some(ref extra) = self.extra_math_chars {
            options.math_allow = options.math_allow.with_chars(extra);
        }
        options
    }
}

/// Stripping result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct StripConvertResult {
    /// The stripped text, or the word count in count mode
    pub output: String,
    /// Whether stripping was successful
    pub success: bool,
    /// Error message if stripping failed
    pub error: Option<String>,
    /// Warnings during stripping
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Strip a full LaTeX document to prose
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "stripLatex")]
pub fn strip_latex_wasm(input: &str) -> String {
    crate::strip_latex(input).unwrap_or_default()
}

/// Strip LaTeX with options
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "stripLatexWithOptions")]
pub fn strip_latex_with_options_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: StripConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let options = opts.to_options();

    let result = match crate::strip_latex_with_options(input, &options) {
        Ok(stripped) => {
            let warnings = stripped.warnings.iter().map(|w| w.to_string()).collect();
            let output = match options.output_mode {
                OutputMode::WordCount => crate::count_words(&stripped.content).to_string(),
                OutputMode::Plain | OutputMode::TextToSpeech => stripped.content,
            };
            StripConvertResult {
                output,
                success: true,
                error: None,
                warnings,
            }
        }
        Err(err) => StripConvertResult {
            output: String::new(),
            success: false,
            error: Some(err.to_string()),
            warnings: vec![],
        },
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
