//! Control symbol mappings
//!
//! A control symbol is a backslash followed by a single non-letter. The four
//! structural escapes (`\%`, `\$`, `\{`, `\}`) have their own rules; this
//! table covers the rest of the ones that show up in running prose.

use phf::phf_map;

/// Control symbol (including the backslash) to the prose it stands for
pub static CONTROL_SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    // Escaped specials
    "\\&" => "&",
    "\\#" => "#",
    "\\_" => "_",

    // Spacing
    "\\\\" => " ",
    "\\ " => " ",
    "\\," => " ",
    "\\;" => " ",
    "\\:" => " ",
    "\\!" => "",
    "\\/" => "",

    // Discretionary hyphen
    "\\-" => "",

    // Accents on their own render as nothing useful
    "\\'" => "",
    "\\`" => "",
    "\\^" => "",
    "\\\"" => "",
    "\\~" => "",
    "\\." => "",
    "\\=" => "",
};

/// Look up the prose for a control symbol; unknown symbols produce nothing
pub fn control_symbol_text(symbol: &str) -> &'static str {
    CONTROL_SYMBOLS.get(symbol).copied().unwrap_or("")
}
