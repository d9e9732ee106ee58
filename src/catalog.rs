//! Static catalog of languages offered by the translation service.
//!
//! The table is created once at compile time and never mutated. It contains
//! a synthetic `"auto"` entry representing automatic source-language
//! detection; `"auto"` is only meaningful as a source language and is
//! rejected by the swap operation.

/// One selectable language: service code, English display name, and the
/// name written in its own script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageOption {
    /// Code understood by the translation endpoint (e.g. `"fr"`, `"auto"`).
    pub code: &'static str,
    /// Display name in English.
    pub name: &'static str,
    /// Display name in the language's native script.
    pub native: &'static str,
}

/// Sentinel source-language code meaning "detect automatically".
pub const AUTO: &str = "auto";

const LANGUAGES: &[LanguageOption] = &[
    LanguageOption { code: "auto", name: "Detect Language", native: "Auto" },
    LanguageOption { code: "en", name: "English", native: "English" },
    LanguageOption { code: "ar", name: "Arabic", native: "العربية" },
    LanguageOption { code: "bn", name: "Bengali", native: "বাংলা" },
    LanguageOption { code: "cs", name: "Czech", native: "Čeština" },
    LanguageOption { code: "da", name: "Danish", native: "Dansk" },
    LanguageOption { code: "de", name: "German", native: "Deutsch" },
    LanguageOption { code: "el", name: "Greek", native: "Ελληνικά" },
    LanguageOption { code: "es", name: "Spanish", native: "Español" },
    LanguageOption { code: "fa", name: "Persian", native: "فارسی" },
    LanguageOption { code: "fi", name: "Finnish", native: "Suomi" },
    LanguageOption { code: "fr", name: "French", native: "Français" },
    LanguageOption { code: "he", name: "Hebrew", native: "עברית" },
    LanguageOption { code: "hi", name: "Hindi", native: "हिन्दी" },
    LanguageOption { code: "hu", name: "Hungarian", native: "Magyar" },
    LanguageOption { code: "id", name: "Indonesian", native: "Bahasa Indonesia" },
    LanguageOption { code: "it", name: "Italian", native: "Italiano" },
    LanguageOption { code: "ja", name: "Japanese", native: "日本語" },
    LanguageOption { code: "ko", name: "Korean", native: "한국어" },
    LanguageOption { code: "nl", name: "Dutch", native: "Nederlands" },
    LanguageOption { code: "no", name: "Norwegian", native: "Norsk" },
    LanguageOption { code: "pl", name: "Polish", native: "Polski" },
    LanguageOption { code: "pt", name: "Portuguese", native: "Português" },
    LanguageOption { code: "ro", name: "Romanian", native: "Română" },
    LanguageOption { code: "ru", name: "Russian", native: "Русский" },
    LanguageOption { code: "sv", name: "Swedish", native: "Svenska" },
    LanguageOption { code: "th", name: "Thai", native: "ไทย" },
    LanguageOption { code: "tr", name: "Turkish", native: "Türkçe" },
    LanguageOption { code: "uk", name: "Ukrainian", native: "Українська" },
    LanguageOption { code: "vi", name: "Vietnamese", native: "Tiếng Việt" },
    LanguageOption { code: "zh-CN", name: "Chinese (Simplified)", native: "中文(简体)" },
];

/// All supported languages in display order, `"auto"` first.
#[must_use]
pub const fn list() -> &'static [LanguageOption] {
    LANGUAGES
}

/// Look up a language by its service code.
#[must_use]
pub fn find(code: &str) -> Option<&'static LanguageOption> {
    LANGUAGES.iter().find(|l| l.code == code)
}

/// Index of a code within [`list`], used to pre-select dropdown rows.
#[must_use]
pub fn position(code: &str) -> Option<usize> {
    LANGUAGES.iter().position(|l| l.code == code)
}

/// What: Human-readable label for a language code.
///
/// Inputs:
/// - `code`: Service code, possibly unknown.
///
/// Output:
/// - `"Name (Native)"` for a known code; the code itself otherwise.
#[must_use]
pub fn display_name(code: &str) -> String {
    find(code).map_or_else(
        || code.to_string(),
        |l| format!("{} ({})", l.name, l.native),
    )
}
