//! Static language catalog
//!
//! Maps ISO-639-style language codes to the display names shown at the
//! presentation boundary. The table is fixed at compile time; downstream
//! services only ever see codes from this table (or the auto-detect
//! sentinel for recognition/translation sources).

/// Code substituted when a display name cannot be resolved.
///
/// Resolution is total by policy: an unrecognized name falls back to
/// English instead of failing, so a bad language selection degrades to a
/// usable session rather than an error.
pub const FALLBACK_CODE: &str = "en";

/// Sentinel source code asking the translation service to detect the
/// source language itself.
pub const AUTO_CODE: &str = "auto";

/// Supported languages, sorted by code.
static LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("zh-cn", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
];

/// Resolve a user-facing language selection to a language code.
///
/// Accepts a display name (case-insensitive), an already-valid code, or
/// the auto-detect sentinel. Anything else resolves to [`FALLBACK_CODE`];
/// this function never fails.
pub fn resolve_code(selection: &str) -> &'static str {
    let wanted = selection.trim();

    if wanted.eq_ignore_ascii_case(AUTO_CODE) || wanted.eq_ignore_ascii_case("auto detect") {
        return AUTO_CODE;
    }

    for &(code, name) in LANGUAGES {
        if wanted.eq_ignore_ascii_case(code) || wanted.eq_ignore_ascii_case(name) {
            return code;
        }
    }

    FALLBACK_CODE
}

/// Display name for a language code.
///
/// Unknown codes are returned unchanged so callers can always render
/// something.
pub fn display_name(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(c, _)| code.eq_ignore_ascii_case(c))
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Whether a code is in the catalog.
pub fn is_supported(code: &str) -> bool {
    LANGUAGES.iter().any(|(c, _)| code.eq_ignore_ascii_case(c))
}

/// All display names, alphabetically sorted for stable presentation.
pub fn all_display_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = LANGUAGES.iter().map(|(_, name)| *name).collect();
    names.sort_unstable();
    names
}

/// All (code, display name) pairs, sorted by display name.
pub fn all_languages() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<(&'static str, &'static str)> = LANGUAGES.to_vec();
    entries.sort_unstable_by_key(|(_, name)| *name);
    entries
}
