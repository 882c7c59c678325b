// SPDX-License-Identifier: MPL-2.0
//! Native names of languages, keyed by ISO 639-1 code.
//!
//! Used to label language pickers in each language's own script, so a user
//! can find their language regardless of the active locale.

use crate::config::base_language;

/// ISO 639-1 code → self-referential name.
const NATIVE_NAMES: &[(&str, &str)] = &[
    ("ar", "العربية"),
    ("be", "беларуская мова"),
    ("bg", "български език"),
    ("ca", "Català"),
    ("cs", "Čeština"),
    ("da", "Dansk"),
    ("de", "Deutsch"),
    ("el", "Ελληνικά"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("es", "Español"),
    ("et", "Eesti"),
    ("fa", "فارسی"),
    ("fi", "Suomi"),
    ("fr", "Français"),
    ("he", "עברית"),
    ("hi", "हिन्दी"),
    ("hu", "Magyar"),
    ("id", "Bahasa Indonesia"),
    ("it", "Italiano"),
    ("ja", "日本語"),
    ("kk", "қазақ тілі"),
    ("ko", "한국어"),
    ("lt", "Lietuvių kalba"),
    ("lv", "Latviešu valoda"),
    ("nb", "Norsk bokmål"),
    ("nl", "Nederlands"),
    ("pl", "Polski"),
    ("pt", "Português"),
    ("ro", "Română"),
    ("ru", "Русский"),
    ("sk", "Slovenčina"),
    ("sv", "Svenska"),
    ("th", "ไทย"),
    ("tr", "Türkçe"),
    ("uk", "Українська"),
    ("uz", "Oʻzbek"),
    ("vi", "Tiếng Việt"),
    ("zh", "中文"),
];

/// Returns the native name of `code`, looking at its base subtag.
///
/// Unknown codes yield `None`.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static str> {
    let base = base_language(code).to_ascii_lowercase();
    NATIVE_NAMES
        .binary_search_by(|(key, _)| (*key).cmp(base.as_str()))
        .ok()
        .map(|index| NATIVE_NAMES[index].1)
}

/// Returns the native name of `code`, or the code itself when unknown.
#[must_use]
pub fn native_name(code: &str) -> String {
    lookup(code).map_or_else(|| code.to_string(), str::to_string)
}
