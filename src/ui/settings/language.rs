// SPDX-License-Identifier: MPL-2.0
//! Entries of the language picker.

use crate::i18n::language_names;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// One selectable language, labelled by its native name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    /// Bundle language code stored in the preferences (e.g. `"fr"`).
    pub option: String,
    /// Self-referential display name (e.g. `"Français"`).
    pub native_name: String,
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.native_name)
    }
}

/// Builds one option per available bundle, sorted by native name.
#[must_use]
pub fn language_options(available: &[LanguageIdentifier]) -> Vec<LanguageOption> {
    let mut options: Vec<LanguageOption> = available
        .iter()
        .map(|locale| {
            let option = locale.to_string();
            LanguageOption {
                native_name: language_names::native_name(&option),
                option,
            }
        })
        .collect();

    options.sort_by(|a, b| a.native_name.cmp(&b.native_name));
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales(codes: &[&str]) -> Vec<LanguageIdentifier> {
        codes.iter().map(|code| code.parse().unwrap()).collect()
    }

    #[test]
    fn options_are_sorted_by_native_name() {
        let options = language_options(&locales(&["pt", "fr", "en", "de", "es"]));
        let names: Vec<&str> = options.iter().map(|o| o.native_name.as_str()).collect();

        assert_eq!(
            names,
            vec!["Deutsch", "English", "Español", "Français", "Português"]
        );
    }

    #[test]
    fn one_option_per_bundle() {
        let available = locales(&["ru", "en", "ja"]);
        let options = language_options(&available);

        assert_eq!(options.len(), available.len());
        for locale in &available {
            assert_eq!(
                options
                    .iter()
                    .filter(|o| o.option == locale.to_string())
                    .count(),
                1
            );
        }
    }

    #[test]
    fn unknown_language_is_labelled_with_its_code() {
        let options = language_options(&locales(&["tlh"]));
        assert_eq!(options[0].native_name, "tlh");
        assert_eq!(options[0].to_string(), "tlh");
    }

    #[test]
    fn no_bundles_no_options() {
        assert!(language_options(&[]).is_empty());
    }
}
