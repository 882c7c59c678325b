// SPDX-License-Identifier: MPL-2.0
use crate::config::{base_language, DEFAULT_LANGUAGE};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Active localization context.
///
/// Owned by the application root and lent to views; components request a
/// locale change instead of switching it themselves.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl I18n {
    /// Loads every embedded bundle and resolves the startup locale.
    ///
    /// Resolution order: `cli_lang`, then `preferred` (the stored language
    /// preference), then the OS locale, then [`DEFAULT_LANGUAGE`].
    pub fn new(cli_lang: Option<String>, preferred: Option<&str>) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "ignoring bundle with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            let resource = FluentResource::try_new(source).unwrap_or_else(|(resource, errors)| {
                tracing::warn!(file = filename, ?errors, "bundle has syntax errors");
                resource
            });

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, ?errors, "bundle has duplicate messages");
            }
            bundles.insert(locale, bundle);
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let os_locale = sys_locale::get_locale();
        let current_locale = resolve_locale(
            cli_lang.as_deref(),
            preferred,
            os_locale.as_deref(),
            &available_locales,
        )
        .unwrap_or_else(default_locale);

        tracing::debug!(locale = %current_locale, available = ?available_locales, "i18n initialized");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    /// Locales with an embedded bundle, sorted by identifier.
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches the active bundle.
    ///
    /// Region-qualified requests fall back to the base bundle. Returns
    /// `false` and keeps the current locale when no bundle matches.
    pub fn set_locale(&mut self, locale: &LanguageIdentifier) -> bool {
        match match_available(&locale.to_string(), &self.available_locales) {
            Some(resolved) => {
                tracing::info!(locale = %resolved, "switching display language");
                self.current_locale = resolved;
                true
            }
            None => {
                tracing::warn!(locale = %locale, "no bundle for requested language");
                false
            }
        }
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LANGUAGE.parse().unwrap_or_default()
}

/// Finds the bundle for `requested`, trying an exact match before its base subtag.
fn match_available(requested: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let lang = requested.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }

    let base = base_language(requested).parse::<LanguageIdentifier>().ok()?;
    available.iter().find(|locale| **locale == base).cloned()
}

fn resolve_locale(
    cli_lang: Option<&str>,
    preferred: Option<&str>,
    os_locale: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, preferred, os_locale]
        .into_iter()
        .flatten()
        .find_map(|candidate| match_available(candidate, available))
}
