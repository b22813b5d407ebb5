use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::die::DieFace;

// ---------------------------------------------------------------------------
// Localized UI strings
// ---------------------------------------------------------------------------

/// Locale used when the requested one is unknown or incomplete.
pub const FALLBACK_LOCALE: &str = "en";

const EMBEDDED_TABLES: &str = include_str!("../assets/strings.json");

/// One locale's entries. Missing keys are filled from the fallback locale.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawStrings {
    app_name: Option<String>,
    roll: Option<String>,
    die_description: Option<String>,
}

type RawTables = BTreeMap<String, RawStrings>;

/// Resolved strings for a single locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    pub locale: String,
    pub app_name: String,
    pub roll: String,
    /// Template with a `{face}` placeholder.
    die_description: String,
}

impl Default for Strings {
    /// Built-in English strings, independent of the embedded tables.
    fn default() -> Self {
        Strings {
            locale: FALLBACK_LOCALE.to_string(),
            app_name: "Dice Roller".to_string(),
            roll: "Roll".to_string(),
            die_description: "Die showing {face}".to_string(),
        }
    }
}

impl Strings {
    /// Load strings for `locale` from the embedded tables.
    pub fn load(locale: &str) -> Result<Self> {
        Self::from_json(EMBEDDED_TABLES, locale)
    }

    /// Resolve `locale` from a JSON document of `locale → key → text`.
    ///
    /// Only the language part of the tag is considered (`de-AT` → `de`).
    pub fn from_json(json: &str, locale: &str) -> Result<Self> {
        let tables: RawTables =
            serde_json::from_str(json).context("parsing string tables")?;

        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or(FALLBACK_LOCALE)
            .to_ascii_lowercase();

        let builtin = Strings::default();
        let fallback = tables.get(FALLBACK_LOCALE).cloned().unwrap_or_default();
        let (resolved_locale, chosen) = match tables.get(&language) {
            Some(t) => (language, t.clone()),
            None => {
                log::warn!("No strings for locale '{locale}', using '{FALLBACK_LOCALE}'");
                (FALLBACK_LOCALE.to_string(), fallback.clone())
            }
        };

        let pick = |own: Option<String>, fb: Option<String>, default: String| {
            own.or(fb).unwrap_or(default)
        };

        Ok(Strings {
            locale: resolved_locale,
            app_name: pick(chosen.app_name, fallback.app_name, builtin.app_name),
            roll: pick(chosen.roll, fallback.roll, builtin.roll),
            die_description: pick(
                chosen.die_description,
                fallback.die_description,
                builtin.die_description,
            ),
        })
    }

    /// Content description for the die image, e.g. "Die showing 4".
    pub fn die_description(&self, face: DieFace) -> String {
        self.die_description.replace("{face}", &face.to_string())
    }
}
