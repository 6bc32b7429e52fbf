//! Country name resolution with a run-scoped memo
//!
//! Two-letter codes (ISIN prefixes) resolve to English display names via the
//! ISO 3166-1 registry. Every result is cached for the lifetime of one
//! processing run; codes the registry does not know resolve to themselves,
//! so resolution never fails outwardly.

use std::collections::HashMap;

use isocountry::CountryCode;
use tracing::debug;

/// Memoizing country-code resolver owned by one processing run.
#[derive(Debug, Default)]
pub struct CountryNames {
    cache: HashMap<String, String>,
    lookups: usize,
}

impl CountryNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a two-letter country code to its English display name.
    ///
    /// Codes are matched against the registry exactly as given. Anything
    /// the registry rejects - the `_NA` sentinel, lowercase fragments,
    /// codes of the wrong length - echoes back unchanged.
    pub fn resolve(&mut self, code: &str) -> String {
        if let Some(name) = self.cache.get(code) {
            return name.clone();
        }

        self.lookups += 1;
        let name = match CountryCode::for_alpha2(code) {
            Ok(country) => country.name().to_string(),
            Err(_) => {
                debug!(code, "unknown territory code, keeping as-is");
                code.to_string()
            }
        };

        self.cache.insert(code.to_string(), name.clone());
        name
    }

    /// Number of registry lookups performed so far (cache misses).
    pub fn lookups(&self) -> usize {
        self.lookups
    }
}
