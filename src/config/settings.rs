//! Operator settings
//!
//! Display preferences and the editable suggestion lists the booking
//! form offers for guide and lodging-partner names. Suggestions are
//! exactly that: free text entered on a booking is never constrained to
//! the list, and newly used names can be remembered for next time.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Operator settings for the excursion ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSettings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Guide name suggestions offered on the booking form
    #[serde(default = "default_guides")]
    pub guide_suggestions: Vec<String>,

    /// Lodging/operator partner suggestions offered on the booking form
    #[serde(default = "default_partners")]
    pub partner_suggestions: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_guides() -> Vec<String> {
    ["Pranjal Gogoi", "Nabajyoti Das", "Hemanta Borah"]
        .map(String::from)
        .to_vec()
}

fn default_partners() -> Vec<String> {
    ["Kaziranga Eco Camp", "Majuli Island Homestay", "Manas Tiger Lodge"]
        .map(String::from)
        .to_vec()
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            guide_suggestions: default_guides(),
            partner_suggestions: default_partners(),
        }
    }
}

impl LedgerSettings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> LedgerResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LedgerError::Config(format!("Failed to read settings: {}", e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Load settings, writing defaults to disk when the file is missing
    pub fn load_or_create(path: &Path) -> LedgerResult<Self> {
        if path.exists() {
            return Self::load(path);
        }
        let settings = Self::default();
        settings.save(path)?;
        Ok(settings)
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> LedgerResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;
        fs::write(path, json)
            .map_err(|e| LedgerError::Config(format!("Failed to write settings: {}", e)))
    }

    /// Remember a guide name for future suggestions.
    ///
    /// Case-insensitively deduplicated; returns whether the name was new.
    pub fn remember_guide(&mut self, name: &str) -> bool {
        remember(&mut self.guide_suggestions, name)
    }

    /// Remember a partner name for future suggestions
    pub fn remember_partner(&mut self, name: &str) -> bool {
        remember(&mut self.partner_suggestions, name)
    }
}

fn remember(list: &mut Vec<String>, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    if list.iter().any(|n| n.eq_ignore_ascii_case(name)) {
        return false;
    }
    list.push(name.to_string());
    true
}
