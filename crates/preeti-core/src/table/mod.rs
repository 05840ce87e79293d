//! Preeti ⇄ Unicode mapping tables.
//!
//! - `DEFAULT_TABLE_TOML` is embedded via `include_str!("default_preeti.toml")`
//! - `init_custom(toml_content)` sets a custom table before first `global()` call
//! - `PreetiTables::global()` returns `&'static PreetiTables` (lazy-init singleton)
//!
//! Converters take `&PreetiTables` explicitly; the global is a convenience
//! for callers that never swap tables.

mod config;

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::classify::{is_consonant_unicode, is_consonant_unicode_str, single_scalar};

pub use config::{parse_table_toml, ReorderConfig, TableConfig, TableError};

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_preeti.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom table TOML before first `PreetiTables::global()` call.
pub fn init_custom(toml_content: String) -> Result<(), TableError> {
    // Validate eagerly
    PreetiTables::from_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| TableError::AlreadyInitialized)
}

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLE_TOML
}

/// One-token to text lookup. Tokens absent from the table map to themselves.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: HashMap<char, String>,
}

impl MappingTable {
    pub fn get(&self, token: char) -> Option<&str> {
        self.entries.get(&token).map(String::as_str)
    }

    /// Mapped text for `token`, or `token` itself when unmapped.
    pub fn lookup(&self, token: char) -> Cow<'_, str> {
        match self.get(token) {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(token.to_string()),
        }
    }

    pub fn contains(&self, token: char) -> bool {
        self.entries.contains_key(&token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// A pre-base vowel sign: typed before its consonant in Preeti, stored after
/// it in Unicode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderRule {
    pub trigger: char,
    pub matra: char,
}

/// Both mapping directions plus the data the converters classify against.
#[derive(Debug, Clone)]
pub struct PreetiTables {
    forward: MappingTable,
    reverse: MappingTable,
    legacy_consonants: HashSet<char>,
    rules: Vec<ReorderRule>,
}

impl PreetiTables {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static PreetiTables {
        static INSTANCE: OnceLock<PreetiTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TABLE_TOML);
            PreetiTables::from_toml(toml_str).expect("preeti table TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        Self::from_config(parse_table_toml(toml_str)?)
    }

    /// Build both directions from a table config.
    ///
    /// The reverse table is assembled in two steps: invert every forward
    /// entry whose value is a single character (smallest key wins on
    /// collision), then apply `reverse_overrides`, which always win.
    pub fn from_config(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let _span = debug_span!(
            "build_tables",
            forward = config.forward.len(),
            overrides = config.reverse_overrides.len()
        )
        .entered();

        let mut forward = HashMap::with_capacity(config.forward.len());
        let mut inverted: HashMap<char, String> = HashMap::new();
        let mut legacy_consonants = HashSet::new();
        // BTreeMap iteration is in key order, so the first key seen for a
        // value is the smallest one.
        for (key, value) in &config.forward {
            let Some(token) = single_scalar(key) else {
                continue;
            };
            if is_consonant_unicode_str(value) {
                legacy_consonants.insert(token);
            }
            if let Some(out) = single_scalar(value) {
                inverted.entry(out).or_insert_with(|| key.clone());
            }
            forward.insert(token, value.clone());
        }

        let inverted_len = inverted.len();
        let mut reverse = inverted;
        for (key, value) in &config.reverse_overrides {
            if let Some(token) = single_scalar(key) {
                reverse.insert(token, value.clone());
            }
        }

        let mut rules: Vec<ReorderRule> = Vec::with_capacity(config.reorder.len());
        for rule in &config.reorder {
            let (Some(trigger), Some(matra)) =
                (single_scalar(&rule.trigger), single_scalar(&rule.matra))
            else {
                continue;
            };
            if legacy_consonants.contains(&trigger) {
                return Err(TableError::InvalidReorder {
                    trigger: rule.trigger.clone(),
                    reason: "trigger maps to a consonant".to_string(),
                });
            }
            if is_consonant_unicode(matra) {
                return Err(TableError::InvalidReorder {
                    trigger: rule.trigger.clone(),
                    reason: "matra is a consonant".to_string(),
                });
            }
            if rules.iter().any(|r| r.trigger == trigger || r.matra == matra) {
                return Err(TableError::InvalidReorder {
                    trigger: rule.trigger.clone(),
                    reason: "duplicate trigger or matra".to_string(),
                });
            }
            rules.push(ReorderRule { trigger, matra });
        }

        debug!(
            forward = forward.len(),
            inverted = inverted_len,
            reverse = reverse.len(),
            consonants = legacy_consonants.len(),
            rules = rules.len(),
            "tables built"
        );

        Ok(Self {
            forward: MappingTable { entries: forward },
            reverse: MappingTable { entries: reverse },
            legacy_consonants,
            rules,
        })
    }

    /// Legacy → Unicode table.
    pub fn forward(&self) -> &MappingTable {
        &self.forward
    }

    /// Unicode → legacy table.
    pub fn reverse(&self) -> &MappingTable {
        &self.reverse
    }

    /// True when the forward table maps `token` to a consonant or one of the
    /// modeled conjuncts.
    pub fn is_consonant_legacy(&self, token: char) -> bool {
        self.legacy_consonants.contains(&token)
    }

    pub fn legacy_consonant_count(&self) -> usize {
        self.legacy_consonants.len()
    }

    pub fn rules(&self) -> &[ReorderRule] {
        &self.rules
    }

    pub fn rule_for_trigger(&self, token: char) -> Option<&ReorderRule> {
        self.rules.iter().find(|r| r.trigger == token)
    }

    pub fn rule_for_matra(&self, token: char) -> Option<&ReorderRule> {
        self.rules.iter().find(|r| r.matra == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_build() {
        let tables = PreetiTables::from_toml(DEFAULT_TABLE_TOML).unwrap();
        assert!(tables.forward().len() > 60);
        assert!(tables.reverse().len() > 60);
        assert_eq!(
            tables.rules(),
            &[ReorderRule {
                trigger: 'l',
                matra: 'ि'
            }]
        );
    }

    #[test]
    fn global_matches_default() {
        let tables = PreetiTables::global();
        assert_eq!(tables.forward().get('k'), Some("प"));
        assert_eq!(tables.reverse().get('प'), Some("k"));
    }

    #[test]
    fn lookup_falls_back_to_token() {
        let tables = PreetiTables::global();
        assert_eq!(tables.forward().lookup('s'), "क");
        assert_eq!(tables.forward().lookup('m'), "m");
        assert_eq!(tables.reverse().lookup('A'), "A");
        assert!(!tables.forward().contains('m'));
    }

    #[test]
    fn override_beats_inverted_default() {
        let tables = PreetiTables::global();
        // Both "S" and "s" map to क; inversion alone would pick "S".
        assert_eq!(tables.forward().get('S'), Some("क"));
        assert_eq!(tables.reverse().get('क'), Some("s"));
        assert_eq!(tables.reverse().get('र'), Some("/"));
    }

    #[test]
    fn inversion_without_override() {
        let tables = PreetiTables::global();
        assert_eq!(tables.reverse().get('न'), Some("g"));
        assert_eq!(tables.reverse().get('ि'), Some("l"));
        assert_eq!(tables.reverse().get('५'), Some("5"));
    }

    #[test]
    fn multi_char_values_are_not_inverted() {
        let tables = PreetiTables::global();
        assert_eq!(tables.forward().get('r'), Some("्र"));
        assert!(!tables.reverse().iter().any(|(_, v)| v == "r" || v == "|"));
        assert!(!tables.reverse().iter().any(|(_, v)| v == "?"));
    }

    #[test]
    fn legacy_consonant_set_is_derived() {
        let tables = PreetiTables::global();
        for c in ['s', 'S', 'k', 'x', 'e', '/', '-', '?', 'q', '¡'] {
            assert!(tables.is_consonant_legacy(c), "{c:?} should be a consonant");
        }
        for c in ['l', 'f', 'U', 'r', '5', '0', '.', ' ', 'm'] {
            assert!(!tables.is_consonant_legacy(c), "{c:?} should not be a consonant");
        }
    }

    #[test]
    fn rule_lookup() {
        let tables = PreetiTables::global();
        assert_eq!(tables.rule_for_trigger('l').map(|r| r.matra), Some('ि'));
        assert_eq!(tables.rule_for_matra('ि').map(|r| r.trigger), Some('l'));
        assert!(tables.rule_for_trigger('k').is_none());
        assert!(tables.rule_for_matra('ी').is_none());
    }

    #[test]
    fn custom_table_with_extra_rule() {
        let toml = r#"
[forward]
k = "प"
l = "ि"
I = "ॆ"

[[reorder]]
trigger = "l"
matra = "ि"

[[reorder]]
trigger = "I"
matra = "ॆ"
"#;
        let tables = PreetiTables::from_toml(toml).unwrap();
        assert_eq!(tables.rules().len(), 2);
        assert_eq!(tables.rule_for_trigger('I').map(|r| r.matra), Some('ॆ'));
        assert_eq!(tables.legacy_consonant_count(), 1);
    }

    #[test]
    fn error_trigger_is_consonant() {
        let toml = r#"
[forward]
k = "प"

[[reorder]]
trigger = "k"
matra = "ि"
"#;
        let err = PreetiTables::from_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::InvalidReorder { .. }));
        assert!(err.to_string().contains("consonant"));
    }

    #[test]
    fn error_duplicate_rule() {
        let toml = r#"
[forward]
k = "प"

[[reorder]]
trigger = "l"
matra = "ि"

[[reorder]]
trigger = "l"
matra = "ी"
"#;
        let err = PreetiTables::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn init_custom_rejects_invalid_toml() {
        let err = init_custom("[forward]\n".to_string()).unwrap_err();
        assert!(matches!(err, TableError::EmptyForward));
    }

    #[test]
    fn default_toml_is_exported() {
        assert!(default_toml().contains("[forward]"));
        assert!(default_toml().contains("[[reorder]]"));
    }
}
