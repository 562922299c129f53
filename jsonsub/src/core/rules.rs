//! Validated, immutable substitution rules.
//!
//! A rule maps a key to a replacement value. Keys must match [`KEY_PATTERN`]
//! (a letter or underscore followed by at least one letter, digit, underscore
//! or hyphen). Validation happens once, at construction.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::core::error::SubstitutionError;
use crate::core::value::kind_name;

/// Pattern every substitution key must match.
pub const KEY_PATTERN: &str = r"^[A-Za-z_][A-Za-z_0-9-]+$";

static KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(KEY_PATTERN).unwrap());

/// Check a single key against [`KEY_PATTERN`].
pub fn validate_key(key: &str) -> Result<(), SubstitutionError> {
    if KEY_RE.is_match(key) {
        return Ok(());
    }
    Err(SubstitutionError::InvalidKey {
        key: key.to_string(),
        pattern: KEY_PATTERN,
    })
}

/// Unwrap a rules document into its raw, unvalidated entries.
///
/// A rules document must be a JSON object; each member is one rule.
pub fn rules_map(document: Value) -> Result<Map<String, Value>, SubstitutionError> {
    match document {
        Value::Object(members) => Ok(members),
        other => Err(SubstitutionError::RulesNotObject {
            found: kind_name(&other),
        }),
    }
}

/// Exact-match find/replace rules.
///
/// Owns its entries: nothing the caller holds can alias them, so a `RuleSet`
/// never changes after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Map<String, Value>,
}

impl RuleSet {
    /// Build a rule set from owned `(key, replacement)` entries.
    ///
    /// Keys are validated in iteration order; the first invalid key aborts
    /// construction.
    pub fn new<I>(entries: I) -> Result<Self, SubstitutionError>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let entries = entries.into_iter();
        let mut rules = Map::with_capacity(entries.size_hint().0);
        for (key, replacement) in entries {
            validate_key(&key)?;
            rules.insert(key, replacement);
        }
        Ok(Self { rules })
    }

    /// Build a rule set from a borrowed map, deep-copying every entry.
    pub fn from_map(rules: &Map<String, Value>) -> Result<Self, SubstitutionError> {
        Self::new(rules.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    /// Build a rule set from a JSON object whose members are the rules.
    pub fn from_value(value: &Value) -> Result<Self, SubstitutionError> {
        Self::new(rules_map(value.clone())?)
    }

    /// Replacement for `key`, if a rule exists.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.rules.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl TryFrom<Map<String, Value>> for RuleSet {
    type Error = SubstitutionError;

    fn try_from(rules: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::new(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn accepts_keys_matching_pattern() {
        for key in ["ab", "a-b_2", "_x", "FOO", "__", "a--", "Z9"] {
            assert!(validate_key(key).is_ok(), "expected '{key}' to be valid");
        }
    }

    #[test]
    fn rejects_keys_violating_pattern() {
        for key in ["", "a", "_", "1abc", "-ab", "a b", "a.b", "ab\n", "é-x"] {
            assert!(validate_key(key).is_err(), "expected '{key}' to be invalid");
        }
    }

    #[test]
    fn invalid_key_error_names_key_and_pattern() {
        let err = RuleSet::new([("1abc".to_string(), json!("x"))]).expect_err("invalid");
        assert_eq!(
            err,
            SubstitutionError::InvalidKey {
                key: "1abc".to_string(),
                pattern: KEY_PATTERN,
            }
        );
        let message = err.to_string();
        assert!(message.contains("`1abc`"));
        assert!(message.contains(KEY_PATTERN));
    }

    #[test]
    fn reports_first_invalid_key_in_order() {
        let entries = vec![
            ("good".to_string(), json!(1)),
            ("9bad".to_string(), json!(2)),
            ("x".to_string(), json!(3)),
        ];
        let err = RuleSet::new(entries).expect_err("invalid");
        assert!(matches!(err, SubstitutionError::InvalidKey { ref key, .. } if key == "9bad"));
    }

    #[test]
    fn accepts_any_mapping_type() {
        let mut raw = HashMap::new();
        raw.insert("FOO".to_string(), json!({"bar": "baz"}));
        raw.insert("BAR".to_string(), json!([1, 2]));
        let rules = RuleSet::new(raw).expect("valid");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.get("FOO"), Some(&json!({"bar": "baz"})));
        assert!(rules.contains("BAR"));
        assert!(!rules.contains("BAZ"));
    }

    #[test]
    fn from_map_is_unaffected_by_later_caller_mutation() {
        let mut raw = Map::new();
        raw.insert("FOO".to_string(), json!({"bar": "baz"}));
        let rules = RuleSet::from_map(&raw).expect("valid");

        raw.insert("FOO".to_string(), json!("changed"));
        raw.insert("NEW".to_string(), json!(1));

        assert_eq!(rules.get("FOO"), Some(&json!({"bar": "baz"})));
        assert!(!rules.contains("NEW"));
    }

    #[test]
    fn from_value_requires_object() {
        let rules = RuleSet::from_value(&json!({"ab": 1, "cd": null})).expect("valid");
        assert_eq!(rules.keys().collect::<Vec<_>>(), vec!["ab", "cd"]);

        let err = RuleSet::from_value(&json!(["ab"])).expect_err("array");
        assert_eq!(err, SubstitutionError::RulesNotObject { found: "array" });
    }

    #[test]
    fn rules_map_unwraps_objects_only() {
        let entries = rules_map(json!({"ab": [1], "1x": 2})).expect("object");
        assert_eq!(entries.len(), 2);

        let err = rules_map(json!("ab")).expect_err("string");
        assert_eq!(err, SubstitutionError::RulesNotObject { found: "string" });
    }

    #[test]
    fn empty_rule_set_is_valid() {
        let rules = RuleSet::new(Vec::<(String, Value)>::new()).expect("valid");
        assert!(rules.is_empty());
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn try_from_map_validates() {
        let mut raw = Map::new();
        raw.insert("a".to_string(), json!(1));
        assert!(RuleSet::try_from(raw).is_err());
    }
}
