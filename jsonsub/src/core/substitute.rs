//! Whole-value string substitution over a JSON tree.
//!
//! A substitution pass rebuilds the tree, replacing every string leaf whose
//! entire text equals a rule key with that rule's value. Replacement values are
//! inserted as-is and never substituted again in the same pass. Object keys,
//! numbers, booleans and null are never targets.
//!
//! The rebuild walk keeps its own work stack, so walking the input does not
//! grow the call stack with nesting depth. Cloning a replacement value and
//! dropping the finished tree still use `serde_json`'s recursive `Clone` and
//! `Drop`.

use serde_json::{Map, Value, map};
use tracing::debug;

use crate::core::error::SubstitutionError;
use crate::core::rules::RuleSet;
use crate::core::value::kind_name;

/// Result of a substitution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Substituted {
    pub value: Value,
    /// Number of string leaves that were replaced.
    pub replacements: usize,
}

impl Substituted {
    /// Unwrap the substituted document, requiring it to be an object.
    pub fn into_object(self) -> Result<Map<String, Value>, SubstitutionError> {
        match self.value {
            Value::Object(members) => Ok(members),
            other => Err(SubstitutionError::ExpectedObject {
                found: kind_name(&other),
            }),
        }
    }
}

/// Applies a [`RuleSet`] to document trees. Stateless between calls.
#[derive(Debug, Clone, Copy)]
pub struct Substitutor<'r> {
    rules: &'r RuleSet,
}

impl<'r> Substitutor<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    /// Return a new tree with every exact-match string leaf replaced.
    pub fn apply(&self, tree: &Value) -> Value {
        self.run(tree).value
    }

    /// Like [`Substitutor::apply`], but also report how many leaves changed.
    pub fn run(&self, tree: &Value) -> Substituted {
        let mut replacements = 0;
        let value = self.rebuild(tree, &mut replacements);
        debug!(replacements, rules = self.rules.len(), "substitution pass complete");
        Substituted {
            value,
            replacements,
        }
    }

    /// Apply substitutions and require the result to be an object.
    ///
    /// The pass itself is variant-agnostic; this is the check for callers whose
    /// documents must stay objects (e.g. a string root replaced by an array
    /// fails here).
    pub fn apply_to_object(&self, tree: &Value) -> Result<Map<String, Value>, SubstitutionError> {
        self.run(tree).into_object()
    }

    fn rebuild(&self, tree: &Value, replacements: &mut usize) -> Value {
        let mut root = match self.descend(tree, replacements) {
            Descent::Leaf(value) => return value,
            Descent::Container(frame) => frame,
        };
        let mut stack: Vec<Frame<'_>> = Vec::new();
        loop {
            let frame = stack.last_mut().unwrap_or(&mut root);
            match frame.next_child() {
                Some(child) => match self.descend(child, replacements) {
                    Descent::Leaf(value) => frame.accept(value),
                    Descent::Container(child_frame) => stack.push(child_frame),
                },
                None => match stack.pop() {
                    Some(done) => stack.last_mut().unwrap_or(&mut root).accept(done.finish()),
                    None => return root.finish(),
                },
            }
        }
    }

    fn descend<'v>(&self, node: &'v Value, replacements: &mut usize) -> Descent<'v> {
        match node {
            Value::String(text) => match self.rules.get(text) {
                Some(replacement) => {
                    *replacements += 1;
                    Descent::Leaf(replacement.clone())
                }
                None => Descent::Leaf(node.clone()),
            },
            Value::Array(elements) => Descent::Container(Frame::Array {
                pending: elements.iter(),
                done: Vec::with_capacity(elements.len()),
            }),
            Value::Object(members) => Descent::Container(Frame::Object {
                pending: members.iter(),
                key: None,
                done: Map::with_capacity(members.len()),
            }),
            Value::Null | Value::Bool(_) | Value::Number(_) => Descent::Leaf(node.clone()),
        }
    }
}

/// Substitute `tree` with `rules` in a single pass.
pub fn apply(rules: &RuleSet, tree: &Value) -> Value {
    Substitutor::new(rules).apply(tree)
}

enum Descent<'v> {
    Leaf(Value),
    Container(Frame<'v>),
}

/// A partially rebuilt container: source children still to visit, plus the
/// substituted children produced so far.
enum Frame<'v> {
    Array {
        pending: std::slice::Iter<'v, Value>,
        done: Vec<Value>,
    },
    Object {
        pending: map::Iter<'v>,
        /// Key of the member currently being rebuilt.
        key: Option<&'v str>,
        done: Map<String, Value>,
    },
}

impl<'v> Frame<'v> {
    fn next_child(&mut self) -> Option<&'v Value> {
        match self {
            Frame::Array { pending, .. } => pending.next(),
            Frame::Object { pending, key, .. } => pending.next().map(|(name, value)| {
                *key = Some(name.as_str());
                value
            }),
        }
    }

    fn accept(&mut self, value: Value) {
        match self {
            Frame::Array { done, .. } => done.push(value),
            Frame::Object { key, done, .. } => {
                if let Some(name) = key.take() {
                    done.insert(name.to_string(), value);
                }
            }
        }
    }

    fn finish(self) -> Value {
        match self {
            Frame::Array { done, .. } => Value::Array(done),
            Frame::Object { done, .. } => Value::Object(done),
        }
    }
}
