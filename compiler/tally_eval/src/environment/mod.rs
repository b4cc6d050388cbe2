//! Variable scopes.
//!
//! An [`Environment`] is one frame of bindings plus an optional borrowed
//! parent. Lookup walks the chain outward; assignment only ever writes the
//! local frame, so a binding in a parent is shadowed, never overwritten.

use std::fmt::Write as _;

use rustc_hash::FxHashMap;
use tally_ir::{Name, StringInterner};

use crate::Value;

/// A scope frame with an optional parent.
///
/// The parent is borrowed immutably for the child's lifetime, so evaluation
/// can never mutate it.
#[derive(Default)]
pub struct Environment<'p> {
    vars: FxHashMap<Name, Value>,
    parent: Option<&'p Environment<'p>>,
}

impl<'p> Environment<'p> {
    /// Create an empty root scope.
    pub fn new() -> Self {
        Environment {
            vars: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create an empty scope whose lookups fall back to `parent`.
    pub fn with_parent(parent: &'p Environment<'p>) -> Self {
        Environment {
            vars: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Look up a variable, searching this frame and then each parent.
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        let mut scope = Some(self);
        while let Some(env) = scope {
            if let Some(value) = env.vars.get(&name) {
                return Some(value);
            }
            scope = env.parent;
        }
        None
    }

    /// Look up a variable in this frame only.
    pub fn get_local(&self, name: Name) -> Option<&Value> {
        self.vars.get(&name)
    }

    /// Bind `name` in this frame, replacing any local binding.
    pub fn assign(&mut self, name: Name, value: Value) {
        self.vars.insert(name, value);
    }

    /// Number of bindings in this frame.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Render the whole chain for diagnostics.
    ///
    /// Bindings are sorted by name; the parent appears under `$parent`:
    /// `{y: 5, $parent: {x: 4}}`.
    pub fn dump(&self, interner: &StringInterner) -> String {
        let mut entries: Vec<(&str, &Value)> = self
            .vars
            .iter()
            .map(|(name, value)| (interner.lookup(*name), value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut out = String::from("{");
        for (i, (name, value)) in entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{name}: {value}");
        }
        if let Some(parent) = self.parent {
            if !entries.is_empty() {
                out.push_str(", ");
            }
            out.push_str("$parent: ");
            out.push_str(&parent.dump(interner));
        }
        out.push('}');
        out
    }
}
