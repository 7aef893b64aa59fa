use std::collections::HashSet;
use std::sync::Arc;

use crate::ast::{collect_names, Block, Name};
use crate::dialect::Dialect;

/// Hands out names that are unique across a compilation unit.
///
/// A name is never returned twice, never collides with a name already present
/// in the IR the dispenser was seeded with, and never shadows a builtin.
pub struct NameDispenser {
    dialect: Arc<dyn Dialect>,
    used: HashSet<Name>,
    counter: u64,
}

impl NameDispenser {
    pub fn new(dialect: Arc<dyn Dialect>, used: HashSet<Name>) -> Self {
        Self {
            dialect,
            used,
            counter: 0,
        }
    }

    pub fn from_block(dialect: Arc<dyn Dialect>, block: &Block) -> Self {
        Self::new(dialect, collect_names(block))
    }

    /// Returns `hint` itself when free, otherwise `{hint}_{n}` for the next
    /// free counter value. No hint yields `_1`, `_2`, ...
    pub fn new_name(&mut self, hint: Option<&str>) -> Name {
        let hint = hint.unwrap_or("");
        let mut name = Name::new(hint);
        while self.is_illegal(&name) {
            self.counter += 1;
            name = Name::new(format!("{}_{}", hint, self.counter));
        }
        self.used.insert(name.clone());
        name
    }

    /// The dialect whose builtin names are reserved.
    pub fn dialect(&self) -> &Arc<dyn Dialect> {
        &self.dialect
    }

    pub fn mark_used(&mut self, name: impl Into<Name>) {
        self.used.insert(name.into());
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    fn is_illegal(&self, name: &Name) -> bool {
        name.is_empty() || self.used.contains(name) || self.dialect.is_reserved_name(name.as_str())
    }
}
