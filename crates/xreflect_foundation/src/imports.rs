//! Import tables and package aliases.
//!
//! Both are read-only inputs to declaration parsing: an [`ImportTable`]
//! maps short type names to resolved types, and [`PackageAliases`]
//! rewrites placeholder package segments to real package paths.

use std::fmt;

use im::OrdMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Type;

/// An immutable snapshot of short-name imports.
///
/// Backed by a persistent map, so cloning a snapshot is cheap and later
/// changes to the source table never show through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImportTable {
    entries: OrdMap<String, Type>,
}

impl ImportTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a table with `name` mapped to `ty`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.insert(name, ty);
        self
    }

    /// Maps `name` to `ty`, returning the previous mapping.
    pub fn insert(&mut self, name: impl Into<String>, ty: Type) -> Option<Type> {
        self.entries.insert(name.into(), ty)
    }

    /// Looks up a short name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.entries.get(name)
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Type)> {
        self.entries.iter()
    }

    /// Number of imports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is imported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Type)> for ImportTable {
    fn from_iter<I: IntoIterator<Item = (String, Type)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ImportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, ty)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={ty}")?;
        }
        f.write_str("}")
    }
}

/// A source of imports for type resolution.
///
/// Parsers call [`Namespace::imports`] at most once per parse and keep the
/// returned snapshot for the rest of it.
pub trait Namespace {
    /// Returns the current short-name imports.
    fn imports(&self) -> ImportTable;
}

impl Namespace for ImportTable {
    fn imports(&self) -> ImportTable {
        self.clone()
    }
}

/// Ordered placeholder → real package path substitutions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PackageAliases {
    entries: Vec<(String, String)>,
}

impl PackageAliases {
    /// Creates an empty alias table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table with `alias` mapped to `path`, appended last.
    #[must_use]
    pub fn with(mut self, alias: impl Into<String>, path: impl Into<String>) -> Self {
        self.push(alias, path);
        self
    }

    /// Appends a substitution.
    pub fn push(&mut self, alias: impl Into<String>, path: impl Into<String>) {
        self.entries.push((alias.into(), path.into()));
    }

    /// Rewrites every `"{alias}."` in `package` to `"{path}."`.
    ///
    /// Entries are applied one at a time in table order, each to the output
    /// of the previous one. Only segments followed by a dot are rewritten,
    /// so `package nms;` alone is left as is.
    #[must_use]
    pub fn apply(&self, package: &str) -> String {
        let mut rewritten = package.to_string();
        for (alias, path) in &self.entries {
            rewritten = rewritten.replace(&format!("{alias}."), &format!("{path}."));
        }
        rewritten
    }

    /// Iterates entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, p)| (a.as_str(), p.as_str()))
    }

    /// Returns true if there are no substitutions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: Into<String>, P: Into<String>> FromIterator<(A, P)> for PackageAliases {
    fn from_iter<I: IntoIterator<Item = (A, P)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(a, p)| (a.into(), p.into()))
                .collect(),
        }
    }
}
