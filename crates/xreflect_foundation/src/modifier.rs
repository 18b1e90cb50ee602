//! Declaration modifiers.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A modifier keyword.
///
/// Variants are declared in canonical source order, which is also the
/// order a [`Modifiers`] set iterates and displays in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `abstract`
    Abstract,
    /// `static`
    Static,
    /// `final`
    Final,
    /// `transient`
    Transient,
    /// `volatile`
    Volatile,
    /// `synchronized`
    Synchronized,
    /// `native`
    Native,
    /// `strictfp`
    Strictfp,
}

impl Modifier {
    /// The closed set of recognized modifiers.
    pub const ALL: [Self; 11] = [
        Self::Public,
        Self::Protected,
        Self::Private,
        Self::Abstract,
        Self::Static,
        Self::Final,
        Self::Transient,
        Self::Volatile,
        Self::Synchronized,
        Self::Native,
        Self::Strictfp,
    ];

    /// The visibility modifiers; a declaration may carry at most one.
    pub const VISIBILITY: [Self; 3] = [Self::Public, Self::Protected, Self::Private];

    /// The lowercase source keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Static => "static",
            Self::Final => "final",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Strictfp => "strictfp",
        }
    }

    /// Returns true for `public`, `protected` and `private`.
    #[must_use]
    pub const fn is_visibility(self) -> bool {
        matches!(self, Self::Public | Self::Protected | Self::Private)
    }
}

impl FromStr for Modifier {
    type Err = Error;

    /// Parses a keyword, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.keyword().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_modifier(s))
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The set of modifiers carried by one declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Modifiers(BTreeSet<Modifier>);

impl Modifiers {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a modifier; returns false if it was already present.
    pub fn insert(&mut self, modifier: Modifier) -> bool {
        self.0.insert(modifier)
    }

    /// Returns true if the set contains `modifier`.
    #[must_use]
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    /// Returns true if the set contains any of `modifiers`.
    #[must_use]
    pub fn contains_any(&self, modifiers: &[Modifier]) -> bool {
        modifiers.iter().any(|m| self.0.contains(m))
    }

    /// The visibility modifiers present, in canonical order.
    #[must_use]
    pub fn visibilities(&self) -> Vec<Modifier> {
        self.0.iter().copied().filter(|m| m.is_visibility()).collect()
    }

    /// The single visibility modifier, if exactly one is present.
    #[must_use]
    pub fn visibility(&self) -> Option<Modifier> {
        match self.visibilities().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Iterates in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }

    /// Number of modifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no modifiers are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for modifier in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{modifier}")?;
            first = false;
        }
        Ok(())
    }
}
