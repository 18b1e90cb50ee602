//! Declaration kinds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of declaration being parsed. Selects the grammar and the shape
/// of the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeclarationKind {
    /// A package and class/interface/enum header.
    Class,
    /// A field declaration.
    Field,
    /// A method signature.
    Method,
    /// A constructor signature.
    Constructor,
}

impl DeclarationKind {
    /// Every kind.
    pub const ALL: [Self; 4] = [Self::Class, Self::Field, Self::Method, Self::Constructor];

    /// Lowercase name used in messages and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Field => "field",
            Self::Method => "method",
            Self::Constructor => "constructor",
        }
    }

    /// Looks up a kind by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
