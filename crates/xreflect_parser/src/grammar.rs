//! Declaration grammars.
//!
//! Each declaration kind is a single anchored regular expression built from
//! a few shared fragments. A declaration is accepted only if the whole
//! string matches; the named groups then carry the parts the parser needs.
//!
//! # Fragments
//!
//! - [`IDENTIFIER`] - names: letters, digits, `_` and `$`
//! - [`TYPE_EXPRESSION`] - dotted names with at most one `<...>` block and
//!   any number of trailing `[]` pairs
//! - [`MODIFIERS`] - zero or more whitespace-terminated modifier keywords,
//!   captured together as `flags`
//!
//! # Grammars
//!
//! | Grammar | Used for | Groups |
//! |---------|----------|--------|
//! | [`Grammar::Class`] | class headers | `package`, `flags`, `class_kind`, `class_name`, `superclass`, `interface` |
//! | [`Grammar::Member`] | methods, constructors | `flags`, `return_type`, `method_name`, `parameters` |
//! | [`Grammar::Field`] | fields | `flags`, `field_type`, `field_name` |

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use xreflect_foundation::{DeclarationKind, Modifier};

/// A name: one or more letters, digits, underscores or currency signs.
pub const IDENTIFIER: &str = r"[A-Za-z0-9_$]+";

/// A type expression: a possibly qualified name, one optional generic
/// block without nested angle brackets, then any number of `[]` pairs.
pub const TYPE_EXPRESSION: &str = r"[A-Za-z0-9_$.]+(?:<[A-Za-z0-9_$.,? \[\]]+>)?(?:\[\])*";

/// The optional `flags` group of whitespace-separated modifier keywords.
///
/// Keywords match case-insensitively and each must be followed by
/// whitespace.
pub static MODIFIERS: Lazy<String> = Lazy::new(|| {
    let keywords = Modifier::ALL
        .iter()
        .map(|m| m.keyword())
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?P<flags>(?:(?i:{keywords})\s+)+)?")
});

/// Wraps the identifier fragment in a named group.
#[must_use]
pub fn identifier(group: &str) -> String {
    format!("(?P<{group}>{IDENTIFIER})")
}

/// Wraps the type-expression fragment in a named group.
#[must_use]
pub fn type_expression(group: &str) -> String {
    format!("(?P<{group}>{TYPE_EXPRESSION})")
}

fn anchored(body: &str) -> Regex {
    Regex::new(&format!("^(?:{body})$")).expect("declaration grammar is a valid pattern")
}

static CLASS: Lazy<Regex> = Lazy::new(|| {
    let package = format!(r"(?:package\s+(?P<package>(?:{IDENTIFIER}|\.)+)\s*;\s*)?");
    let qualified = r"[A-Za-z0-9_$.]+";
    anchored(&format!(
        r"{package}{modifiers}(?P<class_kind>class|interface|enum)\s+{name}(?:\s+extends\s+(?P<superclass>{qualified}))?(?:\s+implements\s+(?P<interface>{qualified}))?(?:\s*\{{\s*\}})?\s*",
        modifiers = *MODIFIERS,
        name = identifier("class_name"),
    ))
});

static MEMBER: Lazy<Regex> = Lazy::new(|| {
    let parameter = format!(r"{TYPE_EXPRESSION}\s+{IDENTIFIER}");
    anchored(&format!(
        r"{modifiers}{return_type}\s+{name}\s*\(\s*(?P<parameters>{parameter}(?:\s*,\s*{parameter})*)?\s*\)\s*;\s*",
        modifiers = *MODIFIERS,
        return_type = type_expression("return_type"),
        name = identifier("method_name"),
    ))
});

static FIELD: Lazy<Regex> = Lazy::new(|| {
    anchored(&format!(
        r"{modifiers}{field_type}\s+{name}\s*;\s*",
        modifiers = *MODIFIERS,
        field_type = identifier("field_type"),
        name = identifier("field_name"),
    ))
});

/// One of the compiled declaration grammars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// Optional package clause plus a class, interface or enum header.
    Class,
    /// Method signature; constructors share it.
    Member,
    /// Field declaration with a simple (identifier) type.
    Field,
}

impl Grammar {
    /// The grammar a declaration kind is matched against.
    #[must_use]
    pub const fn for_kind(kind: DeclarationKind) -> Self {
        match kind {
            DeclarationKind::Class => Self::Class,
            DeclarationKind::Method | DeclarationKind::Constructor => Self::Member,
            DeclarationKind::Field => Self::Field,
        }
    }

    /// The compiled, anchored expression.
    #[must_use]
    pub fn regex(self) -> &'static Regex {
        match self {
            Self::Class => &CLASS,
            Self::Member => &MEMBER,
            Self::Field => &FIELD,
        }
    }

    /// The pattern source, as reported in errors.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        self.regex().as_str()
    }

    /// Matches the whole input, or returns `None`.
    #[must_use]
    pub fn captures(self, input: &str) -> Option<GrammarMatch<'_>> {
        self.regex()
            .captures(input)
            .map(|captures| GrammarMatch { captures })
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Class => "class",
            Self::Member => "member",
            Self::Field => "field",
        })
    }
}

/// A successful full-string match.
#[derive(Debug)]
pub struct GrammarMatch<'t> {
    captures: Captures<'t>,
}

impl<'t> GrammarMatch<'t> {
    /// Text of a named group; `None` if it did not participate or is empty.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&'t str> {
        self.captures
            .name(name)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Text of a group the grammar always captures.
    ///
    /// Returns an empty string if the group is absent.
    #[must_use]
    pub fn required(&self, name: &str) -> &'t str {
        self.group(name).unwrap_or_default()
    }
}
