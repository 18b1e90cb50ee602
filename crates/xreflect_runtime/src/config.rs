//! JSON configuration.
//!
//! A config file seeds a [`Session`](crate::Session) with imports, package
//! aliases and extra registry classes:
//!
//! ```json
//! {
//!   "imports": { "Player": "org.bukkit.entity.Player" },
//!   "aliases": [["nms", "net.minecraft.server"]],
//!   "classes": ["org.bukkit.entity.Player"],
//!   "permissive": false
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use xreflect_foundation::{ClassRegistry, Error, ImportTable, PackageAliases, Result};
use xreflect_parser::ResolutionContext;

/// Session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Simple name to type expression (`"Grid": "int[][]"` is allowed).
    pub imports: BTreeMap<String, String>,
    /// Placeholder package prefixes and their replacements, applied in order.
    pub aliases: Vec<(String, String)>,
    /// Extra binary class names known to the registry.
    pub classes: Vec<String>,
    /// Accept any well-formed qualified name.
    pub permissive: bool,
}

impl Config {
    /// Parses a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a config error if the JSON is malformed or has unknown keys.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a config error if
    /// it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;
        let config = Self::from_json(&text)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
        debug!(
            "loaded {} with {} imports, {} aliases, {} classes",
            path.display(),
            config.imports.len(),
            config.aliases.len(),
            config.classes.len()
        );
        Ok(config)
    }

    /// Serializes the config as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an internal error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::internal(e.to_string()))
    }

    /// Builds the class registry: standard or permissive, plus `classes`.
    #[must_use]
    pub fn registry(&self) -> ClassRegistry {
        let mut registry = if self.permissive {
            ClassRegistry::permissive()
        } else {
            ClassRegistry::standard()
        };
        for class in &self.classes {
            registry.register(class.as_str());
        }
        registry
    }

    /// The package alias table.
    #[must_use]
    pub fn package_aliases(&self) -> PackageAliases {
        self.aliases.iter().cloned().collect()
    }

    /// Resolves every import against the built-ins and `registry`.
    ///
    /// # Errors
    ///
    /// Returns a config error naming the first import that does not resolve.
    pub fn import_table(&self, registry: &ClassRegistry) -> Result<ImportTable> {
        let ctx = ResolutionContext::new(registry);
        self.imports
            .iter()
            .map(|(name, expression)| {
                ctx.resolve(expression)
                    .map(|ty| (name.clone(), ty))
                    .map_err(|e| Error::config(format!("import {name}: {e}")))
            })
            .collect()
    }
}
