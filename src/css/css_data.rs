//! CSS Knowledge Base
//!
//! Answers which property and at-rule names are known, and which properties
//! are standard. The lint visitor only talks to the [`CssDataProvider`] trait;
//! [`CssDataManager`] is the built-in implementation, extendable with custom
//! data files in the editor custom-data format:
//!
//! ```json
//! {
//!   "properties": [{ "name": "-x-foo", "status": "nonstandard" }],
//!   "atDirectives": [{ "name": "@tailwind" }]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::css::property_data::{
    AT_DIRECTIVES, NON_STANDARD_PROPERTIES, STANDARD_PROPERTIES, VENDOR_PREFIXED_PROPERTIES,
};
use crate::error::{IoContext, LintError, LintResult};

/// Standardization status of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Standard,
    Experimental,
    Nonstandard,
    Obsolete,
}

/// A known property
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyData {
    pub name: String,
    /// Missing status means standard
    #[serde(default)]
    pub status: Option<EntryStatus>,
}

/// A known at-rule
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AtDirectiveData {
    pub name: String,
}

/// Contents of a custom data file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomData {
    #[serde(default)]
    pub properties: Vec<PropertyData>,
    #[serde(default)]
    pub at_directives: Vec<AtDirectiveData>,
}

impl CustomData {
    /// Read a custom data file
    pub fn load(path: &Path) -> LintResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_io_context(&format!("Failed to read custom data {}", path.display()))?;
        serde_json::from_str(&text).map_err(|source| LintError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Queries the lint visitor makes against the knowledge base
pub trait CssDataProvider {
    /// Whether the property name is known at all
    fn is_known_property(&self, name: &str) -> bool;
    /// Whether the property is known and on the standards track
    fn is_standard_property(&self, name: &str) -> bool;
    /// Look up an at-rule keyword such as `@media`
    fn get_at_directive(&self, name: &str) -> Option<&AtDirectiveData>;
}

/// Built-in knowledge base plus any custom data added to it
#[derive(Debug, Clone)]
pub struct CssDataManager {
    properties: HashMap<String, PropertyData>,
    at_directives: HashMap<String, AtDirectiveData>,
}

impl CssDataManager {
    /// A knowledge base with nothing in it
    pub fn empty() -> Self {
        Self {
            properties: HashMap::new(),
            at_directives: HashMap::new(),
        }
    }

    /// The built-in property and at-rule data
    pub fn new() -> Self {
        let mut manager = Self::empty();

        for name in STANDARD_PROPERTIES {
            manager.add_property(name, None);
        }
        for (root, prefixes) in VENDOR_PREFIXED_PROPERTIES {
            for prefix in prefixes.iter() {
                manager.add_property(&format!("{prefix}{root}"), None);
            }
        }
        for (name, status) in NON_STANDARD_PROPERTIES {
            manager.add_property(name, Some(*status));
        }
        for name in AT_DIRECTIVES {
            manager.add_at_directive(name);
        }

        manager
    }

    /// Register a property, replacing an existing entry of the same name
    pub fn add_property(&mut self, name: &str, status: Option<EntryStatus>) {
        let key = name.to_lowercase();
        self.properties.insert(
            key.clone(),
            PropertyData { name: key, status },
        );
    }

    /// Register an at-rule keyword
    pub fn add_at_directive(&mut self, name: &str) {
        let key = name.to_lowercase();
        self.at_directives
            .insert(key.clone(), AtDirectiveData { name: key });
    }

    /// Merge the contents of a custom data file
    pub fn add_custom_data(&mut self, data: CustomData) {
        log::debug!(
            "Adding custom data: {} properties, {} at-directives",
            data.properties.len(),
            data.at_directives.len()
        );
        for property in data.properties {
            self.add_property(&property.name, property.status);
        }
        for directive in data.at_directives {
            self.add_at_directive(&directive.name);
        }
    }

    /// Number of known properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

impl Default for CssDataManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CssDataProvider for CssDataManager {
    fn is_known_property(&self, name: &str) -> bool {
        self.properties.contains_key(&name.to_lowercase())
    }

    fn is_standard_property(&self, name: &str) -> bool {
        match self.properties.get(&name.to_lowercase()) {
            Some(property) => matches!(property.status, None | Some(EntryStatus::Standard)),
            None => false,
        }
    }

    fn get_at_directive(&self, name: &str) -> Option<&AtDirectiveData> {
        self.at_directives.get(&name.to_lowercase())
    }
}
