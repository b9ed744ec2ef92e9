//! Lint rules, severity levels and the user settings that configure them

use std::collections::{HashMap, HashSet};
use std::ops::BitOr;

use serde::Deserialize;

/// Severity of a lint rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Ignore,
    Warning,
    Error,
}

impl Level {
    fn bit(self) -> u8 {
        match self {
            Level::Ignore => 1,
            Level::Warning => 2,
            Level::Error => 4,
        }
    }

    /// Parse a level as written in settings
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "ignore" => Some(Level::Ignore),
            "warning" => Some(Level::Warning),
            "error" => Some(Level::Error),
            _ => None,
        }
    }
}

/// Set of levels used to filter markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelMask(u8);

impl LevelMask {
    pub const ALL: LevelMask = LevelMask(1 | 2 | 4);

    pub fn contains(self, level: Level) -> bool {
        self.0 & level.bit() != 0
    }
}

impl Default for LevelMask {
    /// Warnings and errors
    fn default() -> Self {
        Level::Warning | Level::Error
    }
}

impl From<Level> for LevelMask {
    fn from(level: Level) -> Self {
        LevelMask(level.bit())
    }
}

impl BitOr for Level {
    type Output = LevelMask;

    fn bitor(self, rhs: Level) -> LevelMask {
        LevelMask(self.bit() | rhs.bit())
    }
}

impl BitOr<Level> for LevelMask {
    type Output = LevelMask;

    fn bitor(self, rhs: Level) -> LevelMask {
        LevelMask(self.0 | rhs.bit())
    }
}

/// Every check the lint visitor performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    AllVendorPrefixes,
    IncludeStandardPropertyWhenUsingVendorPrefix,
    DuplicateDeclarations,
    EmptyRuleSet,
    ImportStatement,
    BewareOfBoxModelSize,
    UniversalSelector,
    ZeroWithUnit,
    RequiredPropertiesForFontFace,
    HexColorLength,
    ArgsInColorFunction,
    UnknownProperty,
    UnknownAtRules,
    IEStarHack,
    UnknownVendorSpecificProperty,
    PropertyIgnoredDueToDisplay,
    AvoidImportant,
    AvoidFloat,
    AvoidIdSelector,
}

impl Rule {
    pub const ALL: [Rule; 19] = [
        Rule::AllVendorPrefixes,
        Rule::IncludeStandardPropertyWhenUsingVendorPrefix,
        Rule::DuplicateDeclarations,
        Rule::EmptyRuleSet,
        Rule::ImportStatement,
        Rule::BewareOfBoxModelSize,
        Rule::UniversalSelector,
        Rule::ZeroWithUnit,
        Rule::RequiredPropertiesForFontFace,
        Rule::HexColorLength,
        Rule::ArgsInColorFunction,
        Rule::UnknownProperty,
        Rule::UnknownAtRules,
        Rule::IEStarHack,
        Rule::UnknownVendorSpecificProperty,
        Rule::PropertyIgnoredDueToDisplay,
        Rule::AvoidImportant,
        Rule::AvoidFloat,
        Rule::AvoidIdSelector,
    ];

    /// Identifier used in settings and as the diagnostic code
    pub fn id(self) -> &'static str {
        match self {
            Rule::AllVendorPrefixes => "compatibleVendorPrefixes",
            Rule::IncludeStandardPropertyWhenUsingVendorPrefix => "vendorPrefix",
            Rule::DuplicateDeclarations => "duplicateProperties",
            Rule::EmptyRuleSet => "emptyRules",
            Rule::ImportStatement => "importStatement",
            Rule::BewareOfBoxModelSize => "boxModel",
            Rule::UniversalSelector => "universalSelector",
            Rule::ZeroWithUnit => "zeroUnits",
            Rule::RequiredPropertiesForFontFace => "fontFaceProperties",
            Rule::HexColorLength => "hexColorLength",
            Rule::ArgsInColorFunction => "argumentsInColorFunction",
            Rule::UnknownProperty => "unknownProperties",
            Rule::UnknownAtRules => "unknownAtRules",
            Rule::IEStarHack => "ieHack",
            Rule::UnknownVendorSpecificProperty => "unknownVendorSpecificProperties",
            Rule::PropertyIgnoredDueToDisplay => "propertyIgnoredDueToDisplay",
            Rule::AvoidImportant => "important",
            Rule::AvoidFloat => "float",
            Rule::AvoidIdSelector => "idSelector",
        }
    }

    /// Message shown when a marker carries no detail
    pub fn message(self) -> &'static str {
        match self {
            Rule::AllVendorPrefixes => "When using a vendor-specific prefix make sure to also include all other vendor-specific properties",
            Rule::IncludeStandardPropertyWhenUsingVendorPrefix => "When using a vendor-specific prefix also include the standard property",
            Rule::DuplicateDeclarations => "Do not use duplicate style definitions",
            Rule::EmptyRuleSet => "Do not use empty rulesets",
            Rule::ImportStatement => "Import statements do not load in parallel",
            Rule::BewareOfBoxModelSize => "Do not use width or height when using padding or border",
            Rule::UniversalSelector => "The universal selector (*) is known to be slow",
            Rule::ZeroWithUnit => "No unit for zero needed",
            Rule::RequiredPropertiesForFontFace => "@font-face rule must define 'src' and 'font-family' properties",
            Rule::HexColorLength => "Hex colors must consist of three, four, six or eight hex numbers",
            Rule::ArgsInColorFunction => "Invalid number of parameters",
            Rule::UnknownProperty => "Unknown property.",
            Rule::UnknownAtRules => "Unknown at-rule.",
            Rule::IEStarHack => "IE hacks are only necessary when supporting IE7 and older",
            Rule::UnknownVendorSpecificProperty => "Unknown vendor specific property.",
            Rule::PropertyIgnoredDueToDisplay => "Property is ignored due to the display.",
            Rule::AvoidImportant => "Avoid using !important. It is an indication that the specificity of the entire CSS has gotten out of control and needs to be refactored.",
            Rule::AvoidFloat => "Avoid using 'float'. Floats lead to fragile CSS that is easy to break if one aspect of the layout changes.",
            Rule::AvoidIdSelector => "Selectors should not contain IDs because these rules are too tightly coupled with the HTML.",
        }
    }

    pub fn default_level(self) -> Level {
        match self {
            Rule::IncludeStandardPropertyWhenUsingVendorPrefix
            | Rule::EmptyRuleSet
            | Rule::RequiredPropertiesForFontFace
            | Rule::UnknownProperty
            | Rule::UnknownAtRules
            | Rule::PropertyIgnoredDueToDisplay => Level::Warning,
            Rule::HexColorLength | Rule::ArgsInColorFunction => Level::Error,
            Rule::AllVendorPrefixes
            | Rule::DuplicateDeclarations
            | Rule::ImportStatement
            | Rule::BewareOfBoxModelSize
            | Rule::UniversalSelector
            | Rule::ZeroWithUnit
            | Rule::IEStarHack
            | Rule::UnknownVendorSpecificProperty
            | Rule::AvoidImportant
            | Rule::AvoidFloat
            | Rule::AvoidIdSelector => Level::Ignore,
        }
    }

    pub fn from_id(id: &str) -> Option<Rule> {
        Rule::ALL.into_iter().find(|rule| rule.id() == id)
    }
}

/// Lint settings as written by the user
///
/// Rule levels sit at the top level next to `validProperties`:
/// `{ "emptyRules": "error", "validProperties": ["composes"] }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintSettings {
    /// Property names exempt from unknown-property and related checks
    #[serde(default)]
    pub valid_properties: Vec<String>,
    /// Rule id to level name
    #[serde(flatten)]
    pub rules: HashMap<String, serde_json::Value>,
}

impl LintSettings {
    /// Set a rule level, mostly useful in tests and for CLI overrides
    pub fn with_rule(mut self, rule: Rule, level: Level) -> Self {
        let name = match level {
            Level::Ignore => "ignore",
            Level::Warning => "warning",
            Level::Error => "error",
        };
        self.rules
            .insert(rule.id().to_string(), serde_json::Value::String(name.to_string()));
        self
    }

    pub fn with_valid_properties(mut self, names: &[&str]) -> Self {
        self.valid_properties
            .extend(names.iter().map(|name| name.to_string()));
        self
    }
}

/// Settings resolved for one analysis: a level per rule and the normalized
/// valid-property set
#[derive(Debug, Clone)]
pub struct LintConfigurationSettings {
    levels: HashMap<Rule, Level>,
    valid_properties: HashSet<String>,
}

impl LintConfigurationSettings {
    pub fn new(settings: &LintSettings) -> Self {
        let mut levels = HashMap::new();
        for rule in Rule::ALL {
            let configured = settings
                .rules
                .get(rule.id())
                .and_then(|value| value.as_str())
                .and_then(Level::from_setting);
            levels.insert(rule, configured.unwrap_or_else(|| rule.default_level()));
        }

        for key in settings.rules.keys() {
            if Rule::from_id(key).is_none() {
                log::debug!("Ignoring unknown lint setting '{}'", key);
            }
        }

        let valid_properties = settings
            .valid_properties
            .iter()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();

        Self {
            levels,
            valid_properties,
        }
    }

    /// Resolved level of a rule
    pub fn get_rule(&self, rule: Rule) -> Level {
        self.levels
            .get(&rule)
            .copied()
            .unwrap_or_else(|| rule.default_level())
    }

    /// Whether the user declared this (lower-cased) property name valid
    pub fn is_valid_property(&self, name: &str) -> bool {
        self.valid_properties.contains(name)
    }
}

impl Default for LintConfigurationSettings {
    fn default() -> Self {
        Self::new(&LintSettings::default())
    }
}
