//! CSS Tree-sitter Node Kind Constants
//!
//! Node kinds produced by tree-sitter-css, plus the handful of CSS names the
//! lint rules compare against. Centralizing these constants helps prevent
//! mistakes when the grammar is updated.

// Basic structural nodes
/// Root node of the CSS syntax tree
pub const NODE_STYLESHEET: &str = "stylesheet";
/// A CSS rule containing selectors and a declaration block
pub const NODE_RULE_SET: &str = "rule_set";
/// A block of declarations enclosed in curly braces
pub const NODE_BLOCK: &str = "block";
/// A single property-value pair (e.g., `color: red;`)
pub const NODE_DECLARATION: &str = "declaration";
/// Container for one or more selectors
pub const NODE_SELECTORS: &str = "selectors";

// Property and value nodes
/// CSS property name (e.g., `color`, `-webkit-transition`)
pub const NODE_PROPERTY_NAME: &str = "property_name";
/// Plain identifier value (e.g., `red`, `inline-block`)
pub const NODE_PLAIN_VALUE: &str = "plain_value";
/// Hex color value (e.g., `#ff0000`)
pub const NODE_COLOR_VALUE: &str = "color_value";
/// Integer numeric value (e.g., `10`, `0px`)
pub const NODE_INTEGER_VALUE: &str = "integer_value";
/// Floating-point numeric value (e.g., `1.5`, `0.0em`)
pub const NODE_FLOAT_VALUE: &str = "float_value";
/// CSS unit identifier (e.g., `px`, `%`, `em`)
pub const NODE_UNIT: &str = "unit";
/// `!important` priority flag
pub const NODE_IMPORTANT: &str = "important";

// Function calls
/// CSS function call (e.g., `rgb()`, `calc()`)
pub const NODE_CALL_EXPRESSION: &str = "call_expression";
/// Name of a CSS function (e.g., `rgb`, `calc`)
pub const NODE_FUNCTION_NAME: &str = "function_name";
/// Arguments passed to a CSS function
pub const NODE_ARGUMENTS: &str = "arguments";

// Selector types
/// `*`
pub const NODE_UNIVERSAL_SELECTOR: &str = "universal_selector";
/// CSS ID selector (e.g., `#my-id`)
pub const NODE_ID_SELECTOR: &str = "id_selector";
/// CSS class selector (e.g., `.my-class`)
pub const NODE_CLASS_SELECTOR: &str = "class_selector";
/// CSS pseudo-class selector (e.g., `:hover`)
pub const NODE_PSEUDO_CLASS_SELECTOR: &str = "pseudo_class_selector";
/// CSS pseudo-element selector (e.g., `::before`)
pub const NODE_PSEUDO_ELEMENT_SELECTOR: &str = "pseudo_element_selector";
/// CSS attribute selector (e.g., `[type="text"]`)
pub const NODE_ATTRIBUTE_SELECTOR: &str = "attribute_selector";

// At-rules
/// Generic CSS at-rule (e.g., `@font-face`, `@page`)
pub const NODE_AT_RULE: &str = "at_rule";
/// At-rule with values but no block, only recognised inside blocks
pub const NODE_POSTCSS_STATEMENT: &str = "postcss_statement";
/// The `@name` keyword of a generic at-rule
pub const NODE_AT_KEYWORD: &str = "at_keyword";
/// CSS import statement for external stylesheets
pub const NODE_IMPORT_STATEMENT: &str = "import_statement";
/// CSS keyframes animation definition
pub const NODE_KEYFRAMES_STATEMENT: &str = "keyframes_statement";
/// Animation name of a keyframes statement
pub const NODE_KEYFRAMES_NAME: &str = "keyframes_name";
/// Body of a keyframes statement
pub const NODE_KEYFRAME_BLOCK_LIST: &str = "keyframe_block_list";

// Comments
/// CSS comment block (e.g., `/* comment */`)
pub const NODE_COMMENT: &str = "comment";
/// `//` comment, accepted by the grammar for preprocessor sources
pub const NODE_JS_COMMENT: &str = "js_comment";

// Error and special nodes
/// Tree-sitter error node for syntax errors
pub const NODE_ERROR: &str = "ERROR";

// Names compared by the lint rules
/// The standard keyframes keyword
pub const KEYWORD_AT_KEYFRAMES: &str = "@keyframes";
/// The font-face at-rule keyword
pub const KEYWORD_AT_FONT_FACE: &str = "@font-face";
/// Selector of CSS-modules export blocks, which hold arbitrary keys
pub const SELECTOR_EXPORT: &str = ":export";

/// Vendor prefixes checked for completeness, in reporting order
pub const VENDOR_PREFIXES: [&str; 4] = ["-ms-", "-moz-", "-o-", "-webkit-"];

/// Vendor spellings of `@keyframes`
pub const KEYFRAMES_VENDOR_KEYWORDS: [&str; 3] =
    ["@-webkit-keyframes", "@-moz-keyframes", "@-o-keyframes"];

/// Units that make a zero length redundant
pub const LENGTH_UNITS: [&str; 14] = [
    "em", "rem", "ex", "px", "cm", "mm", "in", "pt", "pc", "ch", "vw", "vh", "vmin", "vmax",
];

/// Returns true for comment nodes, which never count as block content
pub fn is_comment(kind: &str) -> bool {
    kind == NODE_COMMENT || kind == NODE_JS_COMMENT
}
