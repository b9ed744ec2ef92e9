//! CSS Lint Visitor
//!
//! Walks a tree-sitter-css syntax tree once, depth first, and collects
//! [`Marker`]s for style and correctness problems. Rules that compare
//! declarations within a block run when the visitor reaches the `rule_set`;
//! rules that need the whole document (keyframes) run after the walk.
//!
//! A visitor lives for exactly one analysis. All state (markers, keyframes
//! grouping, valid-property set) is owned by it and dropped with it.

use tree_sitter::Node;

use crate::css::box_model::calculate_box_model;
use crate::css::constants::*;
use crate::css::css_data::CssDataProvider;
use crate::css::declaration::{non_prefixed_name, Declaration, Element};
use crate::css::lint_rules::{LevelMask, LintConfigurationSettings, Rule};
use crate::css::marker::Marker;
use crate::css::node_kind::NodeKind;
use crate::css::nodes_by_root::NodesByRootMap;
use crate::css::tree_utils::{char_at, find_ancestor, node_text};

/// Whether the walk should go into a node's children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitResult {
    Continue,
    SkipChildren,
}

pub struct LintVisitor<'a, 'tree> {
    content: &'a str,
    settings: &'a LintConfigurationSettings,
    data: &'a dyn CssDataProvider,
    keyframes: NodesByRootMap<'tree>,
    warnings: Vec<Marker<'tree>>,
}

impl<'a, 'tree> LintVisitor<'a, 'tree> {
    /// Lint a whole tree and return the markers whose level is in `filter`
    pub fn entries(
        root: Node<'tree>,
        content: &'a str,
        settings: &'a LintConfigurationSettings,
        data: &'a dyn CssDataProvider,
        filter: LevelMask,
    ) -> Vec<Marker<'tree>> {
        let mut visitor = LintVisitor::new(content, settings, data);
        visitor.walk(root);
        visitor.complete_validations();
        visitor.get_entries(filter)
    }

    fn new(
        content: &'a str,
        settings: &'a LintConfigurationSettings,
        data: &'a dyn CssDataProvider,
    ) -> Self {
        Self {
            content,
            settings,
            data,
            keyframes: NodesByRootMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Markers whose level is in `filter`, in emission order
    fn get_entries(self, filter: LevelMask) -> Vec<Marker<'tree>> {
        self.warnings
            .into_iter()
            .filter(|marker| filter.contains(marker.level()))
            .collect()
    }

    fn add_entry(&mut self, node: Node<'tree>, rule: Rule, detail: Option<String>) {
        let level = self.settings.get_rule(rule);
        self.warnings.push(Marker::new(node, rule, level, detail));
    }

    fn walk(&mut self, node: Node<'tree>) {
        if self.visit_node(node) == VisitResult::SkipChildren {
            return;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.walk(child);
        }
    }

    fn visit_node(&mut self, node: Node<'tree>) -> VisitResult {
        // placeholders inserted by error recovery have no source text
        if node.is_missing() {
            return VisitResult::SkipChildren;
        }

        match NodeKind::of(&node) {
            NodeKind::RuleSet => self.visit_rule_set(node),
            NodeKind::AtRule => self.visit_at_rule(node),
            NodeKind::Keyframes => self.visit_keyframes(node),
            NodeKind::Import => self.visit_import(node),
            NodeKind::UniversalSelector => self.visit_universal_selector(node),
            NodeKind::IdSelector => self.visit_id_selector(node),
            NodeKind::Function => self.visit_function(node),
            NodeKind::NumericValue => self.visit_numeric_value(node),
            NodeKind::HexColorValue => self.visit_hex_color_value(node),
            NodeKind::Prio => self.visit_prio(node),
            // error recovery output is too unreliable to lint
            NodeKind::Error => VisitResult::SkipChildren,
            NodeKind::Other => VisitResult::Continue,
        }
    }

    fn complete_validations(&mut self) {
        self.validate_keyframes();
    }

    /// Build the quoted list of expected names that were not seen
    fn get_missing_names(expected: &[String], actual: &[String]) -> Option<String> {
        let mut remaining: Vec<Option<&str>> = expected.iter().map(|name| Some(name.as_str())).collect();
        for name in actual {
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(name.as_str())) {
                *slot = None;
            }
        }

        remaining
            .into_iter()
            .flatten()
            .fold(None, |result, missing| match result {
                None => Some(format!("'{}'", missing)),
                Some(prior) => Some(format!("{}, '{}'", prior, missing)),
            })
    }

    fn is_valid_property_declaration(&self, element: &Element) -> bool {
        self.settings.is_valid_property(&element.full_property_name)
    }

    // ---------------------------------------------------------------
    // At-rules
    // ---------------------------------------------------------------

    fn visit_at_rule(&mut self, node: Node<'tree>) -> VisitResult {
        let Some(keyword) = node.child(0).filter(|child| child.kind() == NODE_AT_KEYWORD) else {
            return VisitResult::SkipChildren;
        };
        let keyword_text = node_text(keyword, self.content);

        if keyword_text.eq_ignore_ascii_case(KEYWORD_AT_FONT_FACE) {
            return self.visit_font_face(node);
        }

        // the grammar only recognizes lower-case keyframes keywords
        if keyword_text.to_ascii_lowercase().ends_with("keyframes") {
            return self.visit_keyframes(node);
        }

        if self.data.get_at_directive(keyword_text).is_some() {
            return VisitResult::Continue;
        }

        self.add_entry(
            keyword,
            Rule::UnknownAtRules,
            Some(format!("Unknown at rule {}", keyword_text)),
        );
        VisitResult::SkipChildren
    }

    fn visit_font_face(&mut self, node: Node<'tree>) -> VisitResult {
        let mut cursor = node.walk();
        let Some(block) = node
            .named_children(&mut cursor)
            .find(|child| child.kind() == NODE_BLOCK && !child.is_missing())
        else {
            return VisitResult::SkipChildren;
        };

        let mut defines_src = false;
        let mut defines_font_family = false;
        let mut contains_unknowns = false;

        let mut cursor = block.walk();
        for child in block.named_children(&mut cursor) {
            if is_comment(child.kind()) {
                continue;
            }
            match Declaration::new(child).filter(|d| d.is_css_declaration()) {
                Some(declaration) => {
                    let name = declaration.full_property_name(self.content).to_lowercase();
                    match name.as_str() {
                        "src" => defines_src = true,
                        "font-family" => defines_font_family = true,
                        _ => {}
                    }
                }
                None => contains_unknowns = true,
            }
        }

        if !contains_unknowns && (!defines_src || !defines_font_family) {
            self.add_entry(node, Rule::RequiredPropertiesForFontFace, None);
        }

        VisitResult::Continue
    }

    fn visit_keyframes(&mut self, node: Node<'tree>) -> VisitResult {
        let Some(keyword) = node.child(0).filter(|child| !child.is_missing()) else {
            return VisitResult::SkipChildren;
        };
        let text = node_text(keyword, self.content);

        // a generic at_rule carries the name as its first prelude value
        let mut cursor = node.walk();
        let name = node
            .named_children(&mut cursor)
            .find(|child| {
                child.kind() == NODE_KEYFRAMES_NAME
                    || (child.kind() != NODE_AT_KEYWORD
                        && child.kind() != NODE_BLOCK
                        && child.kind() != NODE_KEYFRAME_BLOCK_LIST
                        && !is_comment(child.kind()))
            })
            .map(|child| node_text(child, self.content))
            .unwrap_or("");

        let markable = (text != KEYWORD_AT_KEYFRAMES).then_some(keyword);
        self.keyframes.add(name, text, markable);
        VisitResult::Continue
    }

    /// Keyframes are grouped by animation name across the whole document.
    /// The groups are evaluated here, but no marker is reported for them.
    fn validate_keyframes(&self) {
        let expected: Vec<String> = KEYFRAMES_VENDOR_KEYWORDS
            .iter()
            .map(|keyword| keyword.to_string())
            .collect();

        for (name, entry) in self.keyframes.iter() {
            let needs_standard = !entry.names.iter().any(|n| n == KEYWORD_AT_KEYFRAMES);
            if !needs_standard && entry.names.len() == 1 {
                continue;
            }
            let missing = Self::get_missing_names(&expected, &entry.names);
            log::trace!(
                "keyframes '{}': spellings {:?}, standard missing: {}, vendor missing: {:?}",
                name,
                entry.names,
                needs_standard,
                missing
            );
        }
    }

    fn visit_import(&mut self, node: Node<'tree>) -> VisitResult {
        // imports don't load in parallel
        self.add_entry(node, Rule::ImportStatement, None);
        VisitResult::Continue
    }

    // ---------------------------------------------------------------
    // Selectors
    // ---------------------------------------------------------------

    fn visit_universal_selector(&mut self, node: Node<'tree>) -> VisitResult {
        // The grammar nests compound selectors (`*.a` is a class_selector
        // holding the `*`), so measure the whole compound selector
        let mut simple_selector = node;
        while let Some(parent) = simple_selector.parent() {
            let compound = matches!(
                parent.kind(),
                NODE_CLASS_SELECTOR
                    | NODE_ID_SELECTOR
                    | NODE_PSEUDO_CLASS_SELECTOR
                    | NODE_PSEUDO_ELEMENT_SELECTOR
                    | NODE_ATTRIBUTE_SELECTOR
            );
            if !compound || parent.child(0).map(|c| c.id()) != Some(simple_selector.id()) {
                break;
            }
            simple_selector = parent;
        }

        let length = simple_selector.end_byte() - simple_selector.start_byte();
        if length == 1 && char_at(self.content, simple_selector.start_byte()) == Some('*') {
            self.add_entry(simple_selector, Rule::UniversalSelector, None);
        }
        VisitResult::Continue
    }

    fn visit_id_selector(&mut self, node: Node<'tree>) -> VisitResult {
        self.add_entry(node, Rule::AvoidIdSelector, None);
        VisitResult::Continue
    }

    // ---------------------------------------------------------------
    // Rule sets
    // ---------------------------------------------------------------

    fn visit_rule_set(&mut self, node: Node<'tree>) -> VisitResult {
        let mut cursor = node.walk();
        let children: Vec<Node<'tree>> = node.named_children(&mut cursor).collect();
        let selectors = children.iter().copied().find(|c| c.kind() == NODE_SELECTORS);
        let block = children
            .iter()
            .copied()
            .find(|c| c.kind() == NODE_BLOCK && !c.is_missing());
        let (Some(selectors), Some(block)) = (selectors, block) else {
            // syntax error
            return VisitResult::SkipChildren;
        };

        let mut cursor = block.walk();
        let block_items: Vec<Node<'tree>> = block
            .named_children(&mut cursor)
            .filter(|child| !is_comment(child.kind()))
            .collect();

        if block_items.is_empty() {
            self.add_entry(selectors, Rule::EmptyRuleSet, None);
        }

        // Declarations the parser could not read end up as ERROR nodes. The
        // `*` of a star hack is the one recovery that still leaves a readable
        // declaration behind it.
        let contains_unknowns = block_items
            .iter()
            .any(|child| child.is_error() && node_text(*child, self.content).trim() != "*");

        let property_table: Vec<Element<'tree>> = block_items
            .iter()
            .filter_map(|child| Declaration::new(*child))
            .map(|declaration| Element::new(declaration, self.content))
            .collect();

        log::trace!(
            "rule set '{}': {} declarations",
            node_text(selectors, self.content),
            property_table.len()
        );

        self.check_box_model(&property_table);
        self.check_ignored_due_to_display(&property_table);
        self.check_float(&property_table);
        self.check_duplicates(&property_table);

        if node_text(selectors, self.content) != SELECTOR_EXPORT {
            self.check_properties(&property_table, contains_unknowns);
        }

        VisitResult::Continue
    }

    /// Width/height together with border or padding on the matching sides.
    /// See https://github.com/CSSLint/csslint/wiki/Beware-of-box-model-size
    fn check_box_model(&mut self, property_table: &[Element<'tree>]) {
        let box_model = calculate_box_model(property_table, self.content);

        let pairs = [
            (&box_model.width, [&box_model.right, &box_model.left]),
            (&box_model.height, [&box_model.top, &box_model.bottom]),
        ];
        for (dimension, sides) in pairs {
            let Some(dimension) = dimension else {
                continue;
            };
            let mut properties: Vec<&Element<'tree>> = Vec::new();
            for side in sides.iter().filter(|side| side.value) {
                for property in &side.properties {
                    if !properties.iter().any(|p| p.is_same(property)) {
                        properties.push(property);
                    }
                }
            }
            if properties.is_empty() {
                continue;
            }
            let nodes: Vec<Node<'tree>> = properties.iter().map(|p| p.node.node()).collect();
            for node in nodes {
                self.add_entry(node, Rule::BewareOfBoxModelSize, None);
            }
            self.add_entry(dimension.node.node(), Rule::BewareOfBoxModelSize, None);
        }
    }

    fn check_ignored_due_to_display(&mut self, property_table: &[Element<'tree>]) {
        // with display: inline-block, float has no effect
        if self.has_display_value(property_table, "inline-block") {
            for element in fetch(property_table, "float") {
                let value = element.node.value_text(self.content);
                if value.is_some_and(|value| value != "none") {
                    self.add_entry(
                        element.node.node(),
                        Rule::PropertyIgnoredDueToDisplay,
                        Some("inline-block is ignored due to the float. If 'float' has a value other than 'none', the box is floated and 'display' is treated as 'block'".to_string()),
                    );
                }
            }
        }

        // with display: block, vertical-align has no effect
        if self.has_display_value(property_table, "block") {
            for element in fetch(property_table, "vertical-align") {
                self.add_entry(
                    element.node.node(),
                    Rule::PropertyIgnoredDueToDisplay,
                    Some("Property is ignored due to the display. With 'display: block', vertical-align should not be used.".to_string()),
                );
            }
        }
    }

    fn has_display_value(&self, property_table: &[Element<'tree>], value: &str) -> bool {
        fetch(property_table, "display")
            .any(|element| element.node.value_contains_identifier(self.content, value))
    }

    fn check_float(&mut self, property_table: &[Element<'tree>]) {
        for element in fetch(property_table, "float") {
            if !self.is_valid_property_declaration(element) {
                self.add_entry(element.node.node(), Rule::AvoidFloat, None);
            }
        }
    }

    /// Same property declared twice in one block. Values starting with `-`
    /// are vendor fallbacks (`display: -webkit-box; display: flex`) and don't count.
    ///
    /// Each duplicated declaration gets a single marker, not one per other
    /// occurrence, so three `color`s give three markers rather than six.
    fn check_duplicates(&mut self, property_table: &[Element<'tree>]) {
        let content = self.content;
        let counts = |element: &Element| element.node.value_first_char(content).is_some_and(|c| c != '-');

        let mut duplicates = Vec::new();
        for element in property_table {
            if element.full_property_name == "background" || self.is_valid_property_declaration(element) {
                continue;
            }
            if !counts(element) {
                continue;
            }
            let has_other = fetch(property_table, &element.full_property_name)
                .any(|other| !other.is_same(element) && counts(other));
            if has_other {
                duplicates.push(element.node.node());
            }
        }

        for node in duplicates {
            self.add_entry(node, Rule::DuplicateDeclarations, None);
        }
    }

    /// Unknown properties, IE hacks and vendor prefix completeness
    fn check_properties(&mut self, property_table: &[Element<'tree>], mut contains_unknowns: bool) {
        let mut properties_by_suffix = NodesByRootMap::new();

        for element in property_table {
            let declaration = element.node;
            let Some(property) = declaration.property().filter(|_| declaration.is_css_declaration()) else {
                contains_unknowns = true;
                continue;
            };

            let mut name = element.full_property_name.as_str();
            if name.starts_with('-') {
                // `--name` is a custom property
                if !name.starts_with("--") {
                    if !self.data.is_known_property(name) && !self.settings.is_valid_property(name) {
                        self.add_entry(property, Rule::UnknownVendorSpecificProperty, None);
                    }
                    properties_by_suffix.add(non_prefixed_name(name), name, Some(property));
                }
            } else {
                let full_name = name;
                if name.starts_with('*') || name.starts_with('_') {
                    self.add_entry(property, Rule::IEStarHack, None);
                    name = &name[1..];
                }

                // `_property` and `*property` may be in custom data
                if !self.data.is_known_property(full_name)
                    && !self.data.is_known_property(name)
                    && !self.settings.is_valid_property(name)
                {
                    self.add_entry(
                        property,
                        Rule::UnknownProperty,
                        Some(format!(
                            "Unknown property: '{}'",
                            declaration.full_property_name(self.content)
                        )),
                    );
                }

                // the standard spelling itself is never marked
                properties_by_suffix.add(name, name, None);
            }
        }

        // a block with unparsable declarations can't be judged for completeness
        if contains_unknowns {
            return;
        }

        for (suffix, entry) in properties_by_suffix.iter() {
            let actual = &entry.names;
            let needs_standard =
                self.data.is_standard_property(suffix) && !actual.iter().any(|n| n == suffix);
            if !needs_standard && actual.len() == 1 {
                // only one spelling in use, nothing to compare against
                continue;
            }

            let expected: Vec<String> = VENDOR_PREFIXES
                .iter()
                .map(|prefix| format!("{}{}", prefix, suffix))
                .filter(|name| self.data.is_standard_property(name))
                .collect();

            let missing_vendor_specific = Self::get_missing_names(&expected, actual);
            if missing_vendor_specific.is_none() && !needs_standard {
                continue;
            }

            for node in entry.nodes.iter().copied() {
                if needs_standard {
                    self.add_entry(
                        node,
                        Rule::IncludeStandardPropertyWhenUsingVendorPrefix,
                        Some(format!(
                            "Also define the standard property '{}' for compatibility",
                            suffix
                        )),
                    );
                }
                if let Some(missing) = &missing_vendor_specific {
                    self.add_entry(
                        node,
                        Rule::AllVendorPrefixes,
                        Some(format!(
                            "Always include all vendor specific properties: Missing: {}",
                            missing
                        )),
                    );
                }
            }
        }
    }

    // ---------------------------------------------------------------
    // Values
    // ---------------------------------------------------------------

    fn visit_prio(&mut self, node: Node<'tree>) -> VisitResult {
        self.add_entry(node, Rule::AvoidImportant, None);
        VisitResult::Continue
    }

    fn visit_numeric_value(&mut self, node: Node<'tree>) -> VisitResult {
        // calc() needs units on zero
        if let Some(function) = find_ancestor(node, &[NODE_CALL_EXPRESSION]) {
            if function_name(function, self.content).eq_ignore_ascii_case("calc") {
                return VisitResult::Continue;
            }
        }

        let Some(declaration) = find_ancestor(node, &[NODE_DECLARATION]).and_then(Declaration::new) else {
            return VisitResult::Continue;
        };
        if declaration.value_nodes().is_empty() {
            return VisitResult::Continue;
        }

        let mut cursor = node.walk();
        let Some(unit) = node
            .named_children(&mut cursor)
            .find(|child| child.kind() == NODE_UNIT)
        else {
            return VisitResult::Continue;
        };
        let unit_text = node_text(unit, self.content).to_lowercase();
        if !LENGTH_UNITS.contains(&unit_text.as_str()) {
            return VisitResult::Continue;
        }

        let number = self
            .content
            .get(node.start_byte()..unit.start_byte())
            .and_then(|text| text.parse::<f64>().ok());
        let property_name = declaration.full_property_name(self.content).to_lowercase();
        if number == Some(0.0) && !self.settings.is_valid_property(&property_name) {
            self.add_entry(node, Rule::ZeroWithUnit, None);
        }
        VisitResult::Continue
    }

    fn visit_hex_color_value(&mut self, node: Node<'tree>) -> VisitResult {
        // #eeff0011, #eeff00, #ef01 or #ef0
        let length = node.end_byte() - node.start_byte();
        if !matches!(length, 4 | 5 | 7 | 9) {
            self.add_entry(node, Rule::HexColorLength, None);
        }
        VisitResult::SkipChildren
    }

    fn visit_function(&mut self, node: Node<'tree>) -> VisitResult {
        let expected_arguments = match function_name(node, self.content).to_lowercase().as_str() {
            "rgb" | "hsl" => Some(3),
            "rgba" | "hsla" => Some(4),
            _ => None,
        };

        if let Some(expected) = expected_arguments {
            let mut cursor = node.walk();
            let arguments = node
                .named_children(&mut cursor)
                .find(|child| child.kind() == NODE_ARGUMENTS);
            if let Some(arguments) = arguments {
                // top-level values only, nested expressions count as one
                let mut cursor = arguments.walk();
                let actual = arguments
                    .named_children(&mut cursor)
                    .filter(|child| !is_comment(child.kind()))
                    .count();
                if actual != expected {
                    self.add_entry(node, Rule::ArgsInColorFunction, None);
                }
            }
        }
        VisitResult::Continue
    }
}

/// Elements of the table with the given (lower-cased) property name
fn fetch<'t, 'tree>(
    property_table: &'t [Element<'tree>],
    name: &'t str,
) -> impl Iterator<Item = &'t Element<'tree>> {
    property_table
        .iter()
        .filter(move |element| element.full_property_name == name)
}

fn function_name<'a>(node: Node, content: &'a str) -> &'a str {
    node.child(0)
        .filter(|child| child.kind() == NODE_FUNCTION_NAME)
        .map(|child| node_text(child, content))
        .unwrap_or("")
}
