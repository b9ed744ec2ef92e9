//! Tests for the CSS lint visitor

use super::css_data::CssDataManager;
use super::lint::*;
use super::lint_rules::*;
use crate::test_utils::{findings_for, lint, lint_with, parse_css, texts_for};

#[test]
fn test_empty_rule_set() {
    let findings = lint("a { }");

    assert_eq!(findings.len(), 1, "unexpected findings: {:?}", findings);
    assert_eq!(findings[0].rule, Rule::EmptyRuleSet);
    assert_eq!(findings[0].text, "a");
    assert_eq!(findings[0].level, Level::Warning);
}

#[test]
fn test_comments_do_not_count_as_content() {
    let findings = lint("a { /* nothing here */ }");
    assert_eq!(texts_for(&findings, Rule::EmptyRuleSet), vec!["a"]);
}

#[test]
fn test_nested_rule_set_in_media_is_visited() {
    let findings = lint("@media screen { .inner { } }");
    assert_eq!(texts_for(&findings, Rule::EmptyRuleSet), vec![".inner"]);
}

#[test]
fn test_box_model_width_with_left_border() {
    let findings = lint("a { width: 10px; border-left: 1px solid red; }");
    let box_model = texts_for(&findings, Rule::BewareOfBoxModelSize);

    assert_eq!(box_model.len(), 2, "unexpected findings: {:?}", box_model);
    assert!(box_model[0].starts_with("border-left"));
    assert!(box_model[1].starts_with("width"));
}

#[test]
fn test_box_model_height_with_vertical_padding() {
    let findings = lint("a { height: 10px; padding: 2px 0; }");
    let box_model = texts_for(&findings, Rule::BewareOfBoxModelSize);

    assert_eq!(box_model.len(), 2);
    assert!(box_model[0].starts_with("padding"));
    assert!(box_model[1].starts_with("height"));

    // horizontal padding is zero, so width is fine
    let findings = lint("a { width: 10px; padding: 2px 0; }");
    assert!(findings_for(&findings, Rule::BewareOfBoxModelSize).is_empty());
}

#[test]
fn test_box_model_with_box_sizing() {
    let findings = lint("a { width: 10px; padding: 5px; box-sizing: border-box; }");
    assert!(findings_for(&findings, Rule::BewareOfBoxModelSize).is_empty());
}

#[test]
fn test_float_ignored_with_inline_block() {
    let findings = lint("a { display: inline-block; float: left; }");
    let ignored = findings_for(&findings, Rule::PropertyIgnoredDueToDisplay);

    assert_eq!(ignored.len(), 1);
    assert!(ignored[0].text.starts_with("float"));
    assert!(ignored[0].message.starts_with("inline-block is ignored due to the float"));

    let findings = lint("a { display: inline-block; float: none; }");
    assert!(findings_for(&findings, Rule::PropertyIgnoredDueToDisplay).is_empty());
}

#[test]
fn test_vertical_align_ignored_with_block() {
    let findings = lint("a { display: block; vertical-align: top; }");
    let ignored = texts_for(&findings, Rule::PropertyIgnoredDueToDisplay);

    assert_eq!(ignored.len(), 1);
    assert!(ignored[0].starts_with("vertical-align"));
}

#[test]
fn test_avoid_float() {
    let findings = lint("a { float: left; }");
    assert_eq!(findings_for(&findings, Rule::AvoidFloat).len(), 1);

    let settings = LintSettings::default().with_valid_properties(&["float"]);
    let findings = lint_with("a { float: left; }", &settings, &CssDataManager::new());
    assert!(findings_for(&findings, Rule::AvoidFloat).is_empty());
}

#[test]
fn test_duplicate_declarations() {
    let findings = lint("a { color: red; color: blue; }");
    let duplicates = texts_for(&findings, Rule::DuplicateDeclarations);

    assert_eq!(duplicates.len(), 2);
    assert!(duplicates[0].starts_with("color: red"));
    assert!(duplicates[1].starts_with("color: blue"));
}

#[test]
fn test_duplicate_with_vendor_value_is_allowed() {
    let findings = lint("a { color: red; color: -blue; }");
    assert!(findings_for(&findings, Rule::DuplicateDeclarations).is_empty());

    let findings = lint("a { display: -webkit-box; display: flex; }");
    assert!(findings_for(&findings, Rule::DuplicateDeclarations).is_empty());
}

#[test]
fn test_duplicate_background_is_allowed() {
    let findings = lint("a { background: red; background: blue; }");
    assert!(findings_for(&findings, Rule::DuplicateDeclarations).is_empty());
}

#[test]
fn test_unknown_property() {
    let findings = lint("a { colr: red; }");
    let unknown = findings_for(&findings, Rule::UnknownProperty);

    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].text, "colr");
    assert_eq!(unknown[0].message, "Unknown property: 'colr'");
}

#[test]
fn test_unknown_property_keeps_original_case_in_message() {
    let findings = lint("a { Colr: red; }");
    let unknown = findings_for(&findings, Rule::UnknownProperty);
    assert_eq!(unknown[0].message, "Unknown property: 'Colr'");
}

#[test]
fn test_valid_properties_suppress_unknown_property() {
    let settings = LintSettings::default().with_valid_properties(&[" Composes "]);
    let findings = lint_with("a { composes: b; }", &settings, &CssDataManager::new());
    assert!(findings_for(&findings, Rule::UnknownProperty).is_empty());
}

#[test]
fn test_custom_properties_are_not_checked() {
    let findings = lint("a { --main-color: red; color: var(--main-color); }");
    assert!(findings.is_empty(), "unexpected findings: {:?}", findings);
}

#[test]
fn test_export_block_is_not_checked() {
    let findings = lint(":export { primaryColor: red; }");
    assert!(findings_for(&findings, Rule::UnknownProperty).is_empty());
}

#[test]
fn test_ie_underscore_hack() {
    let findings = lint("a { _zoom: 1; }");

    assert_eq!(texts_for(&findings, Rule::IEStarHack), vec!["_zoom"]);
    // the stripped name is known
    assert!(findings_for(&findings, Rule::UnknownProperty).is_empty());
}

#[test]
fn test_ie_star_hack() {
    let findings = lint("a { *zoom: 1; }");

    assert_eq!(findings_for(&findings, Rule::IEStarHack).len(), 1);
    assert!(findings_for(&findings, Rule::UnknownProperty).is_empty());
    // the recovered `*` is not linted as a selector
    assert!(findings_for(&findings, Rule::UniversalSelector).is_empty());
}

#[test]
fn test_star_hack_keeps_completeness_check() {
    let findings = lint("a { *zoom: 1; -webkit-transition: none; transition: none; }");
    assert_eq!(
        texts_for(&findings, Rule::AllVendorPrefixes),
        vec!["-webkit-transition"]
    );
}

#[test]
fn test_unreadable_declaration_skips_completeness_check() {
    let findings = lint("a { -webkit-transition: none; transition: none; colr red; }");
    assert!(findings_for(&findings, Rule::AllVendorPrefixes).is_empty());
    assert!(findings_for(&findings, Rule::IncludeStandardPropertyWhenUsingVendorPrefix).is_empty());
}

#[test]
fn test_unknown_vendor_specific_property() {
    let findings = lint("a { -webkit-foo: 1; }");
    assert_eq!(
        texts_for(&findings, Rule::UnknownVendorSpecificProperty),
        vec!["-webkit-foo"]
    );
    // unknown roots are not standard, so no completeness markers
    assert!(findings_for(&findings, Rule::IncludeStandardPropertyWhenUsingVendorPrefix).is_empty());
}

#[test]
fn test_vendor_prefix_with_standard_spelling() {
    let mut data = CssDataManager::empty();
    data.add_property("foo", None);
    data.add_property("-s2-foo", None);

    let findings = lint_with("a { -s2-foo: 1; foo: 1; }", &LintSettings::default(), &data);
    assert!(findings_for(&findings, Rule::IncludeStandardPropertyWhenUsingVendorPrefix).is_empty());
    assert!(findings_for(&findings, Rule::AllVendorPrefixes).is_empty());

    let findings = lint_with("a { -s2-foo: 1; }", &LintSettings::default(), &data);
    let needs_standard = findings_for(&findings, Rule::IncludeStandardPropertyWhenUsingVendorPrefix);
    assert_eq!(needs_standard.len(), 1);
    assert_eq!(needs_standard[0].text, "-s2-foo");
    assert_eq!(
        needs_standard[0].message,
        "Also define the standard property 'foo' for compatibility"
    );
    assert!(findings_for(&findings, Rule::AllVendorPrefixes).is_empty());
}

#[test]
fn test_missing_vendor_prefixes() {
    let findings = lint("a { -webkit-transition: none; transition: none; }");
    let missing = findings_for(&findings, Rule::AllVendorPrefixes);

    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].text, "-webkit-transition");
    assert_eq!(
        missing[0].message,
        "Always include all vendor specific properties: Missing: '-moz-transition', '-o-transition'"
    );
    assert!(findings_for(&findings, Rule::IncludeStandardPropertyWhenUsingVendorPrefix).is_empty());
}

#[test]
fn test_missing_vendor_prefixes_and_standard() {
    let findings = lint("a { -webkit-transform: none; }");

    assert_eq!(
        texts_for(&findings, Rule::IncludeStandardPropertyWhenUsingVendorPrefix),
        vec!["-webkit-transform"]
    );
    let missing = findings_for(&findings, Rule::AllVendorPrefixes);
    assert_eq!(
        missing[0].message,
        "Always include all vendor specific properties: Missing: '-ms-transform', '-moz-transform', '-o-transform'"
    );
}

#[test]
fn test_complete_vendor_prefixes() {
    let content = "a { -webkit-transition: none; -moz-transition: none; -o-transition: none; transition: none; }";
    let findings = lint(content);
    assert!(findings_for(&findings, Rule::AllVendorPrefixes).is_empty());
    assert!(findings_for(&findings, Rule::IncludeStandardPropertyWhenUsingVendorPrefix).is_empty());
}

#[test]
fn test_universal_selector() {
    let findings = lint("* { color: red; }");
    assert_eq!(texts_for(&findings, Rule::UniversalSelector), vec!["*"]);

    let findings = lint("div * { color: red; }");
    assert_eq!(texts_for(&findings, Rule::UniversalSelector), vec!["*"]);

    let findings = lint("*.item { color: red; }");
    assert!(findings_for(&findings, Rule::UniversalSelector).is_empty());
}

#[test]
fn test_id_selector() {
    let findings = lint("#main .item { color: red; }");
    assert_eq!(texts_for(&findings, Rule::AvoidIdSelector), vec!["#main"]);
}

#[test]
fn test_unknown_at_rule() {
    let findings = lint("@foo bar;");
    let unknown = findings_for(&findings, Rule::UnknownAtRules);

    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].text, "@foo");
    assert_eq!(unknown[0].message, "Unknown at rule @foo");
}

#[test]
fn test_unknown_at_rule_block_is_not_descended() {
    let findings = lint("@foo { #main { } }");
    assert_eq!(findings_for(&findings, Rule::UnknownAtRules).len(), 1);
    assert!(findings_for(&findings, Rule::AvoidIdSelector).is_empty());
    assert!(findings_for(&findings, Rule::EmptyRuleSet).is_empty());
}

#[test]
fn test_known_at_rule() {
    let findings = lint("@page { margin: 1cm; }");
    assert!(findings_for(&findings, Rule::UnknownAtRules).is_empty());
}

#[test]
fn test_import_statement() {
    let findings = lint("@import url(\"theme.css\");");
    assert_eq!(findings_for(&findings, Rule::ImportStatement).len(), 1);
}

#[test]
fn test_font_face_required_properties() {
    let findings = lint("@font-face { font-family: \"Body\"; }");
    let required = findings_for(&findings, Rule::RequiredPropertiesForFontFace);

    assert_eq!(required.len(), 1);
    assert!(required[0].text.starts_with("@font-face"));

    let findings = lint("@font-face { Font-Family: \"Body\"; SRC: local(Arial); }");
    assert!(findings_for(&findings, Rule::RequiredPropertiesForFontFace).is_empty());
}

#[test]
fn test_font_face_with_unknown_content() {
    let findings = lint("@font-face { font-family: x; foo }");
    assert!(findings_for(&findings, Rule::RequiredPropertiesForFontFace).is_empty());
}

#[test]
fn test_upper_case_keyframes_is_known() {
    let findings = lint("@KEYFRAMES spin { from { top: 0; } }");
    assert!(findings_for(&findings, Rule::UnknownAtRules).is_empty());
}

#[test]
fn test_keyframes_grouping_reports_nothing() {
    let findings = lint("@-webkit-keyframes spin { from { top: 0; } to { top: 10px; } }");

    assert!(findings_for(&findings, Rule::IncludeStandardPropertyWhenUsingVendorPrefix).is_empty());
    assert!(findings_for(&findings, Rule::AllVendorPrefixes).is_empty());
    assert!(findings_for(&findings, Rule::UnknownAtRules).is_empty());
}

#[test]
fn test_zero_with_unit() {
    let findings = lint("a { margin: 0px; }");
    assert_eq!(texts_for(&findings, Rule::ZeroWithUnit), vec!["0px"]);

    let findings = lint("a { margin: 0.0em 0; }");
    assert_eq!(texts_for(&findings, Rule::ZeroWithUnit), vec!["0.0em"]);
}

#[test]
fn test_zero_without_length_unit() {
    let findings = lint("a { margin: 0; width: 0%; transition-delay: 0s; }");
    assert!(findings_for(&findings, Rule::ZeroWithUnit).is_empty());
}

#[test]
fn test_zero_with_unit_in_calc() {
    let findings = lint("a { width: calc(0px + 1px); }");
    assert!(findings_for(&findings, Rule::ZeroWithUnit).is_empty());
}

#[test]
fn test_hex_color_length() {
    let valid = "a { color: #abc; } b { color: #abcd; } c { color: #abcdef; } d { color: #abcdef01; }";
    let findings = lint(valid);
    assert!(findings_for(&findings, Rule::HexColorLength).is_empty());

    let findings = lint("a { color: #abcde; } b { color: #abcdef0; }");
    assert_eq!(
        texts_for(&findings, Rule::HexColorLength),
        vec!["#abcde", "#abcdef0"]
    );
    assert!(findings_for(&findings, Rule::HexColorLength)
        .iter()
        .all(|finding| finding.level == Level::Error));
}

#[test]
fn test_color_function_arguments() {
    let findings = lint("a { color: rgb(1, 2, 3); }");
    assert!(findings_for(&findings, Rule::ArgsInColorFunction).is_empty());

    let findings = lint("a { color: rgb(1, 2); } b { color: rgba(1, 2, 3); }");
    assert_eq!(
        texts_for(&findings, Rule::ArgsInColorFunction),
        vec!["rgb(1, 2)", "rgba(1, 2, 3)"]
    );

    let findings = lint("a { color: hsla(120, 50%, 50%, 0.5); }");
    assert!(findings_for(&findings, Rule::ArgsInColorFunction).is_empty());
}

#[test]
fn test_important() {
    let findings = lint("a { color: red !important; }");
    assert_eq!(texts_for(&findings, Rule::AvoidImportant), vec!["!important"]);
}

#[test]
fn test_incomplete_declaration_is_not_important() {
    let settings = LintSettings::default().with_rule(Rule::AvoidImportant, Level::Warning);
    let findings = lint_with("a { width: }", &settings, &CssDataManager::new());

    assert!(findings_for(&findings, Rule::AvoidImportant).is_empty());
    assert!(findings.iter().all(|finding| !finding.text.is_empty()));
}

#[test]
fn test_configured_level_is_applied() {
    let settings = LintSettings::default().with_rule(Rule::EmptyRuleSet, Level::Error);
    let findings = lint_with("a { }", &settings, &CssDataManager::new());
    assert_eq!(findings[0].level, Level::Error);
}

#[test]
fn test_level_filter() {
    let content = "#main { float: left; } b { } c { color: #abcde; }";
    let tree = parse_css(content);
    let settings = LintConfigurationSettings::default();
    let data = CssDataManager::new();

    let all = LintVisitor::entries(tree.root_node(), content, &settings, &data, LevelMask::ALL);
    let filtered = LintVisitor::entries(tree.root_node(), content, &settings, &data, LevelMask::default());

    assert!(all.iter().any(|marker| marker.level() == Level::Ignore));
    assert!(filtered
        .iter()
        .all(|marker| LevelMask::default().contains(marker.level())));
    assert_eq!(
        filtered.len(),
        all.iter()
            .filter(|marker| LevelMask::default().contains(marker.level()))
            .count()
    );

    let errors = LintVisitor::entries(tree.root_node(), content, &settings, &data, Level::Error.into());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule(), Rule::HexColorLength);
}

#[test]
fn test_ignored_rule_is_filtered_by_default_mask() {
    let settings = LintSettings::default().with_rule(Rule::EmptyRuleSet, Level::Ignore);
    let content = "a { }";
    let tree = parse_css(content);
    let resolved = LintConfigurationSettings::new(&settings);
    let data = CssDataManager::new();

    let markers = LintVisitor::entries(tree.root_node(), content, &resolved, &data, LevelMask::default());
    assert!(markers.is_empty());
}

