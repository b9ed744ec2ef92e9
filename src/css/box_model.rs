//! Box model summary of a declaration block
//!
//! Finds which sides of a block get a non-zero border or padding, and
//! whether `width`/`height` are set, so the lint visitor can warn about
//! sizes that the border and padding will add to.

use crate::css::declaration::Element;

/// Whether a side has a non-zero border or padding, and which declarations
/// contributed to it
#[derive(Debug, Clone, Default)]
pub struct SideState<'tree> {
    pub value: bool,
    pub properties: Vec<Element<'tree>>,
}

#[derive(Debug, Clone, Default)]
pub struct BoxModel<'tree> {
    pub top: SideState<'tree>,
    pub right: SideState<'tree>,
    pub bottom: SideState<'tree>,
    pub left: SideState<'tree>,
    pub width: Option<Element<'tree>>,
    pub height: Option<Element<'tree>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    fn parse(name: &str) -> Option<Side> {
        match name {
            "top" => Some(Side::Top),
            "right" => Some(Side::Right),
            "bottom" => Some(Side::Bottom),
            "left" => Some(Side::Left),
            _ => None,
        }
    }
}

impl<'tree> BoxModel<'tree> {
    fn side_mut(&mut self, side: Side) -> &mut SideState<'tree> {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }

    fn set_side(&mut self, side: Side, value: bool, property: &Element<'tree>) {
        let state = self.side_mut(side);
        state.value = value;
        if value && !state.properties.iter().any(|p| p.is_same(property)) {
            state.properties.push(property.clone());
        }
    }

    /// Update one side, or all four when `side` is not a side name
    fn update_with_value(&mut self, side: Option<Side>, value: bool, property: &Element<'tree>) {
        match side {
            Some(side) => self.set_side(side, value, property),
            None => {
                for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
                    self.set_side(side, value, property);
                }
            }
        }
    }

    /// Shorthand expansion: 1 to 4 values in top, right, bottom, left order
    fn update_with_list(&mut self, values: &[bool], property: &Element<'tree>) {
        match *values {
            [all] => self.update_with_value(None, all, property),
            [vertical, horizontal] => {
                self.update_with_value(Some(Side::Top), vertical, property);
                self.update_with_value(Some(Side::Bottom), vertical, property);
                self.update_with_value(Some(Side::Right), horizontal, property);
                self.update_with_value(Some(Side::Left), horizontal, property);
            }
            [top, horizontal, bottom] => {
                self.update_with_value(Some(Side::Top), top, property);
                self.update_with_value(Some(Side::Right), horizontal, property);
                self.update_with_value(Some(Side::Left), horizontal, property);
                self.update_with_value(Some(Side::Bottom), bottom, property);
            }
            [top, right, bottom, left] => {
                self.update_with_value(Some(Side::Top), top, property);
                self.update_with_value(Some(Side::Right), right, property);
                self.update_with_value(Some(Side::Bottom), bottom, property);
                self.update_with_value(Some(Side::Left), left, property);
            }
            _ => {}
        }
    }
}

/// Leading number of `text` read the way JavaScript's `parseFloat` does.
/// `None` when there is no numeric prefix.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if digits > 0 || fraction_end > fraction_start {
            digits += fraction_end - fraction_start;
            end = fraction_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// `allows_keywords`: whether `initial` and `unset` count as zero
fn check_line_width(value: &str, allows_keywords: bool) -> bool {
    if allows_keywords && matches!(value, "initial" | "unset") {
        return false;
    }
    // a <length> is a number and a unit, the prefix parse strips the unit
    parse_float_prefix(value) != Some(0.0)
}

fn check_line_style(value: &str, allows_keywords: bool) -> bool {
    if matches!(value, "none" | "hidden") {
        return false;
    }
    if allows_keywords && matches!(value, "initial" | "unset") {
        return false;
    }
    true
}

fn check_border_shorthand(terms: &[&str]) -> bool {
    // a single term can be a keyword, a <line-width> or a <line-style>
    if let [value] = terms {
        return check_line_width(value, true) && check_line_style(value, true);
    }

    // with several terms, any term that means "no border" wins
    terms
        .iter()
        .all(|value| check_line_width(value, false) && check_line_style(value, false))
}

/// Build the box model summary of a property table
pub fn calculate_box_model<'tree>(property_table: &[Element<'tree>], content: &str) -> BoxModel<'tree> {
    let mut model = BoxModel::default();

    for property in property_table {
        let Some(value) = property.node.value_text(content) else {
            continue;
        };
        let terms: Vec<&str> = property
            .node
            .value_nodes()
            .into_iter()
            .filter_map(|node| node.utf8_text(content.as_bytes()).ok())
            .collect();

        match property.full_property_name.as_str() {
            // box-sizing means the author handles the box model explicitly
            "box-sizing" => return BoxModel::default(),
            "width" => model.width = Some(property.clone()),
            "height" => model.height = Some(property.clone()),
            name => {
                let segments: Vec<&str> = name.split('-').collect();
                match segments[0] {
                    "border" => match segments.get(1).copied() {
                        None | Some("top" | "right" | "bottom" | "left") => {
                            let side = segments.get(1).and_then(|s| Side::parse(s));
                            match segments.get(2).copied() {
                                None => model.update_with_value(
                                    side,
                                    check_border_shorthand(&terms),
                                    property,
                                ),
                                // initial value of border-width is `medium`, not zero
                                Some("width") => model.update_with_value(
                                    side,
                                    check_line_width(value, false),
                                    property,
                                ),
                                // initial value of border-style is `none`
                                Some("style") => model.update_with_value(
                                    side,
                                    check_line_style(value, true),
                                    property,
                                ),
                                Some(_) => {}
                            }
                        }
                        Some("width") => {
                            let values: Vec<bool> =
                                terms.iter().map(|t| check_line_width(t, false)).collect();
                            model.update_with_list(&values, property);
                        }
                        Some("style") => {
                            let values: Vec<bool> =
                                terms.iter().map(|t| check_line_style(t, true)).collect();
                            model.update_with_list(&values, property);
                        }
                        Some(_) => {}
                    },
                    "padding" => {
                        // initial value of padding is zero
                        if segments.len() == 1 {
                            let values: Vec<bool> =
                                terms.iter().map(|t| check_line_width(t, true)).collect();
                            model.update_with_list(&values, property);
                        } else {
                            model.update_with_value(
                                Side::parse(segments[1]),
                                check_line_width(value, true),
                                property,
                            );
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{parse_css, property_table};

    fn model_names(side: &SideState) -> Vec<String> {
        side.properties
            .iter()
            .map(|p| p.full_property_name.clone())
            .collect()
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("0"), Some(0.0));
        assert_eq!(parse_float_prefix("0px"), Some(0.0));
        assert_eq!(parse_float_prefix("-0.0em"), Some(0.0));
        assert_eq!(parse_float_prefix("1.5rem"), Some(1.5));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("2e3px"), Some(2000.0));
        assert_eq!(parse_float_prefix("1em"), Some(1.0));
        assert_eq!(parse_float_prefix("solid"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
    }

    #[test]
    fn test_border_shorthand_values() {
        assert!(check_border_shorthand(&["1px", "solid", "red"]));
        assert!(!check_border_shorthand(&["none"]));
        assert!(!check_border_shorthand(&["0"]));
        assert!(!check_border_shorthand(&["initial"]));
        assert!(!check_border_shorthand(&["0", "solid"]));
        assert!(!check_border_shorthand(&["1px", "hidden"]));
        assert!(check_border_shorthand(&["thin"]));
    }

    #[test]
    fn test_width_with_left_border() {
        let content = "a { width: 10px; border-left: 1px solid red; }";
        let tree = parse_css(content);
        let table = property_table(&tree, content);
        let model = calculate_box_model(&table, content);

        assert_eq!(model.width.as_ref().unwrap().full_property_name, "width");
        assert!(model.left.value);
        assert!(!model.right.value);
        assert_eq!(model_names(&model.left), vec!["border-left"]);
    }

    #[test]
    fn test_padding_shorthand_expansion() {
        let content = "a { padding: 0 5px; }";
        let tree = parse_css(content);
        let table = property_table(&tree, content);
        let model = calculate_box_model(&table, content);

        assert!(!model.top.value);
        assert!(!model.bottom.value);
        assert!(model.left.value);
        assert!(model.right.value);
    }

    #[test]
    fn test_box_sizing_clears_model() {
        let content = "a { width: 10px; padding: 5px; box-sizing: border-box; }";
        let tree = parse_css(content);
        let table = property_table(&tree, content);
        let model = calculate_box_model(&table, content);

        assert!(model.width.is_none());
        assert!(!model.left.value);
        assert!(model.left.properties.is_empty());
    }

    #[test]
    fn test_later_declaration_resets_side_value() {
        let content = "a { border-top: 1px solid; border-top: none; }";
        let tree = parse_css(content);
        let table = property_table(&tree, content);
        let model = calculate_box_model(&table, content);

        assert!(!model.top.value);
        assert_eq!(model.top.properties.len(), 1);
    }

    #[test]
    fn test_border_style_keyword() {
        let content = "a { border-right-style: dashed; border-bottom-width: 0; }";
        let tree = parse_css(content);
        let table = property_table(&tree, content);
        let model = calculate_box_model(&table, content);

        assert!(model.right.value);
        assert!(!model.bottom.value);
    }
}
