//! Built-in CSS Property Data
//!
//! Property and at-rule names known to the linter. Kept apart from
//! css_data.rs so the lists can grow without touching lookup code.

use crate::css::css_data::EntryStatus;

/// Standard, unprefixed CSS properties
pub const STANDARD_PROPERTIES: &[&str] = &[
    "accent-color",
    "align-content",
    "align-items",
    "align-self",
    "all",
    "animation",
    "animation-composition",
    "animation-delay",
    "animation-direction",
    "animation-duration",
    "animation-fill-mode",
    "animation-iteration-count",
    "animation-name",
    "animation-play-state",
    "animation-timing-function",
    "appearance",
    "aspect-ratio",
    "backdrop-filter",
    "backface-visibility",
    "background",
    "background-attachment",
    "background-blend-mode",
    "background-clip",
    "background-color",
    "background-image",
    "background-origin",
    "background-position",
    "background-position-x",
    "background-position-y",
    "background-repeat",
    "background-size",
    "block-size",
    "border",
    "border-block",
    "border-block-color",
    "border-block-end",
    "border-block-start",
    "border-block-style",
    "border-block-width",
    "border-bottom",
    "border-bottom-color",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "border-bottom-style",
    "border-bottom-width",
    "border-collapse",
    "border-color",
    "border-image",
    "border-image-outset",
    "border-image-repeat",
    "border-image-slice",
    "border-image-source",
    "border-image-width",
    "border-inline",
    "border-inline-color",
    "border-inline-end",
    "border-inline-start",
    "border-inline-style",
    "border-inline-width",
    "border-left",
    "border-left-color",
    "border-left-style",
    "border-left-width",
    "border-radius",
    "border-right",
    "border-right-color",
    "border-right-style",
    "border-right-width",
    "border-spacing",
    "border-style",
    "border-top",
    "border-top-color",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-top-style",
    "border-top-width",
    "border-width",
    "bottom",
    "box-decoration-break",
    "box-shadow",
    "box-sizing",
    "break-after",
    "break-before",
    "break-inside",
    "caption-side",
    "caret-color",
    "clear",
    "clip-path",
    "color",
    "color-scheme",
    "column-count",
    "column-fill",
    "column-gap",
    "column-rule",
    "column-rule-color",
    "column-rule-style",
    "column-rule-width",
    "column-span",
    "column-width",
    "columns",
    "contain",
    "container",
    "container-name",
    "container-type",
    "content",
    "content-visibility",
    "counter-increment",
    "counter-reset",
    "counter-set",
    "cursor",
    "direction",
    "display",
    "empty-cells",
    "filter",
    "flex",
    "flex-basis",
    "flex-direction",
    "flex-flow",
    "flex-grow",
    "flex-shrink",
    "flex-wrap",
    "float",
    "font",
    "font-family",
    "font-feature-settings",
    "font-kerning",
    "font-language-override",
    "font-optical-sizing",
    "font-size",
    "font-size-adjust",
    "font-stretch",
    "font-style",
    "font-synthesis",
    "font-variant",
    "font-variant-caps",
    "font-variant-east-asian",
    "font-variant-ligatures",
    "font-variant-numeric",
    "font-variant-position",
    "font-variation-settings",
    "font-weight",
    "gap",
    "grid",
    "grid-area",
    "grid-auto-columns",
    "grid-auto-flow",
    "grid-auto-rows",
    "grid-column",
    "grid-column-end",
    "grid-column-start",
    "grid-row",
    "grid-row-end",
    "grid-row-start",
    "grid-template",
    "grid-template-areas",
    "grid-template-columns",
    "grid-template-rows",
    "hanging-punctuation",
    "height",
    "hyphens",
    "image-orientation",
    "image-rendering",
    "inline-size",
    "inset",
    "inset-block",
    "inset-block-end",
    "inset-block-start",
    "inset-inline",
    "inset-inline-end",
    "inset-inline-start",
    "isolation",
    "justify-content",
    "justify-items",
    "justify-self",
    "left",
    "letter-spacing",
    "line-break",
    "line-height",
    "list-style",
    "list-style-image",
    "list-style-position",
    "list-style-type",
    "margin",
    "margin-block",
    "margin-block-end",
    "margin-block-start",
    "margin-bottom",
    "margin-inline",
    "margin-inline-end",
    "margin-inline-start",
    "margin-left",
    "margin-right",
    "margin-top",
    "mask",
    "mask-clip",
    "mask-composite",
    "mask-image",
    "mask-mode",
    "mask-origin",
    "mask-position",
    "mask-repeat",
    "mask-size",
    "mask-type",
    "max-block-size",
    "max-height",
    "max-inline-size",
    "max-width",
    "min-block-size",
    "min-height",
    "min-inline-size",
    "min-width",
    "mix-blend-mode",
    "object-fit",
    "object-position",
    "offset",
    "offset-distance",
    "offset-path",
    "offset-rotate",
    "opacity",
    "order",
    "orphans",
    "outline",
    "outline-color",
    "outline-offset",
    "outline-style",
    "outline-width",
    "overflow",
    "overflow-anchor",
    "overflow-wrap",
    "overflow-x",
    "overflow-y",
    "overscroll-behavior",
    "overscroll-behavior-x",
    "overscroll-behavior-y",
    "padding",
    "padding-block",
    "padding-block-end",
    "padding-block-start",
    "padding-bottom",
    "padding-inline",
    "padding-inline-end",
    "padding-inline-start",
    "padding-left",
    "padding-right",
    "padding-top",
    "page-break-after",
    "page-break-before",
    "page-break-inside",
    "paint-order",
    "perspective",
    "perspective-origin",
    "place-content",
    "place-items",
    "place-self",
    "pointer-events",
    "position",
    "print-color-adjust",
    "quotes",
    "resize",
    "right",
    "rotate",
    "row-gap",
    "scale",
    "scroll-behavior",
    "scroll-margin",
    "scroll-padding",
    "scroll-snap-align",
    "scroll-snap-stop",
    "scroll-snap-type",
    "scrollbar-color",
    "scrollbar-gutter",
    "scrollbar-width",
    "shape-outside",
    "tab-size",
    "table-layout",
    "text-align",
    "text-align-last",
    "text-combine-upright",
    "text-decoration",
    "text-decoration-color",
    "text-decoration-line",
    "text-decoration-style",
    "text-decoration-thickness",
    "text-emphasis",
    "text-indent",
    "text-justify",
    "text-orientation",
    "text-overflow",
    "text-rendering",
    "text-shadow",
    "text-size-adjust",
    "text-transform",
    "text-underline-offset",
    "text-underline-position",
    "text-wrap",
    "top",
    "touch-action",
    "transform",
    "transform-box",
    "transform-origin",
    "transform-style",
    "transition",
    "transition-behavior",
    "transition-delay",
    "transition-duration",
    "transition-property",
    "transition-timing-function",
    "translate",
    "unicode-bidi",
    "unicode-range",
    "user-select",
    "vertical-align",
    "visibility",
    "white-space",
    "widows",
    "width",
    "will-change",
    "word-break",
    "word-spacing",
    "word-wrap",
    "writing-mode",
    "z-index",
    "zoom",
    // Descriptors used inside @font-face
    "src",
    "font-display",
];

/// Vendor-prefixed spellings shipped by browsers for a standard property.
/// Every `prefix + root` combination is registered as a standard property.
pub const VENDOR_PREFIXED_PROPERTIES: &[(&str, &[&str])] = &[
    ("animation", &["-webkit-", "-moz-", "-o-"]),
    ("animation-delay", &["-webkit-", "-moz-", "-o-"]),
    ("animation-direction", &["-webkit-", "-moz-", "-o-"]),
    ("animation-duration", &["-webkit-", "-moz-", "-o-"]),
    ("animation-fill-mode", &["-webkit-", "-moz-", "-o-"]),
    ("animation-iteration-count", &["-webkit-", "-moz-", "-o-"]),
    ("animation-name", &["-webkit-", "-moz-", "-o-"]),
    ("animation-play-state", &["-webkit-", "-moz-", "-o-"]),
    ("animation-timing-function", &["-webkit-", "-moz-", "-o-"]),
    ("appearance", &["-webkit-", "-moz-"]),
    ("backface-visibility", &["-webkit-", "-moz-"]),
    ("border-radius", &["-webkit-", "-moz-"]),
    ("box-shadow", &["-webkit-", "-moz-"]),
    ("box-sizing", &["-webkit-", "-moz-"]),
    ("column-count", &["-webkit-", "-moz-"]),
    ("column-gap", &["-webkit-", "-moz-"]),
    ("column-rule", &["-webkit-", "-moz-"]),
    ("column-width", &["-webkit-", "-moz-"]),
    ("columns", &["-webkit-", "-moz-"]),
    ("filter", &["-webkit-"]),
    ("hyphens", &["-webkit-", "-moz-", "-ms-"]),
    ("mask-image", &["-webkit-"]),
    ("perspective", &["-webkit-", "-moz-"]),
    ("perspective-origin", &["-webkit-", "-moz-"]),
    ("tab-size", &["-moz-", "-o-"]),
    ("text-size-adjust", &["-webkit-", "-moz-", "-ms-"]),
    ("transform", &["-webkit-", "-moz-", "-ms-", "-o-"]),
    ("transform-origin", &["-webkit-", "-moz-", "-ms-", "-o-"]),
    ("transform-style", &["-webkit-", "-moz-"]),
    ("transition", &["-webkit-", "-moz-", "-o-"]),
    ("transition-delay", &["-webkit-", "-moz-", "-o-"]),
    ("transition-duration", &["-webkit-", "-moz-", "-o-"]),
    ("transition-property", &["-webkit-", "-moz-", "-o-"]),
    ("transition-timing-function", &["-webkit-", "-moz-", "-o-"]),
    ("user-select", &["-webkit-", "-moz-", "-ms-"]),
];

/// Known properties that are not on the standards track
pub const NON_STANDARD_PROPERTIES: &[(&str, EntryStatus)] = &[
    ("-moz-osx-font-smoothing", EntryStatus::Nonstandard),
    ("-ms-filter", EntryStatus::Nonstandard),
    ("-webkit-box-reflect", EntryStatus::Nonstandard),
    ("-webkit-font-smoothing", EntryStatus::Nonstandard),
    ("-webkit-line-clamp", EntryStatus::Nonstandard),
    ("-webkit-overflow-scrolling", EntryStatus::Nonstandard),
    ("-webkit-tap-highlight-color", EntryStatus::Nonstandard),
    ("-webkit-text-fill-color", EntryStatus::Nonstandard),
    ("-webkit-text-stroke", EntryStatus::Nonstandard),
    ("clip", EntryStatus::Obsolete),
    ("ime-mode", EntryStatus::Obsolete),
    ("field-sizing", EntryStatus::Experimental),
    ("anchor-name", EntryStatus::Experimental),
    ("position-anchor", EntryStatus::Experimental),
];

/// Known at-rule keywords
pub const AT_DIRECTIVES: &[&str] = &[
    "@charset",
    "@container",
    "@counter-style",
    "@font-face",
    "@font-feature-values",
    "@font-palette-values",
    "@import",
    "@keyframes",
    "@-webkit-keyframes",
    "@-moz-keyframes",
    "@-o-keyframes",
    "@layer",
    "@media",
    "@namespace",
    "@page",
    "@property",
    "@scope",
    "@starting-style",
    "@supports",
    "@view-transition",
    "@viewport",
    "@-ms-viewport",
    "@-o-viewport",
    "@-moz-document",
];
