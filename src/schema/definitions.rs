//! The built-in catalogue of CSS property rules.
//!
//! [`static@DEFINITIONS`] maps every recognized property name, and the argument schema of every
//! allowed function (`rgb()`, `linear-gradient()`, ...), to its rule. It is the menu that
//! [`crate::CssSchema::with_names`] draws from. [`DEFAULT_WHITELIST`] names the conservative
//! subset behind [`static@crate::DEFAULT`].
//!
//! Function argument schemas are keyed by the function name followed by `()`, so a rule
//! allowing `rgb(` points at the `rgb()` entry.
//!
//! Rules that several properties share are built once and shared by reference: the four
//! margin sides, `margin`, `width` and `min-height` all point at the same [`PropertyRc`].

use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;

use crate::{
    schema::{
        cssschema::check_self_contained,
        mask::TokenMask,
        property::{Property, PropertyRc},
    },
    Result,
};

const NONE: TokenMask = TokenMask::empty();
const QUANTITY: TokenMask = TokenMask::QUANTITY;
const HASH: TokenMask = TokenMask::HASH_VALUE;
const URL: TokenMask = TokenMask::URL;
const STRING: TokenMask = TokenMask::STRING;
const SIGNED: TokenMask = TokenMask::QUANTITY.union(TokenMask::NEGATIVE);
const SIGNED_HASH: TokenMask = SIGNED.union(TokenMask::HASH_VALUE);
const STRING_QUANTITY: TokenMask = TokenMask::STRING.union(TokenMask::QUANTITY);
const HASH_QUANTITY: TokenMask = TokenMask::HASH_VALUE.union(TokenMask::QUANTITY);
const HASH_URL: TokenMask = TokenMask::HASH_VALUE.union(TokenMask::URL);
const BACKGROUND: TokenMask = SIGNED_HASH.union(TokenMask::URL);
const FONT_FAMILY: TokenMask = TokenMask::STRING.union(TokenMask::UNRESERVED_WORD);
const FONT: TokenMask = FONT_FAMILY.union(TokenMask::QUANTITY);

/// CSS named colors
const COLOR_NAMES: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkturquoise", "darkviolet", "deeppink", "deepskyblue",
    "dimgray", "dodgerblue", "firebrick", "floralwhite", "forestgreen", "fuchsia", "gainsboro",
    "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow", "honeydew", "hotpink",
    "indianred", "indigo", "ivory", "khaki", "lavender", "lavenderblush", "lawngreen",
    "lemonchiffon", "lightblue", "lightcoral", "lightcyan", "lightgoldenrodyellow",
    "lightgreen", "lightgrey", "lightpink", "lightsalmon", "lightseagreen", "lightskyblue",
    "lightslategray", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "red", "rosybrown", "royalblue", "saddlebrown", "salmon",
    "sandybrown", "seagreen", "seashell", "sienna", "silver", "skyblue", "slateblue",
    "slategray", "snow", "springgreen", "steelblue", "tan", "teal", "thistle", "tomato",
    "turquoise", "violet", "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

const INHERIT: &[&str] = &["inherit"];
const INHERIT_NONE: &[&str] = &["inherit", "none"];
const INHERIT_NORMAL: &[&str] = &["inherit", "normal"];
const INHERIT_MEDIUM: &[&str] = &["inherit", "medium"];
const AUTO_INHERIT: &[&str] = &["auto", "inherit"];
const LEFT_RIGHT: &[&str] = &["left", "right"];
const BOTTOM_TOP: &[&str] = &["bottom", "top"];
const COMMA: &[&str] = &[","];

const BORDER_STYLES: &[&str] = &["dashed", "dotted", "double", "groove", "outset", "ridge", "solid"];
const BORDER_WIDTHS: &[&str] = &["thick", "thin"];
const OUTLINE_KEYWORDS: &[&str] = &["hidden", "inherit", "inset", "invert", "medium", "none"];

const AZIMUTH_KEYWORDS: &[&str] = &[
    "behind", "center-left", "center-right", "far-left", "far-right", "left-side", "leftwards",
    "right-side", "rightwards",
];

const BACKGROUND_BOXES: &[&str] = &["border-box", "contain", "content-box", "cover", "padding-box"];
const BACKGROUND_REPEATS: &[&str] = &["no-repeat", "repeat-x", "repeat-y", "round", "space"];
const BACKGROUND_KEYWORDS: &[&str] = &[
    ",", "/", "auto", "center", "fixed", "inherit", "local", "none", "repeat", "scroll",
    "transparent",
];

const CURSORS: &[&str] = &[
    "all-scroll", "col-resize", "crosshair", "default", "e-resize", "hand", "help", "move",
    "n-resize", "ne-resize", "no-drop", "not-allowed", "nw-resize", "pointer", "progress",
    "row-resize", "s-resize", "se-resize", "sw-resize", "text", "vertical-text", "w-resize",
    "wait",
];

const DISPLAYS: &[&str] = &[
    "-moz-inline-box", "-moz-inline-stack", "block", "inline", "inline-block", "inline-table",
    "list-item", "run-in", "table", "table-caption", "table-cell", "table-column",
    "table-column-group", "table-footer-group", "table-header-group", "table-row",
    "table-row-group",
];

const FONT_WEIGHTS: &[&str] = &[
    "100", "200", "300", "400", "500", "600", "700", "800", "900", "bold", "bolder", "lighter",
];
const FONT_SIZES: &[&str] = &[
    "large", "larger", "small", "smaller", "x-large", "x-small", "xx-large", "xx-small",
];
const SYSTEM_FONTS: &[&str] = &["caption", "icon", "menu", "message-box", "small-caption", "status-bar"];
const GENERIC_FAMILIES: &[&str] = &["cursive", "fantasy", "monospace", "sans-serif", "serif"];
const FONT_SLANTS: &[&str] = &["italic", "oblique"];
const FONT_KEYWORDS: &[&str] = &[",", "/", "inherit", "medium", "normal", "small-caps"];
const FONT_STRETCHES: &[&str] = &[
    "condensed", "expanded", "extra-condensed", "extra-expanded", "narrower", "semi-condensed",
    "semi-expanded", "ultra-condensed", "ultra-expanded", "wider",
];

const LIST_STYLE_TYPES: &[&str] = &[
    "armenian", "cjk-decimal", "decimal", "decimal-leading-zero", "disc", "disclosure-closed",
    "disclosure-open", "ethiopic-numeric", "georgian", "hebrew", "hiragana", "hiragana-iroha",
    "japanese-formal", "japanese-informal", "katakana", "katakana-iroha",
    "korean-hangul-formal", "korean-hanja-formal", "korean-hanja-informal", "lower-alpha",
    "lower-greek", "lower-latin", "lower-roman", "simp-chinese-formal",
    "simp-chinese-informal", "square", "trad-chinese-formal", "trad-chinese-informal",
    "upper-alpha", "upper-latin", "upper-roman",
];
const LIST_STYLE_POSITIONS: &[&str] = &["inside", "outside"];
const LIST_STYLE_KEYWORDS: &[&str] = &["circle", "inherit", "none"];

const OVERFLOW_BOXES: &[&str] = &["auto", "hidden", "scroll", "visible"];

const INITIAL_INHERIT: &[&str] = &["initial", "inherit"];

/// Color functions; the argument schemas are `rgb()`, `rgba()`, `hsl()` and `hsla()`
const COLOR_FUNCTIONS: &[(&str, &str)] = &[
    ("rgb(", "rgb()"),
    ("rgba(", "rgba()"),
    ("hsl(", "hsl()"),
    ("hsla(", "hsla()"),
];

const IMAGE_FUNCTIONS: &[(&str, &str)] = &[
    ("image(", "image()"),
    ("linear-gradient(", "linear-gradient()"),
    ("radial-gradient(", "radial-gradient()"),
    ("repeating-linear-gradient(", "repeating-linear-gradient()"),
    ("repeating-radial-gradient(", "repeating-radial-gradient()"),
];

const BACKGROUND_FUNCTIONS: &[(&str, &str)] = &[
    ("image(", "image()"),
    ("linear-gradient(", "linear-gradient()"),
    ("-moz-linear-gradient(", "-moz-linear-gradient()"),
    ("-webkit-linear-gradient(", "-webkit-linear-gradient()"),
    ("radial-gradient(", "radial-gradient()"),
    ("repeating-linear-gradient(", "repeating-linear-gradient()"),
    ("repeating-radial-gradient(", "repeating-radial-gradient()"),
    ("rgb(", "rgb()"),
    ("rgba(", "rgba()"),
    ("hsl(", "hsl()"),
    ("hsla(", "hsla()"),
];

const RECT_FUNCTION: &[(&str, &str)] = &[("rect(", "rect()")];

/// Properties and function argument schemas allowed by [`static@crate::DEFAULT`]
pub const DEFAULT_WHITELIST: &[&str] = &[
    "-moz-border-radius",
    "-moz-border-radius-bottomleft",
    "-moz-border-radius-bottomright",
    "-moz-border-radius-topleft",
    "-moz-border-radius-topright",
    "-moz-box-shadow",
    "-moz-outline",
    "-moz-outline-color",
    "-moz-outline-style",
    "-moz-outline-width",
    "-o-text-overflow",
    "-webkit-border-bottom-left-radius",
    "-webkit-border-bottom-right-radius",
    "-webkit-border-radius",
    "-webkit-border-radius-bottom-left",
    "-webkit-border-radius-bottom-right",
    "-webkit-border-radius-top-left",
    "-webkit-border-radius-top-right",
    "-webkit-border-top-left-radius",
    "-webkit-border-top-right-radius",
    "-webkit-box-shadow",
    "azimuth",
    "background",
    "background-attachment",
    "background-color",
    "background-image",
    "background-position",
    "background-repeat",
    "background-size",
    "border",
    "border-bottom",
    "border-bottom-color",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "border-bottom-style",
    "border-bottom-width",
    "border-collapse",
    "border-color",
    "border-image-source",
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
    "box-shadow",
    "caption-side",
    "color",
    "cue",
    "cue-after",
    "cue-before",
    "direction",
    "elevation",
    "empty-cells",
    "font",
    "font-family",
    "font-size",
    "font-stretch",
    "font-style",
    "font-variant",
    "font-weight",
    "height",
    "image()",
    "letter-spacing",
    "line-height",
    "linear-gradient()",
    "-moz-linear-gradient()",
    "-webkit-linear-gradient()",
    "list-style",
    "list-style-image",
    "list-style-position",
    "list-style-type",
    "margin",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "margin-top",
    "max-height",
    "max-width",
    "min-height",
    "min-width",
    "outline",
    "outline-color",
    "outline-style",
    "outline-width",
    "padding",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "padding-top",
    "pause",
    "pause-after",
    "pause-before",
    "pitch",
    "pitch-range",
    "quotes",
    "radial-gradient()",
    "rect()",
    "repeating-linear-gradient()",
    "repeating-radial-gradient()",
    "rgb()",
    "rgba()",
    "hsl()",
    "hsla()",
    "richness",
    "speak",
    "speak-header",
    "speak-numeral",
    "speak-punctuation",
    "speech-rate",
    "stress",
    "table-layout",
    "text-align",
    "text-decoration",
    "text-indent",
    "text-overflow",
    "text-shadow",
    "text-transform",
    "text-wrap",
    "unicode-bidi",
    "vertical-align",
    "voice-family",
    "volume",
    "white-space",
    "width",
    "word-spacing",
    "word-wrap",
];

/// Maps lower-case CSS property names and function argument schema keys to their rules.
///
/// Initialized once, on first use, and never modified afterwards.
pub static DEFINITIONS: LazyLock<IndexMap<&'static str, PropertyRc>> =
    LazyLock::new(build_definitions);

/// Creates a shared rule from literal groups and function keys
fn rule(mask: TokenMask, literals: &[&[&'static str]], functions: &[(&str, &str)]) -> PropertyRc {
    Arc::new(Property::new(
        mask,
        literals.iter().flat_map(|group| group.iter().copied()),
        functions.iter().copied(),
    ))
}

#[allow(clippy::too_many_lines)]
fn build_definitions() -> IndexMap<&'static str, PropertyRc> {
    let mut defs: IndexMap<&'static str, PropertyRc> = IndexMap::new();
    let mut put = |names: &[&'static str], shared: &PropertyRc| {
        for name in names {
            defs.insert(*name, shared.clone());
        }
    };

    // CSS3 additions
    put(
        &["background-clip"],
        &rule(
            HASH,
            &[&["border-box", "padding-box", "content-box", "initial", "inherit"]],
            &[],
        ),
    );
    put(
        &["-webkit-background-clip"],
        &rule(
            HASH,
            &[&["border", "content", "padding", "text", "padding-box"]],
            &[],
        ),
    );
    put(
        &["border-image"],
        &rule(
            QUANTITY | URL,
            &[&[",", "repeat", "initial", "inherit", "round", "stretch"]],
            &[],
        ),
    );
    put(
        &["box-decoration-break"],
        &rule(STRING, &[&["slice", "clone"]], &[]),
    );
    put(
        &["box-sizing"],
        &rule(STRING, &[&["content-box", "border-box"], INITIAL_INHERIT], &[]),
    );
    put(
        &["break-after", "break-before"],
        &rule(
            STRING,
            &[&["auto", "always", "avoid", "left", "right"], INITIAL_INHERIT],
            &[],
        ),
    );
    put(
        &["column-span"],
        &rule(STRING, &[&["none", "all"], INITIAL_INHERIT], &[]),
    );
    put(
        &["column-width"],
        &rule(STRING_QUANTITY, &[&["auto"], INITIAL_INHERIT], &[]),
    );
    put(
        &["columns"],
        &rule(STRING_QUANTITY, &[&["auto"], INITIAL_INHERIT], &[]),
    );
    put(&["float-offset"], &rule(QUANTITY, &[], &[]));
    put(
        &["font-size-adjust"],
        &rule(STRING_QUANTITY, &[&["none"], INITIAL_INHERIT], &[]),
    );
    put(
        &["grid-column", "grid-row"],
        &rule(STRING_QUANTITY, &[INHERIT_NONE], &[]),
    );
    put(
        &["hanging-punctuation"],
        &rule(
            STRING,
            &[&["none", "first", "last", "allow-end", "force-end"], INITIAL_INHERIT],
            &[],
        ),
    );
    put(
        &["line-break"],
        &rule(STRING, &[&["auto", "loose", "normal", "strict"]], &[]),
    );
    put(
        &["overflow-style"],
        &rule(
            STRING,
            &[&["auto", "scrollbar", "panner", "move", "marquee"]],
            &[],
        ),
    );
    put(
        &["overflow-wrap"],
        &rule(
            STRING,
            &[&["normal", "break-word", "inherit", "initial", "unset"]],
            &[],
        ),
    );
    put(
        &["punctuation-trim"],
        &rule(
            STRING,
            &[&["none", "start", "end", "allow-end", "adjacent"]],
            &[],
        ),
    );
    put(
        &["text-decoration-color"],
        &rule(HASH, &[INHERIT, COLOR_NAMES], COLOR_FUNCTIONS),
    );
    put(
        &["text-decoration-line"],
        &rule(
            STRING,
            &[&["none", "underline", "overline", "line-through"], INITIAL_INHERIT],
            &[],
        ),
    );
    put(
        &["text-decoration-skip"],
        &rule(
            STRING,
            &[
                &["none", "objects", "spaces", "ink", "edges", "box-decoration", "unset"],
                INITIAL_INHERIT,
            ],
            &[],
        ),
    );
    put(
        &["text-decoration-style"],
        &rule(
            STRING,
            &[&["solid", "double", "dotted", "dashed", "wavy"], INITIAL_INHERIT],
            &[],
        ),
    );
    put(
        &["text-justify"],
        &rule(
            STRING,
            &[
                &[
                    "auto",
                    "inter-word",
                    "inter-ideograph",
                    "inter-cluster",
                    "distribute",
                    "kashida",
                    "trim",
                ],
                INITIAL_INHERIT,
            ],
            &[],
        ),
    );
    put(
        &["text-outline"],
        &rule(HASH_QUANTITY, &[INHERIT, COLOR_NAMES], COLOR_FUNCTIONS),
    );
    put(
        &["text-space-collapse"],
        &rule(STRING, &[&["collapse", "preserve", "preserve-breaks"]], &[]),
    );
    put(
        &["text-underline-position"],
        &rule(
            STRING,
            &[&["auto", "under", "left", "right", "unset"], INITIAL_INHERIT],
            &[],
        ),
    );
    put(
        &["word-break"],
        &rule(
            STRING,
            &[&["normal", "break-all", "keep-all"], INITIAL_INHERIT],
            &[],
        ),
    );

    // Shared rules
    let border_radius = rule(SIGNED, &[&["/"]], &[]);
    let border_corner_radius = rule(SIGNED, &[], &[]);
    let outline = rule(
        SIGNED_HASH,
        &[COLOR_NAMES, BORDER_STYLES, BORDER_WIDTHS, OUTLINE_KEYWORDS],
        COLOR_FUNCTIONS,
    );
    let outline_color = rule(HASH, &[&["inherit", "invert"], COLOR_NAMES], COLOR_FUNCTIONS);
    let outline_style = rule(NONE, &[BORDER_STYLES, &["hidden", "inherit", "inset", "none"]], &[]);
    let outline_width = rule(SIGNED, &[BORDER_WIDTHS, INHERIT_MEDIUM], &[]);
    let text_overflow = rule(NONE, &[&["clip", "ellipsis"]], &[]);
    let border = rule(
        SIGNED_HASH,
        &[
            &["hidden", "inherit", "inset", "medium", "none", "transparent"],
            COLOR_NAMES,
            BORDER_STYLES,
            BORDER_WIDTHS,
        ],
        COLOR_FUNCTIONS,
    );
    let border_color = rule(HASH, &[&["inherit", "transparent"], COLOR_NAMES], COLOR_FUNCTIONS);
    let box_shadow = rule(SIGNED_HASH, &[&[",", "inset", "none"], COLOR_NAMES], COLOR_FUNCTIONS);
    let signed_inherit = rule(SIGNED, &[INHERIT], &[]);
    let height = rule(SIGNED, &[AUTO_INHERIT], &[]);
    let bottom = rule(SIGNED, &[AUTO_INHERIT], &[]);
    let cue = rule(URL, &[INHERIT_NONE], &[]);
    let letter_spacing = rule(SIGNED, &[INHERIT_NORMAL], &[]);
    let margin = rule(SIGNED, &[AUTO_INHERIT], &[]);
    let max_size = rule(QUANTITY, &[&["auto", "inherit", "none"]], &[]);
    let overflow_axis = rule(NONE, &[&["no-content", "no-display"], OVERFLOW_BOXES], &[]);
    let page_break = rule(NONE, &[LEFT_RIGHT, &["always", "auto", "avoid", "inherit"]], &[]);
    let color_arguments = rule(QUANTITY, &[COMMA], &[]);
    let linear_gradient = rule(
        SIGNED_HASH,
        &[LEFT_RIGHT, BOTTOM_TOP, &[",", "to"], COLOR_NAMES],
        COLOR_FUNCTIONS,
    );
    let radial_gradient = rule(
        SIGNED_HASH,
        &[
            LEFT_RIGHT,
            BOTTOM_TOP,
            COLOR_NAMES,
            &[
                "at",
                "closest-corner",
                "closest-side",
                "ellipse",
                "farthest-corner",
                "farthest-side",
            ],
            &[",", "center", "circle"],
        ],
        COLOR_FUNCTIONS,
    );

    // Vendor-prefixed properties
    put(&["-moz-border-radius", "-webkit-border-radius", "border-radius"], &border_radius);
    put(
        &[
            "-moz-border-radius-bottomleft",
            "-moz-border-radius-bottomright",
            "-moz-border-radius-topleft",
            "-moz-border-radius-topright",
            "-webkit-border-bottom-left-radius",
            "-webkit-border-bottom-right-radius",
            "-webkit-border-radius-bottom-left",
            "-webkit-border-radius-bottom-right",
            "-webkit-border-radius-top-left",
            "-webkit-border-radius-top-right",
            "-webkit-border-top-left-radius",
            "-webkit-border-top-right-radius",
            "border-bottom-left-radius",
            "border-bottom-right-radius",
            "border-top-left-radius",
            "border-top-right-radius",
        ],
        &border_corner_radius,
    );
    put(&["-moz-opacity"], &rule(QUANTITY, &[INHERIT], &[]));
    put(&["-moz-outline", "outline"], &outline);
    put(&["-moz-outline-color", "outline-color"], &outline_color);
    put(
        &[
            "-moz-outline-style",
            "outline-style",
            "border-style",
            "border-bottom-style",
            "border-left-style",
            "border-right-style",
            "border-top-style",
        ],
        &outline_style,
    );
    put(
        &[
            "-moz-outline-width",
            "outline-width",
            "border-width",
            "border-bottom-width",
            "border-left-width",
            "border-right-width",
            "border-top-width",
        ],
        &outline_width,
    );
    put(&["-o-text-overflow", "text-overflow"], &text_overflow);
    put(&["-moz-box-shadow", "-webkit-box-shadow", "box-shadow", "text-shadow"], &box_shadow);

    // CSS 2.1 and aural properties
    put(
        &["azimuth"],
        &rule(SIGNED, &[AZIMUTH_KEYWORDS, LEFT_RIGHT, &["center", "inherit"]], &[]),
    );
    put(
        &["background"],
        &rule(
            BACKGROUND,
            &[
                LEFT_RIGHT,
                BACKGROUND_BOXES,
                BACKGROUND_REPEATS,
                BOTTOM_TOP,
                BACKGROUND_KEYWORDS,
                COLOR_NAMES,
            ],
            BACKGROUND_FUNCTIONS,
        ),
    );
    put(
        &["background-attachment"],
        &rule(NONE, &[&[",", "fixed", "local", "scroll"]], &[]),
    );
    put(
        &["background-color"],
        &rule(HASH, &[&["inherit", "transparent"], COLOR_NAMES], COLOR_FUNCTIONS),
    );
    put(
        &["background-image"],
        &rule(URL, &[&[",", "none"]], IMAGE_FUNCTIONS),
    );
    put(
        &["background-position"],
        &rule(SIGNED, &[LEFT_RIGHT, BOTTOM_TOP, &[",", "center"]], &[]),
    );
    put(
        &["background-repeat"],
        &rule(NONE, &[BACKGROUND_REPEATS, &[",", "repeat"]], &[]),
    );
    put(
        &["background-size"],
        &rule(SIGNED, &[&["auto", "cover", "contain", "initial", "inherit"]], &[]),
    );
    put(
        &["border", "border-bottom", "border-left", "border-right", "border-top"],
        &border,
    );
    put(
        &[
            "border-bottom-color",
            "border-color",
            "border-left-color",
            "border-right-color",
            "border-top-color",
        ],
        &border_color,
    );
    put(
        &["border-collapse"],
        &rule(NONE, &[&["collapse", "inherit", "separate"]], &[]),
    );
    put(
        &["border-image-source"],
        &rule(URL, &[INHERIT_NONE], IMAGE_FUNCTIONS),
    );
    put(
        &[
            "border-spacing",
            "pause",
            "pause-after",
            "pause-before",
            "pitch-range",
            "richness",
            "stress",
            "text-indent",
        ],
        &signed_inherit,
    );
    put(&["bottom", "z-index"], &bottom);
    put(&["caption-side"], &rule(NONE, &[BOTTOM_TOP, INHERIT], &[]));
    put(
        &["clear"],
        &rule(NONE, &[LEFT_RIGHT, &["both", "inherit", "none"]], &[]),
    );
    put(&["clip"], &rule(NONE, &[AUTO_INHERIT], RECT_FUNCTION));
    put(
        &["color"],
        &rule(HASH, &[INHERIT, COLOR_NAMES], COLOR_FUNCTIONS),
    );
    put(&["content"], &rule(STRING, &[&["none", "normal"]], &[]));
    put(&["cue", "cue-after", "cue-before"], &cue);
    put(
        &["cursor"],
        &rule(URL, &[CURSORS, &[",", "auto", "inherit"]], &[]),
    );
    put(&["direction"], &rule(NONE, &[&["ltr", "rtl"], INHERIT], &[]));
    put(&["display"], &rule(NONE, &[INHERIT_NONE, DISPLAYS], &[]));
    put(
        &["elevation"],
        &rule(
            SIGNED,
            &[&["above", "below", "higher", "level", "lower"], INHERIT],
            &[],
        ),
    );
    put(&["empty-cells"], &rule(NONE, &[&["hide", "show"], INHERIT], &[]));
    put(&["float"], &rule(NONE, &[LEFT_RIGHT, INHERIT_NONE], &[]));
    put(
        &["font"],
        &rule(
            FONT,
            &[
                FONT_WEIGHTS,
                FONT_SIZES,
                SYSTEM_FONTS,
                GENERIC_FAMILIES,
                FONT_SLANTS,
                FONT_KEYWORDS,
            ],
            &[],
        ),
    );
    put(
        &["font-family"],
        &rule(FONT_FAMILY, &[&[",", "inherit"], GENERIC_FAMILIES], &[]),
    );
    put(&["font-size"], &rule(QUANTITY, &[FONT_SIZES, INHERIT_MEDIUM], &[]));
    put(
        &["font-stretch"],
        &rule(NONE, &[FONT_STRETCHES, &["normal"]], &[]),
    );
    put(&["font-style"], &rule(NONE, &[FONT_SLANTS, INHERIT_NORMAL], &[]));
    put(
        &["font-variant"],
        &rule(NONE, &[&["inherit", "normal", "small-caps"]], &[]),
    );
    put(&["font-weight"], &rule(NONE, &[FONT_WEIGHTS, INHERIT_NORMAL], &[]));
    put(&["height", "left", "right", "top"], &height);
    put(&["letter-spacing", "word-spacing"], &letter_spacing);
    put(&["line-height"], &rule(QUANTITY, &[INHERIT_NORMAL], &[]));
    put(
        &["list-style"],
        &rule(
            URL,
            &[LIST_STYLE_TYPES, LIST_STYLE_POSITIONS, LIST_STYLE_KEYWORDS],
            IMAGE_FUNCTIONS,
        ),
    );
    put(
        &["list-style-image"],
        &rule(URL, &[INHERIT_NONE], IMAGE_FUNCTIONS),
    );
    put(
        &["list-style-position"],
        &rule(NONE, &[LIST_STYLE_POSITIONS, INHERIT], &[]),
    );
    put(
        &["list-style-type"],
        &rule(NONE, &[LIST_STYLE_TYPES, LIST_STYLE_KEYWORDS], &[]),
    );
    put(
        &[
            "margin",
            "margin-bottom",
            "margin-left",
            "margin-right",
            "margin-top",
            "min-height",
            "min-width",
            "width",
        ],
        &margin,
    );
    put(&["max-height", "max-width"], &max_size);
    put(&["opacity"], &rule(QUANTITY, &[INHERIT], &[]));
    put(
        &["overflow"],
        &rule(NONE, &[&["auto", "hidden", "inherit", "scroll", "visible"]], &[]),
    );
    put(&["overflow-x", "overflow-y"], &overflow_axis);
    put(
        &["padding", "padding-bottom", "padding-left", "padding-right", "padding-top"],
        &rule(SIGNED, &[INHERIT], &[]),
    );
    put(&["page-break-after", "page-break-before"], &page_break);
    put(
        &["page-break-inside"],
        &rule(NONE, &[&["auto", "avoid", "inherit"]], &[]),
    );
    put(
        &["pitch"],
        &rule(SIGNED, &[INHERIT_MEDIUM, &["high", "low", "x-high", "x-low"]], &[]),
    );
    put(
        &["play-during"],
        &rule(URL, &[&["auto", "inherit", "mix", "none", "repeat"]], &[]),
    );
    put(
        &["position"],
        &rule(NONE, &[INHERIT, &["absolute", "relative", "static"]], &[]),
    );
    put(&["quotes"], &rule(STRING, &[INHERIT_NONE], &[]));
    put(
        &["speak"],
        &rule(NONE, &[&["inherit", "none", "normal", "spell-out"]], &[]),
    );
    put(
        &["speak-header"],
        &rule(NONE, &[&["always", "inherit", "once"]], &[]),
    );
    put(
        &["speak-numeral"],
        &rule(NONE, &[INHERIT, &["continuous", "digits"]], &[]),
    );
    put(
        &["speak-punctuation"],
        &rule(NONE, &[&["code", "inherit", "none"]], &[]),
    );
    put(
        &["speech-rate"],
        &rule(
            SIGNED,
            &[
                INHERIT_MEDIUM,
                &["fast", "faster", "slow", "slower", "x-fast", "x-slow"],
            ],
            &[],
        ),
    );
    put(
        &["table-layout"],
        &rule(NONE, &[&["auto", "fixed", "inherit"]], &[]),
    );
    put(
        &["text-align"],
        &rule(NONE, &[LEFT_RIGHT, &["center", "inherit", "justify"]], &[]),
    );
    put(
        &["text-decoration"],
        &rule(
            NONE,
            &[INHERIT_NONE, &["blink", "line-through", "overline", "underline"]],
            &[],
        ),
    );
    put(
        &["text-transform"],
        &rule(
            NONE,
            &[INHERIT_NONE, &["capitalize", "lowercase", "uppercase"]],
            &[],
        ),
    );
    put(
        &["text-wrap"],
        &rule(NONE, &[&["none", "normal"], &["suppress", "unrestricted"]], &[]),
    );
    put(
        &["unicode-bidi"],
        &rule(NONE, &[INHERIT_NORMAL, &["bidi-override", "embed"]], &[]),
    );
    put(
        &["vertical-align"],
        &rule(
            SIGNED,
            &[
                BOTTOM_TOP,
                INHERIT,
                &["baseline", "middle", "sub", "super", "text-bottom", "text-top"],
            ],
            &[],
        ),
    );
    put(
        &["visibility"],
        &rule(NONE, &[&["collapse", "hidden", "inherit", "visible"]], &[]),
    );
    put(
        &["voice-family"],
        &rule(STRING, &[&[",", "inherit"], &["child", "female", "male"]], &[]),
    );
    put(
        &["volume"],
        &rule(
            QUANTITY,
            &[INHERIT_MEDIUM, &["loud", "silent", "soft", "x-loud", "x-soft"]],
            &[],
        ),
    );
    put(
        &["white-space"],
        &rule(
            NONE,
            &[
                INHERIT_NORMAL,
                &["-moz-pre-wrap", "-o-pre-wrap", "-pre-wrap", "nowrap", "pre", "pre-line", "pre-wrap"],
            ],
            &[],
        ),
    );
    put(&["word-wrap"], &rule(NONE, &[&["break-word", "normal"]], &[]));
    put(&["zoom"], &rule(QUANTITY, &[&["normal"]], &[]));

    // Function argument schemas
    put(&["rgb()", "rgba()", "hsl()", "hsla()"], &color_arguments);
    put(
        &["image()"],
        &rule(HASH_URL, &[COLOR_NAMES, COMMA], COLOR_FUNCTIONS),
    );
    put(
        &[
            "linear-gradient()",
            "-moz-linear-gradient()",
            "-webkit-linear-gradient()",
            "repeating-linear-gradient()",
        ],
        &linear_gradient,
    );
    put(
        &["radial-gradient()", "repeating-radial-gradient()"],
        &radial_gradient,
    );
    put(&["rect()"], &rule(SIGNED, &[&[",", "auto"]], &[]));

    defs
}

/// Re-validates that the built-in catalogue is self-contained.
///
/// Every function key referenced by a catalogue rule must itself be a catalogue entry. The
/// catalogue is built that way; this check guards edits to the data above.
///
/// # Errors
/// Returns [`crate::Error::NotSelfContained`] for the first missing function key.
pub fn verify_definitions() -> Result<()> {
    check_self_contained(
        DEFINITIONS.iter().map(|(name, rule)| (*name, &**rule)),
        |key| DEFINITIONS.contains_key(key),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_is_self_contained() {
        assert!(verify_definitions().is_ok());
    }

    #[test]
    fn test_catalogue_keys_are_canonical() {
        for name in DEFINITIONS.keys() {
            assert_eq!(*name, name.to_ascii_lowercase(), "{name}");
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn test_default_whitelist_is_defined() {
        for name in DEFAULT_WHITELIST {
            assert!(DEFINITIONS.contains_key(name), "{name} is not defined");
        }
    }

    #[test]
    fn test_default_whitelist_is_unique() {
        let unique: HashSet<&str> = DEFAULT_WHITELIST.iter().copied().collect();
        assert_eq!(unique.len(), DEFAULT_WHITELIST.len());
    }

    #[test]
    fn test_shared_rules() {
        let margin = &DEFINITIONS["margin"];
        for name in ["margin-left", "margin-right", "margin-top", "margin-bottom", "width"] {
            assert!(Arc::ptr_eq(margin, &DEFINITIONS[name]), "{name}");
        }
        assert!(Arc::ptr_eq(
            &DEFINITIONS["-webkit-border-radius"],
            &DEFINITIONS["border-radius"]
        ));
        assert!(Arc::ptr_eq(&DEFINITIONS["text-shadow"], &DEFINITIONS["box-shadow"]));
    }

    #[test]
    fn test_color_rule() {
        let color = &DEFINITIONS["color"];
        assert_eq!(color.mask(), TokenMask::HASH_VALUE);
        assert!(color.allows_literal("aliceblue"));
        assert!(color.allows_literal("inherit"));
        assert!(!color.allows_literal("transparent"));
        assert_eq!(color.function_key("rgba("), Some("rgba()"));
        assert_eq!(color.function_key("url("), None);
        assert_eq!(color.literals().len(), COLOR_NAMES.len() + 1);
    }

    #[test]
    fn test_color_function_arguments() {
        let rgb = &DEFINITIONS["rgb()"];
        assert_eq!(rgb.mask(), TokenMask::QUANTITY);
        assert!(rgb.allows_literal(","));
        assert!(rgb.fn_keys().is_empty());
        for name in ["rgba()", "hsl()", "hsla()"] {
            assert!(Arc::ptr_eq(rgb, &DEFINITIONS[name]), "{name}");
        }
    }

    #[test]
    fn test_background_rule() {
        let background = &DEFINITIONS["background"];
        assert_eq!(
            background.mask(),
            TokenMask::QUANTITY | TokenMask::HASH_VALUE | TokenMask::NEGATIVE | TokenMask::URL
        );
        assert_eq!(background.fn_keys().len(), BACKGROUND_FUNCTIONS.len());
        assert_eq!(
            background.function_key("-webkit-linear-gradient("),
            Some("-webkit-linear-gradient()")
        );
        assert!(background.allows_literal("no-repeat"));
        assert!(background.allows_literal("left"));
    }

    #[test]
    fn test_font_masks() {
        assert_eq!(
            DEFINITIONS["font"].mask(),
            TokenMask::QUANTITY | TokenMask::STRING | TokenMask::UNRESERVED_WORD
        );
        assert_eq!(
            DEFINITIONS["font-family"].mask(),
            TokenMask::STRING | TokenMask::UNRESERVED_WORD
        );
        assert!(DEFINITIONS["font-family"].allows_literal("sans-serif"));
    }

    #[test]
    fn test_cursor_allows_urls() {
        let cursor = &DEFINITIONS["cursor"];
        assert_eq!(cursor.mask(), TokenMask::URL);
        assert!(cursor.allows_literal("pointer"));
    }

    #[test]
    fn test_float_offset_has_no_literals() {
        let rule = &DEFINITIONS["float-offset"];
        assert_eq!(rule.mask(), TokenMask::QUANTITY);
        assert!(rule.literals().is_empty());
    }

    #[test]
    fn test_structurally_equal_rules() {
        // Declared separately, yet equal by value
        assert_eq!(DEFINITIONS["columns"], DEFINITIONS["column-width"]);
        assert_eq!(DEFINITIONS["bottom"], DEFINITIONS["height"]);
        assert_ne!(DEFINITIONS["margin"], DEFINITIONS["padding"]);
    }
}
