//! SVG tag classification: `<svg>`, `<path>`, `<circle>`, etc.
//!
//! Names are stored lowercase; callers lowercase the tag before asking.
//! Tags shared with HTML (`a`, `title`, `style`, `script`) are not listed so
//! that their HTML meaning wins.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

const SVG_TAGS: &[&str] = &[
    // Container elements
    "svg", "g", "defs", "symbol", "use", "switch",
    // Shape elements
    "path", "circle", "rect", "line", "polyline", "polygon", "ellipse",
    // Text elements
    "text", "tspan", "textpath",
    // Gradient elements
    "lineargradient", "radialgradient", "stop",
    // Clipping and masking
    "clippath", "mask", "pattern",
    // Filter elements
    "filter", "feblend", "fecolormatrix", "fecomponenttransfer",
    "fecomposite", "feconvolvematrix", "fediffuselighting",
    "fedisplacementmap", "fedistantlight", "fedropshadow",
    "feflood", "fefuncr", "fefuncg", "fefuncb", "fefunca",
    "fegaussianblur", "feimage", "femerge", "femergenode",
    "femorphology", "feoffset", "fepointlight", "fespecularlighting",
    "fespotlight", "fetile", "feturbulence",
    // Animation elements
    "animate", "animatemotion", "animatetransform", "animatecolor", "set", "mpath",
    // Font elements
    "font", "glyph", "missing-glyph", "hkern", "vkern", "altglyph",
    "altglyphdef", "altglyphitem", "glyphref",
    "font-face", "font-face-src", "font-face-uri", "font-face-format", "font-face-name",
    // Linking and embedding
    "image", "foreignobject", "view",
    // Descriptive and other elements
    "desc", "metadata", "marker", "cursor",
];

/// Process-wide SVG tag set, built on first use and never mutated.
pub static SVG_TAG_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| SVG_TAGS.iter().copied().collect());

/// Check if a lowercase tag names an SVG element
pub fn is_svg_tag(tag: &str) -> bool {
    SVG_TAG_SET.contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_svg_tag() {
        assert!(is_svg_tag("svg"));
        assert!(is_svg_tag("path"));
        assert!(is_svg_tag("circle"));
        assert!(is_svg_tag("lineargradient"));
        assert!(is_svg_tag("fegaussianblur"));
        assert!(is_svg_tag("font-face"));
        assert!(!is_svg_tag("div"));
        assert!(!is_svg_tag("a"));
        assert!(!is_svg_tag("title"));
    }

    #[test]
    fn test_set_is_lowercase() {
        assert!(SVG_TAGS.iter().all(|t| t.chars().all(|c| !c.is_ascii_uppercase())));
        assert!(!is_svg_tag("linearGradient"));
    }
}
