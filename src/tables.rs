//! Fixed translation tables for the recognized Topaz style vocabulary.
//!
//! Pure static data: anything absent from these tables is dropped silently
//! by the translator.

/// CSS selector prefix for a recognized style tag.
pub fn element_selector(tag: &str) -> Option<&'static str> {
    match tag {
        "paragraph" => Some("p"),
        "graphic" => Some(".graphic"),
        _ => None,
    }
}

/// A numeric attribute's target CSS property and the divisor converting
/// the raw Topaz value to em units.
#[derive(Debug, Clone, Copy)]
pub struct NumericAttr {
    pub property: &'static str,
    pub scale: f64,
}

pub fn numeric_attr(attr: &str) -> Option<NumericAttr> {
    let (property, scale) = match attr {
        "hang" => ("text-indent", 135.0),
        "indent" => ("text-indent", 135.0),
        "line-space" => ("line-height", 190.0),
        "margin-bottom" => ("margin-bottom", 135.0),
        "margin-left" => ("margin-left", 135.0),
        "margin-right" => ("margin-right", 135.0),
        "margin-top" => ("margin-top", 135.0),
        "space-after" => ("padding-bottom", 135.0),
        _ => return None,
    };
    Some(NumericAttr { property, scale })
}

/// Verbatim CSS for a compound `attr-value` key from the `align`, `pos`,
/// and `display` attribute families.
pub fn literal_css(compound: &str) -> Option<&'static str> {
    match compound {
        "align-center" => Some("text-align: center; margin-left: auto; margin-right: auto;"),
        "align-left" => Some("text-align: left;"),
        "align-right" => Some("text-align: right;"),
        "align-justify" => Some("text-align: justify;"),
        "display-inline" => Some("display: inline;"),
        "pos-left" => Some("text-align: left;"),
        "pos-right" => Some("text-align: right;"),
        "pos-center" => Some("text-align: center; margin-left: auto; margin-right: auto;"),
        _ => None,
    }
}

/// Heading element for the 3-byte class marker found right after the
/// `.cl_` selector prefix. Topaz books reuse paragraph classes inside
/// chapter and section headings; these markers identify them.
pub fn heading_selector(marker: &str) -> Option<&'static str> {
    match marker {
        "ch1" => Some("h1"),
        "ch2" => Some("h2"),
        "ch3" => Some("h3"),
        "h1-" => Some("h4"),
        "h2-" => Some("h5"),
        "h3_" => Some("h6"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_selector() {
        assert_eq!(element_selector("paragraph"), Some("p"));
        assert_eq!(element_selector("graphic"), Some(".graphic"));
        assert_eq!(element_selector("table"), None);
        assert_eq!(element_selector(""), None);
    }

    #[test]
    fn test_numeric_attr() {
        let hang = numeric_attr("hang").unwrap();
        assert_eq!(hang.property, "text-indent");
        assert_eq!(hang.scale, 135.0);

        let line_space = numeric_attr("line-space").unwrap();
        assert_eq!(line_space.property, "line-height");
        assert_eq!(line_space.scale, 190.0);

        assert!(numeric_attr("font-size").is_none());
    }

    #[test]
    fn test_literal_css() {
        assert_eq!(
            literal_css("align-center"),
            Some("text-align: center; margin-left: auto; margin-right: auto;")
        );
        assert_eq!(literal_css("display-inline"), Some("display: inline;"));
        assert_eq!(literal_css("align-middle"), None);
    }

    #[test]
    fn test_heading_selector() {
        assert_eq!(heading_selector("ch1"), Some("h1"));
        assert_eq!(heading_selector("h3_"), Some("h6"));
        assert_eq!(heading_selector("h3-"), None);
        assert_eq!(heading_selector("foo"), None);
    }
}
