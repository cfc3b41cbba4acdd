use crate::error::{FontpackError, Result};
use std::fs;
use std::path::Path;

/// CSS style/weight pair derived from a variant token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceStyle {
    pub style: &'static str,
    pub weight: String,
}

/// Classify a variant token into font-style and font-weight.
///
/// The bare token "italic" must be checked before the suffix match,
/// otherwise it would be stripped to an empty weight.
#[must_use]
pub fn classify_variant(variant: &str) -> FaceStyle {
    if variant == "italic" {
        FaceStyle {
            style: "italic",
            weight: "400".to_string(),
        }
    } else if let Some(weight) = variant.strip_suffix("italic") {
        FaceStyle {
            style: "italic",
            weight: weight.to_string(),
        }
    } else if variant == "regular" {
        FaceStyle {
            style: "normal",
            weight: "400".to_string(),
        }
    } else {
        FaceStyle {
            style: "normal",
            weight: variant.to_string(),
        }
    }
}

/// Render one `@font-face` block for an installed asset
#[must_use]
pub fn render_rule(family: &str, variant: &str, file_name: &str) -> String {
    let face = classify_variant(variant);
    format!(
        "@font-face {{\n  font-family: '{family}';\n  font-style: {style};\n  font-weight: {weight};\n  src: url('{file_name}') format('woff2');\n}}",
        style = face.style,
        weight = face.weight,
    )
}

/// Write all rules to the stylesheet in one pass, separated by blank lines
pub fn write_stylesheet(path: &Path, rules: &[String]) -> Result<()> {
    tracing::info!("Writing stylesheet to {}", path.display());
    let css = rules.join("\n\n");
    fs::write(path, css)
        .map_err(|e| FontpackError::Stylesheet(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify_bare_italic() {
        let face = classify_variant("italic");
        assert_eq!(face.style, "italic");
        assert_eq!(face.weight, "400");
    }

    #[test]
    fn test_classify_weighted_italic() {
        let face = classify_variant("700italic");
        assert_eq!(face.style, "italic");
        assert_eq!(face.weight, "700");

        let face = classify_variant("100italic");
        assert_eq!(face.style, "italic");
        assert_eq!(face.weight, "100");
    }

    #[test]
    fn test_classify_regular() {
        let face = classify_variant("regular");
        assert_eq!(face.style, "normal");
        assert_eq!(face.weight, "400");
    }

    #[test]
    fn test_classify_bare_weight() {
        let face = classify_variant("300");
        assert_eq!(face.style, "normal");
        assert_eq!(face.weight, "300");

        let face = classify_variant("900");
        assert_eq!(face.style, "normal");
        assert_eq!(face.weight, "900");
    }

    #[test]
    fn test_render_rule() {
        let rule = render_rule("Roboto", "700italic", "Roboto_700italic.woff2");
        assert!(rule.starts_with("@font-face {"));
        assert!(rule.contains("font-family: 'Roboto';"));
        assert!(rule.contains("font-style: italic;"));
        assert!(rule.contains("font-weight: 700;"));
        assert!(rule.contains("src: url('Roboto_700italic.woff2') format('woff2');"));
        assert!(rule.ends_with('}'));
    }

    #[test]
    fn test_write_stylesheet_joins_with_blank_line() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fonts.css");
        let rules = vec![
            render_rule("Roboto", "regular", "Roboto_regular.woff2"),
            render_rule("Roboto", "700italic", "Roboto_700italic.woff2"),
        ];

        write_stylesheet(&path, &rules).unwrap();

        let css = std::fs::read_to_string(&path).unwrap();
        assert_eq!(css.matches("@font-face").count(), 2);
        assert!(css.contains("}\n\n@font-face"));
        // Rules appear in installation order
        let first = css.find("Roboto_regular.woff2").unwrap();
        let second = css.find("Roboto_700italic.woff2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_write_empty_stylesheet() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fonts.css");
        write_stylesheet(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
