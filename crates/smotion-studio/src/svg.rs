//! SVG envelope validation for generated drawings.

use crate::error::{StudioError, StudioResult};

/// Check that a model response is a bare SVG document and return it trimmed.
///
/// Accepts a trimmed body whose prefix is `<svg` and suffix is `</svg>`
/// (case-insensitive). Markdown code fences are stripped first, since models
/// occasionally wrap output despite instructions. This is an envelope check
/// only; the XML body is not parsed.
pub fn validate_svg(raw: &str, view: &str) -> StudioResult<String> {
    let mut text = raw.trim();
    if let Some(stripped) = text.strip_prefix("```svg") {
        text = stripped;
    } else if let Some(stripped) = text.strip_prefix("```xml") {
        text = stripped;
    } else if let Some(stripped) = text.strip_prefix("```") {
        text = stripped;
    }
    if let Some(stripped) = text.strip_suffix("```") {
        text = stripped;
    }
    let text = text.trim();

    let lower = text.to_lowercase();
    if !lower.starts_with("<svg") {
        return Err(StudioError::InvalidSvg {
            view: view.to_string(),
            detail: "missing <svg prefix".to_string(),
        });
    }
    if !lower.ends_with("</svg>") {
        return Err(StudioError::InvalidSvg {
            view: view.to_string(),
            detail: "missing </svg> suffix".to_string(),
        });
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_svg() {
        let svg = validate_svg("  <svg viewBox=\"0 0 10 10\"></svg>\n", "Front").unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_accepts_mixed_case() {
        assert!(validate_svg("<SVG></SVG>", "Front").is_ok());
    }

    #[test]
    fn test_strips_code_fence() {
        let svg = validate_svg("```svg\n<svg></svg>\n```", "Top").unwrap();
        assert_eq!(svg, "<svg></svg>");
    }

    #[test]
    fn test_rejects_prose() {
        let err = validate_svg("Here is your drawing: <svg></svg>", "Left").unwrap_err();
        assert!(matches!(err, StudioError::InvalidSvg { .. }));
    }

    #[test]
    fn test_rejects_truncated() {
        assert!(validate_svg("<svg><path d=\"M0 0\"/>", "Front").is_err());
    }
}
