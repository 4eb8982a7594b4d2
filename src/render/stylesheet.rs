const STYLESHEET: &str = include_str!("style.css");

/// The site stylesheet. Does not depend on the content being rendered.
pub fn render_stylesheet() -> &'static str {
    STYLESHEET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_covers_page_classes() {
        let css = render_stylesheet();
        for selector in [".container", "header img", "#photo-upload", ".skills-grid", "footer"] {
            assert!(css.contains(selector), "missing selector {}", selector);
        }
        assert!(!css.contains("{{"));
    }
}
