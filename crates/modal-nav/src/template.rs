//! The overlay shell and its embedded navigation viewport.

/// Name of the navigation viewport embedded in the overlay by default.
pub const DEFAULT_VIEWPORT_NAME: &str = "modal-nav";

/// Describes the overlay shell handed to [`OverlayFactory::create`].
///
/// The shell contains exactly one named navigation viewport. Modal states
/// render into that viewport, which is what lets the overlay keep its own
/// navigation stack.
///
/// [`OverlayFactory::create`]: crate::host::OverlayFactory::create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayTemplate {
    viewport_name: String,
}

impl OverlayTemplate {
    /// A shell embedding a viewport called `viewport_name`.
    pub fn new(viewport_name: impl Into<String>) -> Self {
        Self {
            viewport_name: viewport_name.into(),
        }
    }

    /// The embedded viewport's name.
    pub fn viewport_name(&self) -> &str {
        &self.viewport_name
    }

    /// The shell as markup, for hosts that build overlays from templates.
    pub fn markup(&self) -> String {
        format!(
            "<modal-view>\n    <nav-view name=\"{}\"></nav-view>\n</modal-view>",
            escape_attr(&self.viewport_name)
        )
    }
}

impl Default for OverlayTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_NAME)
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        assert_eq!(OverlayTemplate::default().viewport_name(), "modal-nav");
    }

    #[test]
    fn test_markup_embeds_viewport() {
        let markup = OverlayTemplate::new("settings-nav").markup();
        assert!(markup.starts_with("<modal-view>"));
        assert!(markup.contains(r#"<nav-view name="settings-nav"></nav-view>"#));
        assert!(markup.ends_with("</modal-view>"));
    }

    #[test]
    fn test_markup_escapes_name() {
        let markup = OverlayTemplate::new(r#"a"b"#).markup();
        assert!(markup.contains(r#"name="a&quot;b""#));
    }
}
