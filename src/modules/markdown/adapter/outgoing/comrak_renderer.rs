use crate::markdown::application::ports::outgoing::{MarkdownRenderer, RenderError};
use comrak::plugins::syntect::SyntectAdapter;
use comrak::{markdown_to_html_with_plugins, Options, Plugins};

/// Previews are bounded; anything larger is rejected before parsing.
const MAX_PREVIEW_BYTES: usize = 256 * 1024;

/// Comrak-backed renderer with syntect highlighting for fenced code
/// blocks. Default comrak options escape raw HTML in the input.
pub struct ComrakRenderer {
    adapter: SyntectAdapter,
}

impl ComrakRenderer {
    pub fn new() -> Self {
        Self {
            adapter: SyntectAdapter::new(Some("base16-ocean.dark")),
        }
    }
}

impl Default for ComrakRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for ComrakRenderer {
    fn render(&self, content: &str) -> Result<String, RenderError> {
        if content.len() > MAX_PREVIEW_BYTES {
            return Err(RenderError::TooLarge {
                max: MAX_PREVIEW_BYTES,
            });
        }

        let mut plugins = Plugins::default();
        plugins.render.codefence_syntax_highlighter = Some(&self.adapter);

        Ok(markdown_to_html_with_plugins(
            content,
            &Options::default(),
            &plugins,
        ))
    }
}
