//! Small rendering helpers.

use pulldown_cmark::{html, Options, Parser};

/// Convert Markdown content into HTML with common extensions enabled. Used
/// for the read-only previews of document and product descriptions.
pub fn markdown_to_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_markdown_renders_nothing() {
        assert_eq!(markdown_to_html("   \n"), "");
    }

    #[test]
    fn renders_basic_markup() {
        let html = markdown_to_html("**ಸಂಪುಟ** ಒಂದು");
        assert!(html.contains("<strong>ಸಂಪುಟ</strong>"));
    }
}
