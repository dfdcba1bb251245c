//! Handling for the instructions markup returned by the recipe API.
//!
//! The markup comes from a third party and is never passed through as-is.
//! It is reduced to plain text for display, and anything that has to be
//! embedded back into HTML goes through [`escape_markup`].

use scraper::node::Node;
use scraper::{ElementRef, Html};

pub const NO_INSTRUCTIONS: &str = "Instructions not available.";

/// Elements that start a new line of output
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "li", "br", "div", "ol", "ul", "h1", "h2", "h3", "h4", "h5", "h6", "tr",
];

/// Elements whose text is never shown
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Reduce an instructions fragment to plain text, one block per line
///
/// Text is kept in document order. Every paragraph, list item or other block
/// element becomes its own line; inline tags are dropped without adding
/// spaces.
pub fn instructions_text(markup: Option<&str>) -> String {
    let markup = match markup {
        Some(markup) if !markup.trim().is_empty() => markup,
        _ => return NO_INSTRUCTIONS.to_string(),
    };

    let fragment = Html::parse_fragment(markup);
    let mut lines = Vec::new();
    let mut current = String::new();
    collect_lines(fragment.root_element(), &mut lines, &mut current);
    flush_line(&mut lines, &mut current);

    if lines.is_empty() {
        NO_INSTRUCTIONS.to_string()
    } else {
        lines.join("\n")
    }
}

fn collect_lines(element: ElementRef<'_>, lines: &mut Vec<String>, current: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => current.push_str(text),
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED_ELEMENTS.contains(&name) {
                    continue;
                }
                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    flush_line(lines, current);
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_lines(child_element, lines, current);
                }
                if block {
                    flush_line(lines, current);
                }
            }
            _ => {}
        }
    }
}

fn flush_line(lines: &mut Vec<String>, current: &mut String) {
    let line = collapse_whitespace(current);
    if !line.is_empty() {
        lines.push(line);
    }
    current.clear();
}

/// Escape text for safe inclusion inside HTML
///
/// Not used by the terminal front end, which only prints plain text. This is
/// library API for front ends that embed recipe text back into a page.
pub fn escape_markup(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_items_become_lines() {
        let markup = "<ol><li>Rinse the <b>rice</b>.</li><li>Cook   for 20 minutes.</li></ol>";
        assert_eq!(
            instructions_text(Some(markup)),
            "Rinse the rice.\nCook for 20 minutes."
        );
    }

    #[test]
    fn test_paragraphs() {
        let markup = "<p>Heat the pan.</p>\n<p>Add chicken.</p>";
        assert_eq!(instructions_text(Some(markup)), "Heat the pan.\nAdd chicken.");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(
            instructions_text(Some("Mix everything and bake.")),
            "Mix everything and bake."
        );
    }

    #[test]
    fn test_scripts_do_not_leak_tags() {
        let markup = "<p>Stir.<script>alert('x')</script></p>";
        assert_eq!(instructions_text(Some(markup)), "Stir.");
    }

    #[test]
    fn test_intro_paragraph_before_list_is_kept() {
        let markup =
            "<p>Preheat the oven to 200C.</p><ol><li>Mix flour.</li><li>Bake.</li></ol>Serve warm.";
        assert_eq!(
            instructions_text(Some(markup)),
            "Preheat the oven to 200C.\nMix flour.\nBake.\nServe warm."
        );
    }

    #[test]
    fn test_inline_tags_do_not_add_spaces() {
        assert_eq!(
            instructions_text(Some("<p>Add <b>salt</b>, then stir.</p>")),
            "Add salt, then stir."
        );
    }

    #[test]
    fn test_line_breaks_split_steps() {
        assert_eq!(
            instructions_text(Some("Boil water.<br>Add pasta.<br/>Drain.")),
            "Boil water.\nAdd pasta.\nDrain."
        );
    }

    #[test]
    fn test_missing_instructions() {
        assert_eq!(instructions_text(None), NO_INSTRUCTIONS);
        assert_eq!(instructions_text(Some("   ")), NO_INSTRUCTIONS);
        assert_eq!(instructions_text(Some("<p></p>")), NO_INSTRUCTIONS);
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_markup("<img src=x onerror=alert(1)>"),
            "&lt;img src=x onerror=alert(1)&gt;"
        );
    }
}
