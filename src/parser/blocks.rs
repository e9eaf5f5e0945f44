use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::patterns::BOLD_MAJORITY_RATIO;

static BLOCK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6, p, ol, ul").unwrap());
static BOLD_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("b, strong").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading(u8),
    Paragraph,
    OrderedList,
    UnorderedList,
    Other,
}

/// One block-level node of the converted document. Immutable; a block has no
/// identity beyond its index in the sequence.
#[derive(Debug, Clone)]
pub struct Block {
    pub kind: BlockKind,
    /// Whitespace-collapsed, trimmed textual content.
    pub text: String,
    /// Trimmed item texts, populated for list kinds only.
    pub items: Vec<String>,
    /// Bold runs cover more than 70% of the text.
    pub bold_majority: bool,
    pub centered: bool,
}

impl Block {
    pub fn new(kind: BlockKind, text: &str) -> Self {
        Block {
            kind,
            text: text.trim().to_string(),
            items: Vec::new(),
            bold_majority: false,
            centered: false,
        }
    }

    pub fn heading(level: u8, text: &str) -> Self {
        Block::new(BlockKind::Heading(level), text)
    }

    pub fn paragraph(text: &str) -> Self {
        Block::new(BlockKind::Paragraph, text)
    }

    pub fn ordered_list(items: &[&str]) -> Self {
        Block::list(BlockKind::OrderedList, items)
    }

    pub fn unordered_list(items: &[&str]) -> Self {
        Block::list(BlockKind::UnorderedList, items)
    }

    fn list(kind: BlockKind, items: &[&str]) -> Self {
        let items: Vec<String> = items.iter().map(|i| i.trim().to_string()).collect();
        Block {
            kind,
            text: items.join(" "),
            items,
            bold_majority: false,
            centered: false,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, BlockKind::OrderedList | BlockKind::UnorderedList)
    }
}

/// Flatten converted markup into the ordered block sequence the detectors
/// consume. Elements nested inside a list belong to that list block and are
/// not re-emitted. Empty or element-free markup yields an empty sequence.
pub fn from_html(html: &str) -> Vec<Block> {
    let doc = Html::parse_document(html);
    let mut blocks = Vec::new();

    for el in doc.select(&BLOCK_SEL) {
        if inside_list(&el) {
            continue;
        }

        let kind = match el.value().name() {
            "h1" => BlockKind::Heading(1),
            "h2" => BlockKind::Heading(2),
            "h3" => BlockKind::Heading(3),
            "p" => BlockKind::Paragraph,
            "ol" => BlockKind::OrderedList,
            "ul" => BlockKind::UnorderedList,
            _ => BlockKind::Other,
        };

        let text = squash(el.text());
        let items = if matches!(kind, BlockKind::OrderedList | BlockKind::UnorderedList) {
            direct_items(&el)
        } else {
            Vec::new()
        };

        blocks.push(Block {
            kind,
            bold_majority: is_bold_majority(&el, &text),
            centered: is_centered(&el),
            text,
            items,
        });
    }

    blocks
}

/// Collapse runs of whitespace to single spaces and trim.
fn squash<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn inside_list(el: &ElementRef) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| matches!(a.value().name(), "ol" | "ul"))
}

fn direct_items(el: &ElementRef) -> Vec<String> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| c.value().name() == "li")
        .map(|li| squash(li.text()))
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_bold_majority(el: &ElementRef, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let bold_len: usize = el.select(&BOLD_SEL).map(|b| squash(b.text()).len()).sum();
    bold_len as f32 / text.len() as f32 > BOLD_MAJORITY_RATIO
}

fn is_centered(el: &ElementRef) -> bool {
    let style: String = el
        .value()
        .attr("style")
        .unwrap_or("")
        .to_lowercase()
        .split_whitespace()
        .collect();
    style.contains("text-align:center")
        || el
            .value()
            .attr("align")
            .is_some_and(|a| a.eq_ignore_ascii_case("center"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels() {
        let blocks = from_html("<h1>Soup</h1><h3>Sides</h3><h5>Fine print</h5>");
        assert_eq!(blocks[0].kind, BlockKind::Heading(1));
        assert_eq!(blocks[0].text, "Soup");
        assert_eq!(blocks[1].kind, BlockKind::Heading(3));
        assert_eq!(blocks[2].kind, BlockKind::Other);
    }

    #[test]
    fn list_items_are_owned_by_the_list() {
        let blocks = from_html("<ul><li>2 cups broth</li><li>1 onion</li><li> </li></ul>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::UnorderedList);
        assert_eq!(blocks[0].items, vec!["2 cups broth", "1 onion"]);
    }

    #[test]
    fn nested_paragraph_not_reemitted() {
        let blocks = from_html("<ol><li><p>Boil the broth.</p></li></ol><p>After.</p>");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::OrderedList);
        assert_eq!(blocks[0].items, vec!["Boil the broth."]);
        assert_eq!(blocks[1].text, "After.");
    }

    #[test]
    fn bold_majority_flag() {
        let blocks = from_html(
            "<p><strong>Grandma's Soup</strong></p><p>Add <b>a little</b> salt to the big pot of simmering broth</p>",
        );
        assert!(blocks[0].bold_majority);
        assert!(!blocks[1].bold_majority);
    }

    #[test]
    fn centered_flag() {
        let blocks = from_html(
            "<p style=\"text-align: center;\">Title</p><p align=\"CENTER\">Also</p><p>Not</p>",
        );
        assert!(blocks[0].centered);
        assert!(blocks[1].centered);
        assert!(!blocks[2].centered);
    }

    #[test]
    fn whitespace_squashed() {
        let blocks = from_html("<p>  two\n   words </p>");
        assert_eq!(blocks[0].text, "two words");
    }

    #[test]
    fn empty_markup() {
        assert!(from_html("").is_empty());
        assert!(from_html("<html><body></body></html>").is_empty());
    }
}
