//! Component tree: the value every component returns and every renderer walks

use super::space::Edges;
use super::style::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Box,
    Flex,
    Heading,
    Text,
    Label,
    Input,
    Span,
    Image,
}

impl Tag {
    pub fn html_name(self) -> &'static str {
        match self {
            Tag::Box | Tag::Flex | Tag::Text => "div",
            Tag::Heading => "h2",
            Tag::Label => "label",
            Tag::Input => "input",
            Tag::Span => "span",
            Tag::Image => "img",
        }
    }

    /// Elements that never have children
    pub fn is_void(self) -> bool {
        matches!(self, Tag::Input | Tag::Image)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
}

/// Resolved box layout of an element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Layout {
    pub margin: Edges,
    pub padding: Edges,
    /// Fraction of the parent's width
    pub width: Option<f32>,
    pub direction: Option<Direction>,
    pub align_items: Option<Align>,
    pub font_size: Option<f32>,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub attrs: Vec<(String, String)>,
    pub classes: Vec<String>,
    pub layout: Layout,
    pub style: Option<Style>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            classes: Vec::new(),
            layout: Layout::default(),
            style: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value in place.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn width(mut self, fraction: f32) -> Self {
        self.layout.width = Some(fraction);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.layout.direction = Some(direction);
        self
    }

    pub fn align_items(mut self, align: Align) -> Self {
        self.layout.align_items = Some(align);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn extend(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_input_type(&self, ty: &str) -> bool {
        self.tag == Tag::Input && self.attr("type") == Some(ty)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(&e.children, out),
        }
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Pre-order walk including `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.descendants().filter_map(Node::as_element)
    }

    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        self.elements().filter(|e| pred(e)).collect()
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element(e) => e.text_content(),
        }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Element(e) = node {
            self.stack.extend(e.children.iter().rev());
        }
        Some(node)
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<&str> for Node {
    fn from(t: &str) -> Self {
        Node::Text(t.to_string())
    }
}

impl From<String> for Node {
    fn from(t: String) -> Self {
        Node::Text(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Element::new(Tag::Box)
            .child(Element::new(Tag::Heading).child("Title"))
            .child(
                Element::new(Tag::Label)
                    .child(Element::new(Tag::Input).with_attr("type", "radio"))
                    .child("One"),
            )
            .into()
    }

    #[test]
    fn descendants_are_pre_order() {
        let tree = sample();
        let tags: Vec<_> = tree.elements().map(|e| e.tag).collect();
        assert_eq!(tags, vec![Tag::Box, Tag::Heading, Tag::Label, Tag::Input]);
    }

    #[test]
    fn text_content_concatenates() {
        assert_eq!(sample().text_content(), "TitleOne");
    }

    #[test]
    fn with_attr_replaces_in_place() {
        let e = Element::new(Tag::Input)
            .with_attr("name", "a")
            .with_attr("type", "text")
            .with_attr("name", "b");
        assert_eq!(e.attr("name"), Some("b"));
        let names: Vec<_> = e.attrs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["name", "type"]);
    }

    #[test]
    fn classes_are_deduplicated() {
        let e = Element::new(Tag::Label).with_class("control").with_class("control");
        assert_eq!(e.classes, vec!["control".to_string()]);
        assert!(e.has_class("control"));
    }

    #[test]
    fn find_all_filters_elements() {
        let tree = sample();
        assert_eq!(tree.find_all(|e| e.is_input_type("radio")).len(), 1);
        assert!(tree.find_all(|e| e.is_input_type("number")).is_empty());
    }
}
