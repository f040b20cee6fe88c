//! Static HTML rendering of the component tree

use super::space::Edges;
use super::style::px;
use super::tree::{Align, Direction, Element, Layout, Node};
use crate::theme::Theme;
use crate::utils::percent;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn edge_css(out: &mut Vec<String>, prefix: &str, edges: &Edges) {
    let sides = [
        ("top", edges.top),
        ("right", edges.right),
        ("bottom", edges.bottom),
        ("left", edges.left),
    ];
    for (side, value) in sides {
        if let Some(v) = value {
            out.push(format!("{}-{}: {}", prefix, side, px(v)));
        }
    }
}

/// Inline `style` attribute for an element's layout
pub fn layout_css(layout: &Layout) -> String {
    let mut decls = Vec::new();
    edge_css(&mut decls, "margin", &layout.margin);
    edge_css(&mut decls, "padding", &layout.padding);
    if let Some(w) = layout.width {
        decls.push(format!("width: {}", percent(w)));
    }
    if let Some(direction) = layout.direction {
        decls.push("display: flex".to_string());
        decls.push(format!(
            "flex-direction: {}",
            match direction {
                Direction::Row => "row",
                Direction::Column => "column",
            }
        ));
    }
    if let Some(align) = layout.align_items {
        decls.push(format!(
            "align-items: {}",
            match align {
                Align::Center => "center",
            }
        ));
    }
    if let Some(size) = layout.font_size {
        decls.push(format!("font-size: {}", px(size)));
    }
    if layout.bold {
        decls.push("font-weight: bold".to_string());
    }
    decls.join("; ")
}

/// Serialize a node and its children.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(t) => out.push_str(&escape(t)),
        Node::Element(e) => write_element(e, out),
    }
}

fn write_element(e: &Element, out: &mut String) {
    let name = e.tag.html_name();
    out.push('<');
    out.push_str(name);
    // A passed-through `class` attribute joins the element's own classes
    let mut classes: Vec<&str> = e.classes.iter().map(String::as_str).collect();
    for (_, v) in e.attrs.iter().filter(|(k, _)| k == "class") {
        for class in v.split_whitespace() {
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
    }
    if !classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape(&classes.join(" "))));
    }
    for (k, v) in e.attrs.iter().filter(|(k, _)| k != "class") {
        out.push_str(&format!(" {}=\"{}\"", escape(k), escape(v)));
    }
    let inline = layout_css(&e.layout);
    if !inline.is_empty() {
        out.push_str(&format!(" style=\"{}\"", escape(&inline)));
    }
    out.push('>');
    if e.tag.is_void() {
        return;
    }
    for child in &e.children {
        write_node(child, out);
    }
    out.push_str(&format!("</{}>", name));
}

/// Stylesheet for every generated class in the tree, each emitted once.
pub fn stylesheet(node: &Node) -> String {
    let mut seen = Vec::new();
    let mut css = String::new();
    for e in node.elements() {
        if let Some(style) = &e.style {
            let class = style.class_name();
            if !seen.contains(&class) {
                css.push_str(&style.to_css(&format!(".{}", class)));
                seen.push(class);
            }
        }
    }
    css
}

fn base_css(theme: &Theme) -> String {
    format!(
        "body {{\n  margin: 0;\n  font-family: system-ui, -apple-system, sans-serif;\n  color: {text};\n  background: {bg};\n}}\n\
         .container {{\n  max-width: 1024px;\n  margin: 0 auto;\n}}\n\
         .control {{\n  display: flex;\n  align-items: center;\n  gap: {gap};\n  padding: {pad} 0;\n  cursor: pointer;\n}}\n\
         .control-indicator {{\n  display: none;\n}}\n\
         img {{\n  max-width: 100%;\n  height: auto;\n}}\n",
        text = theme.colors.text,
        bg = theme.colors.background,
        gap = px(theme.space_step(2).unwrap_or(8.0)),
        pad = px(theme.space_step(1).unwrap_or(4.0)),
    )
}

/// Complete HTML document for a page tree.
pub fn document(title: &str, page: &Node, theme: &Theme) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>\n{}{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        base_css(theme),
        stylesheet(page),
        render(page),
    )
}
