//! Style declarations produced from theme tokens
//!
//! A component's look is a pure function of `(theme, props)` returning a
//! [`Style`]: an ordered list of CSS-like declarations plus pseudo-state
//! blocks. Later declarations of the same property win, the same way a
//! stylesheet cascade resolves them.

use crate::theme::{Theme, Token};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

/// Ordered declaration block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rules(Vec<Declaration>);

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.0.push(Declaration {
            property,
            value: value.into(),
        });
        self
    }

    /// Declare `property` from the token at `path`. An unresolved token emits
    /// nothing for that property.
    pub fn themed(
        mut self,
        theme: &Theme,
        property: &'static str,
        path: &str,
        render: impl FnOnce(Token<'_>) -> String,
    ) -> Self {
        match theme.get(path) {
            Some(token) => self.0.push(Declaration {
                property,
                value: render(token),
            }),
            None => warn!(token = path, property, "Theme token not found, declaration skipped"),
        }
        self
    }

    pub fn extend(mut self, declarations: impl IntoIterator<Item = Declaration>) -> Self {
        self.0.extend(declarations);
        self
    }

    /// Effective value of `property`: the last declaration wins.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.0.iter()
    }

}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pseudo {
    Placeholder,
    MsClear,
    Focus,
}

impl Pseudo {
    pub fn selector_suffix(self) -> &'static str {
        match self {
            Pseudo::Placeholder => "::placeholder",
            Pseudo::MsClear => "::-ms-clear",
            Pseudo::Focus => ":focus",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub base: Rules,
    pub pseudo: Vec<(Pseudo, Rules)>,
}

impl Style {
    pub fn new(base: Rules) -> Self {
        Self {
            base,
            pseudo: Vec::new(),
        }
    }

    pub fn with_pseudo(mut self, pseudo: Pseudo, rules: Rules) -> Self {
        self.pseudo.push((pseudo, rules));
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.base.get(property)
    }

    /// Effective value inside a pseudo block, last block wins.
    pub fn get_in(&self, pseudo: Pseudo, property: &str) -> Option<&str> {
        self.pseudo
            .iter()
            .rev()
            .filter(|(p, _)| *p == pseudo)
            .find_map(|(_, rules)| rules.get(property))
    }

    /// Generated class name, identical for identical rule sets within one build.
    /// The hash may change between Rust releases, so never persist it.
    pub fn class_name(&self) -> String {
        let mut hasher = DefaultHasher::new();
        for d in self.base.iter() {
            d.property.hash(&mut hasher);
            d.value.hash(&mut hasher);
        }
        for (pseudo, rules) in &self.pseudo {
            pseudo.hash(&mut hasher);
            for d in rules.iter() {
                d.property.hash(&mut hasher);
                d.value.hash(&mut hasher);
            }
        }
        format!("sc-{:08x}", hasher.finish() as u32)
    }

    /// Render as stylesheet text for `selector`.
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = block(selector, &self.base);
        for (pseudo, rules) in &self.pseudo {
            css.push_str(&block(&format!("{}{}", selector, pseudo.selector_suffix()), rules));
        }
        css
    }
}

fn block(selector: &str, rules: &Rules) -> String {
    let mut out = format!("{} {{\n", selector);
    for d in rules.iter() {
        out.push_str(&format!("  {}: {};\n", d.property, d.value));
    }
    out.push_str("}\n");
    out
}

/// `16` -> `16px`
pub fn px(value: f32) -> String {
    format!("{}px", value)
}

/// Parse a `14px` / `0` length back to a number.
pub fn parse_px(value: &str) -> Option<f32> {
    let value = value.trim();
    value.strip_suffix("px").unwrap_or(value).trim().parse().ok()
}

/// Parse a `0 0 0 2px #0366d6` ring shadow into (spread, color).
pub fn parse_ring(value: &str) -> Option<(f32, &str)> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    match parts.as_slice() {
        [_, _, _, spread, color] => Some((parse_px(spread)?, color)),
        _ => None,
    }
}
