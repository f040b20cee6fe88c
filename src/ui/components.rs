//! Reusable UI components
//!
//! Each component is a pure function of its props and the theme, returning
//! the tree it wants rendered.

use super::primitives::{boxed, flex, image, label, text};
use super::space::SpaceProps;
use super::style::{Pseudo, Rules, Style};
use super::tree::{Direction, Element, Node, Tag};
use crate::constants::HOUSE_ASSET;
use crate::theme::Theme;

// =============================================================================
// INPUT
// =============================================================================

/// Native attributes plus an optional spacing modifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputProps {
    pub attrs: Vec<(String, String)>,
    pub space: SpaceProps,
}

impl InputProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn name(self, name: &str) -> Self {
        self.attr("name", name)
    }

    pub fn input_type(self, ty: &str) -> Self {
        self.attr("type", ty)
    }

    pub fn space(mut self, space: SpaceProps) -> Self {
        self.space = space;
        self
    }
}

/// Visual rule set of the styled input.
pub fn input_style(theme: &Theme, space: &SpaceProps) -> Style {
    let base = Rules::new()
        .set("appearance", "none")
        .set("display", "block")
        .set("font-family", "inherit")
        .set("color", "inherit")
        .themed(theme, "font-size", "fontSizes.1", |t| format!("{}px", t))
        .set("background-color", "transparent")
        .themed(theme, "border-radius", "radius", |t| format!("{}px", t))
        .set("border-width", "0px")
        .set("border-style", "solid")
        .themed(theme, "border-color", "colors.borderGray", |t| t.to_string())
        .set("border-radius", "2px")
        .set("padding-top", "14px")
        .set("padding-bottom", "14px")
        .set("padding-left", "12px")
        .set("padding-right", "12px")
        .set("margin", "0")
        .themed(theme, "box-shadow", "colors.borderGray", |t| format!("0 0 0 1px {}", t))
        .extend(space.declarations(theme));

    Style::new(base)
        .with_pseudo(
            Pseudo::Placeholder,
            Rules::new().themed(theme, "color", "colors.gray", |t| t.to_string()),
        )
        .with_pseudo(Pseudo::MsClear, Rules::new().set("display", "none"))
        .with_pseudo(
            Pseudo::Focus,
            Rules::new()
                .set("outline", "0")
                .themed(theme, "border-color", "colors.blue", |t| t.to_string())
                .themed(theme, "box-shadow", "colors.blue", |t| format!("0 0 0 2px {}", t)),
        )
}

/// Single-line input; attributes pass through untouched.
pub fn input(theme: &Theme, props: InputProps) -> Node {
    let style = input_style(theme, &props.space);
    let class = style.class_name();
    props
        .attrs
        .into_iter()
        .fold(Element::new(Tag::Input), |e, (k, v)| e.with_attr(k, v))
        .with_class("Input")
        .with_class(class)
        .with_style(style)
        .into()
}

// =============================================================================
// FIELD
// =============================================================================

pub const FIELD_LABEL_FONT_STEP: usize = 3;

/// Label above a vertical stack of children
pub fn field(theme: &Theme, label_text: &str, children: Vec<Node>) -> Node {
    boxed(theme, SpaceProps::new().pb(4))
        .child(label().child(text(theme, FIELD_LABEL_FONT_STEP, label_text)))
        .child(flex(theme, SpaceProps::new().py(2), Direction::Column).extend(children))
        .into()
}

// =============================================================================
// HOUSE
// =============================================================================

pub const HOUSE_WIDTH: f32 = 2.0 / 3.0;

pub fn house() -> Node {
    image(HOUSE_ASSET).width(HOUSE_WIDTH).into()
}

// =============================================================================
// RADIO
// =============================================================================

/// One option of a radio group. The label wraps its input and also names it
/// with `for`, so it binds to exactly that control.
pub fn radio_option(id: &str, group: &str, value: &str, label_text: &str) -> Node {
    label()
        .with_class("control")
        .with_class("radio")
        .with_attr("for", id)
        .child(
            Element::new(Tag::Input)
                .with_attr("id", id)
                .with_attr("name", group)
                .with_attr("type", "radio")
                .with_attr("value", value),
        )
        .child(Element::new(Tag::Span).with_class("control-indicator"))
        .child(label_text)
        .into()
}
