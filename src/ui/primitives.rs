//! Layout primitives shared by the page components

use super::space::SpaceProps;
use super::tree::{Direction, Element, Layout, Tag};
use crate::theme::Theme;
use tracing::warn;

/// Font-size step used by headings
pub const HEADING_FONT_STEP: usize = 4;

fn spaced(theme: &Theme, space: &SpaceProps) -> Layout {
    Layout {
        margin: space.margin(theme),
        padding: space.padding(theme),
        ..Layout::default()
    }
}

fn font(theme: &Theme, step: usize) -> Option<f32> {
    let size = theme.font_size(step);
    if size.is_none() {
        warn!(step, "Font size step outside theme scale");
    }
    size
}

/// Block container
pub fn boxed(theme: &Theme, space: SpaceProps) -> Element {
    Element::new(Tag::Box).with_layout(spaced(theme, &space))
}

/// Flex container laid out along `direction`
pub fn flex(theme: &Theme, space: SpaceProps, direction: Direction) -> Element {
    Element::new(Tag::Flex)
        .with_layout(spaced(theme, &space))
        .direction(direction)
}

pub fn heading(theme: &Theme, text: &str) -> Element {
    let mut e = Element::new(Tag::Heading).child(text);
    e.layout.font_size = font(theme, HEADING_FONT_STEP);
    e.layout.bold = true;
    e
}

pub fn text(theme: &Theme, font_step: usize, text: &str) -> Element {
    let mut e = Element::new(Tag::Text).child(text);
    e.layout.font_size = font(theme, font_step);
    e
}

pub fn label() -> Element {
    Element::new(Tag::Label)
}

pub fn image(src: &str) -> Element {
    Element::new(Tag::Image).with_attr("src", src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_uses_heading_step_and_bold() {
        let theme = Theme::light();
        let h = heading(&theme, "Hi");
        assert_eq!(h.layout.font_size, theme.font_size(HEADING_FONT_STEP));
        assert!(h.layout.bold);
        assert_eq!(h.text_content(), "Hi");
    }

    #[test]
    fn flex_carries_direction_and_spacing() {
        let theme = Theme::light();
        let f = flex(&theme, SpaceProps::new().py(2), Direction::Column);
        assert_eq!(f.tag, Tag::Flex);
        assert_eq!(f.layout.direction, Some(Direction::Column));
        assert_eq!(f.layout.padding.top, Some(8.0));
    }

    #[test]
    fn text_outside_scale_has_no_size() {
        let theme = Theme::light();
        assert_eq!(text(&theme, 40, "x").layout.font_size, None);
    }
}
