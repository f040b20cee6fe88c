//! Margin/padding props resolved against the theme's space scale

use super::style::{px, Declaration};
use crate::theme::Theme;
use tracing::warn;

/// A spacing value: a step on `theme.space` or a literal pixel length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpaceValue {
    Step(i32),
    Px(f32),
}

impl From<i32> for SpaceValue {
    fn from(step: i32) -> Self {
        SpaceValue::Step(step)
    }
}

impl From<f32> for SpaceValue {
    fn from(value: f32) -> Self {
        SpaceValue::Px(value)
    }
}

impl SpaceValue {
    pub fn resolve(self, theme: &Theme) -> Option<f32> {
        match self {
            SpaceValue::Px(v) => Some(v),
            SpaceValue::Step(step) => {
                let value = theme.space_step(step);
                if value.is_none() {
                    warn!(step, "Space step outside theme scale");
                }
                value
            }
        }
    }
}

/// Resolved box edges in pixels; `None` means "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
}

impl Edges {
    fn declarations(&self, prefix: Side) -> Vec<Declaration> {
        [
            (prefix.top(), self.top),
            (prefix.right(), self.right),
            (prefix.bottom(), self.bottom),
            (prefix.left(), self.left),
        ]
        .into_iter()
        .filter_map(|(property, value)| {
            value.map(|v| Declaration {
                property,
                value: px(v),
            })
        })
        .collect()
    }
}

#[derive(Clone, Copy)]
enum Side {
    Margin,
    Padding,
}

impl Side {
    fn top(self) -> &'static str {
        match self {
            Side::Margin => "margin-top",
            Side::Padding => "padding-top",
        }
    }
    fn right(self) -> &'static str {
        match self {
            Side::Margin => "margin-right",
            Side::Padding => "padding-right",
        }
    }
    fn bottom(self) -> &'static str {
        match self {
            Side::Margin => "margin-bottom",
            Side::Padding => "padding-bottom",
        }
    }
    fn left(self) -> &'static str {
        match self {
            Side::Margin => "margin-left",
            Side::Padding => "padding-left",
        }
    }
}

/// Spacing shorthand props. The most specific prop wins:
/// `mt` over `my` over `m`, and likewise for padding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpaceProps {
    pub m: Option<SpaceValue>,
    pub mt: Option<SpaceValue>,
    pub mr: Option<SpaceValue>,
    pub mb: Option<SpaceValue>,
    pub ml: Option<SpaceValue>,
    pub mx: Option<SpaceValue>,
    pub my: Option<SpaceValue>,
    pub p: Option<SpaceValue>,
    pub pt: Option<SpaceValue>,
    pub pr: Option<SpaceValue>,
    pub pb: Option<SpaceValue>,
    pub pl: Option<SpaceValue>,
    pub px: Option<SpaceValue>,
    pub py: Option<SpaceValue>,
}

macro_rules! space_setters {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<SpaceValue>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

impl SpaceProps {
    pub fn new() -> Self {
        Self::default()
    }

    space_setters!(m, mt, mr, mb, ml, mx, my, p, pt, pr, pb, pl, px, py);

    pub fn margin(&self, theme: &Theme) -> Edges {
        resolve(theme, self.m, self.mx, self.my, [self.mt, self.mr, self.mb, self.ml])
    }

    pub fn padding(&self, theme: &Theme) -> Edges {
        resolve(theme, self.p, self.px, self.py, [self.pt, self.pr, self.pb, self.pl])
    }

    /// Margin declarations followed by padding declarations.
    pub fn declarations(&self, theme: &Theme) -> Vec<Declaration> {
        let mut out = self.margin(theme).declarations(Side::Margin);
        out.extend(self.padding(theme).declarations(Side::Padding));
        out
    }
}

fn resolve(
    theme: &Theme,
    all: Option<SpaceValue>,
    x: Option<SpaceValue>,
    y: Option<SpaceValue>,
    [top, right, bottom, left]: [Option<SpaceValue>; 4],
) -> Edges {
    let pick = |sides: [Option<SpaceValue>; 3]| {
        sides
            .into_iter()
            .flatten()
            .next()
            .and_then(|v| v.resolve(theme))
    };
    Edges {
        top: pick([top, y, all]),
        right: pick([right, x, all]),
        bottom: pick([bottom, y, all]),
        left: pick([left, x, all]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_index_the_scale() {
        let theme = Theme::light();
        let padding = SpaceProps::new().py(3).padding(&theme);
        assert_eq!(padding.top, Some(16.0));
        assert_eq!(padding.bottom, Some(16.0));
        assert_eq!(padding.left, None);
    }

    #[test]
    fn specific_sides_override_axis_and_all() {
        let theme = Theme::light();
        let margin = SpaceProps::new().m(1).mx(2).ml(4).margin(&theme);
        assert_eq!(margin.top, Some(4.0));
        assert_eq!(margin.right, Some(8.0));
        assert_eq!(margin.left, Some(32.0));
    }

    #[test]
    fn negative_steps_and_pixels() {
        let theme = Theme::light();
        let margin = SpaceProps::new().mt(-2).mb(10.5_f32).margin(&theme);
        assert_eq!(margin.top, Some(-8.0));
        assert_eq!(margin.bottom, Some(10.5));
    }

    #[test]
    fn declarations_put_margin_before_padding() {
        let theme = Theme::light();
        let decls = SpaceProps::new().pt(1).mb(2).declarations(&theme);
        let rendered: Vec<_> = decls.iter().map(|d| (d.property, d.value.as_str())).collect();
        assert_eq!(rendered, vec![("margin-bottom", "8px"), ("padding-top", "4px")]);
    }

    #[test]
    fn out_of_scale_step_is_unset() {
        let theme = Theme::light();
        assert_eq!(SpaceProps::new().p(99).padding(&theme), Edges::default());
        assert_eq!(SpaceProps::new().margin(&theme), Edges::default());
    }
}
