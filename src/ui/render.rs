//! Paint the component tree with egui
//!
//! The tree is built once; this walks it every frame. Control values live in
//! [`FormState`] keyed by the control's `name`, and decoded images are cached
//! per `src` for the lifetime of the window.

use super::style::{parse_px, parse_ring, Pseudo, Style};
use super::tree::{Align, Direction, Element, Layout, Node, Tag};
use crate::assets;
use crate::theme::{parse_color, Theme};
use crate::types::{sanitize_number, FormState};
use egui::Color32;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Width images are rasterized at before egui scales them
pub const IMAGE_TEXTURE_WIDTH: u32 = 1200;

pub type TextureCache = HashMap<String, Option<egui::TextureHandle>>;

pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub form: &'a mut FormState,
    pub textures: &'a mut TextureCache,
}

pub fn show(ui: &mut egui::Ui, node: &Node, cx: &mut RenderContext<'_>) {
    show_node(ui, node, cx, None);
}

fn show_node(ui: &mut egui::Ui, node: &Node, cx: &mut RenderContext<'_>, font_size: Option<f32>) {
    match node {
        Node::Text(t) => {
            if !t.trim().is_empty() {
                ui.label(rich(t, font_size, false));
            }
        }
        Node::Element(e) => show_element(ui, e, cx, font_size),
    }
}

fn show_element(ui: &mut egui::Ui, e: &Element, cx: &mut RenderContext<'_>, inherited: Option<f32>) {
    let font_size = e.layout.font_size.or(inherited);
    match e.tag {
        Tag::Box | Tag::Flex => show_container(ui, e, cx, font_size),
        Tag::Heading | Tag::Text => {
            frame(&e.layout).show(ui, |ui| {
                ui.label(rich(&e.text_content(), font_size, e.layout.bold));
            });
        }
        Tag::Label => match radio_input(e) {
            Some(input) => show_radio(ui, e, input, cx, font_size),
            None => show_children(ui, e, cx, font_size),
        },
        Tag::Input if e.is_input_type("radio") => show_radio(ui, e, e, cx, font_size),
        Tag::Input => show_input(ui, e, cx),
        Tag::Image => show_image(ui, e, cx),
        Tag::Span => show_children(ui, e, cx, font_size),
    }
}

fn show_children(ui: &mut egui::Ui, e: &Element, cx: &mut RenderContext<'_>, font_size: Option<f32>) {
    for child in &e.children {
        show_node(ui, child, cx, font_size);
    }
}

fn show_container(ui: &mut egui::Ui, e: &Element, cx: &mut RenderContext<'_>, font_size: Option<f32>) {
    frame(&e.layout).show(ui, |ui| match e.layout.direction {
        Some(Direction::Row) => show_row(ui, e, cx, font_size),
        _ => {
            let align = match e.layout.align_items {
                Some(Align::Center) => egui::Align::Center,
                None => egui::Align::Min,
            };
            ui.with_layout(egui::Layout::top_down(align), |ui| {
                show_children(ui, e, cx, font_size);
            });
        }
    });
}

/// Lay children out side by side, sizing each by its width fraction.
fn show_row(ui: &mut egui::Ui, e: &Element, cx: &mut RenderContext<'_>, font_size: Option<f32>) {
    let total = ui.available_width();
    let gap = ui.spacing().item_spacing.x;
    ui.horizontal_top(|ui| {
        for child in &e.children {
            let fraction = child.as_element().and_then(|c| c.layout.width);
            let width = match fraction {
                Some(f) => (total * f - gap).max(0.0),
                None => ui.available_width(),
            };
            ui.allocate_ui_with_layout(
                egui::vec2(width, 0.0),
                egui::Layout::top_down(egui::Align::Min),
                |ui| {
                    ui.set_width(width);
                    show_node(ui, child, cx, font_size);
                },
            );
        }
    });
}

fn radio_input(label: &Element) -> Option<&Element> {
    label
        .children
        .iter()
        .filter_map(Node::as_element)
        .find(|c| c.is_input_type("radio"))
}

fn show_radio(
    ui: &mut egui::Ui,
    label: &Element,
    input: &Element,
    cx: &mut RenderContext<'_>,
    font_size: Option<f32>,
) {
    let group = input.attr("name").unwrap_or_default();
    let value = input.attr("value").or(input.attr("id")).unwrap_or_default();
    let selected = cx.form.get(group) == Some(value);
    let text = label.text_content();
    if ui.radio(selected, rich(text.trim(), font_size, false)).clicked() {
        cx.form.set(group, value);
        debug!(group, value, "Radio selected");
    }
}

fn show_input(ui: &mut egui::Ui, e: &Element, cx: &mut RenderContext<'_>) {
    let name = e.attr("name").unwrap_or("input");
    let visuals = match &e.style {
        Some(style) => InputVisuals::from_style(style),
        None => InputVisuals::fallback(cx.theme),
    };
    let id = ui.make_persistent_id(("input", name));
    let focused = ui.memory(|m| m.has_focus(id));
    let (ring_width, ring_color) = if focused { visuals.focus_ring } else { visuals.ring };
    let placeholder = e.attr("placeholder").unwrap_or_default();
    let numeric = e.is_input_type("number");

    let buffer = cx.form.text_mut(name);
    let response = egui::Frame::new()
        .inner_margin(visuals.padding)
        .outer_margin(visuals.margin)
        .corner_radius(visuals.radius)
        .stroke(egui::Stroke::new(ring_width, ring_color))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut *buffer)
                    .id(id)
                    .frame(false)
                    .font(egui::FontId::proportional(visuals.font_size))
                    .hint_text(egui::RichText::new(placeholder).color(visuals.placeholder))
                    .desired_width(f32::INFINITY),
            )
        })
        .inner;

    if numeric && response.changed() {
        let clean = sanitize_number(buffer);
        if clean != *buffer {
            *buffer = clean;
        }
    }
}

fn show_image(ui: &mut egui::Ui, e: &Element, cx: &mut RenderContext<'_>) {
    let Some(src) = e.attr("src") else {
        return;
    };
    let width = ui.available_width() * e.layout.width.unwrap_or(1.0);
    let ctx = ui.ctx().clone();
    let texture = cx
        .textures
        .entry(src.to_string())
        .or_insert_with(|| load_texture(&ctx, src));
    if let Some(texture) = texture {
        let [tw, th] = texture.size();
        let size = egui::vec2(width, width * th as f32 / tw.max(1) as f32);
        ui.image(egui::load::SizedTexture::new(texture.id(), size));
    }
}

fn load_texture(ctx: &egui::Context, src: &str) -> Option<egui::TextureHandle> {
    match assets::rasterize(src, IMAGE_TEXTURE_WIDTH) {
        Ok((pixels, w, h)) => Some(ctx.load_texture(
            src,
            egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
            egui::TextureOptions::LINEAR,
        )),
        Err(e) => {
            warn!(error = %e, asset = src, "Failed to load image asset");
            None
        }
    }
}

fn rich(text: &str, size: Option<f32>, bold: bool) -> egui::RichText {
    let mut rt = egui::RichText::new(text);
    if let Some(size) = size {
        rt = rt.size(size);
    }
    if bold {
        rt = rt.strong();
    }
    rt
}

fn to_i8(v: f32) -> i8 {
    v.round().clamp(i8::MIN as f32, i8::MAX as f32) as i8
}

fn margin(top: f32, right: f32, bottom: f32, left: f32) -> egui::Margin {
    egui::Margin {
        left: to_i8(left),
        right: to_i8(right),
        top: to_i8(top),
        bottom: to_i8(bottom),
    }
}

fn frame(layout: &Layout) -> egui::Frame {
    let p = layout.padding;
    let m = layout.margin;
    egui::Frame::new()
        .inner_margin(margin(
            p.top.unwrap_or(0.0),
            p.right.unwrap_or(0.0),
            p.bottom.unwrap_or(0.0),
            p.left.unwrap_or(0.0),
        ))
        .outer_margin(margin(
            m.top.unwrap_or(0.0),
            m.right.unwrap_or(0.0),
            m.bottom.unwrap_or(0.0),
            m.left.unwrap_or(0.0),
        ))
}

// =============================================================================
// INPUT VISUALS
// =============================================================================

/// Paint parameters of a styled input, read back from its rule set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputVisuals {
    pub font_size: f32,
    pub padding: egui::Margin,
    pub margin: egui::Margin,
    pub radius: f32,
    pub ring: (f32, Color32),
    pub focus_ring: (f32, Color32),
    pub placeholder: Color32,
}

impl InputVisuals {
    pub fn from_style(style: &Style) -> Self {
        let len = |property: &str, default: f32| style.get(property).and_then(parse_px).unwrap_or(default);
        let ring = |value: Option<&str>, fallback: (f32, Color32)| {
            value
                .and_then(parse_ring)
                .and_then(|(w, c)| Some((w, parse_color(c)?)))
                .unwrap_or(fallback)
        };
        let margin_all = len("margin", 0.0);
        Self {
            font_size: len("font-size", 14.0),
            padding: margin(
                len("padding-top", 0.0),
                len("padding-right", 0.0),
                len("padding-bottom", 0.0),
                len("padding-left", 0.0),
            ),
            margin: margin(
                len("margin-top", margin_all),
                len("margin-right", margin_all),
                len("margin-bottom", margin_all),
                len("margin-left", margin_all),
            ),
            radius: len("border-radius", 0.0),
            ring: ring(style.get("box-shadow"), (1.0, Color32::GRAY)),
            focus_ring: ring(style.get_in(Pseudo::Focus, "box-shadow"), (2.0, Color32::LIGHT_BLUE)),
            placeholder: style
                .get_in(Pseudo::Placeholder, "color")
                .and_then(parse_color)
                .unwrap_or(Color32::GRAY),
        }
    }

    /// Unstyled inputs still follow the theme's colors.
    pub fn fallback(theme: &Theme) -> Self {
        let border = theme.color("borderGray").unwrap_or(Color32::GRAY);
        let accent = theme.color("blue").unwrap_or(Color32::LIGHT_BLUE);
        Self {
            font_size: theme.font_size(1).unwrap_or(14.0),
            padding: margin(4.0, 6.0, 4.0, 6.0),
            margin: egui::Margin::ZERO,
            radius: theme.radius,
            ring: (1.0, border),
            focus_ring: (2.0, accent),
            placeholder: theme.color("gray").unwrap_or(Color32::GRAY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::page::{page, HOUSE_SIZE_NAME, LOT_SLOPE_GROUP};
    use crate::constants::HOUSE_ASSET;
    use crate::ui::components::input_style;
    use crate::ui::space::SpaceProps;

    #[test]
    fn visuals_follow_input_rule_set() {
        let theme = Theme::light();
        let visuals = InputVisuals::from_style(&input_style(&theme, &SpaceProps::new()));
        assert_eq!(visuals.font_size, 14.0);
        assert_eq!(visuals.radius, 2.0);
        assert_eq!(visuals.padding, margin(14.0, 12.0, 14.0, 12.0));
        assert_eq!(visuals.margin, egui::Margin::ZERO);
        assert_eq!(visuals.ring, (1.0, Color32::from_rgb(0xd1, 0xd5, 0xda)));
        assert_eq!(visuals.focus_ring, (2.0, Color32::from_rgb(0x03, 0x66, 0xd6)));
        assert_eq!(visuals.placeholder, Color32::from_rgb(0x8a, 0x93, 0x9d));
    }

    #[test]
    fn visuals_pick_up_spacing_modifier() {
        let theme = Theme::light();
        let style = input_style(&theme, &SpaceProps::new().mb(3).pl(1));
        let visuals = InputVisuals::from_style(&style);
        assert_eq!(visuals.margin.bottom, 16);
        assert_eq!(visuals.margin.top, 0);
        assert_eq!(visuals.padding.left, 4);
    }

    #[test]
    fn margins_clamp_to_i8() {
        assert_eq!(to_i8(500.0), i8::MAX);
        assert_eq!(to_i8(-500.0), i8::MIN);
        assert_eq!(to_i8(15.6), 16);
    }

    fn render_frame(ctx: &egui::Context, tree: &Node, theme: &Theme, form: &mut FormState, textures: &mut TextureCache) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let mut cx = RenderContext {
                    theme,
                    form: &mut *form,
                    textures: &mut *textures,
                };
                show(ui, tree, &mut cx);
            });
        });
    }

    #[test]
    fn page_renders_headless_and_caches_house() {
        let theme = Theme::light();
        let tree = page(&theme);
        let ctx = egui::Context::default();
        let mut form = FormState::default();
        let mut textures = TextureCache::new();

        render_frame(&ctx, &tree, &theme, &mut form, &mut textures);
        render_frame(&ctx, &tree, &theme, &mut form, &mut textures);

        assert_eq!(textures.len(), 1);
        assert!(matches!(textures.get(HOUSE_ASSET), Some(Some(_))));
        // nothing selected or typed until the user acts
        assert_eq!(form.get(LOT_SLOPE_GROUP), None);
        assert_eq!(form.get(HOUSE_SIZE_NAME), Some(""));
    }

    #[test]
    fn missing_image_leaves_slot_empty() {
        let theme = Theme::light();
        let tree: Node = Element::new(Tag::Image).with_attr("src", "gone.png").into();
        let ctx = egui::Context::default();
        let mut form = FormState::default();
        let mut textures = TextureCache::new();

        render_frame(&ctx, &tree, &theme, &mut form, &mut textures);

        assert!(matches!(textures.get("gone.png"), Some(None)));
    }
}
