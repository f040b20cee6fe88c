//! UI module - component tree, components and renderers
//!
//! Components build a [`tree::Node`]; `render` paints it with egui and `html`
//! serializes it for static export.

pub mod components;
pub mod html;
pub mod primitives;
pub mod render;
pub mod space;
pub mod style;
pub mod tree;
