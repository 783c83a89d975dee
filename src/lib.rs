//! Speech-bubble callout geometry and rendering.
//!
//! The crate computes the insets a bubble needs for its arrow and drop
//! shadow, traces the closed outline path, places the bubble next to an
//! anchor box, and renders the result to SVG (and optionally PNG).

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod geometry;
pub mod placement;
pub mod popup;
pub mod render;
pub mod theme;

pub use config::{ArrowConfig, BubbleConfig, Config, RenderConfig, ShadowConfig, load_config};
pub use geometry::{
    BodyRect, BubblePath, Insets, Orientation, PathCommand, build_path, compute_insets,
    shadow_margin,
};
pub use placement::{AnchorBox, Side, Size, place};
pub use popup::{BubbleLayout, Overlay, Popup, layout_bubble};
pub use render::{render_scene_svg, render_svg, write_output_svg};
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
