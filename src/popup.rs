//! The composing layer: turns a measured content size plus a [`BubbleConfig`]
//! into a full [`BubbleLayout`], and drives a transient overlay surface with
//! show-or-dismiss toggling.

use crate::config::BubbleConfig;
use crate::geometry::{BodyRect, BubblePath, Insets, build_path, compute_insets};
use crate::placement::{AnchorBox, Side, Size, place};

/// Everything derived for one layout pass: outer size, insets, body
/// rectangle and outline path. A fresh value is produced whenever the
/// measured size or any config field changes; nothing is patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleLayout {
    pub outer_width: f32,
    pub outer_height: f32,
    pub insets: Insets,
    pub body: BodyRect,
    pub path: BubblePath,
}

impl BubbleLayout {
    pub fn size(&self) -> Size {
        Size {
            width: self.outer_width,
            height: self.outer_height,
        }
    }
}

/// Lay out a bubble around content of the given size: derive the insets,
/// grow the outer bounds by them, then trace the outline.
pub fn layout_bubble(content_width: f32, content_height: f32, config: &BubbleConfig) -> BubbleLayout {
    let (shadow_x, shadow_y, shadow_radius) = config.shadow.effective();
    let insets = compute_insets(
        config.orientation,
        config.arrow.length,
        shadow_x,
        shadow_y,
        shadow_radius,
    );
    let outer_width = content_width + insets.horizontal();
    let outer_height = content_height + insets.vertical();
    let path = build_path(
        config.orientation,
        outer_width,
        outer_height,
        &insets,
        &config.arrow,
    );
    BubbleLayout {
        outer_width,
        outer_height,
        insets,
        body: BodyRect::from_insets(outer_width, outer_height, &insets),
        path,
    }
}

/// The transient surface the host framework provides: show the bubble at a
/// screen coordinate, dismiss it, and report whether it is currently up.
pub trait Overlay {
    fn show_at(&mut self, x: f32, y: f32);
    fn dismiss(&mut self);
    fn is_shown(&self) -> bool;
}

/// Owns one bubble's configuration and drives an [`Overlay`] for it.
///
/// A show request while the overlay is already visible dismisses it instead
/// of repositioning; `place` is never invoked for a visible bubble.
#[derive(Debug, Clone)]
pub struct Popup {
    config: BubbleConfig,
}

impl Popup {
    pub fn new(config: BubbleConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &BubbleConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BubbleConfig) {
        self.config = config.sanitized();
    }

    /// Lay the bubble out for the given side, with the arrow facing the
    /// anchor from that side.
    pub fn layout_for(&self, side: Side, content_width: f32, content_height: f32) -> BubbleLayout {
        let mut config = self.config.clone();
        config.orientation = side.arrow_orientation();
        layout_bubble(content_width, content_height, &config)
    }

    /// Toggle the bubble on `overlay` next to `anchor`. Returns the draw
    /// origin when the bubble was shown, `None` when the call dismissed it.
    pub fn toggle<O: Overlay>(
        &self,
        overlay: &mut O,
        anchor: &AnchorBox,
        side: Side,
        content_width: f32,
        content_height: f32,
    ) -> Option<(f32, f32)> {
        if overlay.is_shown() {
            overlay.dismiss();
            return None;
        }
        let layout = self.layout_for(side, content_width, content_height);
        let origin = place(anchor, layout.size(), side, self.config.margin);
        overlay.show_at(origin.0, origin.1);
        Some(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArrowConfig, ShadowConfig};
    use crate::geometry::Orientation;

    #[derive(Default)]
    struct FakeOverlay {
        shown_at: Option<(f32, f32)>,
        dismissals: usize,
    }

    impl Overlay for FakeOverlay {
        fn show_at(&mut self, x: f32, y: f32) {
            self.shown_at = Some((x, y));
        }

        fn dismiss(&mut self) {
            self.shown_at = None;
            self.dismissals += 1;
        }

        fn is_shown(&self) -> bool {
            self.shown_at.is_some()
        }
    }

    fn quiet_config(orientation: Orientation) -> BubbleConfig {
        BubbleConfig {
            orientation,
            shadow: ShadowConfig {
                enabled: false,
                ..Default::default()
            },
            arrow: ArrowConfig {
                width: 16.0,
                length: 12.0,
                offset: 0.5,
            },
            margin: 10.0,
            ..Default::default()
        }
    }

    #[test]
    fn layout_grows_content_by_insets() {
        let layout = layout_bubble(100.0, 40.0, &quiet_config(Orientation::Top));
        // Shadow disabled: only the arrow side gains space.
        assert_eq!(layout.outer_width, 100.0);
        assert_eq!(layout.outer_height, 52.0);
        assert_eq!(layout.insets.top, 12.0);
        assert_eq!(layout.body.top, 12.0);
        assert_eq!(layout.body.width(), 100.0);
        assert_eq!(layout.body.height(), 40.0);
        assert!(layout.path.is_closed());
    }

    #[test]
    fn layout_is_a_pure_recompute() {
        let config = quiet_config(Orientation::Right);
        assert_eq!(
            layout_bubble(80.0, 30.0, &config),
            layout_bubble(80.0, 30.0, &config)
        );
    }

    #[test]
    fn toggle_shows_then_dismisses() {
        let popup = Popup::new(quiet_config(Orientation::Top));
        let mut overlay = FakeOverlay::default();
        let anchor = AnchorBox {
            x: 100.0,
            y: 200.0,
            width: 50.0,
            height: 20.0,
        };

        let origin = popup.toggle(&mut overlay, &anchor, Side::Bottom, 90.0, 28.0);
        // Bubble below the anchor, arrow pointing up: outer 90x40.
        assert_eq!(origin, Some((80.0, 230.0)));
        assert!(overlay.is_shown());

        let second = popup.toggle(&mut overlay, &anchor, Side::Bottom, 90.0, 28.0);
        assert_eq!(second, None);
        assert!(!overlay.is_shown());
        assert_eq!(overlay.dismissals, 1);
    }

    #[test]
    fn side_overrides_configured_orientation() {
        let popup = Popup::new(quiet_config(Orientation::Bottom));
        let layout = popup.layout_for(Side::Right, 60.0, 20.0);
        // Bubble to the right of the anchor carries a left-pointing arrow.
        assert_eq!(layout.insets.left, 12.0);
        assert_eq!(layout.insets.right, 0.0);
    }
}
