//! Bubble shape geometry: inset derivation and outline construction.
//!
//! Everything here is a pure function of its inputs. Numeric inputs are
//! assumed pre-clamped by the configuration layer; there is no failure path.
//! Undersized outer bounds (insets exceeding the outer size) produce a
//! degenerate polygon rather than an error; callers keep the outer bounds
//! larger than the total insets.

mod path;

pub use path::{BubblePath, PathCommand};

use crate::config::ArrowConfig;
use serde::{Deserialize, Serialize};

/// Side of the rounded rectangle the arrow protrudes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Left,
    Top,
    Right,
    Bottom,
}

impl Orientation {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "left" => Some(Self::Left),
            "top" => Some(Self::Top),
            "right" => Some(Self::Right),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    /// Legacy numeric encoding used by attribute-style configuration;
    /// anything out of range falls back to `Bottom`.
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Top,
            2 => Self::Right,
            _ => Self::Bottom,
        }
    }

    /// True when the arrow protrudes from a vertical edge (left/right).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Sign of the outward direction along the arrow's pointing axis,
    /// in screen coordinates (y grows downward).
    fn outward_sign(self) -> f32 {
        match self {
            Self::Left | Self::Top => -1.0,
            Self::Right | Self::Bottom => 1.0,
        }
    }
}

/// Padding reserved around the content so the arrow and shadow render
/// without being clipped. Derived, never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            left: value,
            right: value,
            bottom: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Space the shadow can bleed past the shape on any one side.
///
/// Uniform on all four sides regardless of the shadow's direction; this
/// over-reserves a few pixels on the far side in exchange for symmetric
/// padding.
pub fn shadow_margin(offset_x: f32, offset_y: f32, radius: f32) -> f32 {
    offset_x.abs().max(offset_y.abs()) + radius * 2.0
}

/// Derive the edge insets for a bubble: the shadow margin on every side,
/// plus the arrow length on the side the arrow protrudes from.
pub fn compute_insets(
    orientation: Orientation,
    arrow_length: f32,
    shadow_offset_x: f32,
    shadow_offset_y: f32,
    shadow_radius: f32,
) -> Insets {
    let margin = shadow_margin(shadow_offset_x, shadow_offset_y, shadow_radius);
    let mut insets = Insets::uniform(margin);
    match orientation {
        Orientation::Left => insets.left += arrow_length,
        Orientation::Top => insets.top += arrow_length,
        Orientation::Right => insets.right += arrow_length,
        Orientation::Bottom => insets.bottom += arrow_length,
    }
    insets
}

/// Edges of the rounded-rectangle body inside the outer bounds.
///
/// The insets already carry the arrow allowance on the arrow side, so the
/// body is simply the outer rect shrunk by the insets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BodyRect {
    pub fn from_insets(outer_width: f32, outer_height: f32, insets: &Insets) -> Self {
        Self {
            left: insets.left,
            top: insets.top,
            right: outer_width - insets.right,
            bottom: outer_height - insets.bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Build the closed outline tracing the body rectangle plus the triangular
/// arrow: out from one base corner to the tip, back to the other base
/// corner, then around the remaining three sides.
///
/// Corner rounding is not applied here; the renderer smooths every segment
/// junction with the configured corner radius as a post-process. A zero
/// width or length arrow collapses to a zero-length detour and the path
/// still closes.
pub fn build_path(
    orientation: Orientation,
    outer_width: f32,
    outer_height: f32,
    insets: &Insets,
    arrow: &ArrowConfig,
) -> BubblePath {
    let body = BodyRect::from_insets(outer_width, outer_height, insets);
    let half_width = arrow.width / 2.0;
    let sign = orientation.outward_sign();
    let mut path = BubblePath::new();

    if orientation.is_horizontal() {
        // Arrow on a vertical edge; the base runs along y.
        let (edge, far) = match orientation {
            Orientation::Left => (body.left, body.right),
            _ => (body.right, body.left),
        };
        let base_start = body.top + body.height() * arrow.offset - half_width;
        path.move_to(edge, base_start);
        path.line_by(sign * arrow.length, half_width);
        path.line_by(-sign * arrow.length, half_width);
        path.line_to(edge, body.bottom);
        path.line_to(far, body.bottom);
        path.line_to(far, body.top);
        path.line_to(edge, body.top);
    } else {
        // Arrow on a horizontal edge; the base runs along x.
        let (edge, far) = match orientation {
            Orientation::Top => (body.top, body.bottom),
            _ => (body.bottom, body.top),
        };
        let base_start = body.left + body.width() * arrow.offset - half_width;
        path.move_to(base_start, edge);
        path.line_by(half_width, sign * arrow.length);
        path.line_by(half_width, -sign * arrow.length);
        path.line_to(body.right, edge);
        path.line_to(body.right, far);
        path.line_to(body.left, far);
        path.line_to(body.left, edge);
    }

    path.close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIENTATIONS: [Orientation; 4] = [
        Orientation::Left,
        Orientation::Top,
        Orientation::Right,
        Orientation::Bottom,
    ];

    fn arrow(width: f32, length: f32, offset: f32) -> ArrowConfig {
        ArrowConfig {
            width,
            length,
            offset,
        }
    }

    #[test]
    fn insets_add_arrow_length_to_matching_side_only() {
        for orientation in ORIENTATIONS {
            let insets = compute_insets(orientation, 12.0, 0.0, 0.0, 0.0);
            let sides = [
                (insets.left, Orientation::Left),
                (insets.top, Orientation::Top),
                (insets.right, Orientation::Right),
                (insets.bottom, Orientation::Bottom),
            ];
            for (value, side) in sides {
                if side == orientation {
                    assert_eq!(value, 12.0);
                } else {
                    assert_eq!(value, 0.0);
                }
            }
        }
    }

    #[test]
    fn shadow_margin_is_uniform_and_monotonic() {
        let insets = compute_insets(Orientation::Top, 0.0, 3.0, -5.0, 2.0);
        // max(|3|, |-5|) + 2*2 = 9 on every side.
        assert_eq!(insets, Insets::uniform(9.0));

        let grown = compute_insets(Orientation::Top, 0.0, 3.0, -5.0, 4.0);
        assert!(grown.top >= insets.top);
        assert!(grown.left >= insets.left);
        assert!(grown.right >= insets.right);
        assert!(grown.bottom >= insets.bottom);
    }

    #[test]
    fn path_closes_for_every_orientation_and_degenerate_arrow() {
        let insets = Insets::uniform(6.0);
        let arrows = [
            arrow(20.0, 10.0, 0.5),
            arrow(0.0, 10.0, 0.5),
            arrow(20.0, 0.0, 0.5),
            arrow(20.0, 10.0, 0.0),
            arrow(20.0, 10.0, 1.0),
        ];
        for orientation in ORIENTATIONS {
            for arrow in &arrows {
                let path = build_path(orientation, 120.0, 80.0, &insets, arrow);
                assert!(
                    path.is_closed(),
                    "open path for {orientation:?} with {arrow:?}"
                );
                // MoveTo + 6 segments + Close.
                assert_eq!(path.commands().len(), 8);
            }
        }
    }

    #[test]
    fn bottom_arrow_tip_is_centered_on_the_edge() {
        // Body rect (10,10)-(90,60): outer 100x70 with the arrow allowance
        // folded into the bottom inset.
        let insets = Insets {
            top: 10.0,
            left: 10.0,
            right: 10.0,
            bottom: 10.0,
        };
        let path = build_path(Orientation::Bottom, 100.0, 70.0, &insets, &arrow(20.0, 10.0, 0.5));
        let points = path.vertices();
        // Base corners on the bottom edge, tip one arrow length below it.
        assert_eq!(points[0], (40.0, 60.0));
        assert_eq!(points[1], (50.0, 70.0));
        assert_eq!(points[2], (60.0, 60.0));
    }

    #[test]
    fn arrow_is_symmetric_about_its_centerline() {
        let insets = Insets::uniform(8.0);
        for offset in [0.0, 0.5, 1.0] {
            let path = build_path(
                Orientation::Top,
                200.0,
                120.0,
                &insets,
                &arrow(24.0, 14.0, offset),
            );
            let points = path.vertices();
            let (base_a, tip, base_b) = (points[0], points[1], points[2]);
            let centerline = (base_a.0 + base_b.0) / 2.0;
            assert!((tip.0 - centerline).abs() < 1e-4);
            assert_eq!(base_a.1, base_b.1);
            assert!((base_b.0 - base_a.0 - 24.0).abs() < 1e-4);
        }
    }

    #[test]
    fn left_arrow_points_outward() {
        let insets = Insets {
            top: 5.0,
            left: 15.0,
            right: 5.0,
            bottom: 5.0,
        };
        let path = build_path(Orientation::Left, 100.0, 60.0, &insets, &arrow(12.0, 10.0, 0.5));
        let points = path.vertices();
        // Tip sits left of the body edge.
        assert_eq!(points[1].0, 5.0);
        assert!(points[1].0 < points[0].0);
    }

    #[test]
    fn orientation_token_and_index_parsing() {
        assert_eq!(Orientation::from_token("top"), Some(Orientation::Top));
        assert_eq!(Orientation::from_token("sideways"), None);
        assert_eq!(Orientation::from_index(2), Orientation::Right);
        assert_eq!(Orientation::from_index(9), Orientation::Bottom);
    }
}
