//! Anchor-relative placement: where to draw a measured bubble so its arrow
//! touches the anchor and the bubble is centered on the perpendicular axis.
//!
//! No clamping to screen bounds happens here; off-screen placement is the
//! caller's responsibility to prevent.

use crate::geometry::Orientation;

/// On-screen bounding box of the anchor element, snapshotted once per
/// placement call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Measured outer size of the bubble, insets included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Where the bubble sits relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// The arrow orientation facing the anchor from this side: a bubble
    /// below its anchor carries an upward arrow, and so on.
    pub fn arrow_orientation(self) -> Orientation {
        match self {
            Side::Bottom => Orientation::Top,
            Side::Top => Orientation::Bottom,
            Side::Right => Orientation::Left,
            Side::Left => Orientation::Right,
        }
    }
}

/// Top-left coordinate at which to draw the bubble's bounding box.
///
/// Offsets by `margin` along the chosen side and centers the bubble on the
/// other axis. Pure and idempotent.
pub fn place(anchor: &AnchorBox, bubble: Size, side: Side, margin: f32) -> (f32, f32) {
    let centered_x = anchor.x - (bubble.width - anchor.width) / 2.0;
    let centered_y = anchor.y - (bubble.height - anchor.height) / 2.0;
    match side {
        Side::Bottom => (centered_x, anchor.y + anchor.height + margin),
        Side::Top => (centered_x, anchor.y - bubble.height - margin),
        Side::Right => (anchor.x + anchor.width + margin, centered_y),
        Side::Left => (anchor.x - bubble.width - margin, centered_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: AnchorBox = AnchorBox {
        x: 100.0,
        y: 200.0,
        width: 50.0,
        height: 20.0,
    };
    const BUBBLE: Size = Size {
        width: 90.0,
        height: 40.0,
    };

    #[test]
    fn below_anchor_centers_horizontally() {
        let (x, y) = place(&ANCHOR, BUBBLE, Side::Bottom, 10.0);
        assert_eq!((x, y), (80.0, 230.0));
        // Bubble center lines up with anchor center.
        assert_eq!(x + BUBBLE.width / 2.0, ANCHOR.x + ANCHOR.width / 2.0);
    }

    #[test]
    fn opposite_sides_mirror() {
        let below = place(&ANCHOR, BUBBLE, Side::Bottom, 10.0);
        let above = place(&ANCHOR, BUBBLE, Side::Top, 10.0);
        assert_eq!(below.0, above.0);
        assert_eq!(above.1, ANCHOR.y - BUBBLE.height - 10.0);

        let right = place(&ANCHOR, BUBBLE, Side::Right, 6.0);
        let left = place(&ANCHOR, BUBBLE, Side::Left, 6.0);
        assert_eq!(right.1, left.1);
        assert_eq!(right.0, ANCHOR.x + ANCHOR.width + 6.0);
        assert_eq!(left.0, ANCHOR.x - BUBBLE.width - 6.0);
    }

    #[test]
    fn placement_is_idempotent() {
        let first = place(&ANCHOR, BUBBLE, Side::Left, 4.0);
        let second = place(&ANCHOR, BUBBLE, Side::Left, 4.0);
        assert_eq!(first, second);
    }

    #[test]
    fn side_maps_to_facing_arrow() {
        assert_eq!(Side::Bottom.arrow_orientation(), Orientation::Top);
        assert_eq!(Side::Top.arrow_orientation(), Orientation::Bottom);
        assert_eq!(Side::Right.arrow_orientation(), Orientation::Left);
        assert_eq!(Side::Left.arrow_orientation(), Orientation::Right);
    }
}
