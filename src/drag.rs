//! Drop-target hit-testing for drag gestures.
//!
//! The gesture recognizer itself lives outside this crate; what the board
//! needs from a completed gesture is a destination column. Resolution is
//! an explicit two-pass lookup: precise pointer containment first, then a
//! looser bounding-box-overlap fallback, because fast or edge-of-target
//! releases can miss a precise pointer hit while still clearly indicating
//! a destination.

use crate::board::ColumnId;

/// A point in presentation-layer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// An axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Returns `true` if the point lies within this rectangle (edges
    /// inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Area of the overlap between this rectangle and `other`, zero when
    /// they do not intersect.
    #[must_use]
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let overlap_w =
            (self.x + self.width).min(other.x + other.width) - self.x.max(other.x);
        let overlap_h =
            (self.y + self.height).min(other.y + other.height) - self.y.max(other.y);
        if overlap_w <= 0.0 || overlap_h <= 0.0 {
            return 0.0;
        }
        overlap_w * overlap_h
    }
}

/// A droppable column region reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropTarget {
    /// The column this region accepts drops for.
    pub column: ColumnId,
    /// The region's bounding box.
    pub rect: Rect,
}

/// Resolves the destination column for a drag release.
///
/// Pass 1 returns the first target containing the release point. Pass 2
/// falls back to the target whose bounding box overlaps the dragged
/// card's rectangle the most (earlier targets win ties). No containment
/// and no overlap means no destination.
#[must_use]
pub fn resolve_drop_target(
    pointer: Point,
    card: &Rect,
    targets: &[DropTarget],
) -> Option<ColumnId> {
    if let Some(hit) = targets.iter().find(|target| target.rect.contains(pointer)) {
        return Some(hit.column);
    }

    let mut best: Option<(ColumnId, f64)> = None;
    for target in targets {
        let area = card.intersection_area(&target.rect);
        if area > 0.0 && best.map_or(true, |(_, best_area)| area > best_area) {
            best = Some((target.column, area));
        }
    }
    best.map(|(column, _)| column)
}
