//! Interactive spline control-point editor.
//!
//! Drives the edit loop of one closed outline: hit-testing the pointer
//! against control-point markers, starting and ending drags, appending new
//! points, and rebuilding the spline plus re-rasterizing whenever the point
//! sequence actually changes. Input arrives already decoded as a pointer
//! position and button edge events, polled once per frame by the host;
//! marker drawing stays with the host renderer, which reads
//! [`SplineCtrl::marker_rect`] and [`SplineCtrl::hit_point`].

use log::debug;

use crate::basics::{PointD, RectD};
use crate::rasterizer_scanline_nz::RasterizerScanlineNz;
use crate::spline::Spline;

/// Default side length of the square hit area centered on a control point.
pub const DEFAULT_POINT_SIZE: f64 = 20.0;

// ============================================================================
// SplineCtrl
// ============================================================================

/// Control-point editor for one closed spline outline.
///
/// Owns the authoritative control-point sequence and the spline derived
/// from it. The spline is rebuilt wholesale on every structural change and
/// never edited directly; treat it as a cache of the points.
pub struct SplineCtrl {
    points: Vec<PointD>,
    dragging: Option<usize>,
    point_size: f64,
    spline: Spline,
}

impl SplineCtrl {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            dragging: None,
            point_size: DEFAULT_POINT_SIZE,
            spline: Spline::new(),
        }
    }

    /// Create an editor seeded with `points` (e.g. a glyph outline) and
    /// rasterize the initial shape.
    pub fn with_points(points: Vec<PointD>, ras: &mut RasterizerScanlineNz) -> Self {
        let mut ctrl = Self::new();
        ctrl.points = points;
        ctrl.rebuild(ras);
        ctrl
    }

    pub fn points(&self) -> &[PointD] {
        &self.points
    }

    pub fn spline(&self) -> &Spline {
        &self.spline
    }

    /// Index of the point currently being dragged, if any.
    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    /// Set the side length of the point hit squares.
    pub fn point_size(&mut self, s: f64) {
        self.point_size = s;
    }

    /// The marker/hit square centered on control point `i`.
    pub fn marker_rect(&self, i: usize) -> RectD {
        let p = self.points[i];
        let half = self.point_size * 0.5;
        RectD::new(p.x - half, p.y - half, p.x + half, p.y + half)
    }

    /// First control point (iteration order) whose marker square contains
    /// `m`, if any. Overlapping squares resolve to the lower index.
    pub fn hit_point(&self, m: PointD) -> Option<usize> {
        (0..self.points.len()).find(|&i| self.marker_rect(i).hit_test(m.x, m.y))
    }

    /// Rebuild the spline from the current points and re-rasterize.
    pub fn rebuild(&mut self, ras: &mut RasterizerScanlineNz) {
        self.spline.rebuild(&self.points);
        ras.rasterize(&self.spline);
    }

    /// One input-poll step.
    ///
    /// `m` is the current pointer position; `pressed` and `released` are the
    /// button edge events observed since the last poll. Returns whether the
    /// outline was rebuilt (and the grid recomputed) this step.
    ///
    /// While a drag is active the dragged point follows the pointer, and
    /// only an actual pointer move pays the rebuild; a release just ends the
    /// drag. Otherwise a press either grabs the hovered point or appends a
    /// new one. Append and drag both rebuild immediately, so the grid never
    /// lags the point sequence.
    pub fn step(
        &mut self,
        m: PointD,
        pressed: bool,
        released: bool,
        ras: &mut RasterizerScanlineNz,
    ) -> bool {
        if let Some(i) = self.dragging {
            let mut rebuilt = false;
            if self.points[i] != m {
                self.points[i] = m;
                self.rebuild(ras);
                rebuilt = true;
            }
            if released {
                self.dragging = None;
            }
            return rebuilt;
        }

        if pressed {
            if let Some(i) = self.hit_point(m) {
                debug!("dragging control point {}", i);
                self.dragging = Some(i);
            } else {
                debug!(
                    "added control point {} at ({}, {})",
                    self.points.len(),
                    m.x,
                    m.y
                );
                self.points.push(m);
                self.rebuild(ras);
                return true;
            }
        }
        false
    }
}

impl Default for SplineCtrl {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::Spline;

    fn pt(x: f64, y: f64) -> PointD {
        PointD::new(x, y)
    }

    fn default_ras() -> RasterizerScanlineNz {
        RasterizerScanlineNz::new(80, 60, 10.0, 10.0)
    }

    const SQUARE: [PointD; 4] = [
        PointD { x: 100.0, y: 100.0 },
        PointD { x: 300.0, y: 100.0 },
        PointD { x: 300.0, y: 300.0 },
        PointD { x: 100.0, y: 300.0 },
    ];

    #[test]
    fn test_press_in_open_space_appends_and_rebuilds() {
        let mut ras = default_ras();
        let mut ctrl = SplineCtrl::new();
        for (i, &p) in SQUARE.iter().enumerate() {
            assert!(ctrl.step(p, true, false, &mut ras));
            assert_eq!(ctrl.points().len(), i + 1);
            assert!(ctrl.dragging().is_none());
        }
        assert_eq!(ctrl.spline().len(), 2);
        assert!(ras.grid().filled_count() > 0);
    }

    #[test]
    fn test_press_on_marker_starts_drag_without_append() {
        let mut ras = default_ras();
        let mut ctrl = SplineCtrl::with_points(SQUARE.to_vec(), &mut ras);
        assert!(!ctrl.step(pt(103.0, 98.0), true, false, &mut ras));
        assert_eq!(ctrl.dragging(), Some(0));
        assert_eq!(ctrl.points().len(), 4);
    }

    #[test]
    fn test_drag_moves_point_and_recomputes_grid() {
        let mut ras = default_ras();
        let mut ctrl = SplineCtrl::with_points(SQUARE.to_vec(), &mut ras);
        ctrl.step(pt(100.0, 100.0), true, false, &mut ras);
        assert!(ctrl.step(pt(150.0, 150.0), false, false, &mut ras));
        assert_eq!(ctrl.points()[0], pt(150.0, 150.0));

        // The grid must match a fresh pass over the same points.
        let mut fresh = default_ras();
        fresh.rasterize(&Spline::from_points(ctrl.points()));
        assert_eq!(ras.grid(), fresh.grid());
    }

    #[test]
    fn test_stationary_pointer_causes_no_rebuild() {
        let mut ras = default_ras();
        let mut ctrl = SplineCtrl::with_points(SQUARE.to_vec(), &mut ras);
        ctrl.step(pt(100.0, 100.0), true, false, &mut ras);
        assert!(ctrl.step(pt(150.0, 150.0), false, false, &mut ras));

        let before = ras.grid().clone();
        assert!(!ctrl.step(pt(150.0, 150.0), false, false, &mut ras));
        assert_eq!(*ras.grid(), before);
    }

    #[test]
    fn test_release_ends_drag_without_rebuild() {
        let mut ras = default_ras();
        let mut ctrl = SplineCtrl::with_points(SQUARE.to_vec(), &mut ras);
        ctrl.step(pt(100.0, 100.0), true, false, &mut ras);
        assert!(!ctrl.step(pt(100.0, 100.0), false, true, &mut ras));
        assert!(ctrl.dragging().is_none());
    }

    #[test]
    fn test_move_and_release_in_one_step() {
        let mut ras = default_ras();
        let mut ctrl = SplineCtrl::with_points(SQUARE.to_vec(), &mut ras);
        ctrl.step(pt(100.0, 100.0), true, false, &mut ras);
        assert!(ctrl.step(pt(180.0, 120.0), false, true, &mut ras));
        assert_eq!(ctrl.points()[0], pt(180.0, 120.0));
        assert!(ctrl.dragging().is_none());
    }

    #[test]
    fn test_overlapping_markers_resolve_to_lower_index() {
        let mut ras = default_ras();
        let ctrl = SplineCtrl::with_points(vec![pt(100.0, 100.0), pt(110.0, 100.0)], &mut ras);
        assert_eq!(ctrl.hit_point(pt(105.0, 100.0)), Some(0));
        assert_eq!(ctrl.hit_point(pt(118.0, 100.0)), Some(1));
        assert_eq!(ctrl.hit_point(pt(400.0, 400.0)), None);
    }

    #[test]
    fn test_marker_rect_respects_point_size() {
        let mut ras = default_ras();
        let mut ctrl = SplineCtrl::with_points(vec![pt(100.0, 100.0)], &mut ras);
        ctrl.point_size(8.0);
        let rect = ctrl.marker_rect(0);
        assert_eq!(rect.x1, 96.0);
        assert_eq!(rect.y1, 96.0);
        assert_eq!(rect.x2, 104.0);
        assert_eq!(rect.y2, 104.0);
        assert!(ctrl.hit_point(pt(107.0, 100.0)).is_none());
    }

    #[test]
    fn test_with_points_rasterizes_immediately() {
        let mut ras = default_ras();
        let ctrl = SplineCtrl::with_points(SQUARE.to_vec(), &mut ras);
        assert_eq!(ctrl.points().len(), 4);
        assert!(ras.grid().filled_count() > 0);
    }
}
