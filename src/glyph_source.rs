//! TrueType glyph outlines as control-point seeds, using `ttf-parser`.
//!
//! A glyph's outline points (on-curve and off-curve alike, in contour order)
//! make a ready-made control-point sequence for the spline editor. Points
//! are mapped into screen space on extraction: shifted against the outline's
//! bounding box, uniformly scaled, and y-flipped (fonts are y-up, the grid
//! is y-down).

use log::debug;

use crate::basics::PointD;

// ============================================================================
// GlyphSource
// ============================================================================

/// TrueType glyph control-point source.
///
/// Loads a TTF/OTF font from raw bytes. Extraction failures surface as
/// `Err(String)`; the caller aborts the corresponding setup step.
pub struct GlyphSource {
    /// Owned font data bytes.
    face_data: Vec<u8>,
    /// Font face index (for font collections).
    face_index: u32,
}

impl GlyphSource {
    /// Create a glyph source from raw TTF/OTF data.
    ///
    /// Validates that the data contains a parseable font face.
    /// `face_index` selects the face in a font collection (use 0 for single
    /// fonts).
    pub fn from_data(data: Vec<u8>, face_index: u32) -> Result<Self, String> {
        ttf_parser::Face::parse(&data, face_index)
            .map_err(|e| format!("Failed to parse font: {:?}", e))?;
        Ok(Self {
            face_data: data,
            face_index,
        })
    }

    /// Extract the outline points of `ch`, normalized into screen space.
    ///
    /// Every point is shifted so the outline's bounding box starts at
    /// `offset`, scaled uniformly by `scale`, and y-flipped so the topmost
    /// font coordinate lands at `offset.y`.
    pub fn control_points(
        &self,
        ch: char,
        scale: f64,
        offset: PointD,
    ) -> Result<Vec<PointD>, String> {
        let face = ttf_parser::Face::parse(&self.face_data, self.face_index)
            .map_err(|e| format!("Failed to parse font: {:?}", e))?;

        let glyph_id = face
            .glyph_index(ch)
            .ok_or_else(|| format!("No glyph for {:?}", ch))?;

        let mut collector = OutlinePoints::default();
        face.outline_glyph(glyph_id, &mut collector)
            .ok_or_else(|| format!("Glyph for {:?} has no outline", ch))?;
        if collector.points.is_empty() {
            return Err(format!("Glyph for {:?} produced no points", ch));
        }

        debug!(
            "extracted {} outline points for {:?}",
            collector.points.len(),
            ch
        );
        Ok(normalize_points(&collector.points, scale, offset))
    }
}

/// Map raw font-space points into screen space: bounding-box shift, uniform
/// scale, y-flip.
fn normalize_points(points: &[PointD], scale: f64, offset: PointD) -> Vec<PointD> {
    let mut min_x = f64::MAX;
    let mut max_y = f64::MIN;
    for p in points {
        if p.x < min_x {
            min_x = p.x;
        }
        if p.y > max_y {
            max_y = p.y;
        }
    }
    points
        .iter()
        .map(|p| {
            PointD::new(
                (p.x - min_x) * scale + offset.x,
                (max_y - p.y) * scale + offset.y,
            )
        })
        .collect()
}

// ============================================================================
// OutlinePoints - implements ttf_parser::OutlineBuilder
// ============================================================================

/// Collects a glyph outline's control points in contour order.
#[derive(Default)]
struct OutlinePoints {
    points: Vec<PointD>,
}

impl OutlinePoints {
    fn push(&mut self, x: f32, y: f32) {
        self.points.push(PointD::new(x as f64, y as f64));
    }
}

impl ttf_parser::OutlineBuilder for OutlinePoints {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.push(x1, y1);
        self.push(x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.push(x1, y1);
        self.push(x2, y2);
        self.push(x, y);
    }

    fn close(&mut self) {}
}

// ============================================================================
// Tests
// ============================================================================
