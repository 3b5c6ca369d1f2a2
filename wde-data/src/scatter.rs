//! Rank-scatter view model: every country of the active year plotted at
//! (rank, value), with pure-Rust hit-testing and brush resolution so the
//! JS layer stays a dumb renderer.

use serde::Serialize;

use crate::scale::LinearScale;
use crate::selection::SelectionState;
use crate::year_index::YearIndex;

/// Hover/click hit radius in pixels; a gesture farther than this from
/// every point hits nothing.
pub const HIT_RADIUS_PX: f64 = 14.0;

/// Fraction of the value extent added as vertical padding.
const Y_PAD_RATIO: f64 = 0.08;

/// One plotted point with its pixel position precomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPoint {
    pub code: String,
    pub entity: String,
    pub year: i32,
    pub value: f64,
    /// 1-based position in the year's descending value order.
    pub rank: usize,
    pub selected: bool,
    pub x: f64,
    pub y: f64,
}

/// What a completed brush gesture should do to the selection.
#[derive(Debug, Clone, PartialEq)]
pub enum BrushOutcome {
    /// Zero-movement drag near a point: toggle that one code.
    Toggle(String),
    /// Rectangle covering at least one point: replace the selection.
    Replace(Vec<String>),
    /// Nothing hit; leave the selection untouched.
    NoChange,
}

/// The scatterplot for one render pass: ranked points laid out over the
/// inner plot area. Empty years produce an empty frame (axes only).
#[derive(Debug, Clone)]
pub struct ScatterFrame {
    pub year: i32,
    pub points: Vec<RankedPoint>,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ScatterFrame {
    pub fn build(
        index: &YearIndex,
        selection: &SelectionState,
        inner_w: f64,
        inner_h: f64,
    ) -> ScatterFrame {
        let year = index.year_at(selection.year_pos());
        let rows = index.rows_for(year);

        let n = rows.len();
        let x = LinearScale::new((1.0, n.max(1) as f64), (0.0, inner_w));

        let (min_v, max_v) = rows.iter().fold((f64::MAX, f64::MIN), |(lo, hi), o| {
            (lo.min(o.value), hi.max(o.value))
        });
        let (min_v, max_v) = if rows.is_empty() { (0.0, 1.0) } else { (min_v, max_v) };
        let pad = if max_v > min_v {
            (max_v - min_v) * Y_PAD_RATIO
        } else {
            1.0
        };
        let y = LinearScale::new((min_v - pad, max_v + pad), (inner_h, 0.0));

        let points = rows
            .iter()
            .enumerate()
            .map(|(i, obs)| RankedPoint {
                code: obs.code.clone(),
                entity: obs.entity.clone(),
                year: obs.year,
                value: obs.value,
                rank: i + 1,
                selected: selection.is_selected(&obs.code),
                x: x.scale((i + 1) as f64),
                y: y.scale(obs.value),
            })
            .collect();

        ScatterFrame { year, points, x, y }
    }

    /// Nearest point within [`HIT_RADIUS_PX`] of the cursor, if any.
    pub fn hit_test(&self, mx: f64, my: f64) -> Option<&RankedPoint> {
        let mut closest: Option<(&RankedPoint, f64)> = None;
        for point in &self.points {
            let dist = ((point.x - mx).powi(2) + (point.y - my).powi(2)).sqrt();
            match closest {
                Some((_, best)) if dist >= best => {}
                _ => closest = Some((point, dist)),
            }
        }
        closest
            .filter(|(_, dist)| *dist <= HIT_RADIUS_PX)
            .map(|(point, _)| point)
    }

    /// Codes of all points inside the pixel rectangle.
    pub fn brushed_codes(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<String> {
        self.points
            .iter()
            .filter(|p| p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1)
            .map(|p| p.code.clone())
            .collect()
    }

    /// Resolve a finished brush drag. A press-and-release with zero net
    /// movement is a click, never an empty replacement; a real rectangle
    /// replaces the selection only when it covers at least one point.
    pub fn end_brush(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> BrushOutcome {
        if x0 == x1 && y0 == y1 {
            return match self.hit_test(x0, y0) {
                Some(point) => BrushOutcome::Toggle(point.code.clone()),
                None => BrushOutcome::NoChange,
            };
        }
        let codes = self.brushed_codes(x0, y0, x1, y1);
        if codes.is_empty() {
            BrushOutcome::NoChange
        } else {
            BrushOutcome::Replace(codes)
        }
    }
}
