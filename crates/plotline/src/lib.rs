//! plotline: polyline merging and plot-order optimization (sans-IO).
//!
//! Pen plotters pay for every pen lift twice — in travel time and in
//! registration error — so a plot's stroke list should contain as few,
//! as well-ordered strokes as possible. This crate provides the two
//! core passes for that:
//!
//! - [`merge_lines`] — fuse chains of polylines whose endpoints
//!   (nearly) touch into single strokes ("linemerge");
//! - [`sort_lines`] — reorder (and optionally reverse) strokes into a
//!   greedy nearest-neighbor tour that minimizes pen-up travel
//!   ("linesort").
//!
//! Both are built on [`EndpointIndex`], an R-tree over stroke endpoints
//! with soft deletion and amortized rebuilds. Supporting operations
//! (cropping, simplification, seam relocation, multipass, splitting,
//! framing, pen-up statistics) round out the collection-processing
//! toolkit.
//!
//! This crate has **no I/O dependencies** — it operates on in-memory
//! polylines in whatever consistent unit the host pipeline uses, and
//! reports nothing on its own: hosts that want before/after numbers use
//! [`pen_up_stats`] and collection lengths.

pub mod crop;
pub mod frame;
pub mod index;
pub mod merge;
pub mod multipass;
pub mod reloop;
pub mod simplify;
pub mod sort;
pub mod split;
pub mod stats;
pub mod store;
pub mod types;

use serde::{Deserialize, Serialize};

pub use crop::crop;
pub use frame::{bounds, frame};
pub use index::EndpointIndex;
pub use merge::merge_lines;
pub use multipass::multipass;
pub use reloop::{is_closed, reloop_lines};
pub use simplify::{simplify, simplify_lines};
pub use sort::sort_lines;
pub use split::split_all;
pub use stats::{PenUpStats, pen_up_stats, segment_count};
pub use store::PolylineStore;
pub use types::{Point, Polyline};

/// Configuration for the [`optimize`] convenience pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizeConfig {
    /// Maximum distance between two stroke endings for them to be fused
    /// into one stroke.
    pub merge_tolerance: f64,

    /// Whether strokes may be reversed, both to further merging and to
    /// shorten pen-up jumps while sorting.
    pub allow_reversal: bool,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            merge_tolerance: 0.05,
            allow_reversal: true,
        }
    }
}

/// Run the standard optimization pipeline: merge, then sort.
///
/// Merging first is the recommended order — it shrinks the stroke count
/// and thereby both the sorting work and the residual pen-up travel.
/// Collections with fewer than two polylines come back unchanged.
#[must_use = "returns the optimized polylines"]
pub fn optimize(lines: &[Polyline], config: &OptimizeConfig) -> Vec<Polyline> {
    let merged = merge_lines(lines, config.merge_tolerance, config.allow_reversal);
    sort_lines(&merged, config.allow_reversal)
}
