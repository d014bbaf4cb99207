//! Endpoint spatial index with soft deletion and lazy rebuilds.
//!
//! Wraps a [`PolylineStore`] with one R\*-tree over the polylines' start
//! points (and optionally a second over their end points, needed when
//! stroke reversal is permitted). Deleting from an R-tree is costly, so
//! consuming a polyline only tombstones it in the store; the trees are
//! rebuilt from scratch — over the surviving entries only — when a query
//! samples its whole candidate window without reaching a decision.
//!
//! Every rebuild strictly shrinks the backing set, so the number of
//! rebuilds per run is bounded and queries always terminate. Pathological
//! inputs (many coincident or tightly clustered endpoints) can still force
//! frequent rebuilds and degrade throughput well below the usual
//! near-linearithmic behavior; that is a performance caveat, not a
//! correctness issue.

use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::store::PolylineStore;
use crate::types::{Point, Polyline};

/// An endpoint coordinate tagged with its store slot.
type Endpoint = GeomWithData<[f64; 2], usize>;

/// Candidate window for bounded queries.
const WITHIN_CANDIDATES: usize = 50;

/// Candidate window for unbounded queries.
const NEAREST_CANDIDATES: usize = 100;

/// Outcome of scanning one tree's candidate window.
#[derive(Debug, Clone, Copy)]
enum Scan {
    /// Nearest available entry within range.
    Hit { slot: usize, dist2: f64 },
    /// The search was exhaustive and nothing available is in range.
    Miss,
    /// The window filled up with in-range tombstones before a decision
    /// could be reached; the true nearest available entry may lie beyond
    /// the sampled window. Rebuild and retry.
    Ambiguous,
}

impl Scan {
    const fn needs_rebuild(self) -> bool {
        matches!(self, Self::Ambiguous)
    }

    const fn hit(self) -> Option<(usize, f64)> {
        match self {
            Self::Hit { slot, dist2 } => Some((slot, dist2)),
            _ => None,
        }
    }
}

/// Nearest-neighbor index over polyline endpoints.
///
/// Created fresh for a single algorithm run and discarded with it. Slot
/// ids handed out by the query methods are valid only until the next
/// query — a query may trigger a rebuild, which renumbers every entry —
/// so callers must consume an id (via [`take`](Self::take)) before
/// querying again.
#[derive(Debug)]
pub struct EndpointIndex {
    store: PolylineStore,
    starts: RTree<Endpoint>,
    /// Present only when stroke reversal is permitted.
    ends: Option<RTree<Endpoint>>,
}

impl EndpointIndex {
    /// Build an index over the given polylines.
    ///
    /// With `track_ends`, end points are indexed alongside start points
    /// and queries may match a polyline's end (signalled by the `bool` in
    /// their return value, meaning the polyline should be reversed before
    /// use). Empty polylines have no endpoints to index and are dropped.
    #[must_use]
    pub fn new(mut lines: Vec<Polyline>, track_ends: bool) -> Self {
        lines.retain(|l| !l.is_empty());
        let store = PolylineStore::new(lines);
        let (starts, ends) = build_trees(&store, track_ends);
        Self {
            store,
            starts,
            ends,
        }
    }

    /// Number of still-available polylines.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.store.live()
    }

    /// Returns `true` once every polyline has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Consume the polyline in slot `id`.
    ///
    /// Returns `None` if the slot was already consumed.
    pub fn take(&mut self, id: usize) -> Option<Polyline> {
        self.store.take(id)
    }

    /// Consume the lowest-numbered available polyline.
    ///
    /// Deterministic seed pick for chain building.
    pub fn take_front(&mut self) -> Option<Polyline> {
        self.store.take_front()
    }

    /// Find the nearest available polyline whose start (or, when ends are
    /// tracked, end) lies within `max_dist` of `point`.
    ///
    /// When both trees produce an in-range candidate the smaller distance
    /// wins; an exact tie goes to the start-point (non-reversed) match.
    /// Returns `(slot, matched_end)`, or `None` when nothing available is
    /// in range.
    pub fn nearest_within(&mut self, point: Point, max_dist: f64) -> Option<(usize, bool)> {
        let max_dist2 = max_dist * max_dist;
        let (forward, reverse) = loop {
            let forward = scan_within(&self.starts, &self.store, point, max_dist2);
            if forward.needs_rebuild() {
                self.rebuild();
                continue;
            }
            let reverse = match self.ends.as_ref() {
                Some(ends) => scan_within(ends, &self.store, point, max_dist2),
                None => Scan::Miss,
            };
            if reverse.needs_rebuild() {
                self.rebuild();
                continue;
            }
            break (forward.hit(), reverse.hit());
        };

        match (forward, reverse) {
            (None, None) => None,
            (Some((slot, _)), None) => Some((slot, false)),
            (None, Some((slot, _))) => Some((slot, true)),
            (Some((slot, dist2)), Some((rslot, rdist2))) => {
                if rdist2 < dist2 {
                    Some((rslot, true))
                } else {
                    Some((slot, false))
                }
            }
        }
    }

    /// Find the globally nearest available polyline, unbounded.
    ///
    /// Returns `(slot, matched_end)`; `None` only when the index is
    /// empty.
    pub fn nearest_any(&mut self, point: Point) -> Option<(usize, bool)> {
        if self.store.is_empty() {
            return None;
        }
        loop {
            let forward = scan_nearest(&self.starts, &self.store, point);
            let reverse = self
                .ends
                .as_ref()
                .map(|ends| scan_nearest(ends, &self.store, point));

            match (forward, reverse) {
                // Reversal permitted: both trees must resolve before the
                // distances can be compared.
                (Some((slot, dist2)), Some(Some((rslot, rdist2)))) => {
                    return if rdist2 < dist2 {
                        Some((rslot, true))
                    } else {
                        Some((slot, false))
                    };
                }
                // Reversal not permitted: the start tree alone decides.
                (Some((slot, _)), None) => return Some((slot, false)),
                // A candidate window was all tombstones; the true nearest
                // available entry may lie beyond it.
                _ => self.rebuild(),
            }
        }
    }

    /// Compact the store and rebuild the tree(s) over the survivors.
    ///
    /// Renumbers every slot; ids handed out earlier are invalid.
    fn rebuild(&mut self) {
        self.store.compact();
        let (starts, ends) = build_trees(&self.store, self.ends.is_some());
        self.starts = starts;
        self.ends = ends;
    }
}

/// Build start (and optionally end) trees over the store's available
/// entries.
fn build_trees(
    store: &PolylineStore,
    track_ends: bool,
) -> (RTree<Endpoint>, Option<RTree<Endpoint>>) {
    let starts: Vec<Endpoint> = store
        .iter_available()
        .filter_map(|(slot, line)| line.first().map(|p| GeomWithData::new([p.x, p.y], slot)))
        .collect();
    let ends = track_ends.then(|| {
        let entries: Vec<Endpoint> = store
            .iter_available()
            .filter_map(|(slot, line)| line.last().map(|p| GeomWithData::new([p.x, p.y], slot)))
            .collect();
        RTree::bulk_load(entries)
    });
    (RTree::bulk_load(starts), ends)
}

/// Bounded scan: walk candidates in increasing distance order until an
/// available one is found, the distance bound is crossed, or the window
/// fills with tombstones.
fn scan_within(tree: &RTree<Endpoint>, store: &PolylineStore, point: Point, max_dist2: f64) -> Scan {
    let mut sampled = 0;
    for (entry, dist2) in tree.nearest_neighbor_iter_with_distance_2(&[point.x, point.y]) {
        if dist2 > max_dist2 {
            // Crossed the bound without filling the window: the search
            // was exhaustive within range.
            return Scan::Miss;
        }
        if store.is_available(entry.data) {
            return Scan::Hit {
                slot: entry.data,
                dist2,
            };
        }
        sampled += 1;
        if sampled == WITHIN_CANDIDATES {
            return Scan::Ambiguous;
        }
    }
    Scan::Miss
}

/// Unbounded scan: first available candidate within the window, if any.
fn scan_nearest(
    tree: &RTree<Endpoint>,
    store: &PolylineStore,
    point: Point,
) -> Option<(usize, f64)> {
    tree.nearest_neighbor_iter_with_distance_2(&[point.x, point.y])
        .take(NEAREST_CANDIDATES)
        .find(|(entry, _)| store.is_available(entry.data))
        .map(|(entry, dist2)| (entry.data, dist2))
}
