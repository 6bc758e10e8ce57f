//! Area (room) regeneration from the cleaned line graph.
//!
//! Faces of the planar graph are traced with an angle-sorted half-edge
//! walk: arriving at a vertex, the walk leaves through the next edge
//! clockwise from the one it came in on. Interior faces come out
//! counterclockwise (positive signed area); the unbounded face comes
//! out clockwise and is discarded. Dangling lines produce zero-area
//! walks or spurs, both of which degrade to "no area" instead of
//! failing.
//!
//! Attributes of existing areas survive regeneration through canonical
//! ring-signature matching; unmatched polygons reset to unclassified.

use plankit_core::constants::AREA_EPSILON;
use plankit_core::id::VertexId;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

use super::solve;
use crate::model::{canonical_ring, Area, Layer, Point};

/// Recomputes the layer's area collection in place. Returns the number
/// of areas after regeneration.
pub fn regenerate(layer: &mut Layer) -> usize {
    let saved: BTreeMap<Vec<VertexId>, Area> = layer
        .areas
        .values()
        .map(|a| (a.signature(), a.clone()))
        .collect();

    let rings = extract_rings(layer);

    let mut areas = BTreeMap::new();
    for ring in rings {
        let mut area = match saved.get(&canonical_ring(&ring)) {
            Some(previous) => {
                let mut kept = previous.clone();
                kept.ring = ring;
                kept
            }
            None => Area::new(ring),
        };
        // A regenerated ring is current geometry; the marker only
        // survives on an identical ring.
        if !saved.contains_key(&area.signature()) {
            area.scale_marker = false;
        }
        areas.insert(area.id, area);
    }

    layer.areas = areas;
    let live: BTreeSet<_> = layer.areas.keys().copied().collect();
    layer.selection.areas.retain(|id| live.contains(id));

    debug!(areas = layer.areas.len(), "regenerated areas");
    layer.areas.len()
}

/// Traces every interior face ring of the layer's line graph.
fn extract_rings(layer: &Layer) -> Vec<Vec<VertexId>> {
    let positions: BTreeMap<VertexId, Point> = layer
        .vertices
        .values()
        .map(|v| (v.id, v.position))
        .collect();

    // Undirected vertex pairs; parallel lines collapse to one edge.
    let mut pairs: BTreeSet<(VertexId, VertexId)> = BTreeSet::new();
    for line in layer.lines.values() {
        let [a, b] = line.vertices;
        if a == b || !positions.contains_key(&a) || !positions.contains_key(&b) {
            continue;
        }
        if positions[&a].distance_to(&positions[&b]) <= f64::EPSILON {
            continue;
        }
        pairs.insert((a.min(b), a.max(b)));
    }

    // Angle-sorted outgoing adjacency per vertex.
    let mut adjacency: BTreeMap<VertexId, Vec<(f64, VertexId)>> = BTreeMap::new();
    for &(a, b) in &pairs {
        adjacency
            .entry(a)
            .or_default()
            .push((solve::angle(positions[&a], positions[&b]), b));
        adjacency
            .entry(b)
            .or_default()
            .push((solve::angle(positions[&b], positions[&a]), a));
    }
    for neighbors in adjacency.values_mut() {
        neighbors.sort_by(|x, y| {
            x.0.partial_cmp(&y.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| x.1.cmp(&y.1))
        });
    }

    let mut directed: Vec<(VertexId, VertexId)> = pairs
        .iter()
        .flat_map(|&(a, b)| [(a, b), (b, a)])
        .collect();
    directed.sort();

    let step_cap = directed.len() + 1;
    let mut visited: BTreeSet<(VertexId, VertexId)> = BTreeSet::new();
    let mut rings = Vec::new();

    for &start in &directed {
        if visited.contains(&start) {
            continue;
        }

        let mut ring = Vec::new();
        let mut edge = start;
        let mut abandoned = false;
        for step in 0.. {
            if step > step_cap {
                warn!("face walk did not close; degrading subgraph to no area");
                abandoned = true;
                break;
            }
            visited.insert(edge);
            ring.push(edge.0);
            let next = next_vertex(&adjacency, &positions, edge.0, edge.1);
            edge = (edge.1, next);
            if edge == start {
                break;
            }
        }
        if abandoned {
            continue;
        }

        let ring = strip_spurs(ring);
        if ring.len() < 3 {
            continue;
        }
        let points: Vec<Point> = ring.iter().map(|id| positions[id]).collect();
        if signed_area(&points) > AREA_EPSILON {
            rings.push(ring);
        }
    }

    rings
}

/// The vertex the walk leaves through after arriving at `v` from `u`:
/// the neighbor whose direction is next clockwise from the reverse
/// edge, wrapping around.
fn next_vertex(
    adjacency: &BTreeMap<VertexId, Vec<(f64, VertexId)>>,
    positions: &BTreeMap<VertexId, Point>,
    u: VertexId,
    v: VertexId,
) -> VertexId {
    let Some(neighbors) = adjacency.get(&v) else {
        return u;
    };
    if neighbors.len() == 1 {
        // Dead end: bounce back along the dangling edge.
        return neighbors[0].1;
    }

    let reverse = solve::angle(positions[&v], positions[&u]);
    let mut best: Option<(f64, VertexId)> = None;
    for &(ang, w) in neighbors {
        if w == u {
            continue;
        }
        let key = if ang < reverse {
            ang
        } else {
            ang - std::f64::consts::TAU
        };
        if best.map_or(true, |(bk, _)| key > bk) {
            best = Some((key, w));
        }
    }
    best.map(|(_, w)| w).unwrap_or(u)
}

/// Removes back-tracked spurs (`... x, y, x ...`) left in a face ring
/// by dangling edges, then collapses consecutive duplicates.
fn strip_spurs(mut ring: Vec<VertexId>) -> Vec<VertexId> {
    loop {
        let n = ring.len();
        if n < 3 {
            return ring;
        }
        let mut spur = None;
        for i in 0..n {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            if prev == next {
                spur = Some(i);
                break;
            }
        }
        match spur {
            Some(i) => {
                // Remove the spur tip and one of its flanks.
                let flank = (i + 1) % n;
                let (first, second) = if i < flank { (i, flank) } else { (flank, i) };
                ring.remove(second);
                ring.remove(first);
            }
            None => break,
        }
    }
    ring.dedup();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Shoelace signed area; positive for counterclockwise rings.
fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}
