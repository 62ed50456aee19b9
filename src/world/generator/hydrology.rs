//! River carving: a priority-first downhill search per source tile.
//!
//! Sources are highland tiles processed in a seed-shuffled order until
//! the configured river count is reached. Each search explores the
//! lowest-elevation frontier first and only ever steps level or
//! downhill, so accepted paths are monotonically non-increasing. Flat
//! plateaus are broken by a seeded jitter applied to heap priorities
//! only; stored path elevations are the raw field values.

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use tracing::debug;

use crate::world::config::WorldGenConfig;
use crate::world::defaults::hydrology::*;
use crate::world::defaults::OCEAN_THRESHOLD;

use super::noise::tile_noise;
use super::{CARDINALS, RIVER_JITTER_CHANNEL};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: i32,
    pub y: i32,
    pub elevation: f64,
}

/// A carved watercourse from a highland source to where flow stopped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct River {
    pub id: i32,
    pub source: (i32, i32),
    pub terminus: (i32, i32),
    pub path: Vec<PathPoint>,
    /// True when flow stalled in a closed basin instead of reaching
    /// the ocean.
    pub is_lake: bool,
}

#[derive(Copy, Clone, PartialEq, PartialOrd)]
struct FloatOrd(f64);

impl Eq for FloatOrd {}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Search nodes live in a flat arena and reference parents by index;
/// paths are rebuilt by walking the index chain.
#[derive(Clone, Copy)]
struct SearchNode {
    x: i32,
    y: i32,
    depth: usize,
    parent: usize,
}

const NO_PARENT: usize = usize::MAX;

pub(super) fn carve_rivers(config: &WorldGenConfig, elevation: &[f64]) -> Vec<River> {
    let width = config.width;
    let height = config.height;
    let count = config.tile_count();

    let mut sources: Vec<usize> = (0..count)
        .filter(|&idx| {
            let e = elevation[idx];
            (SOURCE_MIN_ELEVATION..SOURCE_MAX_ELEVATION).contains(&e)
        })
        .collect();
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(0x9E37_79B9_7F4A_7C15));
    sources.shuffle(&mut rng);

    // Path length cap doubles as the lake cutoff: a search that walks
    // this far without finding the ocean is overflowing a closed basin.
    let cap = 2 * width.min(height) as usize;
    let explore_budget = (4 * cap).min(count / 4);
    let jitter_channel = config.seed.wrapping_add(RIVER_JITTER_CHANNEL);

    let mut claimed = vec![false; count];
    // Visited stamps: bumping the round retires the whole map without
    // reallocating per source.
    let mut visited = vec![0_u32; count];
    let mut round = 0_u32;

    let mut rivers: Vec<River> = Vec::new();
    for &source in &sources {
        if rivers.len() >= config.river_target as usize {
            break;
        }
        if claimed[source] {
            continue;
        }

        round += 1;
        let Some(path) = downhill_path(
            source,
            elevation,
            &claimed,
            &mut visited,
            round,
            width,
            height,
            cap,
            explore_budget,
            jitter_channel,
        ) else {
            continue;
        };
        if path.len() < MIN_RIVER_LENGTH {
            continue;
        }

        for point in &path {
            claimed[(point.y * width + point.x) as usize] = true;
        }
        let first = path[0];
        let last = path[path.len() - 1];
        rivers.push(River {
            id: rivers.len() as i32,
            source: (first.x, first.y),
            terminus: (last.x, last.y),
            is_lake: last.elevation >= OCEAN_THRESHOLD,
            path,
        });
    }

    debug!(
        "carved {} of {} requested rivers from {} candidate sources",
        rivers.len(),
        config.river_target,
        sources.len()
    );
    rivers
}

#[allow(clippy::too_many_arguments)]
fn downhill_path(
    source: usize,
    elevation: &[f64],
    claimed: &[bool],
    visited: &mut [u32],
    round: u32,
    width: i32,
    height: i32,
    cap: usize,
    explore_budget: usize,
    jitter_channel: u64,
) -> Option<Vec<PathPoint>> {
    let sx = source as i32 % width;
    let sy = source as i32 / width;

    let mut arena = vec![SearchNode {
        x: sx,
        y: sy,
        depth: 1,
        parent: NO_PARENT,
    }];
    let mut heap: BinaryHeap<Reverse<(FloatOrd, usize)>> = BinaryHeap::new();
    heap.push(Reverse((
        FloatOrd(priority(elevation[source], jitter_channel, sx, sy)),
        0,
    )));
    visited[source] = round;

    let mut explored = 0_usize;
    while let Some(Reverse((_, node_idx))) = heap.pop() {
        explored += 1;
        if explored > explore_budget {
            // Abandon the source rather than churn through an enclosed
            // basin; the caller just carves fewer rivers.
            return None;
        }

        let node = arena[node_idx];
        let idx = (node.y * width + node.x) as usize;
        let elev = elevation[idx];
        if elev < OCEAN_THRESHOLD || node.depth >= cap {
            return Some(reconstruct(&arena, node_idx, elevation, width));
        }

        for (dx, dy) in CARDINALS {
            let nx = node.x + dx;
            let ny = node.y + dy;
            if nx < 0 || nx >= width || ny < 0 || ny >= height {
                continue;
            }
            let nidx = (ny * width + nx) as usize;
            if visited[nidx] == round || claimed[nidx] {
                continue;
            }
            // Monotonic downhill flow: level steps within tolerance are
            // allowed, uphill never is.
            if elevation[nidx] > elev + DOWNHILL_TOLERANCE {
                continue;
            }
            visited[nidx] = round;
            arena.push(SearchNode {
                x: nx,
                y: ny,
                depth: node.depth + 1,
                parent: node_idx,
            });
            heap.push(Reverse((
                FloatOrd(priority(elevation[nidx], jitter_channel, nx, ny)),
                arena.len() - 1,
            )));
        }
    }

    // Frontier exhausted below the cap: a pocket too small to overflow.
    None
}

/// Heap key: elevation plus a seeded jitter an order of magnitude below
/// the downhill tolerance. It decides ordering on flat plateaus and
/// never appears in stored path elevations.
fn priority(elevation: f64, jitter_channel: u64, x: i32, y: i32) -> f64 {
    elevation + (tile_noise(jitter_channel, x, y) - 0.5) * 2.0 * PRIORITY_JITTER
}

fn reconstruct(
    arena: &[SearchNode],
    mut node_idx: usize,
    elevation: &[f64],
    width: i32,
) -> Vec<PathPoint> {
    let mut path = Vec::new();
    loop {
        let node = &arena[node_idx];
        path.push(PathPoint {
            x: node.x,
            y: node.y,
            elevation: elevation[(node.y * width + node.x) as usize],
        });
        if node.parent == NO_PARENT {
            break;
        }
        node_idx = node.parent;
    }
    path.reverse();

    for pair in path.windows(2) {
        debug_assert!(
            pair[1].elevation <= pair[0].elevation + DOWNHILL_TOLERANCE,
            "river step went uphill: {} -> {}",
            pair[0].elevation,
            pair[1].elevation
        );
    }
    path
}
