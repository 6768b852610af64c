//! Per-frame connection graph under per-particle and global caps.
//!
//! Selection is greedy in (i, j) index order with i < j: when a cap binds,
//! lower-indexed pairs win. Both candidate strategies evaluate pairs in that
//! same order, so they produce identical edge lists.

use crate::config::{CandidateStrategy, FieldConfig, EDGE_MAX_OPACITY};
use crate::particle::Particle;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

/// An undirected link between particles `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub opacity: f32,
}

/// A link from the pointer to one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerLink {
    pub particle: usize,
    pub distance: f32,
    pub opacity: f32,
}

#[inline]
pub fn edge_opacity(distance: f32, max_distance: f32) -> f32 {
    EDGE_MAX_OPACITY * (1.0 - distance / max_distance)
}

type Cell = (i32, i32);

/// Reusable scratch space for connection selection.
#[derive(Default)]
pub struct ConnectionSelector {
    grid: FnvHashMap<Cell, SmallVec<[u32; 8]>>,
    candidates: Vec<u32>,
}

struct Caps {
    max_distance: f32,
    per_dot: u32,
    global: u32,
}

impl ConnectionSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all degrees and rebuild `out` with this frame's edges.
    pub fn select(&mut self, particles: &mut [Particle], cfg: &FieldConfig, out: &mut Vec<Edge>) {
        out.clear();
        for p in particles.iter_mut() {
            p.degree = 0;
        }
        let caps = Caps {
            max_distance: cfg.max_distance,
            per_dot: cfg.per_dot_connections_limit,
            global: cfg.global_connections_limit,
        };
        // nothing can be strictly closer than a non-positive distance
        if caps.max_distance <= 0.0 || !caps.max_distance.is_finite() {
            return;
        }
        match cfg.candidate_strategy {
            CandidateStrategy::BruteForce => select_brute_force(particles, &caps, out),
            CandidateStrategy::Grid => self.select_grid(particles, &caps, out),
        }
    }

    fn select_grid(&mut self, particles: &mut [Particle], caps: &Caps, out: &mut Vec<Edge>) {
        let cell_size = caps.max_distance;
        for bucket in self.grid.values_mut() {
            bucket.clear();
        }
        for (i, p) in particles.iter().enumerate() {
            self.grid
                .entry(cell_of(p.position, cell_size))
                .or_default()
                .push(i as u32);
        }

        let mut global = 0u32;
        for i in 0..particles.len() {
            let (cx, cy) = cell_of(particles[i].position, cell_size);
            self.candidates.clear();
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let cell = (cx.saturating_add(dx), cy.saturating_add(dy));
                    if let Some(bucket) = self.grid.get(&cell) {
                        self.candidates
                            .extend(bucket.iter().copied().filter(|&j| j as usize > i));
                    }
                }
            }
            // saturated cell indices can name the same bucket twice
            self.candidates.sort_unstable();
            self.candidates.dedup();
            for &j in &self.candidates {
                if global >= caps.global {
                    break;
                }
                if try_connect(particles, i, j as usize, caps, out) {
                    global += 1;
                }
            }
        }
        self.grid.retain(|_, bucket| !bucket.is_empty());
    }
}

fn select_brute_force(particles: &mut [Particle], caps: &Caps, out: &mut Vec<Edge>) {
    let mut global = 0u32;
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if global >= caps.global {
                break;
            }
            if try_connect(particles, i, j, caps, out) {
                global += 1;
            }
        }
    }
}

#[inline]
fn try_connect(
    particles: &mut [Particle],
    i: usize,
    j: usize,
    caps: &Caps,
    out: &mut Vec<Edge>,
) -> bool {
    let distance = particles[i].position.distance(particles[j].position);
    if distance < caps.max_distance
        && particles[i].degree < caps.per_dot
        && particles[j].degree < caps.per_dot
    {
        particles[i].degree += 1;
        particles[j].degree += 1;
        out.push(Edge {
            a: i,
            b: j,
            distance,
            opacity: edge_opacity(distance, caps.max_distance),
        });
        return true;
    }
    false
}

#[inline]
fn cell_of(pos: Vec2, cell_size: f32) -> Cell {
    (
        (pos.x / cell_size).floor() as i32,
        (pos.y / cell_size).floor() as i32,
    )
}

/// Rebuild `out` with a link for every particle within `radius` of the pointer.
pub fn pointer_links(
    particles: &[Particle],
    pointer: Option<Vec2>,
    radius: f32,
    out: &mut Vec<PointerLink>,
) {
    out.clear();
    let Some(mouse) = pointer else {
        return;
    };
    for (i, p) in particles.iter().enumerate() {
        let distance = p.position.distance(mouse);
        if distance < radius {
            out.push(PointerLink {
                particle: i,
                distance,
                opacity: 1.0 - distance / radius,
            });
        }
    }
}
