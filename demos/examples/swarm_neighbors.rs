// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebuild-per-frame usage over a drifting swarm.
//!
//! Each frame the agents move, the tree is rebuilt from scratch with a
//! boundary fitted to wherever the swarm drifted, and every agent asks for
//! neighbors inside its vision rectangle.
//!
//! Run:
//! - `cargo run -p bramble_demos --example swarm_neighbors`

use bramble_quadtree::{Point, Position, QuadTree, Rect};

const AGENT_COUNT: usize = 512;
const FRAMES: usize = 60;
const VISION: f32 = 40.0;

struct Agent {
    pos: Point,
    vel: Point,
}

impl Position for Agent {
    fn position(&self) -> Point {
        self.pos
    }
}

impl Agent {
    fn vision_rect(&self) -> Rect {
        Rect::new(
            self.pos.x - VISION,
            self.pos.y - VISION,
            self.pos.x + VISION,
            self.pos.y + VISION,
        )
    }
}

/// Small deterministic generator so every run prints the same numbers.
fn splitmix(state: &mut u64) -> f32 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    ((z >> 40) as f32) / ((1u64 << 24) as f32)
}

fn main() {
    let mut state = 7u64;
    let mut agents: Vec<Agent> = (0..AGENT_COUNT)
        .map(|_| Agent {
            pos: Point::new(splitmix(&mut state) * 800.0, splitmix(&mut state) * 600.0),
            vel: Point::new(
                splitmix(&mut state) * 4.0 - 2.0,
                splitmix(&mut state) * 4.0 - 2.0,
            ),
        })
        .collect();

    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 800.0, 600.0), 16, 6);
    let mut hits = Vec::new();

    for frame in 0..FRAMES {
        for agent in &mut agents {
            agent.pos.x += agent.vel.x;
            agent.pos.y += agent.vel.y;
        }

        // The swarm wanders, so fit the boundary to it instead of clipping
        // against a fixed world rect.
        tree.rebuild_and_fit_to(&agents);

        let mut total_neighbors = 0usize;
        let mut loneliest = (0usize, usize::MAX);
        for (i, agent) in agents.iter().enumerate() {
            hits.clear();
            tree.query_range(agent.vision_rect(), &mut hits);
            // The query returns the agent itself as well.
            let neighbors = hits.len() - 1;
            total_neighbors += neighbors;
            if neighbors < loneliest.1 {
                loneliest = (i, neighbors);
            }
        }

        if frame % 15 == 0 {
            let b = tree.boundary();
            println!(
                "frame {frame:>2}: {} nodes, boundary {:.0}x{:.0}, avg neighbors {:.1}, \
                 loneliest agent #{} with {}",
                tree.node_count(),
                b.width(),
                b.height(),
                total_neighbors as f32 / AGENT_COUNT as f32,
                loneliest.0,
                loneliest.1,
            );
        }
    }

    println!(
        "final tree: {} nodes covering {} agents",
        tree.node_count(),
        tree.len()
    );
    assert_eq!(tree.len(), AGENT_COUNT);
}
