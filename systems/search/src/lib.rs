#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Best-first route search that must satisfy every checkpoint before the goal.
//!
//! The search runs over an augmented state space: a grid position paired with
//! the set of checkpoints satisfied on the way there. Nodes are ordered by
//! `f = g + h` and settled lazily, so a state may sit on the frontier several
//! times and only the cheapest arrival is ever expanded.
//!
//! With [`HeuristicMode::Engineered`] the estimate charges a fixed penalty per
//! unsatisfied checkpoint. That penalty is unrelated to actual resolution
//! costs and may overestimate, so the first route found is not guaranteed to
//! be the cheapest. [`HeuristicMode::UniformCost`] drops the estimate and
//! restores optimality at the price of a wider exploration.

mod frontier;
mod nodes;

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use checkpoint_route_core::{
    CellCoord, CheckpointId, HeuristicMode, SearchConfig, SearchCounters, SearchOutcome,
    SearchResult, VisitedSet,
};
use checkpoint_route_world::{query, World};
use tracing::{debug, info};

use crate::{
    frontier::Frontier,
    nodes::{NodeArena, SearchNode, StateKey},
};

/// Route search configured once and runnable against any number of worlds.
#[derive(Clone, Copy, Debug, Default)]
pub struct Search {
    config: SearchConfig,
}

impl Search {
    /// Creates a search with the provided configuration.
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Configuration applied to every run.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds a route from the world's start to its goal that satisfies every
    /// checkpoint.
    ///
    /// Failing to find a route is reported through the returned result, never
    /// as an error. The world is only read; each call owns its own frontier,
    /// node arena and settled-state map.
    #[must_use]
    pub fn run(&self, world: &World) -> SearchResult {
        self.run_in(world, NodeArena::default())
    }

    fn run_in(&self, world: &World, mut arena: NodeArena) -> SearchResult {
        let started = Instant::now();
        let start = query::start(world);
        let goal = query::goal(world);
        let checkpoint_count = query::checkpoints(world).len();
        let penalties = ResolutionPenalties::capture(world);

        info!(
            %start,
            %goal,
            checkpoints = checkpoint_count,
            heuristic = ?self.config.heuristic,
            "route search started"
        );

        let mut frontier = Frontier::default();
        let mut settled: HashMap<StateKey, u64> = HashMap::new();
        let mut counters = SearchCounters::default();
        let stop = |outcome: SearchOutcome, counters: SearchCounters| {
            let result = SearchResult::failed(outcome, started.elapsed(), counters);
            log_finish(&result, started.elapsed());
            result
        };

        let origin = SearchNode {
            cell: start,
            visited: VisitedSet::empty(),
            cost: 0,
            estimate: self.origin_estimate(start, goal),
            parent: None,
        };
        let Some(origin_handle) = arena.push(origin) else {
            return stop(SearchOutcome::NodeCapacity, counters);
        };
        frontier.push(origin_handle, origin.priority());
        counters.generated = 1;
        counters.peak_frontier = 1;

        while let Some(handle) = frontier.pop() {
            let Some(&node) = arena.get(handle) else {
                continue;
            };

            let key = node.key();
            if self.config.settle_duplicates
                && settled.get(&key).is_some_and(|&cost| cost <= node.cost)
            {
                counters.pruned += 1;
                continue;
            }
            if self
                .config
                .expansion_limit
                .is_some_and(|limit| counters.expanded >= limit)
            {
                return stop(SearchOutcome::ExpansionLimit, counters);
            }
            if self.config.settle_duplicates {
                let _ = settled.insert(key, node.cost);
            }
            counters.expanded += 1;

            if node.cell == goal && node.visited.is_complete(checkpoint_count) {
                let path = arena.path_to(handle);
                let result = SearchResult::found(
                    path,
                    node.cost,
                    node.visited,
                    checkpoint_count,
                    started.elapsed(),
                    counters,
                );
                log_finish(&result, started.elapsed());
                return result;
            }

            for neighbor in query::neighbors(world, node.cell) {
                let Ok(step) = query::movement_cost(world, neighbor) else {
                    continue;
                };
                let mut cost = node.cost.saturating_add(u64::from(step));
                let mut visited = node.visited;

                // Every entry into a checkpoint is charged, including repeats.
                if let Some(checkpoint) = query::checkpoint_index_at(world, neighbor) {
                    if let Some(penalty) = penalties.get(checkpoint) {
                        cost = cost.saturating_add(penalty);
                        visited = visited.with(checkpoint);
                    }
                }

                let child = SearchNode {
                    cell: neighbor,
                    visited,
                    cost,
                    estimate: self.estimate(neighbor, goal, visited, checkpoint_count),
                    parent: Some(handle),
                };
                let Some(child_handle) = arena.push(child) else {
                    return stop(SearchOutcome::NodeCapacity, counters);
                };
                frontier.push(child_handle, child.priority());
                counters.generated += 1;
            }
            counters.peak_frontier = counters.peak_frontier.max(frontier.len());
        }

        stop(SearchOutcome::Exhausted, counters)
    }

    fn origin_estimate(&self, start: CellCoord, goal: CellCoord) -> u64 {
        match self.config.heuristic {
            HeuristicMode::Engineered => u64::from(start.manhattan_distance(goal)),
            HeuristicMode::UniformCost => 0,
        }
    }

    fn estimate(
        &self,
        cell: CellCoord,
        goal: CellCoord,
        visited: VisitedSet,
        checkpoint_count: usize,
    ) -> u64 {
        match self.config.heuristic {
            HeuristicMode::Engineered => {
                let remaining = u64::from(visited.remaining(checkpoint_count));
                u64::from(cell.manhattan_distance(goal))
                    .saturating_add(self.config.checkpoint_penalty.saturating_mul(remaining))
            }
            HeuristicMode::UniformCost => 0,
        }
    }
}

/// Whole-number resolution cost of every checkpoint under the roster snapshot
/// taken when the search starts.
///
/// `None` marks a checkpoint that cannot be resolved: no actor has resource
/// left, so the cell is crossed like plain ground and stays unsatisfied.
#[derive(Debug)]
struct ResolutionPenalties {
    penalties: Vec<Option<u64>>,
}

impl ResolutionPenalties {
    fn capture(world: &World) -> Self {
        let eligible = query::eligible_actors(world);
        let penalties = query::checkpoints(world)
            .iter()
            .map(|checkpoint| {
                if eligible.is_empty() {
                    return None;
                }
                let cost = query::checkpoint_resolution_cost(world, checkpoint.id(), &eligible);
                cost.is_finite().then(|| cost.floor() as u64)
            })
            .collect();

        if eligible.is_empty() {
            debug!("no eligible actors; checkpoints cannot be satisfied");
        }
        Self { penalties }
    }

    fn get(&self, checkpoint: CheckpointId) -> Option<u64> {
        self.penalties.get(checkpoint.index()).copied().flatten()
    }
}

fn log_finish(result: &SearchResult, elapsed: Duration) {
    info!(
        outcome = ?result.outcome,
        cost = result.total_cost,
        steps = result.path.len(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "route search finished"
    );
    debug!(
        expanded = result.counters.expanded,
        generated = result.counters.generated,
        pruned = result.counters.pruned,
        peak_frontier = result.counters.peak_frontier,
        "route search counters"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkpoint_route_core::{
        ActorSpec, CheckpointSpec, TerrainCosts, TerrainKind, TerrainSource, WorldLayout,
    };

    fn world_with_penalty(checkpoints: usize) -> World {
        World::from_layout(WorldLayout {
            columns: 10,
            rows: 2,
            start: CellCoord::new(0, 0),
            goal: CellCoord::new(9, 0),
            checkpoints: (0..checkpoints)
                .map(|index| CheckpointSpec {
                    name: format!("cp{index}"),
                    difficulty: 7.0,
                    cell: CellCoord::new(index as u32 + 1, 1),
                })
                .collect(),
            actors: vec![ActorSpec {
                name: "solo".to_owned(),
                strength: 2.0,
                resource: 1,
            }],
            terrain: TerrainSource::Uniform {
                kind: TerrainKind::Clear,
            },
            costs: TerrainCosts::default(),
        })
        .expect("valid layout")
    }

    #[test]
    fn engineered_estimate_adds_penalty_per_unvisited_checkpoint() {
        let search = Search::default();
        let goal = CellCoord::new(9, 0);
        let visited = VisitedSet::empty().with(CheckpointId::new(1));

        assert_eq!(search.estimate(CellCoord::new(2, 1), goal, visited, 3), 8 + 100);
        assert_eq!(search.origin_estimate(CellCoord::new(0, 0), goal), 9);
    }

    #[test]
    fn uniform_cost_estimates_nothing() {
        let search = Search::new(SearchConfig {
            heuristic: HeuristicMode::UniformCost,
            ..SearchConfig::default()
        });
        let goal = CellCoord::new(9, 0);

        assert_eq!(
            search.estimate(CellCoord::new(2, 1), goal, VisitedSet::empty(), 3),
            0
        );
        assert_eq!(search.origin_estimate(CellCoord::new(0, 0), goal), 0);
    }

    #[test]
    fn exhausted_arena_stops_the_search() {
        let world = world_with_penalty(1);
        let result = Search::default().run_in(&world, NodeArena::with_capacity_limit(3));

        assert!(!result.success);
        assert_eq!(result.outcome, SearchOutcome::NodeCapacity);
        assert!(result.path.is_empty());
        assert_eq!(result.counters.generated, 3);
    }

    #[test]
    fn penalties_floor_resolution_cost() {
        let world = world_with_penalty(2);
        let penalties = ResolutionPenalties::capture(&world);

        assert_eq!(penalties.get(CheckpointId::new(0)), Some(3));
        assert_eq!(penalties.get(CheckpointId::new(1)), Some(3));
        assert_eq!(penalties.get(CheckpointId::new(2)), None);
    }
}
