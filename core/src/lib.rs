#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the checkpoint route workspace.
//!
//! This crate defines the value types that connect the world model, the
//! search engine and the adapters. Adapters describe a world with a
//! [`WorldLayout`], the world crate validates it into an immutable model, and
//! the search system answers with a [`SearchResult`]. Every type that crosses
//! an adapter boundary derives `serde` so transports can encode it directly.

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Largest number of checkpoints a single world may declare.
///
/// Each checkpoint owns one bit of a [`VisitedSet`].
pub const MAX_CHECKPOINTS: usize = 64;

/// Penalty charged by the engineered heuristic for every unvisited checkpoint.
pub const DEFAULT_CHECKPOINT_PENALTY: u64 = 50;

/// Cardinal directions in the order neighbors are enumerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
    /// Movement toward increasing column indices.
    East,
}

impl Direction {
    /// Every direction in neighbor enumeration order.
    ///
    /// The order feeds frontier insertion order and therefore tie handling, so
    /// it must stay fixed for searches to be reproducible.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }

    /// Cell one step away in the provided direction.
    ///
    /// Returns `None` when the step would underflow or overflow the coordinate
    /// space. Grid bounds are not consulted.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<CellCoord> {
        match direction {
            Direction::North => self.row.checked_sub(1).map(|row| Self::new(self.column, row)),
            Direction::South => self.row.checked_add(1).map(|row| Self::new(self.column, row)),
            Direction::West => self
                .column
                .checked_sub(1)
                .map(|column| Self::new(column, self.row)),
            Direction::East => self
                .column
                .checked_add(1)
                .map(|column| Self::new(column, self.row)),
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Unique identifier of a checkpoint, equal to its position in the world's
/// checkpoint sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CheckpointId(u32);

impl CheckpointId {
    /// Creates a new checkpoint identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Identifier widened to a sequence index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Unique identifier of an actor, equal to its position in the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(u32);

impl ActorId {
    /// Creates a new actor identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Identifier widened to a roster index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Terrain occupying a single grid cell.
///
/// Terrain crosses the wire as a numeric code: `0` rough, `1` clear,
/// `2` difficult, `3` start, `4` goal and `5 + i` for checkpoint `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub enum TerrainKind {
    /// Expensive terrain that routes avoid whenever a corridor exists.
    Rough,
    /// Cheapest terrain; markers are priced like it.
    Clear,
    /// Moderately expensive terrain.
    Difficult,
    /// Marker for the start cell.
    Start,
    /// Marker for the goal cell.
    Goal,
    /// Marker for the checkpoint with the provided identifier.
    Checkpoint(CheckpointId),
}

impl TerrainKind {
    const CHECKPOINT_BASE: u32 = 5;

    /// Numeric wire code of the terrain.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Rough => 0,
            Self::Clear => 1,
            Self::Difficult => 2,
            Self::Start => 3,
            Self::Goal => 4,
            Self::Checkpoint(id) => Self::CHECKPOINT_BASE.saturating_add(id.get()),
        }
    }

    /// Decodes a wire code. Every code at or above five denotes a checkpoint.
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            0 => Self::Rough,
            1 => Self::Clear,
            2 => Self::Difficult,
            3 => Self::Start,
            4 => Self::Goal,
            other => Self::Checkpoint(CheckpointId::new(other - Self::CHECKPOINT_BASE)),
        }
    }

    /// Reports whether the terrain carries start, goal or checkpoint meaning.
    #[must_use]
    pub const fn is_marker(self) -> bool {
        matches!(self, Self::Start | Self::Goal | Self::Checkpoint(_))
    }

    /// Checkpoint identified by the marker, if any.
    #[must_use]
    pub const fn checkpoint(self) -> Option<CheckpointId> {
        match self {
            Self::Checkpoint(id) => Some(id),
            _ => None,
        }
    }
}

impl From<TerrainKind> for u32 {
    fn from(kind: TerrainKind) -> Self {
        kind.code()
    }
}

impl From<u32> for TerrainKind {
    fn from(code: u32) -> Self {
        Self::from_code(code)
    }
}

/// Traversal cost charged for entering each base terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerrainCosts {
    /// Cost of entering rough terrain.
    pub rough: u32,
    /// Cost of entering clear terrain and every marker cell.
    pub clear: u32,
    /// Cost of entering difficult terrain.
    pub difficult: u32,
}

impl TerrainCosts {
    /// Movement cost of entering a cell with the provided terrain.
    ///
    /// Markers carry meaning but no terrain of their own, so they are priced
    /// as clear ground.
    #[must_use]
    pub const fn cost_of(&self, kind: TerrainKind) -> u32 {
        match kind {
            TerrainKind::Rough => self.rough,
            TerrainKind::Difficult => self.difficult,
            TerrainKind::Clear
            | TerrainKind::Start
            | TerrainKind::Goal
            | TerrainKind::Checkpoint(_) => self.clear,
        }
    }
}

impl Default for TerrainCosts {
    fn default() -> Self {
        Self {
            rough: 200,
            clear: 1,
            difficult: 5,
        }
    }
}

/// Set of checkpoints satisfied along a path, one bit per checkpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisitedSet(u64);

impl VisitedSet {
    /// Set with no checkpoint satisfied.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Copy of the set with the provided checkpoint marked.
    ///
    /// Identifiers beyond [`MAX_CHECKPOINTS`] leave the set unchanged.
    #[must_use]
    pub const fn with(self, checkpoint: CheckpointId) -> Self {
        if checkpoint.index() >= MAX_CHECKPOINTS {
            return self;
        }
        Self(self.0 | (1 << checkpoint.get()))
    }

    /// Reports whether the checkpoint has been satisfied.
    #[must_use]
    pub const fn contains(&self, checkpoint: CheckpointId) -> bool {
        checkpoint.index() < MAX_CHECKPOINTS && self.0 & (1 << checkpoint.get()) != 0
    }

    /// Number of satisfied checkpoints.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Reports whether no checkpoint has been satisfied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of checkpoints among the first `total` that remain unsatisfied.
    #[must_use]
    pub const fn remaining(&self, total: usize) -> u32 {
        (Self::full(total).0 & !self.0).count_ones()
    }

    /// Reports whether all of the first `total` checkpoints are satisfied.
    #[must_use]
    pub const fn is_complete(&self, total: usize) -> bool {
        self.remaining(total) == 0
    }

    /// Per-checkpoint flags for the first `total` checkpoints.
    #[must_use]
    pub fn flags(&self, total: usize) -> Vec<bool> {
        (0..total.min(MAX_CHECKPOINTS))
            .map(|index| self.0 & (1 << index) != 0)
            .collect()
    }

    const fn full(total: usize) -> Self {
        if total >= MAX_CHECKPOINTS {
            Self(u64::MAX)
        } else {
            Self((1 << total) - 1)
        }
    }
}

/// Declarative description of a checkpoint within a [`WorldLayout`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckpointSpec {
    /// Display name of the checkpoint.
    pub name: String,
    /// Magnitude divided by the combined actor strength to price resolution.
    pub difficulty: f64,
    /// Cell the checkpoint occupies.
    pub cell: CellCoord,
}

/// Declarative description of an actor within a [`WorldLayout`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActorSpec {
    /// Display name of the actor.
    pub name: String,
    /// Strength contributed to checkpoint resolution.
    pub strength: f64,
    /// Remaining resource; zero makes the actor ineligible.
    pub resource: u32,
}

/// Source of the base terrain painted beneath the world's markers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum TerrainSource {
    /// Rough ground with corridors carved between the points of interest.
    #[default]
    Generated,
    /// Every cell carries the same terrain.
    Uniform {
        /// Terrain assigned to every cell.
        kind: TerrainKind,
    },
    /// Terrain listed row by row.
    Explicit {
        /// Terrain rows ordered from row zero downward.
        rows: Vec<Vec<TerrainKind>>,
    },
}

/// Complete description from which a world model is constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldLayout {
    /// Number of columns in the grid.
    pub columns: u32,
    /// Number of rows in the grid.
    pub rows: u32,
    /// Cell the route starts from.
    pub start: CellCoord,
    /// Cell the route must end on.
    pub goal: CellCoord,
    /// Checkpoints in identifier order.
    #[serde(default)]
    pub checkpoints: Vec<CheckpointSpec>,
    /// Actors in identifier order.
    #[serde(default)]
    pub actors: Vec<ActorSpec>,
    /// Base terrain beneath the markers.
    #[serde(default)]
    pub terrain: TerrainSource,
    /// Movement cost table.
    #[serde(default)]
    pub costs: TerrainCosts,
}

/// Dimensions of a grid measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    /// Number of columns.
    pub columns: u32,
    /// Number of rows.
    pub rows: u32,
}

/// Serializable view of a fully generated world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Grid dimensions.
    pub size: GridSize,
    /// Terrain rows, markers included, ordered from row zero downward.
    pub grid: Vec<Vec<TerrainKind>>,
    /// Checkpoints in identifier order.
    pub checkpoints: Vec<CheckpointSpec>,
    /// Actor roster in identifier order.
    pub actors: Vec<ActorSpec>,
    /// Start cell.
    pub start: CellCoord,
    /// Goal cell.
    pub goal: CellCoord,
    /// Movement cost table in effect.
    pub costs: TerrainCosts,
}

/// Heuristic used to order the search frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicMode {
    /// Manhattan distance plus a fixed penalty per unvisited checkpoint.
    ///
    /// The penalty is not derived from real resolution costs, so the estimate
    /// may overestimate and the first route found is not guaranteed optimal.
    #[default]
    Engineered,
    /// No estimate at all; the search degrades to uniform-cost search.
    UniformCost,
}

/// Tunables for a single search invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Heuristic used to order the frontier.
    pub heuristic: HeuristicMode,
    /// Penalty per unvisited checkpoint under [`HeuristicMode::Engineered`].
    pub checkpoint_penalty: u64,
    /// Discard popped states dominated by an already settled state.
    pub settle_duplicates: bool,
    /// Maximum number of expansions before giving up; unbounded when `None`.
    pub expansion_limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicMode::Engineered,
            checkpoint_penalty: DEFAULT_CHECKPOINT_PENALTY,
            settle_duplicates: true,
            expansion_limit: None,
        }
    }
}

/// How a search invocation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A route visiting every checkpoint reached the goal.
    Found,
    /// The frontier emptied without satisfying the goal test.
    Exhausted,
    /// The configured expansion limit was reached first.
    ExpansionLimit,
    /// More nodes were generated than the node arena can address.
    NodeCapacity,
}

/// Work performed by a search invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCounters {
    /// Nodes popped, settled and goal-tested before the expansion limit
    /// stopped the search.
    pub expanded: u64,
    /// Nodes pushed onto the frontier, the origin included.
    pub generated: u64,
    /// Popped nodes discarded as dominated.
    pub pruned: u64,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
}

/// Derived statistics attached to a successful search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Number of cells on the path, start and goal included.
    pub path_length: usize,
    /// Total cost divided by the path length.
    pub average_cost_per_step: f64,
    /// Final visited flag of every checkpoint.
    pub checkpoints_visited: Vec<bool>,
    /// Human-readable elapsed time.
    pub elapsed: String,
}

/// Outcome of a single search invocation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult {
    /// Whether a route satisfying every checkpoint was found.
    pub success: bool,
    /// How the search ended.
    pub outcome: SearchOutcome,
    /// Cells from start to goal; empty on failure.
    pub path: Vec<CellCoord>,
    /// Accumulated route cost; zero on failure.
    pub total_cost: u64,
    /// Human-readable elapsed time.
    pub duration: String,
    /// Derived statistics, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SearchStatistics>,
    /// Work performed by the search.
    pub counters: SearchCounters,
}

impl SearchResult {
    /// Builds a successful result and derives its statistics.
    #[must_use]
    pub fn found(
        path: Vec<CellCoord>,
        total_cost: u64,
        visited: VisitedSet,
        checkpoint_count: usize,
        elapsed: Duration,
        counters: SearchCounters,
    ) -> Self {
        let duration = format_duration(elapsed);
        let path_length = path.len();
        let average_cost_per_step = if path_length == 0 {
            0.0
        } else {
            total_cost as f64 / path_length as f64
        };
        Self {
            success: true,
            outcome: SearchOutcome::Found,
            path,
            total_cost,
            duration: duration.clone(),
            statistics: Some(SearchStatistics {
                path_length,
                average_cost_per_step,
                checkpoints_visited: visited.flags(checkpoint_count),
                elapsed: duration,
            }),
            counters,
        }
    }

    /// Builds a failed result with an empty path and zero cost.
    #[must_use]
    pub fn failed(outcome: SearchOutcome, elapsed: Duration, counters: SearchCounters) -> Self {
        Self {
            success: false,
            outcome,
            path: Vec::new(),
            total_cost: 0,
            duration: format_duration(elapsed),
            statistics: None,
            counters,
        }
    }
}

/// Formats an elapsed duration for human consumption, e.g. `1.25ms`.
#[must_use]
pub fn format_duration(elapsed: Duration) -> String {
    format!("{elapsed:?}")
}
