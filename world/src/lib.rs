#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Immutable world model consumed by the checkpoint route search.
//!
//! A [`World`] is built once from a [`WorldLayout`], validated up front, and
//! never mutated afterwards. The search reads it exclusively through the
//! [`query`] module, so one world may back any number of concurrent searches.

mod defaults;
mod generation;
mod grid;
mod navigation;

use std::{collections::HashMap, fmt};

use checkpoint_route_core::{
    ActorId, CellCoord, CheckpointId, TerrainCosts, TerrainKind, TerrainSource, WorldLayout,
    MAX_CHECKPOINTS,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::grid::TerrainGrid;

pub use defaults::default_layout;

/// Layout feature that claims a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Landmark {
    /// The start cell.
    Start,
    /// The goal cell.
    Goal,
    /// The checkpoint with the provided identifier.
    Checkpoint(CheckpointId),
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
            Self::Checkpoint(id) => write!(f, "checkpoint {}", id.get()),
        }
    }
}

/// Reasons a layout is rejected or a query cannot be answered.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum WorldError {
    /// The grid has no cells.
    #[error("grid must contain at least one cell, got {columns}x{rows}")]
    EmptyGrid {
        /// Declared column count.
        columns: u32,
        /// Declared row count.
        rows: u32,
    },
    /// A landmark lies outside the grid.
    #[error("{landmark} at {cell} lies outside the {columns}x{rows} grid")]
    OutOfBounds {
        /// Offending landmark.
        landmark: Landmark,
        /// Cell it was placed on.
        cell: CellCoord,
        /// Grid column count.
        columns: u32,
        /// Grid row count.
        rows: u32,
    },
    /// Start and goal share a cell.
    #[error("start and goal share cell {cell}")]
    StartIsGoal {
        /// Shared cell.
        cell: CellCoord,
    },
    /// Two landmarks share a cell.
    #[error("{landmark} at {cell} overlaps {other}")]
    Overlap {
        /// Landmark placed second.
        landmark: Landmark,
        /// Landmark already occupying the cell.
        other: Landmark,
        /// Contested cell.
        cell: CellCoord,
    },
    /// More checkpoints than the visited set can track.
    #[error("{count} checkpoints declared but at most {max} are supported")]
    TooManyCheckpoints {
        /// Declared checkpoint count.
        count: usize,
        /// Supported maximum.
        max: usize,
    },
    /// A checkpoint difficulty is zero, negative or not finite.
    #[error("checkpoint {} has invalid difficulty {difficulty}", .checkpoint.get())]
    InvalidDifficulty {
        /// Offending checkpoint.
        checkpoint: CheckpointId,
        /// Declared difficulty.
        difficulty: f64,
    },
    /// An actor strength is zero, negative or not finite.
    #[error("actor {} has invalid strength {strength}", .actor.get())]
    InvalidStrength {
        /// Offending actor.
        actor: ActorId,
        /// Declared strength.
        strength: f64,
    },
    /// A terrain cost table entry is zero.
    #[error("{terrain} terrain cost must be positive")]
    InvalidTerrainCost {
        /// Name of the offending entry.
        terrain: &'static str,
    },
    /// Explicit terrain rows do not match the declared dimensions.
    #[error("explicit terrain row {row} has {found} cells, expected {expected}")]
    TerrainRowWidth {
        /// Offending row index.
        row: usize,
        /// Cells found in the row.
        found: usize,
        /// Declared column count.
        expected: u32,
    },
    /// Explicit terrain lists the wrong number of rows.
    #[error("explicit terrain has {found} rows, expected {expected}")]
    TerrainRowCount {
        /// Rows found.
        found: usize,
        /// Declared row count.
        expected: u32,
    },
    /// A query addressed a cell outside the grid.
    #[error("cell {cell} lies outside the grid")]
    CellOutOfBounds {
        /// Requested cell.
        cell: CellCoord,
    },
}

/// Checkpoint placed in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct Checkpoint {
    id: CheckpointId,
    name: String,
    difficulty: f64,
    cell: CellCoord,
}

impl Checkpoint {
    /// Identifier of the checkpoint.
    #[must_use]
    pub const fn id(&self) -> CheckpointId {
        self.id
    }

    /// Display name of the checkpoint.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Difficulty divided by the combined strength to price resolution.
    #[must_use]
    pub const fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Cell occupied by the checkpoint.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }
}

/// Member of the actor roster.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    id: ActorId,
    name: String,
    strength: f64,
    resource: u32,
}

impl Actor {
    /// Identifier of the actor.
    #[must_use]
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// Display name of the actor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Strength contributed to checkpoint resolution.
    #[must_use]
    pub const fn strength(&self) -> f64 {
        self.strength
    }

    /// Remaining resource.
    #[must_use]
    pub const fn resource(&self) -> u32 {
        self.resource
    }

    /// Reports whether the actor may take part in checkpoint resolution.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.resource > 0
    }
}

/// Validated, immutable world model.
#[derive(Clone, Debug)]
pub struct World {
    grid: TerrainGrid,
    checkpoints: Vec<Checkpoint>,
    actors: Vec<Actor>,
    start: CellCoord,
    goal: CellCoord,
    costs: TerrainCosts,
}

impl World {
    /// Validates the layout and builds the world it describes.
    pub fn from_layout(layout: WorldLayout) -> Result<Self, WorldError> {
        let WorldLayout {
            columns,
            rows,
            start,
            goal,
            checkpoints,
            actors,
            terrain,
            costs,
        } = layout;

        if columns == 0 || rows == 0 {
            return Err(WorldError::EmptyGrid { columns, rows });
        }
        validate_costs(&costs)?;
        if checkpoints.len() > MAX_CHECKPOINTS {
            return Err(WorldError::TooManyCheckpoints {
                count: checkpoints.len(),
                max: MAX_CHECKPOINTS,
            });
        }

        let in_bounds = |landmark: Landmark, cell: CellCoord| {
            if cell.column() < columns && cell.row() < rows {
                Ok(())
            } else {
                Err(WorldError::OutOfBounds {
                    landmark,
                    cell,
                    columns,
                    rows,
                })
            }
        };
        in_bounds(Landmark::Start, start)?;
        in_bounds(Landmark::Goal, goal)?;
        if start == goal {
            return Err(WorldError::StartIsGoal { cell: start });
        }

        let mut claimed = HashMap::with_capacity(checkpoints.len() + 2);
        let _ = claimed.insert(start, Landmark::Start);
        let _ = claimed.insert(goal, Landmark::Goal);

        let checkpoints = checkpoints
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let id = CheckpointId::new(index as u32);
                let landmark = Landmark::Checkpoint(id);
                in_bounds(landmark, spec.cell)?;
                if !(spec.difficulty.is_finite() && spec.difficulty > 0.0) {
                    return Err(WorldError::InvalidDifficulty {
                        checkpoint: id,
                        difficulty: spec.difficulty,
                    });
                }
                if let Some(other) = claimed.insert(spec.cell, landmark) {
                    return Err(WorldError::Overlap {
                        landmark,
                        other,
                        cell: spec.cell,
                    });
                }
                Ok(Checkpoint {
                    id,
                    name: spec.name,
                    difficulty: spec.difficulty,
                    cell: spec.cell,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let actors = actors
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let id = ActorId::new(index as u32);
                if !(spec.strength.is_finite() && spec.strength > 0.0) {
                    return Err(WorldError::InvalidStrength {
                        actor: id,
                        strength: spec.strength,
                    });
                }
                Ok(Actor {
                    id,
                    name: spec.name,
                    strength: spec.strength,
                    resource: spec.resource,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut grid = base_terrain(columns, rows, terrain, start, goal, &checkpoints)?;
        grid.set(start, TerrainKind::Start);
        grid.set(goal, TerrainKind::Goal);
        for checkpoint in &checkpoints {
            grid.set(checkpoint.cell, TerrainKind::Checkpoint(checkpoint.id));
        }

        debug!(
            columns,
            rows,
            checkpoints = checkpoints.len(),
            actors = actors.len(),
            "world constructed"
        );

        Ok(Self {
            grid,
            checkpoints,
            actors,
            start,
            goal,
            costs,
        })
    }

    /// Builds a fresh copy of the default world.
    pub fn with_default_layout() -> Result<Self, WorldError> {
        Self::from_layout(default_layout())
    }
}

fn validate_costs(costs: &TerrainCosts) -> Result<(), WorldError> {
    for (terrain, cost) in [
        ("rough", costs.rough),
        ("clear", costs.clear),
        ("difficult", costs.difficult),
    ] {
        if cost == 0 {
            return Err(WorldError::InvalidTerrainCost { terrain });
        }
    }
    Ok(())
}

fn base_terrain(
    columns: u32,
    rows: u32,
    source: TerrainSource,
    start: CellCoord,
    goal: CellCoord,
    checkpoints: &[Checkpoint],
) -> Result<TerrainGrid, WorldError> {
    match source {
        TerrainSource::Generated => {
            let mut points = Vec::with_capacity(checkpoints.len() + 2);
            points.push(start);
            points.extend(checkpoints.iter().map(Checkpoint::cell));
            points.push(goal);
            Ok(generation::generate(columns, rows, &points))
        }
        TerrainSource::Uniform { kind } => {
            Ok(TerrainGrid::filled(columns, rows, unmarked(kind, None)))
        }
        TerrainSource::Explicit { rows: terrain_rows } => {
            if terrain_rows.len() != rows as usize {
                return Err(WorldError::TerrainRowCount {
                    found: terrain_rows.len(),
                    expected: rows,
                });
            }
            let mut grid = TerrainGrid::filled(columns, rows, TerrainKind::Clear);
            for (row_index, terrain_row) in terrain_rows.into_iter().enumerate() {
                if terrain_row.len() != columns as usize {
                    return Err(WorldError::TerrainRowWidth {
                        row: row_index,
                        found: terrain_row.len(),
                        expected: columns,
                    });
                }
                for (column_index, kind) in terrain_row.into_iter().enumerate() {
                    let cell = CellCoord::new(column_index as u32, row_index as u32);
                    grid.set(cell, unmarked(kind, Some(cell)));
                }
            }
            Ok(grid)
        }
    }
}

/// Strips marker meaning from base terrain; the layout's own landmarks are
/// stamped separately.
fn unmarked(kind: TerrainKind, cell: Option<CellCoord>) -> TerrainKind {
    if kind.is_marker() {
        warn!(code = kind.code(), ?cell, "marker code in base terrain treated as clear");
        TerrainKind::Clear
    } else {
        kind
    }
}

/// Read-only queries over a [`World`].
pub mod query {
    use checkpoint_route_core::{
        ActorId, ActorSpec, CellCoord, CheckpointId, CheckpointSpec, GridSize, TerrainCosts,
        TerrainKind, WorldSnapshot,
    };

    use super::{navigation, Actor, Checkpoint, World, WorldError};

    /// Terrain of the provided cell.
    pub fn terrain_at(world: &World, cell: CellCoord) -> Result<TerrainKind, WorldError> {
        world
            .grid
            .get(cell)
            .ok_or(WorldError::CellOutOfBounds { cell })
    }

    /// In-bounds orthogonal neighbors of the cell, ordered north, south,
    /// west, east.
    pub fn neighbors(world: &World, cell: CellCoord) -> impl Iterator<Item = CellCoord> {
        let (columns, rows) = world.grid.dimensions();
        navigation::neighbors(cell, columns, rows)
    }

    /// Cost of moving into the provided cell.
    ///
    /// Checkpoint resolution is priced separately by
    /// [`checkpoint_resolution_cost`].
    pub fn movement_cost(world: &World, destination: CellCoord) -> Result<u32, WorldError> {
        terrain_at(world, destination).map(|kind| world.costs.cost_of(kind))
    }

    /// Checkpoint marked on the provided cell, if any.
    #[must_use]
    pub fn checkpoint_index_at(world: &World, cell: CellCoord) -> Option<CheckpointId> {
        world
            .grid
            .get(cell)
            .and_then(TerrainKind::checkpoint)
            .filter(|id| id.index() < world.checkpoints.len())
    }

    /// Time needed by the provided actors to resolve a checkpoint.
    ///
    /// Only actors with remaining resource contribute strength. Returns
    /// positive infinity when no strength is available and zero for unknown
    /// checkpoints.
    #[must_use]
    pub fn checkpoint_resolution_cost(
        world: &World,
        checkpoint: CheckpointId,
        participants: &[ActorId],
    ) -> f64 {
        let Some(checkpoint) = world.checkpoints.get(checkpoint.index()) else {
            return 0.0;
        };

        let strength: f64 = participants
            .iter()
            .filter_map(|id| world.actors.get(id.index()))
            .filter(|actor| actor.is_eligible())
            .map(Actor::strength)
            .sum();

        if strength == 0.0 {
            return f64::INFINITY;
        }
        checkpoint.difficulty / strength
    }

    /// Actors with remaining resource, in roster order.
    #[must_use]
    pub fn eligible_actors(world: &World) -> Vec<ActorId> {
        world
            .actors
            .iter()
            .filter(|actor| actor.is_eligible())
            .map(Actor::id)
            .collect()
    }

    /// Checkpoints in identifier order.
    #[must_use]
    pub fn checkpoints(world: &World) -> &[Checkpoint] {
        &world.checkpoints
    }

    /// Actor roster in identifier order.
    #[must_use]
    pub fn actors(world: &World) -> &[Actor] {
        &world.actors
    }

    /// Start cell.
    #[must_use]
    pub fn start(world: &World) -> CellCoord {
        world.start
    }

    /// Goal cell.
    #[must_use]
    pub fn goal(world: &World) -> CellCoord {
        world.goal
    }

    /// Grid dimensions.
    #[must_use]
    pub fn size(world: &World) -> GridSize {
        let (columns, rows) = world.grid.dimensions();
        GridSize { columns, rows }
    }

    /// Movement cost table.
    #[must_use]
    pub fn costs(world: &World) -> &TerrainCosts {
        &world.costs
    }

    /// Serializable snapshot of the complete world.
    #[must_use]
    pub fn snapshot(world: &World) -> WorldSnapshot {
        WorldSnapshot {
            size: size(world),
            grid: world.grid.rows().map(<[TerrainKind]>::to_vec).collect(),
            checkpoints: checkpoints(world)
                .iter()
                .map(|checkpoint| CheckpointSpec {
                    name: checkpoint.name().to_owned(),
                    difficulty: checkpoint.difficulty(),
                    cell: checkpoint.cell(),
                })
                .collect(),
            actors: actors(world)
                .iter()
                .map(|actor| ActorSpec {
                    name: actor.name().to_owned(),
                    strength: actor.strength(),
                    resource: actor.resource(),
                })
                .collect(),
            start: start(world),
            goal: goal(world),
            costs: *costs(world),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkpoint_route_core::{ActorSpec, CheckpointSpec};

    fn corridor_layout() -> WorldLayout {
        WorldLayout {
            columns: 3,
            rows: 1,
            start: CellCoord::new(0, 0),
            goal: CellCoord::new(2, 0),
            checkpoints: vec![CheckpointSpec {
                name: "Middle".to_owned(),
                difficulty: 10.0,
                cell: CellCoord::new(1, 0),
            }],
            actors: vec![
                ActorSpec {
                    name: "Strong".to_owned(),
                    strength: 5.0,
                    resource: 1,
                },
                ActorSpec {
                    name: "Spent".to_owned(),
                    strength: 3.0,
                    resource: 0,
                },
            ],
            terrain: TerrainSource::Uniform {
                kind: TerrainKind::Clear,
            },
            costs: TerrainCosts::default(),
        }
    }

    #[test]
    fn markers_are_stamped_over_base_terrain() {
        let world = World::from_layout(corridor_layout()).expect("valid layout");

        assert_eq!(
            query::terrain_at(&world, CellCoord::new(0, 0)),
            Ok(TerrainKind::Start)
        );
        assert_eq!(
            query::terrain_at(&world, CellCoord::new(1, 0)),
            Ok(TerrainKind::Checkpoint(CheckpointId::new(0)))
        );
        assert_eq!(
            query::terrain_at(&world, CellCoord::new(2, 0)),
            Ok(TerrainKind::Goal)
        );
    }

    #[test]
    fn terrain_at_rejects_cells_outside_grid() {
        let world = World::from_layout(corridor_layout()).expect("valid layout");
        let cell = CellCoord::new(3, 0);

        assert_eq!(
            query::terrain_at(&world, cell),
            Err(WorldError::CellOutOfBounds { cell })
        );
        assert!(query::movement_cost(&world, cell).is_err());
    }

    #[test]
    fn movement_cost_prices_markers_as_clear() {
        let mut layout = corridor_layout();
        layout.costs.clear = 2;
        let world = World::from_layout(layout).expect("valid layout");

        assert_eq!(query::movement_cost(&world, CellCoord::new(1, 0)), Ok(2));
        assert_eq!(query::movement_cost(&world, CellCoord::new(2, 0)), Ok(2));
    }

    #[test]
    fn checkpoint_index_only_reported_on_checkpoint_cells() {
        let world = World::from_layout(corridor_layout()).expect("valid layout");

        assert_eq!(
            query::checkpoint_index_at(&world, CellCoord::new(1, 0)),
            Some(CheckpointId::new(0))
        );
        assert_eq!(query::checkpoint_index_at(&world, CellCoord::new(0, 0)), None);
        assert_eq!(query::checkpoint_index_at(&world, CellCoord::new(9, 9)), None);
    }

    #[test]
    fn resolution_cost_divides_difficulty_by_eligible_strength() {
        let world = World::from_layout(corridor_layout()).expect("valid layout");
        let checkpoint = CheckpointId::new(0);
        let everyone = [ActorId::new(0), ActorId::new(1)];

        let cost = query::checkpoint_resolution_cost(&world, checkpoint, &everyone);
        assert!((cost - 2.0).abs() < f64::EPSILON);
        assert_eq!(query::eligible_actors(&world), vec![ActorId::new(0)]);
    }

    #[test]
    fn resolution_cost_is_infinite_without_strength() {
        let world = World::from_layout(corridor_layout()).expect("valid layout");
        let checkpoint = CheckpointId::new(0);

        assert!(query::checkpoint_resolution_cost(&world, checkpoint, &[]).is_infinite());
        assert!(
            query::checkpoint_resolution_cost(&world, checkpoint, &[ActorId::new(1)])
                .is_infinite()
        );
        assert_eq!(
            query::checkpoint_resolution_cost(&world, CheckpointId::new(4), &[ActorId::new(0)]),
            0.0
        );
    }

    #[test]
    fn rejects_start_on_goal() {
        let mut layout = corridor_layout();
        layout.goal = layout.start;

        assert_eq!(
            World::from_layout(layout).err(),
            Some(WorldError::StartIsGoal {
                cell: CellCoord::new(0, 0)
            })
        );
    }

    #[test]
    fn rejects_out_of_bounds_landmarks() {
        let mut layout = corridor_layout();
        layout.checkpoints[0].cell = CellCoord::new(1, 1);

        assert_eq!(
            World::from_layout(layout).err(),
            Some(WorldError::OutOfBounds {
                landmark: Landmark::Checkpoint(CheckpointId::new(0)),
                cell: CellCoord::new(1, 1),
                columns: 3,
                rows: 1,
            })
        );
    }

    #[test]
    fn rejects_checkpoint_on_goal_and_duplicates() {
        let mut layout = corridor_layout();
        layout.checkpoints[0].cell = layout.goal;
        assert!(matches!(
            World::from_layout(layout).err(),
            Some(WorldError::Overlap {
                other: Landmark::Goal,
                ..
            })
        ));

        let mut layout = corridor_layout();
        layout.columns = 4;
        layout.terrain = TerrainSource::Generated;
        let duplicate = layout.checkpoints[0].clone();
        layout.checkpoints.push(duplicate);
        assert_eq!(
            World::from_layout(layout).err(),
            Some(WorldError::Overlap {
                landmark: Landmark::Checkpoint(CheckpointId::new(1)),
                other: Landmark::Checkpoint(CheckpointId::new(0)),
                cell: CellCoord::new(1, 0),
            })
        );
    }

    #[test]
    fn rejects_non_positive_magnitudes() {
        let mut layout = corridor_layout();
        layout.checkpoints[0].difficulty = 0.0;
        assert!(matches!(
            World::from_layout(layout).err(),
            Some(WorldError::InvalidDifficulty { .. })
        ));

        let mut layout = corridor_layout();
        layout.actors[1].strength = f64::NAN;
        assert!(matches!(
            World::from_layout(layout).err(),
            Some(WorldError::InvalidStrength { .. })
        ));

        let mut layout = corridor_layout();
        layout.costs.difficult = 0;
        assert_eq!(
            World::from_layout(layout).err(),
            Some(WorldError::InvalidTerrainCost {
                terrain: "difficult"
            })
        );
    }

    #[test]
    fn rejects_too_many_checkpoints() {
        let mut layout = corridor_layout();
        layout.columns = 80;
        layout.checkpoints = (0..=MAX_CHECKPOINTS as u32)
            .map(|column| CheckpointSpec {
                name: format!("cp{column}"),
                difficulty: 1.0,
                cell: CellCoord::new(column + 3, 0),
            })
            .collect();

        assert_eq!(
            World::from_layout(layout).err(),
            Some(WorldError::TooManyCheckpoints {
                count: MAX_CHECKPOINTS + 1,
                max: MAX_CHECKPOINTS,
            })
        );
    }

    #[test]
    fn explicit_terrain_must_match_dimensions() {
        let mut layout = corridor_layout();
        layout.terrain = TerrainSource::Explicit {
            rows: vec![vec![TerrainKind::Clear, TerrainKind::Clear]],
        };
        assert_eq!(
            World::from_layout(layout).err(),
            Some(WorldError::TerrainRowWidth {
                row: 0,
                found: 2,
                expected: 3,
            })
        );

        let mut layout = corridor_layout();
        layout.terrain = TerrainSource::Explicit { rows: Vec::new() };
        assert_eq!(
            World::from_layout(layout).err(),
            Some(WorldError::TerrainRowCount {
                found: 0,
                expected: 1,
            })
        );
    }

    #[test]
    fn stray_marker_codes_become_clear_ground() {
        let mut layout = corridor_layout();
        layout.columns = 4;
        layout.terrain = TerrainSource::Explicit {
            rows: vec![vec![
                TerrainKind::Rough,
                TerrainKind::Rough,
                TerrainKind::Rough,
                TerrainKind::from_code(9),
            ]],
        };
        let world = World::from_layout(layout).expect("valid layout");

        assert_eq!(
            query::terrain_at(&world, CellCoord::new(3, 0)),
            Ok(TerrainKind::Clear)
        );
        assert_eq!(query::checkpoint_index_at(&world, CellCoord::new(3, 0)), None);
    }

    #[test]
    fn default_world_keeps_landmarks_reachable_by_corridors() {
        let world = World::with_default_layout().expect("default layout is valid");
        let size = query::size(&world);
        assert_eq!((size.columns, size.rows), (42, 42));
        assert_eq!(query::checkpoints(&world).len(), 12);
        assert_eq!(query::eligible_actors(&world).len(), 5);

        for checkpoint in query::checkpoints(&world) {
            let open_neighbors = query::neighbors(&world, checkpoint.cell())
                .filter(|cell| query::terrain_at(&world, *cell) != Ok(TerrainKind::Rough))
                .count();
            assert!(
                open_neighbors > 0,
                "{} should border carved ground",
                checkpoint.name()
            );
        }
    }

    #[test]
    fn snapshot_lists_rows_with_markers() {
        let world = World::from_layout(corridor_layout()).expect("valid layout");
        let snapshot = query::snapshot(&world);

        assert_eq!(
            snapshot.grid,
            vec![vec![
                TerrainKind::Start,
                TerrainKind::Checkpoint(CheckpointId::new(0)),
                TerrainKind::Goal,
            ]]
        );
        assert_eq!(snapshot.checkpoints[0].name, "Middle");
        assert_eq!(snapshot.checkpoints[0].difficulty, 10.0);
        assert_eq!(snapshot.actors.len(), 2);
        assert_eq!(snapshot.start, CellCoord::new(0, 0));
        assert_eq!(&snapshot.costs, query::costs(&world));
        for (listed, actor) in snapshot.actors.iter().zip(query::actors(&world)) {
            assert_eq!(listed.name, actor.name());
            assert_eq!(listed.resource, actor.resource());
        }
    }
}
