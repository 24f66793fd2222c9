//! Layout of the default world served when callers do not provide one.

use checkpoint_route_core::{
    ActorSpec, CellCoord, CheckpointSpec, TerrainCosts, TerrainSource, WorldLayout,
};

const GRID_SIZE: u32 = 42;
const ACTOR_RESOURCE: u32 = 5;

const ACTORS: [(&str, f64); 5] = [
    ("Seiya", 1.5),
    ("Shiryu", 1.4),
    ("Hyoga", 1.3),
    ("Shun", 1.2),
    ("Ikki", 1.1),
];

// (name, difficulty, column, row)
const CHECKPOINTS: [(&str, f64, u32, u32); 12] = [
    ("Aries", 50.0, 31, 5),
    ("Taurus", 55.0, 14, 5),
    ("Gemini", 60.0, 15, 10),
    ("Cancer", 70.0, 28, 10),
    ("Leo", 75.0, 38, 14),
    ("Virgo", 80.0, 30, 18),
    ("Libra", 85.0, 10, 18),
    ("Scorpio", 90.0, 10, 25),
    ("Sagittarius", 95.0, 27, 25),
    ("Capricorn", 100.0, 34, 32),
    ("Aquarius", 110.0, 18, 32),
    ("Pisces", 120.0, 22, 38),
];

const START: CellCoord = CellCoord::new(38, 5);
const GOAL: CellCoord = CellCoord::new(38, 38);

/// Builds the default 42 x 42 layout with generated corridors.
#[must_use]
pub fn default_layout() -> WorldLayout {
    WorldLayout {
        columns: GRID_SIZE,
        rows: GRID_SIZE,
        start: START,
        goal: GOAL,
        checkpoints: CHECKPOINTS
            .iter()
            .map(|&(name, difficulty, column, row)| CheckpointSpec {
                name: name.to_owned(),
                difficulty,
                cell: CellCoord::new(column, row),
            })
            .collect(),
        actors: ACTORS
            .iter()
            .map(|&(name, strength)| ActorSpec {
                name: name.to_owned(),
                strength,
                resource: ACTOR_RESOURCE,
            })
            .collect(),
        terrain: TerrainSource::Generated,
        costs: TerrainCosts::default(),
    }
}
