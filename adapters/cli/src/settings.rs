use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use checkpoint_route_core::{SearchConfig, TerrainCosts, WorldLayout};
use serde::Deserialize;
use tracing::debug;

/// Settings file contents. Every table is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    /// Search configuration used unless overridden on the command line.
    pub(crate) search: SearchConfig,
    /// Cost table replacing the one carried by the layout.
    pub(crate) terrain_costs: Option<TerrainCosts>,
}

impl Settings {
    /// Reads and validates the settings file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file at {}", path.display()))?;
        let settings = parse_settings(&contents)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Replaces the layout's cost table when the settings carry one.
    pub(crate) fn apply_costs(&self, layout: &mut WorldLayout) {
        if let Some(costs) = self.terrain_costs {
            layout.costs = costs;
        }
    }
}

/// Reads the TOML layout file at `path`.
pub(crate) fn load_layout(path: &Path) -> Result<WorldLayout> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read layout file at {}", path.display()))?;
    let layout = parse_layout(&contents)
        .with_context(|| format!("invalid layout file {}", path.display()))?;
    debug!(
        path = %path.display(),
        columns = layout.columns,
        rows = layout.rows,
        checkpoints = layout.checkpoints.len(),
        "loaded layout"
    );
    Ok(layout)
}

fn parse_settings(contents: &str) -> Result<Settings> {
    let settings: Settings =
        toml::from_str(contents).context("failed to parse settings toml contents")?;
    if settings.search.expansion_limit == Some(0) {
        bail!("search.expansion_limit must be positive");
    }
    Ok(settings)
}

fn parse_layout(contents: &str) -> Result<WorldLayout> {
    toml::from_str(contents).context("failed to parse layout toml contents")
}
