#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Externally exposed operations: inspect the world and run a route search.
//!
//! Every call builds a fresh [`World`], so no state is shared between calls.

use checkpoint_route_core::{SearchConfig, SearchResult, WorldLayout, WorldSnapshot};
use checkpoint_route_system_search::Search;
use checkpoint_route_world::{default_layout, query, World, WorldError};
use tracing::debug;

/// Entry points consumed by transports.
#[derive(Clone, Copy, Debug, Default)]
pub struct Operations {
    search: Search,
}

impl Operations {
    /// Creates the operations with the provided search configuration.
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self {
            search: Search::new(config),
        }
    }

    /// Search configuration applied by [`Operations::run_search`].
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        self.search.config()
    }

    /// Snapshot of a freshly built default world.
    pub fn current_world(&self) -> Result<WorldSnapshot, WorldError> {
        self.current_world_with_layout(default_layout())
    }

    /// Snapshot of a world built from the provided layout.
    pub fn current_world_with_layout(
        &self,
        layout: WorldLayout,
    ) -> Result<WorldSnapshot, WorldError> {
        let world = World::from_layout(layout)?;
        Ok(query::snapshot(&world))
    }

    /// Searches a freshly built default world.
    pub fn run_search(&self) -> Result<SearchResult, WorldError> {
        self.run_search_with_layout(default_layout())
    }

    /// Searches a world built from the provided layout.
    ///
    /// Only layout validation can fail; a missing route is reported inside
    /// the returned [`SearchResult`].
    pub fn run_search_with_layout(&self, layout: WorldLayout) -> Result<SearchResult, WorldError> {
        let world = World::from_layout(layout)?;
        debug!(config = ?self.config(), "dispatching route search");
        Ok(self.search.run(&world))
    }
}
