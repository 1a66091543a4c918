use std::sync::Arc;

use catalog_client::CatalogFetcher;
use shared::domain::{Creature, CreatureId, GameMode, PlayerSlot};
use tracing::{debug, info, warn};

pub mod error;
pub mod sampler;
mod state;

pub use error::DrawError;
pub use sampler::{IdSampler, UniformSampler, POOL_MAX, POOL_MIN};
pub use state::{DraftPhase, DraftState, Roster};

/// Cap on uniqueness resamples within a single draw; past this the pool is
/// treated as exhausted and the draw aborts.
pub const MAX_RESAMPLE_ATTEMPTS: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    Drawn {
        creature: Creature,
        credited_to: PlayerSlot,
    },
    /// A precondition was unmet; state is exactly as before the call.
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    ModeNotSelected,
    DraftComplete,
    FetchInFlight,
}

/// Owns the [`DraftState`] and mediates every transition. One logical action
/// runs at a time: `draw` is the only suspending action, gated by
/// [`DraftState::is_loading`] and by `&mut self`.
pub struct DraftController {
    state: DraftState,
    catalog: Arc<dyn CatalogFetcher>,
    sampler: Box<dyn IdSampler>,
    fixed_mode: Option<GameMode>,
}

impl DraftController {
    pub fn new(catalog: Arc<dyn CatalogFetcher>) -> Self {
        Self::new_with_dependencies(catalog, Box::new(UniformSampler::new()), None)
    }

    /// Controller pinned to one mode: starts in progress, and `reset` returns
    /// to a fresh draft in the same mode instead of mode selection.
    pub fn with_mode(mode: GameMode, catalog: Arc<dyn CatalogFetcher>) -> Self {
        Self::new_with_dependencies(catalog, Box::new(UniformSampler::new()), Some(mode))
    }

    pub fn new_with_dependencies(
        catalog: Arc<dyn CatalogFetcher>,
        sampler: Box<dyn IdSampler>,
        fixed_mode: Option<GameMode>,
    ) -> Self {
        let mut controller = Self {
            state: DraftState::new(),
            catalog,
            sampler,
            fixed_mode,
        };
        if let Some(mode) = controller.fixed_mode {
            controller.start(mode);
        }
        controller
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    pub fn phase(&self) -> DraftPhase {
        self.state.phase()
    }

    /// Starts a draft in `mode`. Valid only while no mode is active;
    /// otherwise a no-op returning false.
    pub fn select_mode(&mut self, mode: GameMode) -> bool {
        if self.state.mode.is_some() {
            return false;
        }
        self.start(mode);
        true
    }

    fn start(&mut self, mode: GameMode) {
        self.state = DraftState::with_mode(mode);
        info!(%mode, "draft started");
    }

    /// One draw: sample an id, fetch its creature, credit it to the active
    /// player and pass the turn. Precondition violations are no-ops reported
    /// as [`DrawOutcome::Skipped`]; failures record their display text in
    /// [`DraftState::error_message`] and leave the rest of the state
    /// untouched, so the draft stays resumable.
    pub async fn draw(&mut self) -> Result<DrawOutcome, DrawError> {
        let Some(mode) = self.state.mode else {
            return Ok(DrawOutcome::Skipped(SkipReason::ModeNotSelected));
        };
        if self.state.is_complete() {
            return Ok(DrawOutcome::Skipped(SkipReason::DraftComplete));
        }
        if self.state.is_loading {
            return Ok(DrawOutcome::Skipped(SkipReason::FetchInFlight));
        }

        if self.state.roster(self.state.active_player).is_full() {
            self.state.active_player = self.state.active_player.other();
        }

        self.state.is_loading = true;
        self.state.error_message = None;

        let id = match self.sample_unseen_id(mode) {
            Ok(id) => id,
            Err(err) => return Err(self.fail_draw(err)),
        };

        let creature = match self.catalog.fetch(id).await {
            Ok(creature) => creature,
            Err(source) => {
                warn!(%id, error = %source, "catalog fetch failed");
                return Err(self.fail_draw(DrawError::Fetch { source }));
            }
        };

        if mode == GameMode::NoDuplicate {
            self.state.drawn_ids.insert(creature.id);
        }

        let credited_to = self.state.active_player;
        if self.state.roster_mut(credited_to).append(creature.clone()) {
            // Same player keeps drawing once the opponent is full.
            if !self.state.roster(credited_to.other()).is_full() {
                self.state.active_player = credited_to.other();
            }
        }

        self.state.last_drawn = Some(creature.clone());
        self.state.is_loading = false;

        debug!(
            id = %creature.id,
            name = %creature.name,
            player = %credited_to,
            "creature drawn"
        );
        if self.state.is_complete() {
            info!("draft complete");
        }

        Ok(DrawOutcome::Drawn {
            creature,
            credited_to,
        })
    }

    pub fn reset(&mut self) {
        self.state = match self.fixed_mode {
            Some(mode) => DraftState::with_mode(mode),
            None => DraftState::new(),
        };
        info!("draft reset");
    }

    /// In no-duplicate mode, ids already drawn this session are rejected and
    /// resampled up to [`MAX_RESAMPLE_ATTEMPTS`] times.
    fn sample_unseen_id(&mut self, mode: GameMode) -> Result<CreatureId, DrawError> {
        let mut resamples = 0;
        loop {
            let candidate = self.sampler.sample();
            if !mode.allows_duplicates() && self.state.drawn_ids.contains(&candidate) {
                if resamples == MAX_RESAMPLE_ATTEMPTS {
                    warn!(resamples, "uniqueness search exhausted");
                    return Err(DrawError::PoolExhausted {
                        attempts: resamples,
                    });
                }
                resamples += 1;
                continue;
            }
            return Ok(candidate);
        }
    }

    fn fail_draw(&mut self, err: DrawError) -> DrawError {
        self.state.error_message = Some(err.to_string());
        self.state.is_loading = false;
        err
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
