use super::colour_plan::{ColourPlan, generate_colour_plan};
use super::level_sizing::starting_stack_count;
use super::puzzle::PuzzleState;
use super::settings::GameSettings;
use super::types::{FIRST_LEVEL, SelectionOutcome};
use super::view::{PuzzleView, SessionUpdate};
use crate::config::Validate;
use crate::error::EngineError;
use crate::games::session_rng::SessionRng;
use crate::identifiers::StackId;
use crate::log;
use crate::progress::LevelStore;

/// Owns the puzzle for the level being played and is the only thing the
/// front-end talks to. Every mutation goes through one of the `on_*` methods.
pub struct Session {
    settings: GameSettings,
    level: u32,
    rng: SessionRng,
    store: Box<dyn LevelStore>,
    puzzle: PuzzleState,
    initial_plan: ColourPlan,
}

impl Session {
    pub fn new(
        settings: GameSettings,
        store: Box<dyn LevelStore>,
        mut rng: SessionRng,
    ) -> Result<Self, EngineError> {
        settings.validate().map_err(EngineError::InvalidArgument)?;

        let level = store.load_level().map_err(EngineError::Storage)?.max(FIRST_LEVEL);
        let (puzzle, initial_plan) = deal_level(&settings, level, &mut rng)?;

        log!(
            "Starting at level {} with {} stacks (seed {})",
            level,
            puzzle.stacks().len(),
            rng.seed()
        );

        Ok(Self {
            settings,
            level,
            rng,
            store,
            puzzle,
            initial_plan,
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }

    pub fn view(&self) -> PuzzleView {
        PuzzleView::new(self.level, &self.puzzle)
    }

    pub fn on_stack_activated(&mut self, stack_id: &StackId) -> Result<SessionUpdate, EngineError> {
        let outcome = self.puzzle.select_stack(stack_id);
        if matches!(outcome, SelectionOutcome::Moved(_)) && self.puzzle.check_win() {
            self.advance_level()?;
            return Ok(self.update(true));
        }
        Ok(self.update(false))
    }

    pub fn on_undo_requested(&mut self) -> SessionUpdate {
        self.puzzle.undo();
        self.update(false)
    }

    pub fn on_reset_requested(&mut self) -> SessionUpdate {
        let undone = self.puzzle.reset_level();
        log!("Level {} reset, {} moves undone", self.level, undone);
        self.update(false)
    }

    pub fn on_bonus_requested(&mut self) -> SessionUpdate {
        if !self.puzzle.add_bonus_block(self.settings.max_bonus_blocks) {
            log!("Bonus block limit of {} reached", self.settings.max_bonus_blocks);
        }
        self.update(false)
    }

    /// Rebuilds the current level from its original colour plan, discarding
    /// the move log and any bonus stack.
    pub fn restart_level(&mut self) -> Result<SessionUpdate, EngineError> {
        let mut puzzle = PuzzleState::build(
            starting_stack_count(self.level, self.settings.stack_amt, &self.settings.level_increments)?,
            self.settings.block_amt,
        )?;
        puzzle.apply_colours(&self.initial_plan)?;
        self.puzzle = puzzle;
        Ok(self.update(false))
    }

    fn advance_level(&mut self) -> Result<(), EngineError> {
        let next_level = self
            .level
            .checked_add(1)
            .ok_or_else(|| EngineError::invalid_argument(format!("no level after {}", self.level)))?;
        self.puzzle.clear_move_log();
        self.level = next_level;
        log!("Level {} solved, advancing to {}", self.level - 1, self.level);

        if let Err(e) = self.store.save_level(self.level) {
            log!("Failed to save level {}: {}", self.level, e);
        }

        let (puzzle, initial_plan) = deal_level(&self.settings, self.level, &mut self.rng)?;
        self.puzzle = puzzle;
        self.initial_plan = initial_plan;
        Ok(())
    }

    fn update(&self, level_advanced: bool) -> SessionUpdate {
        SessionUpdate {
            view: self.view(),
            level_advanced,
            level: self.level,
        }
    }
}

fn deal_level(
    settings: &GameSettings,
    level: u32,
    rng: &mut SessionRng,
) -> Result<(PuzzleState, ColourPlan), EngineError> {
    let stack_count = starting_stack_count(level, settings.stack_amt, &settings.level_increments)?;
    let plan = generate_colour_plan(stack_count, settings.block_amt, settings.empty_stack_amt, rng)?;
    let mut puzzle = PuzzleState::build(stack_count, settings.block_amt)?;
    puzzle.apply_colours(&plan)?;
    Ok((puzzle, plan))
}
