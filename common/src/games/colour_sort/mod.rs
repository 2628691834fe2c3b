mod bonus;
mod colour_plan;
mod level_sizing;
mod move_engine;
mod palette;
mod puzzle;
mod session;
mod settings;
mod stack;
mod types;
mod view;

pub use colour_plan::{ColourPlan, generate_colour_plan};
pub use level_sizing::{DEFAULT_LEVEL_INCREMENTS, starting_stack_count};
pub use palette::{Colour, PALETTE_SIZE};
pub use puzzle::PuzzleState;
pub use session::Session;
pub use settings::GameSettings;
pub use stack::{Block, Stack};
pub use types::{
    DEFAULT_BLOCK_AMT, DEFAULT_EMPTY_STACK_AMT, DEFAULT_MAX_BONUS_BLOCKS, DEFAULT_STACK_AMT,
    FIRST_LEVEL, MoveRecord, Selection, SelectionOutcome,
};
pub use view::{BlockView, PuzzleView, SessionUpdate, StackView};
