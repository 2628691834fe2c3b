use serde::{Deserialize, Serialize};

use super::palette::Colour;
use crate::identifiers::{BlockId, StackId};

pub const DEFAULT_STACK_AMT: usize = 4;
pub const DEFAULT_BLOCK_AMT: usize = 4;
pub const DEFAULT_EMPTY_STACK_AMT: usize = 2;
pub const DEFAULT_MAX_BONUS_BLOCKS: usize = 2;
pub const FIRST_LEVEL: u32 = 1;

/// One executed transfer. Undo consumes these newest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub origin: StackId,
    pub origin_slot: BlockId,
    pub colour: Colour,
    pub destination: StackId,
    pub destination_slot: BlockId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Origin(StackId),
}

impl Selection {
    pub fn origin(&self) -> Option<&StackId> {
        match self {
            Selection::None => None,
            Selection::Origin(id) => Some(id),
        }
    }
}

/// Result of a stack activation. `Rejected` and `Cancelled` both leave the
/// blocks untouched and the selection cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    Ignored,
    OriginSelected(StackId),
    Cancelled,
    Rejected,
    Moved(MoveRecord),
}
