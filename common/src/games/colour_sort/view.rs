use serde::Serialize;

use super::palette::Colour;
use super::puzzle::PuzzleState;
use super::stack::Stack;
use crate::identifiers::{BlockId, StackId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlockView {
    pub id: BlockId,
    pub colour: Option<Colour>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StackView {
    pub id: StackId,
    pub is_bonus: bool,
    pub blocks: Vec<BlockView>,
}

impl From<&Stack> for StackView {
    fn from(stack: &Stack) -> Self {
        Self {
            id: stack.id().clone(),
            is_bonus: stack.is_bonus(),
            blocks: stack
                .blocks()
                .iter()
                .map(|b| BlockView {
                    id: b.id().clone(),
                    colour: b.colour(),
                })
                .collect(),
        }
    }
}

/// Read-only snapshot handed to the front-end after every operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PuzzleView {
    pub level: u32,
    pub stacks: Vec<StackView>,
    pub selected_stack_id: Option<StackId>,
    pub moves: usize,
}

impl PuzzleView {
    pub fn new(level: u32, puzzle: &PuzzleState) -> Self {
        Self {
            level,
            stacks: puzzle.stacks().iter().map(StackView::from).collect(),
            selected_stack_id: puzzle.selection().origin().cloned(),
            moves: puzzle.move_log().len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionUpdate {
    pub view: PuzzleView,
    pub level_advanced: bool,
    pub level: u32,
}
