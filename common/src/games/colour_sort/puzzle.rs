use super::palette::Colour;
use super::stack::Stack;
use super::types::{MoveRecord, Selection};
use crate::error::EngineError;
use crate::identifiers::StackId;

/// The stacks of one level together with its move log and pending selection.
///
/// Stack order is display order: regular stacks first, buffer stacks after
/// the coloured ones, and the bonus stack (if any) last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleState {
    pub(crate) stacks: Vec<Stack>,
    pub(crate) move_log: Vec<MoveRecord>,
    pub(crate) selection: Selection,
}

impl PuzzleState {
    pub fn build(stack_count: usize, blocks_per_stack: usize) -> Result<Self, EngineError> {
        if blocks_per_stack == 0 {
            return Err(EngineError::invalid_argument("Blocks per stack must be at least 1"));
        }

        let stacks = (0..stack_count)
            .map(|index| Stack::new(index, blocks_per_stack))
            .collect();

        Ok(Self {
            stacks,
            move_log: Vec::new(),
            selection: Selection::None,
        })
    }

    /// Colours every slot in stack order, slot order. Nothing is written
    /// unless the plan covers the puzzle exactly.
    pub fn apply_colours(&mut self, plan: &[Option<Colour>]) -> Result<(), EngineError> {
        let slot_count = self.slot_count();
        if plan.len() != slot_count {
            return Err(EngineError::ShapeMismatch {
                expected: slot_count,
                actual: plan.len(),
            });
        }

        let mut colours = plan.iter();
        for stack in &mut self.stacks {
            for slot in 0..stack.capacity() {
                stack.set_colour(slot, colours.next().copied().flatten());
            }
        }
        Ok(())
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn stack(&self, id: &StackId) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.id() == id)
    }

    pub(crate) fn stack_mut(&mut self, id: &StackId) -> Option<&mut Stack> {
        self.stacks.iter_mut().find(|s| s.id() == id)
    }

    pub fn regular_stacks(&self) -> impl Iterator<Item = &Stack> {
        self.stacks.iter().filter(|s| !s.is_bonus())
    }

    pub fn bonus_stack(&self) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.is_bonus())
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn slot_count(&self) -> usize {
        self.stacks.iter().map(Stack::capacity).sum()
    }

    pub fn colours(&self) -> Vec<Vec<Option<Colour>>> {
        self.stacks.iter().map(Stack::colours).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_creates_empty_stacks() {
        let puzzle = PuzzleState::build(3, 4).unwrap();
        assert_eq!(puzzle.stacks().len(), 3);
        assert!(puzzle.stacks().iter().all(|s| s.is_empty() && s.capacity() == 4));
        assert_eq!(puzzle.stacks()[2].id().as_str(), "stack-2");
        assert_eq!(puzzle.stacks()[2].blocks()[3].id().as_str(), "stack-2-block-3");
        assert!(puzzle.move_log().is_empty());
        assert_eq!(puzzle.selection(), &Selection::None);
    }

    #[test]
    fn test_build_rejects_zero_blocks() {
        assert!(matches!(
            PuzzleState::build(3, 0),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_apply_colours_fills_in_order() {
        let mut puzzle = PuzzleState::build(2, 2).unwrap();
        puzzle
            .apply_colours(&[Some(Colour::Red), Some(Colour::Blue), None, None])
            .unwrap();
        assert_eq!(
            puzzle.colours(),
            vec![vec![Some(Colour::Red), Some(Colour::Blue)], vec![None, None]]
        );
    }

    #[test]
    fn test_apply_colours_shape_mismatch_leaves_state_untouched() {
        let mut puzzle = PuzzleState::build(2, 2).unwrap();
        let before = puzzle.clone();
        let result = puzzle.apply_colours(&[Some(Colour::Red); 3]);
        assert_eq!(
            result,
            Err(EngineError::ShapeMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_lookup_by_id() {
        let puzzle = PuzzleState::build(2, 2).unwrap();
        assert!(puzzle.stack(&StackId::from("stack-1")).is_some());
        assert!(puzzle.stack(&StackId::from("stack-9")).is_none());
        assert!(puzzle.bonus_stack().is_none());
        assert_eq!(puzzle.regular_stacks().count(), 2);
    }
}
