use super::puzzle::PuzzleState;
use super::types::{MoveRecord, Selection, SelectionOutcome};
use crate::identifiers::StackId;

impl PuzzleState {
    /// Handles one click on a stack. The first click picks a non-empty origin;
    /// the second either cancels (full target or the origin again) or tries
    /// the move.
    pub fn select_stack(&mut self, stack_id: &StackId) -> SelectionOutcome {
        match std::mem::take(&mut self.selection) {
            Selection::None => {
                let Some(stack) = self.stack(stack_id) else {
                    return SelectionOutcome::Ignored;
                };
                if stack.is_empty() {
                    return SelectionOutcome::Ignored;
                }
                self.selection = Selection::Origin(stack_id.clone());
                SelectionOutcome::OriginSelected(stack_id.clone())
            }
            Selection::Origin(origin) => {
                let Some(target) = self.stack(stack_id) else {
                    return SelectionOutcome::Cancelled;
                };
                if target.is_filled() || *stack_id == origin {
                    return SelectionOutcome::Cancelled;
                }
                self.attempt_move(&origin, stack_id)
            }
        }
    }

    /// Moves exactly one block, the origin's top one, if the destination is
    /// empty or shows the same top colour. Always clears the selection.
    pub fn attempt_move(&mut self, origin_id: &StackId, destination_id: &StackId) -> SelectionOutcome {
        self.selection = Selection::None;

        if origin_id == destination_id {
            return SelectionOutcome::Rejected;
        }

        let (Some(origin), Some(destination)) = (self.stack(origin_id), self.stack(destination_id))
        else {
            return SelectionOutcome::Rejected;
        };

        let (Some(colour), Some(origin_slot)) = (origin.top_colour(), origin.top_slot()) else {
            return SelectionOutcome::Rejected;
        };
        let Some(destination_slot) = destination.available_slot() else {
            return SelectionOutcome::Rejected;
        };
        if !destination.is_empty() && destination.top_colour() != Some(colour) {
            return SelectionOutcome::Rejected;
        }

        let record = MoveRecord {
            origin: origin_id.clone(),
            origin_slot: origin.blocks()[origin_slot].id().clone(),
            colour,
            destination: destination_id.clone(),
            destination_slot: destination.blocks()[destination_slot].id().clone(),
        };

        if let Some(origin) = self.stack_mut(origin_id) {
            origin.take_colour(origin_slot);
        }
        if let Some(destination) = self.stack_mut(destination_id) {
            destination.set_colour(destination_slot, Some(colour));
        }

        self.move_log.push(record.clone());
        SelectionOutcome::Moved(record)
    }

    /// Reverts the newest logged move, if any.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.move_log.pop()?;

        if let Some(destination) = self.stack_mut(&record.destination)
            && let Some(slot) = destination.slot_of(&record.destination_slot)
        {
            destination.set_colour(slot, None);
        }
        if let Some(origin) = self.stack_mut(&record.origin)
            && let Some(slot) = origin.slot_of(&record.origin_slot)
        {
            origin.set_colour(slot, Some(record.colour));
        }

        self.selection = Selection::None;
        Some(record)
    }

    /// Unwinds the whole move log and drops any bonus stack. Returns how many
    /// moves were undone.
    pub fn reset_level(&mut self) -> usize {
        let mut undone = 0;
        while self.undo().is_some() {
            undone += 1;
        }
        self.stacks.retain(|s| !s.is_bonus());
        self.selection = Selection::None;
        undone
    }

    /// Won when every regular stack is either sorted (full, one colour) or
    /// empty. At least one must be sorted. Bonus stacks never count.
    pub fn check_win(&self) -> bool {
        let mut regular = self.regular_stacks().peekable();
        if regular.peek().is_none() {
            return false;
        }
        let mut any_solved = false;
        for stack in regular {
            if stack.is_solved() {
                any_solved = true;
            } else if !stack.is_empty() {
                return false;
            }
        }
        any_solved
    }

    pub(crate) fn clear_move_log(&mut self) {
        self.move_log.clear();
    }
}
