use super::puzzle::PuzzleState;
use super::stack::Stack;

impl PuzzleState {
    /// Adds one bonus slot, creating the bonus stack on first use. Returns
    /// false once the bonus stack holds `max_bonus_blocks` blocks.
    pub fn add_bonus_block(&mut self, max_bonus_blocks: usize) -> bool {
        if max_bonus_blocks == 0 {
            return false;
        }

        let Some(position) = self.stacks.iter().position(|s| s.is_bonus()) else {
            let index = self.stacks.len();
            self.stacks.push(Stack::new_bonus(index));
            return true;
        };

        let bonus = &mut self.stacks[position];
        if bonus.capacity() >= max_bonus_blocks {
            return false;
        }

        let bonus_id = bonus.id().clone();
        let remapped = bonus.extend_bonus_floor();

        for record in &mut self.move_log {
            if record.origin == bonus_id
                && let Some((_, new_id)) = remapped.iter().find(|(old, _)| *old == record.origin_slot)
            {
                record.origin_slot = new_id.clone();
            }
            if record.destination == bonus_id
                && let Some((_, new_id)) = remapped.iter().find(|(old, _)| *old == record.destination_slot)
            {
                record.destination_slot = new_id.clone();
            }
        }
        true
    }
}
