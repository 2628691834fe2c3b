use super::palette::Colour;
use crate::identifiers::{BlockId, StackId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    id: BlockId,
    colour: Option<Colour>,
    is_bonus: bool,
}

impl Block {
    fn new(id: BlockId, is_bonus: bool) -> Self {
        Self {
            id,
            colour: None,
            is_bonus,
        }
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn colour(&self) -> Option<Colour> {
        self.colour
    }

    pub fn is_bonus(&self) -> bool {
        self.is_bonus
    }
}

/// A column of slots. Slot 0 is the mouth of the stack, the last slot is the
/// floor; blocks settle from the floor upward so the filled slots are always
/// a contiguous run ending at the floor.
///
/// Every predicate is computed from the current colours on each call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    index: usize,
    id: StackId,
    blocks: Vec<Block>,
    is_bonus: bool,
}

impl Stack {
    pub(crate) fn new(index: usize, capacity: usize) -> Self {
        let blocks = (0..capacity)
            .map(|slot| Block::new(BlockId::for_slot(index, slot), false))
            .collect();
        Self {
            index,
            id: StackId::for_index(index),
            blocks,
            is_bonus: false,
        }
    }

    pub(crate) fn new_bonus(index: usize) -> Self {
        Self {
            index,
            id: StackId::for_index(index),
            blocks: vec![Block::new(BlockId::for_slot(index, 0), true)],
            is_bonus: true,
        }
    }

    pub fn id(&self) -> &StackId {
        &self.id
    }

    pub fn is_bonus(&self) -> bool {
        self.is_bonus
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn capacity(&self) -> usize {
        self.blocks.len()
    }

    pub fn colours(&self) -> Vec<Option<Colour>> {
        self.blocks.iter().map(|b| b.colour).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.colour.is_none())
    }

    pub fn is_filled(&self) -> bool {
        self.blocks.iter().all(|b| b.colour.is_some())
    }

    /// Index of the first filled slot counting from the mouth.
    pub fn top_slot(&self) -> Option<usize> {
        self.blocks.iter().position(|b| b.colour.is_some())
    }

    pub fn top_colour(&self) -> Option<Colour> {
        self.top_slot().and_then(|slot| self.blocks[slot].colour)
    }

    pub fn top_slot_id(&self) -> Option<&BlockId> {
        self.top_slot().map(|slot| &self.blocks[slot].id)
    }

    /// Slot a block moved onto this stack would land in.
    pub fn available_slot(&self) -> Option<usize> {
        if self.is_filled() {
            return None;
        }
        match self.top_slot() {
            None => self.blocks.len().checked_sub(1),
            Some(top) => top.checked_sub(1),
        }
    }

    pub fn available_slot_id(&self) -> Option<&BlockId> {
        self.available_slot().map(|slot| &self.blocks[slot].id)
    }

    /// True when every slot holds the mouth slot's colour. An all-empty stack
    /// is uniform too, so callers that mean "sorted" want [`Stack::is_solved`].
    pub fn is_uniform_colour(&self) -> bool {
        match self.blocks.first() {
            Some(first) => self.blocks.iter().all(|b| b.colour == first.colour),
            None => true,
        }
    }

    pub fn is_solved(&self) -> bool {
        !self.blocks.is_empty() && self.is_filled() && self.is_uniform_colour()
    }

    pub fn slot_of(&self, block_id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == block_id)
    }

    pub(crate) fn set_colour(&mut self, slot: usize, colour: Option<Colour>) {
        self.blocks[slot].colour = colour;
    }

    pub(crate) fn take_colour(&mut self, slot: usize) -> Option<Colour> {
        self.blocks[slot].colour.take()
    }

    /// Appends a bonus slot at the floor and shifts the whole column one slot
    /// toward it. Returns the old-to-new id of every pre-existing slot.
    pub(crate) fn extend_bonus_floor(&mut self) -> Vec<(BlockId, BlockId)> {
        let new_slot = self.blocks.len();
        self.blocks
            .push(Block::new(BlockId::for_slot(self.index, new_slot), true));

        for slot in (1..=new_slot).rev() {
            let colour = self.blocks[slot - 1].colour.take();
            self.blocks[slot].colour = colour;
        }

        self.blocks
            .windows(2)
            .map(|pair| (pair[0].id.clone(), pair[1].id.clone()))
            .collect()
    }
}
