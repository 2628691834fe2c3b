use serde::{Deserialize, Serialize};

use super::level_sizing::DEFAULT_LEVEL_INCREMENTS;
use super::palette::PALETTE_SIZE;
use super::types::{
    DEFAULT_BLOCK_AMT, DEFAULT_EMPTY_STACK_AMT, DEFAULT_MAX_BONUS_BLOCKS, DEFAULT_STACK_AMT,
};
use crate::config::Validate;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct GameSettings {
    pub stack_amt: usize,
    pub block_amt: usize,
    pub empty_stack_amt: usize,
    pub max_bonus_blocks: usize,
    pub level_increments: Vec<u32>,
}

impl GameSettings {
    /// Most stacks any level can start with.
    pub fn max_stack_count(&self) -> usize {
        self.stack_amt + self.level_increments.len().saturating_sub(1)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.block_amt == 0 {
            return Err("Block amount must be at least 1".to_string());
        }
        if self.stack_amt == 0 {
            return Err("Stack amount must be at least 1".to_string());
        }
        if self.empty_stack_amt >= self.stack_amt {
            return Err(format!(
                "Empty stack amount must be below stack amount {}, got {}",
                self.stack_amt, self.empty_stack_amt
            ));
        }
        if self.level_increments.is_empty() {
            return Err("Level increments must not be empty".to_string());
        }
        if self.level_increments.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(format!(
                "Level increments must be non-decreasing, got {:?}",
                self.level_increments
            ));
        }
        let max_colours = self.max_stack_count() - self.empty_stack_amt;
        if max_colours > PALETTE_SIZE {
            return Err(format!(
                "Largest level needs {} colours, palette has {}",
                max_colours, PALETTE_SIZE
            ));
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            stack_amt: DEFAULT_STACK_AMT,
            block_amt: DEFAULT_BLOCK_AMT,
            empty_stack_amt: DEFAULT_EMPTY_STACK_AMT,
            max_bonus_blocks: DEFAULT_MAX_BONUS_BLOCKS,
            level_increments: DEFAULT_LEVEL_INCREMENTS.to_vec(),
        }
    }
}
