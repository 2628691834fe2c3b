use crate::error::EngineError;

pub const DEFAULT_LEVEL_INCREMENTS: [u32; 9] = [2, 4, 6, 9, 14, 22, 33, 51, 80];

/// Number of stacks a level starts with: `base_stack_count + i` for the first
/// threshold `increments[i]` the level is still below. Past the last threshold
/// the count stays at `base_stack_count + increments.len() - 1`.
pub fn starting_stack_count(
    level: u32,
    base_stack_count: usize,
    increments: &[u32],
) -> Result<usize, EngineError> {
    if increments.is_empty() {
        return Err(EngineError::invalid_argument("Level increment table must not be empty"));
    }
    if increments.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(EngineError::invalid_argument(format!(
            "Level increment table must be non-decreasing, got {:?}",
            increments
        )));
    }

    let tier = increments
        .iter()
        .position(|&threshold| level < threshold)
        .unwrap_or(increments.len() - 1);
    Ok(base_stack_count + tier)
}
