use super::palette::Colour;
use crate::error::EngineError;
use crate::games::session_rng::SessionRng;

/// Colour assignment for every slot of a level, stack by stack.
pub type ColourPlan = Vec<Option<Colour>>;

/// Deals `blocks_per_stack` copies of the first `total_stacks - empty_stacks`
/// palette colours in a uniformly random order, then pads with one empty
/// stack's worth of `None` per buffer stack.
pub fn generate_colour_plan(
    total_stacks: usize,
    blocks_per_stack: usize,
    empty_stacks: usize,
    rng: &mut SessionRng,
) -> Result<ColourPlan, EngineError> {
    if empty_stacks > total_stacks {
        return Err(EngineError::invalid_argument(format!(
            "Empty stack count {} exceeds total stack count {}",
            empty_stacks, total_stacks
        )));
    }

    let filled_stacks = total_stacks - empty_stacks;
    let palette = Colour::palette();
    if filled_stacks > palette.len() {
        return Err(EngineError::PaletteExhausted {
            requested: filled_stacks,
            available: palette.len(),
        });
    }

    let mut bag: Vec<Colour> = palette[..filled_stacks]
        .iter()
        .flat_map(|&colour| std::iter::repeat_n(colour, blocks_per_stack))
        .collect();

    let mut plan: ColourPlan = Vec::with_capacity(total_stacks * blocks_per_stack);
    while !bag.is_empty() {
        let drawn = rng.random_range(0..bag.len());
        plan.push(Some(bag.swap_remove(drawn)));
    }

    plan.extend(std::iter::repeat_n(None, empty_stacks * blocks_per_stack));
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn count_colours(plan: &[Option<Colour>]) -> HashMap<Colour, usize> {
        let mut counts = HashMap::new();
        for colour in plan.iter().flatten() {
            *counts.entry(*colour).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_plan_shape_and_multiset() {
        for seed in 0..50u64 {
            let mut rng = SessionRng::new(seed);
            let plan = generate_colour_plan(6, 4, 2, &mut rng).unwrap();

            assert_eq!(plan.len(), 24);
            assert!(plan[..16].iter().all(|c| c.is_some()));
            assert!(plan[16..].iter().all(|c| c.is_none()));

            let counts = count_colours(&plan);
            assert_eq!(counts.len(), 4);
            for colour in &Colour::palette()[..4] {
                assert_eq!(counts.get(colour), Some(&4), "seed {}", seed);
            }
        }
    }

    #[test]
    fn test_plan_is_deterministic_for_seed() {
        let a = generate_colour_plan(8, 4, 2, &mut SessionRng::new(99)).unwrap();
        let b = generate_colour_plan(8, 4, 2, &mut SessionRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_plan_actually_shuffles() {
        let sorted: ColourPlan = Colour::palette()[..4]
            .iter()
            .flat_map(|&c| std::iter::repeat_n(Some(c), 4))
            .collect();
        let shuffled_differs = (0..20u64).any(|seed| {
            let plan = generate_colour_plan(4, 4, 0, &mut SessionRng::new(seed)).unwrap();
            plan != sorted
        });
        assert!(shuffled_differs);
    }

    #[test]
    fn test_all_empty_stacks() {
        let plan = generate_colour_plan(3, 4, 3, &mut SessionRng::new(1)).unwrap();
        assert_eq!(plan, vec![None; 12]);
    }

    #[test]
    fn test_more_empty_than_total_is_invalid() {
        let result = generate_colour_plan(2, 4, 3, &mut SessionRng::new(1));
        assert!(matches!(result, Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn test_palette_exhausted() {
        let result = generate_colour_plan(13, 4, 2, &mut SessionRng::new(1));
        assert_eq!(
            result,
            Err(EngineError::PaletteExhausted {
                requested: 11,
                available: 10
            })
        );
    }

    #[test]
    fn test_full_palette_is_allowed() {
        let plan = generate_colour_plan(12, 4, 2, &mut SessionRng::new(3)).unwrap();
        assert_eq!(count_colours(&plan).len(), 10);
    }
}
