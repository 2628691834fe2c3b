use colour_sort_common::StackId;
use colour_sort_common::games::SessionRng;
use colour_sort_common::games::colour_sort::{
    Colour, PuzzleState, SelectionOutcome, generate_colour_plan, starting_stack_count,
};

const A: Option<Colour> = Some(Colour::Red);
const B: Option<Colour> = Some(Colour::Green);
const C: Option<Colour> = Some(Colour::Blue);

fn stack(index: usize) -> StackId {
    StackId::for_index(index)
}

fn two_colour_puzzle() -> PuzzleState {
    let mut puzzle = PuzzleState::build(4, 4).unwrap();
    let mut plan = vec![A, A, A, A, B, B, B, B];
    plan.extend(std::iter::repeat_n(None, 8));
    puzzle.apply_colours(&plan).unwrap();
    puzzle
}

#[test]
fn test_single_move_and_undo_scenario() {
    let mut puzzle = two_colour_puzzle();
    let start = puzzle.colours();

    assert_eq!(puzzle.select_stack(&stack(0)), SelectionOutcome::OriginSelected(stack(0)));
    assert!(matches!(puzzle.select_stack(&stack(2)), SelectionOutcome::Moved(_)));

    assert_eq!(puzzle.colours()[0], vec![None, A, A, A]);
    assert_eq!(puzzle.colours()[2], vec![None, None, None, A]);
    assert!(!puzzle.check_win());

    puzzle.undo();

    assert_eq!(puzzle.colours(), start);
    assert!(puzzle.stack(&stack(2)).unwrap().is_empty());
}

#[test]
fn test_win_ignores_partially_filled_bonus_stack() {
    let mut puzzle = PuzzleState::build(3, 4).unwrap();
    puzzle.add_bonus_block(2);
    puzzle.add_bonus_block(2);
    let mut plan = vec![A, A, A, A, B, B, B, B, None, None, None, None];
    plan.extend([None, C]);
    puzzle.apply_colours(&plan).unwrap();

    assert!(puzzle.check_win());
}

#[test]
fn test_win_fails_when_a_regular_stack_is_one_short() {
    let mut puzzle = PuzzleState::build(3, 4).unwrap();
    puzzle.add_bonus_block(2);
    puzzle.add_bonus_block(2);
    let mut plan = vec![A, A, A, A, None, B, B, B, None, None, None, None];
    plan.extend([None, B]);
    puzzle.apply_colours(&plan).unwrap();

    assert!(!puzzle.check_win());
}

#[test]
fn test_illegal_move_onto_mismatched_stack_changes_nothing() {
    let mut puzzle = PuzzleState::build(3, 2).unwrap();
    puzzle.apply_colours(&[None, A, None, B, None, None]).unwrap();
    let before = puzzle.colours();

    puzzle.select_stack(&stack(0));
    assert_eq!(puzzle.select_stack(&stack(1)), SelectionOutcome::Rejected);

    assert_eq!(puzzle.colours(), before);
    assert!(puzzle.move_log().is_empty());
    assert!(puzzle.selection().origin().is_none());
}

#[test]
fn test_full_destination_cancels_selection() {
    let mut puzzle = two_colour_puzzle();
    let before = puzzle.colours();

    puzzle.select_stack(&stack(0));
    assert_eq!(puzzle.select_stack(&stack(1)), SelectionOutcome::Cancelled);

    assert_eq!(puzzle.colours(), before);
    assert!(puzzle.move_log().is_empty());
}

#[test]
fn test_random_play_conserves_blocks_and_unwinds() {
    let mut rng = SessionRng::new(2024);
    let stack_count = starting_stack_count(7, 4, &[2, 4, 6, 9]).unwrap();
    let plan = generate_colour_plan(stack_count, 4, 2, &mut rng).unwrap();
    let mut puzzle = PuzzleState::build(stack_count, 4).unwrap();
    puzzle.apply_colours(&plan).unwrap();
    let start = puzzle.colours();

    let mut moves = 0;
    for _ in 0..300 {
        let clicked = stack(rng.random_range(0..stack_count));
        if let SelectionOutcome::Moved(_) = puzzle.select_stack(&clicked) {
            moves += 1;
        }
    }

    let count = |colours: &[Vec<Option<Colour>>], colour: Colour| {
        colours.iter().flatten().filter(|c| **c == Some(colour)).count()
    };
    let now = puzzle.colours();
    for colour in &Colour::palette()[..stack_count - 2] {
        assert_eq!(count(&now, *colour), 4);
    }
    assert_eq!(puzzle.move_log().len(), moves);

    assert_eq!(puzzle.reset_level(), moves);
    assert_eq!(puzzle.colours(), start);
}
