use colour_sort_common::games::colour_sort::{Colour, PuzzleView, SessionUpdate};

pub fn render_view(view: &PuzzleView) -> String {
    let mut out = format!("Level {}  (moves: {})\n", view.level, view.moves);
    for (position, stack) in view.stacks.iter().enumerate() {
        let selected = view.selected_stack_id.as_ref() == Some(&stack.id);
        let marker = match (selected, stack.is_bonus) {
            (true, _) => '*',
            (false, true) => '+',
            (false, false) => ' ',
        };
        let slots: String = stack
            .blocks
            .iter()
            .map(|b| b.colour.map_or('.', |c| c.symbol()))
            .collect();
        out.push_str(&format!("{}{:>3} | {}\n", marker, position + 1, slots));
    }
    out
}

/// One `symbol name` pair per palette colour, e.g. `R Red`.
pub fn render_legend() -> String {
    let entries: Vec<String> = Colour::palette()
        .iter()
        .map(|c| format!("{} {}", c.symbol(), c.name()))
        .collect();
    format!("Colours: {}\n", entries.join(", "))
}

pub fn render_update(update: &SessionUpdate) -> String {
    if update.level_advanced {
        format!("*** Solved! On to level {} ***\n{}", update.level, render_view(&update.view))
    } else {
        render_view(&update.view)
    }
}
