//! Numbered text menu built from a machine's event set.

use crate::core::{Event, State};

/// Parsed menu selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Choice<E: Event> {
    Event(E),
    Exit,
    Invalid,
}

/// Number of the exit entry for event type `E`.
pub fn exit_number<E: Event>() -> usize {
    E::all().len() + 1
}

/// Render the menu for the current state.
pub fn render<S: State, E: Event>(state: &S) -> String {
    let mut menu = format!("Current state: {}\n", state.name());
    for (index, event) in E::all().iter().enumerate() {
        menu.push_str(&format!("  {}. {}\n", index + 1, event.label()));
    }
    menu.push_str(&format!("  {}. Exit\n", exit_number::<E>()));
    menu.push_str("Select an option: ");
    menu
}

/// Parse a line of user input.
pub fn parse<E: Event>(input: &str) -> Choice<E> {
    let Ok(number) = input.trim().parse::<usize>() else {
        return Choice::Invalid;
    };
    if number == exit_number::<E>() {
        return Choice::Exit;
    }
    number
        .checked_sub(1)
        .and_then(|index| E::all().get(index))
        .map_or(Choice::Invalid, |event| Choice::Event(*event))
}
