// input.rs - Key presses to simulation actions

use egui::{Event, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Re-randomize the grid.
    Reset,
    /// Close the window.
    Quit,
}

pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Escape => Some(Action::Quit),
        Key::Space => Some(Action::Reset),
        _ => None,
    }
}

/// Releases and auto-repeats never trigger an action.
pub fn action_for_press(key: Key, pressed: bool, repeat: bool) -> Option<Action> {
    if pressed && !repeat {
        action_for_key(key)
    } else {
        None
    }
}

/// Actions for one frame's key events, in arrival order.
pub fn actions_from_events(events: &[Event]) -> Vec<Action> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key { key, pressed, repeat, .. } => action_for_press(*key, *pressed, *repeat),
            _ => None,
        })
        .collect()
}
