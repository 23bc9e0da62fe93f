//! Query-input state machine and debounce driver
//!
//! The UI layer that renders suggestions and results is out of scope; this
//! module keeps its behavior testable as a pure state + transition function,
//! with a separate generation-counted debouncer so a superseded keystroke's
//! work is discarded even after its request went out.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::service::MIN_SEARCH_LEN;

/// Debounce delay applied to every keystroke before dispatch
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// What the input box is currently doing, derived from query length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Empty query
    Idle,
    /// One character: suggestion lookup territory
    Suggesting,
    /// Two or more characters: full search territory
    Searching,
}

impl Mode {
    fn for_query(query: &str) -> Mode {
        match query.chars().count() {
            0 => Mode::Idle,
            n if n < MIN_SEARCH_LEN => Mode::Suggesting,
            _ => Mode::Searching,
        }
    }
}

/// Input surface state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub query: String,
    pub mode: Mode,
    /// Highlighted entry; -1 means nothing selected
    pub selection: isize,
    /// Whether the suggestion/result surface is showing
    pub open: bool,
    /// Length of the currently visible list
    pub visible: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            query: String::new(),
            mode: Mode::Idle,
            selection: -1,
            open: false,
            visible: 0,
        }
    }
}

/// Events the rendering layer feeds in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    QueryChanged(String),
    /// The debounced lookup resolved with this many entries
    ResultsLoaded(usize),
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    ClickAway,
}

/// What the caller should do after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Debounce, then run the suggestion lookup
    ScheduleSuggest,
    /// Debounce, then run the universal search
    ScheduleSearch,
    /// Fill the query box with the selected suggestion
    AcceptSuggestion(usize),
    /// Navigate to the selected result's module path
    OpenResult(usize),
    /// Close everything and drop input focus
    Dismiss,
}

/// Pure transition function
pub fn transition(state: &InputState, event: InputEvent) -> (InputState, Effect) {
    let mut next = state.clone();

    match event {
        InputEvent::QueryChanged(query) => {
            next.mode = Mode::for_query(&query);
            next.query = query;
            next.selection = -1;
            next.visible = 0;
            let effect = match next.mode {
                Mode::Idle => {
                    next.open = false;
                    Effect::None
                }
                Mode::Suggesting => Effect::ScheduleSuggest,
                Mode::Searching => Effect::ScheduleSearch,
            };
            (next, effect)
        }
        InputEvent::ResultsLoaded(count) => {
            if next.mode == Mode::Idle {
                // A stale load finishing after the box was cleared
                return (next, Effect::None);
            }
            next.visible = count;
            next.open = true;
            next.selection = next.selection.min(count as isize - 1);
            (next, Effect::None)
        }
        InputEvent::ArrowDown => {
            if next.open && next.visible > 0 {
                next.selection = (next.selection + 1).min(next.visible as isize - 1);
            }
            (next, Effect::None)
        }
        InputEvent::ArrowUp => {
            if next.open {
                next.selection = (next.selection - 1).max(-1);
            }
            (next, Effect::None)
        }
        InputEvent::Enter => {
            if !next.open || next.selection < 0 {
                return (next, Effect::None);
            }
            let index = next.selection as usize;
            let effect = match next.mode {
                Mode::Suggesting => Effect::AcceptSuggestion(index),
                Mode::Searching => Effect::OpenResult(index),
                Mode::Idle => Effect::None,
            };
            (next, effect)
        }
        InputEvent::Escape => {
            next.open = false;
            next.selection = -1;
            next.visible = 0;
            (next, Effect::Dismiss)
        }
        InputEvent::ClickAway => {
            // Closes the surface without altering the query text
            next.open = false;
            next.selection = -1;
            (next, Effect::None)
        }
    }
}

/// Generation-counted debouncer.
///
/// Each keystroke takes a new generation; `run` sleeps out the debounce
/// window, re-checks its generation, runs the work, and re-checks again
/// before handing the output back. Both checks matter: the first implements
/// classic debounce, the second discards a stale in-flight response that
/// would otherwise overwrite a newer one.
pub struct Debouncer {
    generation: AtomicU64,
    delay: Duration,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            generation: AtomicU64::new(0),
            delay,
        }
    }

    /// Register a keystroke, superseding all earlier generations
    pub fn note_keystroke(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Debounce, then run `work` if this generation is still current.
    /// Returns None when superseded, before or during the work.
    pub async fn run<F, Fut, T>(&self, generation: u64, work: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        tokio::time::sleep(self.delay).await;
        if !self.is_current(generation) {
            return None;
        }

        let output = work().await;
        if !self.is_current(generation) {
            return None;
        }
        Some(output)
    }
}
