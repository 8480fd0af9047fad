//! Reactive fetch lifecycle as an explicit state machine
//!
//! Models "parameters changed, issue a new fetch, disregard the stale
//! in-flight result" without any framework reactivity. Each issued
//! request takes a generation number; only the newest generation may
//! transition the state, so a slow response from a superseded request
//! can never overwrite a newer one.

/// Lifecycle of one server-backed view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Fetched data, if the last fetch succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Error message, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Tracks the fetch state and request generations of one view.
#[derive(Debug)]
pub struct FetchGuard<T> {
    state: FetchState<T>,
    generation: u64,
}

impl<T> FetchGuard<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Begin a new fetch, superseding any request still in flight.
    /// Returns the generation to hand back to [`resolve`].
    ///
    /// [`resolve`]: FetchGuard::resolve
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    /// Resolve a fetch. A stale generation is disregarded and leaves
    /// the state untouched; returns whether the result was applied.
    pub fn resolve(&mut self, generation: u64, result: Result<T, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = match result {
            Ok(data) => FetchState::Success(data),
            Err(message) => FetchState::Error(message),
        };
        true
    }

    /// Back to idle; anything still in flight becomes stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = FetchState::Idle;
    }
}

impl<T> Default for FetchGuard<T> {
    fn default() -> Self {
        Self::new()
    }
}
