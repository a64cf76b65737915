// Client-side navigation: session history, navigation events, subscribers
use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::route::{resolve_route, Route};

/// Longest chain of listener-requested redirects followed for one navigation
pub const MAX_REDIRECTS: usize = 8;

/// What caused the current path to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCause {
    /// Explicit link activation
    Push,
    /// Native back button
    Back,
    /// Native forward button
    Forward,
    /// A listener asked for a follow-up navigation
    Redirect,
}

/// Emitted once per path change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    /// Strictly increasing in emission order
    pub seq: u64,
    pub path: String,
    pub cause: NavigationCause,
}

impl NavigationEvent {
    pub fn route(&self) -> Route {
        resolve_route(&self.path)
    }
}

/// Session history stack, like a browser tab's. Never empty.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_path.into()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Push a new entry, dropping anything ahead of the cursor
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.into());
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Handed to listeners so they can ask for a follow-up navigation
///
/// The request is applied only after the current event has reached every
/// listener. Listeners never touch the navigator directly.
#[derive(Debug, Default)]
pub struct Redirect {
    target: Option<String>,
}

impl Redirect {
    /// Request navigation to `path`. The last request wins.
    pub fn to(&mut self, path: impl Into<String>) {
        self.target = Some(path.into());
    }

    pub fn is_requested(&self) -> bool {
        self.target.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&NavigationEvent, &mut Redirect)>;

/// The active route as last set by the navigator's view-switch listener
///
/// Cheap to clone; all clones observe the same value.
#[derive(Debug, Clone)]
pub struct ActiveRoute(Rc<Cell<Route>>);

impl ActiveRoute {
    pub fn get(&self) -> Route {
        self.0.get()
    }
}

/// Sole writer of the current path
///
/// Single-threaded by construction: listeners are not `Send` and events are
/// delivered synchronously, in order, on the caller's thread.
pub struct Navigator {
    history: History,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    next_seq: u64,
}

impl Navigator {
    pub fn new(initial_path: impl Into<String>) -> Self {
        let initial_path = initial_path.into();
        debug!("Navigator starting at {}", initial_path);
        Self {
            history: History::new(initial_path),
            listeners: Vec::new(),
            next_listener: 0,
            next_seq: 0,
        }
    }

    /// The literal path in the address bar
    pub fn current_path(&self) -> &str {
        self.history.current()
    }

    pub fn current_route(&self) -> Route {
        resolve_route(self.current_path())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Register a listener. It sees every later navigation event.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&NavigationEvent, &mut Redirect) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Subscribe the top-level view switch and hand back its state
    ///
    /// Seeded with the route of the current path, then updated on every
    /// navigation event.
    pub fn track_active_route(&mut self) -> ActiveRoute {
        let active = ActiveRoute(Rc::new(Cell::new(self.current_route())));
        let cell = Rc::clone(&active.0);
        self.subscribe(move |event, _| cell.set(resolve_route(&event.path)));
        active
    }

    /// Push `path` onto the history and announce it
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.history.push(path);
        self.dispatch(NavigationCause::Push);
    }

    /// Native back button. Returns false (and emits nothing) at the start.
    pub fn back(&mut self) -> bool {
        if !self.history.back() {
            return false;
        }
        self.dispatch(NavigationCause::Back);
        true
    }

    /// Native forward button. Returns false (and emits nothing) at the end.
    pub fn forward(&mut self) -> bool {
        if !self.history.forward() {
            return false;
        }
        self.dispatch(NavigationCause::Forward);
        true
    }

    /// Announce the current path, then follow any redirects listeners ask for
    fn dispatch(&mut self, cause: NavigationCause) {
        let mut cause = cause;
        let mut hops = 0;

        loop {
            let event = NavigationEvent {
                seq: self.next_seq,
                path: self.history.current().to_string(),
                cause,
            };
            self.next_seq += 1;
            debug!("Navigation #{} to {} ({:?})", event.seq, event.path, event.cause);

            let mut redirect = Redirect::default();
            for (_, listener) in self.listeners.iter_mut() {
                listener(&event, &mut redirect);
            }

            let Some(target) = redirect.target else {
                break;
            };

            if target == event.path {
                debug!("Ignoring redirect to the current path {}", target);
                break;
            }

            hops += 1;
            if hops > MAX_REDIRECTS {
                warn!(
                    "Redirect chain exceeded {} hops at {}; stopping",
                    MAX_REDIRECTS, target
                );
                break;
            }

            self.history.push(target);
            cause = NavigationCause::Redirect;
        }
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("history", &self.history)
            .field("listeners", &self.listeners.len())
            .field("next_seq", &self.next_seq)
            .finish()
    }
}
