//! First-match dispatch from an event's variant tag to a handler.
//!
//! Handlers are registered in order against a [`Routable::Kind`]. Routing
//! looks the kind up in a table and runs exactly one handler: the first one
//! registered for that kind. Later registrations for the same kind are kept
//! but never run. Kinds on the ignore list are reported separately from
//! kinds nobody handles so deliberate suppression stays distinguishable from
//! gaps in the table.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// A value that can be routed by its variant tag.
pub trait Routable {
    type Kind: Copy + Eq + Hash + Debug;

    fn kind(&self) -> Self::Kind;
}

/// Handler signature: mutate the context, return whether the visible frame
/// may have changed.
pub type Handler<C, E> = fn(&mut C, &E) -> bool;

/// Outcome of [`Router::route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// A handler ran; `visible` is its repaint signal.
    Handled { visible: bool },
    /// The kind is on the ignore list.
    Ignored,
    /// No handler is registered for the kind.
    Unhandled,
}

impl Routed {
    pub fn is_visible(self) -> bool {
        matches!(self, Routed::Handled { visible: true })
    }
}

pub struct Router<C, E: Routable> {
    handlers: Vec<(E::Kind, Handler<C, E>)>,
    table: HashMap<E::Kind, usize>,
    ignored: HashSet<E::Kind>,
}

impl<C, E: Routable> Default for Router<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, E: Routable> Router<C, E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            table: HashMap::new(),
            ignored: HashSet::new(),
        }
    }

    /// Append a handler for `kind`. Only the first handler registered for a
    /// kind is ever dispatched to.
    pub fn on(mut self, kind: E::Kind, handler: Handler<C, E>) -> Self {
        let index = self.handlers.len();
        self.handlers.push((kind, handler));
        if self.table.contains_key(&kind) {
            tracing::debug!(?kind, "handler shadowed by an earlier registration");
        } else {
            self.table.insert(kind, index);
        }
        self
    }

    /// Mark `kind` as known but irrelevant.
    pub fn ignore(mut self, kind: E::Kind) -> Self {
        self.ignored.insert(kind);
        self
    }

    pub fn route(&self, ctx: &mut C, event: &E) -> Routed {
        let kind = event.kind();
        match self.table.get(&kind) {
            Some(&index) => {
                let (_, handler) = self.handlers[index];
                Routed::Handled {
                    visible: handler(ctx, event),
                }
            }
            None if self.ignored.contains(&kind) => Routed::Ignored,
            None => Routed::Unhandled,
        }
    }

    pub fn handles(&self, kind: E::Kind) -> bool {
        self.table.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
