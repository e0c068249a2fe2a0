//! Shared mutable scalar cells backing each thumb.
//!
//! A [`ValueCell`] is a cheap handle; clones refer to the same storage, and
//! [`ValueCell::ptr_eq`] tells whether two handles are the same cell. The
//! value store keeps cell identity stable across reconciliations so an
//! animation started on a cell keeps running after the next prop update.
use std::{sync::Arc, time::Instant};

use parking_lot::RwLock;
use tracing::trace;

use crate::animation::{AnimationSpec, Transition};

#[derive(Debug)]
struct CellState {
    value: f32,
    transition: Option<Transition>,
}

/// Handle to a mutable scalar with optional in-flight transition.
#[derive(Debug, Clone)]
pub struct ValueCell {
    inner: Arc<RwLock<CellState>>,
}

impl ValueCell {
    /// Creates a new cell holding `value`.
    pub fn new(value: f32) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CellState {
                value,
                transition: None,
            })),
        }
    }

    /// Returns the current (possibly mid-transition) value.
    pub fn get(&self) -> f32 {
        self.inner.read().value
    }

    /// Sets the value immediately, cancelling any running transition.
    pub fn set(&self, value: f32) {
        let mut state = self.inner.write();
        state.value = value;
        state.transition = None;
    }

    /// Starts a transition from the current value toward `target`.
    ///
    /// Replaces any transition already running on this cell.
    pub fn start_transition(&self, target: f32, spec: AnimationSpec, now: Instant) {
        let mut state = self.inner.write();
        let from = state.value;
        state.transition = Some(Transition::new(from, target, spec, now));
    }

    /// Value the cell is heading to: the transition target if one is running,
    /// the current value otherwise.
    pub fn target(&self) -> f32 {
        let state = self.inner.read();
        state
            .transition
            .as_ref()
            .map_or(state.value, Transition::target)
    }

    /// Returns whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.inner.read().transition.is_some()
    }

    /// Advances the running transition to `now`.
    ///
    /// Returns `true` while the transition is still running.
    pub fn advance(&self, now: Instant) -> bool {
        let mut state = self.inner.write();
        let Some(mut transition) = state.transition.take() else {
            return false;
        };
        let (value, finished) = transition.sample(now);
        trace!(value, finished, "advanced value cell");
        state.value = value;
        if !finished {
            state.transition = Some(transition);
        }
        !finished
    }

    /// Returns `true` if both handles refer to the same cell.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}
