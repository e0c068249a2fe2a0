//! Outbound notifications.
//!
//! ## Usage
//!
//! Register handlers on [`SliderCallbacks`] and pass them to the controller.
//! Handlers always receive the full committed value set and the index of the
//! thumb that moved.
use std::sync::Arc;

use crate::value::ValueSet;

/// Stable, comparable callback handle for `Fn(T) -> R`.
///
/// Handles compare by identity (`Arc::ptr_eq`), so configurations holding
/// callbacks can be compared without comparing closures.
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> std::fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

/// Payload of every slider notification.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderEvent {
    /// All thumb values, already committed to the store.
    pub values: ValueSet,
    /// Index of the thumb the gesture drives.
    pub active_index: usize,
}

/// Handlers for the slider's outbound notifications.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliderCallbacks {
    /// Called when a gesture is granted.
    pub on_sliding_start: Option<CallbackWith<SliderEvent>>,
    /// Called on every committed drag move and once more at release.
    pub on_value_change: Option<CallbackWith<SliderEvent>>,
    /// Called once when a gesture ends, after its last value change.
    pub on_sliding_complete: Option<CallbackWith<SliderEvent>>,
}

impl SliderCallbacks {
    /// Sets the sliding start handler.
    pub fn on_sliding_start<F>(mut self, handler: F) -> Self
    where
        F: Fn(SliderEvent) + Send + Sync + 'static,
    {
        self.on_sliding_start = Some(CallbackWith::new(handler));
        self
    }

    /// Sets the value change handler.
    pub fn on_value_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(SliderEvent) + Send + Sync + 'static,
    {
        self.on_value_change = Some(CallbackWith::new(handler));
        self
    }

    /// Sets the sliding complete handler.
    pub fn on_sliding_complete<F>(mut self, handler: F) -> Self
    where
        F: Fn(SliderEvent) + Send + Sync + 'static,
    {
        self.on_sliding_complete = Some(CallbackWith::new(handler));
        self
    }

    pub(crate) fn emit(handler: &Option<CallbackWith<SliderEvent>>, event: &SliderEvent) {
        if let Some(handler) = handler {
            handler.call(event.clone());
        }
    }
}
