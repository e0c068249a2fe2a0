//! Per-thumb value storage.
//!
//! The store owns one [`ValueCell`] per thumb. Reconciling against a new
//! value set keeps the existing cells when the thumb count is unchanged and
//! only rebuilds them when it changes (single ↔ dual switch).
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    animation::{AnimationSpec, Animator},
    cell::ValueCell,
    error::SliderError,
    value::ValueSet,
};

/// How reconciliation applies new values to existing cells.
#[derive(Clone, Copy)]
pub enum Reconcile<'a> {
    /// Set every cell immediately.
    Immediate,
    /// Route changed values through an animator.
    Animated {
        /// Animator that moves each changed cell.
        animator: &'a dyn Animator,
        /// Animation parameters.
        spec: &'a AnimationSpec,
    },
}

/// One mutable cell per thumb, index addressed.
#[derive(Debug, Default, Clone)]
pub struct ValueStore {
    cells: SmallVec<[ValueCell; 2]>,
}

impl ValueStore {
    /// Creates a store with one fresh cell per value.
    pub fn new(values: &[f32]) -> Self {
        Self {
            cells: values.iter().copied().map(ValueCell::new).collect(),
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` when the store holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Brings the store in line with `values`.
    ///
    /// Returns `true` if the cells were rebuilt because the length changed.
    pub fn reconcile(&mut self, values: &[f32], mode: Reconcile<'_>) -> bool {
        if values.len() != self.cells.len() {
            debug!(
                from = self.cells.len(),
                to = values.len(),
                "thumb count changed; rebuilding value cells"
            );
            *self = Self::new(values);
            return true;
        }

        for (cell, &value) in self.cells.iter().zip(values) {
            match mode {
                Reconcile::Animated { animator, spec } if cell.target() != value => {
                    animator.animate(cell, value, spec);
                }
                Reconcile::Animated { .. } => {}
                Reconcile::Immediate => cell.set(value),
            }
        }
        false
    }

    /// Reads the current value of thumb `index`.
    pub fn read(&self, index: usize) -> Result<f32, SliderError> {
        self.cell(index).map(ValueCell::get)
    }

    /// Writes thumb `index` immediately, cancelling any transition on it.
    pub fn write(&self, index: usize, value: f32) -> Result<(), SliderError> {
        self.cell(index)?.set(value);
        Ok(())
    }

    /// Returns the cell handle for thumb `index`.
    pub fn cell(&self, index: usize) -> Result<&ValueCell, SliderError> {
        self.cells.get(index).ok_or(SliderError::ThumbOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    /// Snapshot of every current value.
    pub fn values(&self) -> ValueSet {
        self.cells.iter().map(ValueCell::get).collect()
    }

    /// Advances every running transition. Returns `true` while any is still
    /// running.
    pub fn advance(&self, now: std::time::Instant) -> bool {
        self.cells
            .iter()
            .fold(false, |running, cell| cell.advance(now) || running)
    }

    /// Returns whether any cell is mid-transition.
    pub fn is_animating(&self) -> bool {
        self.cells.iter().any(ValueCell::is_animating)
    }
}
