//! Host-facing slider controller.
//!
//! ## Usage
//!
//! Create one [`SliderController`] per mounted slider. Feed it layout
//! measurements, gesture events and external value updates; read back the
//! projected [`SliderGeometry`] each frame.
//!
//! ```
//! use tessera_slider::{
//!     callback::SliderCallbacks,
//!     config::SliderConfig,
//!     geometry::{Point, Size},
//!     slider::SliderController,
//! };
//!
//! let config = SliderConfig::default().maximum_value(100.0).step(1.0);
//! let mut slider = SliderController::new(config, 20.0).with_callbacks(
//!     SliderCallbacks::default().on_sliding_complete(|event| {
//!         println!("settled at {:?}", event.values);
//!     }),
//! );
//! slider.on_container_layout(Size::new(220.0, 40.0));
//! slider.on_thumb_layout(Size::new(20.0, 20.0));
//!
//! // Grab the thumb (left edge at 40px) and drag it 60px to the right.
//! assert!(slider.on_gesture_grant(Point::new(60.0, 20.0)));
//! slider.on_gesture_move(Point::new(60.0, 0.0));
//! slider.on_gesture_release(Point::new(60.0, 0.0));
//! assert_eq!(slider.values().as_slice(), &[50.0]);
//! ```
use std::{sync::Arc, time::Instant};

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::{
    animation::{Animator, TimelineAnimator},
    callback::{SliderCallbacks, SliderEvent},
    config::SliderConfig,
    error::SliderError,
    geometry::{Point, Size},
    gesture::GestureSession,
    hit_test::{Hit, ThumbPicker},
    measure::Measurements,
    projector::{SliderGeometry, project},
    store::{Reconcile, ValueStore},
    value::{RawValue, ValueSet, normalize, normalize_marks},
};

/// Owns the state of one slider and mediates between the host and the core.
pub struct SliderController {
    config: SliderConfig,
    callbacks: SliderCallbacks,
    animator: Arc<dyn Animator>,
    external: RawValue,
    canonical: ValueSet,
    store: ValueStore,
    external_marks: RawValue,
    canonical_marks: SmallVec<[f32; 4]>,
    marks: ValueStore,
    measurements: Measurements,
    session: Option<GestureSession>,
}

impl SliderController {
    /// Creates a controller from a configuration and the initial value.
    pub fn new(config: SliderConfig, value: impl Into<RawValue>) -> Self {
        let config = config.sanitized();
        let external = value.into();
        let canonical = normalize(&config, &external);
        Self {
            store: ValueStore::new(&canonical),
            config,
            callbacks: SliderCallbacks::default(),
            animator: Arc::new(TimelineAnimator),
            external,
            canonical,
            external_marks: RawValue::Absent,
            canonical_marks: SmallVec::new(),
            marks: ValueStore::default(),
            measurements: Measurements::default(),
            session: None,
        }
    }

    /// Sets the notification handlers.
    pub fn with_callbacks(mut self, callbacks: SliderCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Sets the animator used for animated external updates.
    pub fn with_animator(mut self, animator: Arc<dyn Animator>) -> Self {
        self.animator = animator;
        self
    }

    /// Sets the initial track marks.
    pub fn with_track_marks(mut self, marks: impl Into<RawValue>) -> Self {
        self.set_track_marks(marks);
        self
    }

    /// Replaces the notification handlers.
    pub fn set_callbacks(&mut self, callbacks: SliderCallbacks) {
        self.callbacks = callbacks;
    }

    /// The active configuration, sanitized.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Current value of every thumb.
    pub fn values(&self) -> ValueSet {
        self.store.values()
    }

    /// Current value of thumb `index`.
    pub fn value(&self, index: usize) -> Result<f32, SliderError> {
        self.store.read(index)
    }

    /// The per-thumb value store.
    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    /// Current track mark positions.
    pub fn track_marks(&self) -> ValueSet {
        self.marks.values()
    }

    /// Sizes measured so far.
    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    /// Index of the thumb being dragged, `0` outside a gesture.
    pub fn active_index(&self) -> usize {
        self.session.map_or(0, |session| session.active_index())
    }

    /// Whether a gesture is in progress.
    pub fn is_sliding(&self) -> bool {
        self.session.is_some()
    }

    /// Applies a new external value.
    ///
    /// Nothing happens when the normalized value equals the previous external
    /// value. Otherwise the store is reconciled, animated when configured.
    /// Returns whether the store was touched.
    pub fn set_value(&mut self, value: impl Into<RawValue>) -> bool {
        self.external = value.into();
        let canonical = normalize(&self.config, &self.external);
        if canonical == self.canonical {
            return false;
        }
        self.canonical = canonical;

        let mode = if self.config.animate_transitions {
            Reconcile::Animated {
                animator: self.animator.as_ref(),
                spec: &self.config.animation,
            }
        } else {
            Reconcile::Immediate
        };
        let rebuilt = self.store.reconcile(&self.canonical, mode);
        debug!(values = ?self.canonical, rebuilt, "external value applied");
        if rebuilt {
            self.drop_invalid_session();
        }
        true
    }

    /// Applies new external track marks. Marks are never animated.
    pub fn set_track_marks(&mut self, marks: impl Into<RawValue>) -> bool {
        self.external_marks = marks.into();
        let canonical = normalize_marks(&self.config, &self.external_marks);
        if canonical == self.canonical_marks {
            return false;
        }
        self.canonical_marks = canonical;
        self.marks
            .reconcile(&self.canonical_marks, Reconcile::Immediate);
        true
    }

    /// Replaces the configuration and re-normalizes the external inputs
    /// under it.
    pub fn set_config(&mut self, config: SliderConfig) {
        let config = config.sanitized();
        if config == self.config {
            return;
        }
        debug!(
            dual = config.dual_slider,
            min = config.minimum_value,
            max = config.maximum_value,
            "slider configuration changed"
        );
        self.config = config;

        if self.config.disabled && self.session.take().is_some() {
            debug!("slider disabled mid-gesture; session dropped");
        }

        self.canonical = normalize(&self.config, &self.external);
        self.store.reconcile(&self.canonical, Reconcile::Immediate);
        self.canonical_marks = normalize_marks(&self.config, &self.external_marks);
        self.marks
            .reconcile(&self.canonical_marks, Reconcile::Immediate);
        self.drop_invalid_session();
    }

    /// Records the measured container size.
    pub fn on_container_layout(&mut self, size: Size) {
        self.measurements.container = Some(size);
        self.log_measured();
    }

    /// Records the measured thumb size.
    pub fn on_thumb_layout(&mut self, size: Size) {
        self.measurements.thumb = Some(size);
        self.log_measured();
    }

    /// Hit tests `location` (in touch surface coordinates) against the
    /// current thumbs.
    pub fn hit_test(&self, location: Point) -> Hit {
        ThumbPicker::new(&self.config, &self.measurements, &self.values()).pick(location)
    }

    /// Handles a gesture grant at `location`.
    ///
    /// Returns `true` when a gesture session started. Disabled sliders never
    /// start one.
    pub fn on_gesture_grant(&mut self, location: Point) -> bool {
        if self.config.disabled {
            return false;
        }
        let values = self.values();
        let hit = ThumbPicker::new(&self.config, &self.measurements, &values).pick(location);
        let Some(session) =
            GestureSession::drag_start(&self.config, &self.measurements, &values, hit, location)
        else {
            trace!(?location, "gesture grant missed every thumb");
            return false;
        };
        debug!(active_index = session.active_index(), ?hit, "gesture granted");
        self.session = Some(session);
        SliderCallbacks::emit(&self.callbacks.on_sliding_start, &self.event(session));
        true
    }

    /// Handles a drag by the cumulative `delta` since grant.
    ///
    /// Every move that yields a value commits it and emits value-change,
    /// even when the value is unchanged. Moves while unmeasured are dropped.
    pub fn on_gesture_move(&mut self, delta: Point) {
        if self.config.disabled {
            return;
        }
        let Some(session) = self.session else {
            return;
        };
        if self.commit_drag(session, delta) {
            SliderCallbacks::emit(&self.callbacks.on_value_change, &self.event(session));
        }
    }

    /// Handles the end of a gesture with its final cumulative `delta`.
    pub fn on_gesture_release(&mut self, delta: Point) {
        self.end_gesture(delta, "released");
    }

    /// Handles a gesture taken away by the system. Treated as a release.
    pub fn on_gesture_terminate(&mut self, delta: Point) {
        self.end_gesture(delta, "terminated");
    }

    /// Advances animated transitions. Returns `true` while any is running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.store.advance(now)
    }

    /// Projects the current state for presentation.
    pub fn geometry(&self) -> SliderGeometry {
        project(
            &self.config,
            &self.measurements,
            &self.values(),
            &self.track_marks(),
        )
    }

    fn end_gesture(&mut self, delta: Point, how: &str) {
        let Some(session) = self.session.take() else {
            return;
        };
        if !self.config.disabled {
            self.commit_drag(session, delta);
        }
        debug!(active_index = session.active_index(), "gesture {how}");
        let event = self.event(session);
        SliderCallbacks::emit(&self.callbacks.on_value_change, &event);
        SliderCallbacks::emit(&self.callbacks.on_sliding_complete, &event);
    }

    /// Writes the dragged value. Returns whether a value was committed.
    fn commit_drag(&mut self, session: GestureSession, delta: Point) -> bool {
        let index = session.active_index();
        let values = self.values();
        let value =
            match session.drag_value(&self.config, &self.measurements, &values, delta) {
                Ok(value) => value,
                Err(err) => {
                    trace!("drag ignored: {err}");
                    return false;
                }
            };
        if let Err(err) = self.store.write(index, value) {
            warn!("Failed to commit drag: {err}");
            return false;
        }
        true
    }

    fn event(&self, session: GestureSession) -> SliderEvent {
        SliderEvent {
            values: self.values(),
            active_index: session.active_index(),
        }
    }

    fn drop_invalid_session(&mut self) {
        if let Some(session) = self.session
            && session.active_index() >= self.store.len()
        {
            debug!(
                active_index = session.active_index(),
                "thumb count changed mid-gesture; session dropped"
            );
            self.session = None;
        }
    }

    fn log_measured(&self) {
        if self.measurements.all_measured() {
            debug!(
                container = ?self.measurements.container,
                thumb = ?self.measurements.thumb,
                "slider measured"
            );
        }
    }
}
