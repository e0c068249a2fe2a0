//! Platform independent core of single and dual thumb sliders.
//!
//! The crate turns host supplied values, layout measurements and gesture
//! events into canonical thumb values and a renderable [`SliderGeometry`].
//! It does not draw anything; hosts render the projected geometry with
//! whatever toolkit they use.
//!
//! # Usage
//!
//! ```
//! use tessera_slider::{
//!     SliderCallbacks, SliderConfig, SliderController,
//!     geometry::{Point, Size},
//! };
//!
//! let config = SliderConfig::default()
//!     .maximum_value(100.0)
//!     .dual_slider(true)
//!     .allow_crossover(false);
//! let mut slider = SliderController::new(config, vec![20.0_f32, 80.0]).with_callbacks(
//!     SliderCallbacks::default().on_value_change(|event| {
//!         println!("thumb {} moved: {:?}", event.active_index, event.values);
//!     }),
//! );
//!
//! slider.on_container_layout(Size::new(220.0, 40.0));
//! slider.on_thumb_layout(Size::new(20.0, 20.0));
//!
//! let geometry = slider.geometry();
//! assert!(geometry.all_measured);
//! assert_eq!(geometry.thumb_offsets.as_slice(), &[40.0, 160.0]);
//!
//! // Grab the upper thumb and pull it past the lower one.
//! assert!(slider.on_gesture_grant(Point::new(180.0, 20.0)));
//! slider.on_gesture_move(Point::new(-200.0, 0.0));
//! slider.on_gesture_release(Point::new(-200.0, 0.0));
//! assert!((slider.values()[1] - 20.1).abs() < 1e-3);
//! ```
//!
//! # Modules
//!
//! - [`value`] normalizes external input into a [`ValueSet`].
//! - [`store`] and [`cell`] hold one mutable value per thumb.
//! - [`hit_test`] and [`gesture`] map touches to thumb values.
//! - [`projector`] maps values to pixel geometry.
//! - [`slider`] wires everything together behind [`SliderController`].
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod callback;
pub mod cell;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod hit_test;
pub mod measure;
pub mod projector;
pub mod slider;
pub mod store;
pub mod value;

pub use crate::{
    animation::{AnimationSpec, Animator, Easing, SpringSpec, TimingSpec},
    callback::{CallbackWith, SliderCallbacks, SliderEvent},
    config::{LayoutDirection, SliderConfig},
    error::SliderError,
    hit_test::Hit,
    projector::{SliderGeometry, TrackSegment},
    slider::SliderController,
    value::{RawValue, ValueSet},
};
