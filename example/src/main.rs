//! Headless walkthrough of the slider core.
//!
//! Plays scripted frames against a few slider configurations and logs what a
//! host would render. Run with `RUST_LOG=tessera_slider=trace` to see every
//! hit test and drag sample.
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use tessera_slider::{
    AnimationSpec, Easing, LayoutDirection, SliderCallbacks, SliderConfig, SliderController,
    SliderGeometry, TimingSpec, ValueSet,
    geometry::{Point, Size},
    hit_test::thumb_touch_rect,
};
use tracing::info;

const CONTAINER: Size = Size::new(320.0, 48.0);
const THUMB: Size = Size::new(24.0, 24.0);
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    init_tracing();
    stepped_single();
    range_rtl();
    animated_external_update();
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,example=info,tessera_slider=debug",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

/// Host side state of a controlled slider.
#[derive(Clone)]
struct HostState {
    values: Arc<Mutex<ValueSet>>,
}

impl HostState {
    fn new(initial: &[f32]) -> Self {
        Self {
            values: Arc::new(Mutex::new(initial.iter().copied().collect())),
        }
    }

    fn callbacks(&self, label: &'static str) -> SliderCallbacks {
        let values = Arc::clone(&self.values);
        SliderCallbacks::default()
            .on_sliding_start(move |event| {
                info!(label, thumb = event.active_index, "sliding start");
            })
            .on_value_change(move |event| *values.lock() = event.values)
            .on_sliding_complete(move |event| {
                info!(label, values = ?event.values, "sliding complete");
            })
    }

    fn values(&self) -> Vec<f32> {
        self.values.lock().to_vec()
    }
}

fn mount(config: SliderConfig, host: &HostState, label: &'static str) -> SliderController {
    let mut slider =
        SliderController::new(config, host.values()).with_callbacks(host.callbacks(label));
    slider.on_container_layout(CONTAINER);
    slider.on_thumb_layout(THUMB);
    slider
}

fn log_geometry(label: &str, geometry: &SliderGeometry) {
    info!(
        label,
        thumbs = ?geometry.thumb_offsets,
        filled = ?geometry.filled,
        marks = ?geometry.mark_offsets,
        "geometry"
    );
}

fn stepped_single() {
    let host = HostState::new(&[20.0]);
    let config = SliderConfig::default().maximum_value(100.0).step(5.0);
    let mut slider = mount(config, &host, "stepped")
        .with_track_marks(vec![0.0_f32, 25.0, 50.0, 75.0, 100.0]);
    log_geometry("stepped", &slider.geometry());

    // Touch the track near the right end; the thumb jumps under the finger.
    let touch = Point::new(260.0, CONTAINER.height / 2.0);
    info!(hit = ?slider.hit_test(touch), "track touch");
    if slider.on_gesture_grant(touch) {
        for dx in [-10.0, -25.0, -40.0] {
            slider.on_gesture_move(Point::new(dx, 0.0));
        }
        slider.on_gesture_release(Point::new(-40.0, 0.0));
    }
    slider.set_value(host.values());
    log_geometry("stepped", &slider.geometry());
}

fn range_rtl() {
    let host = HostState::new(&[250.0, 750.0]);
    let config = SliderConfig::default()
        .maximum_value(1000.0)
        .dual_slider(true)
        .allow_crossover(false)
        .layout_direction(LayoutDirection::Rtl)
        .transparent_fill(true);
    let mut slider = mount(config, &host, "range");
    log_geometry("range", &slider.geometry());

    let lower = slider.store().read(0).unwrap_or_default();
    let rect = thumb_touch_rect(slider.config(), slider.measurements(), lower);
    let grab = Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
    if slider.on_gesture_grant(grab) {
        // Dragging left raises the value under RTL; the upper thumb stops it.
        slider.on_gesture_move(Point::new(-120.0, 0.0));
        slider.on_gesture_move(Point::new(-400.0, 0.0));
        slider.on_gesture_release(Point::new(-400.0, 0.0));
    }
    slider.set_value(host.values());
    log_geometry("range", &slider.geometry());
}

fn animated_external_update() {
    let host = HostState::new(&[1.0]);
    let config = SliderConfig::default()
        .maximum_value(10.0)
        .animate_transitions(true)
        .animation(AnimationSpec::Timing(TimingSpec {
            duration: Duration::from_millis(120),
            easing: Easing::EaseInOutCubic,
        }));
    let mut slider = mount(config, &host, "animated");

    slider.set_value(9.0);
    let mut now = Instant::now();
    let mut frames = 0;
    while slider.tick(now) {
        frames += 1;
        info!(frame = frames, value = ?slider.values(), "tick");
        now += FRAME;
    }
    info!(frames, value = ?slider.values(), "transition settled");
}
