// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use compare_lens::compare::{Effect, LoadedImage, Message, RawInput, Side, State};
use compare_lens::config::{self, Config, ContentFit, SliderConfig, MAX_ZOOM_SCALE};
use compare_lens::i18n::I18n;
use iced::{Point, Size, Vector};
use tempfile::tempdir;

const VIEW: Size = Size::new(400.0, 300.0);

fn image(width: u32, height: u32) -> LoadedImage {
    LoadedImage::from_rgba(width, height, vec![128; (width * height * 4) as usize])
}

fn interactive_state() -> State {
    State::new(image(400, 300), image(400, 300), SliderConfig::interactive())
}

fn canvas(state: &mut State, input: RawInput) -> Effect {
    state.handle(Message::Canvas {
        input,
        view_size: VIEW,
    })
}

#[test]
fn settings_file_round_trip_drives_slider_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.slider.animated = Some(false);
    config.slider.content_fit = Some(ContentFit::Fill);
    config.slider.sweep_start = Some(0.25);
    config.slider.sweep_end = Some(0.75);
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, config);

    let slider = loaded.slider.to_slider_config();
    assert!(!slider.animated);
    assert_eq!(slider.content_fit, ContentFit::Fill);
    assert_abs_diff_eq!(slider.sweep.start(), 0.25);
    assert_abs_diff_eq!(slider.sweep.end(), 0.75);
}

#[test]
fn missing_settings_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_none());
}

#[test]
fn corrupted_settings_file_reports_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "slider = [not toml")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(config::CONFIG_LOAD_WARNING_KEY));
}

#[test]
fn labels_follow_configured_language() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(None, &config);
    assert_eq!(i18n.tr("label-before"), "Avant");
    assert_eq!(i18n.tr("label-after"), "Après");

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.tr("label-before"), "Before");
}

#[test]
fn drag_from_divider_moves_and_clamps() {
    let mut state = interactive_state();

    canvas(&mut state, RawInput::CursorPressed(Point::new(200.0, 150.0)));
    canvas(&mut state, RawInput::CursorMoved(Point::new(300.0, 150.0)));
    assert_abs_diff_eq!(state.view_state().divider_position, 0.75, epsilon = 1e-6);

    canvas(&mut state, RawInput::CursorMoved(Point::new(-50.0, 150.0)));
    assert_abs_diff_eq!(state.view_state().divider_position, 0.1, epsilon = 1e-6);

    canvas(&mut state, RawInput::CursorReleased);
    assert_abs_diff_eq!(state.view_state().divider_position, 0.1, epsilon = 1e-6);
}

#[test]
fn double_click_zooms_then_pan_is_clamped() {
    let mut state = interactive_state();

    // Far from the divider so the press starts a pan rather than a drag.
    for _ in 0..2 {
        canvas(&mut state, RawInput::CursorPressed(Point::new(20.0, 20.0)));
        canvas(&mut state, RawInput::CursorReleased);
    }
    assert_abs_diff_eq!(state.view_state().zoom_scale, 2.0);

    canvas(&mut state, RawInput::CursorPressed(Point::new(20.0, 20.0)));
    canvas(&mut state, RawInput::CursorMoved(Point::new(1020.0, 20.0)));
    canvas(&mut state, RawInput::CursorReleased);

    // Bound for a 400 px wide view at 2x: (800 - 400) / 2.
    let pan = state.view_state().pan_offset;
    assert_abs_diff_eq!(pan.x, 200.0, epsilon = 1e-4);
    assert_abs_diff_eq!(pan.y, 0.0, epsilon = 1e-4);
}

#[test]
fn pinch_release_below_threshold_resets_view() {
    let mut state = interactive_state();

    state.handle(Message::PinchChanged(1.5));
    state.handle(Message::PanChanged {
        translation: Vector::new(30.0, 10.0),
        view_size: VIEW,
    });
    state.handle(Message::PanEnded);
    state.handle(Message::PinchEnded);

    let view = state.view_state();
    assert_abs_diff_eq!(view.zoom_scale, 1.0);
    assert_eq!(view.pan_offset, Vector::ZERO);
}

#[test]
fn pinch_beyond_max_is_capped() {
    let mut state = interactive_state();
    state.handle(Message::PinchChanged(5.0));
    assert_abs_diff_eq!(state.view_state().zoom_scale, MAX_ZOOM_SCALE);
    state.handle(Message::PinchEnded);
    assert_abs_diff_eq!(state.view_state().zoom_scale, MAX_ZOOM_SCALE);
}

#[test]
fn two_finger_touch_zooms() {
    let mut state = interactive_state();

    canvas(
        &mut state,
        RawInput::FingerPressed {
            id: 1,
            position: Point::new(100.0, 150.0),
        },
    );
    canvas(
        &mut state,
        RawInput::FingerPressed {
            id: 2,
            position: Point::new(150.0, 150.0),
        },
    );
    canvas(
        &mut state,
        RawInput::FingerMoved {
            id: 2,
            position: Point::new(200.0, 150.0),
        },
    );
    assert_abs_diff_eq!(state.view_state().zoom_scale, 2.0, epsilon = 1e-4);

    canvas(&mut state, RawInput::FingerLifted { id: 2 });
    assert_abs_diff_eq!(state.view_state().zoom_scale, 2.0, epsilon = 1e-4);
}

#[test]
fn animated_widget_sweeps_and_ignores_gestures() {
    let mut state = State::new(image(10, 10), image(10, 10), SliderConfig::default());
    assert!(state.view_state().animation_active);

    assert_eq!(state.handle(Message::DoubleTapped), Effect::None);
    assert_abs_diff_eq!(state.view_state().zoom_scale, 1.0);

    let start = state.view_state().divider_position;
    state.handle(Message::Tick(std::time::Instant::now()));
    assert!(state.view_state().divider_position > start);

    state.stop_animation();
    state.handle(Message::Tick(std::time::Instant::now()));
    let stopped_at = state.view_state().divider_position;
    state.handle(Message::Tick(std::time::Instant::now()));
    assert_abs_diff_eq!(state.view_state().divider_position, stopped_at);
}

#[test]
fn load_results_fill_slots_and_measure_content() {
    let mut state = State::new("before.png", "after.png", SliderConfig::interactive());
    assert!(state.is_loading());

    let effect = state.handle(Message::Loaded {
        side: Side::Before,
        result: Ok(image(640, 200)),
    });
    assert_eq!(effect, Effect::ContentMeasured(Size::new(640.0, 200.0)));

    let effect = state.handle(Message::Loaded {
        side: Side::After,
        result: Ok(image(320, 480)),
    });
    assert_eq!(effect, Effect::ContentMeasured(Size::new(640.0, 480.0)));
    assert!(!state.is_loading());
}

#[tokio::test]
async fn file_sources_load_through_the_public_api() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("tiny.png");
    image_rs::RgbaImage::from_pixel(3, 2, image_rs::Rgba([255, 0, 0, 255]))
        .save(&path)
        .expect("Failed to write test image");

    let source = path.to_string_lossy().into_owned();
    let loaded = compare_lens::compare::source::load(source.into(), None)
        .await
        .expect("image should load");
    assert_eq!(loaded.natural_size(), Size::new(3.0, 2.0));
}
