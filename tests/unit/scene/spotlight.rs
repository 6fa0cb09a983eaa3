use super::*;
use crate::scene::sink::BufferSink;

fn desktop_scene() -> Spotlight {
    Spotlight::build(SpotlightConfig::new(
        20,
        5,
        4,
        Viewport::new(1920.0, 1080.0),
    ))
    .unwrap()
    .expect("scene should assemble")
}

#[test]
fn missing_elements_skip_the_scene() {
    // The skip paths emit warnings; render them through a real subscriber.
    let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
    let _guard = tracing::subscriber::set_default(subscriber);
    let viewport = Viewport::new(1920.0, 1080.0);
    assert!(
        Spotlight::build(SpotlightConfig::new(0, 5, 4, viewport))
            .unwrap()
            .is_none()
    );
    assert!(
        Spotlight::build(SpotlightConfig::new(20, 0, 4, viewport))
            .unwrap()
            .is_none()
    );
    assert!(
        Spotlight::build(SpotlightConfig::new(20, 5, 0, viewport))
            .unwrap()
            .is_none()
    );
}

#[test]
fn too_few_directions_is_a_validation_error() {
    let mut config = SpotlightConfig::new(20, 5, 4, Viewport::new(1920.0, 1080.0));
    config.directions.truncate(3);
    assert!(Spotlight::build(config).is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = SpotlightConfig::new(20, 5, 4, Viewport::new(1920.0, 1080.0));
    let back = SpotlightConfig::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(back.image_count, config.image_count);
    assert_eq!(back.directions, config.directions);
    assert!(SpotlightConfig::from_json("not json").is_err());
}

#[test]
fn frame_is_idempotent() {
    let scene = desktop_scene();
    for p in [0.0, 0.38, 0.54, 0.68, 0.86, 1.0] {
        assert_eq!(
            scene.frame(Progress::new(p)),
            scene.frame(Progress::new(p))
        );
    }
}

#[test]
fn outro_cascade_concrete_scenario() {
    // Band {0.50, 0.58}, 4 words, word 0.02, pause 0.025.
    let scene = desktop_scene();

    let at_start = scene.frame(Progress::new(0.50));
    assert!(at_start.outro_words.iter().all(|w| w.opacity == 0.0));

    let at_end = scene.frame(Progress::new(0.58));
    assert!(at_end.outro_words.iter().all(|w| w.opacity == 1.0));

    let halfway = scene.frame(Progress::new(0.54));
    assert_eq!(halfway.outro_words[0].opacity, 1.0);
    assert_eq!(halfway.outro_words[0].color, Some(Rgb::BLACK));
    assert!(halfway.outro_words[3].opacity < 1.0);
}

#[test]
fn background_sweeps_to_white_over_first_half_of_cascade() {
    let scene = desktop_scene();
    assert_eq!(scene.frame(Progress::new(0.49)).background, Rgb::BLACK);
    let mid = scene.frame(Progress::new(0.52)).background;
    assert_eq!(mid, Rgb::new(128, 128, 128));
    assert_eq!(scene.frame(Progress::new(0.55)).background, Rgb::WHITE);
    assert_eq!(scene.frame(Progress::new(0.9)).background, Rgb::WHITE);
}

#[test]
fn intro_words_fade_band_terminals() {
    let scene = desktop_scene();
    assert!(
        scene
            .frame(Progress::new(0.2))
            .intro_words
            .iter()
            .all(|&o| o == 1.0)
    );
    assert!(
        scene
            .frame(Progress::new(0.47))
            .intro_words
            .iter()
            .all(|&o| o == 0.0)
    );
    // Mid-band: earlier words are further along their fade.
    let mid = scene.frame(Progress::new(0.425)).intro_words;
    for pair in mid.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn outro_header_chain_follows_authored_thresholds() {
    let scene = desktop_scene();

    let hold = scene.frame(Progress::new(0.6)).outro_header;
    assert_eq!(hold, HeaderPose {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0
    });

    let fading = scene.frame(Progress::new(0.68)).outro_header;
    assert!((fading.opacity - 0.5).abs() < 1e-9);
    assert!((fading.y - -15.0).abs() < 1e-9);

    let blank = scene.frame(Progress::new(0.75)).outro_header;
    assert_eq!(blank.opacity, 0.0);
    assert_eq!(blank.y, -30.0);

    let tail = scene.frame(Progress::new(0.95)).outro_header;
    assert_eq!(tail, HeaderPose {
        opacity: 0.0,
        y: -100.0,
        scale: 0.9
    });
}

#[test]
fn companies_panel_reveal_band() {
    let scene = desktop_scene();

    let before = scene.frame(Progress::new(0.8)).companies;
    assert_eq!(before.opacity, 0.0);
    assert_eq!(before.y, 50.0);
    assert!(!before.interactive);

    let mid = scene.frame(Progress::new(0.865)).companies;
    assert!((mid.opacity - 0.5).abs() < 1e-9);
    assert!((mid.y - 25.0).abs() < 1e-9);
    assert!(!mid.interactive);

    let late = scene.frame(Progress::new(0.875)).companies;
    assert!(late.interactive);

    let after = scene.frame(Progress::new(1.0)).companies;
    assert_eq!(after.opacity, 1.0);
    assert_eq!(after.y, 0.0);
    assert!(after.interactive);
}

#[test]
fn images_launch_in_index_order() {
    let scene = desktop_scene();
    // Stagger 0.03: at p = 0.04 image 0 is in flight, image 5 still parked.
    let frame = scene.frame(Progress::new(0.04));
    assert!(frame.images[0].position.z > -1000.0);
    assert_eq!(frame.images[5].position.z, -1000.0);
    assert_eq!(frame.images[5].scale, 0.0);
}

#[test]
fn apply_images_fills_every_slot() {
    let scene = desktop_scene();
    let mut sink = BufferSink::new(scene.image_count() + 1);
    scene.apply_images(Progress::new(0.5), &mut sink);
    let frame = scene.frame(Progress::new(0.5));
    for i in 0..scene.image_count() {
        assert_eq!(sink.get(scene.image_slot(i)).unwrap(), &frame.images[i]);
    }
    assert_eq!(sink.get(scene.cover_slot()).unwrap(), &frame.cover);
}

#[test]
fn undersized_sink_degrades_without_panicking() {
    let scene = desktop_scene();
    // Room for half the images and no cover slot.
    let mut sink = BufferSink::new(scene.image_count() / 2);
    scene.apply_images(Progress::new(0.5), &mut sink);
    let frame = scene.frame(Progress::new(0.5));
    assert_eq!(sink.get(scene.image_slot(0)).unwrap(), &frame.images[0]);
    assert!(sink.get(scene.cover_slot()).is_none());
}

#[test]
fn out_of_range_progress_clamps_to_terminals() {
    let scene = desktop_scene();
    assert_eq!(
        scene.frame(Progress::new(-1.0)),
        scene.frame(Progress::new(0.0))
    );
    assert_eq!(
        scene.frame(Progress::new(2.0)),
        scene.frame(Progress::new(1.0))
    );
}
