use super::*;

fn scene() -> HeroIntro {
    HeroIntro::build(HeroIntroConfig {
        header_char_count: 12,
        logo_char_count: 6,
        footer_line_count: 2,
        label_line_count: 1,
    })
    .unwrap()
    .expect("scene should assemble")
}

#[test]
fn empty_header_split_skips_the_scene() {
    let config = HeroIntroConfig {
        header_char_count: 0,
        logo_char_count: 6,
        footer_line_count: 2,
        label_line_count: 1,
    };
    assert!(HeroIntro::build(config).unwrap().is_none());
}

#[test]
fn empty_secondary_collections_are_tolerated() {
    let config = HeroIntroConfig {
        header_char_count: 12,
        logo_char_count: 0,
        footer_line_count: 0,
        label_line_count: 0,
    };
    let scene = HeroIntro::build(config).unwrap().unwrap();
    let frame = scene.frame(Progress::new(0.5));
    assert!(frame.logo_chars.is_empty());
    assert!(frame.footer_lines.is_empty());
    assert!(frame.label_lines.is_empty());
    assert_eq!(frame.header_chars.len(), 12);
}

#[test]
fn timeline_start_is_fully_parked() {
    let frame = scene().frame(Progress::START);
    assert!(frame.header_chars.iter().all(|&y| y == 100.0));
    assert_eq!(frame.logo_opacity, 0.0);
    assert!(frame.logo_chars.iter().all(|&y| y == 100.0));
    assert!(frame.footer_lines.iter().all(|&y| y == 100.0));
    assert_eq!(frame.button_scale, 0.0);
    assert_eq!(frame.button_clip_radius, 0.0);
    assert!(frame.label_lines.iter().all(|&y| y == 100.0));
}

#[test]
fn timeline_end_is_fully_settled() {
    let frame = scene().frame(Progress::END);
    assert!(frame.header_chars.iter().all(|&y| y == 0.0));
    assert_eq!(frame.logo_opacity, 1.0);
    assert!(frame.logo_chars.iter().all(|&y| y == 0.0));
    assert!(frame.footer_lines.iter().all(|&y| y == 0.0));
    assert_eq!(frame.button_scale, 1.0);
    assert_eq!(frame.button_clip_radius, 100.0);
    assert!(frame.label_lines.iter().all(|&y| y == 0.0));
}

#[test]
fn header_chars_rise_in_index_order() {
    let frame = scene().frame(Progress::new(0.1));
    for pair in frame.header_chars.windows(2) {
        // Earlier chars are further along their rise toward 0.
        assert!(pair[0] <= pair[1]);
    }
    assert!(frame.header_chars[0] < 100.0);
}

#[test]
fn logo_opacity_snaps_at_its_band_start() {
    let scene = scene();
    assert_eq!(scene.frame(Progress::new(0.049)).logo_opacity, 0.0);
    assert_eq!(scene.frame(Progress::new(0.05)).logo_opacity, 1.0);
}

#[test]
fn button_pops_before_its_icon_finishes() {
    let scene = scene();
    let frame = scene.frame(Progress::new(0.7));
    // Button band (0.35..0.80) leads the clip band (0.40..0.85).
    assert!(frame.button_scale > frame.button_clip_radius / 100.0);
    assert!(frame.button_clip_radius > 0.0);
}

#[test]
fn frame_is_idempotent() {
    let scene = scene();
    for p in [0.0, 0.3, 0.62, 1.0] {
        assert_eq!(
            scene.frame(Progress::new(p)),
            scene.frame(Progress::new(p))
        );
    }
}
