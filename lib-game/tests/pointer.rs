use lib_game::*;
use macroquad::math::ivec2;

fn pointing_at_px(x: i32, y: i32) -> HandSample {
    HandSample {
        pointing: true,
        fist_closed: false,
        raw_tip: Some(ivec2(x, y)),
    }
}

fn pointer() -> Pointer {
    Pointer::new(config::sections::Pointer::default())
}

#[test]
fn test_starts_centered_on_baseline() {
    let pointer = pointer();

    assert_eq!(pointer.x, SCREEN_WIDTH / 2.0);
    assert_eq!(pointer.y, 450.0);
    assert_eq!(pointer.baseline(), 450.0);
    assert!(!pointer.jump_active);
}

#[test]
fn test_smoothing_moves_a_quarter() {
    let mut pointer = pointer();

    let pos = pointer.advance(&pointing_at_px(600, 500), 1);
    assert_eq!(pos.x, 450.0);

    let pos = pointer.advance(&pointing_at_px(600, 500), 2);
    assert_eq!(pos.x, 487.5);
}

#[test]
fn test_smoothing_equilibrium() {
    let mut pointer = pointer();

    for frame in 0..10 {
        let pos = pointer.advance(&pointing_at_px(400, 500), frame);
        assert_eq!(pos.x, 400.0);
    }
}

#[test]
fn test_converges_to_target() {
    let mut pointer = pointer();

    for frame in 0..100 {
        pointer.advance(&pointing_at_px(100, 500), frame);
    }

    assert!((pointer.x - 100.0).abs() < 0.01);
}

#[test]
fn test_no_tip_holds_position() {
    let mut pointer = pointer();
    pointer.advance(&pointing_at_px(600, 500), 1);
    let held = pointer.x;

    let pos = pointer.advance(&HandSample::NO_HAND, 2);
    assert_eq!(pos.x, held);
    assert_eq!(pos.y, pointer.baseline());
}

#[test]
fn test_low_tip_does_not_jump() {
    let mut pointer = pointer();

    pointer.advance(&pointing_at_px(400, 200), 100);
    assert!(!pointer.jump_active);
    assert_eq!(pointer.y, pointer.baseline());
}

#[test]
fn test_jump_trajectory() {
    let mut pointer = pointer();
    let baseline = pointer.baseline();

    let pos = pointer.advance(&pointing_at_px(400, 100), 100);
    assert!(pointer.jump_active);
    assert_eq!(pointer.last_jump_frame, 100);
    // One integration step already happened: -18 + 1
    assert_eq!(pointer.jump_velocity, -17.0);
    assert_eq!(pos.y, baseline - 17.0);

    let mut frames = 1;
    let mut apex = pos.y;
    while pointer.jump_active {
        let pos = pointer.advance(&HandSample::NO_HAND, 100 + frames);
        apex = apex.min(pos.y);
        frames += 1;
        assert!(frames < 100, "jump never landed");
    }

    // Sum of 17 + 16 + ... + 1
    assert_eq!(apex, baseline - 153.0);
    assert_eq!(pointer.y, baseline);
    assert_eq!(pointer.jump_velocity, 0.0);
    // Symmetric parabola: 17 frames up, one at the apex, 17 down
    assert_eq!(frames, 35);
}

#[test]
fn test_jump_lands_exactly_when_reaching_baseline() {
    let mut pointer = pointer();
    let baseline = pointer.baseline();
    pointer.advance(&pointing_at_px(400, 100), 100);

    let mut frame = 101;
    while pointer.jump_active {
        let before = pointer.y;
        let velocity = pointer.jump_velocity + 1.0;
        pointer.advance(&HandSample::NO_HAND, frame);
        frame += 1;

        let integrated = before + velocity;
        assert_eq!(pointer.jump_active, integrated < baseline);
    }
}

#[test]
fn test_jump_cooldown() {
    let mut pointer = pointer();
    let high = pointing_at_px(400, 50);

    pointer.advance(&high, 100);
    let mut frame = 101;
    while pointer.jump_active {
        pointer.advance(&high, frame);
        frame += 1;
    }
    // Landed after 34 more frames, which is past the cooldown,
    // so holding the finger up jumps again right away.
    assert_eq!(frame, 135);
    pointer.advance(&high, frame);
    assert!(pointer.jump_active);
    assert_eq!(pointer.last_jump_frame, 135);
}

#[test]
fn test_jump_cooldown_blocks_early_retrigger() {
    let mut pointer = Pointer::new(config::sections::Pointer {
        jump_strength: -2.0,
        ..Default::default()
    });
    let high = pointing_at_px(400, 50);

    pointer.advance(&high, 10);
    assert!(pointer.jump_active);
    // -2 + 1 = -1, then 0, then +1 lands.
    pointer.advance(&high, 11);
    pointer.advance(&high, 12);
    assert!(!pointer.jump_active);

    for frame in 13..35 {
        pointer.advance(&high, frame);
        assert!(!pointer.jump_active, "jumped again on frame {frame}");
    }

    pointer.advance(&high, 35);
    assert!(pointer.jump_active);
    assert_eq!(pointer.last_jump_frame, 35);
}
