use lib_game::*;
use macroquad::math::{Vec2, vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rush() -> Rush {
    Rush::new(RushCfg::default(), StdRng::seed_from_u64(0xBA7A7A))
}

fn rush_in(difficulty: Difficulty) -> Rush {
    let mut rush = rush();
    rush.start_session(difficulty);

    rush
}

fn pointing_at(x: f32, y: f32) -> HandLandmarks {
    HandLandmarks::pointing_at(from_screen(vec2(x, y)))
}

fn fist() -> HandLandmarks {
    HandLandmarks::fist_at(from_screen(vec2(400.0, 450.0)))
}

/// Puts an object so that it reaches `at` after one frame of falling.
fn drop_onto(rush: &mut Rush, kind: ObjectKind, at: Vec2) {
    let session = rush.session_mut().unwrap();
    let speed = session.difficulty.config().object_speed;

    session
        .objects
        .push(GameObject::new(kind, at - vec2(0.0, speed), 40.0));
}

fn caught(events: &[RushEvent]) -> Vec<(ObjectKind, CatchOutcome)> {
    events
        .iter()
        .filter_map(|ev| match *ev {
            RushEvent::Caught { kind, outcome, .. } => Some((kind, outcome)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_menu_to_running() {
    let mut rush = rush();

    let events = rush.step(None, &[MenuKey::Confirm]);
    assert!(events.is_empty());
    assert_eq!(rush.state(), FlowState::DifficultySelect { selected: None });
    assert!(rush.session().is_none());

    let events = rush.step(
        None,
        &[MenuKey::Difficulty(Difficulty::Medium), MenuKey::Start],
    );
    assert_eq!(events, [RushEvent::SessionStarted(Difficulty::Medium)]);

    let session = rush.session().unwrap();
    assert_eq!(session.lives, 3);
    assert_eq!(session.score, 0);
    assert_eq!(session.frame_count, 1);
}

#[test]
fn test_menus_do_not_simulate() {
    let mut rush = rush();

    for _ in 0..100 {
        rush.step(None, &[]);
    }

    assert!(rush.session().is_none());
    assert!(rush.particles().is_empty());
    assert_eq!(rush.state(), FlowState::MainMenu { cursor: 0 });
}

#[test]
fn test_easy_banana_then_coconut() {
    let mut rush = rush_in(Difficulty::Easy);
    let hand = pointing_at(400.0, 450.0);

    drop_onto(&mut rush, ObjectKind::Banana, vec2(400.0, 450.0));
    let events = rush.step(Some(&hand), &[]);
    assert_eq!(caught(&events), [(ObjectKind::Banana, CatchOutcome::Scored)]);
    assert_eq!(rush.session().unwrap().score, 1);

    drop_onto(&mut rush, ObjectKind::Coconut, vec2(400.0, 450.0));
    let events = rush.step(Some(&hand), &[]);
    assert_eq!(
        caught(&events),
        [(ObjectKind::Coconut, CatchOutcome::ScoreLost(1))]
    );

    let session = rush.session().unwrap();
    assert_eq!(session.score, 0);
    assert_eq!(session.lives, 5);
    assert!(session.objects.iter().all(|obj| !obj.caught));
    assert_eq!(rush.state(), FlowState::Running { difficulty: Difficulty::Easy });
}

#[test]
fn test_catch_needs_pointing() {
    let mut rush = rush_in(Difficulty::Easy);

    drop_onto(&mut rush, ObjectKind::Banana, vec2(400.0, 450.0));
    let events = rush.step(None, &[]);

    assert!(caught(&events).is_empty());
    let session = rush.session().unwrap();
    assert_eq!(session.score, 0);
    assert_eq!(session.objects.len(), 1);
}

#[test]
fn test_catch_spawns_particles() {
    let mut rush = rush_in(Difficulty::Easy);
    let hand = pointing_at(400.0, 450.0);

    drop_onto(&mut rush, ObjectKind::Banana, vec2(400.0, 450.0));
    rush.step(Some(&hand), &[]);
    assert_eq!(rush.particles().len(), rush.cfg().particles.burst_size);
    assert!(rush.particles().iter().all(|p| p.life == rush.cfg().particles.life));

    for _ in 1..rush.cfg().particles.life {
        rush.step(Some(&hand), &[]);
    }
    assert_eq!(rush.particles().len(), rush.cfg().particles.burst_size);

    rush.step(Some(&hand), &[]);
    assert!(rush.particles().is_empty());
}

#[test]
fn test_hard_bomb_ends_the_game() {
    let mut rush = rush_in(Difficulty::Hard);
    let hand = pointing_at(400.0, 450.0);

    drop_onto(&mut rush, ObjectKind::Bomb, vec2(400.0, 450.0));
    let events = rush.step(Some(&hand), &[]);

    assert_eq!(
        caught(&events),
        [(ObjectKind::Bomb, CatchOutcome::InstantGameOver)]
    );
    assert_eq!(events.last(), Some(&RushEvent::GameOver { score: 0 }));
    assert_eq!(rush.session().unwrap().lives, 0);
    assert_eq!(
        rush.state(),
        FlowState::GameOver {
            difficulty: Difficulty::Hard
        }
    );
}

#[test]
fn test_medium_bombs_clamp_lives() {
    let mut rush = rush_in(Difficulty::Medium);
    let hand = pointing_at(400.0, 450.0);

    drop_onto(&mut rush, ObjectKind::Bomb, vec2(400.0, 450.0));
    drop_onto(&mut rush, ObjectKind::Bomb, vec2(410.0, 450.0));
    let events = rush.step(Some(&hand), &[]);

    assert_eq!(caught(&events).len(), 2);
    assert_eq!(rush.session().unwrap().lives, 0);
    assert!(matches!(rush.state(), FlowState::GameOver { .. }));
}

#[test]
fn test_medium_miss_is_free() {
    let mut rush = rush_in(Difficulty::Medium);
    rush.session_mut()
        .unwrap()
        .objects
        .push(GameObject::new(ObjectKind::Banana, vec2(100.0, 590.0), 40.0));

    for _ in 0..40 {
        let events = rush.step(None, &[]);
        assert!(
            !events
                .iter()
                .any(|ev| matches!(ev, RushEvent::Missed { .. }))
        );
    }

    let session = rush.session().unwrap();
    assert_eq!(session.lives, 3);
    assert!(session.objects.iter().all(|obj| obj.pos.y < 600.0));
}

#[test]
fn test_hard_miss_costs_a_life() {
    let mut rush = rush_in(Difficulty::Hard);
    rush.session_mut()
        .unwrap()
        .objects
        .push(GameObject::new(ObjectKind::Banana, vec2(100.0, 597.0), 40.0));

    let events = rush.step(None, &[]);

    assert_eq!(events, [RushEvent::Missed { pos: vec2(100.0, 550.0) }]);
    assert_eq!(rush.session().unwrap().lives, 1);
    assert_eq!(rush.particles().len(), rush.cfg().particles.burst_size);
    assert!(rush.state().is_simulating());
}

#[test]
fn test_fist_pauses_and_pointing_resumes() {
    let mut rush = rush_in(Difficulty::Easy);
    let hand = pointing_at(400.0, 450.0);

    drop_onto(&mut rush, ObjectKind::Banana, vec2(400.0, 450.0));
    rush.session_mut()
        .unwrap()
        .objects
        .push(GameObject::new(ObjectKind::Coconut, vec2(200.0, 100.0), 40.0));
    rush.step(Some(&hand), &[]);

    let events = rush.step(Some(&fist()), &[]);
    assert_eq!(events, [RushEvent::Paused]);
    assert_eq!(
        rush.state(),
        FlowState::Paused {
            difficulty: Difficulty::Easy
        }
    );

    let frozen_session = rush.session().cloned();
    let frozen_pointer = *rush.pointer();
    let frozen_particles: Vec<_> = rush.particles().iter().copied().collect();

    for _ in 0..20 {
        rush.step(Some(&fist()), &[]);
        rush.step(None, &[]);
    }
    assert_eq!(rush.session().cloned(), frozen_session);
    assert_eq!(*rush.pointer(), frozen_pointer);
    assert!(rush.particles().iter().copied().eq(frozen_particles));

    let events = rush.step(Some(&hand), &[]);
    assert_eq!(events, [RushEvent::Resumed]);
    assert!(rush.state().is_simulating());
    assert_eq!(rush.session().unwrap().frame_count, 2);
}

#[test]
fn test_game_over_is_frozen() {
    let mut rush = rush_in(Difficulty::Hard);
    let hand = pointing_at(400.0, 450.0);

    drop_onto(&mut rush, ObjectKind::Coconut, vec2(400.0, 450.0));
    rush.step(Some(&hand), &[]);
    assert!(matches!(rush.state(), FlowState::GameOver { .. }));

    let frozen = rush.session().cloned();
    for _ in 0..10 {
        assert!(rush.step(Some(&hand), &[]).is_empty());
    }
    assert_eq!(rush.session().cloned(), frozen);
}

#[test]
fn test_restart_after_game_over() {
    let mut rush = rush_in(Difficulty::Hard);
    let hand = pointing_at(400.0, 450.0);

    drop_onto(&mut rush, ObjectKind::Banana, vec2(400.0, 450.0));
    rush.step(Some(&hand), &[]);
    drop_onto(&mut rush, ObjectKind::Bomb, vec2(400.0, 450.0));
    let events = rush.step(Some(&hand), &[]);
    assert_eq!(events.last(), Some(&RushEvent::GameOver { score: 1 }));

    let events = rush.step(None, &[MenuKey::Restart]);
    assert_eq!(events, [RushEvent::SessionStarted(Difficulty::Hard)]);

    let session = rush.session().unwrap();
    assert_eq!(session.score, 0);
    assert_eq!(session.lives, 2);
    assert_eq!(session.frame_count, 1);
    assert!(session.objects.is_empty());
    assert!(rush.particles().is_empty());
}

#[test]
fn test_leaving_drops_the_session() {
    let mut rush = rush_in(Difficulty::Easy);

    rush.step(Some(&fist()), &[]);
    let events = rush.step(None, &[MenuKey::Menu]);

    assert_eq!(events, [RushEvent::SessionEnded]);
    assert_eq!(rush.state(), FlowState::MainMenu { cursor: 0 });
    assert!(rush.session().is_none());
}

#[test]
fn test_quit_from_menu() {
    let mut rush = rush();
    assert!(!rush.quit_requested());

    let events = rush.step(None, &[MenuKey::Down, MenuKey::Down, MenuKey::Down, MenuKey::Confirm]);

    assert_eq!(events, [RushEvent::Quit]);
    assert!(rush.quit_requested());
}

#[test]
fn test_spawning_follows_the_interval() {
    let mut rush = rush_in(Difficulty::Hard);

    for frame in 1..=100u64 {
        rush.step(None, &[]);
        let expected = frame / 25;
        assert_eq!(
            rush.session().unwrap().objects.len() as u64,
            expected,
            "frame {frame}"
        );
    }
}

#[test]
fn test_pointer_jumps_mid_game() {
    let mut rush = rush_in(Difficulty::Easy);
    let hand = pointing_at(400.0, 100.0);

    rush.step(Some(&hand), &[]);
    let pointer = *rush.pointer();
    assert!(pointer.jump_active);
    assert_eq!(pointer.y, 450.0 - 17.0);
    assert_eq!(pointer.x, 400.0);
}
