// Host-side tests for pointer routing onto the running effect.

mod common;

use common::{engine_with, tick_at};
use glam::Vec2;
use lectura_core::effects::{Balloon, Balloons, Bubble, Bubbles};
use lectura_core::interaction::{route_click, route_hover};
use lectura_core::{
    EffectConfig, EffectKind, EffectScene, EffectSession, Generation, LifecycleState, Rgba,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

fn bubble_at(x: f32, y: f32, size: f32) -> Bubble {
    Bubble {
        pos: Vec2::new(x, y),
        size,
        speed: 1.0,
        sway: 0.0,
        sway_offset: 0.0,
        pop: false,
        pop_progress: 0.0,
    }
}

fn session(scene: EffectScene) -> EffectSession {
    EffectSession {
        generation: Generation(1),
        scene,
        start_ms: 0.0,
        animation_duration_ms: 4000.0,
        cooldown_ms: 1000.0,
        interactive: true,
    }
}

fn bubbles(list: Vec<Bubble>) -> EffectSession {
    session(EffectScene::Bubbles(Bubbles { bubbles: list }))
}

fn bubble_state(s: &EffectSession, i: usize) -> (bool, f32) {
    match &s.scene {
        EffectScene::Bubbles(b) => (b.bubbles[i].pop, b.bubbles[i].pop_progress),
        _ => panic!("not bubbles"),
    }
}

#[test]
fn clicking_a_bubble_centre_pops_it() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = bubbles(vec![bubble_at(200.0, 300.0, 30.0)]);
    assert!(route_click(
        &mut s,
        LifecycleState::Active,
        Vec2::new(200.0, 300.0),
        &mut rng
    ));
    assert_eq!(bubble_state(&s, 0), (true, 0.0));
}

#[test]
fn popped_bubble_animates_on_the_next_tick() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = bubbles(vec![bubble_at(200.0, 300.0, 30.0)]);
    route_click(&mut s, LifecycleState::Active, Vec2::new(200.0, 300.0), &mut rng);
    let step = lectura_core::Step {
        bounds: lectura_core::Bounds::new(800.0, 600.0),
        elapsed_ms: 100.0,
        recycle: true,
    };
    s.scene.effect_mut().update(&step, &mut rng);
    let (pop, progress) = bubble_state(&s, 0);
    assert!(pop);
    assert!((progress - 0.1).abs() < 1e-6);
}

#[test]
fn far_click_leaves_every_bubble_alone() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = bubbles(vec![
        bubble_at(100.0, 100.0, 20.0),
        bubble_at(300.0, 100.0, 20.0),
    ]);
    route_click(&mut s, LifecycleState::Active, Vec2::new(700.0, 500.0), &mut rng);
    assert!(!bubble_state(&s, 0).0);
    assert!(!bubble_state(&s, 1).0);
}

#[test]
fn overlapping_hit_goes_to_the_nearest_bubble() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = bubbles(vec![
        bubble_at(100.0, 100.0, 40.0),
        bubble_at(120.0, 100.0, 40.0),
    ]);
    route_click(&mut s, LifecycleState::Active, Vec2::new(118.0, 100.0), &mut rng);
    assert!(!bubble_state(&s, 0).0);
    assert!(bubble_state(&s, 1).0);
}

#[test]
fn balloon_pop_fans_out_shards() {
    let mut rng = StdRng::seed_from_u64(1);
    let balloon = Balloon {
        pos: Vec2::new(400.0, 200.0),
        size: 60.0,
        color: Rgba::WHITE,
        speed: 1.0,
        sway: 0.0,
        sway_offset: 0.0,
        popped: false,
        pop_progress: 0.0,
        shards: SmallVec::new(),
    };
    let mut s = session(EffectScene::Balloons(Balloons {
        balloons: vec![balloon],
    }));
    assert!(route_hover(&s, LifecycleState::Active, Vec2::new(400.0, 200.0)));
    route_click(&mut s, LifecycleState::Active, Vec2::new(400.0, 200.0), &mut rng);
    let EffectScene::Balloons(b) = &s.scene else {
        panic!("not balloons");
    };
    assert!(b.balloons[0].popped);
    assert_eq!(b.balloons[0].shards.len(), lectura_core::constants::BALLOON_SHARDS);
    // popped balloons are no longer targets
    assert!(!route_hover(&s, LifecycleState::Active, Vec2::new(400.0, 200.0)));
}

#[test]
fn pointer_is_ignored_outside_the_active_state() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = bubbles(vec![bubble_at(200.0, 300.0, 30.0)]);
    let at = Vec2::new(200.0, 300.0);
    for state in [LifecycleState::Idle, LifecycleState::Cooldown] {
        assert!(!route_click(&mut s, state, at, &mut rng));
        assert!(!route_hover(&s, state, at));
    }
    assert!(!route_click(
        &mut s,
        LifecycleState::Active,
        Vec2::new(f32::NAN, 0.0),
        &mut rng
    ));
    assert_eq!(bubble_state(&s, 0), (false, 0.0));
}

#[test]
fn hover_reports_objects_under_the_pointer() {
    let s = bubbles(vec![bubble_at(200.0, 300.0, 30.0)]);
    assert!(route_hover(&s, LifecycleState::Active, Vec2::new(210.0, 305.0)));
    assert!(!route_hover(&s, LifecycleState::Active, Vec2::new(260.0, 300.0)));
}

#[test]
fn engine_routes_clicks_to_the_running_effect() {
    let mut engine = engine_with(EffectConfig::new(true, 1, 1000.0, 500.0));
    engine.start_effect(EffectKind::Bubbles);
    let target = match engine.session().map(|s| &s.scene) {
        Some(EffectScene::Bubbles(b)) => b.bubbles[0].center(),
        _ => panic!("bubbles not running"),
    };
    assert!(engine.pointer_hover(target.x, target.y));
    assert!(engine.pointer_click(target.x, target.y));
    let popped = match engine.session().map(|s| &s.scene) {
        Some(EffectScene::Bubbles(b)) => b.bubbles.iter().filter(|b| b.pop).count(),
        _ => 0,
    };
    assert_eq!(popped, 1);

    tick_at(&mut engine, 1001.0);
    assert!(!engine.pointer_click(target.x, target.y));
}
