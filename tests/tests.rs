use gravsim::simulation::engine::{Command, Engine};
use gravsim::simulation::forces::{Attraction, PlanetaryGravity};
use gravsim::simulation::integrator::euler_step;
use gravsim::simulation::params::{SimContext, DEFAULT_GRAVITY_MULTIPLIER, FORCE_EPSILON};
use gravsim::simulation::scenario::Scenario;
use gravsim::simulation::states::{sphere_mass, Body, BodyError, NVec2, Registry};
use gravsim::ScenarioConfig;

/// The anchored reference body from the shipped scenario.
fn earth() -> Body {
    Body::new(
        "earth",
        NVec2::new(500.0, 330.0),
        66.0,
        5.51,
        [0.0, 0.753, 0.639],
        NVec2::zeros(),
    )
    .unwrap()
    .anchored()
}

/// The orbiting body from the shipped scenario.
fn moon() -> Body {
    Body::new(
        "moon",
        NVec2::new(500.0, 480.0),
        17.0,
        3.34,
        [0.663, 0.663, 0.663],
        NVec2::new(10.0, 0.0),
    )
    .unwrap()
}

fn earth_moon_registry() -> Registry {
    let mut registry = Registry::new();
    registry.add(earth());
    registry.add(moon());
    registry
}

fn test_ctx(multiplier: f64) -> SimContext {
    SimContext::new(multiplier)
}

fn gravity() -> PlanetaryGravity {
    PlanetaryGravity {
        min_distance: 1.0e-6,
    }
}

/// YAML matching the shipped earth/moon scenario, with the optional fields
/// left to their defaults where the format allows.
const EARTH_MOON_YAML: &str = r#"
engine:
  width: 1000.0
  height: 660.0
  tick_rate: 60.0

parameters:
  gravity_multiplier: 10000.0
  multiplier_step: 100.0
  min_distance: 1.0e-6

bodies:
  - name: earth
    x: [ 500.0, 330.0 ]
    radius: 66.0
    density: 5.51
    color: [ 0.0, 0.753, 0.639 ]
    anchor: true
  - name: moon
    x: [ 500.0, 480.0 ]
    v: [ 10.0, 0.0 ]
    radius: 17.0
    density: 3.34
    color: [ 0.663, 0.663, 0.663 ]
"#;

// ==================================================================================
// Body construction and mass
// ==================================================================================

#[test]
fn mass_formula_regression() {
    // (4/3) * pi * (radius * 1e7)^3 * density, pinned for the two shipped bodies
    let m_earth = sphere_mass(66.0, 5.51);
    let m_moon = sphere_mass(17.0, 3.34);

    let expected_earth = 6.63547496222112682e27;
    let expected_moon = 6.87356177622258902e25;

    assert!(((m_earth - expected_earth) / expected_earth).abs() < 1e-12);
    assert!(((m_moon - expected_moon) / expected_moon).abs() < 1e-12);
    assert!(m_earth > 0.0 && m_moon > 0.0);
}

#[test]
fn body_mass_matches_formula() {
    let b = moon();
    assert_eq!(b.mass, sphere_mass(17.0, 3.34));
}

#[test]
fn non_positive_radius_rejected() {
    let result = Body::new(
        "bad",
        NVec2::zeros(),
        0.0,
        1.0,
        [1.0, 1.0, 1.0],
        NVec2::zeros(),
    );
    assert!(matches!(
        result,
        Err(BodyError::InvalidBodyParameters { .. })
    ));
}

#[test]
fn non_positive_density_rejected() {
    let result = Body::new(
        "bad",
        NVec2::zeros(),
        10.0,
        -5.51,
        [1.0, 1.0, 1.0],
        NVec2::zeros(),
    );
    assert!(matches!(
        result,
        Err(BodyError::InvalidBodyParameters { .. })
    ));
}

#[test]
fn center_is_top_left_plus_radius() {
    let b = earth();
    let tl = b.top_left();
    let c = b.center();
    assert_eq!(c.x, tl.x + b.radius);
    assert_eq!(c.y, tl.y + b.radius);
}

// ==================================================================================
// Impulse application
// ==================================================================================

#[test]
fn apply_force_along_x_adds_to_vx_only() {
    let mut b = moon();
    let (vx0, vy0) = (b.v.x, b.v.y);

    b.apply_force(2.5, 0.0);

    assert_eq!(b.v.x, vx0 + 2.5);
    assert_eq!(b.v.y, vy0);
}

#[test]
fn apply_force_below_epsilon_is_noop() {
    let mut b = moon();
    let v0 = b.v;

    b.apply_force(FORCE_EPSILON * 0.9, 0.0);

    assert_eq!(b.v, v0);
}

#[test]
fn apply_force_at_exact_epsilon_applies() {
    let mut b = moon();
    let vx0 = b.v.x;

    b.apply_force(FORCE_EPSILON, 0.0);

    assert_eq!(b.v.x, vx0 + FORCE_EPSILON);
}

#[test]
fn apply_force_flips_y_for_screen_space() {
    // Angle pi/2 points up mathematically, which is -y on screen.
    let mut b = moon();
    let vy0 = b.v.y;

    b.apply_force(1.0, std::f64::consts::FRAC_PI_2);

    assert!(b.v.y < vy0);
}

// ==================================================================================
// Gravity
// ==================================================================================

#[test]
fn no_peers_means_no_force() {
    let mut b = moon();
    let v0 = b.v;
    let ctx = test_ctx(DEFAULT_GRAVITY_MULTIPLIER);

    gravity().pull(&ctx, &mut b, &[]);

    assert_eq!(b.v, v0);
}

#[test]
fn single_body_registry_has_empty_peers() {
    let mut registry = Registry::new();
    registry.add(moon());

    assert!(registry.peers_of(0).is_empty());
}

#[test]
fn peers_exclude_the_querying_body() {
    let registry = earth_moon_registry();

    let peers = registry.peers_of(1);
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0].mass, sphere_mass(66.0, 5.51));
}

#[test]
fn doubling_multiplier_doubles_impulse() {
    let registry = earth_moon_registry();
    let peers = registry.peers_of(1);
    let law = gravity();

    let mut a = moon();
    let mut b = moon();
    law.pull(&test_ctx(10_000.0), &mut a, &peers);
    law.pull(&test_ctx(20_000.0), &mut b, &peers);

    let dv_a = (a.v.y - 0.0).abs();
    let dv_b = (b.v.y - 0.0).abs();
    assert!((dv_b / dv_a - 2.0).abs() < 1e-12, "ratio {}", dv_b / dv_a);
}

#[test]
fn pull_is_toward_the_peer() {
    // Moon sits below earth on screen (larger y), so the pull is up-screen:
    // velocity.y must go negative.
    let registry = earth_moon_registry();
    let peers = registry.peers_of(1);

    let mut b = moon();
    gravity().pull(&test_ctx(DEFAULT_GRAVITY_MULTIPLIER), &mut b, &peers);

    assert!(b.v.y < 0.0);
}

#[test]
fn coincident_centers_stay_finite() {
    let mut registry = Registry::new();
    registry.add(earth());
    let mut b = Body::new(
        "twin",
        NVec2::new(500.0, 330.0),
        17.0,
        3.34,
        [1.0, 0.0, 0.0],
        NVec2::zeros(),
    )
    .unwrap();

    let peers = registry.peers_of(usize::MAX); // everyone, b is not registered
    gravity().pull(&test_ctx(DEFAULT_GRAVITY_MULTIPLIER), &mut b, &peers);

    assert!(b.v.x.is_finite());
    assert!(b.v.y.is_finite());
}

// ==================================================================================
// Integration
// ==================================================================================

#[test]
fn golden_single_tick() {
    // One tick of the shipped scenario with the default multiplier. The
    // separation is 150 px straight down, so the whole impulse lands on the
    // y axis and the moon keeps its 10 px/tick drift in x.
    let mut registry = earth_moon_registry();
    let ctx = test_ctx(DEFAULT_GRAVITY_MULTIPLIER);

    euler_step(&mut registry, &gravity(), &ctx);

    let moon = &registry.bodies()[1];
    assert!((moon.x.x - 510.0).abs() < 1e-9, "x = {}", moon.x.x);
    assert!(
        (moon.x.y - 437.095024687039540).abs() < 1e-9,
        "y = {}",
        moon.x.y
    );
}

#[test]
fn anchor_velocity_is_never_perturbed() {
    let mut registry = earth_moon_registry();
    let ctx = test_ctx(DEFAULT_GRAVITY_MULTIPLIER);

    for _ in 0..10 {
        euler_step(&mut registry, &gravity(), &ctx);
    }

    let anchor = &registry.bodies()[0];
    assert_eq!(anchor.v, NVec2::zeros());
    assert_eq!(anchor.x, NVec2::new(500.0, 330.0));
}

#[test]
fn anchor_with_initial_velocity_drifts() {
    let mut registry = Registry::new();
    let drifting = Body::new(
        "drifter",
        NVec2::new(0.0, 0.0),
        10.0,
        1.0,
        [1.0, 1.0, 1.0],
        NVec2::new(3.0, -2.0),
    )
    .unwrap()
    .anchored();
    registry.add(drifting);

    euler_step(&mut registry, &gravity(), &test_ctx(DEFAULT_GRAVITY_MULTIPLIER));

    let b = &registry.bodies()[0];
    assert_eq!(b.x, NVec2::new(3.0, -2.0));
    assert_eq!(b.v, NVec2::new(3.0, -2.0));
}

#[test]
fn empty_registry_tick_is_noop() {
    let mut registry = Registry::new();
    euler_step(&mut registry, &gravity(), &test_ctx(DEFAULT_GRAVITY_MULTIPLIER));
    assert!(registry.is_empty());
}

// ==================================================================================
// Engine control
// ==================================================================================

fn test_engine() -> Engine {
    Engine::new(
        earth_moon_registry(),
        test_ctx(DEFAULT_GRAVITY_MULTIPLIER),
        gravity(),
    )
}

#[test]
fn paused_engine_does_not_step() {
    let mut engine = test_engine();
    engine.handle(Command::PauseToggle);

    let stepped = engine.tick();

    assert!(!stepped);
    assert_eq!(engine.registry.bodies()[1].x, NVec2::new(500.0, 480.0));
}

#[test]
fn single_step_while_paused_advances_one_tick() {
    let mut engine = test_engine();
    engine.handle(Command::PauseToggle);

    engine.handle(Command::SingleStep);
    assert!(engine.tick());
    let after_one = engine.registry.bodies()[1].x;
    assert_ne!(after_one, NVec2::new(500.0, 480.0));

    // The step request is consumed; the next tick freezes again.
    assert!(!engine.tick());
    assert_eq!(engine.registry.bodies()[1].x, after_one);
}

#[test]
fn multiplier_nudge_is_unclamped() {
    let mut engine = test_engine();
    for _ in 0..200 {
        engine.nudge_multiplier(-100.0);
    }
    assert_eq!(engine.ctx.gravity_multiplier, -10_000.0);
}

// ==================================================================================
// Scenario lifecycle
// ==================================================================================

#[test]
fn scenario_yaml_parses_with_defaults() {
    let cfg: ScenarioConfig = serde_yaml::from_str(EARTH_MOON_YAML).unwrap();

    assert_eq!(cfg.bodies.len(), 2);
    assert!(cfg.bodies[0].anchor);
    assert_eq!(cfg.bodies[0].v, [0.0, 0.0]); // omitted velocity defaults to rest
    assert!(!cfg.bodies[1].anchor);
    assert_eq!(cfg.engine.tick_rate, 60.0);
}

#[test]
fn restart_does_not_leak_bodies() {
    let cfg: ScenarioConfig = serde_yaml::from_str(EARTH_MOON_YAML).unwrap();
    let mut scenario = Scenario::build_scenario(cfg).unwrap();
    assert_eq!(scenario.engine.registry.len(), 2);

    for _ in 0..5 {
        scenario.engine.tick();
    }
    scenario.engine.nudge_multiplier(700.0);

    scenario.reset().unwrap();

    assert_eq!(scenario.engine.registry.len(), 2);
    assert_eq!(
        scenario.engine.ctx.gravity_multiplier,
        DEFAULT_GRAVITY_MULTIPLIER
    );
    assert_eq!(
        scenario.engine.registry.bodies()[1].x,
        NVec2::new(500.0, 480.0)
    );
    assert!(!scenario.engine.ctx.paused);
}

#[test]
fn display_multiplier_is_human_scaled() {
    let mut ctx = test_ctx(DEFAULT_GRAVITY_MULTIPLIER);
    assert_eq!(ctx.display_multiplier(), 1.0);

    ctx.gravity_multiplier += 5_000.0;
    assert_eq!(ctx.display_multiplier(), 1.5);
}
