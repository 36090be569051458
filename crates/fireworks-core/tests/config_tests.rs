// Configuration validation and the small value types around it.

use fireworks_core::constants::*;
use fireworks_core::{
    ConfigError, DVec2, Hsla, ParticleParams, ProjectileParams, RandomRange, Simulation,
    SimulationConfig, ToneProfile, Trail,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn default_config_is_valid() {
    assert_eq!(SimulationConfig::default().validate(), Ok(()));
}

#[test]
fn default_config_matches_constants() {
    let c = SimulationConfig::default();
    assert_eq!(c.spawn_interval, 20);
    assert_eq!(c.particles_per_burst, 30);
    assert_eq!(c.manual_burst_size, 5);
    assert_eq!(c.fade_opacity, 0.5);
    assert_eq!(c.projectile.start_speed, 2.0);
    assert_eq!(c.projectile.acceleration, 1.05);
    assert_eq!(c.particle.friction, 0.95);
    assert_eq!(c.particle.gravity, 1.0);
    assert_eq!(c.particle.decay, RandomRange::new(0.015, 0.03));
    assert_eq!(c.particle.speed, RandomRange::new(1.0, 10.0));
    assert_eq!(PROJECTILE_TRAIL_LEN, 3);
    assert_eq!(PARTICLE_TRAIL_LEN, 5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(PROJECTILE_ACCELERATION > 1.0);
    assert!(PARTICLE_FRICTION > 0.0 && PARTICLE_FRICTION < 1.0);
    assert!(PARTICLE_DECAY_MIN > 0.0 && PARTICLE_DECAY_MIN < PARTICLE_DECAY_MAX);
    assert!(TARGET_RADIUS_MIN < TARGET_RADIUS_MAX);
    assert!(TONE_END_HZ > 0.0 && TONE_END_HZ < TONE_START_HZ);
    assert!(TONE_END_GAIN > 0.0 && TONE_END_GAIN < TONE_START_GAIN);
}

#[test]
fn inverted_range_is_rejected() {
    let config = SimulationConfig {
        particle: ParticleParams {
            decay: RandomRange::new(0.03, 0.015),
            ..ParticleParams::default()
        },
        ..SimulationConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvertedRange {
            name: "particle decay",
            min: 0.03,
            max: 0.015,
        })
    );
}

#[test]
fn out_of_bounds_values_are_rejected() {
    let cases = [
        SimulationConfig {
            fade_opacity: 1.5,
            ..SimulationConfig::default()
        },
        SimulationConfig {
            projectile: ProjectileParams {
                acceleration: 1.0,
                ..ProjectileParams::default()
            },
            ..SimulationConfig::default()
        },
        SimulationConfig {
            particle: ParticleParams {
                friction: 1.0,
                ..ParticleParams::default()
            },
            ..SimulationConfig::default()
        },
        SimulationConfig {
            particle: ParticleParams {
                decay: RandomRange::new(0.0, 0.03),
                ..ParticleParams::default()
            },
            ..SimulationConfig::default()
        },
        SimulationConfig {
            fade_opacity: f64::NAN,
            ..SimulationConfig::default()
        },
        SimulationConfig {
            hue_step: f64::NAN,
            ..SimulationConfig::default()
        },
        SimulationConfig {
            initial_hue: f64::INFINITY,
            ..SimulationConfig::default()
        },
        SimulationConfig {
            particle: ParticleParams {
                gravity: f64::INFINITY,
                ..ParticleParams::default()
            },
            ..SimulationConfig::default()
        },
        SimulationConfig {
            particle: ParticleParams {
                hue_jitter: f64::NAN,
                ..ParticleParams::default()
            },
            ..SimulationConfig::default()
        },
        SimulationConfig {
            particle: ParticleParams {
                speed: RandomRange::new(1.0, f64::INFINITY),
                ..ParticleParams::default()
            },
            ..SimulationConfig::default()
        },
        SimulationConfig {
            projectile: ProjectileParams {
                brightness: RandomRange::new(f64::NAN, 70.0),
                ..ProjectileParams::default()
            },
            ..SimulationConfig::default()
        },
    ];
    for config in cases {
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfBounds { .. })
        ));
        assert!(Simulation::new(config, DVec2::new(100.0, 100.0), 1).is_err());
    }
}

#[test]
fn config_error_messages_name_the_field() {
    let err = ConfigError::OutOfBounds {
        name: "particle.friction",
        value: 1.0,
        expected: "0 < x < 1",
    };
    assert_eq!(
        err.to_string(),
        "particle.friction = 1 is out of bounds (expected 0 < x < 1)"
    );
}

#[test]
fn random_range_samples_stay_inside() {
    let mut rng = StdRng::seed_from_u64(99);
    let range = RandomRange::new(-5.0, 5.0);
    for _ in 0..1000 {
        assert!(range.contains(range.sample(&mut rng)));
    }
}

#[test]
fn collapsed_random_range_returns_min() {
    let mut rng = StdRng::seed_from_u64(1);
    let range = RandomRange::new(3.0, 3.0);
    assert_eq!(range.sample(&mut rng), 3.0);
}

#[test]
fn trail_shifts_newest_first_and_keeps_length() {
    let mut trail: Trail<3> = Trail::filled(DVec2::ZERO);
    for i in 1..=5 {
        trail.push_front(DVec2::splat(i as f64));
        assert_eq!(trail.len(), 3);
    }
    assert_eq!(
        trail.points(),
        &[DVec2::splat(5.0), DVec2::splat(4.0), DVec2::splat(3.0)]
    );
    assert_eq!(trail.oldest(), Some(DVec2::splat(3.0)));
}

#[test]
fn hsla_css_folds_hue_and_clamps_alpha() {
    assert_eq!(
        Hsla::new(120.5, 100.0, 60.0, 1.0).to_css(),
        "hsla(120.50, 100%, 60.00%, 1.000)"
    );
    assert_eq!(
        Hsla::new(-30.0, 100.0, 55.5, 0.25).to_css(),
        "hsla(330.00, 100%, 55.50%, 0.250)"
    );
    assert_eq!(
        Hsla::new(370.0, 100.0, 50.0, -0.1).to_css(),
        "hsla(10.00, 100%, 50.00%, 0.000)"
    );
}

#[test]
fn non_finite_values_name_the_field() {
    let config = SimulationConfig {
        hue_step: f64::NAN,
        ..SimulationConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::OutOfBounds {
            name: "hue_step",
            expected: "finite",
            ..
        }
    ));

    let config = SimulationConfig {
        particle: ParticleParams {
            speed: RandomRange::new(1.0, f64::INFINITY),
            ..ParticleParams::default()
        },
        ..SimulationConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::OutOfBounds {
            name: "particle speed",
            value: f64::INFINITY,
            expected: "finite bounds",
        })
    );
    assert!(!RandomRange::new(0.0, f64::NAN).is_finite());
    assert!(RandomRange::new(0.0, 1.0).is_finite());
}

#[test]
fn tone_profile_defaults_to_decaying_saw() {
    let tone = ToneProfile::default();
    assert_eq!(tone.start_frequency_hz, 100.0);
    assert_eq!(tone.start_gain, 0.1);
    assert_eq!(tone.duration_sec, 0.5);
    assert!(tone.end_frequency_hz < tone.start_frequency_hz);
    assert!(tone.end_gain < tone.start_gain);
}
