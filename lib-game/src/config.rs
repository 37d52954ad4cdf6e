use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::SCREEN_WIDTH;

/// Tunables of the simulation. Every section falls back to its
/// defaults field-by-field, so a config file only needs to mention
/// what it changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RushCfg {
    pub pointer: sections::Pointer,
    pub objects: sections::Objects,
    pub particles: sections::Particles,
}

impl RushCfg {
    pub fn from_ron(src: &str) -> anyhow::Result<Self> {
        let cfg: Self = ron::from_str(src).context("parsing game config")?;
        cfg.validate()?;

        Ok(cfg)
    }

    /// Rejects values the simulation cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        let pointer = &self.pointer;
        let objects = &self.objects;
        let particles = &self.particles;

        if !(pointer.smoothing > 0.0 && pointer.smoothing <= 1.0) {
            bail!("pointer.smoothing must be in (0, 1], got {}", pointer.smoothing);
        }
        if !(0..SCREEN_WIDTH as i32 / 2).contains(&objects.spawn_margin) {
            bail!(
                "objects.spawn_margin must be in [0, {}), got {}",
                SCREEN_WIDTH as i32 / 2,
                objects.spawn_margin
            );
        }
        if !(objects.radius > 0.0) {
            bail!("objects.radius must be positive, got {}", objects.radius);
        }
        if !(objects.cull_margin > 0.0) {
            bail!("objects.cull_margin must be positive, got {}", objects.cull_margin);
        }
        if particles.jitter < 0 {
            bail!("particles.jitter must not be negative, got {}", particles.jitter);
        }

        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("reading game config {path:?}"))?;

        Self::from_ron(&src).with_context(|| format!("loading {path:?}"))
    }
}

pub mod sections {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct Pointer {
        /// Share of the remaining horizontal distance covered per frame.
        pub smoothing: f32,
        /// Resting height as a fraction of the screen height.
        pub baseline: f32,
        /// A raw tip above this fraction of the screen height asks for a jump.
        pub jump_zone: f32,
        pub jump_strength: f32,
        pub gravity: f32,
        pub jump_cooldown: i64,
    }

    impl Default for Pointer {
        fn default() -> Self {
            Self {
                smoothing: 0.25,
                baseline: 0.75,
                jump_zone: 0.33,
                jump_strength: -18.0,
                gravity: 1.0,
                jump_cooldown: 25,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct Objects {
        pub radius: f32,
        pub catch_margin: f32,
        /// Distance from the screen sides where objects may spawn.
        pub spawn_margin: i32,
        pub spawn_y: f32,
        /// Distance from the screen sides where swinging objects bounce.
        pub edge_margin: f32,
        pub swing_factor: f32,
        pub wobble_step: f32,
        /// How far below the screen objects are kept before being dropped.
        pub cull_margin: f32,
    }

    impl Default for Objects {
        fn default() -> Self {
            Self {
                radius: 40.0,
                catch_margin: 20.0,
                spawn_margin: 80,
                spawn_y: -80.0,
                edge_margin: 40.0,
                swing_factor: 0.5,
                wobble_step: 0.1,
                cull_margin: 100.0,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct Particles {
        pub burst_size: usize,
        pub life: u32,
        pub gravity: f32,
        pub jitter: i32,
        /// Height above the bottom edge where miss bursts appear.
        pub miss_offset: f32,
    }

    impl Default for Particles {
        fn default() -> Self {
            Self {
                burst_size: 10,
                life: 30,
                gravity: 0.3,
                jitter: 20,
                miss_offset: 50.0,
            }
        }
    }
}
