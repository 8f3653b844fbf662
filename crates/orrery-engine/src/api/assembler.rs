use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::types::{ParticlePolicy, SceneOptions};
use crate::catalog::Catalog;
use crate::core::frame::Frame;
use crate::error::SceneError;
use crate::renderer::config::SceneConfig;
use crate::systems::assemble::{assemble_scene, belt_overlaps};
use crate::systems::geometry::BELT_RADIUS;

/// Turns a catalog into frames.
///
/// The assembler holds only immutable inputs. Every call to
/// [`assemble`](Self::assemble) starts from scratch, so frames for
/// different times can be built in any order.
#[derive(Debug, Clone)]
pub struct SceneAssembler {
    catalog: Catalog,
    config: SceneConfig,
    policy: ParticlePolicy,
}

impl SceneAssembler {
    pub fn new(catalog: Catalog) -> Self {
        for name in belt_overlaps(&catalog) {
            log::warn!(
                "{} orbits inside the asteroid belt band [{}, {}]",
                name,
                BELT_RADIUS.0,
                BELT_RADIUS.1
            );
        }
        Self {
            catalog,
            config: SceneConfig::default(),
            policy: ParticlePolicy::default(),
        }
    }

    /// Assembler over the built-in solar system.
    pub fn solar_system() -> Result<Self, SceneError> {
        Ok(Self::new(Catalog::solar_system()?))
    }

    pub fn with_config(mut self, config: SceneConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_particles(mut self, policy: ParticlePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn policy(&self) -> ParticlePolicy {
        self.policy
    }

    /// Build the frame for `time`.
    ///
    /// `rng` feeds the belt and starfield under [`ParticlePolicy::PerFrame`]
    /// and is left untouched under [`ParticlePolicy::Fixed`].
    pub fn assemble<R: Rng + ?Sized>(
        &self,
        time: f64,
        options: SceneOptions,
        rng: &mut R,
    ) -> Result<Frame, SceneError> {
        let primitives = match self.policy {
            ParticlePolicy::PerFrame => assemble_scene(&self.catalog, time, options, rng)?,
            ParticlePolicy::Fixed { seed } => {
                let mut fixed = StdRng::seed_from_u64(seed);
                assemble_scene(&self.catalog, time, options, &mut fixed)?
            }
        };
        let frame = Frame::from_primitives(time, self.config.clone(), primitives);
        log::debug!(
            "Frame t={}: {} primitives, {} vertices",
            time,
            frame.len(),
            frame.vertex_count()
        );
        Ok(frame)
    }
}
