use serde::{Deserialize, Serialize};

/// Per-frame toggles sampled from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneOptions {
    /// Draw each orbiting body's orbit path.
    pub show_orbits: bool,
    /// Draw the asteroid belt.
    pub show_asteroids: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_orbits: true,
            show_asteroids: true,
        }
    }
}

/// Where the belt and starfield draw their randomness from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParticlePolicy {
    /// Fresh samples from the caller's generator every frame. Stars and
    /// asteroids twinkle as time moves.
    #[default]
    PerFrame,
    /// A new generator seeded with `seed` on every frame, so both fields
    /// come out identical each time without any state kept between frames.
    Fixed { seed: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_everything_and_twinkle() {
        let opts = SceneOptions::default();
        assert!(opts.show_orbits);
        assert!(opts.show_asteroids);
        assert_eq!(ParticlePolicy::default(), ParticlePolicy::PerFrame);
    }

    #[test]
    fn options_from_json() {
        let opts: SceneOptions =
            serde_json::from_str(r#"{"show_orbits":false,"show_asteroids":true}"#).unwrap();
        assert!(!opts.show_orbits);
        assert!(opts.show_asteroids);
    }
}
