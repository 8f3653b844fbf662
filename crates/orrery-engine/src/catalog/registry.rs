use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::body::{BodyKind, CelestialBody};
use crate::error::SceneError;

/// Serialized form of a catalog. Loaded from JSON, validated into a [`Catalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub bodies: Vec<CelestialBody>,
}

impl CatalogManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read-only view of one body for the inspector panel.
#[derive(Debug, Clone, Copy)]
pub struct Inspection<'a> {
    pub name: &'a str,
    pub kind: BodyKind,
    pub stats: &'a IndexMap<String, String>,
}

impl Inspection<'_> {
    /// `"label: value"` lines in catalog order.
    pub fn lines(&self) -> Vec<String> {
        self.stats
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect()
    }
}

/// Ordered, immutable registry of celestial bodies.
///
/// Iteration order is rendering order; name lookup goes through the same
/// index map and never reorders it.
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: IndexMap<String, CelestialBody>,
}

impl Catalog {
    /// Build a catalog, checking the structural invariants:
    /// unique names, non-negative numbers, the central body first and
    /// every other body off the origin, rings only on giants.
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self, SceneError> {
        let Some(first) = bodies.first() else {
            return Err(SceneError::catalog("catalog has no bodies"));
        };
        if !first.is_central() {
            return Err(SceneError::catalog(format!(
                "first body '{}' is not stationary at the origin",
                first.name
            )));
        }

        let mut map = IndexMap::with_capacity(bodies.len());
        for (idx, body) in bodies.into_iter().enumerate() {
            check_field(&body.name, "radius", body.radius)?;
            check_field(&body.name, "orbit_radius", body.orbit_radius)?;
            check_field(&body.name, "angular_rate", body.angular_rate)?;

            if idx > 0 && body.orbit_radius == 0.0 {
                return Err(SceneError::catalog(format!(
                    "'{}' sits at the origin with the central body",
                    body.name
                )));
            }
            if body.has_rings() && !body.kind.ring_eligible() {
                return Err(SceneError::catalog(format!(
                    "{} '{}' cannot carry rings",
                    body.kind, body.name
                )));
            }
            for sat in &body.satellites {
                check_field(&sat.name, "radius", sat.radius)?;
                check_field(&sat.name, "orbit_radius", sat.orbit_radius)?;
                check_field(&sat.name, "angular_rate", sat.angular_rate)?;
            }
            if map.contains_key(&body.name) {
                return Err(SceneError::catalog(format!("duplicate body '{}'", body.name)));
            }
            map.insert(body.name.clone(), body);
        }

        let mut satellite_names: Vec<&str> = Vec::new();
        for body in map.values() {
            for sat in &body.satellites {
                if map.contains_key(&sat.name) || satellite_names.contains(&sat.name.as_str()) {
                    return Err(SceneError::catalog(format!("duplicate body '{}'", sat.name)));
                }
                satellite_names.push(&sat.name);
            }
        }

        Ok(Self { bodies: map })
    }

    /// Build and validate from a parsed manifest.
    pub fn from_manifest(manifest: CatalogManifest) -> Result<Self, SceneError> {
        Self::new(manifest.bodies)
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let catalog = Self::from_manifest(CatalogManifest::from_json(json)?)?;
        log::info!("catalog loaded: {} bodies", catalog.len());
        Ok(catalog)
    }

    /// Serialize back to the manifest JSON form.
    pub fn to_json(&self) -> Result<String, SceneError> {
        let manifest = CatalogManifest {
            bodies: self.bodies.values().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&manifest)?)
    }

    /// Look up a body by name.
    pub fn get(&self, name: &str) -> Result<&CelestialBody, SceneError> {
        self.bodies.get(name).ok_or_else(|| SceneError::NotFound {
            name: name.to_string(),
        })
    }

    /// Inspector view of a body.
    pub fn inspect(&self, name: &str) -> Result<Inspection<'_>, SceneError> {
        let body = self.get(name)?;
        Ok(Inspection {
            name: &body.name,
            kind: body.kind,
            stats: &body.stats,
        })
    }

    /// The stationary central body.
    pub fn central(&self) -> &CelestialBody {
        // Construction guarantees a non-empty map with the central body first.
        &self.bodies[0]
    }

    /// Iterate bodies in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.values()
    }

    /// Body names in rendering order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

fn check_field(owner: &str, field: &str, value: f64) -> Result<(), SceneError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::catalog(format!("{}.{} = {} must be >= 0", owner, field, value)))
    }
}
