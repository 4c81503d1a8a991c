//! Render parameters, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::maps::{render_2d, render_3d_slice, GrayscaleBuffer, Window};
use crate::noise::{Fbm, NoiseGenerator};
use crate::rng::{Engine, Seed};

/// Parameters describing one rendered noise image.
///
/// Every field has a default, so a config file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderParams {
    pub seed: Seed,
    pub engine: Engine,
    /// 2 for planar noise, 3 for a slice of volumetric noise.
    pub dimensions: u8,
    pub width: u32,
    pub height: u32,
    /// Distance in noise space between adjacent pixels.
    pub frequency: f64,
    pub offset: [f64; 2],
    /// Slice position for 3D renders.
    pub z: f64,
    pub octaves: u8,
    pub persistence: f64,
    pub lacunarity: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            seed: Seed(0),
            engine: Engine::default(),
            dimensions: 2,
            width: 256,
            height: 256,
            frequency: 1.0 / 32.0,
            offset: [0.0, 0.0],
            z: 0.0,
            octaves: 1,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl RenderParams {
    /// Parse parameters from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, NoiseError> {
        let params: RenderParams = serde_json::from_str(json)
            .map_err(|e| NoiseError::invalid(format!("render params: {}", e)))?;
        params.validate()?;
        Ok(params)
    }

    /// Reject parameter combinations that cannot produce an image.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if !matches!(self.dimensions, 2 | 3) {
            return Err(NoiseError::invalid(format!(
                "dimensions must be 2 or 3, got {}",
                self.dimensions
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(NoiseError::invalid(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.octaves == 0 {
            return Err(NoiseError::invalid("octaves must be at least 1"));
        }
        let finite = [
            ("frequency", self.frequency),
            ("offset[0]", self.offset[0]),
            ("offset[1]", self.offset[1]),
            ("z", self.z),
            ("persistence", self.persistence),
            ("lacunarity", self.lacunarity),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(NoiseError::invalid(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }
        Ok(())
    }

    pub fn window(&self) -> Window {
        Window::new(self.width, self.height, self.frequency).with_offset(self.offset)
    }

    /// Validate, build a generator and render the image.
    pub fn render(&self) -> Result<GrayscaleBuffer, NoiseError> {
        self.validate()?;
        let generator = NoiseGenerator::with_engine(self.seed, self.engine);
        let window = self.window();

        let buffer = if self.dimensions == 2 {
            let noise = Fbm::new(generator.noise_2d_evaluator())
                .with_octaves(self.octaves)
                .with_persistence(self.persistence)
                .with_lacunarity(self.lacunarity);
            render_2d(&noise, &window)
        } else {
            let noise = Fbm::new(generator.noise_3d_evaluator())
                .with_octaves(self.octaves)
                .with_persistence(self.persistence)
                .with_lacunarity(self.lacunarity);
            render_3d_slice(&noise, &window, self.z)
        };
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let params = RenderParams::from_json(r#"{ "seed": 12345, "width": 64 }"#).unwrap();
        assert_eq!(
            params,
            RenderParams {
                seed: Seed(12345),
                width: 64,
                ..RenderParams::default()
            }
        );
    }

    #[test]
    fn test_engine_and_dimensions_parse() {
        let params =
            RenderParams::from_json(r#"{ "engine": "pcg32", "dimensions": 3, "z": 0.25 }"#)
                .unwrap();
        assert_eq!(params.engine, Engine::Pcg32);
        assert_eq!(params.dimensions, 3);
        assert_eq!(params.z, 0.25);
    }

    #[test]
    fn test_unsigned_seed_in_config() {
        let params = RenderParams::from_json(r#"{ "seed": 18446744073709551615 }"#).unwrap();
        assert_eq!(params.seed, Seed(-1));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = RenderParams::from_json(r#"{ "sead": 1 }"#).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidArgument(_)));
    }

    #[test]
    fn test_non_integer_seed_rejected() {
        let err = RenderParams::from_json(r#"{ "seed": 1.5 }"#).unwrap_err();
        assert!(matches!(err, NoiseError::InvalidArgument(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            RenderParams {
                dimensions: 4,
                ..RenderParams::default()
            },
            RenderParams {
                width: 0,
                ..RenderParams::default()
            },
            RenderParams {
                octaves: 0,
                ..RenderParams::default()
            },
            RenderParams {
                frequency: f64::NAN,
                ..RenderParams::default()
            },
            RenderParams {
                lacunarity: f64::INFINITY,
                ..RenderParams::default()
            },
        ];
        for params in bad {
            assert!(params.validate().is_err(), "{:?}", params);
        }
        assert!(RenderParams::default().validate().is_ok());
    }

    #[test]
    fn test_render_dimensions() {
        let params = RenderParams {
            width: 8,
            height: 4,
            ..RenderParams::default()
        };
        let flat = params.render().unwrap();
        assert_eq!((flat.width, flat.height), (8, 4));

        let volume = RenderParams {
            dimensions: 3,
            z: 0.7,
            ..params
        }
        .render()
        .unwrap();
        assert_ne!(flat.data, volume.data);
    }
}
