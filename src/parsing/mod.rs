mod primitives;
mod scene;
mod settings;

use std::{fs, path::Path, path::PathBuf};

use log::{info, warn};
use serde::de::DeserializeOwned;

pub use primitives::PrimitiveData;
pub use scene::parse_scene;
pub use settings::parse_settings;

use crate::config::RenderConfig;
use crate::geometry::Sphere;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to load scene {path:?}: {source}")]
    Scene {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load settings {path:?}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse json scene {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneData {
    pub spheres: Vec<PrimitiveData>,
}

impl From<SceneData> for Vec<Sphere> {
    fn from(data: SceneData) -> Self {
        data.spheres
            .into_iter()
            .enumerate()
            .filter_map(|(i, primitive)| {
                let sphere = primitive.transform();
                if sphere.is_none() {
                    warn!("scene, sphere {}: invalid data", i + 1);
                }
                sphere
            })
            .collect()
    }
}

/// Loads spheres from `path`. `.json` files use the structured form,
/// anything else the line based text form.
pub fn load_scene(path: &Path) -> Result<Vec<Sphere>, LoadError> {
    let spheres = if path.extension().map_or(false, |ext| ext == "json") {
        load_json::<SceneData>(path)?.into()
    } else {
        let data = fs::read_to_string(path).map_err(|source| LoadError::Scene {
            path: path.to_path_buf(),
            source,
        })?;
        parse_scene(&data)
    };
    info!("loaded {} spheres from {}", spheres.len(), path.display());
    Ok(spheres)
}

pub fn load_settings(path: &Path, defaults: RenderConfig) -> Result<RenderConfig, LoadError> {
    let data = fs::read_to_string(path).map_err(|source| LoadError::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_settings(&data, defaults))
}

pub fn load_json<T>(path: &Path) -> Result<T, LoadError>
where
    T: DeserializeOwned,
{
    let input = fs::read_to_string(path).map_err(|source| LoadError::Scene {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&input).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Color, Point3};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sphere_tracer_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_sources_are_fatal() {
        let dir = scratch_dir("missing");
        let missing = dir.join("nope.txt");

        let err = load_scene(&missing).unwrap_err();
        assert!(matches!(err, LoadError::Scene { .. }));
        assert!(err.to_string().contains("scene"));

        let err = load_settings(&missing, RenderConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::Settings { .. }));
        assert!(err.to_string().contains("settings"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_loading_text_files() {
        let dir = scratch_dir("text");
        let scene_path = dir.join("scene.txt");
        let settings_path = dir.join("settings.txt");
        fs::write(&scene_path, "// red\n0 0 -5 1 1 0 0 0\n0 20 -5 1 0 0 0 0 5 5 5\n").unwrap();
        fs::write(&settings_path, "ambient 0.1 0.1 0.1\ncanvas 4 3\ndepth 1\n").unwrap();

        let spheres = load_scene(&scene_path).unwrap();
        assert_eq!(spheres.len(), 2);
        assert!(spheres[1].is_emissive());

        let config = load_settings(&settings_path, RenderConfig::default()).unwrap();
        assert_eq!((config.width, config.height, config.max_depth), (4, 3, 1));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_loading_json_scene() {
        let dir = scratch_dir("json");
        let path = dir.join("scene.json");
        fs::write(
            &path,
            r#"{
                "spheres": [
                    { "type": "Sphere", "center": [0, 0, -5], "radius": 1, "color": [1, 0, 0] },
                    { "type": "Sphere", "center": [0, 0, -5], "radius": 0, "color": [1, 0, 0] },
                    { "type": "Sphere", "center": [0, 20, -5], "radius": 2, "color": [0, 0, 0],
                      "reflectivity": 0.5, "emission": [3, 3, 3] }
                ]
            }"#,
        )
        .unwrap();

        let spheres = load_scene(&path).unwrap();
        assert_eq!(spheres.len(), 2);
        assert_eq!(spheres[0].center, Point3::new(0.0, 0.0, -5.0));
        assert_eq!(spheres[0].reflectivity, 0.0);
        assert!(!spheres[0].is_emissive());
        assert_eq!(spheres[1].emission_color, Color::splat(3.0));
        assert_eq!(spheres[1].reflectivity, 0.5);

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_scene(&path), Err(LoadError::Json { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_bundled_samples() {
        let spheres = parse_scene(include_str!("../../data/scene.txt"));
        assert_eq!(spheres.len(), 6);
        assert_eq!(spheres.iter().filter(|s| s.is_emissive()).count(), 1);

        let config = parse_settings(include_str!("../../data/settings.txt"), RenderConfig::default());
        assert_eq!(config, RenderConfig::default());

        let data: SceneData = serde_json::from_str(include_str!("../../data/scene.json")).unwrap();
        let spheres: Vec<Sphere> = data.into();
        assert_eq!(spheres.len(), 4);
    }
}
