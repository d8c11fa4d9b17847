use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use solarium::Preset;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::Args;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) preset: Preset,
    pub(crate) fps_cap: u32,
    pub(crate) speed: f64,
    pub(crate) seed: u64,
    pub(crate) show_labels: bool,
    pub(crate) show_orbits: bool,
    pub(crate) log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: Preset::Classic,
            fps_cap: 30,
            speed: 1.0,
            seed: 0x5017_A515,
            show_labels: true,
            show_orbits: true,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Command-line flags win over the saved file.
    pub(crate) fn apply_args(&mut self, args: &Args) {
        if let Some(p) = args.preset {
            self.preset = p;
        }
        if let Some(fps) = args.fps {
            self.fps_cap = fps;
        }
        if let Some(speed) = args.speed {
            self.speed = speed;
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        self.fps_cap = self.fps_cap.clamp(5, 120);
        if !self.speed.is_finite() {
            self.speed = 1.0;
        }
    }
}

pub(crate) struct Paths {
    pub(crate) settings_path: PathBuf,
    pub(crate) log_path: PathBuf,
}

pub(crate) fn project_paths() -> Result<Paths> {
    let proj = ProjectDirs::from("com", "solarium", "Solarium")
        .context("could not resolve project directories")?;
    let dir = proj.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(Paths {
        settings_path: dir.join("settings.json"),
        log_path: dir.join("solarium.log"),
    })
}

pub(crate) fn load_settings(path: &Path) -> Settings {
    if let Ok(s) = fs::read_to_string(path) {
        if let Ok(v) = serde_json::from_str::<Settings>(&s) {
            return v;
        }
    }
    Settings::default()
}

pub(crate) fn save_settings_atomic(path: &Path, s: &Settings) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let data = serde_json::to_vec_pretty(s)?;
    fs::write(&tmp, data).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}
