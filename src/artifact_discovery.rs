use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Library base name, as produced by the `cdylib`/`staticlib` targets.
pub const LIBRARY_NAME: &str = "cmult";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    pub fn as_str(&self) -> &str {
        match self {
            BuildProfile::Debug => "debug",
            BuildProfile::Release => "release",
        }
    }
}

impl FromStr for BuildProfile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "debug" => Ok(BuildProfile::Debug),
            "release" => Ok(BuildProfile::Release),
            _ => Err(anyhow!("Invalid profile: {}. Use 'debug' or 'release'", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactKind {
    StaticLib,
    DynamicLib,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &str {
        match self {
            ArtifactKind::StaticLib => "staticlib",
            ArtifactKind::DynamicLib => "cdylib",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiscoveredArtifact {
    pub name: String,
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

pub struct ArtifactDiscovery {
    target_dir: PathBuf,
    target_triple: Option<String>,
    profile: BuildProfile,
}

impl ArtifactDiscovery {
    pub fn new(
        target_dir: impl AsRef<Path>,
        target_triple: Option<String>,
        profile: BuildProfile,
    ) -> Self {
        Self {
            target_dir: target_dir.as_ref().to_path_buf(),
            target_triple,
            profile,
        }
    }

    pub fn build_directory(&self) -> PathBuf {
        let mut build_dir = self.target_dir.clone();

        if let Some(ref target) = self.target_triple {
            build_dir = build_dir.join(target);
        }

        build_dir.join(self.profile.as_str())
    }

    /// Candidate file names for the library on the host platform, best first.
    pub fn library_file_names(&self, kind: &ArtifactKind) -> Vec<String> {
        match kind {
            ArtifactKind::StaticLib => {
                if cfg!(target_os = "windows") {
                    vec![format!("{}.lib", LIBRARY_NAME)]
                } else {
                    vec![format!("lib{}.a", LIBRARY_NAME)]
                }
            }
            ArtifactKind::DynamicLib => {
                if cfg!(target_os = "windows") {
                    vec![
                        format!("{}.dll", LIBRARY_NAME),
                        format!("{}.dll.lib", LIBRARY_NAME),
                    ]
                } else if cfg!(target_os = "macos") {
                    vec![format!("lib{}.dylib", LIBRARY_NAME)]
                } else {
                    vec![format!("lib{}.so", LIBRARY_NAME)]
                }
            }
        }
    }

    pub fn discover(&self, kind: &ArtifactKind) -> Result<DiscoveredArtifact> {
        let build_dir = self.build_directory();

        for file_name in self.library_file_names(kind) {
            let path = build_dir.join(file_name);
            if path.exists() {
                return Ok(DiscoveredArtifact {
                    name: LIBRARY_NAME.to_string(),
                    kind: kind.clone(),
                    path,
                });
            }
        }

        Err(anyhow!(
            "Could not find {} artifact for '{}' in {}",
            kind.as_str(),
            LIBRARY_NAME,
            build_dir.display()
        ))
    }
}
