use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::artifact_discovery::DiscoveredArtifact;
use crate::header_generation::GeneratedHeader;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub c_type: String,
}

/// Everything a binding generator needs to call `cmult` from another language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingManifest {
    pub library: String,
    pub symbol: String,
    pub calling_convention: String,
    pub parameters: Vec<Parameter>,
    pub returns: String,
    pub kind: String,
    pub artifact: PathBuf,
    pub header: PathBuf,
    pub rustc_target: String,
    pub link_libs: Vec<String>,
}

pub struct ManifestGenerator;

impl ManifestGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        artifact: &DiscoveredArtifact,
        header: &GeneratedHeader,
        rustc_target: &str,
    ) -> BindingManifest {
        BindingManifest {
            library: artifact.name.clone(),
            symbol: header.symbol.clone(),
            calling_convention: "C".to_string(),
            parameters: vec![
                Parameter {
                    name: "int_param".to_string(),
                    c_type: "int".to_string(),
                },
                Parameter {
                    name: "float_param".to_string(),
                    c_type: "float".to_string(),
                },
            ],
            returns: "float".to_string(),
            kind: artifact.kind.as_str().to_string(),
            artifact: artifact.path.clone(),
            header: header.header_path.clone(),
            rustc_target: rustc_target.to_string(),
            link_libs: self.system_link_libs(rustc_target),
        }
    }

    pub fn manifest_path(&self, output_dir: &Path, manifest: &BindingManifest) -> PathBuf {
        output_dir.join(format!("{}-manifest.json", manifest.library))
    }

    pub fn write(&self, manifest: &BindingManifest, output_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create manifest directory: {}", output_dir.display()))?;

        let manifest_json = serde_json::to_string_pretty(manifest)
            .context("Failed to serialize manifest to JSON")?;

        let manifest_path = self.manifest_path(output_dir, manifest);
        fs::write(&manifest_path, manifest_json)
            .with_context(|| format!("Failed to write manifest to {}", manifest_path.display()))?;

        println!("Generated manifest: {}", manifest_path.display());

        Ok(manifest_path)
    }

    pub fn read(&self, manifest_path: &Path) -> Result<BindingManifest> {
        let manifest_content = fs::read_to_string(manifest_path)
            .with_context(|| format!("Failed to read manifest from {}", manifest_path.display()))?;

        serde_json::from_str(&manifest_content)
            .with_context(|| format!("Failed to parse manifest JSON from {}", manifest_path.display()))
    }

    pub fn validate(&self, manifest: &BindingManifest) -> Result<()> {
        if !manifest.artifact.exists() {
            return Err(anyhow::anyhow!(
                "Artifact file does not exist: {}",
                manifest.artifact.display()
            ));
        }

        if !manifest.header.exists() {
            return Err(anyhow::anyhow!(
                "Header file does not exist: {}",
                manifest.header.display()
            ));
        }

        Ok(())
    }

    /// Native libraries a static link of the Rust runtime pulls in.
    pub fn system_link_libs(&self, rustc_target: &str) -> Vec<String> {
        let libs: &[&str] = if rustc_target.contains("linux") {
            &["pthread", "dl", "m", "c"]
        } else if rustc_target.contains("darwin") || rustc_target.contains("macos") {
            &["System", "pthread", "c"]
        } else if rustc_target.contains("windows-msvc") {
            &["kernel32", "ntdll", "userenv", "ws2_32", "vcruntime", "ucrt"]
        } else if rustc_target.contains("windows") {
            &["kernel32", "ntdll", "userenv", "ws2_32", "msvcrt"]
        } else if rustc_target.contains("freebsd") {
            &["pthread", "c", "m"]
        } else {
            &[]
        };

        libs.iter().map(|lib| lib.to_string()).collect()
    }
}

impl Default for ManifestGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact_discovery::ArtifactKind;

    fn sample_inputs() -> (DiscoveredArtifact, GeneratedHeader) {
        let artifact = DiscoveredArtifact {
            name: "cmult".to_string(),
            kind: ArtifactKind::DynamicLib,
            path: PathBuf::from("target/release/libcmult.so"),
        };
        let header = GeneratedHeader {
            symbol: "cmult".to_string(),
            header_path: PathBuf::from("include/cmult.h"),
        };
        (artifact, header)
    }

    #[test]
    fn test_manifest_generation() {
        let (artifact, header) = sample_inputs();
        let manifest = ManifestGenerator::new().generate(&artifact, &header, "x86_64-unknown-linux-gnu");

        assert_eq!(manifest.symbol, "cmult");
        assert_eq!(manifest.kind, "cdylib");
        assert_eq!(manifest.calling_convention, "C");
        assert_eq!(manifest.returns, "float");
        assert_eq!(
            manifest.parameters.iter().map(|p| p.c_type.as_str()).collect::<Vec<_>>(),
            vec!["int", "float"]
        );
        assert!(manifest.link_libs.contains(&"pthread".to_string()));
    }

    #[test]
    fn test_system_link_libs() {
        let generator = ManifestGenerator::new();

        let linux_libs = generator.system_link_libs("x86_64-unknown-linux-gnu");
        assert!(linux_libs.contains(&"dl".to_string()));

        let windows_libs = generator.system_link_libs("x86_64-pc-windows-msvc");
        assert!(windows_libs.contains(&"kernel32".to_string()));
        assert!(windows_libs.contains(&"vcruntime".to_string()));

        let macos_libs = generator.system_link_libs("aarch64-apple-darwin");
        assert!(macos_libs.contains(&"System".to_string()));

        assert!(generator.system_link_libs("wasm32-unknown-unknown").is_empty());
    }

    #[test]
    fn test_write_read_and_validate() {
        let dir = std::env::temp_dir().join(format!("cmult-manifest-{}", std::process::id()));
        let generator = ManifestGenerator::new();
        let (artifact, header) = sample_inputs();
        let manifest = generator.generate(&artifact, &header, "x86_64-unknown-linux-gnu");

        let path = generator.write(&manifest, &dir).unwrap();
        assert!(path.ends_with("cmult-manifest.json"));

        let read_back = generator.read(&path).unwrap();
        assert_eq!(read_back.parameters, manifest.parameters);
        assert_eq!(read_back.artifact, manifest.artifact);

        // Paths in the sample do not exist relative to the test's working directory.
        assert!(generator.validate(&read_back).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
