use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::artifact_discovery::{ArtifactDiscovery, ArtifactKind, BuildProfile};
use crate::ffi::{cmult, CmultFn};
use crate::header_generation::HeaderGenerator;
use crate::manifest::ManifestGenerator;
use crate::multiplier::format_fixed1;

#[derive(Parser)]
#[command(name = "cmult")]
#[command(about = "Call and package the C-ABI cmult routine")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Call cmult through its C ABI and print the caller-side result
    Call {
        /// Integer operand
        #[arg(long = "int", default_value_t = 6, allow_hyphen_values = true)]
        int_param: i32,

        /// Float operand
        #[arg(long = "float", default_value_t = 2.3, allow_hyphen_values = true)]
        float_param: f32,
    },

    /// Write the C header declaring cmult
    Header {
        /// Directory to write cmult.h into
        #[arg(long, default_value = "include")]
        out_dir: PathBuf,
    },

    /// Locate the built library and write a binding manifest for it
    Manifest {
        /// Cargo target directory
        #[arg(long, default_value = "target")]
        target_dir: PathBuf,

        /// Build profile
        #[arg(long, default_value = "release")]
        profile: String,

        /// Rust target triple, when cross-compiled
        #[arg(long)]
        target: Option<String>,

        /// Directory for the header and manifest
        #[arg(long, default_value = "include")]
        out_dir: PathBuf,
    },

    /// Check for the tools needed to build and call the library
    Doctor,
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Call {
            int_param,
            float_param,
        } => call_command(int_param, float_param),
        Commands::Header { out_dir } => header_command(out_dir),
        Commands::Manifest {
            target_dir,
            profile,
            target,
            out_dir,
        } => manifest_command(target_dir, profile, target, out_dir),
        Commands::Doctor => doctor_command(),
    }
}

fn call_command(int_param: i32, float_param: f32) -> Result<()> {
    // Go through a C-ABI function pointer, the same way a foreign caller would.
    let entry: CmultFn = cmult;
    let answer = entry(int_param, float_param);

    println!(
        "    In Rust: int: {} float {} return val {}",
        int_param,
        format_fixed1(float_param),
        format_fixed1(answer)
    );
    println!();

    Ok(())
}

fn header_command(out_dir: PathBuf) -> Result<()> {
    HeaderGenerator::new(&out_dir)
        .write()
        .context("Failed to generate header")?;

    Ok(())
}

fn manifest_command(
    target_dir: PathBuf,
    profile: String,
    target: Option<String>,
    out_dir: PathBuf,
) -> Result<()> {
    let build_profile: BuildProfile = profile.parse()?;

    let rust_target = match target.clone() {
        Some(target) => target,
        None => get_host_target()?,
    };

    let discovery = ArtifactDiscovery::new(&target_dir, target, build_profile);
    let artifact = discovery
        .discover(&ArtifactKind::DynamicLib)
        .context("Failed to discover library artifact. Build it first with `cargo build --release`")?;

    println!("Found {} artifact: {}", artifact.kind.as_str(), artifact.path.display());

    let header = HeaderGenerator::new(&out_dir)
        .write()
        .context("Failed to generate header")?;

    let generator = ManifestGenerator::new();
    let manifest = generator.generate(&artifact, &header, &rust_target);
    let manifest_path = generator
        .write(&manifest, &out_dir)
        .context("Failed to write manifest")?;

    generator.validate(&manifest)?;

    println!("\nManifest path: {}", manifest_path.display());

    Ok(())
}

fn doctor_command() -> Result<()> {
    println!("cmult doctor - checking tools...\n");

    check_command_available("cargo", "Rust toolchain")?;

    for (command, description) in [
        ("cc", "C compiler (optional, for C callers)"),
        ("python3", "Python interpreter (optional, for ctypes callers)"),
    ] {
        match which::which(command) {
            Ok(path) => println!("✓ {} found at: {}", description, path.display()),
            Err(_) => println!("✗ {} not found ({})", description, command),
        }
    }

    println!("\n✓ cmult doctor check complete");

    Ok(())
}

fn check_command_available(command: &str, description: &str) -> Result<()> {
    match which::which(command) {
        Ok(path) => {
            println!("✓ {} found at: {}", description, path.display());
            Ok(())
        }
        Err(_) => {
            println!("✗ {} not found ({})", description, command);
            Err(anyhow::anyhow!("{} is required but not found in PATH", description))
        }
    }
}

fn get_host_target() -> Result<String> {
    if cfg!(target_os = "linux") && cfg!(target_arch = "x86_64") {
        Ok("x86_64-unknown-linux-gnu".to_string())
    } else if cfg!(target_os = "linux") && cfg!(target_arch = "aarch64") {
        Ok("aarch64-unknown-linux-gnu".to_string())
    } else if cfg!(target_os = "macos") && cfg!(target_arch = "x86_64") {
        Ok("x86_64-apple-darwin".to_string())
    } else if cfg!(target_os = "macos") && cfg!(target_arch = "aarch64") {
        Ok("aarch64-apple-darwin".to_string())
    } else if cfg!(target_os = "windows") && cfg!(target_arch = "x86_64") {
        Ok("x86_64-pc-windows-msvc".to_string())
    } else {
        let output = std::process::Command::new("rustc")
            .args(["--version", "--verbose"])
            .output()
            .context("Failed to run rustc to detect host target")?;

        let output_str = String::from_utf8_lossy(&output.stdout);
        output_str
            .lines()
            .find_map(|line| line.strip_prefix("host: "))
            .map(|host| host.to_string())
            .ok_or_else(|| anyhow::anyhow!("Could not detect host target"))
    }
}
