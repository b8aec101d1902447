use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER_FILE_NAME: &str = "cmult.h";

#[derive(Debug, Clone)]
pub struct GeneratedHeader {
    pub symbol: String,
    pub header_path: PathBuf,
}

pub struct HeaderGenerator {
    output_dir: PathBuf,
}

impl HeaderGenerator {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn header_path(&self) -> PathBuf {
        self.output_dir.join(HEADER_FILE_NAME)
    }

    /// C declaration of the exported routine, usable from C and C++.
    pub fn render(&self) -> String {
        let mut header = String::new();

        header.push_str("// cmult.h\n");
        header.push_str("#ifndef CMULT_H\n");
        header.push_str("#define CMULT_H\n\n");
        header.push_str("#ifdef __cplusplus\n");
        header.push_str("extern \"C\" {\n");
        header.push_str("#endif\n\n");
        header.push_str("float cmult(int int_param, float float_param);\n\n");
        header.push_str("#ifdef __cplusplus\n");
        header.push_str("}\n");
        header.push_str("#endif\n\n");
        header.push_str("#endif /* CMULT_H */\n");

        header
    }

    pub fn write(&self) -> Result<GeneratedHeader> {
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create header directory: {}", self.output_dir.display()))?;

        let header_path = self.header_path();
        fs::write(&header_path, self.render())
            .with_context(|| format!("Failed to write header to {}", header_path.display()))?;

        println!("Generated header: {}", header_path.display());

        Ok(GeneratedHeader {
            symbol: "cmult".to_string(),
            header_path,
        })
    }
}
