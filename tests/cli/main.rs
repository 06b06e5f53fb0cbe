use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod init;
mod list;

const BIN_NAME: &str = "tokenctl";

/// A small token document covering every category and one reference.
pub const SAMPLE_TOKENS: &str = r##"{
  "ld": {
    "color": {
      "blue": {
        "500": { "$type": "color", "$value": "#336699" }
      },
      "brand": {
        "500": { "$type": "color", "$value": "{ld.color.blue.500}" }
      }
    },
    "spacing": {
      "padding": {
        "200": { "$type": "spacing", "$value": 8 }
      }
    },
    "radius": {
      "md": { "$type": "borderRadius", "$value": 6 }
    },
    "font": {
      "size": {
        "body": { "$type": "fontSizes", "$value": 14 }
      }
    },
    "shadow": {
      "card": { "$type": "boxShadow", "$value": { "x": 0, "y": 1, "blur": 2 } }
    }
  }
}
"##;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the project root
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// Project with `tokens.json` set to `SAMPLE_TOKENS`.
    pub fn with_sample_tokens() -> Result<Self> {
        Self::with_file("tokens.json", SAMPLE_TOKENS)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn list_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("list");
        cmd
    }

    pub fn resolve_command(&self, token_path: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("resolve").arg(token_path);
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Run a command and capture its output.
pub fn run(mut cmd: Command) -> Result<Output> {
    cmd.output().context("Failed to run tokenctl")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
