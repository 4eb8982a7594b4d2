pub mod content_file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "portfolio-site"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Generate a static portfolio page (index.html + style.css)")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "."))]
    pub output_path: String,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "TOML file replacing the built-in content")
    )]
    pub content: Option<String>,

    #[cfg_attr(
        feature = "cli",
        arg(long, help = "Render and print the content as JSON without writing files")
    )]
    pub dry_run: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_path: ".".to_string(),
            content: None,
            dry_run: false,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn content_file(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        if let Some(content) = &self.content {
            validate_path("content", content)?;
        }
        Ok(())
    }
}
