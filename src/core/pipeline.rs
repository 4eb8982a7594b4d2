use crate::config::content_file::ContentFile;
use crate::domain::model::{RenderedSite, SiteContent};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::render::{self, PLACEHOLDER_IMAGE, STYLESHEET_HREF};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;

pub const INDEX_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = STYLESHEET_HREF;

pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .display()
            .to_string()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<SiteContent> {
        let content = match self.config.content_file() {
            Some(path) => {
                tracing::debug!("Reading content from {}", path);
                ContentFile::from_file(path)?
            }
            None => {
                tracing::debug!("Using built-in content");
                SiteContent::builtin()
            }
        };

        content.validate()?;
        Ok(content)
    }

    async fn transform(&self, content: SiteContent) -> Result<RenderedSite> {
        Ok(render::render_site(&content))
    }

    async fn load(&self, site: RenderedSite) -> Result<Vec<String>> {
        tracing::debug!("Writing {} ({} bytes)", INDEX_FILE, site.html.len());
        self.storage
            .write_file(INDEX_FILE, site.html.as_bytes())
            .await?;

        tracing::debug!("Writing {} ({} bytes)", STYLESHEET_FILE, site.css.len());
        self.storage
            .write_file(STYLESHEET_FILE, site.css.as_bytes())
            .await?;

        if !self.storage.exists(PLACEHOLDER_IMAGE).await {
            tracing::warn!(
                "{} not found next to the output; the profile photo will not load until it exists",
                PLACEHOLDER_IMAGE
            );
        }

        Ok(vec![
            self.output_file(INDEX_FILE),
            self.output_file(STYLESHEET_FILE),
        ])
    }
}
