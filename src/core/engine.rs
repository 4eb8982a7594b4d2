use crate::domain::model::SiteContent;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run extract, render and write in order. Returns the written paths.
    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting site generation");

        tracing::info!("Loading content...");
        let content = self.pipeline.extract().await?;
        log_content_summary(&content);

        tracing::info!("Rendering page...");
        let site = self.pipeline.transform(content).await?;
        tracing::info!(
            "Rendered {} bytes of HTML and {} bytes of CSS",
            site.html.len(),
            site.css.len()
        );

        tracing::info!("Writing output...");
        let written = self.pipeline.load(site).await?;
        for path in &written {
            tracing::info!("Wrote {}", path);
        }

        Ok(written)
    }

    /// Extract and render without writing anything. Returns the resolved content.
    pub async fn dry_run(&self) -> Result<SiteContent> {
        let content = self.pipeline.extract().await?;
        log_content_summary(&content);

        let site = self.pipeline.transform(content.clone()).await?;
        tracing::info!(
            "Dry run: would write {} bytes of HTML and {} bytes of CSS",
            site.html.len(),
            site.css.len()
        );

        Ok(content)
    }
}

fn log_content_summary(content: &SiteContent) {
    tracing::info!(
        "Content for {}: {} experience, {} education, {} projects, {} skill categories",
        content.profile.name,
        content.experience.len(),
        content.education.len(),
        content.projects.len(),
        content.skills.len()
    );
}
