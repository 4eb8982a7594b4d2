pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use adapters::LocalStorage;
pub use config::{content_file::ContentFile, CliConfig};
pub use crate::core::{engine::SiteEngine, pipeline::SitePipeline};
pub use domain::model::{
    EducationEntry, ExperienceEntry, ProfileInfo, ProjectEntry, RenderedSite, SiteContent,
    SkillCategory,
};
pub use render::render_site;
pub use utils::error::{Result, SiteError};
