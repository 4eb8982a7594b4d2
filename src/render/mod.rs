pub mod markup;
pub mod page;
pub mod sections;
pub mod stylesheet;

use crate::domain::model::{RenderedSite, SiteContent};

pub use markup::{escape_html, Element, Fragment, Markup};
pub use page::{render_page, PageSections, PLACEHOLDER_IMAGE, STYLESHEET_HREF};
pub use sections::{
    render_education_section, render_experience_section, render_projects_section,
    render_skills_section,
};
pub use stylesheet::render_stylesheet;

/// Render the full page and its stylesheet.
pub fn render_site(content: &SiteContent) -> RenderedSite {
    let sections = PageSections {
        experience: render_experience_section(&content.experience),
        education: render_education_section(&content.education),
        projects: render_projects_section(&content.projects),
        skills: render_skills_section(&content.skills),
    };

    RenderedSite {
        html: render_page(&content.profile, &sections),
        css: render_stylesheet().to_string(),
    }
}
