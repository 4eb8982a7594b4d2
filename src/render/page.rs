use crate::domain::model::ProfileInfo;
use crate::render::markup::{Element, Fragment};

pub const STYLESHEET_HREF: &str = "style.css";
pub const PLACEHOLDER_IMAGE: &str = "assets/placeholder.png";

/// Swaps the placeholder for the picked file. Runs in the browser only; nothing is uploaded.
const PHOTO_PREVIEW_SCRIPT: &str = r#"// Preview the uploaded profile photo by setting it as the src of the img tag
const photoInput = document.getElementById('photo-upload');
photoInput.addEventListener('change', function(event) {
    const file = event.target.files[0];
    if (file) {
        const reader = new FileReader();
        reader.onload = function(e) {
            document.getElementById('profile-img').src = e.target.result;
        };
        reader.readAsDataURL(file);
    }
});"#;

/// Rendered body sections, in page order.
#[derive(Debug, Clone, Default)]
pub struct PageSections {
    pub experience: Fragment,
    pub education: Fragment,
    pub projects: Fragment,
    pub skills: Fragment,
}

fn external_link(href: &str, label: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(label)
}

fn section(id: &str, heading: &str, body: impl IntoIterator<Item = Element>) -> Element {
    Element::new("section").id(id).child(
        Element::new("div")
            .class("container")
            .child(Element::new("h2").text(heading))
            .children(body),
    )
}

fn head(profile: &ProfileInfo) -> Element {
    Element::new("head")
        .child(Element::new("meta").attr("charset", "UTF-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text(format!("{} – Personal Website", profile.name)))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", STYLESHEET_HREF),
        )
}

fn header(profile: &ProfileInfo) -> Element {
    Element::new("header").child(
        Element::new("div")
            .class("container intro")
            .child(
                Element::new("img")
                    .id("profile-img")
                    .attr("src", PLACEHOLDER_IMAGE)
                    .attr("alt", "Profile Photo"),
            )
            .child(
                Element::new("input")
                    .attr("type", "file")
                    .id("photo-upload")
                    .attr("accept", "image/*"),
            )
            .child(Element::new("h1").text(profile.name.as_str()))
            .child(
                Element::new("p")
                    .class("subtitle")
                    .text(profile.subtitle.as_str()),
            )
            .child(
                Element::new("div")
                    .class("links")
                    .child(external_link(&profile.linkedin_url, "LinkedIn"))
                    .child(external_link(&profile.github_url, "GitHub"))
                    .child(external_link(&profile.research_url, "Research Article")),
            ),
    )
}

pub fn render_page(profile: &ProfileInfo, sections: &PageSections) -> String {
    let main = Element::new("main")
        .child(section(
            "about",
            "About Me",
            [Element::new("p").text(profile.intro.as_str())],
        ))
        .child(section(
            "experience",
            "Work Experience",
            sections.experience.clone(),
        ))
        .child(section("education", "Education", sections.education.clone()))
        .child(section("projects", "Projects", sections.projects.clone()))
        .child(section(
            "skills",
            "Skills",
            [Element::new("div")
                .class("skills-grid")
                .children(sections.skills.clone())],
        ));

    let footer = Element::new("footer").child(
        Element::new("div").class("container").child(Element::new("p").text(format!(
            "© {} {}. All rights reserved.",
            profile.copyright_year, profile.name
        ))),
    );

    let body = Element::new("body")
        .child(header(profile))
        .child(main)
        .child(footer)
        .child(Element::new("script").raw(PHOTO_PREVIEW_SCRIPT));

    let html = Element::new("html")
        .attr("lang", "en")
        .child(head(profile))
        .child(body);

    format!("<!DOCTYPE html>\n{}\n", html.render())
}
