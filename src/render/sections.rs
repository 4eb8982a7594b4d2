use crate::domain::model::{EducationEntry, ExperienceEntry, ProjectEntry, SkillCategory};
use crate::render::markup::{Element, Fragment};

fn technologies_line(technologies: &[String]) -> Element {
    Element::new("p")
        .class("technologies")
        .child(Element::new("strong").text("Technologies:"))
        .text(format!(" {}", technologies.join(", ")))
}

fn list(class: &str, items: &[String]) -> Element {
    Element::new("ul")
        .class(class)
        .children(items.iter().map(|item| Element::new("li").text(item.as_str())))
}

pub fn render_experience_section(entries: &[ExperienceEntry]) -> Fragment {
    entries
        .iter()
        .map(|exp| {
            Element::new("div")
                .class("experience")
                .child(Element::new("h3").text(format!("{} – {}", exp.position, exp.company)))
                .child(
                    Element::new("span")
                        .class("duration-location")
                        .text(format!("{} | {}", exp.duration, exp.location)),
                )
                .child(technologies_line(&exp.technologies))
                .child(list("highlights", &exp.highlights))
        })
        .collect()
}

pub fn render_education_section(entries: &[EducationEntry]) -> Fragment {
    entries
        .iter()
        .map(|edu| {
            let mut when_where = format!("{} | {}", edu.duration, edu.location);
            if let Some(gpa) = edu.display_gpa() {
                when_where.push_str(&format!(" | GPA: {}", gpa));
            }

            let mut block = Element::new("div")
                .class("education")
                .child(Element::new("h3").text(edu.degree.as_str()))
                .child(
                    Element::new("span")
                        .class("institution")
                        .text(edu.institution.as_str()),
                )
                .child(
                    Element::new("span")
                        .class("duration-location")
                        .text(when_where),
                );

            if !edu.details.is_empty() {
                block = block.child(list("details", &edu.details));
            }

            block
        })
        .collect()
}

pub fn render_projects_section(entries: &[ProjectEntry]) -> Fragment {
    entries
        .iter()
        .map(|proj| {
            Element::new("div")
                .class("project")
                .child(
                    Element::new("h3").child(
                        Element::new("a")
                            .attr("href", proj.link.as_str())
                            .attr("target", "_blank")
                            .attr("rel", "noopener noreferrer")
                            .text(proj.name.as_str()),
                    ),
                )
                .child(
                    Element::new("p")
                        .class("description")
                        .text(proj.description.as_str()),
                )
                .child(technologies_line(&proj.technologies))
        })
        .collect()
}

pub fn render_skills_section(categories: &[SkillCategory]) -> Fragment {
    categories
        .iter()
        .map(|skill| {
            Element::new("div")
                .class("skill-category")
                .child(Element::new("h4").text(skill.category.as_str()))
                .child(Element::new("p").text(skill.items.join(", ")))
        })
        .collect()
}
