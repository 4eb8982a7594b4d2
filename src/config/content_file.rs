use crate::domain::model::SiteContent;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Loads portfolio content from a TOML document.
///
/// ```toml
/// [profile]
/// name = "Ada Lovelace"
/// subtitle = "Analyst"
/// intro = "..."
/// linkedin_url = "https://www.linkedin.com/in/ada"
/// github_url = "https://github.com/ada"
/// research_url = "${RESEARCH_URL}"
///
/// [[experience]]
/// company = "Analytical Engine Co."
/// position = "Programmer"
/// duration = "1842 – 1843"
/// location = "London"
/// technologies = ["Punched cards"]
/// highlights = ["Published the first algorithm", "Wrote $${NOTE_G} by hand"]
/// ```
///
/// `${VAR}` anywhere in the document is replaced with the environment value
/// before parsing. Write `$${VAR}` to keep a literal `${VAR}` in the page.
pub struct ContentFile;

impl ContentFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SiteContent> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<SiteContent> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left untouched.
    /// `$${VAR}` is an escape and becomes the literal `${VAR}`.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$(\$)?\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[2];
            if caps.get(1).is_some() {
                return format!("${{{}}}", var_name);
            }
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for SiteContent {
    fn validate(&self) -> Result<()> {
        let profile = &self.profile;
        validate_non_empty_string("profile.name", &profile.name)?;
        validate_url("profile.linkedin_url", &profile.linkedin_url)?;
        validate_url("profile.github_url", &profile.github_url)?;
        validate_url("profile.research_url", &profile.research_url)?;
        validate_range("profile.copyright_year", profile.copyright_year, 1900, 9999)?;

        for (i, exp) in self.experience.iter().enumerate() {
            validate_non_empty_string(&format!("experience[{}].company", i), &exp.company)?;
            validate_non_empty_string(&format!("experience[{}].position", i), &exp.position)?;
        }

        for (i, edu) in self.education.iter().enumerate() {
            validate_non_empty_string(&format!("education[{}].institution", i), &edu.institution)?;
            validate_non_empty_string(&format!("education[{}].degree", i), &edu.degree)?;
        }

        for (i, proj) in self.projects.iter().enumerate() {
            validate_non_empty_string(&format!("projects[{}].name", i), &proj.name)?;
            validate_url(&format!("projects[{}].link", i), &proj.link)?;
        }

        for (i, skill) in self.skills.iter().enumerate() {
            validate_non_empty_string(&format!("skills[{}].category", i), &skill.category)?;
        }

        Ok(())
    }
}
