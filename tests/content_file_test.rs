use anyhow::Result;
use portfolio_site::{CliConfig, LocalStorage, SiteEngine, SiteError, SitePipeline};
use tempfile::TempDir;

const CONTENT: &str = r#"
[profile]
name = "Grace Hopper"
subtitle = "Compilers & COBOL"
intro = "Rear admiral and computer scientist."
linkedin_url = "https://www.linkedin.com/in/grace"
github_url = "https://github.com/grace"
research_url = "https://example.org/a-0"
copyright_year = 1952

[[experience]]
company = "Remington Rand"
position = "Senior Mathematician"
duration = "1949 – 1967"
location = "Philadelphia"
technologies = ["UNIVAC I", "A-0"]
highlights = []

[[experience]]
company = "US Navy"
position = "Director"
duration = "1967 – 1986"
location = "Washington"
technologies = ["COBOL"]
highlights = ["Standardised COBOL testing"]

[[education]]
institution = "Yale University"
degree = "PhD Mathematics"
duration = "1930 – 1934"
location = "New Haven"
gpa = "4.0"
details = ["Thesis on irreducibility criteria"]

[[projects]]
name = "FLOW-MATIC"
description = "English-like data processing language."
technologies = ["UNIVAC"]
link = "https://example.org/flow-matic"

[[skills]]
category = "Languages"
items = ["COBOL", "FLOW-MATIC"]
"#;

#[tokio::test]
async fn test_generate_from_content_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let content_path = temp_dir.path().join("content.toml");
    std::fs::write(&content_path, CONTENT)?;

    let output_dir = temp_dir.path().join("public");
    let output_path = output_dir.to_str().unwrap().to_string();
    let config = CliConfig {
        output_path: output_path.clone(),
        content: Some(content_path.to_str().unwrap().to_string()),
        ..CliConfig::default()
    };

    let engine = SiteEngine::new(SitePipeline::new(LocalStorage::new(output_path), config));
    engine.run().await?;

    let html = std::fs::read_to_string(output_dir.join("index.html"))?;
    assert!(html.contains("<title>Grace Hopper – Personal Website</title>"));
    assert!(html.contains("<p class=\"subtitle\">Compilers &amp; COBOL</p>"));
    assert!(html.contains("Senior Mathematician – Remington Rand"));
    assert!(html.contains("<ul class=\"highlights\"></ul>"));
    assert!(html.contains("1930 – 1934 | New Haven | GPA: 4.0"));
    assert!(html.contains("© 1952 Grace Hopper. All rights reserved."));
    assert!(!html.contains("Sarthak"));

    let first = html.find("Remington Rand").unwrap();
    let second = html.find("US Navy").unwrap();
    assert!(first < second);

    assert!(output_dir.join("style.css").exists());
    Ok(())
}

#[tokio::test]
async fn test_invalid_content_file_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let content_path = temp_dir.path().join("content.toml");
    std::fs::write(
        &content_path,
        CONTENT.replace("https://example.org/flow-matic", "not a url"),
    )?;

    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let config = CliConfig {
        output_path: output_path.clone(),
        content: Some(content_path.to_str().unwrap().to_string()),
        ..CliConfig::default()
    };

    let engine = SiteEngine::new(SitePipeline::new(LocalStorage::new(output_path), config));
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, SiteError::InvalidConfigValueError { .. }));
    assert!(!temp_dir.path().join("index.html").exists());
    Ok(())
}
