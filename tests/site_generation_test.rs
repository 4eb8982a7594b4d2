use portfolio_site::{
    CliConfig, LocalStorage, ProjectEntry, SiteContent, SiteEngine, SiteError, SitePipeline,
};
use tempfile::TempDir;

fn config_for(output_path: &str) -> CliConfig {
    CliConfig {
        output_path: output_path.to_string(),
        ..CliConfig::default()
    }
}

async fn generate(output_path: &str) -> Result<Vec<String>, SiteError> {
    let storage = LocalStorage::new(output_path);
    let engine = SiteEngine::new(SitePipeline::new(storage, config_for(output_path)));
    engine.run().await
}

#[tokio::test]
async fn test_generates_index_and_stylesheet() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let written = generate(&output_path).await.unwrap();
    assert_eq!(written.len(), 2);

    let html = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    let css = std::fs::read_to_string(temp_dir.path().join("style.css")).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
    assert!(html.contains("<input type=\"file\" id=\"photo-upload\" accept=\"image/*\">"));
    assert!(html.contains("reader.readAsDataURL(file);"));
    assert!(html.contains("Software Development Engineer II – IBM"));
    assert!(html.contains("href=\"https://github.com/Sarthak-kiloray/DigiSchool\" target=\"_blank\""));
    assert!(html.contains(" | GPA: 3.52/4.0</span>"));
    assert_eq!(html.matches("GPA").count(), 1);
    assert!(css.contains(".skills-grid"));
}

#[tokio::test]
async fn test_regeneration_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    generate(&output_path).await.unwrap();
    let first_html = std::fs::read(temp_dir.path().join("index.html")).unwrap();
    let first_css = std::fs::read(temp_dir.path().join("style.css")).unwrap();

    generate(&output_path).await.unwrap();
    let second_html = std::fs::read(temp_dir.path().join("index.html")).unwrap();
    let second_css = std::fs::read(temp_dir.path().join("style.css")).unwrap();

    assert_eq!(first_html, second_html);
    assert_eq!(first_css, second_css);
}

#[tokio::test]
async fn test_existing_output_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(temp_dir.path().join("index.html"), "stale").unwrap();

    generate(&output_path).await.unwrap();

    let html = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert!(!html.contains("stale"));
    assert!(html.contains("About Me"));
}

#[tokio::test]
async fn test_unwritable_output_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("occupied");
    std::fs::write(&blocker, "a file, not a directory").unwrap();

    let err = generate(blocker.to_str().unwrap()).await.unwrap_err();

    assert!(matches!(err, SiteError::WriteError { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_markup_in_content_is_escaped() {
    let mut content = SiteContent::builtin();
    content.experience[0]
        .highlights
        .push("Cut p99 latency to <5ms & kept <script>alert(1)</script> out".to_string());
    content.projects.push(ProjectEntry {
        name: "Tom & Jerry's \"Tools\"".to_string(),
        description: "<b>bold</b>".to_string(),
        technologies: vec!["C++ <templates>".to_string()],
        link: "https://example.com/?a=1&b=2".to_string(),
    });

    let html = portfolio_site::render_site(&content).html;

    assert!(html.contains("Cut p99 latency to &lt;5ms &amp; kept &lt;script&gt;alert(1)&lt;/script&gt; out"));
    assert!(html.contains("Tom &amp; Jerry&#39;s &quot;Tools&quot;"));
    assert!(html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(!html.contains("<b>bold</b>"));
    assert_eq!(html.matches("<script>").count(), 1);
}
