//! Filing links into the notebook's `Collections/Links` folder.

use crate::config::Config;
use crate::error::NotebookError;
use anyhow::Context;
use serde::Deserialize;
use std::fs;

/// The front-matter a link note carries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkNote {
    pub id: String,
    pub title: String,
    pub url: String,
    pub read: bool,
}

/// Renders the fixed link-note template.
///
/// The title and URL are substituted verbatim: no escaping is applied, so
/// values containing newlines or `: ` sequences will produce a block that
/// does not parse back.
pub fn render_link_note(title: &str, url: &str) -> String {
    format!("---\nid: {title}\ntitle: {title}\nurl: {url}\nread: false\n---")
}

/// Writes a link note at `<root>/Collections/Links/<title>.md`.
///
/// The title is used verbatim as the file stem and an existing note with
/// the same title is overwritten without comment. The `Collections/Links`
/// directory is expected to exist (see `nb init`); if it does not, the
/// write fails and the error is returned to the caller.
pub fn collect_link(config: &Config, title: &str, url: Option<&str>) -> anyhow::Result<()> {
    let url = url.ok_or(NotebookError::MissingUrl)?;

    let path = config.links_dir().join(format!("{title}.md"));
    log::debug!("writing link note to {}", path.display());

    fs::write(&path, render_link_note(title, url))
        .with_context(|| format!("Failed to write link note: {}", path.display()))?;

    println!("Collected link '{title}' -> {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::Document;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn template_is_the_exact_fixed_block() {
        let rendered = render_link_note("MyTitle", "https://example.com");
        assert_eq!(
            rendered,
            "---\nid: MyTitle\ntitle: MyTitle\nurl: https://example.com\nread: false\n---"
        );
    }

    #[rstest]
    #[case("MyTitle", "https://example.com")]
    #[case("A title with spaces", "https://example.com/some/path?q=1")]
    #[case("unicode-ö", "https://example.org")]
    fn template_fields_round_trip(#[case] title: &str, #[case] url: &str) {
        let doc = Document::parse(&render_link_note(title, url)).unwrap();
        let note: LinkNote = doc.deserialize().unwrap();

        assert_eq!(note.id, title);
        assert_eq!(note.title, title);
        assert_eq!(note.url, url);
        assert!(!note.read);
    }

    #[test]
    fn missing_url_writes_nothing() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("Collections/Links")).unwrap();
        let config = Config::with_root(dir.path());

        let err = collect_link(&config, "MyTitle", None).unwrap_err();
        assert!(err.to_string().contains("No URL provided"));
        assert!(!config.links_dir().join("MyTitle.md").exists());
    }

    #[test]
    fn missing_links_dir_surfaces_io_error() {
        let dir = TempDir::new().unwrap();
        let config = Config::with_root(dir.path());

        let err = collect_link(&config, "MyTitle", Some("https://example.com")).unwrap_err();
        assert!(err.to_string().contains("Failed to write link note"));
    }

    #[test]
    fn reinvoking_overwrites_the_note() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("Collections/Links")).unwrap();
        let config = Config::with_root(dir.path());

        collect_link(&config, "MyTitle", Some("https://first.example")).unwrap();
        collect_link(&config, "MyTitle", Some("https://second.example")).unwrap();

        let content = std::fs::read_to_string(config.links_dir().join("MyTitle.md")).unwrap();
        assert!(content.contains("url: https://second.example"));
        assert!(!content.contains("first.example"));
    }
}
