//! Markdown documents with a YAML front-matter block.
//!
//! A document is an optional `---`-delimited YAML mapping at the very
//! start of the file, followed by the markdown body. Documents without
//! front-matter, with an empty block, or with CRLF line endings all
//! parse; a lone opening delimiter with no closing one is treated as
//! plain body text.

use anyhow::{anyhow, Context};
use serde::de::DeserializeOwned;
use serde_yaml::Value as YamlValue;
use std::fs;
use std::io::Write;
use std::path::Path;

const DELIMITER: &str = "---";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// The parsed front-matter, `None` when the file has no block or the
    /// block is empty.
    pub frontmatter: Option<YamlValue>,
    /// Everything after the front-matter block, byte-for-byte.
    pub body: String,
}

impl Document {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            frontmatter: None,
            body: body.into(),
        }
    }

    /// Parses a markdown string, splitting off the front-matter block.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let Some(first_line) = content.lines().next() else {
            return Ok(Self::default());
        };

        if first_line.trim_end_matches('\r') != DELIMITER {
            return Ok(Self::with_body(content));
        }

        let Some(rest) = strip_opening_delimiter(content) else {
            return Ok(Self::with_body(content));
        };

        let Some((frontmatter_str, body_start)) = extract_block(rest) else {
            // Unterminated front-matter: treat the whole file as body.
            return Ok(Self::with_body(content));
        };

        let frontmatter = if frontmatter_str.trim().is_empty() {
            None
        } else {
            Some(
                serde_yaml::from_str(frontmatter_str)
                    .with_context(|| "Failed to parse YAML frontmatter at start of document")?,
            )
        };

        Ok(Self {
            frontmatter,
            body: rest[body_start..].to_string(),
        })
    }

    /// Renders the document back to text, front-matter block first.
    pub fn render(&self) -> String {
        let Some(value) = &self.frontmatter else {
            return self.body.clone();
        };

        let mut serialized = serde_yaml::to_string(value).unwrap_or_else(|_| "{}\n".to_string());
        while serialized.ends_with(['\n', '\r']) {
            serialized.pop();
        }

        let mut out = String::new();
        out.push_str(DELIMITER);
        out.push('\n');
        if !serialized.is_empty() {
            out.push_str(&serialized);
            out.push('\n');
        }
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&self.body);
        out
    }

    /// Deserializes the front-matter into a typed value.
    pub fn deserialize<T: DeserializeOwned>(&self) -> anyhow::Result<T> {
        let value = self
            .frontmatter
            .clone()
            .ok_or_else(|| anyhow!("Document has no frontmatter"))?;
        serde_yaml::from_value(value).map_err(|e| anyhow!("Failed to deserialize frontmatter: {e}"))
    }

    /// Looks up a string value in the front-matter mapping.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.frontmatter.as_ref()?.get(key)?.as_str()
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Self::parse(&text)
    }

    /// Writes the document through a named temporary file in the target
    /// directory, atomically replacing the destination.
    pub fn to_file(&self, path: &Path) -> anyhow::Result<()> {
        let parent_dir = path
            .parent()
            .ok_or_else(|| anyhow!("Could not determine parent directory of {}", path.display()))?;

        let mut temp_file = tempfile::Builder::new()
            .prefix(".nb-")
            .suffix(".tmp")
            .tempfile_in(parent_dir)
            .with_context(|| {
                format!("Failed to create temporary file in {}", parent_dir.display())
            })?;

        temp_file
            .write_all(self.render().as_bytes())
            .with_context(|| "Failed to write to temporary file")?;

        temp_file
            .persist(path)
            .with_context(|| format!("Failed to replace file {}", path.display()))?;

        Ok(())
    }
}

fn strip_opening_delimiter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;

    if let Some(stripped) = rest.strip_prefix("\r\n") {
        Some(stripped)
    } else if let Some(stripped) = rest.strip_prefix('\n') {
        Some(stripped)
    } else {
        None
    }
}

/// Finds the closing delimiter line, returning the raw front-matter text
/// and the byte offset where the body starts.
fn extract_block(content: &str) -> Option<(&str, usize)> {
    let mut offset = 0;

    for line in content.split_terminator('\n') {
        if line.trim_end_matches('\r') == DELIMITER {
            let mut body_start = offset + line.len();
            if content.len() > body_start && content.as_bytes()[body_start] == b'\n' {
                body_start += 1;
            }
            return Some((&content[..offset], body_start));
        }
        offset += line.len() + 1;
    }

    None
}
