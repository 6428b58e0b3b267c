//! Daily log files under `<root>/Log`, one `YYYY-MM-DD.md` per day.
//!
//! New logs are instantiated from the `+Templates/Daily Note.md` template
//! with its date placeholders filled in. Rollover moves unfinished TODO
//! checkboxes from today's log into tomorrow's `## Personal` section.

use crate::cli::LogDateArgs;
use crate::config::Config;
use crate::editor;
use crate::error::NotebookError;
use crate::frontmatter::Document;
use anyhow::Context;
use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

fn resolve_date(args: &LogDateArgs) -> Result<NaiveDate, NotebookError> {
    if let Some(date) = args.date.as_deref() {
        return NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| NotebookError::InvalidDate(date.to_string()));
    }

    let today = Local::now().date_naive();

    if args.yesterday {
        Ok(today - Duration::days(1))
    } else if args.tomorrow {
        Ok(today + Duration::days(1))
    } else {
        Ok(today)
    }
}

fn log_path(config: &Config, date: NaiveDate) -> PathBuf {
    config.log_dir().join(format!("{}.md", date.format("%Y-%m-%d")))
}

fn long_date(date: NaiveDate) -> String {
    date.format("%a %-d %B %Y").to_string()
}

/// Instantiates a daily log from the template, creating the `Log`
/// directory if needed.
fn create_from_template(config: &Config, path: &Path, date: NaiveDate) -> anyhow::Result<()> {
    let template_path = config.daily_template();
    if !template_path.exists() {
        return Err(NotebookError::TemplateMissing(template_path).into());
    }

    let mut doc = Document::from_file(&template_path)?;
    doc.body = doc
        .body
        .replace("{{date:ddd D MMMM YYYY}}", &long_date(date))
        .replace(
            "{{date:D MMMM YYYY}}",
            &date.format("%-d %B %Y").to_string(),
        );

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    doc.to_file(path)
}

/// `nb log edit`: open a daily log, creating it first when missing.
pub fn edit(config: &Config, args: &LogDateArgs) -> anyhow::Result<()> {
    let date = resolve_date(args)?;
    let path = log_path(config, date);

    if !path.exists() {
        println!("Creating new log for {}", long_date(date));
        create_from_template(config, &path, date)?;
    }

    editor::open(config.editor(), &path)
}

fn find_unchecked_todos(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| line.trim_start().starts_with("- [ ]"))
        .map(|line| line.to_string())
        .collect()
}

fn is_todo(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("- [ ]") || trimmed.starts_with("- [x]")
}

/// Index at which rolled-over TODOs should be inserted: the end of the
/// `## Personal` section, or the end of the document when there is none.
fn rollover_insert_index(lines: &[String]) -> usize {
    let Some(personal_idx) = lines.iter().position(|line| line.trim() == "## Personal") else {
        return lines.len();
    };

    let mut insert_pos = personal_idx + 1;
    while insert_pos < lines.len() {
        if lines[insert_pos].trim().starts_with("##") {
            break;
        }
        insert_pos += 1;
    }
    insert_pos
}

/// `nb log rollover`: carry today's unfinished TODOs into tomorrow.
pub fn rollover(config: &Config) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let tomorrow = today + Duration::days(1);

    let today_path = log_path(config, today);
    let tomorrow_path = log_path(config, tomorrow);

    if !today_path.exists() {
        return Err(NotebookError::LogNotFound {
            date: long_date(today),
            path: today_path,
        }
        .into());
    }

    let today_doc = Document::from_file(&today_path)?;
    let unchecked = find_unchecked_todos(&today_doc.body);

    if unchecked.is_empty() {
        println!("No unchecked TODOs to roll over!");
        return Ok(());
    }

    println!("Found {} unchecked TODO(s) to roll over:", unchecked.len());
    for todo in &unchecked {
        println!("  {}", todo.trim());
    }

    if !tomorrow_path.exists() {
        println!("\nCreating tomorrow's log for {}", long_date(tomorrow));
        create_from_template(config, &tomorrow_path, tomorrow)?;
    }

    let mut tomorrow_doc = Document::from_file(&tomorrow_path)?;
    let mut lines: Vec<String> = tomorrow_doc.body.lines().map(|s| s.to_string()).collect();

    let insert_idx = rollover_insert_index(&lines);
    lines.insert(insert_idx, String::new());
    lines.insert(insert_idx + 1, format!("### Rolled over from {}", long_date(today)));
    lines.insert(insert_idx + 2, String::new());
    for (i, todo) in unchecked.iter().enumerate() {
        lines.insert(insert_idx + 3 + i, todo.clone());
    }

    tomorrow_doc.body = lines.join("\n") + "\n";
    tomorrow_doc.to_file(&tomorrow_path)?;

    println!(
        "\nSuccessfully rolled over {} TODO(s) to {}",
        unchecked.len(),
        long_date(tomorrow)
    );

    Ok(())
}

/// `nb log list`: show the last `days` daily logs with TODO counts.
pub fn list(config: &Config, days: usize, show_unfinished: bool) -> anyhow::Result<()> {
    let log_dir = config.log_dir();
    if !log_dir.exists() {
        return Err(NotebookError::LogDirMissing(log_dir).into());
    }

    let entries = fs::read_dir(&log_dir)
        .with_context(|| format!("Failed to read log directory: {}", log_dir.display()))?;

    // Dated filenames sort chronologically in the map.
    let mut logs: BTreeMap<NaiveDate, PathBuf> = BTreeMap::new();
    for entry in entries {
        let path = entry
            .with_context(|| "Failed to read directory entry")?
            .path();

        let Some(filename) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };
        let Some(stem) = filename.strip_suffix(".md") else {
            continue;
        };
        if let Ok(date) = NaiveDate::parse_from_str(stem, "%Y-%m-%d") {
            logs.insert(date, path);
        }
    }

    let today = Local::now().date_naive();
    let cutoff = today - Duration::days(days as i64 - 1);

    let recent: Vec<_> = logs
        .iter()
        .filter(|(date, _)| **date >= cutoff && **date <= today)
        .rev()
        .collect();

    if recent.is_empty() {
        println!("No logs found in the last {} day(s)", days);
        return Ok(());
    }

    println!("Logs from the last {} day(s):\n", days);

    for (date, path) in recent {
        let (total, completed, unchecked) = match Document::from_file(path) {
            Ok(doc) => {
                let total = doc.body.lines().filter(|line| is_todo(line)).count();
                let completed = doc
                    .body
                    .lines()
                    .filter(|line| line.trim_start().starts_with("- [x]"))
                    .count();
                let unchecked = if show_unfinished {
                    find_unchecked_todos(&doc.body)
                } else {
                    Vec::new()
                };
                (total, completed, unchecked)
            }
            Err(_) => (0, 0, Vec::new()),
        };

        let todo_info = if total > 0 {
            format!("  [{completed}/{total}]")
        } else {
            String::new()
        };

        println!("{} ({}){}", date.format("%Y-%m-%d"), date.format("%a"), todo_info);

        if show_unfinished {
            for todo in unchecked {
                println!("  {}", todo.trim());
            }
        }
    }

    Ok(())
}
