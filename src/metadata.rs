use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::GeneratorError;

// front matter block at the very top of a post
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\A---\r?\n(.*?)^---(?:\r?\n|\z)(.*)")
        .dot_matches_new_line(true)
        .multi_line(true)
        .build()
        .expect("header pattern is valid")
});

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostMetadata {
    pub title: String,
    pub date: NaiveDate,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl PostMetadata {
    pub fn new(
        title: &str,
        date: NaiveDate,
        categories: Vec<String>,
        tags: Vec<String>,
    ) -> Result<Self, GeneratorError> {
        if title.trim().is_empty() {
            return Err(GeneratorError::invalid("title must not be empty"));
        }
        if title.contains(['\n', '\r']) {
            return Err(GeneratorError::invalid("title must be a single line"));
        }

        Ok(Self {
            title: title.to_string(),
            date,
            categories: validate_list("category", categories)?,
            tags: validate_list("tag", tags)?,
        })
    }

    // (metadata, text after the closing marker)
    pub fn parse(content: &str) -> Result<(Self, String), GeneratorError> {
        let caps = HEADER_PATTERN
            .captures(content)
            .ok_or_else(|| GeneratorError::invalid("missing front matter block"))?;

        let mut title = None;
        let mut date = None;
        let mut categories = vec![];
        let mut tags = vec![];

        for line in caps[1].lines() {
            if line.trim().is_empty() {
                continue;
            }
            let (name, raw) = line
                .split_once(':')
                .ok_or_else(|| GeneratorError::invalid(format!("invalid header: {line}")))?;
            let value = raw.trim();
            match name.trim() {
                // only the separator space is dropped, the title is kept as written
                "title" => title = Some(raw.strip_prefix(' ').unwrap_or(raw).to_string()),
                "date" => {
                    date = Some(NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
                        GeneratorError::invalid(format!("invalid date {value:?}: {e}"))
                    })?);
                }
                "categories" => categories = parse_inline_list(value),
                "tags" => tags = parse_inline_list(value),
                _ => {}
            }
        }

        let title = title.ok_or_else(|| GeneratorError::invalid("missing title"))?;
        let date = date.ok_or_else(|| GeneratorError::invalid("missing date"))?;
        let metadata = Self::new(&title, date, categories, tags)?;

        Ok((metadata, caps[2].to_string()))
    }
}

fn validate_list(kind: &str, items: Vec<String>) -> Result<Vec<String>, GeneratorError> {
    items
        .into_iter()
        .map(|item| {
            let item = item.trim();
            if item.is_empty() {
                Err(GeneratorError::invalid(format!("{kind} must not be empty")))
            } else if item.contains([',', '[', ']', '\n', '\r']) {
                Err(GeneratorError::invalid(format!(
                    "{kind} {item:?} contains a reserved character"
                )))
            } else {
                Ok(item.to_string())
            }
        })
        .collect()
}

fn parse_inline_list(value: &str) -> Vec<String> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    inner
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
