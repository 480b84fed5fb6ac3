//! Markdown files with a `---` front matter header

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pulldown_cmark::{Event, Parser, Tag};
use tracing::debug;
use walkdir::WalkDir;

use crate::domain::ingestion::transform::front_matter_draft;
use crate::domain::ingestion::{
    DocumentSource, FrontMatter, FrontMatterFile, RecordKind, SourceRecord,
};
use crate::domain::DomainError;

const FENCE: &str = "---";
const EXTENSIONS: &[&str] = &["md", "mdx"];

/// Every `.md`/`.mdx` file below a directory, one document per file
#[derive(Debug, Clone)]
pub struct FrontMatterDirectory {
    root: PathBuf,
}

impl FrontMatterDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Markdown files below the root, sorted by path
    async fn markdown_files(&self) -> Result<Vec<PathBuf>, DomainError> {
        let root = self.root.clone();

        tokio::task::spawn_blocking(move || {
            let mut files = Vec::new();

            for entry in WalkDir::new(&root).sort_by_file_name() {
                let entry = entry.map_err(|e| {
                    DomainError::io(format!("Failed to walk {}: {}", root.display(), e))
                })?;

                if entry.file_type().is_file() && is_markdown(entry.path()) {
                    files.push(entry.into_path());
                }
            }

            files.sort();
            Ok::<_, DomainError>(files)
        })
        .await
        .map_err(|e| DomainError::internal(format!("Directory walk aborted: {}", e)))?
    }

    async fn read_file(path: &Path) -> Result<FrontMatterFile, DomainError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::io(format!("Failed to read {}: {}", path.display(), e)))?;

        Ok(parse_front_matter_file(path, &raw))
    }
}

#[async_trait]
impl DocumentSource for FrontMatterDirectory {
    fn name(&self) -> &str {
        "blog files"
    }

    async fn load(&self) -> Result<Vec<SourceRecord>, DomainError> {
        if !tokio::fs::try_exists(&self.root).await.unwrap_or(false) {
            debug!(root = %self.root.display(), "Content directory not found, skipping");
            return Ok(Vec::new());
        }

        let files = self.markdown_files().await?;
        let mut records = Vec::with_capacity(files.len());

        for path in files {
            let record_id = path
                .strip_prefix(&self.root)
                .unwrap_or(&path)
                .display()
                .to_string();

            let draft = match Self::read_file(&path).await {
                Ok(file) => front_matter_draft(&file),
                Err(e) => Err(e),
            };

            records.push(SourceRecord::new(RecordKind::BlogFile, record_id, draft));
        }

        debug!(root = %self.root.display(), files = records.len(), "Loaded blog files");
        Ok(records)
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Split a file into its header and a plain-text body
pub fn parse_front_matter_file(path: &Path, raw: &str) -> FrontMatterFile {
    let (front_matter, markdown) = split_front_matter(raw);

    FrontMatterFile {
        path: path.to_path_buf(),
        front_matter,
        body: markdown_to_text(markdown),
    }
}

/// Files without a header yield an empty `FrontMatter` and the whole text
pub fn split_front_matter(raw: &str) -> (FrontMatter, &str) {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let Some(rest) = raw.strip_prefix(FENCE) else {
        return (FrontMatter::default(), raw);
    };
    let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return (FrontMatter::default(), raw);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (parse_header(header), body);
        }
        offset += line.len();
    }

    // Unterminated header: treat the file as plain Markdown
    (FrontMatter::default(), raw)
}

fn parse_header(header: &str) -> FrontMatter {
    let mut front_matter = FrontMatter::default();
    let mut list_key: Option<String> = None;

    for line in header.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Block list item continuing the previous key
        if let Some(item) = trimmed.strip_prefix("- ") {
            if list_key.as_deref() == Some("tags") {
                front_matter.tags.push(unquote(item).to_string());
            }
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();

        if value.is_empty() {
            list_key = Some(key);
            continue;
        }
        list_key = None;

        match key.as_str() {
            "title" => front_matter.title = Some(unquote(value).to_string()),
            "category" => front_matter.category = Some(unquote(value).to_string()),
            "date" => front_matter.date = Some(unquote(value).to_string()),
            "difficulty" => front_matter.difficulty = Some(unquote(value).to_string()),
            "tags" => front_matter.tags = parse_list(value),
            _ => {}
        }
    }

    front_matter
}

/// `[a, "b c"]` or a single scalar
fn parse_list(value: &str) -> Vec<String> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    inner
        .split(',')
        .map(unquote)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn unquote(value: &str) -> &str {
    let value = value.trim();
    ['"', '\'']
        .iter()
        .find_map(|quote| {
            value
                .strip_prefix(*quote)
                .and_then(|v| v.strip_suffix(*quote))
        })
        .unwrap_or(value)
}

/// Strip Markdown down to readable text, one block per line
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::Start(Tag::Heading(..))
            | Event::Start(Tag::Paragraph)
            | Event::Start(Tag::CodeBlock(_)) => {
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            Event::End(Tag::Heading(..))
            | Event::End(Tag::Paragraph)
            | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
            Event::Start(Tag::Item) => {
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
                text.push_str("- ");
            }
            Event::End(Tag::Item) => {
                if !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            _ => {}
        }
    }

    text.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
