//! Markdown blog content
//!
//! Posts are markdown files with YAML front matter, loaded from disk
//! once at startup. The store keeps rendered HTML alongside parsed
//! metadata and serves lookups by slug and tag.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Post metadata from front matter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMeta {
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    pub excerpt: String,
    pub tags: Vec<String>,
}

/// A fully rendered post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMeta,
    pub html: String,
}

/// Raw front matter as it appears in the file
#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: Option<String>,
    slug: Option<String>,
    date: Option<NaiveDate>,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// In-memory post store
///
/// Posts are ordered date-descending; `by_slug` indexes into that
/// ordering.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    by_slug: HashMap<String, usize>,
}

impl PostStore {
    /// An empty store, used when no posts directory is configured
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load all `.md`/`.mdx` files from a directory
    ///
    /// A missing directory yields an empty store; a malformed post
    /// file is an error.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "Posts directory not found, serving no posts");
            return Ok(Self::empty());
        }

        let mut paths: Vec<_> = fs::read_dir(dir)
            .with_context(|| format!("Failed to read posts directory {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("md") | Some("mdx")
                )
            })
            .collect();
        // Deterministic slug resolution when two files collide
        paths.sort();

        let mut posts = Vec::with_capacity(paths.len());
        for path in paths {
            let post = parse_post(&path)
                .with_context(|| format!("Failed to parse post {}", path.display()))?;
            posts.push(post);
        }

        posts.sort_by(|a, b| {
            b.meta
                .date
                .cmp(&a.meta.date)
                .then_with(|| a.meta.slug.cmp(&b.meta.slug))
        });

        let mut by_slug = HashMap::with_capacity(posts.len());
        for (idx, post) in posts.iter().enumerate() {
            by_slug.entry(post.meta.slug.clone()).or_insert(idx);
        }

        Ok(Self { posts, by_slug })
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// All post metadata, newest first
    pub fn list(&self) -> Vec<&PostMeta> {
        self.posts.iter().map(|p| &p.meta).collect()
    }

    /// Look up a single post by slug
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug).map(|&idx| &self.posts[idx])
    }

    /// Post metadata carrying the given tag, newest first
    pub fn by_tag(&self, tag: &str) -> Vec<&PostMeta> {
        self.posts
            .iter()
            .filter(|p| p.meta.tags.iter().any(|t| t == tag))
            .map(|p| &p.meta)
            .collect()
    }
}

/// Parse a single post file: front matter block, then markdown body
fn parse_post(path: &Path) -> Result<Post> {
    let raw = fs::read_to_string(path)?;
    let (front, body) = split_front_matter(&raw)?;

    let fm: FrontMatter = serde_yaml::from_str(front)?;

    let title = match fm.title {
        Some(t) if !t.trim().is_empty() => t,
        _ => bail!("missing title in front matter"),
    };
    let date = fm.date.context("missing date in front matter")?;

    let slug = match fm.slug {
        Some(s) if !s.trim().is_empty() => s,
        _ => path
            .file_stem()
            .and_then(|s| s.to_str())
            .context("file name is not valid UTF-8")?
            .to_string(),
    };

    let meta = PostMeta {
        title,
        slug,
        date,
        excerpt: fm.excerpt.unwrap_or_default(),
        tags: fm.tags,
    };

    Ok(Post {
        meta,
        html: render_markdown(body),
    })
}

/// Split a document into its front matter and body
///
/// The front matter is delimited by `---` lines at the top of the
/// file. A document without a front matter block is an error, since
/// title and date are required.
fn split_front_matter(raw: &str) -> Result<(&str, &str)> {
    let rest = raw
        .strip_prefix("---")
        .context("missing front matter block")?;
    let rest = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")).unwrap_or(rest);

    let end = rest
        .find("\n---")
        .context("unterminated front matter block")?;
    let front = &rest[..end];
    let body = rest[end + 4..].trim_start_matches('-');
    let body = body.strip_prefix('\n').or_else(|| body.strip_prefix("\r\n")).unwrap_or(body);

    Ok((front, body))
}

/// Render a markdown body to HTML
fn render_markdown(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(body, options);
    let mut out = String::with_capacity(body.len() * 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_post(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    const POST_A: &str = "---\n\
title: Training on the Road\n\
slug: training-on-the-road\n\
date: 2024-03-10\n\
excerpt: Staying consistent while traveling.\n\
tags:\n  - training\n  - travel\n\
---\n\
## Pack light\n\nBands beat dumbbells.\n";

    const POST_B: &str = "---\n\
title: Protein Basics\n\
date: 2024-05-01\n\
tags:\n  - nutrition\n\
---\n\
Eat enough protein.\n";

    #[test]
    fn test_load_and_list_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "training-on-the-road.md", POST_A);
        write_post(dir.path(), "protein-basics.md", POST_B);

        let store = PostStore::load(dir.path()).unwrap();
        assert_eq!(store.len(), 2);

        let metas = store.list();
        assert_eq!(metas[0].slug, "protein-basics");
        assert_eq!(metas[1].slug, "training-on-the-road");
    }

    #[test]
    fn test_slug_falls_back_to_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "protein-basics.md", POST_B);

        let store = PostStore::load(dir.path()).unwrap();
        let post = store.get("protein-basics").unwrap();
        assert_eq!(post.meta.title, "Protein Basics");
        assert_eq!(post.meta.excerpt, "");
    }

    #[test]
    fn test_markdown_rendered_to_html() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "training-on-the-road.md", POST_A);

        let store = PostStore::load(dir.path()).unwrap();
        let post = store.get("training-on-the-road").unwrap();
        assert!(post.html.contains("<h2>Pack light</h2>"));
        assert!(post.html.contains("<p>Bands beat dumbbells.</p>"));
    }

    #[test]
    fn test_by_tag_filters() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "training-on-the-road.md", POST_A);
        write_post(dir.path(), "protein-basics.md", POST_B);

        let store = PostStore::load(dir.path()).unwrap();
        let tagged = store.by_tag("nutrition");
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].slug, "protein-basics");
        assert!(store.by_tag("yoga").is_empty());
    }

    #[test]
    fn test_missing_title_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write_post(
            dir.path(),
            "untitled.md",
            "---\ndate: 2024-01-01\n---\nbody\n",
        );

        assert!(PostStore::load(dir.path()).is_err());
    }

    #[test]
    fn test_missing_date_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write_post(
            dir.path(),
            "undated.md",
            "---\ntitle: Undated\n---\nbody\n",
        );

        assert!(PostStore::load(dir.path()).is_err());
    }

    #[test]
    fn test_missing_directory_yields_empty_store() {
        let store = PostStore::load("does/not/exist").unwrap();
        assert!(store.is_empty());
        assert!(store.get("anything").is_none());
    }

    #[test]
    fn test_unknown_slug_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "protein-basics.md", POST_B);

        let store = PostStore::load(dir.path()).unwrap();
        assert!(store.get("carb-basics").is_none());
    }
}
