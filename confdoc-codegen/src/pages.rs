//! Page tree walking, output paths, and links.
//!
//! Every property gets its own page, nested one directory per level:
//!
//! ```text
//! index.md                      <- root config
//! port/index.md
//! jetstream/index.md
//! jetstream/store_dir/index.md
//! ```
//!
//! Page formats share this layout so links stay consistent between them.

use std::path::PathBuf;

use confdoc_ir::{Config, Property};

/// Default file name of a page within its directory.
pub const DEFAULT_INDEX_NAME: &str = "index.md";

/// How links between pages are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOptions {
    /// URL path prefix for root-relative links, without a trailing slash.
    base: String,
    /// Write links relative to the linking page instead of root-relative.
    pub relative: bool,
    /// Page file name appended to directory links.
    pub index_name: String,
    /// Link to directories and drop the index file name.
    pub trim_index: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            base: String::new(),
            relative: false,
            index_name: DEFAULT_INDEX_NAME.to_string(),
            trim_index: false,
        }
    }
}

impl LinkOptions {
    /// Create link options with the given base path.
    pub fn new(base: &str) -> Self {
        Self::default().base(base)
    }

    /// Set the base path. `/` and a trailing slash are dropped.
    pub fn base(mut self, base: &str) -> Self {
        self.base = base.trim().trim_end_matches('/').to_string();
        self
    }

    /// Use links relative to the linking page.
    pub fn relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    /// Set the page file name.
    pub fn index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    /// Drop the page file name from links.
    pub fn trim_index(mut self, trim_index: bool) -> Self {
        self.trim_index = trim_index;
        self
    }

    /// The normalized base path.
    pub fn base_path(&self) -> &str {
        &self.base
    }

    /// Link from the page at `from` to the page at `to`.
    pub fn link<F, T>(&self, from: &[F], to: &[T]) -> String
    where
        F: AsRef<str>,
        T: AsRef<str>,
    {
        if !self.relative {
            return self.absolute(to);
        }

        let common = from
            .iter()
            .zip(to)
            .take_while(|(a, b)| a.as_ref() == b.as_ref())
            .count();
        let parts: Vec<&str> = std::iter::repeat_n("..", from.len() - common)
            .chain(to[common..].iter().map(|s| s.as_ref()))
            .collect();

        let link = self.finish(&parts);
        if link.is_empty() {
            "./".to_string()
        } else {
            link
        }
    }

    /// Root-relative link to the page at `to`, ignoring [`Self::relative`].
    pub fn absolute<T: AsRef<str>>(&self, to: &[T]) -> String {
        let parts: Vec<&str> = to.iter().map(|s| s.as_ref()).collect();
        format!("{}/{}", self.base, self.finish(&parts))
    }

    fn finish(&self, parts: &[&str]) -> String {
        let mut link = parts.join("/");
        if !link.is_empty() {
            link.push('/');
        }
        if !self.trim_index {
            link.push_str(&self.index_name);
        }
        link
    }
}

/// A link target in a page's breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub name: String,
    pub segments: Vec<String>,
}

/// One page of the tree.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub property: &'a Property,
    /// Directory names from the root page to this page.
    pub segments: Vec<String>,
    /// Pages from the root down to, but excluding, this page.
    pub ancestors: Vec<Crumb>,
}

impl Page<'_> {
    /// Returns true for the root config page.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Nesting depth, zero for the root page.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Output directory of this page, relative to the output root.
    pub fn dir(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Output file of this page, relative to the output root.
    pub fn file(&self, index_name: &str) -> PathBuf {
        self.dir().join(index_name)
    }

    /// Segments of a child page.
    pub fn child_segments(&self, child: &Property) -> Vec<String> {
        let mut segments = self.segments.clone();
        segments.push(child.name.clone());
        segments
    }

    /// Link from this page to the page at `to`.
    pub fn link_to<T: AsRef<str>>(&self, links: &LinkOptions, to: &[T]) -> String {
        links.link(&self.segments, to)
    }
}

/// The config tree as a tree of pages.
#[derive(Debug, Clone)]
pub struct PageTree {
    root: Property,
}

impl PageTree {
    /// Create the page tree of a config. The root config becomes a synthetic
    /// top-level property.
    pub fn new(config: &Config) -> Self {
        Self {
            root: config.to_property(),
        }
    }

    /// The synthetic root property.
    pub fn root(&self) -> &Property {
        &self.root
    }

    /// All pages, parents before children, in declaration order.
    pub fn pages(&self) -> Vec<Page<'_>> {
        let mut pages = Vec::new();
        collect(&self.root, Vec::new(), Vec::new(), &mut pages);
        pages
    }

    /// Number of pages in the tree, the root page included.
    pub fn page_count(&self) -> usize {
        1 + count(&self.root)
    }

    /// Nested list of every page, linked root-relative.
    ///
    /// ```text
    /// - [nats](/index.md)
    ///   - [port](/port/index.md)
    /// ```
    pub fn table_of_contents(&self, links: &LinkOptions) -> String {
        let mut out = String::new();
        for page in self.pages() {
            out.push_str(&"  ".repeat(page.depth()));
            out.push_str(&format!(
                "- [{}]({})\n",
                page.property.name,
                links.absolute(&page.segments)
            ));
        }
        out
    }

    /// Output files of every page, relative to the output root.
    pub fn files(&self, index_name: &str) -> Vec<PathBuf> {
        self.pages().iter().map(|p| p.file(index_name)).collect()
    }
}

fn collect<'a>(
    property: &'a Property,
    segments: Vec<String>,
    ancestors: Vec<Crumb>,
    pages: &mut Vec<Page<'a>>,
) {
    let mut child_ancestors = ancestors.clone();
    child_ancestors.push(Crumb {
        name: property.name.clone(),
        segments: segments.clone(),
    });

    pages.push(Page {
        property,
        segments: segments.clone(),
        ancestors,
    });

    for child in property.children() {
        let mut child_segments = segments.clone();
        child_segments.push(child.name.clone());
        collect(child, child_segments, child_ancestors.clone(), pages);
    }
}

fn count(property: &Property) -> usize {
    property.children().map(|c| 1 + count(c)).sum()
}
