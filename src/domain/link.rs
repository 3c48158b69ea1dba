//! Inline link tokens and their classification.
//!
//! Links are recognized purely lexically: a token has the shape
//! `[title](href)` and the href is matched against an ordered list of
//! shapes, first match wins. No percent-decoding or URL normalization
//! is performed.

use serde::Serialize;

/// The kind of target a link points at, with the fields relevant to it.
///
/// # Examples
///
/// ```
/// use booklint::domain::{LinkKind, LinkRecord};
///
/// let link = LinkRecord::classify("[setup](install.md#linux)", "index.md");
/// assert_eq!(
///     link.kind(),
///     &LinkKind::InternalWithAnchor {
///         target: "install.md".to_string(),
///         anchor: "linux".to_string(),
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LinkKind {
    /// Scheme-prefixed URL (`http...`).
    External,
    /// Another document, e.g. `guide.md`.
    InternalNoAnchor { target: String },
    /// A fragment inside another document, e.g. `guide.md#setup`.
    InternalWithAnchor { target: String, anchor: String },
    /// A fragment inside the owning document, e.g. `#setup`.
    LocalWithAnchor { target: String, anchor: String },
    Image,
    Email,
    /// Nothing above matched.
    Unknown,
}

/// One occurrence of an inline link inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    raw: String,
    title: String,
    href: String,
    #[serde(flatten)]
    kind: LinkKind,
}

impl LinkRecord {
    /// Classifies a raw `[title](href)` token found in document `owner`.
    ///
    /// Always produces a record: a token without the `](` separator is
    /// classified as [`LinkKind::Unknown`].
    pub fn classify(raw: &str, owner: &str) -> Self {
        let (title, href) = raw.split_once("](").unwrap_or((raw, ""));
        let title = title.strip_prefix('[').unwrap_or(title);
        let href = href.strip_suffix(')').unwrap_or(href);

        Self {
            raw: raw.to_string(),
            title: title.to_string(),
            href: href.to_string(),
            kind: classify_href(href, owner),
        }
    }

    /// The token exactly as it appeared in the document.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn kind(&self) -> &LinkKind {
        &self.kind
    }

    /// Returns the identifier of the document this link resolves to.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            LinkKind::InternalNoAnchor { target }
            | LinkKind::InternalWithAnchor { target, .. }
            | LinkKind::LocalWithAnchor { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn anchor(&self) -> Option<&str> {
        match &self.kind {
            LinkKind::InternalWithAnchor { anchor, .. }
            | LinkKind::LocalWithAnchor { anchor, .. } => Some(anchor),
            _ => None,
        }
    }

    /// True for links into another document, with or without a fragment.
    pub fn is_internal(&self) -> bool {
        matches!(
            self.kind,
            LinkKind::InternalNoAnchor { .. } | LinkKind::InternalWithAnchor { .. }
        )
    }

    /// True for fragment links into the owning document.
    pub fn is_local(&self) -> bool {
        matches!(self.kind, LinkKind::LocalWithAnchor { .. })
    }
}

fn classify_href(href: &str, owner: &str) -> LinkKind {
    let bare = !href.chars().any(char::is_whitespace);

    if href.starts_with("http") {
        return LinkKind::External;
    }
    if bare && href.ends_with(".md") {
        return LinkKind::InternalNoAnchor {
            target: href.to_string(),
        };
    }
    if bare {
        if let Some(pos) = href.find(".md#") {
            let (target, anchor) = href.split_at(pos + ".md".len());
            return LinkKind::InternalWithAnchor {
                target: target.to_string(),
                anchor: anchor[1..].to_string(),
            };
        }
    }
    if let Some(anchor) = href.strip_prefix('#').filter(|_| bare) {
        return LinkKind::LocalWithAnchor {
            target: owner.to_string(),
            anchor: anchor.to_string(),
        };
    }
    if bare && (href.ends_with(".jpg") || href.ends_with(".png")) {
        return LinkKind::Image;
    }
    if bare && looks_like_email(href) {
        return LinkKind::Email;
    }
    LinkKind::Unknown
}

/// `<something>@<something>.<something>` with no whitespace.
fn looks_like_email(href: &str) -> bool {
    href.find('@')
        .is_some_and(|at| href[at + 1..].contains('.'))
}

/// Finds every non-overlapping `[title](href)` token in a line.
///
/// Matching is non-greedy: from each `[`, the token runs to the first
/// following `](` and then to the first `)` after that. Scanning resumes
/// after the closing `)`.
pub fn extract_link_tokens(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = line[cursor..].find('[') {
        let start = cursor + offset;
        let Some(sep) = line[start + 1..].find("](") else {
            break;
        };
        let href_start = start + 1 + sep + 2;
        let Some(close) = line[href_start..].find(')') else {
            break;
        };
        let end = href_start + close + 1;
        tokens.push(&line[start..end]);
        cursor = end;
    }

    tokens
}
