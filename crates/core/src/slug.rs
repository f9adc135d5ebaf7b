//! Slug derivation for project URLs.
//!
//! A slug is computed once at project creation and never changes afterwards,
//! so existing links keep working when a title is edited.

/// Derive a URL slug from a project title.
///
/// Lowercases the title, collapses every run of non-alphanumeric characters
/// into a single `-`, and strips leading/trailing separators. Idempotent on
/// input that is already a slug.
///
/// # Examples
///
/// ```
/// use atelier_core::slug::slugify;
///
/// assert_eq!(slugify("My Project!! 2024"), "my-project-2024");
/// assert_eq!(slugify("already-slugified"), "already-slugified");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
