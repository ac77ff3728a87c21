//! Same-file hyperlink scrubbing.
//!
//! Doxygen keeps `<ref>` links to members of the same file inside parameter
//! `<type>` fields no matter how it is configured. They are replaced by their
//! link text before the compound is parsed.

use crate::error::{Error, Result};
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static RE_PARAM_TYPE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(<param>\n\s+<type>)<ref.+>(\w+)</ref>(.+</type>)").unwrap()
});

/// Strip `<ref>` markup from parameter types, keeping the linked name.
pub fn scrub_links(xml: &str) -> Cow<'_, str> {
    RE_PARAM_TYPE_REF.replace_all(xml, "${1}${2}${3}")
}

/// Scrub the file at `path` in place and return its corrected contents.
/// The file is only rewritten when something was stripped.
pub fn scrub_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    match scrub_links(&text) {
        Cow::Borrowed(_) => Ok(text),
        Cow::Owned(fixed) => {
            tracing::debug!("stripped same-file links from {}", path.display());
            fs::write(path, &fixed).map_err(|e| Error::io(path, e))?;
            Ok(fixed)
        }
    }
}
