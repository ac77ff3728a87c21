//! Doxyfile assembly: default table, user overrides, forced values.
//!
//! The file format is one `KEY = value` pair per line with upper-cased keys
//! and booleans written as `YES`/`NO`.

use crate::config::RunConfig;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// A single Doxyfile value as it may appear in user configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DoxValue {
    Flag(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for DoxValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoxValue::Flag(true) => f.write_str("YES"),
            DoxValue::Flag(false) => f.write_str("NO"),
            DoxValue::Int(n) => write!(f, "{}", n),
            DoxValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for DoxValue {
    fn from(s: &str) -> Self {
        DoxValue::Text(s.to_string())
    }
}

/// Ordered Doxyfile settings, keyed by upper-case option name.
pub type DoxConfig = IndexMap<String, DoxValue>;

/// The default settings, in the order they are written out.
pub fn default_config() -> DoxConfig {
    DEFAULTS
        .iter()
        .map(|(k, v)| (k.to_string(), DoxValue::from(*v)))
        .collect()
}

/// Overlay `overrides` on `base`. Keys are normalized to upper case so that
/// `extract_all` replaces `EXTRACT_ALL` instead of producing a second line.
pub fn merge_configs(base: &DoxConfig, overrides: &DoxConfig) -> DoxConfig {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.to_uppercase(), value.clone());
    }
    merged
}

/// Full configuration for a run: defaults, then the user's
/// `doxygen_config`, then project name, output and input directories.
pub fn build(rc: &RunConfig) -> DoxConfig {
    let mut config = merge_configs(&default_config(), &rc.doxygen_config);
    config.insert("PROJECT_NAME".into(), DoxValue::Text(rc.package.clone()));
    config.insert(
        "OUTPUT_DIRECTORY".into(),
        DoxValue::Text(rc.builddir.to_string_lossy().to_string()),
    );
    config.insert(
        "INPUT".into(),
        DoxValue::Text(rc.sourcedir.to_string_lossy().to_string()),
    );
    config
}

/// Serialize to Doxyfile text (no trailing newline).
pub fn render(config: &DoxConfig) -> String {
    config
        .iter()
        .map(|(key, value)| format!("{} = {}", key.to_uppercase(), value))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Write `contents` to `path` unless the file already holds exactly that.
/// Returns whether the file was written.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<bool> {
    if let Ok(existing) = fs::read_to_string(path) {
        if existing == contents {
            return Ok(false);
        }
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    Ok(true)
}

static DEFAULTS: &[(&str, &str)] = &[
    ("DOXYFILE_ENCODING", "UTF-8"),
    ("PROJECT_NAME", "project"),
    ("PROJECT_NUMBER", "\"0.1\""),
    ("OUTPUT_DIRECTORY", "output_dir"),
    ("CREATE_SUBDIRS", "NO"),
    ("OUTPUT_LANGUAGE", "English"),
    ("BRIEF_MEMBER_DESC", "YES"),
    ("REPEAT_BRIEF", "YES"),
    ("ALWAYS_DETAILED_SEC", "NO"),
    ("INLINE_INHERITED_MEMB", "NO"),
    ("FULL_PATH_NAMES", "YES"),
    ("SHORT_NAMES", "NO"),
    ("JAVADOC_AUTOBRIEF", "NO"),
    ("QT_AUTOBRIEF", "NO"),
    ("MULTILINE_CPP_IS_BRIEF", "NO"),
    ("INHERIT_DOCS", "YES"),
    ("SEPARATE_MEMBER_PAGES", "NO"),
    ("TAB_SIZE", "4"),
    ("OPTIMIZE_OUTPUT_FOR_C", "NO"),
    ("OPTIMIZE_OUTPUT_JAVA", "NO"),
    ("OPTIMIZE_FOR_FORTRAN", "NO"),
    ("OPTIMIZE_OUTPUT_VHDL", "NO"),
    ("MARKDOWN_SUPPORT", "YES"),
    ("AUTOLINK_SUPPORT", "YES"),
    ("BUILTIN_STL_SUPPORT", "NO"),
    ("CPP_CLI_SUPPORT", "NO"),
    ("SIP_SUPPORT", "NO"),
    ("IDL_PROPERTY_SUPPORT", "YES"),
    ("DISTRIBUTE_GROUP_DOC", "NO"),
    ("SUBGROUPING", "YES"),
    ("INLINE_GROUPED_CLASSES", "NO"),
    ("INLINE_SIMPLE_STRUCTS", "NO"),
    ("TYPEDEF_HIDES_STRUCT", "NO"),
    ("LOOKUP_CACHE_SIZE", "0"),
    ("EXTRACT_ALL", "NO"),
    ("EXTRACT_PRIVATE", "NO"),
    ("EXTRACT_PACKAGE", "NO"),
    ("EXTRACT_STATIC", "NO"),
    ("EXTRACT_LOCAL_CLASSES", "YES"),
    ("EXTRACT_LOCAL_METHODS", "NO"),
    ("EXTRACT_ANON_NSPACES", "NO"),
    ("HIDE_UNDOC_MEMBERS", "NO"),
    ("HIDE_UNDOC_CLASSES", "NO"),
    ("HIDE_FRIEND_COMPOUNDS", "NO"),
    ("HIDE_IN_BODY_DOCS", "NO"),
    ("INTERNAL_DOCS", "NO"),
    ("CASE_SENSE_NAMES", "NO"),
    ("HIDE_SCOPE_NAMES", "NO"),
    ("SHOW_INCLUDE_FILES", "YES"),
    ("FORCE_LOCAL_INCLUDES", "NO"),
    ("INLINE_INFO", "YES"),
    ("SORT_MEMBER_DOCS", "YES"),
    ("SORT_BRIEF_DOCS", "NO"),
    ("SORT_MEMBERS_CTORS_1ST", "NO"),
    ("SORT_GROUP_NAMES", "NO"),
    ("SORT_BY_SCOPE_NAME", "NO"),
    ("STRICT_PROTO_MATCHING", "NO"),
    ("GENERATE_TODOLIST", "YES"),
    ("GENERATE_TESTLIST", "YES"),
    ("GENERATE_BUGLIST", "YES"),
    ("GENERATE_DEPRECATEDLIST", "YES"),
    ("MAX_INITIALIZER_LINES", "30"),
    ("SHOW_USED_FILES", "YES"),
    ("SHOW_FILES", "YES"),
    ("SHOW_NAMESPACES", "YES"),
    ("QUIET", "YES"),
    ("WARNINGS", "YES"),
    ("WARN_IF_UNDOCUMENTED", "NO"),
    ("WARN_IF_DOC_ERROR", "YES"),
    ("WARN_NO_PARAMDOC", "NO"),
    ("WARN_FORMAT", "\"$file:$line: $text\""),
    ("INPUT", "{src_dir}"),
    ("INPUT_ENCODING", "UTF-8"),
    ("RECURSIVE", "NO"),
    ("EXCLUDE_SYMLINKS", "NO"),
    ("EXAMPLE_RECURSIVE", "NO"),
    ("FILTER_SOURCE_FILES", "NO"),
    ("SOURCE_BROWSER", "NO"),
    ("INLINE_SOURCES", "NO"),
    ("STRIP_CODE_COMMENTS", "YES"),
    ("REFERENCED_BY_RELATION", "NO"),
    ("REFERENCES_RELATION", "NO"),
    ("REFERENCES_LINK_SOURCE", "YES"),
    ("USE_HTAGS", "NO"),
    ("VERBATIM_HEADERS", "YES"),
    ("ALPHABETICAL_INDEX", "YES"),
    ("COLS_IN_ALPHA_INDEX", "5"),
    ("GENERATE_HTML", "NO"),
    ("HTML_OUTPUT", "html"),
    ("HTML_FILE_EXTENSION", ".html"),
    ("HTML_COLORSTYLE_HUE", "220"),
    ("HTML_COLORSTYLE_SAT", "100"),
    ("HTML_COLORSTYLE_GAMMA", "80"),
    ("HTML_TIMESTAMP", "YES"),
    ("HTML_DYNAMIC_SECTIONS", "NO"),
    ("HTML_INDEX_NUM_ENTRIES", "100"),
    ("GENERATE_DOCSET", "NO"),
    ("DOCSET_FEEDNAME", "\"Doxygen generated docs\""),
    ("DOCSET_BUNDLE_ID", "org.doxygen.Project"),
    ("DOCSET_PUBLISHER_ID", "org.doxygen.Publisher"),
    ("DOCSET_PUBLISHER_NAME", "Publisher"),
    ("GENERATE_HTMLHELP", "NO"),
    ("GENERATE_CHI", "NO"),
    ("BINARY_TOC", "NO"),
    ("TOC_EXPAND", "NO"),
    ("GENERATE_QHP", "NO"),
    ("QHP_NAMESPACE", "org.doxygen.Project"),
    ("QHP_VIRTUAL_FOLDER", "doc"),
    ("GENERATE_ECLIPSEHELP", "NO"),
    ("ECLIPSE_DOC_ID", "org.doxygen.Project"),
    ("DISABLE_INDEX", "NO"),
    ("GENERATE_TREEVIEW", "NO"),
    ("ENUM_VALUES_PER_LINE", "4"),
    ("TREEVIEW_WIDTH", "250"),
    ("EXT_LINKS_IN_WINDOW", "NO"),
    ("FORMULA_FONTSIZE", "10"),
    ("FORMULA_TRANSPARENT", "YES"),
    ("USE_MATHJAX", "NO"),
    ("MATHJAX_FORMAT", "HTML-CSS"),
    ("MATHJAX_RELPATH", "http://cdn.mathjax.org/mathjax/latest"),
    ("SEARCHENGINE", "YES"),
    ("SERVER_BASED_SEARCH", "NO"),
    ("EXTERNAL_SEARCH", "NO"),
    ("SEARCHDATA_FILE", "searchdata.xml"),
    ("GENERATE_LATEX", "NO"),
    ("LATEX_OUTPUT", "latex"),
    ("LATEX_CMD_NAME", "latex"),
    ("MAKEINDEX_CMD_NAME", "makeindex"),
    ("COMPACT_LATEX", "NO"),
    ("PAPER_TYPE", "a4"),
    ("PDF_HYPERLINKS", "YES"),
    ("USE_PDFLATEX", "YES"),
    ("LATEX_BATCHMODE", "NO"),
    ("LATEX_HIDE_INDICES", "NO"),
    ("LATEX_SOURCE_CODE", "NO"),
    ("LATEX_BIB_STYLE", "plain"),
    ("GENERATE_RTF", "NO"),
    ("RTF_OUTPUT", "rtf"),
    ("COMPACT_RTF", "NO"),
    ("RTF_HYPERLINKS", "NO"),
    ("GENERATE_MAN", "NO"),
    ("MAN_OUTPUT", "man"),
    ("MAN_EXTENSION", ".3"),
    ("MAN_LINKS", "NO"),
    ("GENERATE_XML", "YES"),
    ("XML_OUTPUT", "xml"),
    ("XML_PROGRAMLISTING", "YES"),
    ("GENERATE_DOCBOOK", "NO"),
    ("DOCBOOK_OUTPUT", "docbook"),
    ("GENERATE_AUTOGEN_DEF", "NO"),
    ("GENERATE_PERLMOD", "NO"),
    ("PERLMOD_LATEX", "NO"),
    ("PERLMOD_PRETTY", "YES"),
    ("ENABLE_PREPROCESSING", "YES"),
    ("MACRO_EXPANSION", "NO"),
    ("EXPAND_ONLY_PREDEF", "NO"),
    ("SEARCH_INCLUDES", "YES"),
    ("SKIP_FUNCTION_MACROS", "YES"),
    ("ALLEXTERNALS", "NO"),
    ("EXTERNAL_GROUPS", "YES"),
    ("EXTERNAL_PAGES", "YES"),
    ("PERL_PATH", "/usr/bin/perl"),
    ("CLASS_DIAGRAMS", "YES"),
    ("HIDE_UNDOC_RELATIONS", "YES"),
    ("HAVE_DOT", "NO"),
    ("DOT_NUM_THREADS", "0"),
    ("DOT_FONTNAME", "Helvetica"),
    ("DOT_FONTSIZE", "10"),
    ("CLASS_GRAPH", "YES"),
    ("COLLABORATION_GRAPH", "YES"),
    ("GROUP_GRAPHS", "YES"),
    ("UML_LOOK", "NO"),
    ("UML_LIMIT_NUM_FIELDS", "10"),
    ("TEMPLATE_RELATIONS", "NO"),
    ("INCLUDE_GRAPH", "YES"),
    ("INCLUDED_BY_GRAPH", "YES"),
    ("CALL_GRAPH", "NO"),
    ("CALLER_GRAPH", "NO"),
    ("GRAPHICAL_HIERARCHY", "YES"),
    ("DIRECTORY_GRAPH", "YES"),
    ("DOT_IMAGE_FORMAT", "png"),
    ("INTERACTIVE_SVG", "NO"),
    ("DOT_GRAPH_MAX_NODES", "50"),
    ("MAX_DOT_GRAPH_DEPTH", "0"),
    ("DOT_TRANSPARENT", "NO"),
    ("DOT_MULTI_TARGETS", "NO"),
    ("GENERATE_LEGEND", "NO"),
    ("DOT_CLEANUP", "YES"),
];
