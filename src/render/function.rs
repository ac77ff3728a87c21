//! numpydoc docstrings for functions and methods.

use super::wrap::{Wrapper, METHOD, TOP};
use crate::model::FunctionDoc;

/// Where the docstring will be placed; methods sit one indent level deeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Function,
    Method,
}

impl Target {
    pub fn wrapper(self) -> Wrapper {
        match self {
            Target::Function => TOP,
            Target::Method => METHOD,
        }
    }
}

/// Render the docstring for a function or method.
///
/// ```text
/// Brief.
///
/// Detailed.
///
/// Parameters
/// ----------
/// value : double
///     The input value.
///
/// Returns
/// -------
/// res1 : double
/// ```
pub fn render_function(func: &FunctionDoc, target: Target) -> String {
    let wrapper = target.wrapper();
    let mut out = String::new();

    let body = [func.brief.as_str(), func.detailed.as_str()]
        .iter()
        .map(|part| wrapper.fill(part))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    if !body.is_empty() {
        out.push_str(&body);
        out.push_str("\n\n");
    }

    out.push_str("Parameters\n----------\n");
    if func.params.is_empty() {
        out.push_str("None\n");
    }
    for param in &func.params {
        out.push_str(&wrapper.fill(&format!("{} : {}", param.name, param.type_name)));
        out.push('\n');
        if let Some(desc) = param.description.as_deref().filter(|d| !d.trim().is_empty()) {
            out.push_str(&wrapper.indented().fill(desc));
            out.push_str("\n\n");
        }
    }

    out.push_str("Returns\n-------\n");
    let returns = return_types(&func.return_type);
    if returns.is_empty() {
        out.push_str("None\n");
    }
    for (i, ty) in returns.iter().enumerate() {
        out.push_str(&wrapper.fill(&format!("res{} : {}", i + 1, ty)));
        out.push('\n');
    }

    out
}

/// Split a declared return type into its values.
///
/// Only top-level commas separate values, so `std::map<int, double>` stays
/// whole. An empty type (constructors) or `void` returns nothing.
pub fn return_types(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "void" {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in raw.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&raw[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
