//! numpydoc docstrings for classes.

use super::wrap::{ENTRY, TOP};
use crate::model::ClassDoc;
use std::collections::BTreeSet;

/// Render the class docstring: body, Attributes, Methods and Notes.
///
/// The body is the constructor's detailed description, falling back to the
/// class's own description when the constructor has none.
pub fn render_class(class: &ClassDoc, describe_methods: bool) -> String {
    let mut out = String::new();

    let body = class
        .sections
        .get("public-func")
        .and_then(|sec| sec.get(class.name()))
        .and_then(|member| member.as_function())
        .map(|ctor| ctor.detailed.as_str())
        .filter(|text| !text.is_empty())
        .unwrap_or(class.description.as_str());
    let body = TOP.fill(body);
    if !body.is_empty() {
        out.push_str(&body);
        out.push_str("\n\n");
    }

    out.push_str("Attributes\n----------\n");
    for name in &class.members.variables {
        let entry = match class.find_variable(name) {
            Some(var) => {
                let desc = format!("{} {}", var.brief, var.detailed);
                format!("{} ({}) : {}", name, var.type_name, desc.trim())
            }
            None => name.clone(),
        };
        out.push_str(&ENTRY.fill(&entry));
        out.push('\n');
    }
    out.push_str("\n\n");

    out.push_str("Methods\n-------\n");
    for name in method_order(&class.members.methods) {
        let brief = class
            .find_function(&name)
            .map(|f| f.brief.trim())
            .unwrap_or_default();
        let entry = if describe_methods && !brief.is_empty() {
            format!("{} : {}", name, brief)
        } else {
            name
        };
        out.push_str(&ENTRY.fill(&entry));
        out.push('\n');
    }
    out.push('\n');

    out.push_str("Notes\n-----\n");
    out.push_str(&TOP.fill(&format!("This class was defined in {}", class.file_name)));
    out.push_str("\n\n");
    out.push_str(&TOP.fill(&format!(
        "The class is found in the \"{}\" namespace",
        class.namespace
    )));

    out
}

/// Deduplicate and sort method names, then move the last one to the second
/// slot. Destructor names start with `~` and sort after every identifier,
/// which puts the destructor right after the first entry (usually the
/// constructor).
pub fn method_order(methods: &[String]) -> Vec<String> {
    let mut sorted: Vec<String> = methods
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if sorted.len() > 1 {
        if let Some(last) = sorted.pop() {
            sorted.insert(1, last);
        }
    }
    sorted
}
