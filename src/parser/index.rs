//! `index.xml` parsing: which compound file documents which class or function.

use super::{child_text, children};
use crate::error::{Error, Result};
use crate::model::{ClassEntry, FunctionEntry, NameIndex};
use roxmltree::{Document, Node};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Parse the index at `path`, which may be `index.xml` itself or the XML
/// output directory containing it.
pub fn parse_index(path: &Path) -> Result<NameIndex> {
    let path = index_path(path);
    let text = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let doc = Document::parse(&text).map_err(|source| Error::Xml {
        path: path.clone(),
        source,
    })?;
    Ok(index_from_document(&doc))
}

fn index_path(path: &Path) -> PathBuf {
    if path.file_name().is_some_and(|name| name == "index.xml") {
        path.to_path_buf()
    } else {
        path.join("index.xml")
    }
}

fn index_from_document(doc: &Document) -> NameIndex {
    let mut index = NameIndex::default();
    let compounds = || doc.root_element().children().filter(|n| n.has_tag_name("compound"));

    for ns in compounds().filter(|c| c.attribute("kind") == Some("namespace")) {
        add_namespace_functions(&mut index, ns);
    }

    for class in compounds().filter(|c| c.attribute("kind") == Some("class")) {
        let qualified = child_text(class, "name");
        let (namespace, name) = match qualified.rsplit_once("::") {
            Some((ns, name)) => (ns.to_string(), name.to_string()),
            None => (String::new(), qualified.clone()),
        };

        let mut entry = ClassEntry {
            refid: class.attribute("refid").unwrap_or_default().to_string(),
            namespace,
            ..Default::default()
        };
        for member in children(class, "member") {
            let member_name = child_text(member, "name");
            match member.attribute("kind") {
                Some("variable") => entry.variables.push(member_name),
                Some("function") => entry.methods.push(member_name),
                _ => {}
            }
        }
        index.classes.insert(name, entry);
    }

    index
}

/// Register the functions of one namespace. The n-th repeat of a name
/// (an overload) is stored as `name{n}`: `scale`, `scale1`, `scale2`.
fn add_namespace_functions(index: &mut NameIndex, ns: Node) {
    let compound_refid = ns.attribute("refid").unwrap_or_default();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for member in children(ns, "member").filter(|m| m.attribute("kind") == Some("function")) {
        let name = child_text(member, "name");
        let count = seen.entry(name.clone()).or_insert(0);
        let key = if *count == 0 {
            name
        } else {
            format!("{}{}", name, count)
        };
        *count += 1;
        index.functions.insert(
            key,
            FunctionEntry {
                compound_refid: compound_refid.to_string(),
                refid: member.attribute("refid").unwrap_or_default().to_string(),
            },
        );
    }
}
