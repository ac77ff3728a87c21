//! Compound documents: one XML file per class or namespace.

use super::links::scrub_file;
use super::member::{parse_function as parse_function_member, parse_variable};
use super::{child, child_text, children, text_of};
use crate::error::{Error, Result};
use crate::model::{ClassDoc, ClassEntry, ClassMembers, FunctionDoc, FunctionEntry, MemberDoc, Section};
use roxmltree::{Document, Node};
use std::path::{Path, PathBuf};

/// Parse the class document for `entry` from `xml_dir`.
pub fn parse_class(xml_dir: &Path, entry: &ClassEntry) -> Result<ClassDoc> {
    let path = compound_path(xml_dir, &entry.refid);
    let text = scrub_file(&path)?;
    let doc = parse_document(&path, &text)?;
    let compound = compounddef(&doc, &path)?;

    let mut class = ClassDoc {
        qualified_name: child_text(compound, "compoundname"),
        namespace: entry.namespace.clone(),
        members: ClassMembers {
            methods: entry.methods.clone(),
            variables: entry.variables.clone(),
        },
        ..Default::default()
    };
    class.file_name = child(compound, "location")
        .and_then(|loc| loc.attribute("file"))
        .map(|file| file.rsplit(['/', '\\']).next().unwrap_or(file).to_string())
        .unwrap_or_default();
    class.description = compound_description(compound);

    for sec in compound.descendants().filter(|n| n.has_tag_name("sectiondef")) {
        let kind = sec.attribute("kind").unwrap_or_default().to_string();
        let section = class.sections.entry(kind).or_default();
        for mem in children(sec, "memberdef") {
            let member = match mem.attribute("kind") {
                Some("function") => MemberDoc::Function(parse_function_member(mem)),
                Some("variable") => MemberDoc::Variable(parse_variable(mem)),
                _ => continue,
            };
            let name = unique_name(section, &child_text(mem, "name"));
            section.insert(name, member);
        }
    }

    Ok(class)
}

/// Parse the free function `entry` from its namespace document in `xml_dir`.
pub fn parse_function(xml_dir: &Path, entry: &FunctionEntry) -> Result<FunctionDoc> {
    let path = compound_path(xml_dir, &entry.compound_refid);
    let text = scrub_file(&path)?;
    let doc = parse_document(&path, &text)?;
    let compound = compounddef(&doc, &path)?;

    let section = children(compound, "sectiondef")
        .find(|s| s.attribute("kind") == Some("func"))
        .ok_or_else(|| Error::MissingElement {
            path: path.clone(),
            tag: "sectiondef kind=\"func\"".to_string(),
        })?;
    let member = children(section, "memberdef")
        .find(|m| m.attribute("id") == Some(entry.refid.as_str()))
        .ok_or_else(|| Error::MissingMember {
            path: path.clone(),
            refid: entry.refid.clone(),
        })?;

    Ok(parse_function_member(member))
}

fn compound_path(xml_dir: &Path, refid: &str) -> PathBuf {
    xml_dir.join(format!("{}.xml", refid))
}

fn parse_document<'input>(path: &Path, text: &'input str) -> Result<Document<'input>> {
    Document::parse(text).map_err(|source| Error::Xml {
        path: path.to_path_buf(),
        source,
    })
}

fn compounddef<'a, 'input>(doc: &'a Document<'input>, path: &Path) -> Result<Node<'a, 'input>> {
    child(doc.root_element(), "compounddef").ok_or_else(|| Error::MissingElement {
        path: path.to_path_buf(),
        tag: "compounddef".to_string(),
    })
}

/// The class's own brief and detailed text, as one paragraph.
fn compound_description(compound: Node) -> String {
    [
        child(compound, "briefdescription").map(text_of),
        child(compound, "detaileddescription").map(text_of),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// `name`, or `name1`, `name2`, ... when the section already has it.
fn unique_name(section: &Section, name: &str) -> String {
    if !section.contains_key(name) {
        return name.to_string();
    }
    (1..)
        .map(|i| format!("{}{}", name, i))
        .find(|candidate| !section.contains_key(candidate))
        .unwrap_or_else(|| name.to_string())
}
