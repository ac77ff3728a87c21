//! Host pipeline state and the docstring splice.
//!
//! The host hands over its class/function manifest and its description
//! registry (`env[module][symbol]`). Rendered docstrings are written into
//! the registry: `docstrings.class` and `docstrings.methods[name]` for
//! classes, `docstring` for free functions. Every other field is preserved.

use crate::error::Result;
use crate::model::{FunctionDoc, NameIndex};
use crate::parser::compound;
use crate::render::{join_overloads, render_class, render_function, Target};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Everything the host pipeline shares with doxdoc.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HostState {
    #[serde(default)]
    pub classes: Vec<Symbol>,
    #[serde(default)]
    pub functions: Vec<Symbol>,
    /// module → symbol → description
    #[serde(default)]
    pub env: IndexMap<String, IndexMap<String, SymbolDesc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A manifest entry: symbol name, declaring source file, owning module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    #[serde(default)]
    pub source: String,
    pub module: String,
}

/// One registry entry. Only the fields doxdoc touches are typed.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SymbolDesc {
    /// Method name → host-specific method description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<IndexMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstrings: Option<ClassDocstrings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstring: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ClassDocstrings {
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub methods: IndexMap<String, String>,
}

/// Counts of what an update touched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub classes: usize,
    pub methods: usize,
    pub functions: usize,
    pub skipped: usize,
}

/// Matches manifest symbols against the parsed index and writes docstrings.
pub struct Updater<'a> {
    index: &'a NameIndex,
    xml_dir: &'a Path,
    describe_methods: bool,
}

impl<'a> Updater<'a> {
    pub fn new(index: &'a NameIndex, xml_dir: &'a Path) -> Self {
        Self {
            index,
            xml_dir,
            describe_methods: false,
        }
    }

    /// List method briefs next to method names in class docstrings.
    pub fn describe_methods(mut self, yes: bool) -> Self {
        self.describe_methods = yes;
        self
    }

    /// Process every manifest class and function.
    ///
    /// A symbol missing from the index is reported and skipped. A compound
    /// document that cannot be read or parsed aborts the update.
    pub fn apply(&self, state: &mut HostState) -> Result<UpdateReport> {
        let HostState {
            classes,
            functions,
            env,
            ..
        } = state;
        let mut report = UpdateReport::default();

        for symbol in classes.iter() {
            self.update_class(symbol, env, &mut report)?;
        }
        for symbol in functions.iter() {
            self.update_function(symbol, env, &mut report)?;
        }

        Ok(report)
    }

    fn update_class(
        &self,
        symbol: &Symbol,
        env: &mut IndexMap<String, IndexMap<String, SymbolDesc>>,
        report: &mut UpdateReport,
    ) -> Result<()> {
        let Some(entry) = self.index.classes.get(&symbol.name) else {
            tracing::warn!(
                "couldn't find class {} in xml; it will not appear in wrapper docstrings",
                symbol.name
            );
            report.skipped += 1;
            return Ok(());
        };

        let parsed = compound::parse_class(self.xml_dir, entry)?;

        let desc = env
            .entry(symbol.module.clone())
            .or_default()
            .entry(symbol.name.clone())
            .or_default();
        let host_methods: Vec<String> = desc
            .methods
            .iter()
            .flat_map(|methods| methods.keys().cloned())
            .collect();
        let docstrings = desc.docstrings.get_or_insert_with(ClassDocstrings::default);
        docstrings.class = render_class(&parsed, self.describe_methods);
        report.classes += 1;

        for method in host_methods {
            // Prefix match so `Foo` also picks up the overloads `Foo1`, `Foo2`
            let rendered: Vec<String> = parsed
                .function_sections()
                .flat_map(|sec| sec.iter())
                .filter(|(name, _)| name.starts_with(method.as_str()))
                .filter_map(|(_, member)| member.as_function())
                .map(|func| render_function(func, Target::Method))
                .collect();

            match join_overloads(rendered, Target::Method) {
                Some(doc) => {
                    docstrings.methods.insert(method, doc);
                    report.methods += 1;
                }
                None => {
                    tracing::warn!(
                        "couldn't find method {}::{} in xml; it will not appear in wrapper docstrings",
                        symbol.name,
                        method
                    );
                    report.skipped += 1;
                }
            }
        }
        Ok(())
    }

    fn update_function(
        &self,
        symbol: &Symbol,
        env: &mut IndexMap<String, IndexMap<String, SymbolDesc>>,
        report: &mut UpdateReport,
    ) -> Result<()> {
        // Substring match: overloads are indexed as `name1`, `name2`, ...
        let matches: Vec<FunctionDoc> = self
            .index
            .functions
            .iter()
            .filter(|(name, _)| name.contains(symbol.name.as_str()))
            .map(|(_, entry)| compound::parse_function(self.xml_dir, entry))
            .collect::<Result<Vec<_>>>()?;

        if matches.len() > 1 {
            tracing::debug!("{} is overloaded ({} versions)", symbol.name, matches.len());
        }

        let rendered = matches
            .iter()
            .map(|func| render_function(func, Target::Function))
            .collect();
        let Some(doc) = join_overloads(rendered, Target::Function) else {
            tracing::warn!(
                "couldn't find function {} in xml; it will not appear in wrapper docstrings",
                symbol.name
            );
            report.skipped += 1;
            return Ok(());
        };

        env.entry(symbol.module.clone())
            .or_default()
            .entry(symbol.name.clone())
            .or_default()
            .docstring = Some(doc);
        report.functions += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{ClassEntry, FunctionEntry};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const CLASS: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen>
  <compounddef id="class_widget" kind="class">
    <compoundname>Widget</compoundname>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="w1">
        <type>void</type><definition>void Widget::Foo</definition><argsstring>()</argsstring>
        <name>Foo</name>
        <briefdescription><para>Plain foo.</para></briefdescription>
      </memberdef>
      <memberdef kind="function" id="w2">
        <type>void</type><definition>void Widget::Foo</definition><argsstring>(int n)</argsstring>
        <name>Foo</name>
        <param><type>int</type><declname>n</declname></param>
        <briefdescription><para>Foo n times.</para></briefdescription>
      </memberdef>
      <memberdef kind="function" id="w3">
        <type>int</type><definition>int Widget::size</definition><argsstring>() const</argsstring>
        <name>size</name>
        <briefdescription><para>Number of parts.</para></briefdescription>
      </memberdef>
    </sectiondef>
    <location file="widget.h"/>
  </compounddef>
</doxygen>"#;

    const NAMESPACE: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen>
  <compounddef id="namespacemath" kind="namespace">
    <compoundname>math</compoundname>
    <sectiondef kind="func">
      <memberdef kind="function" id="m1">
        <type>int</type><definition>int math::add</definition><argsstring>(int a, int b)</argsstring>
        <name>add</name>
        <briefdescription><para>Add two numbers.</para></briefdescription>
      </memberdef>
      <memberdef kind="function" id="m2">
        <type>std::string</type><definition>std::string math::address</definition><argsstring>()</argsstring>
        <name>address</name>
        <briefdescription><para>Where it lives.</para></briefdescription>
      </memberdef>
      <memberdef kind="function" id="m3">
        <type>double</type><definition>double math::norm</definition><argsstring>()</argsstring>
        <name>norm</name>
        <briefdescription><para>Length.</para></briefdescription>
      </memberdef>
    </sectiondef>
  </compounddef>
</doxygen>"#;

    struct Fixture {
        dir: TempDir,
        index: NameIndex,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("class_widget.xml"), CLASS).unwrap();
        fs::write(dir.path().join("namespacemath.xml"), NAMESPACE).unwrap();

        let mut index = NameIndex::default();
        index.classes.insert(
            "Widget".to_string(),
            ClassEntry {
                refid: "class_widget".to_string(),
                methods: vec!["Foo".into(), "Foo".into(), "size".into()],
                ..Default::default()
            },
        );
        for (name, refid) in [("add", "m1"), ("address", "m2"), ("norm", "m3")] {
            index.functions.insert(
                name.to_string(),
                FunctionEntry {
                    compound_refid: "namespacemath".to_string(),
                    refid: refid.to_string(),
                },
            );
        }
        Fixture { dir, index }
    }

    fn symbol(name: &str, module: &str) -> Symbol {
        Symbol {
            name: name.to_string(),
            source: "src.h".to_string(),
            module: module.to_string(),
        }
    }

    fn state_with_widget(methods: &[&str]) -> HostState {
        let mut state = HostState::default();
        state.classes.push(symbol("Widget", "widgets"));
        let mut desc = SymbolDesc::default();
        let host_methods = desc.methods.get_or_insert_with(IndexMap::new);
        for m in methods {
            host_methods.insert(m.to_string(), Value::Null);
        }
        state
            .env
            .entry("widgets".to_string())
            .or_default()
            .insert("Widget".to_string(), desc);
        state
    }

    #[test]
    fn overloaded_method_gets_banner() {
        let fx = fixture();
        let mut state = state_with_widget(&["Foo", "size"]);
        let report = Updater::new(&fx.index, fx.dir.path()).apply(&mut state).unwrap();
        assert_eq!(report.classes, 1);
        assert_eq!(report.methods, 2);

        let docs = state.env["widgets"]["Widget"].docstrings.as_ref().unwrap();
        let foo = &docs.methods["Foo"];
        assert!(foo.starts_with("This method was overloaded"));
        assert!(foo.contains("Plain foo."));
        assert!(foo.contains("Foo n times."));
        assert!(foo.contains(&format!("\n{}\n", "#".repeat(64))));

        let size = &docs.methods["size"];
        assert!(size.starts_with("Number of parts."));
        assert!(!size.contains('#'));
        assert!(docs.class.contains("Methods\n-------\n"));
    }

    #[test]
    fn unknown_method_is_skipped() {
        let fx = fixture();
        let mut state = state_with_widget(&["resize"]);
        let report = Updater::new(&fx.index, fx.dir.path()).apply(&mut state).unwrap();
        assert_eq!(report.skipped, 1);
        let docs = state.env["widgets"]["Widget"].docstrings.as_ref().unwrap();
        assert!(docs.methods.is_empty());
        assert!(!docs.class.is_empty());
    }

    #[test]
    fn unknown_class_adds_no_docstrings() {
        let fx = fixture();
        let mut state = HostState::default();
        state.classes.push(symbol("Gadget", "widgets"));
        state
            .env
            .entry("widgets".to_string())
            .or_default()
            .insert("Gadget".to_string(), SymbolDesc::default());

        let report = Updater::new(&fx.index, fx.dir.path()).apply(&mut state).unwrap();
        assert_eq!(report.skipped, 1);
        assert!(state.env["widgets"]["Gadget"].docstrings.is_none());
    }

    #[test]
    fn function_substring_match_is_imprecise() {
        // Known imprecision: "add" also matches "address"
        let fx = fixture();
        let mut state = HostState::default();
        state.functions.push(symbol("add", "math"));
        let report = Updater::new(&fx.index, fx.dir.path()).apply(&mut state).unwrap();
        assert_eq!(report.functions, 1);

        let doc = state.env["math"]["add"].docstring.as_deref().unwrap();
        assert!(doc.starts_with("This function was overloaded"));
        assert!(doc.contains("Add two numbers."));
        assert!(doc.contains("Where it lives."));
        assert!(doc.contains(&format!("\n\n{}\n\n", "#".repeat(72))));
    }

    #[test]
    fn single_function_match_renders_directly() {
        let fx = fixture();
        let mut state = HostState::default();
        state.functions.push(symbol("norm", "math"));
        Updater::new(&fx.index, fx.dir.path()).apply(&mut state).unwrap();
        assert_eq!(
            state.env["math"]["norm"].docstring.as_deref(),
            Some("Length.\n\nParameters\n----------\nNone\nReturns\n-------\nres1 : double\n")
        );
    }

    #[test]
    fn missing_function_is_skipped() {
        let fx = fixture();
        let mut state = HostState::default();
        state.functions.push(symbol("subtract", "math"));
        let report = Updater::new(&fx.index, fx.dir.path()).apply(&mut state).unwrap();
        assert_eq!(report.skipped, 1);
        assert!(state.env.is_empty());
    }

    #[test]
    fn host_fields_survive_round_trip() {
        let json = r#"{
  "classes": [],
  "functions": [{"name": "norm", "source": "m.h", "module": "math"}],
  "env": {"math": {"norm": {"name": "norm", "signatures": {"x": 1}}}},
  "package": "geo"
}"#;
        let fx = fixture();
        let mut state: HostState = serde_json::from_str(json).unwrap();
        Updater::new(&fx.index, fx.dir.path()).apply(&mut state).unwrap();

        let out: Value = serde_json::to_value(&state).unwrap();
        assert_eq!(out["package"], "geo");
        assert_eq!(out["env"]["math"]["norm"]["signatures"]["x"], 1);
        assert!(out["env"]["math"]["norm"]["docstring"]
            .as_str()
            .unwrap()
            .starts_with("Length."));
    }

    #[test]
    fn empty_host_methods_are_written_back() {
        let json = r#"{
  "classes": [{"name": "Gadget", "module": "widgets"}],
  "env": {"widgets": {"Gadget": {"name": "Gadget", "methods": {}}}}
}"#;
        let fx = fixture();
        let mut state: HostState = serde_json::from_str(json).unwrap();
        Updater::new(&fx.index, fx.dir.path()).apply(&mut state).unwrap();

        let out: Value = serde_json::to_value(&state).unwrap();
        assert_eq!(out["env"]["widgets"]["Gadget"]["methods"], serde_json::json!({}));
    }

    #[test]
    fn malformed_class_document_aborts() {
        let fx = fixture();
        fs::write(fx.dir.path().join("class_widget.xml"), "<doxygen><compounddef").unwrap();
        let mut state = state_with_widget(&["Foo"]);

        let err = Updater::new(&fx.index, fx.dir.path())
            .apply(&mut state)
            .unwrap_err();
        assert!(matches!(err, Error::Xml { .. }), "got {err:?}");
    }

    #[test]
    fn missing_namespace_member_aborts() {
        let mut fx = fixture();
        fx.index.functions.insert(
            "norm2".to_string(),
            FunctionEntry {
                compound_refid: "namespacemath".to_string(),
                refid: "m9".to_string(),
            },
        );
        let mut state = HostState::default();
        state.functions.push(symbol("norm", "math"));

        let err = Updater::new(&fx.index, fx.dir.path())
            .apply(&mut state)
            .unwrap_err();
        assert!(matches!(err, Error::MissingMember { .. }), "got {err:?}");
    }
}
