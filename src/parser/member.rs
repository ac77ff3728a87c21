//! `<memberdef>` parsing for functions and variables.

use super::{child, child_text, children, text_of};
use crate::model::{FunctionDoc, Param, VariableDoc};
use roxmltree::Node;
use std::collections::BTreeMap;

/// Parse a `<memberdef kind="function">`.
///
/// The detailed description is read according to its paragraph count:
/// one paragraph is the whole text; with two, the second carries the
/// `<parameterlist>`; any other shape yields no detailed text at all.
pub fn parse_function(node: Node) -> FunctionDoc {
    let paras: Vec<Node> = child(node, "detaileddescription")
        .map(|dd| children(dd, "para").collect())
        .unwrap_or_default();

    let (detailed, param_docs) = match paras.as_slice() {
        [only] => (text_of(*only), None),
        [text, params] => (text_of(*text), parameter_docs(*params)),
        _ => (String::new(), None),
    };

    let params = children(node, "param")
        .map(|p| {
            let name = child(p, "declname")
                .or_else(|| child(p, "defname"))
                .map(text_of)
                .unwrap_or_default();
            let description = param_docs
                .as_ref()
                .and_then(|docs| docs.get(&name).cloned());
            Param {
                type_name: child_text(p, "type"),
                name,
                description,
            }
        })
        .collect();

    let common = parse_common(node);
    FunctionDoc {
        brief: common.brief,
        detailed,
        return_type: child_text(node, "type"),
        params,
        param_docs,
        args_string: child_text(node, "argsstring"),
        definition: common.definition,
        location: common.location,
    }
}

/// Parse a `<memberdef kind="variable">`.
pub fn parse_variable(node: Node) -> VariableDoc {
    let detailed = child(node, "detaileddescription")
        .and_then(|dd| child(dd, "para"))
        .map(text_of)
        .unwrap_or_default();

    let common = parse_common(node);
    VariableDoc {
        brief: common.brief,
        detailed,
        type_name: child_text(node, "type"),
        definition: common.definition,
        location: common.location,
    }
}

struct Common {
    brief: String,
    definition: String,
    location: Option<String>,
}

fn parse_common(node: Node) -> Common {
    let brief = child(node, "briefdescription")
        .and_then(|bd| child(bd, "para"))
        .map(text_of)
        .unwrap_or_default();
    let location = child(node, "location")
        .and_then(|loc| loc.attribute("file"))
        .map(str::to_string);
    Common {
        brief,
        definition: child_text(node, "definition"),
        location,
    }
}

/// Parameter name → description from the `<parameterlist>` in `para`.
/// A paragraph without a parameter list yields `None`.
fn parameter_docs(para: Node) -> Option<BTreeMap<String, String>> {
    let list = para
        .descendants()
        .find(|n| n.has_tag_name("parameterlist"))?;

    let mut docs = BTreeMap::new();
    for item in children(list, "parameteritem") {
        let name = child(item, "parameternamelist")
            .and_then(|names| child(names, "parametername"))
            .map(text_of);
        let desc = child(item, "parameterdescription")
            .and_then(|d| child(d, "para"))
            .map(text_of)
            .unwrap_or_default();
        if let Some(name) = name {
            docs.insert(name, desc);
        }
    }
    Some(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_memberdef<T>(xml: &str, f: impl FnOnce(Node) -> T) -> T {
        let doc = roxmltree::Document::parse(xml).unwrap();
        f(doc.root_element())
    }

    const TWO_PARAS: &str = r#"<memberdef kind="function" id="f1">
  <type>double</type>
  <definition>double geo::scale</definition>
  <argsstring>(double value, double factor)</argsstring>
  <name>scale</name>
  <param>
    <type>double</type>
    <declname>value</declname>
  </param>
  <param>
    <type>double</type>
    <declname>factor</declname>
  </param>
  <briefdescription><para>Scale a value.</para></briefdescription>
  <detaileddescription>
    <para>Multiplies the value by the factor.</para>
    <para><parameterlist kind="param">
      <parameteritem>
        <parameternamelist><parametername>value</parametername></parameternamelist>
        <parameterdescription><para>The input value.</para></parameterdescription>
      </parameteritem>
      <parameteritem>
        <parameternamelist><parametername>factor</parametername></parameternamelist>
        <parameterdescription><para>How much to scale by.</para></parameterdescription>
      </parameteritem>
    </parameterlist></para>
  </detaileddescription>
  <location file="src/geo.h" line="12"/>
</memberdef>"#;

    #[test]
    fn two_paragraphs_carry_parameter_docs() {
        let func = with_memberdef(TWO_PARAS, parse_function);
        assert_eq!(func.brief, "Scale a value.");
        assert_eq!(func.detailed, "Multiplies the value by the factor.");
        assert_eq!(func.return_type, "double");
        assert_eq!(func.args_string, "(double value, double factor)");
        assert_eq!(func.definition, "double geo::scale");
        assert_eq!(func.location.as_deref(), Some("src/geo.h"));

        let docs = func.param_docs.as_ref().unwrap();
        assert_eq!(docs["value"], "The input value.");
        assert_eq!(docs["factor"], "How much to scale by.");

        assert_eq!(func.params.len(), 2);
        assert_eq!(func.params[0].name, "value");
        assert_eq!(func.params[0].type_name, "double");
        assert_eq!(func.params[0].description.as_deref(), Some("The input value."));
        assert_eq!(func.params[1].description.as_deref(), Some("How much to scale by."));
    }

    #[test]
    fn one_paragraph_has_no_parameter_map() {
        let xml = r#"<memberdef kind="function">
  <type>void</type><definition>void reset</definition><argsstring>(int n)</argsstring>
  <param><type>int</type><declname>n</declname></param>
  <briefdescription/>
  <detaileddescription><para>Reset everything.</para></detaileddescription>
</memberdef>"#;
        let func = with_memberdef(xml, parse_function);
        assert_eq!(func.detailed, "Reset everything.");
        assert!(func.param_docs.is_none());
        assert_eq!(func.params[0].description, None);
        assert_eq!(func.brief, "");
    }

    #[test]
    fn three_paragraphs_are_dropped() {
        let xml = r#"<memberdef kind="function">
  <type>int</type><definition>int f</definition><argsstring>()</argsstring>
  <detaileddescription><para>a</para><para>b</para><para>c</para></detaileddescription>
</memberdef>"#;
        let func = with_memberdef(xml, parse_function);
        assert_eq!(func.detailed, "");
        assert!(func.param_docs.is_none());
        assert!(func.params.is_empty());
    }

    #[test]
    fn variable_without_paragraph_is_empty() {
        let xml = r#"<memberdef kind="variable">
  <type>double</type><definition>double geo::Point::x</definition>
  <briefdescription><para>Horizontal coordinate.</para></briefdescription>
  <detaileddescription></detaileddescription>
</memberdef>"#;
        let var = with_memberdef(xml, parse_variable);
        assert_eq!(var.type_name, "double");
        assert_eq!(var.brief, "Horizontal coordinate.");
        assert_eq!(var.detailed, "");
        assert_eq!(var.definition, "double geo::Point::x");
    }
}
