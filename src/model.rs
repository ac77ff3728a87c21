//! Data model for parsed Doxygen output: independent of the docstring format.

use indexmap::IndexMap;
use std::collections::BTreeMap;

/// A single documented function or method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionDoc {
    pub brief: String,
    pub detailed: String,
    /// Raw `<type>` text; may pack several comma-separated types
    pub return_type: String,
    /// Formal parameters in declaration order
    pub params: Vec<Param>,
    /// Per-parameter descriptions, present only for the two-paragraph shape
    pub param_docs: Option<BTreeMap<String, String>>,
    /// `<argsstring>`, e.g. `(int a, double b) const`
    pub args_string: String,
    pub definition: String,
    pub location: Option<String>,
}

/// A declared formal parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Param {
    pub name: String,
    pub type_name: String,
    pub description: Option<String>,
}

/// A documented member variable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableDoc {
    pub brief: String,
    pub detailed: String,
    pub type_name: String,
    pub definition: String,
    pub location: Option<String>,
}

/// A member of a compound section.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberDoc {
    Function(FunctionDoc),
    Variable(VariableDoc),
}

impl MemberDoc {
    pub fn as_function(&self) -> Option<&FunctionDoc> {
        match self {
            MemberDoc::Function(f) => Some(f),
            MemberDoc::Variable(_) => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableDoc> {
        match self {
            MemberDoc::Variable(v) => Some(v),
            MemberDoc::Function(_) => None,
        }
    }
}

/// Members of one `<sectiondef>`, keyed by (possibly counter-suffixed) name.
pub type Section = IndexMap<String, MemberDoc>;

/// Everything extracted for one class compound.
#[derive(Debug, Clone, Default)]
pub struct ClassDoc {
    /// Fully qualified compound name, e.g. `geo::Point`
    pub qualified_name: String,
    pub namespace: String,
    /// Base name of the header that declares the class
    pub file_name: String,
    /// The compound's own brief and detailed text
    pub description: String,
    /// Section kind (`public-func`, `protected-attrib`, ...) → members
    pub sections: IndexMap<String, Section>,
    /// Member names as listed in the index
    pub members: ClassMembers,
}

#[derive(Debug, Clone, Default)]
pub struct ClassMembers {
    pub methods: Vec<String>,
    pub variables: Vec<String>,
}

impl ClassDoc {
    /// Unqualified class name.
    pub fn name(&self) -> &str {
        self.qualified_name
            .rsplit("::")
            .next()
            .unwrap_or(&self.qualified_name)
    }

    /// Sections holding functions (`*func*` kinds).
    pub fn function_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(|(kind, _)| kind.contains("func"))
            .map(|(_, sec)| sec)
    }

    /// Sections holding attributes (`*attrib*` kinds).
    pub fn attribute_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(|(kind, _)| kind.contains("attrib"))
            .map(|(_, sec)| sec)
    }

    /// First function named `name` across all function sections.
    pub fn find_function(&self, name: &str) -> Option<&FunctionDoc> {
        self.function_sections()
            .find_map(|sec| sec.get(name))
            .and_then(MemberDoc::as_function)
    }

    /// First variable named `name` across all attribute sections.
    pub fn find_variable(&self, name: &str) -> Option<&VariableDoc> {
        self.attribute_sections()
            .find_map(|sec| sec.get(name))
            .and_then(MemberDoc::as_variable)
    }
}

/// Index entry for a class compound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassEntry {
    /// Compound refid; `<refid>.xml` holds the class document
    pub refid: String,
    pub namespace: String,
    pub methods: Vec<String>,
    pub variables: Vec<String>,
}

/// Index entry for a namespace-level function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionEntry {
    /// Refid of the enclosing namespace compound
    pub compound_refid: String,
    /// Refid of the `<memberdef>` itself
    pub refid: String,
}

/// Lookup tables built from `index.xml`.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    pub classes: IndexMap<String, ClassEntry>,
    pub functions: IndexMap<String, FunctionEntry>,
}
