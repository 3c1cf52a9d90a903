//! Syntax model consumed by the analyzer.
//!
//! A front end (the tree-sitter TypeScript lowering, or any external parser
//! that emits JSON) produces a [`SyntaxTree`]: a file path and a root
//! [`SyntaxNode`] whose children are declarations in source order.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analyzer::AnalyzerError;

/// Category of a named declaration or reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ConstructKind {
    /// Root of a source file.
    Module,
    /// `let`/`const`/`var` binding.
    Variable,
    /// Function declaration or signature.
    Function,
    /// Function or method parameter.
    Parameter,
    /// Class declaration.
    Class,
    /// Field, method, or accessor of a class.
    ClassMember,
    /// Interface declaration.
    Interface,
    /// Property or method signature of an interface.
    InterfaceMember,
    /// `type X = ...` declaration.
    TypeAlias,
    /// Property or method signature of a type literal.
    TypeAliasMember,
    /// Enum declaration.
    Enum,
    /// Enum member.
    EnumMember,
    /// Namespace (`namespace X {}`) declaration.
    Namespace,
    /// Import declaration; the identifier is the module specifier.
    ImportDeclaration,
    /// Reference to a named type inside a type annotation.
    TypeAnnotation,
}

impl ConstructKind {
    /// Every construct kind, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Module,
        Self::Variable,
        Self::Function,
        Self::Parameter,
        Self::Class,
        Self::ClassMember,
        Self::Interface,
        Self::InterfaceMember,
        Self::TypeAlias,
        Self::TypeAliasMember,
        Self::Enum,
        Self::EnumMember,
        Self::Namespace,
        Self::ImportDeclaration,
        Self::TypeAnnotation,
    ];

    /// Human-readable label used in messages (e.g., "Enum member").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Module => "Module",
            Self::Variable => "Variable",
            Self::Function => "Function",
            Self::Parameter => "Parameter",
            Self::Class => "Class",
            Self::ClassMember => "Class member",
            Self::Interface => "Interface",
            Self::InterfaceMember => "Interface member",
            Self::TypeAlias => "Type alias",
            Self::TypeAliasMember => "Type member",
            Self::Enum => "Enum",
            Self::EnumMember => "Enum member",
            Self::Namespace => "Namespace",
            Self::ImportDeclaration => "Import",
            Self::TypeAnnotation => "Type annotation",
        }
    }

    /// Whether nodes of this kind must carry a non-empty identifier.
    #[must_use]
    pub fn requires_identifier(self) -> bool {
        !matches!(self, Self::Module)
    }

    /// Kind of the ordered members this container owns, if it has a member list.
    #[must_use]
    pub fn member_kind(self) -> Option<Self> {
        match self {
            Self::Class => Some(Self::ClassMember),
            Self::Interface => Some(Self::InterfaceMember),
            Self::TypeAlias => Some(Self::TypeAliasMember),
            _ => None,
        }
    }
}

impl std::str::FromStr for ConstructKind {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.to_string() == s)
            .ok_or_else(|| AnalyzerError::UnknownConstructKind {
                kind: s.to_string(),
            })
    }
}

impl std::fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Position of an identifier in source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column (0-indexed byte offset within the line).
    pub column: usize,
    /// Byte offset from the start of the file.
    #[serde(default)]
    pub offset: usize,
    /// Length in bytes.
    #[serde(default)]
    pub length: usize,
}

impl Span {
    /// Creates a span at the given line and column.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte range covered by this span.
    #[must_use]
    pub fn with_range(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// One declaration or reference in source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxNode {
    /// Construct kind.
    pub kind: ConstructKind,
    /// Declared name, module specifier, or referenced type name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Where the identifier appears.
    pub span: Span,
    /// Owned children in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a named node with no children.
    #[must_use]
    pub fn new(kind: ConstructKind, identifier: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            identifier: Some(identifier.into()),
            span,
            children: Vec::new(),
        }
    }

    /// Creates an unnamed module root.
    #[must_use]
    pub fn module(children: Vec<SyntaxNode>) -> Self {
        Self {
            kind: ConstructKind::Module,
            identifier: None,
            span: Span::new(1, 0),
            children,
        }
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = SyntaxNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns the identifier, or `""` when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.identifier.as_deref().unwrap_or("")
    }

    /// Iterates over direct children of the given kind.
    pub fn children_of(&self, kind: ConstructKind) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Visits this node and all descendants in pre-order.
    ///
    /// Uses an explicit stack, so deeply nested trees do not grow the call stack.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }
}

/// Pre-order iterator over a node and its descendants.
pub struct Preorder<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A parsed source file: its path and root node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxTree {
    /// Path relative to the project root.
    pub path: PathBuf,
    /// Root node, normally of kind [`ConstructKind::Module`].
    pub root: SyntaxNode,
}

impl SyntaxTree {
    /// Creates a tree.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, root: SyntaxNode) -> Self {
        Self {
            path: path.into(),
            root,
        }
    }

    /// Decodes a tree from JSON produced by an external parser.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalyzerError::Decode`] for malformed JSON, and
    /// [`crate::AnalyzerError::UnknownConstructKind`] when a node kind is
    /// outside the fixed enumeration.
    pub fn from_json(json: &str) -> Result<Self, AnalyzerError> {
        let raw: RawTree = serde_json::from_str(json).map_err(|e| AnalyzerError::Decode {
            message: e.to_string(),
        })?;
        Ok(Self {
            path: raw.path,
            root: raw.root.lower()?,
        })
    }
}

/// Wire form of a tree, with kinds kept as strings until validated.
#[derive(Deserialize)]
struct RawTree {
    #[serde(default)]
    path: PathBuf,
    root: RawNode,
}

#[derive(Deserialize)]
struct RawNode {
    kind: String,
    #[serde(default)]
    identifier: Option<String>,
    #[serde(default)]
    span: Span,
    #[serde(default)]
    children: Vec<RawNode>,
}

impl RawNode {
    // serde_json caps nesting at 128 levels, which bounds this recursion.
    fn lower(self) -> Result<SyntaxNode, AnalyzerError> {
        let kind = self.kind.parse::<ConstructKind>()?;
        let children = self
            .children
            .into_iter()
            .map(RawNode::lower)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SyntaxNode {
            kind,
            identifier: self.identifier,
            span: self.span,
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_tree() -> SyntaxNode {
        SyntaxNode::module(vec![
            SyntaxNode::new(ConstructKind::Class, "Employee", Span::new(1, 6)).with_children([
                SyntaxNode::new(ConstructKind::ClassMember, "id", Span::new(2, 4)),
                SyntaxNode::new(ConstructKind::ClassMember, "name", Span::new(3, 4)),
            ]),
            SyntaxNode::new(ConstructKind::Function, "hire", Span::new(5, 9)),
        ])
    }

    #[test]
    fn preorder_visits_container_before_contents() {
        let tree = class_tree();
        let names: Vec<&str> = tree.preorder().map(SyntaxNode::name).collect();
        assert_eq!(names, ["", "Employee", "id", "name", "hire"]);
    }

    #[test]
    fn preorder_handles_deep_nesting() {
        let mut node = SyntaxNode::new(ConstructKind::Namespace, "Leaf", Span::new(1, 0));
        for _ in 0..10_000 {
            node = SyntaxNode::new(ConstructKind::Namespace, "Outer", Span::new(1, 0))
                .with_child(node);
        }
        assert_eq!(node.preorder().count(), 10_001);
        // Dropping a deep tree recurses; tear it down iteratively.
        let mut stack = vec![node];
        while let Some(mut n) = stack.pop() {
            stack.append(&mut n.children);
        }
    }

    #[test]
    fn children_of_filters_by_kind() {
        let tree = class_tree();
        assert_eq!(tree.children_of(ConstructKind::Class).count(), 1);
        assert_eq!(tree.children_of(ConstructKind::Enum).count(), 0);
    }

    #[test]
    fn member_list_kinds() {
        assert_eq!(
            ConstructKind::Class.member_kind(),
            Some(ConstructKind::ClassMember)
        );
        assert_eq!(
            ConstructKind::TypeAlias.member_kind(),
            Some(ConstructKind::TypeAliasMember)
        );
        assert_eq!(ConstructKind::Enum.member_kind(), None);
    }

    #[test]
    fn decodes_json_tree() {
        let json = r#"{
            "path": "src/color.ts",
            "root": {
                "kind": "Module",
                "children": [
                    {"kind": "Enum", "identifier": "Color", "span": {"line": 1, "column": 5},
                     "children": [{"kind": "EnumMember", "identifier": "red", "span": {"line": 1, "column": 13}}]}
                ]
            }
        }"#;
        let tree = SyntaxTree::from_json(json).unwrap();
        assert_eq!(tree.path, PathBuf::from("src/color.ts"));
        assert_eq!(tree.root.children[0].children[0].name(), "red");
        assert_eq!(tree.root.children[0].span, Span::new(1, 5));
    }

    #[test]
    fn unknown_kind_in_json_is_a_contract_error() {
        let json = r#"{"root": {"kind": "Module", "children": [{"kind": "Struct", "identifier": "X"}]}}"#;
        let err = SyntaxTree::from_json(json).unwrap_err();
        assert!(matches!(err, AnalyzerError::UnknownConstructKind { ref kind } if kind == "Struct"));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = SyntaxTree::from_json("{").unwrap_err();
        assert!(matches!(err, AnalyzerError::Decode { .. }));
    }

    #[test]
    fn kind_round_trips_through_its_name() {
        for kind in ConstructKind::ALL {
            assert_eq!(kind.to_string().parse::<ConstructKind>().unwrap(), kind);
        }
    }

    #[test]
    fn only_module_may_be_unnamed() {
        for kind in ConstructKind::ALL {
            assert_eq!(kind.requires_identifier(), kind != ConstructKind::Module);
        }
    }
}
