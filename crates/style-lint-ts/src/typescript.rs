//! TypeScript front end using Tree-sitter.

use std::path::Path;

use style_lint_core::{ConstructKind, Span, SyntaxNode, SyntaxTree};
use tracing::{debug, warn};
use tree_sitter::{Language, Node, Parser, TreeCursor};

use crate::frontend::{FrontendError, SourceFrontend};

/// Lowers TypeScript and TSX source into declaration trees.
///
/// Named declarations become nodes of the matching [`ConstructKind`];
/// every other grammar node is looked through, so declarations nested in
/// bodies and expressions attach to the closest enclosing declaration.
pub struct TypeScriptFrontend {
    typescript: Language,
    tsx: Language,
}

impl TypeScriptFrontend {
    /// Creates a new TypeScript front end.
    #[must_use]
    pub fn new() -> Self {
        Self {
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    fn language_for(&self, path: &Path) -> &Language {
        if path.extension().is_some_and(|ext| ext == "tsx") {
            &self.tsx
        } else {
            &self.typescript
        }
    }
}

impl Default for TypeScriptFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFrontend for TypeScriptFrontend {
    fn language_id(&self) -> &'static str {
        "typescript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".ts", ".tsx", ".mts", ".cts"]
    }

    fn parse(&self, path: &Path, source: &str) -> Result<SyntaxTree, FrontendError> {
        let mut parser = Parser::new();
        parser
            .set_language(self.language_for(path))
            .map_err(|e| FrontendError::Language {
                language: self.language_id(),
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| FrontendError::Parse {
                path: path.to_path_buf(),
            })?;
        let root = tree.root_node();
        if root.has_error() {
            warn!(
                "{} contains syntax errors; checking the recovered tree",
                path.display()
            );
        }

        let module = Lowering::new(source.as_bytes()).run(root);
        debug!(
            "Lowered {}: {} top-level declaration(s)",
            path.display(),
            module.children.len()
        );
        Ok(SyntaxTree::new(path, module))
    }
}

/// What to do with one grammar node.
enum Step {
    /// Open declarations, outermost first; the subtree lands in the last.
    Open(Vec<SyntaxNode>),
    /// Emit a childless node and skip the subtree.
    Leaf(SyntaxNode),
    /// Look through the node.
    Descend,
    /// Ignore the node and its subtree.
    Skip,
}

struct OpenNode {
    depth: usize,
    node: SyntaxNode,
}

/// Cursor-driven pre-order walk that keeps open declarations on a stack
/// instead of the call stack.
struct Lowering<'s> {
    src: &'s [u8],
    module: SyntaxNode,
    open: Vec<OpenNode>,
}

impl<'s> Lowering<'s> {
    fn new(src: &'s [u8]) -> Self {
        Self {
            src,
            module: SyntaxNode::module(Vec::new()),
            open: Vec::new(),
        }
    }

    fn run(mut self, root: Node<'_>) -> SyntaxNode {
        let mut cursor = root.walk();
        let mut depth = 0usize;

        'walk: loop {
            let descend = match self.step(&cursor) {
                Step::Open(chain) => {
                    self.open
                        .extend(chain.into_iter().map(|node| OpenNode { depth, node }));
                    true
                }
                Step::Leaf(node) => {
                    self.attach(node);
                    false
                }
                Step::Descend => true,
                Step::Skip => false,
            };

            if descend && cursor.goto_first_child() {
                depth += 1;
                continue;
            }

            loop {
                self.close(depth);
                if cursor.goto_next_sibling() {
                    continue 'walk;
                }
                if depth == 0 || !cursor.goto_parent() {
                    break 'walk;
                }
                depth -= 1;
            }
        }

        while let Some(done) = self.open.pop() {
            self.attach(done.node);
        }
        self.module
    }

    fn attach(&mut self, node: SyntaxNode) {
        match self.open.last_mut() {
            Some(parent) => parent.node.children.push(node),
            None => self.module.children.push(node),
        }
    }

    /// Closes every declaration opened at `depth`.
    fn close(&mut self, depth: usize) {
        while self.open.last().is_some_and(|o| o.depth == depth) {
            let Some(done) = self.open.pop() else { break };
            self.attach(done.node);
        }
    }

    /// Member kind for `node`, when it sits directly in a class or
    /// interface body, or in the object type a type alias names.
    fn member_context(&self, node: Node<'_>) -> Option<ConstructKind> {
        let parent = node.parent()?;
        let in_body = match parent.kind() {
            "class_body" | "interface_body" => true,
            "object_type" => parent
                .parent()
                .is_some_and(|p| p.kind() == "type_alias_declaration"),
            _ => false,
        };
        if !in_body {
            return None;
        }
        self.open.last().and_then(|o| o.node.kind.member_kind())
    }

    fn step(&self, cursor: &TreeCursor<'_>) -> Step {
        let node = cursor.node();

        if node.kind() == "property_identifier"
            && node.parent().is_some_and(|p| p.kind() == "enum_body")
        {
            return Step::Leaf(self.named(ConstructKind::EnumMember, node));
        }
        // Names are consumed by the declaration that owns them.
        if cursor.field_name() == Some("name") {
            return Step::Skip;
        }

        match node.kind() {
            "import_statement" => node
                .child_by_field_name("source")
                .map_or(Step::Skip, |source| {
                    Step::Leaf(SyntaxNode::new(
                        ConstructKind::ImportDeclaration,
                        unquote(self.text(source)),
                        span_of(node),
                    ))
                }),
            "variable_declarator" => self.open_named(node, ConstructKind::Variable, "identifier"),
            "function_declaration"
            | "generator_function_declaration"
            | "function_signature"
            | "function_expression"
            | "generator_function" => self.open_named(node, ConstructKind::Function, "identifier"),
            "required_parameter" | "optional_parameter" => node
                .child_by_field_name("pattern")
                .and_then(parameter_name)
                .map_or(Step::Descend, |p| {
                    Step::Open(vec![self.named(ConstructKind::Parameter, p)])
                }),
            // `for (const x of xs)`; a bare `for (x of xs)` binds nothing.
            "identifier"
                if cursor.field_name() == Some("left")
                    && node.parent().is_some_and(|p| {
                        p.kind() == "for_in_statement" && p.child_by_field_name("kind").is_some()
                    }) =>
            {
                Step::Leaf(self.named(ConstructKind::Variable, node))
            }
            // `x => ...` and `catch (e)`
            "identifier" if cursor.field_name() == Some("parameter") => {
                Step::Leaf(self.named(ConstructKind::Parameter, node))
            }
            "class_declaration" | "abstract_class_declaration" | "class" => {
                self.open_named(node, ConstructKind::Class, "type_identifier")
            }
            "interface_declaration" => {
                self.open_named(node, ConstructKind::Interface, "type_identifier")
            }
            "type_alias_declaration" => {
                self.open_named(node, ConstructKind::TypeAlias, "type_identifier")
            }
            "enum_declaration" => self.open_named(node, ConstructKind::Enum, "identifier"),
            "enum_assignment" => {
                self.open_named(node, ConstructKind::EnumMember, "property_identifier")
            }
            "method_definition"
            | "method_signature"
            | "abstract_method_signature"
            | "public_field_definition"
            | "property_signature" => self.member(node),
            "internal_module" | "module" => self.namespace(node),
            "type_identifier" => Step::Leaf(self.named(ConstructKind::TypeAnnotation, node)),
            "nested_type_identifier" | "string" | "comment" | "regex" => Step::Skip,
            _ => Step::Descend,
        }
    }

    fn open_named(&self, node: Node<'_>, kind: ConstructKind, name_kind: &str) -> Step {
        node.child_by_field_name("name")
            .filter(|name| name.kind() == name_kind)
            .map_or(Step::Descend, |name| {
                Step::Open(vec![self.named(kind, name)])
            })
    }

    fn member(&self, node: Node<'_>) -> Step {
        let Some(name) = node.child_by_field_name("name") else {
            return Step::Descend;
        };
        let identifier = match name.kind() {
            "property_identifier" => self.text(name),
            "private_property_identifier" => self.text(name).trim_start_matches('#'),
            // Computed, string and numeric names are not checked.
            _ => return Step::Descend,
        };

        let Some(member) = self.member_context(node) else {
            return Step::Descend;
        };
        let is_method = matches!(node.kind(), "method_definition" | "method_signature");
        let kind = if is_method && identifier == "constructor" {
            ConstructKind::Function
        } else {
            member
        };
        Step::Open(vec![SyntaxNode::new(kind, identifier, span_of(name))])
    }

    fn namespace(&self, node: Node<'_>) -> Step {
        let Some(name) = node.child_by_field_name("name") else {
            return Step::Descend;
        };
        match name.kind() {
            "identifier" => Step::Open(vec![self.named(ConstructKind::Namespace, name)]),
            "nested_identifier" => Step::Open(self.namespace_chain(name)),
            // `declare module "pkg"`
            _ => Step::Descend,
        }
    }

    /// Splits `A.B.C` into one namespace per segment.
    fn namespace_chain(&self, name: Node<'_>) -> Vec<SyntaxNode> {
        let start = name.start_position();
        let mut column = start.column;
        let mut offset = name.start_byte();
        self.text(name)
            .split('.')
            .map(|part| {
                let span = Span::new(start.row + 1, column).with_range(offset, part.len());
                column += part.len() + 1;
                offset += part.len() + 1;
                SyntaxNode::new(ConstructKind::Namespace, part, span)
            })
            .collect()
    }

    fn named(&self, kind: ConstructKind, name: Node<'_>) -> SyntaxNode {
        SyntaxNode::new(kind, self.text(name), span_of(name))
    }

    fn text(&self, node: Node<'_>) -> &'s str {
        node.utf8_text(self.src).unwrap_or_default()
    }
}

fn span_of(node: Node<'_>) -> Span {
    let start = node.start_position();
    Span::new(start.row + 1, start.column)
        .with_range(node.start_byte(), node.end_byte() - node.start_byte())
}

/// The bound identifier of a parameter pattern, looking through `...rest`.
fn parameter_name(pattern: Node<'_>) -> Option<Node<'_>> {
    match pattern.kind() {
        "identifier" => Some(pattern),
        "rest_pattern" => pattern.named_child(0).filter(|n| n.kind() == "identifier"),
        _ => None,
    }
}

fn unquote(specifier: &str) -> &str {
    specifier.trim_matches(|c| c == '"' || c == '\'')
}
