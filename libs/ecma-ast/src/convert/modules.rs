//! # Module Conversion
//!
//! `import` and `export` declarations, their specifier lists and
//! import attributes.
//!
//! ```text
//! import ImportClause FromClause WithClause? ;
//! import ModuleSpecifier WithClause? ;
//! export ExportFromClause FromClause WithClause? ;
//! export NamedExports ;
//! export VariableStatement | Declaration
//! export default (HoistableDeclaration | ClassDeclaration | AssignmentExpression ;)
//! ```

use super::{ChildCursor, Dispatcher};
use crate::ast::{
    Declaration, ExportAllDeclaration, ExportDefaultDeclaration, ExportDefaultKind,
    ExportNamedDeclaration, ExportSpecifier, ImportAttribute, ImportDeclaration,
    ImportDefaultSpecifier, ImportNamespaceSpecifier, ImportSpecifier, ImportSpecifierKind,
    Literal, ModuleDeclaration, ModuleExportName, ModuleItem, WithClauseTokens,
};
use crate::error::ConvertResult;
use crate::token::Token;
use ecma_cst::{CstNode, NodeKind};

/// `{` and `}` of a named import or export list.
pub(crate) type BraceTokens = (Option<Token>, Option<Token>);

/// Rules that wrap a run of module items.
const ITEM_LIST_KINDS: &[NodeKind] = &[
    NodeKind::ModuleItemList,
    NodeKind::ModuleItem,
    NodeKind::StatementList,
    NodeKind::StatementListItem,
    NodeKind::ScriptBody,
    NodeKind::ModuleBody,
];

/// `from ModuleSpecifier WithClause?` after the specifiers.
struct SourceClause<'a> {
    from: Option<&'a CstNode>,
    source: Literal,
    attributes: Vec<ImportAttribute>,
    with_tokens: WithClauseTokens,
}

impl Dispatcher {
    /// Flattens a module or statement list into top-level items.
    pub(crate) fn module_items(&self, node: &CstNode) -> ConvertResult<Vec<ModuleItem>> {
        let mut items = Vec::new();
        self.collect_items(node, &mut items)?;
        Ok(items)
    }

    pub(crate) fn collect_items(&self, node: &CstNode, out: &mut Vec<ModuleItem>) -> ConvertResult<()> {
        if ITEM_LIST_KINDS.contains(&node.kind) && !node.is_terminal() {
            for child in &node.children {
                self.collect_items(child, out)?;
            }
            return Ok(());
        }
        match node.kind {
            NodeKind::ImportDeclaration | NodeKind::ExportDeclaration => {
                out.push(ModuleItem::ModuleDeclaration(self.module_declaration(node)?));
            }
            _ => out.extend(self.statement_list(node)?.into_iter().map(ModuleItem::Statement)),
        }
        Ok(())
    }

    /// Converts an `ImportDeclaration` or `ExportDeclaration`.
    pub(crate) fn module_declaration(&self, node: &CstNode) -> ConvertResult<ModuleDeclaration> {
        match node.kind {
            NodeKind::ImportDeclaration => self.import_declaration(node),
            NodeKind::ExportDeclaration => self.export_declaration(node),
            _ => Err(self.unsupported(node, "module declaration")),
        }
    }

    // =========================================================================
    // IMPORTS
    // =========================================================================

    fn import_declaration(&self, node: &CstNode) -> ConvertResult<ModuleDeclaration> {
        let mut cursor = ChildCursor::new(node);
        let import = self.require(cursor.eat("import"), node, "`import`")?;

        let mut specifiers = Vec::new();
        let mut braces = BraceTokens::default();
        while let Some(next) = cursor.peek() {
            if is_source_start(next) {
                break;
            }
            cursor.next();
            if !next.is_token(",") {
                self.import_specifiers(next, &mut specifiers, &mut braces)?;
            }
        }
        let clause = self.source_clause(&mut cursor, node, !specifiers.is_empty() || braces.0.is_some())?;

        Ok(ModuleDeclaration::Import(ImportDeclaration {
            specifiers,
            source: clause.source,
            attributes: clause.attributes,
            import_token: self.tok(import),
            l_brace_token: braces.0,
            r_brace_token: braces.1,
            from_token: self.tok_opt(clause.from),
            with_clause_tokens: clause.with_tokens,
            semicolon_token: self.tok_opt(cursor.eat(";")),
            loc: node.loc,
        }))
    }

    /// Collects the specifiers of an import clause (or any part of one).
    pub(crate) fn import_specifiers(
        &self,
        node: &CstNode,
        out: &mut Vec<ImportSpecifierKind>,
        braces: &mut BraceTokens,
    ) -> ConvertResult<()> {
        match node.kind {
            NodeKind::ImportClause => {
                for child in node.children.iter().filter(|c| !c.is_token(",")) {
                    self.import_specifiers(child, out, braces)?;
                }
            }
            NodeKind::NamedImports | NodeKind::ImportsList => {
                for child in &node.children {
                    if child.is_token("{") {
                        braces.0 = self.tok(child);
                    } else if child.is_token("}") {
                        braces.1 = self.tok(child);
                    } else if !child.is_token(",") {
                        self.named_import(child, out, braces)?;
                    }
                }
            }
            NodeKind::NameSpaceImport => match node.children.as_slice() {
                [star, as_node, local] if star.is_token("*") && as_node.is_token("as") => {
                    out.push(ImportSpecifierKind::Namespace(ImportNamespaceSpecifier {
                        local: self.identifier(local)?,
                        star_token: self.tok(star),
                        as_token: self.tok(as_node),
                        loc: node.loc,
                    }));
                }
                _ => return Err(self.malformed(node, "namespace import must be `* as name`")),
            },
            NodeKind::ImportSpecifier => self.named_import(node, out, braces)?,
            _ => {
                out.push(ImportSpecifierKind::Default(ImportDefaultSpecifier {
                    local: self.identifier(node)?,
                    loc: node.loc,
                }));
            }
        }
        Ok(())
    }

    /// One entry between the braces of `import { ... }`.
    fn named_import(
        &self,
        node: &CstNode,
        out: &mut Vec<ImportSpecifierKind>,
        braces: &mut BraceTokens,
    ) -> ConvertResult<()> {
        if matches!(node.kind, NodeKind::NamedImports | NodeKind::ImportsList) {
            return self.import_specifiers(node, out, braces);
        }
        let parts: &[CstNode] = if node.kind == NodeKind::ImportSpecifier {
            &node.children
        } else {
            std::slice::from_ref(node)
        };
        let specifier = match parts {
            [local] => {
                let local = self.identifier(local)?;
                ImportSpecifier {
                    imported: ModuleExportName::Identifier(local.clone()),
                    local,
                    as_token: None,
                    loc: node.loc,
                }
            }
            [imported, as_node, local] if as_node.is_token("as") => ImportSpecifier {
                imported: self.module_export_name(imported)?,
                local: self.identifier(local)?,
                as_token: self.tok(as_node),
                loc: node.loc,
            },
            _ => return Err(self.malformed(node, "expected `name` or `name as local`")),
        };
        out.push(ImportSpecifierKind::Named(specifier));
        Ok(())
    }

    // =========================================================================
    // EXPORTS
    // =========================================================================

    fn export_declaration(&self, node: &CstNode) -> ConvertResult<ModuleDeclaration> {
        let mut cursor = ChildCursor::flattened(node, &[NodeKind::ExportFromClause]);
        let export = self.require(cursor.eat("export"), node, "`export`")?;

        if let Some(default) = cursor.eat("default") {
            let target = self.require(cursor.next(), node, "default export")?;
            return Ok(ModuleDeclaration::ExportDefault(ExportDefaultDeclaration {
                declaration: self.default_export(target)?,
                export_token: self.tok(export),
                default_token: self.tok(default),
                semicolon_token: self.tok_opt(cursor.eat(";")),
                loc: node.loc,
            }));
        }

        if let Some(star) = cursor.eat("*") {
            let as_node = cursor.eat("as");
            let exported = match as_node {
                Some(_) => {
                    let name = self.require(cursor.next(), node, "exported name")?;
                    Some(self.module_export_name(name)?)
                }
                None => None,
            };
            let clause = self.source_clause(&mut cursor, node, true)?;
            return Ok(ModuleDeclaration::ExportAll(ExportAllDeclaration {
                exported,
                source: clause.source,
                attributes: clause.attributes,
                export_token: self.tok(export),
                star_token: self.tok(star),
                as_token: self.tok_opt(as_node),
                from_token: self.tok_opt(clause.from),
                with_clause_tokens: clause.with_tokens,
                semicolon_token: self.tok_opt(cursor.eat(";")),
                loc: node.loc,
            }));
        }

        if let Some(named) = cursor.eat_kind(NodeKind::NamedExports) {
            let mut specifiers = Vec::new();
            let mut braces = BraceTokens::default();
            self.export_specifiers(named, &mut specifiers, &mut braces)?;
            let has_source = cursor
                .peek()
                .is_some_and(|c| c.kind == NodeKind::FromClause || c.is_token("from"));
            let clause = if has_source {
                Some(self.source_clause(&mut cursor, node, true)?)
            } else {
                None
            };
            let (from, source, attributes, with_tokens) = match clause {
                Some(c) => (c.from, Some(c.source), c.attributes, c.with_tokens),
                None => (None, None, Vec::new(), WithClauseTokens::default()),
            };
            return Ok(ModuleDeclaration::ExportNamed(ExportNamedDeclaration {
                declaration: None,
                specifiers,
                source,
                attributes,
                export_token: self.tok(export),
                l_brace_token: braces.0,
                r_brace_token: braces.1,
                from_token: self.tok_opt(from),
                with_clause_tokens: with_tokens,
                semicolon_token: self.tok_opt(cursor.eat(";")),
                loc: node.loc,
            }));
        }

        let target = self.require(cursor.next(), node, "exported declaration")?;
        let declaration = Declaration::try_from(self.statement(target)?)
            .map_err(|_| self.malformed(target, "export must name a declaration"))?;
        Ok(ModuleDeclaration::ExportNamed(ExportNamedDeclaration {
            declaration: Some(declaration),
            specifiers: Vec::new(),
            source: None,
            attributes: Vec::new(),
            export_token: self.tok(export),
            l_brace_token: None,
            r_brace_token: None,
            from_token: None,
            with_clause_tokens: WithClauseTokens::default(),
            semicolon_token: None,
            loc: node.loc,
        }))
    }

    /// `export default` target: a function or class declaration (whose
    /// name is optional) or any assignment expression.
    fn default_export(&self, node: &CstNode) -> ConvertResult<ExportDefaultKind> {
        match node.kind {
            NodeKind::HoistableDeclaration => {
                let only = self.require(node.only_child(), node, "declaration")?;
                self.default_export(only)
            }
            NodeKind::FunctionDeclaration
            | NodeKind::GeneratorDeclaration
            | NodeKind::AsyncFunctionDeclaration
            | NodeKind::AsyncGeneratorDeclaration => {
                let function = self.function_parts(node)?;
                Ok(ExportDefaultKind::Function(Box::new(function.into_declaration())))
            }
            NodeKind::ClassDeclaration => {
                let class = self.class_parts(node)?;
                Ok(ExportDefaultKind::Class(Box::new(class.into_declaration())))
            }
            _ => self.expression(node).map(ExportDefaultKind::Expression),
        }
    }

    fn export_specifiers(
        &self,
        node: &CstNode,
        out: &mut Vec<ExportSpecifier>,
        braces: &mut BraceTokens,
    ) -> ConvertResult<()> {
        for child in &node.children {
            if child.is_token("{") {
                braces.0 = self.tok(child);
            } else if child.is_token("}") {
                braces.1 = self.tok(child);
            } else if child.kind == NodeKind::ExportsList {
                self.export_specifiers(child, out, braces)?;
            } else if !child.is_token(",") {
                out.push(self.export_specifier(child)?);
            }
        }
        Ok(())
    }

    /// `name` or `local as exported`.
    pub(crate) fn export_specifier(&self, node: &CstNode) -> ConvertResult<ExportSpecifier> {
        let parts: &[CstNode] = if node.kind == NodeKind::ExportSpecifier {
            &node.children
        } else {
            std::slice::from_ref(node)
        };
        match parts {
            [name] => {
                let local = self.module_export_name(name)?;
                Ok(ExportSpecifier {
                    exported: local.clone(),
                    local,
                    as_token: None,
                    loc: node.loc,
                })
            }
            [local, as_node, exported] if as_node.is_token("as") => Ok(ExportSpecifier {
                local: self.module_export_name(local)?,
                exported: self.module_export_name(exported)?,
                as_token: self.tok(as_node),
                loc: node.loc,
            }),
            _ => Err(self.malformed(node, "expected `name` or `name as exported`")),
        }
    }

    /// An identifier or string literal naming a binding across modules.
    fn module_export_name(&self, node: &CstNode) -> ConvertResult<ModuleExportName> {
        if !node.is_terminal() {
            if let Some(only) = node.only_child() {
                return self.module_export_name(only);
            }
        }
        if node.kind == NodeKind::StringLiteral {
            return self.literal(node).map(ModuleExportName::Literal);
        }
        self.identifier(node).map(ModuleExportName::Identifier)
    }

    // =========================================================================
    // SOURCES AND ATTRIBUTES
    // =========================================================================

    /// Consumes `FromClause` (or a bare `ModuleSpecifier`) and an optional
    /// `WithClause`. `from` is required when the declaration had
    /// specifiers.
    fn source_clause<'a>(
        &self,
        cursor: &mut ChildCursor<'a>,
        node: &CstNode,
        needs_from: bool,
    ) -> ConvertResult<SourceClause<'a>> {
        let (from, source_node) = if let Some(clause) = cursor.eat_kind(NodeKind::FromClause) {
            match clause.children.as_slice() {
                [from, source] if from.is_token("from") => (Some(from), source),
                _ => return Err(self.malformed(clause, "expected `from \"module\"`")),
            }
        } else {
            let from = cursor.eat("from");
            if needs_from && from.is_none() {
                return Err(self.malformed(node, "missing `from`"));
            }
            (from, self.require(cursor.next(), node, "module specifier")?)
        };
        let source = self.literal(source_node)?;
        if source.as_str().is_none() {
            return Err(self.malformed(source_node, "module specifier must be a string"));
        }

        let (attributes, with_tokens) = match cursor.eat_kind(NodeKind::WithClause) {
            Some(with) => self.with_clause(with)?,
            None => (Vec::new(), WithClauseTokens::default()),
        };
        Ok(SourceClause {
            from,
            source,
            attributes,
            with_tokens,
        })
    }

    /// `with { AttributeKey : StringLiteral , ... }`
    fn with_clause(&self, node: &CstNode) -> ConvertResult<(Vec<ImportAttribute>, WithClauseTokens)> {
        let mut cursor = ChildCursor::flattened(node, &[NodeKind::WithEntries]);
        let with = self.require(cursor.eat("with"), node, "`with`")?;
        let l_brace = self.require(cursor.eat("{"), node, "`{`")?;
        let mut attributes = Vec::new();
        while let Some(key) = cursor.next() {
            if key.is_token("}") {
                return Ok((
                    attributes,
                    WithClauseTokens {
                        with_token: self.tok(with),
                        l_brace_token: self.tok(l_brace),
                        r_brace_token: self.tok(key),
                    },
                ));
            }
            if key.is_token(",") {
                continue;
            }
            let colon = self.require(cursor.eat(":"), node, "`:`")?;
            let value = self.require(cursor.next(), node, "attribute value")?;
            let value_lit = self.literal(value)?;
            if value_lit.as_str().is_none() {
                return Err(self.malformed(value, "attribute value must be a string"));
            }
            attributes.push(ImportAttribute {
                key: self.module_export_name(key)?,
                value: value_lit,
                colon_token: self.tok(colon),
                loc: key.loc.merge(&value.loc),
            });
        }
        Err(self.malformed(node, "missing `}`"))
    }
}

/// Check if `node` starts the `from "module"` part of an import.
fn is_source_start(node: &CstNode) -> bool {
    matches!(
        node.kind,
        NodeKind::FromClause | NodeKind::ModuleSpecifier | NodeKind::StringLiteral
    ) || node.terminal_text() == Some("from")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expression, Statement};
    use crate::error::ConvertError;
    use ecma_cst::CstBuilder;

    fn binding(b: &CstBuilder, name: &str) -> CstNode {
        b.rule(NodeKind::ImportedBinding, vec![b.rule(NodeKind::BindingIdentifier, vec![b.ident(name)])])
    }

    fn from(b: &CstBuilder, module: &str) -> CstNode {
        b.rule(
            NodeKind::FromClause,
            vec![b.ident("from"), b.rule(NodeKind::ModuleSpecifier, vec![b.string(module)])],
        )
    }

    fn with_json(b: &CstBuilder) -> CstNode {
        b.rule(
            NodeKind::WithClause,
            vec![
                b.tok("with"),
                b.tok("{"),
                b.rule(
                    NodeKind::WithEntries,
                    vec![
                        b.rule(NodeKind::AttributeKey, vec![b.ident("type")]),
                        b.tok(":"),
                        b.string("\"json\""),
                    ],
                ),
                b.tok("}"),
            ],
        )
    }

    #[test]
    fn test_default_and_named_imports() {
        let b = CstBuilder::new();
        let clause = b.rule(
            NodeKind::ImportClause,
            vec![
                b.rule(NodeKind::ImportedDefaultBinding, vec![binding(&b, "React")]),
                b.tok(","),
                b.rule(
                    NodeKind::NamedImports,
                    vec![
                        b.tok("{"),
                        b.rule(
                            NodeKind::ImportsList,
                            vec![
                                b.rule(NodeKind::ImportSpecifier, vec![binding(&b, "useState")]),
                                b.tok(","),
                                b.rule(
                                    NodeKind::ImportSpecifier,
                                    vec![
                                        b.rule(NodeKind::ModuleExportName, vec![b.string("'a-b'")]),
                                        b.ident("as"),
                                        binding(&b, "ab"),
                                    ],
                                ),
                            ],
                        ),
                        b.tok("}"),
                    ],
                ),
            ],
        );
        let node = b.rule(
            NodeKind::ImportDeclaration,
            vec![b.tok("import"), clause, from(&b, "'react'"), b.tok(";")],
        );
        let ModuleDeclaration::Import(import) = Dispatcher::default().module_declaration(&node).unwrap()
        else {
            panic!("expected import");
        };
        assert_eq!(import.specifiers.len(), 3);
        assert!(matches!(&import.specifiers[0], ImportSpecifierKind::Default(d) if d.local.name == "React"));
        let ImportSpecifierKind::Named(same) = &import.specifiers[1] else {
            panic!("expected named import");
        };
        assert_eq!(same.imported, ModuleExportName::Identifier(same.local.clone()));
        let ImportSpecifierKind::Named(renamed) = &import.specifiers[2] else {
            panic!("expected named import");
        };
        assert!(matches!(&renamed.imported, ModuleExportName::Literal(l) if l.as_str() == Some("a-b")));
        assert_eq!(renamed.local.name, "ab");
        assert_eq!(import.source.as_str(), Some("react"));
        assert!(import.l_brace_token.is_some() && import.from_token.is_some());
    }

    #[test]
    fn test_side_effect_import_with_attributes() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::ImportDeclaration,
            vec![
                b.tok("import"),
                b.rule(NodeKind::ModuleSpecifier, vec![b.string("'./data.json'")]),
                with_json(&b),
            ],
        );
        let ModuleDeclaration::Import(import) = Dispatcher::default().module_declaration(&node).unwrap()
        else {
            panic!("expected import");
        };
        assert!(import.specifiers.is_empty());
        assert!(import.from_token.is_none());
        assert_eq!(import.attributes.len(), 1);
        let attr = &import.attributes[0];
        assert!(matches!(&attr.key, ModuleExportName::Identifier(id) if id.name == "type"));
        assert_eq!(attr.value.as_str(), Some("json"));
        assert!(!import.with_clause_tokens.is_empty());
    }

    #[test]
    fn test_namespace_import() {
        let b = CstBuilder::new();
        let clause = b.rule(
            NodeKind::ImportClause,
            vec![b.rule(
                NodeKind::NameSpaceImport,
                vec![b.tok("*"), b.ident("as"), binding(&b, "ns")],
            )],
        );
        let node = b.rule(NodeKind::ImportDeclaration, vec![b.tok("import"), clause, from(&b, "'m'")]);
        let ModuleDeclaration::Import(import) = Dispatcher::default().module_declaration(&node).unwrap()
        else {
            panic!("expected import");
        };
        assert!(matches!(&import.specifiers[0], ImportSpecifierKind::Namespace(ns) if ns.local.name == "ns"));
    }

    #[test]
    fn test_export_all_as_name() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::ExportDeclaration,
            vec![
                b.tok("export"),
                b.rule(
                    NodeKind::ExportFromClause,
                    vec![b.tok("*"), b.ident("as"), b.rule(NodeKind::ModuleExportName, vec![b.ident("utils")])],
                ),
                from(&b, "'./utils.js'"),
                b.tok(";"),
            ],
        );
        let ModuleDeclaration::ExportAll(all) = Dispatcher::default().module_declaration(&node).unwrap()
        else {
            panic!("expected export all");
        };
        assert!(matches!(&all.exported, Some(ModuleExportName::Identifier(id)) if id.name == "utils"));
        assert_eq!(all.source.as_str(), Some("./utils.js"));
    }

    #[test]
    fn test_export_named_list_with_rename() {
        let b = CstBuilder::new();
        let named = b.rule(
            NodeKind::NamedExports,
            vec![
                b.tok("{"),
                b.rule(
                    NodeKind::ExportsList,
                    vec![
                        b.rule(NodeKind::ExportSpecifier, vec![b.ident("a")]),
                        b.tok(","),
                        b.rule(
                            NodeKind::ExportSpecifier,
                            vec![b.ident("b"), b.ident("as"), b.tok("default")],
                        ),
                    ],
                ),
                b.tok("}"),
            ],
        );
        let node = b.rule(NodeKind::ExportDeclaration, vec![b.tok("export"), named, b.tok(";")]);
        let ModuleDeclaration::ExportNamed(export) = Dispatcher::default().module_declaration(&node).unwrap()
        else {
            panic!("expected named export");
        };
        assert!(export.declaration.is_none() && export.source.is_none());
        assert_eq!(export.specifiers.len(), 2);
        assert!(matches!(&export.specifiers[1].exported, ModuleExportName::Identifier(id) if id.name == "default"));
    }

    #[test]
    fn test_export_declaration_and_default_expression() {
        let b = CstBuilder::new();
        let d = Dispatcher::default();
        let lexical = b.rule(
            NodeKind::LexicalDeclaration,
            vec![
                b.tok("const"),
                b.rule(
                    NodeKind::BindingList,
                    vec![b.rule(
                        NodeKind::LexicalBinding,
                        vec![
                            b.rule(NodeKind::BindingIdentifier, vec![b.ident("x")]),
                            b.rule(NodeKind::Initializer, vec![b.tok("="), b.num("1")]),
                        ],
                    )],
                ),
                b.tok(";"),
            ],
        );
        let node = b.rule(
            NodeKind::ExportDeclaration,
            vec![b.tok("export"), b.rule(NodeKind::Declaration, vec![lexical])],
        );
        let ModuleDeclaration::ExportNamed(export) = d.module_declaration(&node).unwrap() else {
            panic!("expected named export");
        };
        assert!(matches!(export.declaration, Some(Declaration::Variable(_))));

        let node = b.rule(
            NodeKind::ExportDeclaration,
            vec![b.tok("export"), b.tok("default"), b.num("42"), b.tok(";")],
        );
        let ModuleDeclaration::ExportDefault(export) = d.module_declaration(&node).unwrap() else {
            panic!("expected default export");
        };
        assert!(matches!(export.declaration, ExportDefaultKind::Expression(Expression::Literal(_))));
    }

    #[test]
    fn test_export_of_non_declaration_is_malformed() {
        let b = CstBuilder::new();
        let node = b.rule(
            NodeKind::ExportDeclaration,
            vec![b.tok("export"), b.rule(NodeKind::EmptyStatement, vec![b.tok(";")])],
        );
        assert!(matches!(
            Dispatcher::default().module_declaration(&node).unwrap_err(),
            ConvertError::MalformedNode { .. }
        ));
    }

    #[test]
    fn test_items_mix_statements_and_declarations() {
        let b = CstBuilder::new();
        let import = b.rule(
            NodeKind::ImportDeclaration,
            vec![b.tok("import"), b.rule(NodeKind::ModuleSpecifier, vec![b.string("'x'")])],
        );
        let list = b.rule(
            NodeKind::ModuleItemList,
            vec![
                b.rule(NodeKind::ModuleItem, vec![import]),
                b.rule(
                    NodeKind::ModuleItem,
                    vec![b.rule(
                        NodeKind::StatementListItem,
                        vec![b.rule(NodeKind::EmptyStatement, vec![b.tok(";")])],
                    )],
                ),
            ],
        );
        let items = Dispatcher::default().module_items(&list).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_module_declaration());
        assert!(matches!(items[1], ModuleItem::Statement(Statement::Empty(_))));
    }
}
