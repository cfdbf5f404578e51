//! Type preserving re-export of Luau modules
//!
//! Requiring a module through an alias loses its exported types, so the
//! generated alias re-declares each one as a reference into the original:
//!
//! ```text
//! local module = require('../pkg/src/init.luau')
//! export type Value = module.Value
//! export type List<T = string> = module.List<T>
//! return module
//! ```
//!
//! The source is parsed with `full_moon`, the new module is assembled as a
//! syntax tree and printed through `stylua`.

use super::{ReexportError, Reexporter};
use full_moon::ast::luau::{
    ExportedTypeDeclaration, GenericDeclaration, GenericDeclarationParameter,
    GenericParameterInfo, IndexedTypeInfo, TypeDeclaration, TypeFieldKey, TypeInfo,
};
use full_moon::ast::punctuated::{Pair, Punctuated};
use full_moon::ast::{
    Block, Call, Expression, FunctionArgs, FunctionCall, LastStmt, LocalAssignment, Prefix,
    Return, Stmt, Suffix, Var,
};
use full_moon::tokenizer::{StringLiteralQuoteType, Symbol, Token, TokenReference, TokenType};
use full_moon::visitors::Visitor;
use full_moon::ShortString;
use std::iter;
use stylua_lib::{Config, OutputVerification, QuoteStyle};

/// Local holding the required module in generated code
const MODULE_LOCAL: &str = "module";

/// Built-in Luau types a generic default may use and still be re-declared
const STANDARD_TYPES: [&str; 10] = [
    "string", "boolean", "nil", "number", "userdata", "buffer", "thread", "never", "any",
    "unknown",
];

/// Default [`Reexporter`] forwarding every `export type` of a Luau module
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeReexporter;

impl TypeReexporter {
    pub fn new() -> Self {
        Self
    }

    fn formatter_config(&self) -> Config {
        let mut config = Config::new();
        config.quote_style = QuoteStyle::AutoPreferSingle;
        config.column_width = 80;
        config
    }
}

impl Reexporter for TypeReexporter {
    fn reexport(&self, module_path: &str, code: &str) -> Result<String, ReexportError> {
        let ast = full_moon::parse(code).map_err(parse_failure)?;

        let module = identifier(MODULE_LOCAL);
        let mut collector = TypeExportCollector::new(module.clone());
        collector.visit_ast(&ast);

        let stmts = iter::once(require_statement(&module, module_path))
            .chain(collector.statements)
            .map(|stmt| (stmt, None))
            .collect();
        let block = Block::new()
            .with_stmts(stmts)
            .with_last_stmt(Some((LastStmt::Return(return_statement(&module)), None)));

        let formatted = stylua_lib::format_ast(
            ast.with_nodes(block),
            self.formatter_config(),
            None,
            OutputVerification::None,
        )
        .map_err(|err| ReexportError::Generate(err.to_string()))?;

        Ok(formatted.to_string())
    }
}

fn parse_failure(errors: Vec<full_moon::Error>) -> ReexportError {
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();

    if messages.is_empty() {
        ReexportError::Parse("no diagnostic reported".to_string())
    } else {
        ReexportError::Parse(messages.join("; "))
    }
}

/// Gathers a re-declaration for every exported type, nested blocks included
struct TypeExportCollector {
    module: TokenReference,
    statements: Vec<Stmt>,
}

impl TypeExportCollector {
    fn new(module: TokenReference) -> Self {
        Self {
            module,
            statements: Vec::new(),
        }
    }

    /// `export type Name<A, B...> = module.Name<A, B...>`
    fn redeclare(&self, declaration: &TypeDeclaration) -> Option<Stmt> {
        let name = declaration.type_name().clone();

        let (reference, generics) = match declaration.generics() {
            Some(generics) => (
                IndexedTypeInfo::Generic {
                    base: name,
                    arrows: generics.arrows().clone(),
                    generics: generic_arguments(generics)?,
                },
                Some(
                    generics
                        .clone()
                        .with_generics(without_foreign_defaults(generics.generics())),
                ),
            ),
            None => (IndexedTypeInfo::Basic(name), None),
        };

        let definition = TypeInfo::Module {
            module: self.module.clone(),
            punctuation: TokenReference::symbol(".").ok()?,
            type_info: Box::new(reference),
        };

        let redeclared = declaration
            .clone()
            .with_generics(generics)
            .with_type_definition(definition);

        Some(Stmt::ExportedTypeDeclaration(ExportedTypeDeclaration::new(
            redeclared,
        )))
    }
}

impl Visitor for TypeExportCollector {
    fn visit_block(&mut self, block: &Block) {
        for stmt in block.stmts() {
            if let Stmt::ExportedTypeDeclaration(export) = stmt {
                if let Some(redeclared) = self.redeclare(export.type_declaration()) {
                    self.statements.push(redeclared);
                }
            }
        }
    }
}

/// Turn `<T = string, R...>` into the argument list `<T, R...>`
fn generic_arguments(generics: &GenericDeclaration) -> Option<Punctuated<TypeInfo>> {
    let mut arguments = Punctuated::new();

    for pair in generics.generics().pairs() {
        let argument = match pair.value().parameter() {
            GenericParameterInfo::Name(name) => TypeInfo::Basic(name.clone()),
            GenericParameterInfo::Variadic { name, ellipsis } => TypeInfo::GenericPack {
                name: name.clone(),
                ellipsis: ellipsis.clone(),
            },
            _ => return None,
        };

        match pair.punctuation() {
            Some(comma) => arguments.push(Pair::Punctuated(argument, comma.clone())),
            None => arguments.push(Pair::End(argument)),
        }
    }

    Some(arguments)
}

/// Drop the defaults the alias module could not name
fn without_foreign_defaults(
    parameters: &Punctuated<GenericDeclarationParameter>,
) -> Punctuated<GenericDeclarationParameter> {
    parameters
        .clone()
        .into_pairs()
        .map(|pair| {
            pair.map(|parameter| {
                let foreign = parameter
                    .default_type()
                    .is_some_and(|default| references_foreign_type(default));
                if foreign {
                    parameter.with_default(None)
                } else {
                    parameter
                }
            })
        })
        .collect()
}

/// Whether a type mentions anything beyond built-in types and literals.
///
/// Best effort: unknown constructs count as foreign.
fn references_foreign_type(type_info: &TypeInfo) -> bool {
    let mut pending = vec![type_info];

    while let Some(current) = pending.pop() {
        match current {
            TypeInfo::Basic(name) => {
                if !STANDARD_TYPES.contains(&name.token().to_string().as_str()) {
                    return true;
                }
            }
            TypeInfo::String(_) | TypeInfo::Boolean(_) => {}
            TypeInfo::Array { type_info, .. } => pending.push(type_info),
            TypeInfo::Optional { base, .. } => pending.push(base),
            TypeInfo::Variadic { type_info, .. } => pending.push(type_info),
            TypeInfo::Callback {
                arguments,
                return_type,
                ..
            } => {
                pending.push(return_type);
                pending.extend(arguments.iter().map(|argument| argument.type_info()));
            }
            TypeInfo::Union(union) => pending.extend(union.types().iter()),
            TypeInfo::Intersection(intersection) => pending.extend(intersection.types().iter()),
            TypeInfo::Tuple { types, .. } => pending.extend(types.iter()),
            TypeInfo::Table { fields, .. } => {
                for field in fields.iter() {
                    match field.key() {
                        TypeFieldKey::Name(_) => {}
                        TypeFieldKey::IndexSignature { inner, .. } => pending.push(inner),
                        _ => return true,
                    }
                    pending.push(field.value());
                }
            }
            _ => return true,
        }
    }

    false
}

fn single<T>(value: T) -> Punctuated<T> {
    let mut punctuated = Punctuated::new();
    punctuated.push(Pair::End(value));
    punctuated
}

fn bare_token(token_type: TokenType) -> TokenReference {
    TokenReference::new(Vec::new(), Token::new(token_type), Vec::new())
}

fn identifier(name: &str) -> TokenReference {
    bare_token(TokenType::Identifier {
        identifier: ShortString::new(name),
    })
}

fn string_literal(value: &str) -> TokenReference {
    bare_token(TokenType::StringLiteral {
        literal: ShortString::new(value),
        multi_line_depth: 0,
        quote_type: StringLiteralQuoteType::Double,
    })
}

/// `local module = require("<module_path>")`
fn require_statement(module: &TokenReference, module_path: &str) -> Stmt {
    let call = FunctionCall::new(Prefix::Name(identifier("require"))).with_suffixes(vec![
        Suffix::Call(Call::AnonymousCall(FunctionArgs::String(string_literal(
            module_path,
        )))),
    ]);

    Stmt::LocalAssignment(
        LocalAssignment::new(single(module.clone()))
            .with_equal_token(Some(bare_token(TokenType::Symbol {
                symbol: Symbol::Equal,
            })))
            .with_expressions(single(Expression::FunctionCall(call))),
    )
}

fn return_statement(module: &TokenReference) -> Return {
    Return::new().with_returns(single(Expression::Var(Var::Name(module.clone()))))
}
