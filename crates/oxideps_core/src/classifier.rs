use log::trace;
use oxc_ast::{AstKind, ast::*};

use crate::{
    config::Options,
    types::{Dependency, DependencyKind},
};

/// Decide whether a single node references a module, and if so which one.
///
/// Only the node itself is inspected, never its parents or siblings, so the
/// result depends on nothing but `kind` and `options`. Anything that cannot be
/// reduced to a literal, non-empty specifier yields `None`.
pub fn classify(kind: AstKind<'_>, options: &Options) -> Option<Dependency> {
    match kind {
        AstKind::ImportExpression(expr) => dynamic_import(expr, options),
        AstKind::ImportDeclaration(decl) => import_declaration(decl, options),
        // Type-only re-exports are kept even with skip_type_imports.
        AstKind::ExportNamedDeclaration(decl) => {
            let source = decl.source.as_ref()?;
            literal(source.value.as_str()).map(|s| Dependency::new(s, DependencyKind::Export))
        }
        AstKind::ExportAllDeclaration(decl) => {
            literal(decl.source.value.as_str()).map(|s| Dependency::new(s, DependencyKind::Export))
        }
        // import fs = require('fs')
        AstKind::TSExternalModuleReference(reference) => {
            literal(reference.expression.value.as_str())
                .map(|s| Dependency::new(s, DependencyKind::ImportEquals))
        }
        AstKind::TSImportType(import_type) => type_import(import_type, options),
        AstKind::CallExpression(call) => require_call(call, options),
        _ => None,
    }
}

fn literal(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}

fn dynamic_import(expr: &ImportExpression, options: &Options) -> Option<Dependency> {
    if options.skip_async_imports {
        trace!("Skipping dynamic import at {:?}", expr.span);
        return None;
    }
    match expr.source.without_parentheses() {
        Expression::StringLiteral(sl) => {
            literal(sl.value.as_str()).map(|s| Dependency::new(s, DependencyKind::DynamicImport))
        }
        _ => {
            trace!("Dynamic import with non-literal source at {:?}", expr.span);
            None
        }
    }
}

fn import_declaration(decl: &ImportDeclaration, options: &Options) -> Option<Dependency> {
    // import type { Foo } from 'bar'
    if options.skip_type_imports && decl.import_kind.is_type() {
        trace!("Skipping type-only import of '{}'", decl.source.value);
        return None;
    }
    let specifier = literal(decl.source.value.as_str())?;

    // Default and namespace bindings have no imported name.
    let names: Vec<String> = decl
        .specifiers
        .as_ref()
        .map(|specifiers| {
            specifiers
                .iter()
                .filter_map(|spec| match spec {
                    ImportDeclarationSpecifier::ImportSpecifier(s) => {
                        Some(s.imported.name().to_string())
                    }
                    ImportDeclarationSpecifier::ImportDefaultSpecifier(_)
                    | ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => None,
                })
                .collect()
        })
        .unwrap_or_default();

    Some(Dependency::new(specifier, DependencyKind::Import).with_imported_names(names))
}

fn type_import(import_type: &TSImportType, options: &Options) -> Option<Dependency> {
    if options.skip_type_imports {
        trace!("Skipping import type at {:?}", import_type.span);
        return None;
    }
    let TSType::TSLiteralType(lit) = &import_type.argument else {
        return None;
    };
    match &lit.literal {
        TSLiteral::StringLiteral(sl) => {
            literal(sl.value.as_str()).map(|s| Dependency::new(s, DependencyKind::ImportType))
        }
        _ => {
            trace!("Import type with non-string argument at {:?}", import_type.span);
            None
        }
    }
}

fn require_call(call: &CallExpression, options: &Options) -> Option<Dependency> {
    if !options.mixed_imports {
        return None;
    }
    if !is_plain_require(call) && !is_main_scoped_require(call) {
        return None;
    }

    let first = call.arguments.first()?.as_expression()?;
    let value = match first.without_parentheses() {
        Expression::StringLiteral(sl) => sl.value.as_str(),
        // Only the leading chunk of a template: `tpl-${x}` -> "tpl-"
        Expression::TemplateLiteral(tl) => tl.quasis.first()?.value.raw.as_str(),
        _ => {
            trace!("require() with non-literal argument at {:?}", call.span);
            return None;
        }
    };
    literal(value).map(|s| Dependency::new(s, DependencyKind::Require))
}

/// `require(x)`
fn is_plain_require(call: &CallExpression) -> bool {
    matches!(
        call.callee.without_parentheses(),
        Expression::Identifier(ident) if ident.name.as_str() == "require"
    )
}

/// `require.main.require(x)`
fn is_main_scoped_require(call: &CallExpression) -> bool {
    let Expression::StaticMemberExpression(outer) = call.callee.without_parentheses() else {
        return false;
    };
    let Expression::StaticMemberExpression(inner) = outer.object.without_parentheses() else {
        return false;
    };
    outer.property.name.as_str() == "require"
        && inner.property.name.as_str() == "main"
        && matches!(
            inner.object.without_parentheses(),
            Expression::Identifier(ident) if ident.name.as_str() == "require"
        )
}
