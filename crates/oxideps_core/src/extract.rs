use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use std::{fs, path::Path};

use crate::{
    classifier::classify,
    config::Options,
    error::{Error, Result},
    source::{Source, jsx_for, parse},
    types::Dependency,
    walker::walk,
};

/// Extract every dependency referenced by `source`, in document order.
///
/// Fails with [`Error::InvalidInput`] when no source is given and with
/// [`Error::Parse`] when the text is not valid for the configured dialect.
/// Empty text yields no dependencies without being parsed.
pub fn extract(source: Option<Source<'_, '_>>, options: &Options) -> Result<Vec<Dependency>> {
    let Some(source) = source else {
        debug!("No source given");
        return Err(Error::InvalidInput);
    };

    match source {
        Source::Text("") => {
            trace!("Empty source, nothing to extract");
            Ok(Vec::new())
        }
        Source::Text(text) => {
            let allocator = Allocator::default();
            let program = parse(&allocator, text, options)?;
            Ok(extract_program(&program, options))
        }
        Source::Program(program) => Ok(extract_program(program, options)),
    }
}

/// [`extract`] with JSX/TSX parsing forced on.
pub fn extract_tsx(source: Option<Source<'_, '_>>, options: &Options) -> Result<Vec<Dependency>> {
    extract(source, &options.with_jsx())
}

/// Extract dependencies from an already parsed program.
pub fn extract_program(program: &Program<'_>, options: &Options) -> Vec<Dependency> {
    let mut deps: Vec<Dependency> = Vec::new();
    walk(program, |kind| {
        if let Some(dep) = classify(kind, options) {
            trace!("Found {:?} dependency: '{}'", dep.kind, dep.specifier);
            deps.push(dep);
        }
    });
    debug!("Found {} dependencies", deps.len());
    deps
}

/// Read one file and extract its dependencies.
///
/// `.jsx` and `.tsx` files are always parsed with JSX enabled.
pub fn extract_file(path: &Path, options: &Options) -> Result<Vec<Dependency>> {
    trace!("Reading file for dependencies: {}", path.display());
    let src = fs::read_to_string(path)
        .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;

    let options = if jsx_for(path) { options.with_jsx() } else { *options };
    let deps = extract(Some(Source::Text(&src)), &options)?;
    debug!("Found {} dependencies in {}", deps.len(), path.display());
    Ok(deps)
}
