use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::path::Path;

use crate::{
    config::Options,
    error::{Error, Result},
};

/// Input to an extraction: raw text, or a program the caller already parsed.
#[derive(Debug, Clone, Copy)]
pub enum Source<'s, 'a> {
    Text(&'s str),
    Program(&'s Program<'a>),
}

impl<'s, 'a> From<&'s str> for Source<'s, 'a> {
    fn from(text: &'s str) -> Self {
        Source::Text(text)
    }
}

impl<'s, 'a> From<&'s Program<'a>> for Source<'s, 'a> {
    fn from(program: &'s Program<'a>) -> Self {
        Source::Program(program)
    }
}

/// TypeScript module grammar, which accepts plain JavaScript as well.
pub(crate) fn source_type(options: &Options) -> SourceType {
    SourceType::default().with_typescript(true).with_module(true).with_jsx(options.jsx)
}

/// Whether a file extension calls for JSX parsing.
pub(crate) fn jsx_for(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str());
    matches!(ext, Some("tsx") | Some("jsx"))
}

/// Parse `text` into a program, failing on any parser diagnostic.
pub(crate) fn parse<'a>(
    allocator: &'a Allocator,
    text: &'a str,
    options: &Options,
) -> Result<Program<'a>> {
    let st = source_type(options);
    trace!("Parsing {} bytes (jsx: {})", text.len(), options.jsx);
    let ParserReturn { program, errors, panicked, .. } =
        OxcParser::new(allocator, text, st).parse();

    if panicked || !errors.is_empty() {
        let mut messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        if messages.is_empty() {
            messages.push("Parser aborted".to_string());
        }
        debug!("Parse failed with {} errors", messages.len());
        return Err(Error::Parse { messages });
    }

    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typescript() {
        let allocator = Allocator::default();
        let program =
            parse(&allocator, "import type { T } from './t';\nlet x: T;", &Options::default())
                .unwrap();
        assert_eq!(program.body.len(), 2);
    }

    #[test]
    fn test_parse_plain_javascript() {
        let allocator = Allocator::default();
        let program =
            parse(&allocator, "const fs = require('fs');", &Options::default()).unwrap();
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn test_parse_error() {
        let allocator = Allocator::default();
        let result = parse(&allocator, "import { from", &Options::default());
        match result {
            Err(Error::Parse { messages }) => assert!(!messages.is_empty()),
            other => panic!("expected parse error, got {:?}", other.map(|p| p.body.len())),
        }
    }

    #[test]
    fn test_non_syntax_diagnostic_is_parse_error() {
        let allocator = Allocator::default();
        let result = parse(&allocator, "import a from './a';\nreturn 1;", &Options::default());
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_jsx_requires_option() {
        let allocator = Allocator::default();
        let text = "const el = <div>hi</div>;";
        assert!(parse(&allocator, text, &Options::default()).is_err());

        let allocator = Allocator::default();
        assert!(parse(&allocator, text, &Options::default().with_jsx()).is_ok());
    }

    #[test]
    fn test_jsx_for_extension() {
        assert!(jsx_for(Path::new("component.tsx")));
        assert!(jsx_for(Path::new("component.jsx")));
        assert!(!jsx_for(Path::new("util.ts")));
        assert!(!jsx_for(Path::new("util.js")));
        assert!(!jsx_for(Path::new("Makefile")));
    }
}
