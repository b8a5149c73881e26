//! Parser façade for reading component sources.
//!
//! Wraps the OXC parser so both extractors build their syntax tree the same
//! way and report failures through [`StorygenError::Parse`].

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{Result, StorygenError};

/// How a component source is read.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Language flavour handed to OXC. Decorators need TypeScript.
    pub source_type: SourceType,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::typescript()
    }
}

impl ParseOptions {
    /// TypeScript module, the flavour every component source is read as.
    pub fn typescript() -> Self {
        Self {
            source_type: SourceType::ts(),
        }
    }
}

/// A syntax tree borrowed from the allocator handed to [`parse`].
///
/// Extractors drop it as soon as their walk is done.
pub struct ParsedProgram<'a> {
    pub program: Program<'a>,
    pub source_text: &'a str,
}

impl<'a> ParsedProgram<'a> {
    pub fn ast(&self) -> &Program<'a> {
        &self.program
    }
}

/// Parse source code into an AST.
///
/// Any parser diagnostic fails the parse; a partially recovered tree is never
/// handed to the extractors.
pub fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    options: ParseOptions,
) -> Result<ParsedProgram<'a>> {
    let result = Parser::new(allocator, source, options.source_type).parse();

    if result.panicked || !result.errors.is_empty() {
        let mut diagnostics: Vec<String> = result
            .errors
            .iter()
            .map(|err| err.to_string())
            .collect();
        if diagnostics.is_empty() {
            diagnostics.push("parser aborted".to_string());
        }
        return Err(StorygenError::parse_error(&diagnostics));
    }

    Ok(ParsedProgram {
        program: result.program,
        source_text: source,
    })
}
