// Constants for the MustScript fact exporter

/// Default limit on nested statements and expressions accepted by the parser.
/// Deeper input is reported as a parse error instead of overflowing the stack.
pub const MAX_NESTING_DEPTH: usize = 1024;

/// Stack reserved for the parser thread before any nesting.
pub const PARSER_BASE_STACK: usize = 1024 * 1024;

/// Extra parser stack reserved per allowed nesting level. One level of
/// parenthesised expression descends through every precedence layer.
pub const PARSER_STACK_PER_LEVEL: usize = 32 * 1024;

/// Extension written in place of the input's extension when no output path is given.
pub const FACTS_EXTENSION: &str = "facts.P";
