use rustpython_ast::Stmt;

/// A single rule breach tied to a source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule_id: String,
    pub message: String,
    /// Byte offset of the offending definition in the source file
    pub offset: usize,
    pub file_path: String,
}

/// Context passed to each rule for checking
pub struct RuleContext<'a> {
    pub stmt: &'a Stmt,
    pub file_path: &'a str,
}
