//! NPM100: private methods forbidden
//!
//! Method names starting with one or two underscores signal restricted
//! visibility that Python never enforces. Such methods are forbidden in
//! class bodies. Double-underscore special methods (`__init__`, `__len__`,
//! `__aexit__`, ...) belong to the language protocol and stay exempt; the
//! exemption is a name-shape check, not a list of known names.

use crate::models::{RuleContext, Violation};
use crate::rules::base::LintRule;
use rustpython_ast::{ExceptHandler, Stmt, StmtClassDef};

const MESSAGE: &str = "NPM100 private methods forbidden";

pub struct PrivateMethodsRule;

impl PrivateMethodsRule {
    pub fn new() -> Self {
        Self
    }

    /// A name framed by exactly two leading and two trailing underscores.
    ///
    /// Names that are all underscores never qualify: `____` has four
    /// leading underscores, not two.
    fn is_dunder(name: &str) -> bool {
        let bytes = name.as_bytes();
        bytes.len() >= 4
            && bytes.starts_with(b"__")
            && bytes.ends_with(b"__")
            && bytes[2] != b'_'
            && bytes[bytes.len() - 3] != b'_'
    }

    /// Leading-underscore name that is not a dunder.
    fn is_private(name: &str) -> bool {
        name.starts_with('_') && !Self::is_dunder(name)
    }

    /// Check the direct children of a class body.
    ///
    /// Only direct children count as methods. Each child is still walked
    /// afterwards so that classes nested anywhere inside it are checked as
    /// their own class bodies.
    fn check_class(&self, class: &StmtClassDef, violations: &mut Vec<Violation>) {
        for stmt in &class.body {
            match stmt {
                Stmt::FunctionDef(func) if Self::is_private(func.name.as_str()) => {
                    violations.push(self.violation(func.range.start().to_usize()));
                }
                Stmt::AsyncFunctionDef(func) if Self::is_private(func.name.as_str()) => {
                    violations.push(self.violation(func.range.start().to_usize()));
                }
                _ => {}
            }
            self.visit_stmt(stmt, violations);
        }
    }

    fn violation(&self, offset: usize) -> Violation {
        Violation {
            rule_id: self.rule_id().to_string(),
            message: MESSAGE.to_string(),
            offset,
            file_path: String::new(), // Filled in by check()
        }
    }

    /// Depth-first walk over every statement that can nest a class
    /// definition: function bodies, branches, loops, `with`, `try`
    /// and `match` arms.
    fn visit_stmt(&self, stmt: &Stmt, violations: &mut Vec<Violation>) {
        match stmt {
            Stmt::ClassDef(class) => self.check_class(class, violations),
            Stmt::FunctionDef(func) => self.visit_body(&func.body, violations),
            Stmt::AsyncFunctionDef(func) => self.visit_body(&func.body, violations),
            Stmt::If(if_stmt) => {
                self.visit_body(&if_stmt.body, violations);
                self.visit_body(&if_stmt.orelse, violations);
            }
            Stmt::For(for_stmt) => {
                self.visit_body(&for_stmt.body, violations);
                self.visit_body(&for_stmt.orelse, violations);
            }
            Stmt::AsyncFor(for_stmt) => {
                self.visit_body(&for_stmt.body, violations);
                self.visit_body(&for_stmt.orelse, violations);
            }
            Stmt::While(while_stmt) => {
                self.visit_body(&while_stmt.body, violations);
                self.visit_body(&while_stmt.orelse, violations);
            }
            Stmt::With(with_stmt) => self.visit_body(&with_stmt.body, violations),
            Stmt::AsyncWith(with_stmt) => self.visit_body(&with_stmt.body, violations),
            Stmt::Try(try_stmt) => {
                self.visit_body(&try_stmt.body, violations);
                for handler in &try_stmt.handlers {
                    match handler {
                        ExceptHandler::ExceptHandler(handler) => {
                            self.visit_body(&handler.body, violations);
                        }
                    }
                }
                self.visit_body(&try_stmt.orelse, violations);
                self.visit_body(&try_stmt.finalbody, violations);
            }
            Stmt::Match(match_stmt) => {
                for case in &match_stmt.cases {
                    self.visit_body(&case.body, violations);
                }
            }
            _ => {}
        }
    }

    fn visit_body(&self, body: &[Stmt], violations: &mut Vec<Violation>) {
        for stmt in body {
            self.visit_stmt(stmt, violations);
        }
    }
}

impl LintRule for PrivateMethodsRule {
    fn rule_id(&self) -> &str {
        "NPM100"
    }

    fn description(&self) -> &str {
        "Methods defined directly in a class body must not start with an underscore"
    }

    fn check(&self, context: &RuleContext) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.visit_stmt(context.stmt, &mut violations);
        for violation in &mut violations {
            violation.file_path = context.file_path.to_string();
        }
        violations
    }
}
