// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rhai-backed execution environment.
//!
//! Evaluation compiles the fragment as a Rhai *expression*, so statements
//! such as `let x = 1` fail to evaluate and are run instead. Top-level `let`
//! bindings stay in the persistent scope and `fn` definitions are kept for
//! later fragments. Script functions cannot see scope variables; that is a
//! Rhai rule, not one imposed here.

use std::cell::RefCell;
use std::rc::Rc;

use ::rhai::{AST, Dynamic, Engine, Scope};

use super::{Environment, HostError};
use crate::sink::Sink;

/// A Rhai engine with one scope shared by every fragment it runs.
pub struct RhaiEnvironment {
    engine: Engine,
    scope: Scope<'static>,
    /// Script functions defined by earlier fragments.
    functions: AST,
    /// Text written by `print` since the last flush.
    printed: Rc<RefCell<String>>,
}

impl RhaiEnvironment {
    pub fn new() -> Self {
        let printed = Rc::new(RefCell::new(String::new()));
        let mut engine = Engine::new();

        let buffer = Rc::clone(&printed);
        engine.on_print(move |text| {
            let mut buffer = buffer.borrow_mut();
            buffer.push_str(text);
            buffer.push('\n');
        });
        engine.on_debug(|text, source, pos| {
            tracing::debug!(target: "prep::script", source = source.unwrap_or(""), "{pos}: {text}");
        });

        Self {
            engine,
            scope: Scope::new(),
            functions: AST::empty(),
            printed,
        }
    }

    /// Variables visible to fragments.
    pub fn scope(&self) -> &Scope<'static> {
        &self.scope
    }

    /// Seed or inspect variables before processing.
    pub fn scope_mut(&mut self) -> &mut Scope<'static> {
        &mut self.scope
    }

    fn flush(&self, out: &mut dyn Sink) -> Result<(), HostError> {
        let text = std::mem::take(&mut *self.printed.borrow_mut());
        if !text.is_empty() {
            out.write_str(&text)?;
        }
        Ok(())
    }
}

impl Default for RhaiEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for RhaiEnvironment {
    fn evaluate(&mut self, code: &str, out: &mut dyn Sink) -> Result<String, HostError> {
        let ast = self
            .engine
            .compile_expression_with_scope(&self.scope, code)
            .map_err(script_error)?;
        let ast = self.functions.merge(&ast);
        let value = self.engine.eval_ast_with_scope::<Dynamic>(&mut self.scope, &ast);
        // print output lands even when evaluation fails part way
        self.flush(out)?;
        value.map(|v| v.to_string()).map_err(script_error)
    }

    fn run(&mut self, code: &str, out: &mut dyn Sink) -> Result<(), HostError> {
        let ast = self
            .engine
            .compile_with_scope(&self.scope, code)
            .map_err(script_error)?;
        let result = self
            .engine
            .run_ast_with_scope(&mut self.scope, &self.functions.merge(&ast));
        self.flush(out)?;
        result.map_err(script_error)?;
        self.functions = self.functions.merge(&ast.clone_functions_only());
        Ok(())
    }
}

fn script_error(err: impl std::fmt::Display) -> HostError {
    HostError::Script(err.to_string())
}

#[cfg(test)]
#[path = "rhai_tests.rs"]
mod tests;
