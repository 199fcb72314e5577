//! Rejects implicit helper and modifier invocations shadowed by block params.
//!
//! A bare name in callee position, as in `{{format value}}`, `(format value)`
//! or `<div {{format}}>`, invokes a global helper or modifier. Inside
//! `<List as |format|>` or `{{#each items as |format|}}` the same name is a
//! block param instead, so the invocation silently changes meaning. This pass
//! reports the first such invocation in document order.
//!
//! A mustache without arguments (`{{format}}`) reads a value rather than
//! calling a helper and is not checked. Subexpressions and modifiers are
//! always calls.

use crate::env::PassEnvironment;
use crate::error::{InvocationRole, ShadowedInvocationConflict};
use crate::scope::ScopeTracker;
use tmplc_ast::node::*;
use tmplc_ast::visitor::{self, Visitor};
use tmplc_core::text::SourceLocation;
use tracing::debug;

/// Name under which the pass is registered in the compiler pipeline.
pub const PASS_NAME: &str = "assert-local-variable-shadowing-helper-invocation";

/// Check `template` for invocations shadowed by a block param.
///
/// Does nothing in strict mode. Otherwise returns the first conflict found
/// in document order. The template is never modified.
pub fn check_shadowed_invocations<'a>(
    template: &'a Template<'a>,
    env: &PassEnvironment<'_>,
) -> Result<(), ShadowedInvocationConflict> {
    if env.strict_mode {
        debug!(pass = PASS_NAME, module = ?env.module_name, "strict mode, skipping");
        return Ok(());
    }
    debug!(pass = PASS_NAME, module = ?env.module_name, "checking template");

    let mut checker = ShadowingChecker {
        env: *env,
        scopes: ScopeTracker::new(),
    };
    let result = checker.visit_template(template);
    debug_assert_eq!(checker.scopes.depth(), 0);
    result
}

struct ShadowingChecker<'a, 'e> {
    env: PassEnvironment<'e>,
    scopes: ScopeTracker<'a>,
}

impl<'a, 'e> ShadowingChecker<'a, 'e> {
    /// Run `walk` with `names` bound. The frame is popped on every return
    /// path, including when `walk` reports a conflict.
    fn in_scope(
        &mut self,
        names: &'a [&'a str],
        walk: impl FnOnce(&mut Self) -> Result<(), ShadowedInvocationConflict>,
    ) -> Result<(), ShadowedInvocationConflict> {
        self.scopes.enter_scope(names);
        let result = walk(self);
        self.scopes.exit_scope();
        result
    }

    fn check_invocation(
        &self,
        callee: &'a Expression<'a>,
        loc: SourceLocation,
        role: InvocationRole,
    ) -> Result<(), ShadowedInvocationConflict> {
        // Literal callees and `this.` paths are never ambiguous.
        let name = match callee.as_path().and_then(|path| path.head_name()) {
            Some(name) => name,
            None => return Ok(()),
        };
        if !self.scopes.is_bound(name) {
            return Ok(());
        }
        debug!(callee = name, %role, ?loc, "invocation shadowed by block param");
        Err(ShadowedInvocationConflict::new(name, role, loc, &self.env))
    }
}

impl<'a, 'e> Visitor<'a> for ShadowingChecker<'a, 'e> {
    type Error = ShadowedInvocationConflict;

    fn visit_template(&mut self, node: &'a Template<'a>) -> Result<(), Self::Error> {
        self.in_scope(node.block_params, |this| visitor::walk_template(this, node))
    }

    fn visit_block(&mut self, node: &'a Block<'a>) -> Result<(), Self::Error> {
        self.in_scope(node.block_params, |this| visitor::walk_block(this, node))
    }

    fn visit_element_children(&mut self, node: &'a ElementNode<'a>) -> Result<(), Self::Error> {
        self.in_scope(node.block_params, |this| visitor::walk_statements(this, node.children))
    }

    fn visit_mustache(&mut self, node: &'a MustacheStatement<'a>) -> Result<(), Self::Error> {
        if node.has_arguments() {
            self.check_invocation(node.path, node.loc, InvocationRole::Helper)?;
        }
        visitor::walk_mustache(self, node)
    }

    fn visit_sub_expression(&mut self, node: &'a SubExpression<'a>) -> Result<(), Self::Error> {
        self.check_invocation(node.path, node.loc, InvocationRole::Helper)?;
        visitor::walk_sub_expression(self, node)
    }

    fn visit_element_modifier(&mut self, node: &'a ElementModifierStatement<'a>) -> Result<(), Self::Error> {
        self.check_invocation(node.path, node.loc, InvocationRole::Modifier)?;
        visitor::walk_element_modifier(self, node)
    }
}
