//! AST visitor trait for traversing templates.
//!
//! Every `visit_*` method defaults to the matching `walk_*` function, which
//! visits the node's children in document order. Walking stops at the first
//! error returned by any visit method.
//!
//! Element block params only cover an element's children, so the children are
//! visited through their own hook, [`Visitor::visit_element_children`].

use crate::node::*;

pub trait Visitor<'a> {
    type Error;

    fn visit_template(&mut self, node: &'a Template<'a>) -> Result<(), Self::Error> {
        walk_template(self, node)
    }

    fn visit_block(&mut self, node: &'a Block<'a>) -> Result<(), Self::Error> {
        walk_block(self, node)
    }

    fn visit_statement(&mut self, stmt: &'a Statement<'a>) -> Result<(), Self::Error> {
        walk_statement(self, stmt)
    }

    // -- Statements --

    fn visit_mustache(&mut self, node: &'a MustacheStatement<'a>) -> Result<(), Self::Error> {
        walk_mustache(self, node)
    }

    fn visit_block_statement(&mut self, node: &'a BlockStatement<'a>) -> Result<(), Self::Error> {
        walk_block_statement(self, node)
    }

    fn visit_element(&mut self, node: &'a ElementNode<'a>) -> Result<(), Self::Error> {
        walk_element(self, node)
    }

    fn visit_element_children(&mut self, node: &'a ElementNode<'a>) -> Result<(), Self::Error> {
        walk_statements(self, node.children)
    }

    fn visit_attribute(&mut self, node: &'a AttrNode<'a>) -> Result<(), Self::Error> {
        walk_attribute(self, node)
    }

    fn visit_element_modifier(&mut self, node: &'a ElementModifierStatement<'a>) -> Result<(), Self::Error> {
        walk_element_modifier(self, node)
    }

    fn visit_text(&mut self, _node: &'a TextNode<'a>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_mustache_comment(&mut self, _node: &'a MustacheCommentStatement<'a>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_comment(&mut self, _node: &'a CommentStatement<'a>) -> Result<(), Self::Error> {
        Ok(())
    }

    // -- Expressions --

    fn visit_expression(&mut self, expr: &'a Expression<'a>) -> Result<(), Self::Error> {
        walk_expression(self, expr)
    }

    fn visit_sub_expression(&mut self, node: &'a SubExpression<'a>) -> Result<(), Self::Error> {
        walk_sub_expression(self, node)
    }

    fn visit_path(&mut self, _node: &'a PathExpression<'a>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_literal(&mut self, _node: &'a LiteralExpression<'a>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_hash(&mut self, node: &'a Hash<'a>) -> Result<(), Self::Error> {
        walk_hash(self, node)
    }
}

// ============================================================================
// Walk functions
// ============================================================================

pub fn walk_template<'a, V: Visitor<'a> + ?Sized>(v: &mut V, node: &'a Template<'a>) -> Result<(), V::Error> {
    walk_statements(v, node.body)
}

pub fn walk_block<'a, V: Visitor<'a> + ?Sized>(v: &mut V, node: &'a Block<'a>) -> Result<(), V::Error> {
    walk_statements(v, node.body)
}

pub fn walk_statements<'a, V: Visitor<'a> + ?Sized>(v: &mut V, stmts: &'a [Statement<'a>]) -> Result<(), V::Error> {
    for stmt in stmts {
        v.visit_statement(stmt)?;
    }
    Ok(())
}

pub fn walk_statement<'a, V: Visitor<'a> + ?Sized>(v: &mut V, stmt: &'a Statement<'a>) -> Result<(), V::Error> {
    match stmt {
        Statement::Mustache(n) => v.visit_mustache(n),
        Statement::Block(n) => v.visit_block_statement(n),
        Statement::Element(n) => v.visit_element(n),
        Statement::Text(n) => v.visit_text(n),
        Statement::MustacheComment(n) => v.visit_mustache_comment(n),
        Statement::Comment(n) => v.visit_comment(n),
    }
}

/// Visit the callee, positional arguments and named arguments of a call.
pub fn walk_call<'a, V: Visitor<'a> + ?Sized>(
    v: &mut V,
    path: &'a Expression<'a>,
    params: &'a [Expression<'a>],
    hash: &'a Hash<'a>,
) -> Result<(), V::Error> {
    v.visit_expression(path)?;
    for param in params {
        v.visit_expression(param)?;
    }
    v.visit_hash(hash)
}

pub fn walk_mustache<'a, V: Visitor<'a> + ?Sized>(v: &mut V, node: &'a MustacheStatement<'a>) -> Result<(), V::Error> {
    walk_call(v, node.path, node.params, &node.hash)
}

pub fn walk_block_statement<'a, V: Visitor<'a> + ?Sized>(v: &mut V, node: &'a BlockStatement<'a>) -> Result<(), V::Error> {
    walk_call(v, node.path, node.params, &node.hash)?;
    v.visit_block(&node.program)?;
    if let Some(ref inverse) = node.inverse {
        v.visit_block(inverse)?;
    }
    Ok(())
}

pub fn walk_element<'a, V: Visitor<'a> + ?Sized>(v: &mut V, node: &'a ElementNode<'a>) -> Result<(), V::Error> {
    for attr in node.attributes {
        v.visit_attribute(attr)?;
    }
    for modifier in node.modifiers {
        v.visit_element_modifier(modifier)?;
    }
    v.visit_element_children(node)?;
    for comment in node.comments {
        v.visit_mustache_comment(comment)?;
    }
    Ok(())
}

pub fn walk_attribute<'a, V: Visitor<'a> + ?Sized>(v: &mut V, node: &'a AttrNode<'a>) -> Result<(), V::Error> {
    match &node.value {
        AttrValue::Text(text) => v.visit_text(text),
        AttrValue::Mustache(mustache) => v.visit_mustache(mustache),
        AttrValue::Concat(concat) => {
            for part in concat.parts {
                match part {
                    ConcatPart::Text(text) => v.visit_text(text)?,
                    ConcatPart::Mustache(mustache) => v.visit_mustache(mustache)?,
                }
            }
            Ok(())
        }
    }
}

pub fn walk_element_modifier<'a, V: Visitor<'a> + ?Sized>(
    v: &mut V,
    node: &'a ElementModifierStatement<'a>,
) -> Result<(), V::Error> {
    walk_call(v, node.path, node.params, &node.hash)
}

pub fn walk_expression<'a, V: Visitor<'a> + ?Sized>(v: &mut V, expr: &'a Expression<'a>) -> Result<(), V::Error> {
    match expr {
        Expression::Path(n) => v.visit_path(n),
        Expression::SubExpression(n) => v.visit_sub_expression(n),
        Expression::Literal(n) => v.visit_literal(n),
    }
}

pub fn walk_sub_expression<'a, V: Visitor<'a> + ?Sized>(v: &mut V, node: &'a SubExpression<'a>) -> Result<(), V::Error> {
    walk_call(v, node.path, node.params, &node.hash)
}

pub fn walk_hash<'a, V: Visitor<'a> + ?Sized>(v: &mut V, node: &'a Hash<'a>) -> Result<(), V::Error> {
    for pair in node.pairs {
        v.visit_expression(&pair.value)?;
    }
    Ok(())
}
