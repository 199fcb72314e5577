//! AST node definitions for templates.
//!
//! Nodes reference their children via arena-allocated slices and references,
//! so a whole tree borrows from a single [`tmplc_core::TemplateArena`].

use tmplc_core::text::SourceLocation;

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Programs
// ============================================================================

/// The root of a parsed template.
#[derive(Debug)]
pub struct Template<'a> {
    pub body: NodeList<'a, Statement<'a>>,
    /// Names bound over `body`. Usually empty for a template root.
    pub block_params: NodeList<'a, &'a str>,
    pub loc: SourceLocation,
}

/// The body of a block statement, e.g. the part between
/// `{{#each items as |item|}}` and `{{/each}}`.
#[derive(Debug)]
pub struct Block<'a> {
    pub body: NodeList<'a, Statement<'a>>,
    /// Names bound over `body` (`as |item index|`).
    pub block_params: NodeList<'a, &'a str>,
    pub loc: SourceLocation,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    Mustache(MustacheStatement<'a>),
    Block(BlockStatement<'a>),
    Element(ElementNode<'a>),
    Text(TextNode<'a>),
    MustacheComment(MustacheCommentStatement<'a>),
    Comment(CommentStatement<'a>),
}

impl<'a> Statement<'a> {
    pub fn loc(&self) -> SourceLocation {
        match self {
            Statement::Mustache(n) => n.loc,
            Statement::Block(n) => n.loc,
            Statement::Element(n) => n.loc,
            Statement::Text(n) => n.loc,
            Statement::MustacheComment(n) => n.loc,
            Statement::Comment(n) => n.loc,
        }
    }
}

/// `{{path param key=value}}`, or `{{{...}}}` when `trusting`.
#[derive(Debug)]
pub struct MustacheStatement<'a> {
    pub path: &'a Expression<'a>,
    pub params: NodeList<'a, Expression<'a>>,
    pub hash: Hash<'a>,
    pub trusting: bool,
    pub loc: SourceLocation,
}

impl<'a> MustacheStatement<'a> {
    /// Whether any positional or named argument is present.
    ///
    /// `{{foo}}` without arguments reads a value rather than calling a helper.
    pub fn has_arguments(&self) -> bool {
        !self.params.is_empty() || !self.hash.pairs.is_empty()
    }
}

/// `{{#path params}}program{{else}}inverse{{/path}}`
#[derive(Debug)]
pub struct BlockStatement<'a> {
    pub path: &'a Expression<'a>,
    pub params: NodeList<'a, Expression<'a>>,
    pub hash: Hash<'a>,
    pub program: Block<'a>,
    pub inverse: Option<Block<'a>>,
    pub loc: SourceLocation,
}

#[derive(Debug)]
pub struct ElementNode<'a> {
    pub tag: &'a str,
    pub attributes: NodeList<'a, AttrNode<'a>>,
    /// Names bound over `children` (`<Foo as |bar|>`).
    pub block_params: NodeList<'a, &'a str>,
    pub modifiers: NodeList<'a, ElementModifierStatement<'a>>,
    pub comments: NodeList<'a, MustacheCommentStatement<'a>>,
    pub children: NodeList<'a, Statement<'a>>,
    pub self_closing: bool,
    pub loc: SourceLocation,
}

#[derive(Debug)]
pub struct AttrNode<'a> {
    pub name: &'a str,
    pub value: AttrValue<'a>,
    pub loc: SourceLocation,
}

#[derive(Debug)]
pub enum AttrValue<'a> {
    Text(TextNode<'a>),
    Mustache(MustacheStatement<'a>),
    Concat(ConcatStatement<'a>),
}

/// An attribute value mixing text and mustaches: `class="a {{b}}"`.
#[derive(Debug)]
pub struct ConcatStatement<'a> {
    pub parts: NodeList<'a, ConcatPart<'a>>,
    pub loc: SourceLocation,
}

#[derive(Debug)]
pub enum ConcatPart<'a> {
    Text(TextNode<'a>),
    Mustache(MustacheStatement<'a>),
}

/// `<div {{path params}}>`
#[derive(Debug)]
pub struct ElementModifierStatement<'a> {
    pub path: &'a Expression<'a>,
    pub params: NodeList<'a, Expression<'a>>,
    pub hash: Hash<'a>,
    pub loc: SourceLocation,
}

#[derive(Debug)]
pub struct TextNode<'a> {
    pub chars: &'a str,
    pub loc: SourceLocation,
}

/// `{{!-- value --}}`
#[derive(Debug)]
pub struct MustacheCommentStatement<'a> {
    pub value: &'a str,
    pub loc: SourceLocation,
}

/// `<!-- value -->`
#[derive(Debug)]
pub struct CommentStatement<'a> {
    pub value: &'a str,
    pub loc: SourceLocation,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    Path(PathExpression<'a>),
    SubExpression(SubExpression<'a>),
    Literal(LiteralExpression<'a>),
}

impl<'a> Expression<'a> {
    pub fn loc(&self) -> SourceLocation {
        match self {
            Expression::Path(n) => n.loc,
            Expression::SubExpression(n) => n.loc,
            Expression::Literal(n) => n.loc,
        }
    }

    pub fn as_path(&self) -> Option<&PathExpression<'a>> {
        match self {
            Expression::Path(p) => Some(p),
            _ => None,
        }
    }
}

/// `(path params key=value)`
#[derive(Debug)]
pub struct SubExpression<'a> {
    pub path: &'a Expression<'a>,
    pub params: NodeList<'a, Expression<'a>>,
    pub hash: Hash<'a>,
    pub loc: SourceLocation,
}

/// The first segment of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathHead<'a> {
    /// `this`
    This,
    /// `@name`, a named argument of the enclosing component.
    Argument(&'a str),
    /// A bare name: a block param, a contextual value or a helper.
    Var(&'a str),
}

#[derive(Debug)]
pub struct PathExpression<'a> {
    pub head: PathHead<'a>,
    /// The segments after the head (`b` and `c` in `a.b.c`).
    pub tail: NodeList<'a, &'a str>,
    pub loc: SourceLocation,
}

impl<'a> PathExpression<'a> {
    /// The name of the first segment, or `None` for a `this`-relative path.
    ///
    /// For `@model.name` this is `model`.
    pub fn head_name(&self) -> Option<&'a str> {
        match self.head {
            PathHead::Var(name) | PathHead::Argument(name) => Some(name),
            PathHead::This => None,
        }
    }

    /// The path as written in source, e.g. `this.foo.bar` or `@model.name`.
    pub fn original(&self) -> String {
        let mut original = match self.head {
            PathHead::This => "this".to_string(),
            PathHead::Argument(name) => format!("@{}", name),
            PathHead::Var(name) => name.to_string(),
        };
        for part in self.tail.iter() {
            original.push('.');
            original.push_str(part);
        }
        original
    }
}

#[derive(Debug)]
pub struct LiteralExpression<'a> {
    pub value: LiteralValue<'a>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    String(&'a str),
    Number(f64),
    Boolean(bool),
    Null,
    Undefined,
}

/// Named arguments, in source order.
#[derive(Debug)]
pub struct Hash<'a> {
    pub pairs: NodeList<'a, HashPair<'a>>,
    pub loc: SourceLocation,
}

#[derive(Debug)]
pub struct HashPair<'a> {
    pub key: &'a str,
    pub value: Expression<'a>,
    pub loc: SourceLocation,
}
