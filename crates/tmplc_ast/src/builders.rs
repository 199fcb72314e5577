//! Construction of template ASTs without a parser.
//!
//! ```
//! use tmplc_ast::TemplateBuilder;
//! use tmplc_core::TemplateArena;
//!
//! let arena = TemplateArena::new();
//! let b = TemplateBuilder::new(&arena);
//! // <Foo as |item|>{{format item}}</Foo>
//! let template = b.template(vec![b
//!     .element("Foo")
//!     .block_params(&["item"])
//!     .child(b.mustache(b.path("format"), vec![b.path("item")], b.hash(vec![])))
//!     .build()]);
//! assert_eq!(template.body.len(), 1);
//! ```

use crate::node::*;
use tmplc_core::arena::TemplateArena;
use tmplc_core::text::SourceLocation;

/// Allocates nodes in a [`TemplateArena`].
///
/// Every node built gets the builder's current location; use
/// [`TemplateBuilder::at`] to place a node somewhere specific.
#[derive(Clone, Copy)]
pub struct TemplateBuilder<'a> {
    arena: &'a TemplateArena,
    loc: SourceLocation,
}

impl<'a> TemplateBuilder<'a> {
    pub fn new(arena: &'a TemplateArena) -> Self {
        Self {
            arena,
            loc: SourceLocation::synthetic(),
        }
    }

    /// A builder that stamps `loc` on the nodes it creates.
    pub fn at(self, loc: SourceLocation) -> Self {
        Self { loc, ..self }
    }

    /// Shorthand for [`TemplateBuilder::at`] with raw line/column pairs.
    pub fn at_coords(self, start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        self.at(SourceLocation::from_coords(start_line, start_column, end_line, end_column))
    }

    fn names(&self, names: &[&str]) -> NodeList<'a, &'a str> {
        let names: Vec<&'a str> = names.iter().map(|n| self.arena.alloc_str(n)).collect();
        self.arena.alloc_slice(names)
    }

    // ========================================================================
    // Programs
    // ========================================================================

    pub fn template(&self, body: Vec<Statement<'a>>) -> Template<'a> {
        Template {
            body: self.arena.alloc_slice(body),
            block_params: &[],
            loc: self.loc,
        }
    }

    pub fn block(&self, block_params: &[&str], body: Vec<Statement<'a>>) -> Block<'a> {
        Block {
            body: self.arena.alloc_slice(body),
            block_params: self.names(block_params),
            loc: self.loc,
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn mustache_node(&self, path: Expression<'a>, params: Vec<Expression<'a>>, hash: Hash<'a>) -> MustacheStatement<'a> {
        MustacheStatement {
            path: self.arena.alloc(path),
            params: self.arena.alloc_slice(params),
            hash,
            trusting: false,
            loc: self.loc,
        }
    }

    /// `{{path params hash}}`
    pub fn mustache(&self, path: Expression<'a>, params: Vec<Expression<'a>>, hash: Hash<'a>) -> Statement<'a> {
        Statement::Mustache(self.mustache_node(path, params, hash))
    }

    /// `{{{path params hash}}}`
    pub fn triple_curly(&self, path: Expression<'a>, params: Vec<Expression<'a>>, hash: Hash<'a>) -> Statement<'a> {
        Statement::Mustache(MustacheStatement {
            trusting: true,
            ..self.mustache_node(path, params, hash)
        })
    }

    pub fn block_statement(
        &self,
        path: Expression<'a>,
        params: Vec<Expression<'a>>,
        hash: Hash<'a>,
        program: Block<'a>,
        inverse: Option<Block<'a>>,
    ) -> Statement<'a> {
        Statement::Block(BlockStatement {
            path: self.arena.alloc(path),
            params: self.arena.alloc_slice(params),
            hash,
            program,
            inverse,
            loc: self.loc,
        })
    }

    /// Start building `<tag>`.
    pub fn element(&self, tag: &str) -> ElementBuilder<'a> {
        ElementBuilder {
            builder: *self,
            tag: self.arena.alloc_str(tag),
            attributes: Vec::new(),
            block_params: Vec::new(),
            modifiers: Vec::new(),
            comments: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    pub fn text_node(&self, chars: &str) -> TextNode<'a> {
        TextNode {
            chars: self.arena.alloc_str(chars),
            loc: self.loc,
        }
    }

    pub fn text(&self, chars: &str) -> Statement<'a> {
        Statement::Text(self.text_node(chars))
    }

    pub fn mustache_comment_node(&self, value: &str) -> MustacheCommentStatement<'a> {
        MustacheCommentStatement {
            value: self.arena.alloc_str(value),
            loc: self.loc,
        }
    }

    pub fn mustache_comment(&self, value: &str) -> Statement<'a> {
        Statement::MustacheComment(self.mustache_comment_node(value))
    }

    pub fn comment(&self, value: &str) -> Statement<'a> {
        Statement::Comment(CommentStatement {
            value: self.arena.alloc_str(value),
            loc: self.loc,
        })
    }

    // ========================================================================
    // Element parts
    // ========================================================================

    pub fn attr(&self, name: &str, value: AttrValue<'a>) -> AttrNode<'a> {
        AttrNode {
            name: self.arena.alloc_str(name),
            value,
            loc: self.loc,
        }
    }

    pub fn concat(&self, parts: Vec<ConcatPart<'a>>) -> AttrValue<'a> {
        AttrValue::Concat(ConcatStatement {
            parts: self.arena.alloc_slice(parts),
            loc: self.loc,
        })
    }

    /// `<div {{path params hash}}>`
    pub fn modifier(&self, path: Expression<'a>, params: Vec<Expression<'a>>, hash: Hash<'a>) -> ElementModifierStatement<'a> {
        ElementModifierStatement {
            path: self.arena.alloc(path),
            params: self.arena.alloc_slice(params),
            hash,
            loc: self.loc,
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Parse a path as written in source: `this.x`, `@x.y` or `x.y`.
    pub fn path_node(&self, original: &str) -> PathExpression<'a> {
        let mut segments = original.split('.');
        let first = segments.next().unwrap_or_default();
        let head = if first == "this" {
            PathHead::This
        } else if let Some(name) = first.strip_prefix('@') {
            PathHead::Argument(self.arena.alloc_str(name))
        } else {
            PathHead::Var(self.arena.alloc_str(first))
        };
        let tail: Vec<&str> = segments.collect();
        PathExpression {
            head,
            tail: self.names(&tail),
            loc: self.loc,
        }
    }

    pub fn path(&self, original: &str) -> Expression<'a> {
        Expression::Path(self.path_node(original))
    }

    /// `(path params hash)`
    pub fn sub_expr(&self, path: Expression<'a>, params: Vec<Expression<'a>>, hash: Hash<'a>) -> Expression<'a> {
        Expression::SubExpression(SubExpression {
            path: self.arena.alloc(path),
            params: self.arena.alloc_slice(params),
            hash,
            loc: self.loc,
        })
    }

    pub fn literal(&self, value: LiteralValue<'a>) -> Expression<'a> {
        Expression::Literal(LiteralExpression { value, loc: self.loc })
    }

    pub fn string(&self, value: &str) -> Expression<'a> {
        self.literal(LiteralValue::String(self.arena.alloc_str(value)))
    }

    pub fn number(&self, value: f64) -> Expression<'a> {
        self.literal(LiteralValue::Number(value))
    }

    pub fn hash(&self, pairs: Vec<(&str, Expression<'a>)>) -> Hash<'a> {
        let pairs: Vec<HashPair<'a>> = pairs
            .into_iter()
            .map(|(key, value)| HashPair {
                key: self.arena.alloc_str(key),
                loc: value.loc(),
                value,
            })
            .collect();
        Hash {
            pairs: self.arena.alloc_slice(pairs),
            loc: self.loc,
        }
    }
}

/// Collects the parts of an element before allocating it.
pub struct ElementBuilder<'a> {
    builder: TemplateBuilder<'a>,
    tag: &'a str,
    attributes: Vec<AttrNode<'a>>,
    block_params: Vec<&'a str>,
    modifiers: Vec<ElementModifierStatement<'a>>,
    comments: Vec<MustacheCommentStatement<'a>>,
    children: Vec<Statement<'a>>,
    self_closing: bool,
}

impl<'a> ElementBuilder<'a> {
    pub fn attr(mut self, attr: AttrNode<'a>) -> Self {
        self.attributes.push(attr);
        self
    }

    pub fn block_params(mut self, names: &[&str]) -> Self {
        let arena = self.builder.arena;
        self.block_params.extend(names.iter().map(|n| arena.alloc_str(n)));
        self
    }

    pub fn modifier(mut self, modifier: ElementModifierStatement<'a>) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn comment(mut self, comment: MustacheCommentStatement<'a>) -> Self {
        self.comments.push(comment);
        self
    }

    pub fn child(mut self, child: Statement<'a>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: Vec<Statement<'a>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    pub fn build(self) -> Statement<'a> {
        let arena = self.builder.arena;
        Statement::Element(ElementNode {
            tag: self.tag,
            attributes: arena.alloc_slice(self.attributes),
            block_params: arena.alloc_slice(self.block_params),
            modifiers: arena.alloc_slice(self.modifiers),
            comments: arena.alloc_slice(self.comments),
            children: arena.alloc_slice(self.children),
            self_closing: self.self_closing,
            loc: self.builder.loc,
        })
    }
}
