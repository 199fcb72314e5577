//! Arena allocation for template ASTs.
//!
//! All AST nodes of a template are allocated from a bump arena so the whole
//! tree is freed at once when compilation of that template is done.

use bumpalo::Bump;

/// The template arena wraps a bump allocator for all AST allocations.
///
/// Node slices (`&'a [Statement<'a>]`), path segments and names all live in
/// the arena and borrow from it for the arena's lifetime.
pub struct TemplateArena {
    bump: Bump,
}

impl TemplateArena {
    /// Create a new arena with default capacity.
    pub fn new() -> Self {
        Self {
            bump: Bump::new(),
        }
    }

    /// Allocate a value in the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocate a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Move the items of a vector into an arena slice, keeping their order.
    #[inline]
    pub fn alloc_slice<T>(&self, items: Vec<T>) -> &[T] {
        self.bump.alloc_slice_fill_iter(items)
    }
}

impl Default for TemplateArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_slice_keeps_order() {
        let arena = TemplateArena::new();
        let names = arena.alloc_slice(vec!["a", "b", "c"]);
        assert_eq!(names, &["a", "b", "c"]);
    }

    #[test]
    fn test_alloc_str() {
        let arena = TemplateArena::new();
        let s = arena.alloc_str("item");
        assert_eq!(s, "item");
    }
}
