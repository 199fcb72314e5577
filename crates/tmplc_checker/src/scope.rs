//! Block param scopes for the validation passes.

use rustc_hash::FxHashMap;
use tracing::trace;

/// Tracks the block params visible at the current point of a traversal.
///
/// Each scope-introducing node pushes one frame with the names it binds and
/// pops it once its subtree has been visited. A name stays bound as long as
/// any frame on the stack binds it, so an inner frame re-binding an outer
/// name does not unbind the outer one when it is popped.
#[derive(Debug, Default)]
pub struct ScopeTracker<'a> {
    /// The frames, innermost last.
    frames: Vec<&'a [&'a str]>,
    /// How many frames currently bind each name.
    bound: FxHashMap<&'a str, u32>,
}

impl<'a> ScopeTracker<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a frame binding `names`.
    pub fn enter_scope(&mut self, names: &'a [&'a str]) {
        for &name in names {
            *self.bound.entry(name).or_insert(0) += 1;
        }
        self.frames.push(names);
        trace!(depth = self.frames.len(), ?names, "entered block param scope");
    }

    /// Pop the innermost frame.
    ///
    /// # Panics
    ///
    /// Panics if there is no frame to pop, i.e. the calls to `enter_scope`
    /// and `exit_scope` are unbalanced.
    pub fn exit_scope(&mut self) {
        let names = match self.frames.pop() {
            Some(names) => names,
            None => panic!("exit_scope called without a matching enter_scope"),
        };
        for name in names {
            if let Some(count) = self.bound.get_mut(name) {
                *count -= 1;
                if *count == 0 {
                    self.bound.remove(name);
                }
            }
        }
        trace!(depth = self.frames.len(), ?names, "exited block param scope");
    }

    /// Whether `name` is bound by any frame on the stack.
    pub fn is_bound(&self, name: &str) -> bool {
        self.bound.contains_key(name)
    }

    /// The number of frames on the stack.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
