//! Stack of the binder names currently in lexical scope. Used to resolve
//! variable names to de Bruijn indexes while parsing or converting, and to
//! hand names back out when translating a de Bruijn term to named form.

/// Ordered record of in-scope binder names; the most recently pushed entry is
/// the innermost binder. During a parse or a conversion the stack contents
/// are exactly the abstraction binders enclosing the current position,
/// outermost first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameStack {
    names: Vec<String>,
}

impl NameStack {
    /// Creates an empty name stack.
    pub fn new() -> Self {
        return NameStack { names: Vec::new() };
    }

    /// Pushes a binder name onto the top of the stack.
    pub fn push(&mut self, name: String) {
        self.names.push(name);
    }

    /// Removes and returns the top entry, or None if the stack is empty.
    pub fn pop(&mut self) -> Option<String> {
        return self.names.pop();
    }

    /// Returns the de Bruijn index of `name`: the 0-based distance from the
    /// top of the stack of the nearest matching entry (0 = innermost binder).
    /// Returns None if the name is bound nowhere in the stack.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        return self.names.iter().rev().position(|entry| entry == name);
    }

    /// Returns the name at the given distance from the top of the stack
    /// (0 = top), or None if the stack is shallower than that.
    pub fn name_at(&self, depth_from_top: usize) -> Option<&str> {
        if depth_from_top >= self.names.len() {
            return None;
        }

        return Some(self.names[self.names.len() - 1 - depth_from_top].as_str());
    }

    /// Reverses the stack in place, so the oldest entry becomes the top.
    pub fn reverse(&mut self) {
        self.names.reverse();
    }

    pub fn len(&self) -> usize {
        return self.names.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.names.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test the index arithmetic: names pushed [a, b, c] leave c on top with
    // index 0.
    #[test]
    fn test_index_of() {
        let mut name_stack = NameStack::new();
        name_stack.push(String::from("a"));
        name_stack.push(String::from("b"));
        name_stack.push(String::from("c"));

        assert_eq!(name_stack.index_of("c"), Some(0));
        assert_eq!(name_stack.index_of("b"), Some(1));
        assert_eq!(name_stack.index_of("a"), Some(2));
        assert_eq!(name_stack.index_of("x"), None);
    }

    // Test that a shadowing push wins the lookup.
    #[test]
    fn test_index_of_shadowed_name() {
        let mut name_stack = NameStack::new();
        name_stack.push(String::from("x"));
        name_stack.push(String::from("y"));
        name_stack.push(String::from("x"));

        // The nearest (innermost) `x` is the one that resolves.
        assert_eq!(name_stack.index_of("x"), Some(0));
    }

    // Test pop ordering and the empty case.
    #[test]
    fn test_pop() {
        let mut name_stack = NameStack::new();
        name_stack.push(String::from("outer"));
        name_stack.push(String::from("inner"));

        assert_eq!(name_stack.pop(), Some(String::from("inner")));
        assert_eq!(name_stack.pop(), Some(String::from("outer")));
        assert_eq!(name_stack.pop(), None);
    }

    // Test name_at distances and the out-of-range case.
    #[test]
    fn test_name_at() {
        let mut name_stack = NameStack::new();
        name_stack.push(String::from("a"));
        name_stack.push(String::from("b"));

        assert_eq!(name_stack.name_at(0), Some("b"));
        assert_eq!(name_stack.name_at(1), Some("a"));
        assert_eq!(name_stack.name_at(2), None);
    }

    // Test that reverse makes the oldest entry the top.
    #[test]
    fn test_reverse() {
        let mut name_stack = NameStack::new();
        name_stack.push(String::from("a"));
        name_stack.push(String::from("b"));
        name_stack.push(String::from("c"));

        name_stack.reverse();

        assert_eq!(name_stack.pop(), Some(String::from("a")));
        assert_eq!(name_stack.pop(), Some(String::from("b")));
        assert_eq!(name_stack.pop(), Some(String::from("c")));
    }
}
