/// A last-in, first-out container with access restricted to the top.
///
/// Popping or peeking an empty stack yields `None`, never a panic. A stack is
/// created fresh for every conversion or evaluation and owned by that call.
///
/// # Example
/// ```
/// use stackcalc::interpreter::stack::Stack;
///
/// let mut stack = Stack::new();
/// assert!(stack.is_empty());
///
/// stack.push(1.0);
/// stack.push(2.0);
/// assert_eq!(stack.peek(), Some(&2.0));
/// assert_eq!(stack.pop(), Some(2.0));
/// assert_eq!(stack.pop(), Some(1.0));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Places an item on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it, or `None` if the stack is
    /// empty.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
