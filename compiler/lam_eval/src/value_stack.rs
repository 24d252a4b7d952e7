//! The argument stack shared by one evaluation.

use crate::Value;

/// LIFO stack of values waiting to be consumed by a lambda or builtin.
///
/// `Call` pushes its evaluated argument before evaluating its function, so
/// for a curried application `((f a) b)` the stack holds `a` on top of `b`
/// when `f` runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueStack {
    values: Vec<Value>,
}

impl ValueStack {
    pub fn new() -> Self {
        ValueStack { values: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Value> {
        self.values.pop()
    }

    pub fn peek(&self) -> Option<&Value> {
        self.values.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remaining values, bottom first.
    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}

/// Builds a stack from values listed bottom first.
impl From<Vec<Value>> for ValueStack {
    fn from(values: Vec<Value>) -> Self {
        ValueStack { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = ValueStack::new();
        stack.push(Value::number(1.0));
        stack.push(Value::number(2.0));
        assert_eq!(stack.peek(), Some(&Value::number(2.0)));
        assert_eq!(stack.pop(), Some(Value::number(2.0)));
        assert_eq!(stack.pop(), Some(Value::number(1.0)));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn from_vec_keeps_last_on_top() {
        let mut stack = ValueStack::from(vec![Value::Bool(true), Value::string("top")]);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some(Value::string("top")));
        assert_eq!(stack.into_vec(), vec![Value::Bool(true)]);
    }
}
