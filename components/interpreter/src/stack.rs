//! Operand stack
//!
//! Level 0 is the top of the stack. Entries are stored bottom first, so level
//! `n` lives at `values[len - 1 - n]`.

use core_types::{ClacError, ClacResult, Value};

/// LIFO store of owned values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandStack {
    values: Vec<Value>,
}

impl OperandStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Push a value onto the top
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Option<Value> {
        self.values.pop()
    }

    /// Value at 0-based depth `level`
    pub fn get(&self, level: usize) -> Option<&Value> {
        let index = self.values.len().checked_sub(level)?.checked_sub(1)?;
        self.values.get(index)
    }

    /// Replace the top value, or push onto an empty stack
    pub fn put(&mut self, value: Value) {
        match self.values.last_mut() {
            Some(top) => *top = value,
            None => self.values.push(value),
        }
    }

    /// Remove every value
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Discard the top value
    pub fn drop(&mut self) -> ClacResult<()> {
        self.values.pop().map(|_| ()).ok_or_else(ClacError::underflow)
    }

    /// Number of values on the stack
    pub fn height(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from the top down
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().rev()
    }

    fn top_slice(&mut self, n: usize) -> ClacResult<&mut [Value]> {
        let height = self.values.len();
        if n > height {
            return Err(ClacError::insufficient_height(n, height));
        }
        Ok(&mut self.values[height - n..])
    }

    /// Move level `n - 1` to the top, shifting the levels above it down one
    ///
    /// ```
    /// use core_types::Value;
    /// use interpreter::OperandStack;
    ///
    /// let mut stack = OperandStack::new();
    /// for n in 1..=3 {
    ///     stack.push(Value::integer(n));
    /// }
    /// stack.roll_up(3).unwrap();
    /// assert_eq!(stack.get(0), Some(&Value::integer(1)));
    /// assert_eq!(stack.get(1), Some(&Value::integer(3)));
    /// assert_eq!(stack.get(2), Some(&Value::integer(2)));
    /// ```
    pub fn roll_up(&mut self, n: usize) -> ClacResult<()> {
        self.top_slice(n.max(1))?.rotate_left(1);
        Ok(())
    }

    /// Move the top to level `n - 1`, the inverse of [`OperandStack::roll_up`]
    pub fn roll_down(&mut self, n: usize) -> ClacResult<()> {
        self.top_slice(n.max(1))?.rotate_right(1);
        Ok(())
    }

    /// `roll_up(3)`
    pub fn rotate(&mut self) -> ClacResult<()> {
        self.roll_up(3)
    }

    /// Exchange levels 0 and 1
    pub fn swap(&mut self) -> ClacResult<()> {
        self.top_slice(2)?.swap(0, 1);
        Ok(())
    }
}
