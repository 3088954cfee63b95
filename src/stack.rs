// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};
use std::iter::FromIterator;

use crate::iter::{IntoIter, Iter};

/// A last-in-first-out stack.
///
/// Elements are stored bottom-to-top: index `0` is the bottom of the stack,
/// and the most recently pushed element is the top. [`pop()`][pop] and
/// [`peek()`][peek] operate on the top, and return `None` rather than failing
/// when the stack is empty.
///
/// # Example
///
/// ```rust
/// # use lifo::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(3);
/// stack.push(5);
/// assert_eq!(3, stack.len());
/// assert_eq!(Some(&5), stack.peek());
/// assert_eq!(Some(5), stack.pop());
/// assert_eq!(Some(3), stack.pop());
/// assert_eq!(Some(1), stack.pop());
/// assert_eq!(None, stack.pop());
/// assert!(stack.is_empty());
/// ```
///
/// [pop]: #method.pop
/// [peek]: #method.peek
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stack<A> {
    data: Vec<A>,
}

impl<A> Stack<A> {
    /// Construct an empty stack.
    ///
    /// This does not allocate until the first element is pushed.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Construct an empty stack with room for at least `capacity` elements
    /// before it needs to reallocate.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of elements the stack can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Get the number of elements on the stack.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Test whether the stack holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Push an element onto the top of the stack.
    #[inline(always)]
    pub fn push(&mut self, value: A) {
        self.data.push(value);
    }

    /// Push every element of `values` onto the stack, in iteration order.
    ///
    /// The first element yielded ends up deepest, the last one ends up on top,
    /// exactly as if each had been passed to [`push()`][push] in turn.
    ///
    /// ```rust
    /// # use lifo::Stack;
    /// let mut stack = Stack::new();
    /// stack.push_all(vec![1, 2, 3]);
    /// assert_eq!(Some(3), stack.pop());
    /// ```
    ///
    /// [push]: #method.push
    pub fn push_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = A>,
    {
        self.data.extend(values);
    }

    /// Remove the top element and return it, or `None` if the stack is empty.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<A> {
        self.data.pop()
    }

    /// Get a reference to the top element, or `None` if the stack is empty.
    #[inline(always)]
    pub fn peek(&self) -> Option<&A> {
        self.data.last()
    }

    /// Get a mutable reference to the top element, or `None` if the stack is
    /// empty.
    ///
    /// ```rust
    /// # use lifo::stack;
    /// let mut stack = stack![1, 2];
    /// if let Some(top) = stack.peek_mut() {
    ///     *top *= 10;
    /// }
    /// assert_eq!(Some(20), stack.pop());
    /// ```
    pub fn peek_mut(&mut self) -> Option<&mut A> {
        self.data.last_mut()
    }

    /// Remove every element from the stack.
    ///
    /// The allocated capacity is kept for reuse.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the element at `index`, counting from the bottom of the stack.
    ///
    /// Index `0` is the bottom, index `len() - 1` is the top. Returns `None`
    /// if `index` is out of range.
    ///
    /// ```rust
    /// # use lifo::stack;
    /// let stack = stack!['a', 'b', 'c'];
    /// assert_eq!(Some(&'a'), stack.get(0));
    /// assert_eq!(Some(&'c'), stack.get(2));
    /// assert_eq!(None, stack.get(3));
    /// ```
    pub fn get(&self, index: usize) -> Option<&A> {
        self.data.get(index)
    }

    /// Test whether an element equal to `value` is on the stack.
    pub fn contains(&self, value: &A) -> bool
    where
        A: PartialEq,
    {
        self.data.contains(value)
    }

    /// Remove every element equal to `value`, wherever it sits in the stack.
    ///
    /// The remaining elements keep their relative order. Returns the number of
    /// elements removed.
    ///
    /// ```rust
    /// # use lifo::stack;
    /// let mut stack = stack![1, 2, 1, 3, 1];
    /// assert_eq!(3, stack.remove(&1));
    /// assert_eq!(vec![2, 3], stack.to_vec());
    /// ```
    pub fn remove(&mut self, value: &A) -> usize
    where
        A: PartialEq,
    {
        let before = self.data.len();
        self.data.retain(|item| item != value);
        before - self.data.len()
    }

    /// Get an iterator over the stack's elements, from the top down.
    ///
    /// ```rust
    /// # use lifo::stack;
    /// let stack = stack![1, 2, 3];
    /// let order: Vec<_> = stack.iter().copied().collect();
    /// assert_eq!(vec![3, 2, 1], order);
    /// ```
    pub fn iter(&self) -> Iter<'_, A> {
        Iter::new(self.data.iter())
    }

    /// Get a read only view of the stack's elements, from the bottom up.
    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    /// Copy the stack's elements into a new `Vec`, from the bottom up.
    ///
    /// The returned vector is independent of the stack: changing one has no
    /// effect on the other. Feeding it back into `Stack::from()` produces a
    /// stack that pops in the same order as this one.
    ///
    /// ```rust
    /// # use lifo::{stack, Stack};
    /// let stack = stack![1, 2, 3];
    /// let mut snapshot = stack.to_vec();
    /// assert_eq!(vec![1, 2, 3], snapshot);
    /// snapshot.push(4);
    /// assert_eq!(3, stack.len());
    /// assert_eq!(stack, Stack::from(stack.to_vec()));
    /// ```
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.data.clone()
    }

    /// Consume the stack and return its elements as a `Vec`, from the bottom
    /// up.
    pub fn into_vec(self) -> Vec<A> {
        self.data
    }
}

impl<A> Default for Stack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Debug for Stack<A>
where
    A: Debug,
{
    /// Debug implementation for `Stack`.
    ///
    /// Elements are listed from the bottom up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lifo::stack;
    /// let stack = stack![1, 2, 3];
    /// assert_eq!("Stack[1, 2, 3]", format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Stack")?;
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<A> From<Vec<A>> for Stack<A> {
    /// Construct a stack from a `Vec` holding its elements bottom-to-top.
    fn from(data: Vec<A>) -> Self {
        Self { data }
    }
}

impl<A, const N: usize> From<[A; N]> for Stack<A> {
    /// Construct a stack from an array holding its elements bottom-to-top.
    fn from(data: [A; N]) -> Self {
        Self {
            data: Vec::from(data),
        }
    }
}

impl<A> From<Stack<A>> for Vec<A> {
    fn from(stack: Stack<A>) -> Self {
        stack.into_vec()
    }
}

impl<A> FromIterator<A> for Stack<A> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<A> Extend<A> for Stack<A> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = A>,
    {
        self.push_all(iter);
    }
}

impl<'a, A> Extend<&'a A> for Stack<A>
where
    A: 'a + Copy,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a A>,
    {
        self.push_all(iter.into_iter().copied());
    }
}

impl<'a, A> IntoIterator for &'a Stack<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> IntoIterator for Stack<A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    /// Consume the stack, yielding its elements from the top down.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.data.into_iter())
    }
}
