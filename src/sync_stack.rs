// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::Stack;

/// A [`Stack`][Stack] which can be shared between threads.
///
/// Every operation takes the stack's lock for its duration, so each one is
/// atomic with respect to the others. Use [`with()`][with] when several steps
/// need to happen under a single lock.
///
/// A panic while the lock is held doesn't make the stack unusable: no stack
/// operation can leave it in an inconsistent state, so a poisoned lock is
/// simply taken over by the next caller.
///
/// # Example
///
/// ```rust
/// # use lifo::SyncStack;
/// # use std::sync::Arc;
/// let stack = Arc::new(SyncStack::new());
/// let workers: Vec<_> = (0..4)
///     .map(|id| {
///         let stack = stack.clone();
///         std::thread::spawn(move || stack.push(id))
///     })
///     .collect();
/// for worker in workers {
///     worker.join().unwrap();
/// }
/// assert_eq!(4, stack.len());
/// ```
///
/// [Stack]: struct.Stack.html
/// [with]: #method.with
pub struct SyncStack<A> {
    inner: Mutex<Stack<A>>,
}

impl<A> SyncStack<A> {
    /// Construct an empty stack.
    pub fn new() -> Self {
        Self::from(Stack::new())
    }

    fn lock(&self) -> MutexGuard<'_, Stack<A>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Push an element onto the top of the stack.
    pub fn push(&self, value: A) {
        self.lock().push(value);
    }

    /// Push every element of `values` onto the stack, in iteration order.
    ///
    /// No other thread's pushes will be interleaved with these.
    pub fn push_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = A>,
    {
        self.lock().push_all(values);
    }

    /// Remove the top element and return it, or `None` if the stack is empty.
    pub fn pop(&self) -> Option<A> {
        self.lock().pop()
    }

    /// Get a copy of the top element, or `None` if the stack is empty.
    ///
    /// The element is cloned because the lock is released before returning.
    pub fn peek(&self) -> Option<A>
    where
        A: Clone,
    {
        self.lock().peek().cloned()
    }

    /// Remove every element from the stack.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Get the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Test whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy the stack's elements into a new `Vec`, from the bottom up.
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.lock().to_vec()
    }

    /// Run `f` on the underlying stack while holding the lock.
    ///
    /// ```rust
    /// # use lifo::SyncStack;
    /// let stack = SyncStack::new();
    /// stack.push_all(vec![1, 2]);
    /// // Replace the top two elements with their sum.
    /// stack.with(|stack| {
    ///     if stack.len() >= 2 {
    ///         let sum = stack.pop().unwrap() + stack.pop().unwrap();
    ///         stack.push(sum);
    ///     }
    /// });
    /// assert_eq!(Some(3), stack.pop());
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Stack<A>) -> R,
    {
        f(&mut self.lock())
    }

    /// Consume the shared stack and return the plain stack inside it.
    pub fn into_inner(self) -> Stack<A> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> Default for SyncStack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> From<Stack<A>> for SyncStack<A> {
    fn from(stack: Stack<A>) -> Self {
        Self {
            inner: Mutex::new(stack),
        }
    }
}

impl<A> Debug for SyncStack<A>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Sync{:?}", *self.lock())
    }
}
