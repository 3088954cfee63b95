// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Iterators over a [`Stack`][Stack], from the top down.
//!
//! [Stack]: struct.Stack.html

use std::fmt::{Debug, Error, Formatter};
use std::iter::{FusedIterator, Rev};

/// A borrowing iterator over a [`Stack`][Stack], yielding elements from the
/// top down.
///
/// Created by [`Stack::iter()`][Stack::iter] or by iterating over `&stack`.
/// Once exhausted it stays exhausted; start a new traversal by asking the
/// stack for a new iterator.
///
/// [Stack]: struct.Stack.html
/// [Stack::iter]: struct.Stack.html#method.iter
pub struct Iter<'a, A> {
    inner: Rev<std::slice::Iter<'a, A>>,
}

impl<'a, A> Iter<'a, A> {
    pub(crate) fn new(inner: std::slice::Iter<'a, A>) -> Self {
        Self { inner: inner.rev() }
    }
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, A> ExactSizeIterator for Iter<'a, A> {}
impl<'a, A> FusedIterator for Iter<'a, A> {}

impl<'a, A> Clone for Iter<'a, A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, A> Debug for Iter<'a, A>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_tuple("Iter").field(&self.inner).finish()
    }
}

/// A consuming iterator over a [`Stack`][Stack], yielding elements from the
/// top down.
///
/// Created by calling `into_iter()` on a stack, or by a `for` loop over one.
///
/// ```rust
/// # use lifo::stack;
/// let mut order = Vec::new();
/// for name in stack!["deepest", "middle", "top"] {
///     order.push(name);
/// }
/// assert_eq!(vec!["top", "middle", "deepest"], order);
/// ```
///
/// [Stack]: struct.Stack.html
pub struct IntoIter<A> {
    inner: Rev<std::vec::IntoIter<A>>,
}

impl<A> IntoIter<A> {
    pub(crate) fn new(inner: std::vec::IntoIter<A>) -> Self {
        Self { inner: inner.rev() }
    }
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<A> DoubleEndedIterator for IntoIter<A> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<A> ExactSizeIterator for IntoIter<A> {}
impl<A> FusedIterator for IntoIter<A> {}

impl<A> Clone for IntoIter<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A> Debug for IntoIter<A>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

#[cfg(test)]
mod test {
    use crate::Stack;

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let stack = Stack::from(vec![1, 2]);
        let mut iter = stack.iter();
        assert_eq!(Some(&2), iter.next());
        assert_eq!(Some(&1), iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(vec![&2, &1], stack.iter().collect::<Vec<_>>());
    }

    #[test]
    fn exact_size() {
        let stack = Stack::from(vec![1, 2, 3]);
        let mut iter = stack.iter();
        assert_eq!(3, iter.len());
        iter.next();
        assert_eq!(2, iter.len());
        let mut owned = stack.into_iter();
        assert_eq!(3, owned.len());
        owned.next();
        assert_eq!(2, owned.len());
    }

    #[test]
    fn back_end_is_the_bottom() {
        let stack = Stack::from(vec!['a', 'b', 'c']);
        let mut iter = stack.iter();
        assert_eq!(Some(&'a'), iter.next_back());
        assert_eq!(Some(&'c'), iter.next());
        assert_eq!(Some(&'b'), iter.next_back());
        assert_eq!(None, iter.next());
        assert_eq!(
            vec!['a', 'b', 'c'],
            stack.into_iter().rev().collect::<Vec<_>>()
        );
    }

    #[test]
    fn cloned_iterator_is_independent() {
        let stack = Stack::from(vec![1, 2, 3]);
        let mut iter = stack.iter();
        iter.next();
        let copy = iter.clone();
        assert_eq!(vec![&2, &1], iter.collect::<Vec<_>>());
        assert_eq!(vec![&2, &1], copy.collect::<Vec<_>>());
    }

    #[test]
    fn partially_consumed_into_iter_drops_the_rest() {
        use std::rc::Rc;
        let shared = Rc::new(());
        let stack: Stack<_> = (0..4).map(|_| shared.clone()).collect();
        assert_eq!(5, Rc::strong_count(&shared));
        let mut iter = stack.into_iter();
        let top = iter.next();
        drop(iter);
        assert_eq!(2, Rc::strong_count(&shared));
        drop(top);
        assert_eq!(1, Rc::strong_count(&shared));
    }
}
