// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A last-in-first-out stack.
//!
//! [`Stack`][Stack] holds an ordered sequence of elements, where the most
//! recently pushed element is always the top, and the top is the only end you
//! can [`pop()`][Stack::pop] or [`peek()`][Stack::peek] at.
//!
//! # Empty Stacks
//!
//! Popping or peeking at an empty stack isn't an error: you get `None` back,
//! and the stack is left as it was. There is no operation on a
//! [`Stack`][Stack] which can fail, and none of them panic.
//!
//! # Ordering
//!
//! There are two orders to keep in mind:
//!
//!   * Construction and snapshots go from the bottom up. [`stack![a, b,
//!     c]`][stack], [`Stack::from(vec)`][Stack] and
//!     [`to_vec()`][Stack::to_vec] all list the bottom element first, so
//!     `Stack::from(stack.to_vec())` rebuilds an identical stack.
//!   * Iteration goes from the top down. [`iter()`][Stack::iter], `for item in
//!     &stack` and `for item in stack` all yield the most recently pushed
//!     element first, which is the order you'd get by popping.
//!
//! [`to_vec()`][Stack::to_vec] always returns a copy: changing the vector it
//! gives you never changes the stack. If you just want to look at the
//! elements without copying them, [`as_slice()`][Stack::as_slice] lends you a
//! read only view.
//!
//! # Thread Safety
//!
//! [`Stack`][Stack] does no locking of its own. It's [`Send`][Send] and
//! [`Sync`][Sync] whenever its elements are, so you can move it between
//! threads or wrap it in whatever lock suits you. With the `sync` feature
//! enabled you also get [`SyncStack`][SyncStack], which is a stack behind a
//! mutex with the same operations available through a shared reference.
//!
//! # Example
//!
//! ```rust
//! # use lifo::{stack, Stack};
//! let mut stack = stack![1, 3, 5];
//! stack.push(7);
//!
//! assert_eq!(4, stack.len());
//! assert_eq!(Some(&7), stack.peek());
//!
//! // Iteration goes from the top down...
//! let top_down: Vec<_> = stack.iter().copied().collect();
//! assert_eq!(vec![7, 5, 3, 1], top_down);
//!
//! // ...but snapshots go from the bottom up.
//! assert_eq!(vec![1, 3, 5, 7], stack.to_vec());
//!
//! while let Some(value) = stack.pop() {
//!     println!("{}", value);
//! }
//! assert_eq!(None, stack.peek());
//! ```
//!
//! # Feature Flags
//!
//! * `sync` provides [`SyncStack`][SyncStack].
//! * `serde` implements `Serialize` and `Deserialize` for [`Stack`][Stack],
//!   using a sequence of its elements from the bottom up.
//!
//! [Stack]: struct.Stack.html
//! [Stack::pop]: struct.Stack.html#method.pop
//! [Stack::peek]: struct.Stack.html#method.peek
//! [Stack::iter]: struct.Stack.html#method.iter
//! [Stack::to_vec]: struct.Stack.html#method.to_vec
//! [Stack::as_slice]: struct.Stack.html#method.as_slice
//! [SyncStack]: struct.SyncStack.html
//! [stack]: macro.stack.html
//! [Send]: https://doc.rust-lang.org/std/marker/trait.Send.html
//! [Sync]: https://doc.rust-lang.org/std/marker/trait.Sync.html

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![forbid(unsafe_code)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

#[macro_use]
mod macros;

mod iter;
mod stack;

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "sync")]
mod sync_stack;

pub use self::iter::{IntoIter, Iter};
pub use self::stack::Stack;

#[cfg(feature = "sync")]
pub use self::sync_stack::SyncStack;

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct DropTest<'a> {
        counter: &'a AtomicUsize,
    }

    impl<'a> DropTest<'a> {
        fn new(counter: &'a AtomicUsize) -> Self {
            counter.fetch_add(1, Ordering::Relaxed);
            DropTest { counter }
        }
    }

    impl<'a> Drop for DropTest<'a> {
        fn drop(&mut self) {
            self.counter.fetch_sub(1, Ordering::Relaxed);
        }
    }

    fn fill(counter: &AtomicUsize, size: usize) -> Stack<DropTest<'_>> {
        let mut stack = Stack::new();
        for _ in 0..size {
            stack.push(DropTest::new(counter));
        }
        assert_eq!(size, counter.load(Ordering::SeqCst));
        stack
    }

    #[test]
    fn dropping_stack_drops_elements() {
        let counter = AtomicUsize::new(0);
        {
            let _stack = fill(&counter, 1024);
        }
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn clearing_stack_drops_elements() {
        let counter = AtomicUsize::new(0);
        let mut stack = fill(&counter, 1024);
        stack.clear();
        assert_eq!(0, counter.load(Ordering::SeqCst));
        stack.clear();
        assert_eq!(0, counter.load(Ordering::SeqCst));
        assert!(stack.is_empty());
    }

    #[test]
    fn popping_hands_over_ownership() {
        let counter = AtomicUsize::new(0);
        let mut stack = fill(&counter, 16);
        let top = stack.pop();
        assert!(top.is_some());
        assert_eq!(16, counter.load(Ordering::SeqCst));
        drop(stack);
        assert_eq!(1, counter.load(Ordering::SeqCst));
        drop(top);
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn push_pop_scenario() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(3);
        stack.push(5);
        assert_eq!(3, stack.len());
        assert_eq!(Some(&5), stack.peek());
        assert_eq!(Some(5), stack.pop());
        assert_eq!(Some(3), stack.pop());
        assert_eq!(Some(1), stack.pop());
        assert_eq!(None, stack.pop());
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_scenario() {
        let mut stack: Stack<usize> = stack![];
        assert_eq!(None, stack.peek());
        assert_eq!(None, stack.pop());
        assert_eq!(0, stack.len());
    }

    #[test]
    fn array_and_iterator_orders() {
        let stack = stack!['a', 'b', 'c'];
        assert_eq!(vec!['a', 'b', 'c'], stack.to_vec());
        assert_eq!(vec![&'c', &'b', &'a'], stack.iter().collect::<Vec<_>>());
    }

    #[test]
    fn option_of_stack_size_equals_stack_size() {
        use std::mem::size_of;
        assert_eq!(size_of::<Stack<usize>>(), size_of::<Option<Stack<usize>>>());
    }
}
