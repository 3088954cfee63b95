// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Construct a [`Stack`][Stack] from a list of elements, bottom first.
///
/// This works like `vec!`: the last element listed ends up on top.
///
/// ```rust
/// # use lifo::stack;
/// let mut stack = stack![1, 3, 5, 7];
/// assert_eq!(Some(7), stack.pop());
///
/// let zeroes = stack![0u8; 4];
/// assert_eq!(4, zeroes.len());
///
/// let empty: lifo::Stack<u8> = stack![];
/// assert!(empty.is_empty());
/// ```
///
/// [Stack]: struct.Stack.html
#[macro_export]
macro_rules! stack {
    () => {
        $crate::Stack::new()
    };

    ($elem:expr; $count:expr) => {
        $crate::Stack::from(vec![$elem; $count])
    };

    ($($elem:expr),+ $(,)?) => {
        $crate::Stack::from(vec![$($elem),+])
    };
}
