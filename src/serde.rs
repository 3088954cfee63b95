// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! `serde` support for [`Stack`](crate::Stack).
//!
//! A stack serialises as a sequence of its elements from the bottom up, the
//! same order [`Stack::to_vec()`](crate::Stack::to_vec) produces, and
//! deserialises from any sequence read in that order.

use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::Stack;

impl<A> Serialize for Stack<A>
where
    A: Serialize,
{
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let items = self.as_slice();
        let mut seq = s.serialize_seq(Some(items.len()))?;
        for item in items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct StackVisitor<A>(PhantomData<A>);

impl<'de, A> Visitor<'de> for StackVisitor<A>
where
    A: Deserialize<'de>,
{
    type Value = Stack<A>;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of stack elements")
    }

    fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
        let mut stack = Stack::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(item) = seq.next_element()? {
            stack.push(item);
        }
        Ok(stack)
    }
}

impl<'de, A> Deserialize<'de> for Stack<A>
where
    A: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(StackVisitor(PhantomData))
    }
}
