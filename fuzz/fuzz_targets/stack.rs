#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lifo::Stack;

#[derive(Arbitrary, Debug)]
enum Action {
    Push(u8),
    PushAll(Vec<u8>),
    Pop,
    Peek,
    Clear,
    Remove(u8),
    Get(usize),
    Snapshot,
}

use self::Action::*;

fuzz_target!(|input: (Vec<u8>, Vec<Action>)| {
    let mut stack = Stack::from(input.0.clone());
    let mut model = input.0;
    for action in input.1 {
        match action {
            Push(value) => {
                stack.push(value);
                model.push(value);
            }
            PushAll(values) => {
                stack.push_all(values.iter().copied());
                model.extend(values);
            }
            Pop => {
                assert_eq!(model.pop(), stack.pop());
            }
            Peek => {
                assert_eq!(model.last(), stack.peek());
            }
            Clear => {
                stack.clear();
                model.clear();
            }
            Remove(value) => {
                let before = model.len();
                model.retain(|item| *item != value);
                assert_eq!(before - model.len(), stack.remove(&value));
            }
            Get(index) => {
                assert_eq!(model.get(index), stack.get(index));
            }
            Snapshot => {
                assert_eq!(model, stack.to_vec());
                assert!(stack.iter().eq(model.iter().rev()));
            }
        }
        assert_eq!(model.len(), stack.len());
        assert_eq!(model.is_empty(), stack.is_empty());
    }
});
