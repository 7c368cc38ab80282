use iter_stream::{iter_stream, IterStream};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_empty() {
    let stream = IterStream::<i32>::empty();
    assert_eq!(stream.length(), 0);
    assert_eq!(stream.to_vec(), Vec::<i32>::new());
}

#[test]
fn test_from_vec() {
    let elements = vec![0, 1, 2, 3, 4];
    let stream = IterStream::from(elements.clone());
    assert_eq!(stream.to_vec(), elements);
}

#[test]
fn test_from_range() {
    let stream = IterStream::from(0..5);
    assert_eq!(stream.to_vec(), vec![0, 1, 2, 3, 4]);
    assert_eq!(stream.to_vec(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_of() {
    let stream = IterStream::of([0, 1, 2, 3, 4]);
    assert_eq!(stream.to_vec(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_of_nothing() {
    let stream = IterStream::of(Vec::<String>::new());
    assert_eq!(stream.length(), 0);
}

#[test]
fn test_macro() {
    assert_eq!(iter_stream![1, 2, 3].to_vec(), vec![1, 2, 3]);
    assert_eq!(iter_stream!["a", "b",].to_vec(), vec!["a", "b"]);

    let empty: IterStream<u8> = iter_stream![];
    assert_eq!(empty.length(), 0);
}

#[test]
fn test_from_iterator() {
    let stream: IterStream<i32> = (1..=3).map(|x| x * 10).collect();
    assert_eq!(stream.to_vec(), vec![10, 20, 30]);
}

#[test]
fn test_from_fn() {
    let elements = vec![0, 1, 2, 3, 4];
    let source = elements.clone();
    let stream = IterStream::from_fn(move || source.clone());
    assert_eq!(stream.to_vec(), elements);
}

#[test]
fn test_from_fn_calls_producer_per_traversal() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let stream = IterStream::from_fn(move || {
        counter.set(counter.get() + 1);
        0..3
    });

    let mapped = stream.map(|x| x + 1);
    assert_eq!(calls.get(), 0, "building a pipeline must not evaluate it");

    mapped.to_vec();
    mapped.length();
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_from_fn_infinite() {
    let stream = IterStream::from_fn(|| 0..);
    assert_eq!(stream.limit(3).to_vec(), vec![0, 1, 2]);
}

#[test]
fn test_join_single() {
    let elements = vec![0, 1, 2, 3, 4];
    let stream = IterStream::join([IterStream::from(elements.clone())]);
    assert_eq!(stream.to_vec(), elements);
}

#[test]
fn test_join_many() {
    let elements = vec![0, 1, 2, 3, 4];
    let streams: Vec<_> = (0..4).map(|_| IterStream::from(elements.clone())).collect();
    let stream = IterStream::join(streams);

    let expected: Vec<i32> = (0..4).flat_map(|_| elements.clone()).collect();
    assert_eq!(stream.to_vec(), expected);
}

#[test]
fn test_join_nothing() {
    let stream = IterStream::<i32>::join(Vec::new());
    assert!(stream.to_vec().is_empty());
}

#[test]
fn test_join_is_lazy_per_child() {
    let stream = IterStream::join([IterStream::of([1, 2]), IterStream::from_fn(|| 3..)]);
    assert_eq!(stream.limit(4).to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_single_pass_resumes_cursor() {
    let stream = IterStream::from_single_pass(vec![0, 1, 2, 3, 4]);

    assert_eq!(stream.limit(2).to_vec(), vec![0, 1]);
    assert_eq!(stream.to_vec(), vec![2, 3, 4]);
    assert_eq!(stream.length(), 0);
}

#[test]
fn test_repeat_with() {
    let next = Rc::new(Cell::new(0));
    let state = next.clone();
    let stream = IterStream::repeat_with(move || {
        let value = state.get();
        state.set(value + 1);
        value
    });

    assert_eq!(stream.limit(3).to_vec(), vec![0, 1, 2]);
    assert_eq!(stream.limit(2).to_vec(), vec![3, 4]);
}

#[test]
fn test_into_iterator() {
    let stream = IterStream::of([1, 2, 3]);

    let mut seen = Vec::new();
    for value in &stream {
        seen.push(value);
    }
    assert_eq!(seen, vec![1, 2, 3]);

    let owned: Vec<_> = stream.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3]);
}

#[test]
fn test_clone_shares_sequence() {
    let stream = IterStream::of([1, 2, 3]);
    let copy = stream.clone();
    assert_eq!(stream.to_vec(), copy.to_vec());
}
