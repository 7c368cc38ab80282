use iter_stream::pipe;
use iter_stream::pipe::*;
use iter_stream::IterStream;

#[test]
fn test_pipe_map() {
    let stream = IterStream::of([1, 2, 3, 4, 5]);
    let pipe = map(|x: i32| x * 2);

    let result = pipe.apply(stream).to_vec();
    assert_eq!(result, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_pipe_filter() {
    let stream = IterStream::of([1, 2, 3, 4, 5]);
    let pipe = pipe::filter(|x: &i32| x % 2 == 0);

    assert_eq!(pipe.apply(stream).to_vec(), vec![2, 4]);
}

#[test]
fn test_pipe_compose() {
    let stream = IterStream::of([1, 2, 3, 4, 5]);

    let double = pipe::map(|x: i32| x * 2);
    let above_four = pipe::filter(|x: &i32| *x > 4);

    let pipe = pipe::compose(double, above_four);
    assert_eq!(pipe.apply(stream).to_vec(), vec![6, 8, 10]);
}

#[test]
fn test_pipe_ext_compose() {
    let pipe = pipe::skip::<i32>(2).compose(pipe::limit(2));
    assert_eq!(IterStream::of([0, 1, 2, 3, 4, 5]).through(&pipe).to_vec(), vec![2, 3]);
}

#[test]
fn test_pipe_unique() {
    let pipe = pipe::unique();
    let stream = IterStream::of([1, 1, 2, 1, 3]);
    assert_eq!(stream.through(&pipe).to_vec(), vec![1, 2, 3]);
}

#[test]
fn test_identity_pipe() {
    let stream = IterStream::of(["a", "b"]);
    assert_eq!(stream.through(&pipe::identity()).to_vec(), vec!["a", "b"]);
}

#[test]
fn test_pipe_is_reusable() {
    let pipe = pipe::map(|s: &'static str| s.len());
    let short = IterStream::of(["ab", "c"]).through(&pipe);
    let long = IterStream::of(["abcd"]).through(&pipe.clone());

    assert_eq!(short.to_vec(), vec![2, 1]);
    assert_eq!(long.to_vec(), vec![4]);
}

#[test]
fn test_pipe_output_is_lazy_and_retraversable() {
    let pipe = pipe::map(|x: i32| x + 1);
    let stream = IterStream::from(0..3).through(&pipe);
    assert_eq!(stream.to_vec(), vec![1, 2, 3]);
    assert_eq!(stream.to_vec(), vec![1, 2, 3]);
}
