use crate::stream::IterStream;
use std::hash::Hash;
use std::rc::Rc;

/// A Pipe represents a reusable stream transformation from one type to another.
/// It's a function from IterStream[I] to IterStream[O].
pub struct Pipe<I, O> {
    f: Rc<dyn Fn(IterStream<I>) -> IterStream<O>>,
}

impl<I, O> Clone for Pipe<I, O> {
    fn clone(&self) -> Self {
        Pipe {
            f: Rc::clone(&self.f),
        }
    }
}

impl<I, O> Pipe<I, O> {
    /// Create a new pipe from a function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(IterStream<I>) -> IterStream<O> + 'static,
    {
        Pipe { f: Rc::new(f) }
    }

    /// Apply this pipe to a stream
    pub fn apply(&self, input: IterStream<I>) -> IterStream<O> {
        (self.f)(input)
    }
}

impl<T: 'static> IterStream<T> {
    /// Send this stream through `pipe`.
    pub fn through<O>(&self, pipe: &Pipe<T, O>) -> IterStream<O> {
        pipe.apply(self.clone())
    }
}

/// Create a pipe that applies the given function to each element
pub fn map<I, O, F>(f: F) -> Pipe<I, O>
where
    F: Fn(I) -> O + Clone + 'static,
    I: 'static,
    O: 'static,
{
    Pipe::new(move |input| input.map(f.clone()))
}

/// Create a pipe that filters elements based on the predicate
pub fn filter<I, F>(predicate: F) -> Pipe<I, I>
where
    F: Fn(&I) -> bool + Clone + 'static,
    I: 'static,
{
    Pipe::new(move |input| input.filter(predicate.clone()))
}

/// Create a pipe that drops repeated elements
pub fn unique<I>() -> Pipe<I, I>
where
    I: Eq + Hash + Clone + 'static,
{
    Pipe::new(|input| input.unique())
}

/// Create a pipe that keeps at most `count` elements
pub fn limit<I: 'static>(count: usize) -> Pipe<I, I> {
    Pipe::new(move |input| input.limit(count))
}

/// Create a pipe that discards the first `count` elements
pub fn skip<I: 'static>(count: usize) -> Pipe<I, I> {
    Pipe::new(move |input| input.skip(count))
}

/// Compose two pipes together
pub fn compose<I, M, O>(p1: Pipe<I, M>, p2: Pipe<M, O>) -> Pipe<I, O>
where
    I: 'static,
    M: 'static,
    O: 'static,
{
    Pipe::new(move |input| p2.apply(p1.apply(input)))
}

/// Identity pipe that doesn't transform the stream
pub fn identity<I: 'static>() -> Pipe<I, I> {
    Pipe::new(|input| input)
}

/// Extension trait for pipes
pub trait PipeExt<I, O> {
    /// Compose this pipe with another pipe
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: 'static;
}

impl<I, O> PipeExt<I, O> for Pipe<I, O>
where
    I: 'static,
    O: 'static,
{
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: 'static,
    {
        compose(self, other)
    }
}
