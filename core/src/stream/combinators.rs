//! Generic map/filter/pipe primitives over lazy chunk sequences.

use bytes::Bytes;

use crate::types::{BoxTransform, ChunkResult, ChunkStream, StreamError};

/// Lazily applies `f` to each chunk. The first error, from upstream or from
/// `f`, is yielded once and ends the sequence.
pub struct MapChunks<I, F> {
    inner: I,
    f: F,
    done: bool,
}

impl<I, F> MapChunks<I, F> {
    pub fn new(inner: I, f: F) -> Self {
        Self { inner, f, done: false }
    }
}

impl<I, F> Iterator for MapChunks<I, F>
where
    I: Iterator<Item = ChunkResult>,
    F: FnMut(Bytes) -> ChunkResult,
{
    type Item = ChunkResult;

    fn next(&mut self) -> Option<ChunkResult> {
        if self.done {
            return None;
        }

        let mapped = match self.inner.next()? {
            Ok(chunk) => (self.f)(chunk),
            Err(e) => Err(e),
        };
        if mapped.is_err() {
            self.done = true;
        }
        Some(mapped)
    }
}

/// Transform applying `f` to every chunk, preserving count and order.
pub fn map_stream<'a, F>(f: F) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a
where
    F: FnMut(Bytes) -> Result<Bytes, StreamError> + 'a,
{
    move |chunks: ChunkStream<'a>| -> ChunkStream<'a> { Box::new(MapChunks::new(chunks, f)) }
}

/// Transform keeping only chunks for which `predicate` holds. Errors always
/// pass through.
pub fn filter_stream<'a, P>(mut predicate: P) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a
where
    P: FnMut(&Bytes) -> bool + 'a,
{
    move |chunks: ChunkStream<'a>| -> ChunkStream<'a> {
        Box::new(chunks.filter(move |item| match item {
            Ok(chunk) => predicate(chunk),
            Err(_) => true,
        }))
    }
}

/// Drop zero-length chunks; errors pass through.
///
/// Used after maps whose output may legitimately be empty (a record that
/// decrypts to nothing) so the engine never emits an empty chunk.
pub fn skip_empty<'a>(chunks: ChunkStream<'a>) -> ChunkStream<'a> {
    Box::new(chunks.filter(|item| !matches!(item, Ok(chunk) if chunk.is_empty())))
}

/// Left-to-right composition: `pipe_stream([t1, t2, t3])(s) == t3(t2(t1(s)))`.
pub fn pipe_stream<'a>(
    transforms: Vec<BoxTransform<'a>>,
) -> impl FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a {
    move |chunks: ChunkStream<'a>| transforms.into_iter().fold(chunks, |acc, t| t(acc))
}

/// Box a transform so heterogeneous transforms fit in one `Vec`.
pub fn boxed<'a, T>(transform: T) -> BoxTransform<'a>
where
    T: FnOnce(ChunkStream<'a>) -> ChunkStream<'a> + 'a,
{
    Box::new(transform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_error_is_terminal() {
        let input: ChunkStream<'_> = Box::new(
            vec![Ok(Bytes::from_static(b"a")), Ok(Bytes::from_static(b"b"))].into_iter(),
        );
        let mut out = map_stream(|_c: Bytes| -> ChunkResult {
            Err(StreamError::Validation("nope".into()))
        })(input);
        assert!(out.next().unwrap().is_err());
        assert!(out.next().is_none());
    }

    #[test]
    fn skip_empty_keeps_errors() {
        let input: ChunkStream<'_> = Box::new(
            vec![
                Ok(Bytes::new()),
                Ok(Bytes::from_static(b"a")),
                Err(StreamError::Validation("x".into())),
            ]
            .into_iter(),
        );
        let out: Vec<ChunkResult> = skip_empty(input).collect();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].as_ref().unwrap(), &Bytes::from_static(b"a"));
        assert!(out[1].is_err());
    }
}
