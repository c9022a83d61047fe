#[cfg(test)]
mod tests {
    use anyhow::Result;
    use bytes::Bytes;
    use stream_crypt::stream::{
        boxed, chunk_stream, filter_stream, map_stream, pipe_stream, str_stream, stream_to_vec,
        StreamPipe,
    };
    use stream_crypt::types::{ChunkResult, StreamError};

    fn upper(chunk: Bytes) -> ChunkResult {
        Ok(Bytes::from(chunk.to_ascii_uppercase()))
    }

    #[test]
    fn test_map_preserves_count_and_order() -> Result<()> {
        let out: Vec<Bytes> = map_stream(upper)(str_stream("abcdef", Some(2)))
            .collect::<Result<_, _>>()?;
        assert_eq!(out, vec!["AB", "CD", "EF"].into_iter().map(Bytes::from).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_filter_keeps_matching() -> Result<()> {
        let out = stream_to_vec(filter_stream(|c: &Bytes| c[0] != b'c')(str_stream(
            "abcdef",
            Some(2),
        )))?;
        assert_eq!(out, b"abef");
        Ok(())
    }

    #[test]
    fn test_filter_passes_errors() {
        let input: Vec<ChunkResult> = vec![Err(StreamError::Validation("x".into()))];
        let mut out = filter_stream(|_: &Bytes| false)(Box::new(input.into_iter()));
        assert!(out.next().unwrap().is_err());
    }

    #[test]
    fn test_pipe_stream_applies_left_to_right() -> Result<()> {
        let t = pipe_stream(vec![
            boxed(chunk_stream(3)?),
            boxed(map_stream(|c: Bytes| -> ChunkResult {
                let mut v = c.to_vec();
                v.push(b'|');
                Ok(Bytes::from(v))
            })),
        ]);
        assert_eq!(stream_to_vec(t(str_stream("abcdefg", Some(1))))?, b"abc|def|g|");
        Ok(())
    }

    #[test]
    fn test_empty_pipe_is_identity() -> Result<()> {
        let t = pipe_stream(Vec::new());
        assert_eq!(stream_to_vec(t(str_stream("xyz", None)))?, b"xyz");
        Ok(())
    }

    #[test]
    fn test_stream_pipe_fluent() -> Result<()> {
        let mut sink = Vec::new();
        let written = StreamPipe::from_stream(str_stream("hello world", Some(4)))
            .pipe(chunk_stream(5)?)
            .pipe(map_stream(upper))
            .write_to(&mut sink)?;
        assert_eq!(written, 11);
        assert_eq!(sink, b"HELLO WORLD");
        Ok(())
    }

    #[test]
    fn test_str_stream_chunking() {
        let chunks: Vec<Bytes> = str_stream("abcde", Some(2)).map(Result::unwrap).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(str_stream("abcde", None).count(), 1);
        assert_eq!(str_stream("abcde", Some(0)).count(), 1);
        assert_eq!(str_stream("", Some(2)).count(), 0);
    }
}
