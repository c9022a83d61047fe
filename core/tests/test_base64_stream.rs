#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use proptest::prelude::*;
    use stream_crypt::stream::{
        base64_decode_stream, base64_encode_stream, str_stream, stream_to_vec, Base64Stream,
        StreamPipe,
    };
    use stream_crypt::types::StreamError;

    #[test]
    fn test_only_last_chunk_is_padded() {
        let chunks: Vec<_> = base64_encode_stream(4)(str_stream("abcdefg", Some(1)))
            .map(Result::unwrap)
            .collect();
        // size 4 rounds down to 3
        assert_eq!(chunks.len(), 3);
        assert!(chunks[..2].iter().all(|c| !c.contains(&b'=')));
        assert_eq!(chunks[2].as_ref(), b"Zw==");
    }

    #[test]
    fn test_encoded_matches_one_shot() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let encoded = stream_to_vec(Base64Stream::new(10).encode()(str_stream(&data[..], Some(7)))).unwrap();
        assert_eq!(encoded, STANDARD.encode(data).into_bytes());
    }

    #[test]
    fn test_decode_error_ends_stream() {
        let mut out = base64_decode_stream(8)(str_stream("YWJj*#!?", None));
        assert!(matches!(out.next(), Some(Err(StreamError::Decode(_)))));
        assert!(out.next().is_none());
    }

    #[test]
    fn test_default_chunk_size() {
        assert_eq!(Base64Stream::default().chunk_size(), 1024);
    }

    proptest! {
        #[test]
        fn prop_base64_round_trip(
            data in proptest::collection::vec(any::<u8>(), 0..500),
            size in 1usize..64,
            feed in 1usize..50,
        ) {
            let codec = Base64Stream::new(size);
            let out = StreamPipe::from_stream(str_stream(data.clone(), Some(feed)))
                .pipe(codec.encode())
                .pipe(codec.decode())
                .collect_bytes()
                .unwrap();
            prop_assert_eq!(out, data);
        }
    }
}
