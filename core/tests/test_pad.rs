#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use proptest::prelude::*;
    use stream_crypt::pad::{pipe_pad, pipe_strip, NoPad, NullBytePad, Pad, PadError, Pkcs7Pad};

    #[test]
    fn test_pkcs7_aligned_input_gets_full_block() {
        let padded = Pkcs7Pad.pad(b"abcd", 4).unwrap();
        assert_eq!(padded, b"abcd\x04\x04\x04\x04");
        assert_eq!(Pkcs7Pad.strip(&padded, 4).unwrap(), b"abcd");
    }

    #[test]
    fn test_pkcs7_rejects_bad_trailer() {
        assert!(matches!(
            Pkcs7Pad.strip(b"abc\x00", 4),
            Err(PadError::InvalidPadding(_))
        ));
        assert!(matches!(
            Pkcs7Pad.strip(b"ab\x01\x02", 4),
            Err(PadError::InvalidPadding(_))
        ));
        assert!(matches!(
            Pkcs7Pad.strip(b"\x05\x05\x05\x05", 4),
            Err(PadError::InvalidPadding(_))
        ));
    }

    #[test]
    fn test_pkcs7_block_size_bounds() {
        assert_eq!(
            Pkcs7Pad.pad(b"x", 0),
            Err(PadError::InvalidBlockSize { block_size: 0 })
        );
        assert!(Pkcs7Pad.pad(b"x", 256).is_err());
        assert!(Pkcs7Pad.pad(b"x", 255).is_ok());
    }

    #[test]
    fn test_misaligned_strip_fails_for_every_policy() {
        let err = PadError::Misaligned { len: 3, block_size: 4 };
        assert_eq!(Pkcs7Pad.strip(b"abc", 4), Err(err.clone()));
        assert_eq!(NullBytePad.strip(b"abc", 4), Err(err));
    }

    #[test]
    fn test_null_byte_strip_drops_trailing_zeros_of_value() {
        let padded = NullBytePad.pad(b"ab\0", 4).unwrap();
        assert_eq!(padded, b"ab\0\0");
        assert_eq!(NullBytePad.strip(&padded, 4).unwrap(), b"ab");
    }

    #[test]
    fn test_no_pad_is_identity() {
        assert_eq!(NoPad.pad(b"abc", 16).unwrap(), b"abc");
        assert_eq!(NoPad.strip(b"abc", 16).unwrap(), b"abc");
    }

    #[test]
    fn test_pipe_pad_exact_multiple_of_chunk() {
        let data = vec![7u8; 32];
        let mut padded = Vec::new();
        let n = pipe_pad(&Pkcs7Pad, 16, 16, &mut Cursor::new(&data), &mut padded).unwrap();
        assert_eq!(n, 48);

        let mut out = Vec::new();
        pipe_strip(&Pkcs7Pad, 16, 16, &mut Cursor::new(&padded), &mut out).unwrap();
        assert_eq!(out, data);
    }

    proptest! {
        #[test]
        fn prop_pkcs7_round_trip(data in proptest::collection::vec(any::<u8>(), 0..200), block in 1usize..=64) {
            let padded = Pkcs7Pad.pad(&data, block).unwrap();
            prop_assert_eq!(padded.len() % block, 0);
            prop_assert!(padded.len() > data.len());
            prop_assert_eq!(Pkcs7Pad.strip(&padded, block).unwrap(), data);
        }

        #[test]
        fn prop_null_byte_round_trip_without_trailing_zero(
            mut data in proptest::collection::vec(any::<u8>(), 0..200),
            block in 1usize..=32,
        ) {
            while data.last() == Some(&0) {
                data.pop();
            }
            let padded = NullBytePad.pad(&data, block).unwrap();
            prop_assert_eq!(NullBytePad.strip(&padded, block).unwrap(), data);
        }

        #[test]
        fn prop_pipe_round_trip(
            data in proptest::collection::vec(any::<u8>(), 0..600),
            chunk in 1usize..100,
        ) {
            let mut padded = Vec::new();
            pipe_pad(&Pkcs7Pad, 8, chunk, &mut Cursor::new(&data), &mut padded).unwrap();
            prop_assert_eq!(padded.len() % 8, 0);

            let mut out = Vec::new();
            pipe_strip(&Pkcs7Pad, 8, chunk, &mut Cursor::new(&padded), &mut out).unwrap();
            prop_assert_eq!(out, data);
        }
    }
}
