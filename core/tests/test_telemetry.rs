#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use anyhow::Result;
    use stream_crypt::crypto::{AesCbcCrypt, NullCrypt};
    use stream_crypt::stream::{
        decrypt_source, encrypt_source, CryptStreamConfig, InputSource, OutputSink,
    };
    use stream_crypt::telemetry::{Stage, TelemetrySnapshot};

    #[test]
    fn test_memory_sink_round_trip() -> Result<()> {
        let key = [3u8; 32];
        let plain = vec![0xabu8; 5000];
        let config = CryptStreamConfig::header(1024);

        let enc = encrypt_source(
            InputSource::Memory(plain.clone()),
            OutputSink::Memory,
            AesCbcCrypt::new(&key)?,
            config.clone(),
        )?;
        assert_eq!(enc.chunks_out, 5);
        assert_eq!(enc.bytes_in, 5000);
        let ct = enc.output.clone().expect("memory sink captures output");
        assert_eq!(enc.bytes_out, ct.len() as u64);
        assert!(enc.size_ratio > 1.0);
        assert!(enc.sanity_check());

        let dec = decrypt_source(
            InputSource::Reader(Box::new(Cursor::new(ct))),
            OutputSink::Memory,
            AesCbcCrypt::new(&key)?,
            config,
        )?;
        assert_eq!(dec.output.as_deref(), Some(&plain[..]));
        Ok(())
    }

    #[test]
    fn test_writer_sink_has_no_captured_output() -> Result<()> {
        let snap = encrypt_source(
            InputSource::Memory(b"abc".to_vec()),
            OutputSink::Writer(Box::new(std::io::sink())),
            NullCrypt,
            CryptStreamConfig::fixed(2, 0),
        )?;
        assert!(snap.output.is_none());
        assert_eq!((snap.chunks_out, snap.bytes_out), (2, 3));
        Ok(())
    }

    #[test]
    fn test_empty_input() -> Result<()> {
        let snap = encrypt_source(
            InputSource::Memory(Vec::new()),
            OutputSink::Memory,
            NullCrypt,
            CryptStreamConfig::default(),
        )?;
        assert_eq!(snap.chunks_out, 0);
        assert_eq!(snap.size_ratio, 0.0);
        assert_eq!(snap.output.as_deref(), Some(&[][..]));
        Ok(())
    }

    #[test]
    fn test_snapshot_json_round_trip() -> Result<()> {
        let snap = encrypt_source(
            InputSource::Memory(b"hello".to_vec()),
            OutputSink::Memory,
            NullCrypt,
            CryptStreamConfig::header(2),
        )?;
        assert!(snap.stage_times.get(Stage::Process) <= snap.elapsed);

        let json = snap.to_json()?;
        let back: TelemetrySnapshot = serde_json::from_str(&json)?;
        assert_eq!(back.bytes_out, snap.bytes_out);
        assert!(back.output.is_none());
        Ok(())
    }

    #[test]
    fn test_invalid_config_rejected_before_io() {
        let res = encrypt_source(
            InputSource::File("/nonexistent/input".into()),
            OutputSink::Memory,
            NullCrypt,
            CryptStreamConfig::header(0),
        );
        assert!(matches!(res, Err(stream_crypt::types::StreamError::Validation(_))));
    }
}
