//! Stable entry points over `InputSource` / `OutputSink`.

use tracing::debug;

use crate::crypto::Crypt;
use crate::stream::crypt_stream::{CryptStream, CryptStreamConfig, StreamCrypt};
use crate::stream::io::{open_input, open_output, InputSource, OutputSink, SharedBuffer};
use crate::telemetry::TelemetrySnapshot;
use crate::types::StreamError;

fn attach_captured(
    snapshot: &mut TelemetrySnapshot,
    captured: Option<SharedBuffer>,
) -> Result<(), StreamError> {
    if let Some(buf) = captured {
        let guard = buf
            .lock()
            .map_err(|_| StreamError::Validation("output buffer poisoned".into()))?;
        snapshot.attach_output(guard.clone());
    }
    Ok(())
}

/// Encrypt everything in `input` into `output`.
///
/// With `OutputSink::Memory` the ciphertext is returned in
/// `TelemetrySnapshot::output`.
pub fn encrypt_source<C: Crypt>(
    input: InputSource,
    output: OutputSink,
    crypt: C,
    config: CryptStreamConfig,
) -> Result<TelemetrySnapshot, StreamError> {
    let engine = CryptStream::new(crypt, config)?;
    let mut reader = open_input(input)?;
    let (mut writer, captured) = open_output(output)?;

    let mut snapshot = engine.stream_encrypt(&mut reader, &mut writer)?;
    attach_captured(&mut snapshot, captured)?;
    debug!(chunks_out = snapshot.chunks_out, "encrypt_source finished");
    Ok(snapshot)
}

/// Decrypt everything in `input` into `output`; see [`encrypt_source`].
pub fn decrypt_source<C: Crypt>(
    input: InputSource,
    output: OutputSink,
    crypt: C,
    config: CryptStreamConfig,
) -> Result<TelemetrySnapshot, StreamError> {
    let engine = CryptStream::new(crypt, config)?;
    let mut reader = open_input(input)?;
    let (mut writer, captured) = open_output(output)?;

    let mut snapshot = engine.stream_decrypt(&mut reader, &mut writer)?;
    attach_captured(&mut snapshot, captured)?;
    debug!(chunks_out = snapshot.chunks_out, "decrypt_source finished");
    Ok(snapshot)
}
