use std::io::{self, Write};

use crate::platform::BlockingToggle;

/// How a line reached its writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The first attempt wrote and flushed the whole line.
    Direct,
    /// The first attempt hit `WouldBlock`; the rest went out in blocking mode.
    RetriedBlocking,
}

/// Writes `text` and a trailing newline to `out`, then flushes.
///
/// Some terminals leave stdout in non-blocking mode, so a write can fail with
/// `WouldBlock`. When that happens and a `toggle` is available, the stream is
/// switched to blocking mode, the bytes not yet accepted are written, the
/// previous mode is restored and the stream is flushed. There is exactly one
/// retry. Without a toggle the first attempt is the only one and its error is
/// returned.
pub fn write_with_blocking_retry<W: Write + ?Sized>(
    out: &mut W,
    toggle: Option<&dyn BlockingToggle>,
    text: &str,
) -> io::Result<WriteOutcome> {
    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(text);
    line.push('\n');
    let bytes = line.as_bytes();

    let mut written = 0;
    let err = match write_tracked(out, bytes, &mut written) {
        Ok(()) => return Ok(WriteOutcome::Direct),
        Err(e) => e,
    };

    let toggle = match toggle {
        Some(toggle) if err.kind() == io::ErrorKind::WouldBlock => toggle,
        _ => return Err(err),
    };

    tracing::trace!(
        written,
        remaining = bytes.len() - written,
        "Output would block; retrying in blocking mode"
    );

    let saved = toggle.is_blocking()?;
    toggle.set_blocking(true)?;
    let retried = write_tracked(out, bytes, &mut written);
    let restored = toggle.set_blocking(saved);
    retried?;
    restored?;
    out.flush()?;

    Ok(WriteOutcome::RetriedBlocking)
}

/// Writes `bytes[*written..]` and flushes, advancing `written` as the writer
/// accepts data so a later attempt can resume where this one stopped.
fn write_tracked<W: Write + ?Sized>(
    out: &mut W,
    bytes: &[u8],
    written: &mut usize,
) -> io::Result<()> {
    while *written < bytes.len() {
        match out.write(&bytes[*written..]) {
            Ok(0) => return Err(io::ErrorKind::WriteZero.into()),
            Ok(n) => *written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    loop {
        match out.flush() {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            other => return other,
        }
    }
}
