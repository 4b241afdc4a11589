//! Session Driver
//!
//! Reads command lines, executes them, and writes one JSON reply per line.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::warn;

use super::handlers::{execute, StringCache};
use crate::error::{CacheError, Result};
use crate::models::{Command, Reply};

/// Runs commands from `reader` until end of input.
///
/// Unparsable lines, including lines that are not valid UTF-8, produce an
/// error reply and processing continues.
/// Returns the number of lines that produced a reply.
pub async fn run_session<R, W>(cache: &StringCache, mut reader: R, mut writer: W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut replies = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let parsed = String::from_utf8(std::mem::take(&mut buf))
            .map_err(|e| CacheError::InvalidCommand(format!("line is not valid UTF-8: {}", e)))
            .and_then(|line| Command::parse(&line));

        let reply = match parsed {
            Ok(Some(command)) => execute(cache, command).await,
            Ok(None) => continue,
            Err(e) => {
                warn!("Skipping line: {}", e);
                Reply::error(e)
            }
        };

        let json = reply.to_json_line().map_err(std::io::Error::from)?;
        writer.write_all(json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        replies += 1;
    }

    Ok(replies)
}
