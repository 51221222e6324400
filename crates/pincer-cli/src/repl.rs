//! Interactive conversation loop.
//!
//! Reads user lines, hands each one to the session, and prints the reply
//! until a sentinel input ("quit" or "bye", case-insensitive) or end of
//! input closes the chat. The closing turn looks up the literal input "bye"
//! under the current context so a farewell rule gets the last word. Generic
//! over reader and writer so tests can drive the loop with in-memory
//! buffers.

use pincer_config::ChatConfig;
use pincer_core::Session;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

const BANNER_WIDTH: usize = 50;
const BANNER_TEXT: &str = "Rule-based support chat. Type 'quit' or 'bye' to exit.";

/// Whether the input ends the session.
///
/// Whole-input equality after lowercasing; surrounding whitespace is not
/// stripped, so "quit " is a regular turn.
fn is_sentinel(input: &str) -> bool {
    let lowered = input.to_lowercase();
    lowered == "quit" || lowered == "bye"
}

/// Drive the conversation until a sentinel input or end of input.
pub async fn run<R, W>(
    session: &mut Session,
    mut reader: R,
    mut writer: W,
    chat: &ChatConfig,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let separator = "-".repeat(BANNER_WIDTH);
    writer
        .write_all(format!("{separator}\n{BANNER_TEXT}\n{separator}\n").as_bytes())
        .await?;

    let mut line = String::new();
    loop {
        writer.write_all(chat.prompt.as_bytes()).await?;
        writer.flush().await?;

        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            debug!("input closed, ending session");
            break;
        }
        let input = line.trim_end_matches(['\r', '\n']);

        if is_sentinel(input) {
            break;
        }

        let reply = session.turn(input);
        writer
            .write_all(format!("{}{reply}\n\n", chat.reply_prefix).as_bytes())
            .await?;
    }

    let farewell = session.farewell();
    writer
        .write_all(format!("\n{}{farewell}\n", chat.reply_prefix).as_bytes())
        .await?;
    writer.flush().await?;
    Ok(())
}
