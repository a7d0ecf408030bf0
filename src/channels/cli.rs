//! CLI channel: stdin/stdout REPL for local testing.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::reply_to;
use crate::pipeline::Responder;

const QUIT_COMMAND: &str = "/quit";

/// A simple CLI channel that reads from stdin and writes to stdout.
pub struct CliChannel {
    responder: Arc<Responder>,
}

impl CliChannel {
    pub fn new(responder: Arc<Responder>) -> Self {
        Self { responder }
    }

    /// Run against the process stdin/stdout until EOF or `/quit`.
    pub async fn run(&self) -> std::io::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }

    /// Run the REPL over any line reader and writer.
    pub async fn run_with<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        eprint!("> ");
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line == QUIT_COMMAND {
                break;
            }

            let reply = reply_to(&self.responder, line);
            writer.write_all(format!("{reply}\n").as_bytes()).await?;
            writer.flush().await?;
            eprint!("> ");
        }

        tracing::debug!("CLI channel closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::EMPTY_MESSAGE_REPLY;
    use crate::pipeline::handlers::GREETING_REPLY;

    #[tokio::test]
    async fn answers_each_line_until_quit() {
        let channel = CliChannel::new(Arc::new(Responder::default()));
        let input: &[u8] = b"hello\n\ntrack order 1234\n/quit\nhey\n";
        let mut output = Vec::new();

        channel.run_with(input, &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                GREETING_REPLY,
                EMPTY_MESSAGE_REPLY,
                "Your order 1234 status: Delivered on 25-11-2025",
            ]
        );
    }

    #[tokio::test]
    async fn stops_at_eof() {
        let channel = CliChannel::new(Arc::new(Responder::default()));
        let input: &[u8] = b"xyz";
        let mut output = Vec::new();

        channel.run_with(input, &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.lines().count(), 1);
    }
}
