use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tracing::debug;

use crate::application::{AppError, LineReader, LineWriter};

/// Reads answers from standard input, printing prompts to standard output.
///
/// Bytes that aren't valid UTF-8 become replacement characters, so a garbled
/// line is rejected like any other bad answer instead of ending the session.
pub struct StdinReader {
    reader: BufReader<Stdin>,
    buffer: Vec<u8>,
}

impl StdinReader {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            buffer: Vec::new(),
        }
    }
}

impl Default for StdinReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader for StdinReader {
    async fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        {
            let mut stdout = io::stdout().lock();
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;
        }

        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer).await? == 0 {
            return Err(AppError::InputClosed {
                prompt: prompt.to_string(),
            });
        }

        Ok(decode_line(&self.buffer))
    }
}

/// Lossily decode one raw input line, dropping the `\n` or `\r\n` terminator.
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

/// Prints each line to standard output.
///
/// A closed pipe (e.g. `acctmgr | head -1`) is not an error for the session.
pub struct StdoutWriter;

impl LineWriter for StdoutWriter {
    fn emit(&mut self, line: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{}", line) {
            debug!(%err, "Dropped output line");
        }
    }
}
