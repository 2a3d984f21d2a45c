use super::AppError;

/// Source of user input lines.
///
/// `ask` shows `prompt` and waits until a line is available. Implementations
/// return `AppError::InputClosed` once no more lines can arrive.
#[allow(async_fn_in_trait)]
pub trait LineReader {
    async fn ask(&mut self, prompt: &str) -> Result<String, AppError>;
}

/// Sink for user-visible output lines.
pub trait LineWriter {
    fn emit(&mut self, line: &str);
}

/// Collects emitted lines in memory.
impl LineWriter for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
