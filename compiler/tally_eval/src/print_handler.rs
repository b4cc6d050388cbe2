//! Print handler for configurable output.
//!
//! `print` statements write through a handler owned by the caller:
//! - Stdout: the default
//! - Buffer: captured for inspection (tests, embedding)
//! - Tee: stdout plus capture
//! - Silent: discarded
//!
//! Uses enum dispatch instead of trait objects.

use std::sync::Arc;

use parking_lot::Mutex;

/// Default print handler that writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Print handler that captures output lines.
#[derive(Default)]
pub struct BufferPrintHandler {
    lines: Mutex<Vec<String>>,
}

impl BufferPrintHandler {
    /// Create a new buffer print handler.
    pub fn new() -> Self {
        BufferPrintHandler {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Record a line.
    pub fn println(&self, msg: &str) {
        self.lines.lock().push(msg.to_owned());
    }

    /// All captured output, each line terminated by a newline.
    pub fn get_output(&self) -> String {
        let lines = self.lines.lock();
        let mut out = String::new();
        for line in lines.iter() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// The captured lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// The most recently printed line.
    pub fn last_line(&self) -> Option<String> {
        self.lines.lock().last().cloned()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
    /// Writes to stdout and captures to a buffer.
    Tee(StdoutPrintHandler, BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Tee(out, buf) => {
                out.println(msg);
                buf.println(msg);
            }
            Self::Silent => {}
        }
    }

    fn buffer(&self) -> Option<&BufferPrintHandler> {
        match self {
            Self::Buffer(h) | Self::Tee(_, h) => Some(h),
            Self::Stdout(_) | Self::Silent => None,
        }
    }

    /// All captured output.
    ///
    /// Returns an empty string for handlers that don't capture.
    pub fn get_output(&self) -> String {
        self.buffer()
            .map(BufferPrintHandler::get_output)
            .unwrap_or_default()
    }

    /// Captured lines; empty for handlers that don't capture.
    pub fn lines(&self) -> Vec<String> {
        self.buffer()
            .map(BufferPrintHandler::lines)
            .unwrap_or_default()
    }

    /// The most recently captured line.
    pub fn last_line(&self) -> Option<String> {
        self.buffer().and_then(BufferPrintHandler::last_line)
    }

    /// Clear captured output.
    pub fn clear(&self) {
        if let Some(h) = self.buffer() {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a handler that prints to stdout and captures.
pub fn tee_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Tee(
        StdoutPrintHandler,
        BufferPrintHandler::new(),
    ))
}

/// Create a silent print handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;

    #[test]
    fn buffer_handler_captures_lines() {
        let handler = BufferPrintHandler::new();
        handler.println("hello");
        handler.println("world");
        assert_eq!(handler.get_output(), "hello\nworld\n");
        assert_eq!(handler.lines(), vec!["hello", "world"]);
        assert_eq!(handler.last_line().as_deref(), Some("world"));
    }

    #[test]
    fn buffer_handler_clear_empties_buffer() {
        let handler = buffer_handler();
        handler.println("hello");
        assert!(!handler.get_output().is_empty());
        handler.clear();
        assert!(handler.get_output().is_empty());
        assert_eq!(handler.last_line(), None);
    }

    #[test]
    fn empty_line_is_recorded() {
        let handler = buffer_handler();
        handler.println("");
        assert_eq!(handler.get_output(), "\n");
        assert_eq!(handler.lines(), vec![String::new()]);
    }

    #[test]
    fn tee_handler_captures() {
        let handler = tee_handler();
        handler.println("both");
        assert_eq!(handler.last_line().as_deref(), Some("both"));
    }

    #[test]
    fn stdout_handler_captures_nothing() {
        let handler = stdout_handler();
        handler.clear();
        assert_eq!(handler.get_output(), "");
        assert!(handler.lines().is_empty());
    }

    #[test]
    fn silent_handler_discards_output() {
        let handler = silent_handler();
        handler.println("hello");
        assert_eq!(handler.get_output(), "");
        assert_eq!(handler.last_line(), None);
    }

    #[test]
    fn buffer_handler_is_thread_safe() {
        use std::thread;

        let handler = buffer_handler();
        let handler2 = handler.clone();

        let t1 = thread::spawn(move || {
            for _ in 0..100 {
                handler2.println("a");
            }
        });

        for _ in 0..100 {
            handler.println("b");
        }

        t1.join().unwrap();

        assert_eq!(handler.lines().len(), 200);
    }
}
