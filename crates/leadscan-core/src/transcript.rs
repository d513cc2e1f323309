//! Per-attempt progress transcript.
//!
//! Each submission attempt owns one buffer, appends progress lines as it
//! goes, and hands the accumulated text to an observability sink exactly
//! once at the end. `flush` consumes the buffer, so a second flush of the
//! same attempt does not compile.

use tracing::info;

/// Receives the flushed transcript of one attempt.
pub trait TranscriptSink {
    /// Publish the full accumulated text.
    fn publish(&self, transcript: &str);
}

/// Default sink: publishes through the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TranscriptSink for TracingSink {
    fn publish(&self, transcript: &str) {
        info!("submission transcript:\n{}", transcript);
    }
}

/// Ordered, append-only text accumulated during one submission attempt.
#[derive(Debug)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// Begin a transcript with a single entry.
    pub fn start(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
        }
    }

    /// Append an entry on a new line.
    pub fn append(&mut self, message: &str) {
        self.text.push('\n');
        self.text.push_str(message);
    }

    /// Continue the previous line, e.g. appending " ok!" after a
    /// "Doing X..." entry.
    pub fn append_inline(&mut self, message: &str) {
        self.text.push_str(message);
    }

    /// The accumulated text so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Hand the accumulated text to the sink, consuming the buffer.
    pub fn flush(self, sink: &dyn TranscriptSink) {
        sink.publish(&self.text);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    struct RecordingSink {
        published: RefCell<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                published: RefCell::new(Vec::new()),
            }
        }
    }

    impl TranscriptSink for RecordingSink {
        fn publish(&self, transcript: &str) {
            self.published.borrow_mut().push(transcript.to_string());
        }
    }

    #[test]
    fn test_append_starts_new_line() {
        let mut log = Transcript::start("Scan received.");
        log.append("Extracting fields...");
        assert_eq!(log.as_str(), "Scan received.\nExtracting fields...");
    }

    #[test]
    fn test_append_inline_continues_line() {
        let mut log = Transcript::start("Scan received.");
        log.append("Extracting fields...");
        log.append_inline(" ok!");
        assert_eq!(log.as_str(), "Scan received.\nExtracting fields... ok!");
    }

    #[test]
    fn test_flush_publishes_full_text() {
        let sink = RecordingSink::new();
        let mut log = Transcript::start("a");
        log.append("b");
        log.flush(&sink);

        let published = sink.published.borrow();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0], "a\nb");
    }
}
