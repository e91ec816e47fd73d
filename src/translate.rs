//! Client for the remote translation service.
//!
//! The service answers a prompt with a server-sent event stream: one
//! `data: {"text": "..."}` event per generated token, then `data: [DONE]`.
//! Chunks are accumulated into a buffer and the finished text is handed to
//! the transliterator; the engine itself knows nothing about the stream.

use std::io::{self, BufRead, BufReader};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, warn};

const DATA_FIELD: &str = "data:";
const DONE_SENTINEL: &str = "[DONE]";

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("no prompt provided")]
    EmptyPrompt,
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed event payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("translation worker panicked")]
    WorkerPanicked,
}

/// One decoded `data:` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    Text(String),
    Done,
}

#[derive(Deserialize)]
struct TextPayload {
    text: String,
}

#[derive(Serialize)]
struct PromptBody<'a> {
    prompt: &'a str,
}

/// Decode one line of the event stream.
///
/// Blank lines, comments and fields other than `data` yield `Ok(None)`.
pub fn parse_event(line: &str) -> Result<Option<StreamEvent>, TranslateError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(data) = line.strip_prefix(DATA_FIELD) else {
        return Ok(None);
    };
    let data = data.strip_prefix(' ').unwrap_or(data);
    if data == DONE_SENTINEL {
        return Ok(Some(StreamEvent::Done));
    }
    let payload: TextPayload = serde_json::from_str(data)?;
    Ok(Some(StreamEvent::Text(payload.text)))
}

/// How a stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// The `[DONE]` sentinel arrived.
    Done,
    /// The connection closed without a sentinel.
    Eof,
    Cancelled,
}

/// Text accumulated from a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub end: StreamEnd,
}

impl Translation {
    pub fn is_complete(&self) -> bool {
        self.end == StreamEnd::Done
    }

    /// The first non-empty `"..."` run of the text, trimmed.
    ///
    /// The service is prompted to answer with the translation in quotes, so
    /// this strips any commentary around it.
    pub fn clean_text(&self) -> Option<&str> {
        let mut rest = self.text.as_str();
        while let Some(open) = rest.find('"') {
            let quoted = &rest[open + 1..];
            let close = quoted.find('"')?;
            if close > 0 {
                return Some(quoted[..close].trim());
            }
            rest = quoted;
        }
        None
    }

    /// Render the translation in Baybayin: the quoted part when there is
    /// one, otherwise the whole text.
    pub fn transliterate(&self, canceller: &str, font: &str) -> String {
        let text = self.clean_text().unwrap_or(&self.text);
        baybayin_core::convert(text, canceller, font)
    }
}

/// Shared flag that stops a stream at the next event boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Read events from `reader` until `[DONE]`, end of input, or cancellation,
/// calling `on_chunk` for every text chunk as it arrives.
///
/// Events that fail to decode, or carry no `text`, are logged and skipped;
/// only I/O errors end the stream early.
pub fn read_stream<R: BufRead>(
    reader: R,
    cancel: &CancelToken,
    mut on_chunk: impl FnMut(&str),
) -> Result<Translation, TranslateError> {
    fn finish(text: String, end: StreamEnd, chunks: usize) -> Result<Translation, TranslateError> {
        debug!(chunks, len = text.len(), end = ?end);
        Ok(Translation { text, end })
    }

    let mut text = String::new();
    let mut chunks = 0usize;
    for line in reader.lines() {
        if cancel.is_cancelled() {
            return finish(text, StreamEnd::Cancelled, chunks);
        }
        let line = line?;
        let event = match parse_event(&line) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, line = %line, "skipping malformed event");
                continue;
            }
        };
        match event {
            Some(StreamEvent::Text(chunk)) if chunk.is_empty() => {}
            Some(StreamEvent::Text(chunk)) => {
                on_chunk(&chunk);
                text.push_str(&chunk);
                chunks += 1;
            }
            Some(StreamEvent::Done) => return finish(text, StreamEnd::Done, chunks),
            None => {}
        }
    }
    finish(text, StreamEnd::Eof, chunks)
}

/// HTTP client for a translation endpoint.
#[derive(Debug, Clone)]
pub struct TranslateClient {
    endpoint: String,
}

impl TranslateClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `{"prompt": ...}` and stream the response.
    pub fn translate(
        &self,
        prompt: &str,
        cancel: &CancelToken,
        on_chunk: impl FnMut(&str),
    ) -> Result<Translation, TranslateError> {
        if prompt.trim().is_empty() {
            return Err(TranslateError::EmptyPrompt);
        }
        let _span = debug_span!("translate", endpoint = %self.endpoint).entered();

        let body = serde_json::to_string(&PromptBody { prompt })?;
        let response = ureq::post(self.endpoint.as_str())
            .header("Content-Type", "application/json")
            .header("Accept", "text/event-stream")
            .send(body.as_str())
            .map_err(|e| TranslateError::Http(format!("{}: {e}", self.endpoint)))?;

        let reader = BufReader::new(response.into_body().into_reader());
        read_stream(reader, cancel, on_chunk)
    }
}

/// A translation running on a background thread.
///
/// Chunks are appended to a shared buffer as they arrive, so a caller can
/// re-render [`partial`](Self::partial) while the stream is still open.
pub struct TranslationTask {
    cancel: CancelToken,
    partial: Arc<Mutex<String>>,
    handle: JoinHandle<Result<Translation, TranslateError>>,
}

impl TranslationTask {
    pub fn spawn(client: TranslateClient, prompt: String) -> io::Result<Self> {
        Self::spawn_with(move |cancel, on_chunk| client.translate(&prompt, cancel, on_chunk))
    }

    /// Run the stream decoder over an already-open reader.
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> io::Result<Self> {
        Self::spawn_with(move |cancel, on_chunk| read_stream(reader, cancel, on_chunk))
    }

    fn spawn_with<F>(work: F) -> io::Result<Self>
    where
        F: FnOnce(&CancelToken, &mut dyn FnMut(&str)) -> Result<Translation, TranslateError>
            + Send
            + 'static,
    {
        let cancel = CancelToken::new();
        let partial = Arc::new(Mutex::new(String::new()));
        let handle = {
            let cancel = cancel.clone();
            let partial = Arc::clone(&partial);
            thread::Builder::new()
                .name("baybayin-translate".into())
                .spawn(move || {
                    let mut append = |chunk: &str| {
                        if let Ok(mut buf) = partial.lock() {
                            buf.push_str(chunk);
                        }
                    };
                    work(&cancel, &mut append)
                })?
        };
        Ok(Self {
            cancel,
            partial,
            handle,
        })
    }

    /// Text received so far.
    pub fn partial(&self) -> String {
        self.partial
            .lock()
            .map(|buf| buf.clone())
            .unwrap_or_default()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the stream to end.
    pub fn join(self) -> Result<Translation, TranslateError> {
        self.handle
            .join()
            .map_err(|_| TranslateError::WorkerPanicked)?
    }
}
