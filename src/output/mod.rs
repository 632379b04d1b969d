pub mod sink;

pub use sink::{JsonlSink, RecordSink, TeamRecord, DEFAULT_OUTPUT_PATH};

use tracing::Span;

/// Per-run state threaded through the search: the result sink and the span
/// every log line of the run is recorded under.
#[derive(Debug)]
pub struct SearchContext<S> {
    sink: S,
    span: Span,
}

impl<S: RecordSink> SearchContext<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            span: tracing::info_span!("team_search"),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn emit(&mut self, record: &TeamRecord) -> crate::error::Result<()> {
        self.sink.append(record)
    }

    /// Release the sink. Dropping the context does the same.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
