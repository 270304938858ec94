use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::thread;

use seek_logging::seek_debug;

use crate::client::{GithubSearcher, SearchSettings, Searcher};
use crate::{EngineEvent, RequestId, SearchError};

enum EngineCommand {
    Search { request: RequestId, query: String },
    Cancel { request: RequestId },
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let searcher = Arc::new(GithubSearcher::new(settings)?);
        Ok(Self::with_searcher(searcher))
    }

    /// Runs the engine over any searcher; tests substitute stubs here.
    pub fn with_searcher(searcher: Arc<dyn Searcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut in_flight: HashMap<RequestId, tokio::task::JoinHandle<()>> = HashMap::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Search { request, query } => {
                        seek_debug!("search issued request={} query={}", request, query);
                        let searcher = searcher.clone();
                        let event_tx = event_tx.clone();
                        let handle = runtime.spawn(async move {
                            let result = searcher.search(&query).await;
                            let _ = event_tx.send(EngineEvent::SearchCompleted { request, result });
                        });
                        in_flight.insert(request, handle);
                    }
                    EngineCommand::Cancel { request } => {
                        if let Some(handle) = in_flight.remove(&request) {
                            seek_debug!("search aborted request={}", request);
                            handle.abort();
                        }
                    }
                }
                in_flight.retain(|_, handle| !handle.is_finished());
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn search(&self, request: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            request,
            query: query.into(),
        });
    }

    /// Aborts the request's task if it is still running. Best effort: a
    /// completion that already reached the event channel still arrives.
    pub fn cancel(&self, request: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { request });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}
