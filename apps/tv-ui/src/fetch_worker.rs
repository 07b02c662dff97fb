//! Background fetch thread.
//!
//! One long-lived worker owns the HTTP client. The UI submits stamped
//! requests through a channel; the worker drains the queue down to the
//! newest request before calling the service, so a burst of superseded
//! requests costs at most one wasted fetch. Late results are additionally
//! dropped by the session's stamp check on arrival.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};
use tv_core::FetchRequest;
use tv_data::DiagramDataClient;
use tv_session::TaggedResult;

pub struct FetchWorker {
    request_tx: Sender<FetchRequest>,
    result_rx: Receiver<TaggedResult>,
    latest: Arc<AtomicU64>,
    _handle: JoinHandle<()>,
}

impl FetchWorker {
    pub fn start(client: DiagramDataClient) -> Self {
        let (request_tx, request_rx) = channel::<FetchRequest>();
        let (result_tx, result_rx) = channel();
        let latest = Arc::new(AtomicU64::new(0));
        let latest_seen = Arc::clone(&latest);

        let handle = thread::spawn(move || {
            while let Ok(mut request) = request_rx.recv() {
                // Coalesce: everything already queued behind this request is
                // superseded, keep only the newest.
                while let Ok(newer) = request_rx.try_recv() {
                    request = newer;
                }
                if request.stamp.value() < latest_seen.load(Ordering::Acquire) {
                    debug!(
                        stamp = request.stamp.value(),
                        "skipping superseded request without fetching"
                    );
                    continue;
                }

                let result = client.fetch(&request);
                if result_tx
                    .send(TaggedResult {
                        stamp: request.stamp,
                        result,
                    })
                    .is_err()
                {
                    warn!("result channel closed, stopping fetch worker");
                    return;
                }
            }
        });

        Self {
            request_tx,
            result_rx,
            latest,
            _handle: handle,
        }
    }

    /// Queue a request. Marks every earlier stamp as superseded so the
    /// worker can skip them without fetching.
    pub fn submit(&self, request: FetchRequest) {
        self.latest.store(request.stamp.value(), Ordering::Release);
        let _ = self.request_tx.send(request);
    }

    /// Non-blocking poll for finished fetches; called once per frame.
    pub fn try_recv(&self) -> Option<TaggedResult> {
        self.result_rx.try_recv().ok()
    }
}
