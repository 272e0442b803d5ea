use std::sync::{mpsc, Arc};
use std::thread;

use storefront_logging::{sf_debug, sf_error};

use crate::catalog::CatalogClient;
use crate::fetch::FetchSettings;
use crate::{EngineEvent, FetchError, RequestId};

/// Receives engine events on the runtime's worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid catalog endpoint: {0}")]
    Endpoint(#[from] FetchError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    FetchProducts { request_id: RequestId },
}

/// Handle to the background fetch runtime. Dropping it stops the runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let client = CatalogClient::from_settings(settings)?;
        Self::with_client(client, sink)
    }

    pub fn with_client(client: CatalogClient, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        sf_debug!("Catalog engine started for {}", client.endpoint());

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(&client, command, sink.as_ref()).await;
                });
            }
            sf_debug!("Catalog engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    /// Queue one listing request. Requests are never de-duplicated.
    pub fn fetch_products(&self, request_id: RequestId) {
        if self
            .cmd_tx
            .send(EngineCommand::FetchProducts { request_id })
            .is_err()
        {
            sf_error!("Catalog engine is gone; request {} dropped", request_id);
        }
    }
}

async fn handle_command(client: &CatalogClient, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::FetchProducts { request_id } => {
            let result = client.list_products().await;
            sink.emit(EngineEvent::FeedFetched { request_id, result });
        }
    }
}
