use crate::app::ports::{EventRecorderPort, ImportEvent};
use std::sync::Mutex;
use tracing::{debug, error};

/// Forwards import events to `tracing`
#[derive(Default)]
pub struct TracingRecorder;

impl EventRecorderPort for TracingRecorder {
    fn record(&self, event: ImportEvent) {
        match event {
            ImportEvent::Fetched { source, status, bytes } => {
                debug!(source = %source, status, bytes, "fetched profile page");
            }
            ImportEvent::RowSkipped { source, row_index } => {
                error!(source = %source, row_index, "{} import: row has no title element", source);
            }
        }
    }
}

/// Keeps every event in memory, and optionally forwards them to another recorder
#[derive(Default)]
pub struct InMemoryRecorder {
    events: Mutex<Vec<ImportEvent>>,
    forward: Option<Box<dyn EventRecorderPort>>,
}

impl InMemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forwarding_to(inner: Box<dyn EventRecorderPort>) -> Self {
        Self { events: Mutex::new(Vec::new()), forward: Some(inner) }
    }

    pub fn events(&self) -> Vec<ImportEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn skipped_rows(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ImportEvent::RowSkipped { .. }))
            .count()
    }
}

impl EventRecorderPort for InMemoryRecorder {
    fn record(&self, event: ImportEvent) {
        if let Some(inner) = &self.forward {
            inner.record(event.clone());
        }
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
