pub mod event_recorder;
pub mod http_client;

pub use event_recorder::{InMemoryRecorder, TracingRecorder};
pub use http_client::ReqwestHttp;
