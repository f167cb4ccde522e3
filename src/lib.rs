pub mod apis;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod types;

// Application use cases and the ports they depend on
pub mod app;
// Adapters implementing those ports
pub mod infra;

pub use app::import_use_case::{ImportOutcome, ImportReport, ImportUseCase};
pub use error::{ImportError, Result};
pub use types::{GameSource, Source, TitleList};
