pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod extractor;
pub mod llm;
pub mod normalize;
pub mod prompt;

use std::sync::Arc;

use cache::RequestCache;
use extractor::PageFetcher;
use llm::MetaGenerator;

/// Application state that will be shared across handlers.
///
/// The fetcher and generator sit behind trait objects so tests can swap
/// in stubs, and the cache handle is explicit rather than a module-level
/// static.
#[derive(Clone)]
pub struct AppState {
    pub cache: RequestCache,
    pub fetcher: Arc<dyn PageFetcher>,
    pub generator: Arc<dyn MetaGenerator>,
}
