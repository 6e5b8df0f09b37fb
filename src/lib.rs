pub mod api;
pub mod candidates;
pub mod config;
pub mod dialect;
pub mod error;
pub mod pattern;
pub mod scorer;
pub mod selector;
pub mod tokenizer;
pub mod typing;

pub use api::{detect, detect_ranked, detect_with_config, parse, DetectionResult};
pub use dialect::Dialect;
pub use error::{SniffError, SniffResult};
