pub mod api_key;
pub mod request_logger;

pub use api_key::{API_KEY_HEADER, ApiKeyGate};
pub use request_logger::RequestLogger;
