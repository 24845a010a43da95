pub mod backend;

pub use backend::gemini::GeminiBackend;
pub use backend::mock::MockModel;
pub use backend::{GenerateRequest, TextModel};
