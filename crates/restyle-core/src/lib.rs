pub mod error;
pub mod settings;
pub mod style;

pub use error::RestyleError;
pub use settings::GenerationSettings;
pub use style::Style;
