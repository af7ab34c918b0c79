pub mod runtime;
pub mod validation;

pub use runtime::TOKIO_RT;
pub use validation::{validate_description, validate_image, validate_name, ValidationResult};
