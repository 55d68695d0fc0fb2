//! Domain layer - Catalog abstractions
//!
//! Entity DTOs with their derived display fields, repository contracts,
//! field validation rules and domain error types. No Axum here.

pub mod catalog;
pub mod errors;
pub mod repositories;
pub mod validation;

pub use catalog::*;
pub use errors::DomainError;
pub use repositories::*;
pub use validation::{FieldError, ValidationErrors};
