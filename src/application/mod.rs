/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod project_registry;
pub mod read_models;
pub mod use_cases;

pub use project_registry::ProjectRegistry;
