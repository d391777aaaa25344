/// Application layer - Use cases, DTOs and read models
///
/// This layer orchestrates the domain services and reaches the resource
/// path through the outbound ports.
pub mod dto;
pub mod read_models;
pub mod use_cases;
