/// Application layer - component info resolution use case and its DTOs
///
/// Chains the pure resolution services per package and runs batches
/// against the outbound ports.
pub mod dto;
pub mod use_cases;
