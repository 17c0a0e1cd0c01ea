/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod resolve_request;
mod resolve_response;

pub use resolve_request::{ResolveRequest, DEFAULT_MAX_CONCURRENT};
pub use resolve_response::{ResolutionFailure, ResolveResponse};
