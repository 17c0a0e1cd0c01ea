/// Resolution domain - models, policies and pure services
///
/// Nothing in this module performs I/O; content retrieval and file access
/// happen behind the outbound ports.
pub mod domain;
pub mod policies;
pub mod services;
