/// Ports of the hexagon
///
/// `inbound` holds what the CLI drives (component info resolution),
/// `outbound` holds what the resolution needs from the outside: scan
/// results, curations, remote content, progress output and the final sink.
pub mod inbound;
pub mod outbound;
