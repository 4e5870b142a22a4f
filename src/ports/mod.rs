/// Ports module defining interfaces for hexagonal architecture
///
/// The dependency-tree core never performs I/O itself. Everything it needs
/// from the outside world (scan results, filter criteria, descriptor files,
/// rendering) crosses one of these driven ports.
pub mod outbound;
