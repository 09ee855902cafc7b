/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports) the pipeline
/// uses to talk to external systems.
pub mod outbound;
