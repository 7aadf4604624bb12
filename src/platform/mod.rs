// Platform-specific code module

pub mod diskstats;
pub mod network;
pub mod smartctl;

// Re-exports for cleaner imports
pub use diskstats::ProcDiskStats;
pub use network::SysinfoNetworkSource;
pub use smartctl::SmartctlSampler;
