use std::default::Default;

use log::LevelFilter;

/// Contains the settings used to drive a simulated sync session
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// Number of physics bodies in the scene. At most 511 fit in one packet.
    pub node_count: usize,
    /// Number of projectiles in flight
    pub projectile_count: usize,
    /// How many physics packets to send before stopping
    pub packet_count: u16,
    /// Level passed to the logger
    pub log_level: LevelFilter,
}

impl SyncConfig {
    /// Creates a new SyncConfig, used to initialize an App
    pub fn new(
        node_count: usize,
        projectile_count: usize,
        packet_count: u16,
        log_level: LevelFilter,
    ) -> Self {
        SyncConfig {
            node_count,
            projectile_count,
            packet_count,
            log_level,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            node_count: 120,
            projectile_count: 4,
            packet_count: 5,
            log_level: LevelFilter::Info,
        }
    }
}
