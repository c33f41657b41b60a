use std::{f32::consts::TAU, time::Duration};

use bitstream_serde::{decode_packed, encode_packed, DecodeError, HEADER_SIZE_BYTES};
use log::info;

use crate::{
    config::SyncConfig,
    protocol::{
        GameAction, GameVelocity, HitCatapult, LeverMove, PhysicsNodeData, PhysicsSyncData,
        PlayerProfile, ProjectileType, SlingData, StartGameMusicTime, Team,
    },
};

/// Simulates one peer streaming physics snapshots to another over an ideal link
pub struct App {
    config: SyncConfig,
    packet_number: u16,
    tick: u32,
}

impl App {
    pub fn new(config: SyncConfig) -> Self {
        info!(
            "Physics sync demo started: {} nodes, {} projectiles",
            config.node_count, config.projectile_count
        );

        App {
            config,
            packet_number: 0,
            tick: 0,
        }
    }

    pub fn run(&mut self) -> Result<(), DecodeError> {
        for action in Self::lobby_actions() {
            let received = self.send(&action)?;
            info!("Received {:?}", received);
        }

        for _ in 0..self.config.packet_count {
            self.update()?;
        }

        Ok(())
    }

    // One of each message the game sends outside of physics updates
    fn lobby_actions() -> Vec<GameAction> {
        vec![
            GameAction::RequestKnockoutSync,
            GameAction::PlayerJoined(PlayerProfile {
                name: "Blue".to_string(),
                color: [45, 128, 208],
            }),
            GameAction::BoardLocation {
                world_map: vec![0x5A; 48],
            },
            GameAction::StartGameMusic(StartGameMusicTime {
                start_now: true,
                timestamps: vec![Duration::from_millis(1_250)],
            }),
            GameAction::LeverMove(LeverMove {
                lever_id: 2,
                euler_angle_x: 0.4,
            }),
            GameAction::CatapultRelease(SlingData {
                catapult_id: 1,
                projectile_type: ProjectileType::Chicken,
                velocity: GameVelocity {
                    origin: [0.0, 1.2, -4.0],
                    vector: [0.0, 6.5, 12.0],
                },
            }),
            GameAction::CatapultKnockOut(HitCatapult {
                catapult_id: 5,
                just_knocked_out: true,
                vortex: false,
            }),
            GameAction::OneHitKoPrepareAnimation,
        ]
    }

    fn update(&mut self) -> Result<(), DecodeError> {
        let snapshot = PhysicsSyncData {
            packet_number: self.packet_number,
            nodes: (0..self.config.node_count)
                .map(|index| self.simulate(index))
                .collect(),
            projectiles: (0..self.config.projectile_count)
                .map(|index| self.simulate(self.config.node_count + index))
                .collect(),
        };

        let received = self.send(&GameAction::Physics(snapshot.clone()))?;

        if let GameAction::Physics(received) = received {
            let max_error = snapshot
                .nodes
                .iter()
                .zip(received.nodes.iter())
                .flat_map(|(sent, received)| {
                    sent.position
                        .iter()
                        .zip(received.position.iter())
                        .map(|(a, b)| (a - b).abs())
                })
                .fold(0.0_f32, f32::max);
            info!(
                "Packet {} synced, largest position error {:.5}",
                received.packet_number, max_error
            );
        }

        self.packet_number = PhysicsSyncData::next_packet_number(self.packet_number);
        self.tick += 1;
        Ok(())
    }

    fn send(&self, action: &GameAction) -> Result<GameAction, DecodeError> {
        let packed = encode_packed(action)?;
        info!(
            "Sent {} bytes ({} payload)",
            packed.len(),
            packed.len() - HEADER_SIZE_BYTES
        );
        decode_packed(packed)
    }

    // A ring of blocks slowly orbiting the origin, every fifth one at rest
    fn simulate(&self, index: usize) -> PhysicsNodeData {
        if index % 17 == 16 {
            return PhysicsNodeData::dead();
        }

        let phase = index as f32 / self.config.node_count.max(1) as f32 * TAU;
        let angle = phase + self.tick as f32 * 0.05;
        let (sin, cos) = angle.sin_cos();
        let (half_sin, half_cos) = (angle * 0.5).sin_cos();

        let team = match index % 3 {
            0 => Team::None,
            1 => Team::TeamA,
            _ => Team::TeamB,
        };

        PhysicsNodeData {
            is_alive: true,
            is_moving: index % 5 != 0,
            team,
            position: [cos * 30.0, (index % 7) as f32 * 0.5, sin * 30.0],
            orientation: [0.0, half_sin, 0.0, half_cos],
            velocity: [-sin * 1.5, 0.0, cos * 1.5],
            angular_velocity: [0.0, 1.0, 0.0, 0.05],
        }
    }
}
