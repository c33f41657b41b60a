use std::time::Duration;

use bitstream_serde::{
    BitEnum, BitStreamCodable, BitStreamError, ReadableBitStream, WritableBitStream,
};
use log::warn;
use serde::{Deserialize, Serialize};

use super::PhysicsSyncData;

#[derive(BitEnum, BitStreamCodable, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectileType {
    #[default]
    None,
    Cannonball,
    Chicken,
}

/// Origin and velocity vector of a launch, sent at full precision
#[derive(BitStreamCodable, Clone, Copy, Debug, Default, PartialEq)]
pub struct GameVelocity {
    pub origin: [f32; 3],
    pub vector: [f32; 3],
}

#[derive(BitStreamCodable, Clone, Copy, Debug, PartialEq)]
pub struct SlingData {
    #[bitstream(bits = 4)]
    pub catapult_id: u8,
    pub projectile_type: ProjectileType,
    pub velocity: GameVelocity,
}

/// A catapult was knocked over
#[derive(BitStreamCodable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitCatapult {
    #[bitstream(bits = 4)]
    pub catapult_id: u8,
    pub just_knocked_out: bool,
    pub vortex: bool,
}

#[derive(BitStreamCodable, Clone, Copy, Debug, PartialEq)]
pub struct LeverMove {
    #[bitstream(bits = 3)]
    pub lever_id: u8,
    pub euler_angle_x: f32,
}

/// Rarely sent, so it rides the serde bridge instead of a hand-tuned layout
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub color: [u8; 3],
}

/// Music synchronization handshake.
///
/// Timestamps travel as whole milliseconds in 32 bits behind a 4-bit count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartGameMusicTime {
    pub start_now: bool,
    pub timestamps: Vec<Duration>,
}

impl StartGameMusicTime {
    const COUNT_BITS: u32 = 4;
    const MAX_COUNT: usize = (1 << Self::COUNT_BITS) - 1;
}

impl BitStreamCodable for StartGameMusicTime {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        if self.timestamps.len() > Self::MAX_COUNT {
            warn!(
                "cannot encode {} timestamps, the limit is {}",
                self.timestamps.len(),
                Self::MAX_COUNT
            );
            return Err(BitStreamError::EncodingError);
        }

        let mut milliseconds = Vec::with_capacity(self.timestamps.len());
        for timestamp in &self.timestamps {
            let millis =
                u32::try_from(timestamp.as_millis()).map_err(|_| BitStreamError::EncodingError)?;
            milliseconds.push(millis);
        }

        stream.append_bool(self.start_now);
        stream.append_u32_bits(milliseconds.len() as u32, Self::COUNT_BITS);
        for millis in milliseconds {
            stream.append_u32(millis);
        }
        Ok(())
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        let start_now = stream.read_bool()?;
        let count = stream.read_u32_bits(Self::COUNT_BITS)?;

        let mut timestamps = Vec::with_capacity(count as usize);
        for _ in 0..count {
            timestamps.push(Duration::from_millis(u64::from(stream.read_u32()?)));
        }

        Ok(Self {
            start_now,
            timestamps,
        })
    }
}

#[derive(BitStreamCodable, Clone, Debug, PartialEq)]
pub enum GameAction {
    OneHitKoPrepareAnimation,
    CatapultRelease(SlingData),
    RequestKnockoutSync,
    CatapultKnockOut(HitCatapult),
    LeverMove(LeverMove),
    Physics(PhysicsSyncData),
    StartGameMusic(StartGameMusicTime),
    BoardLocation {
        #[bitstream(data)]
        world_map: Vec<u8>,
    },
    PlayerJoined(#[bitstream(bridge)] PlayerProfile),
}
