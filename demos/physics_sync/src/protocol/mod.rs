mod action;
mod physics;
mod team;

pub use action::{
    GameAction, GameVelocity, HitCatapult, LeverMove, PlayerProfile, ProjectileType, SlingData,
    StartGameMusicTime,
};
pub use physics::{PhysicsNodeData, PhysicsSyncData};
pub use team::Team;
