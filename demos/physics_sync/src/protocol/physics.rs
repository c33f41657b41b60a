use std::f32::consts::FRAC_1_SQRT_2;

use bitstream_serde::{
    BitStreamCodable, BitStreamError, FloatCompressor, ReadableBitStream, WritableBitStream,
};
use log::warn;

use super::Team;

const POSITION: FloatCompressor = FloatCompressor::new(-80.0, 80.0, 16);
// the three smallest components of a unit quaternion never exceed 1/sqrt(2)
const ORIENTATION: FloatCompressor = FloatCompressor::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2, 12);
const VELOCITY: FloatCompressor = FloatCompressor::new(-200.0, 200.0, 16);
const ANGULAR_VELOCITY_AXIS: FloatCompressor = FloatCompressor::new(-1.0, 1.0, 12);
const ANGULAR_VELOCITY_MAGNITUDE: FloatCompressor = FloatCompressor::new(-200.0, 200.0, 16);

const PACKET_NUMBER_BITS: u32 = 12;
const NODE_COUNT_BITS: u32 = 9;

/// Packet numbers wrap around at this value
pub const MAX_PACKET_NUMBER: u16 = 1 << PACKET_NUMBER_BITS;
const MAX_NODE_COUNT: usize = (1 << NODE_COUNT_BITS) - 1;

/// Snapshot of one rigid body.
///
/// `orientation` is a unit quaternion as `[x, y, z, w]`. `angular_velocity`
/// holds a rotation axis in `xyz` and its magnitude in `w`. Velocities are only
/// sent while the body is moving.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsNodeData {
    pub is_alive: bool,
    pub is_moving: bool,
    pub team: Team,
    pub position: [f32; 3],
    pub orientation: [f32; 4],
    pub velocity: [f32; 3],
    pub angular_velocity: [f32; 4],
}

impl Default for PhysicsNodeData {
    fn default() -> Self {
        Self {
            is_alive: true,
            is_moving: false,
            team: Team::None,
            position: [0.0; 3],
            orientation: [0.0, 0.0, 0.0, 1.0],
            velocity: [0.0; 3],
            angular_velocity: [0.0; 4],
        }
    }
}

impl PhysicsNodeData {
    /// A body that has been destroyed. Only the liveness bit is sent.
    pub fn dead() -> Self {
        Self {
            is_alive: false,
            ..Self::default()
        }
    }

    fn write_orientation(&self, stream: &mut WritableBitStream) {
        let mut vector = self.orientation;

        let mut max_component = 0;
        for index in 1..4 {
            if vector[index].abs() > vector[max_component].abs() {
                max_component = index;
            }
        }
        stream.append_u32_bits(max_component as u32, 2);

        // q and -q are the same rotation, so the largest component is always sent positive
        if vector[max_component] < 0.0 {
            for component in vector.iter_mut() {
                *component = -*component;
            }
        }

        for (index, component) in vector.iter().enumerate() {
            if index != max_component {
                ORIENTATION.write(*component, stream);
            }
        }
    }

    fn read_orientation(stream: &mut ReadableBitStream) -> Result<[f32; 4], BitStreamError> {
        let max_component = stream.read_u32_bits(2)? as usize;

        let mut vector = [0.0_f32; 4];
        let mut square_sum = 0.0;
        for index in 0..4 {
            if index != max_component {
                vector[index] = ORIENTATION.read(stream)?;
                square_sum += vector[index] * vector[index];
            }
        }
        vector[max_component] = (1.0 - square_sum).max(0.0).sqrt();

        Ok(vector)
    }

    fn write_angular_velocity(&self, stream: &mut WritableBitStream) {
        let [x, y, z, magnitude] = self.angular_velocity;

        let mut axis = [x, y, z];
        let length = (x * x + y * y + z * z).sqrt();
        if length.is_finite() && length > 0.0 {
            for component in axis.iter_mut() {
                *component /= length;
            }
        } else {
            axis = [0.0; 3];
        }
        let magnitude = if magnitude.is_finite() { magnitude } else { 0.0 };

        ANGULAR_VELOCITY_AXIS.write_vec3(axis, stream);
        ANGULAR_VELOCITY_MAGNITUDE.write(magnitude, stream);
    }
}

impl BitStreamCodable for PhysicsNodeData {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        stream.append_bool(self.is_alive);
        if !self.is_alive {
            return Ok(());
        }
        stream.append_bool(self.is_moving);
        stream.write(&self.team)?;

        POSITION.write_vec3(self.position, stream);
        self.write_orientation(stream);

        if self.is_moving {
            VELOCITY.write_vec3(self.velocity, stream);
            self.write_angular_velocity(stream);
        }
        Ok(())
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        if !stream.read_bool()? {
            return Ok(Self::dead());
        }
        let is_moving = stream.read_bool()?;
        let team = stream.read()?;

        let position = POSITION.read_vec3(stream)?;
        let orientation = Self::read_orientation(stream)?;

        let mut node = Self {
            is_alive: true,
            is_moving,
            team,
            position,
            orientation,
            ..Self::default()
        };

        if is_moving {
            node.velocity = VELOCITY.read_vec3(stream)?;
            let [x, y, z] = ANGULAR_VELOCITY_AXIS.read_vec3(stream)?;
            let magnitude = ANGULAR_VELOCITY_MAGNITUDE.read(stream)?;
            node.angular_velocity = [x, y, z, magnitude];
        }

        Ok(node)
    }
}

/// One physics update: every tracked body and projectile in the scene
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhysicsSyncData {
    pub packet_number: u16,
    pub nodes: Vec<PhysicsNodeData>,
    pub projectiles: Vec<PhysicsNodeData>,
}

impl PhysicsSyncData {
    /// The packet number that follows `packet_number`, wrapping at [`MAX_PACKET_NUMBER`]
    pub fn next_packet_number(packet_number: u16) -> u16 {
        packet_number.wrapping_add(1) % MAX_PACKET_NUMBER
    }

    fn write_nodes(
        nodes: &[PhysicsNodeData],
        stream: &mut WritableBitStream,
    ) -> Result<(), BitStreamError> {
        if nodes.len() > MAX_NODE_COUNT {
            warn!(
                "cannot sync {} nodes in one packet, the limit is {}",
                nodes.len(),
                MAX_NODE_COUNT
            );
            return Err(BitStreamError::EncodingError);
        }
        stream.append_u32_bits(nodes.len() as u32, NODE_COUNT_BITS);
        for node in nodes {
            node.encode(stream)?;
        }
        Ok(())
    }

    fn read_nodes(stream: &mut ReadableBitStream) -> Result<Vec<PhysicsNodeData>, BitStreamError> {
        let count = stream.read_u32_bits(NODE_COUNT_BITS)?;
        (0..count).map(|_| stream.read()).collect()
    }
}

impl BitStreamCodable for PhysicsSyncData {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        if self.packet_number >= MAX_PACKET_NUMBER {
            warn!(
                "packet number {} does not fit in {} bits",
                self.packet_number, PACKET_NUMBER_BITS
            );
            return Err(BitStreamError::EncodingError);
        }
        stream.append_u32_bits(u32::from(self.packet_number), PACKET_NUMBER_BITS);
        Self::write_nodes(&self.nodes, stream)?;
        Self::write_nodes(&self.projectiles, stream)
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        let packet_number = stream.read_u32_bits(PACKET_NUMBER_BITS)? as u16;
        let nodes = Self::read_nodes(stream)?;
        let projectiles = Self::read_nodes(stream)?;

        Ok(Self {
            packet_number,
            nodes,
            projectiles,
        })
    }
}

#[cfg(test)]
mod tests {
    use bitstream_serde::{
        decode_packed, encode_packed, BitStreamError, ReadableBitStream, WritableBitStream,
    };

    use super::{PhysicsNodeData, PhysicsSyncData, MAX_PACKET_NUMBER, POSITION, VELOCITY};
    use crate::protocol::Team;

    fn moving_node() -> PhysicsNodeData {
        // 90 degrees around y
        let half = std::f32::consts::FRAC_1_SQRT_2;
        PhysicsNodeData {
            is_alive: true,
            is_moving: true,
            team: Team::TeamA,
            position: [10.0, -3.5, 42.25],
            orientation: [0.0, -half, 0.0, -half],
            velocity: [1.5, -20.0, 0.0],
            angular_velocity: [0.0, 2.0, 0.0, 12.0],
        }
    }

    fn assert_close(a: f32, b: f32, tolerance: f32) {
        assert!((a - b).abs() <= tolerance, "{} != {}", a, b);
    }

    #[test]
    fn dead_node_is_one_bit() {
        let mut writer = WritableBitStream::new();
        writer.write(&PhysicsNodeData::dead()).unwrap();
        assert_eq!(writer.bit_len(), 1);

        let mut reader = ReadableBitStream::new(writer.pack_data());
        assert!(!reader.read::<PhysicsNodeData>().unwrap().is_alive);
    }

    #[test]
    fn resting_node_skips_velocities() {
        let node = PhysicsNodeData {
            is_moving: false,
            ..moving_node()
        };

        let mut writer = WritableBitStream::new();
        writer.write(&node).unwrap();

        // alive, moving, team a, position, orientation index and three components
        assert_eq!(writer.bit_len(), 1 + 1 + 2 + 3 * 16 + 2 + 3 * 12);
    }

    #[test]
    fn moving_node_round_trip() {
        let in_node = moving_node();

        let mut writer = WritableBitStream::new();
        writer.write(&in_node).unwrap();

        let mut reader = ReadableBitStream::new(writer.pack_data());
        let out_node: PhysicsNodeData = reader.read().unwrap();
        assert!(reader.is_at_end());

        assert!(out_node.is_alive && out_node.is_moving);
        assert_eq!(out_node.team, Team::TeamA);
        for axis in 0..3 {
            assert_close(in_node.position[axis], out_node.position[axis], POSITION.max_error());
            assert_close(in_node.velocity[axis], out_node.velocity[axis], VELOCITY.max_error());
        }

        // the sign flip sends -q, which is the same rotation
        let dot: f32 = in_node
            .orientation
            .iter()
            .zip(out_node.orientation.iter())
            .map(|(a, b)| a * b)
            .sum();
        assert_close(dot.abs(), 1.0, 0.001);

        assert_close(out_node.angular_velocity[1], 1.0, 0.001);
        assert_close(out_node.angular_velocity[3], 12.0, 0.01);
    }

    #[test]
    fn sync_data_round_trip() {
        let in_data = PhysicsSyncData {
            packet_number: 4095,
            nodes: vec![moving_node(), PhysicsNodeData::dead(), PhysicsNodeData::default()],
            projectiles: vec![moving_node()],
        };

        let packed = encode_packed(&in_data).unwrap();
        let out_data: PhysicsSyncData = decode_packed(packed).unwrap();

        assert_eq!(out_data.packet_number, 4095);
        assert_eq!(out_data.nodes.len(), 3);
        assert_eq!(out_data.projectiles.len(), 1);
        assert!(!out_data.nodes[1].is_alive);
        assert_close(out_data.nodes[2].orientation[3], 1.0, 0.001);
    }

    #[test]
    fn too_many_nodes() {
        let in_data = PhysicsSyncData {
            packet_number: 0,
            nodes: vec![PhysicsNodeData::dead(); 512],
            projectiles: Vec::new(),
        };

        assert_eq!(encode_packed(&in_data), Err(BitStreamError::EncodingError));
    }

    #[test]
    fn packet_numbers_wrap() {
        assert_eq!(PhysicsSyncData::next_packet_number(7), 8);
        assert_eq!(PhysicsSyncData::next_packet_number(MAX_PACKET_NUMBER - 1), 0);
        assert_eq!(PhysicsSyncData::next_packet_number(u16::MAX), 0);
    }

    #[test]
    fn packet_number_out_of_range() {
        let in_data = PhysicsSyncData {
            packet_number: MAX_PACKET_NUMBER,
            ..PhysicsSyncData::default()
        };

        assert_eq!(encode_packed(&in_data), Err(BitStreamError::EncodingError));
    }
}
