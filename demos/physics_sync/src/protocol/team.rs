use bitstream_serde::{BitStreamCodable, BitStreamError, ReadableBitStream, WritableBitStream};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Team {
    #[default]
    None,
    TeamA,
    TeamB,
}

// Nearly every block belongs to no team, so that case gets a single bit
// instead of the two a plain tag would need.
impl BitStreamCodable for Team {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        match self {
            Team::None => stream.append_bool(false),
            Team::TeamA => {
                stream.append_bool(true);
                stream.append_bool(true);
            }
            Team::TeamB => {
                stream.append_bool(true);
                stream.append_bool(false);
            }
        }
        Ok(())
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        if !stream.read_bool()? {
            return Ok(Team::None);
        }
        if stream.read_bool()? {
            Ok(Team::TeamA)
        } else {
            Ok(Team::TeamB)
        }
    }
}
