use log::warn;

use crate::{
    bit_reader::ReadableBitStream, bit_writer::WritableBitStream, codable::BitStreamCodable,
    error::BitStreamError,
};

/// Strings travel as a UTF-8 byte blob
impl BitStreamCodable for String {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        stream.append_data(self.as_bytes());
        Ok(())
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        let bytes = stream.read_data()?;
        String::from_utf8(bytes).map_err(|error| {
            warn!("bit stream string is not valid UTF-8: {}", error);
            BitStreamError::EncodingError
        })
    }
}

// Tests
