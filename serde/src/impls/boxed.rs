use crate::{
    bit_reader::ReadableBitStream, bit_writer::WritableBitStream, codable::BitStreamCodable,
    error::BitStreamError,
};

impl<T: BitStreamCodable> BitStreamCodable for Box<T> {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        (**self).encode(stream)
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Box<T>, BitStreamError> {
        Ok(Box::new(T::decode(stream)?))
    }
}

// Tests
