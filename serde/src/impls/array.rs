use crate::{
    bit_reader::ReadableBitStream, bit_writer::WritableBitStream, codable::BitStreamCodable,
    error::BitStreamError,
};

/// Fixed-size arrays carry no length, just each element in order
impl<T: BitStreamCodable, const N: usize> BitStreamCodable for [T; N] {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        for item in self {
            item.encode(stream)?;
        }
        Ok(())
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::decode(stream)?);
        }
        items
            .try_into()
            .map_err(|_: Vec<T>| BitStreamError::EncodingError)
    }
}

// Tests
