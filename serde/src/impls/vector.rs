use std::mem;

use crate::{
    bit_reader::ReadableBitStream, bit_writer::WritableBitStream, codable::BitStreamCodable,
    error::BitStreamError,
};

/// A full-width element count, then the elements.
///
/// Messages that know a tighter bound on their count should write it
/// themselves with `append_u32_bits`. Zero-sized elements take no bits, so a
/// decoder only accepts as many of them as there are bits left after the count.
impl<T: BitStreamCodable> BitStreamCodable for Vec<T> {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        let length = u32::try_from(self.len()).map_err(|_| BitStreamError::EncodingError)?;
        stream.append_u32(length);
        for item in self {
            item.encode(stream)?;
        }
        Ok(())
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        let length = stream.read_u32()? as usize;
        if mem::size_of::<T>() == 0 && length > stream.remaining_bits() {
            return Err(BitStreamError::TooShort);
        }
        // only caps the allocation, a short stream still fails on the element that crosses the end
        let mut output = Vec::with_capacity(length.min(stream.remaining_bits()));
        for _ in 0..length {
            output.push(T::decode(stream)?);
        }
        Ok(output)
    }
}

// Tests
