use crate::{
    bit_reader::ReadableBitStream, bit_writer::WritableBitStream, codable::BitStreamCodable,
    error::BitStreamError,
};

// Unsigned integers are written at full width, least-significant bit first.
// Signed integers travel as their two's-complement bit pattern.

macro_rules! impl_narrow_unsigned {
    ($type:ty) => {
        impl BitStreamCodable for $type {
            fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
                stream.append_u32_bits(u32::from(*self), <$type>::BITS);
                Ok(())
            }

            fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
                let value = stream.read_u32_bits(<$type>::BITS)?;
                <$type>::try_from(value).map_err(|_| BitStreamError::EncodingError)
            }
        }
    };
}

impl_narrow_unsigned!(u8);
impl_narrow_unsigned!(u16);

impl BitStreamCodable for u32 {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        stream.append_u32(*self);
        Ok(())
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        stream.read_u32()
    }
}

/// Low word first, so the layout matches one contiguous LSB-first 64-bit field
impl BitStreamCodable for u64 {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        stream.append_u32(*self as u32);
        stream.append_u32((*self >> 32) as u32);
        Ok(())
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        let low = stream.read_u32()? as u64;
        let high = stream.read_u32()? as u64;
        Ok(low | (high << 32))
    }
}

impl BitStreamCodable for i32 {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        stream.append_u32(*self as u32);
        Ok(())
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        Ok(stream.read_u32()? as i32)
    }
}

impl BitStreamCodable for i64 {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        (*self as u64).encode(stream)
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        Ok(u64::decode(stream)? as i64)
    }
}

// Tests
