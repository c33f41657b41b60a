use crate::{
    bit_reader::ReadableBitStream,
    bit_writer::WritableBitStream,
    error::{BitStreamError, DecodeError},
};

/// A trait for values that can be written to and read back from a bit stream.
///
/// `decode` must read exactly what `encode` wrote, in the same order. Deriving
/// the trait keeps the two halves in step; hand-written impls are on their own.
pub trait BitStreamCodable: Sized {
    /// Append Self to a WritableBitStream
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError>;

    /// Parse Self from a ReadableBitStream
    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError>;
}

/// Encodes a single value into a packed envelope ready for a transport
pub fn encode_packed<T: BitStreamCodable>(value: &T) -> Result<Vec<u8>, BitStreamError> {
    let mut stream = WritableBitStream::new();
    value.encode(&mut stream)?;
    Ok(stream.pack_data())
}

/// Decodes a single value from a packed envelope.
///
/// Bits left over after the value are not an error; use
/// [`ReadableBitStream::is_at_end`] directly when that matters.
pub fn decode_packed<T: BitStreamCodable>(data: impl Into<Vec<u8>>) -> Result<T, DecodeError> {
    let mut stream = ReadableBitStream::try_new(data)?;
    Ok(T::decode(&mut stream)?)
}
