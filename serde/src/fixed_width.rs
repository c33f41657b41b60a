use crate::{bit_reader::ReadableBitStream, bit_writer::WritableBitStream, error::BitStreamError};

/// Unsigned integers that can be written in an explicit number of bits.
///
/// Used by `#[bitstream(bits = N)]` fields: counts, ids and other values whose
/// range the message schema bounds. Writing a value that needs more than the
/// given bits drops the high bits, the same as
/// [`WritableBitStream::append_u32_bits`].
pub trait FixedWidth: Sized {
    fn write_fixed(&self, number_of_bits: u32, stream: &mut WritableBitStream);

    fn read_fixed(
        number_of_bits: u32,
        stream: &mut ReadableBitStream,
    ) -> Result<Self, BitStreamError>;
}

macro_rules! impl_fixed_width {
    ($type:ty) => {
        impl FixedWidth for $type {
            fn write_fixed(&self, number_of_bits: u32, stream: &mut WritableBitStream) {
                stream.append_u32_bits(*self as u32, number_of_bits);
            }

            fn read_fixed(
                number_of_bits: u32,
                stream: &mut ReadableBitStream,
            ) -> Result<Self, BitStreamError> {
                let value = stream.read_u32_bits(number_of_bits)?;
                <$type>::try_from(value).map_err(|_| BitStreamError::EncodingError)
            }
        }
    };
}

impl_fixed_width!(u8);
impl_fixed_width!(u16);
impl_fixed_width!(u32);
impl_fixed_width!(usize);
