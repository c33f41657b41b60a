use log::{debug, warn};

use crate::{
    codable::BitStreamCodable,
    constants::{HEADER_SIZE_BYTES, U32_BITS},
    enumeration::BitEnum,
    error::{BitStreamError, EnvelopeError},
};

/// A cursor that replays typed reads against a packed bit stream.
///
/// Reads must mirror, in order and in type, the appends that produced the
/// stream. Nothing in the bytes says what comes next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadableBitStream {
    bytes: Vec<u8>,
    end_bit_index: usize,
    current_bit: usize,
}

impl ReadableBitStream {
    /// Wraps a packed envelope.
    ///
    /// # Panics
    ///
    /// If the envelope is malformed, see [`ReadableBitStream::try_new`].
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        match Self::try_new(data) {
            Ok(stream) => stream,
            Err(error) => panic!("failed to init bit stream: {}", error),
        }
    }

    /// Wraps a packed envelope, stripping its bit count header.
    pub fn try_new(data: impl Into<Vec<u8>>) -> Result<Self, EnvelopeError> {
        let mut bytes = data.into();

        if bytes.len() < HEADER_SIZE_BYTES {
            debug!("rejecting {}-byte envelope without a header", bytes.len());
            return Err(EnvelopeError::MissingHeader {
                length: bytes.len(),
            });
        }

        let header = [bytes[0], bytes[1], bytes[2], bytes[3]];
        let end_bit_index = u32::from_le_bytes(header) as usize;
        bytes.drain(..HEADER_SIZE_BYTES);

        let available = bytes.len() * 8;
        if end_bit_index > available {
            debug!(
                "rejecting envelope declaring {} bits over {} available",
                end_bit_index, available
            );
            return Err(EnvelopeError::BitCountOverrun {
                declared: end_bit_index,
                available,
            });
        }

        Ok(Self {
            bytes,
            end_bit_index,
            current_bit: 0,
        })
    }

    /// Reads any codable value, in whatever layout its type defines
    pub fn read<T: BitStreamCodable>(&mut self) -> Result<T, BitStreamError> {
        T::decode(self)
    }

    pub fn read_bool(&mut self) -> Result<bool, BitStreamError> {
        if self.current_bit >= self.end_bit_index {
            return Err(BitStreamError::TooShort);
        }
        Ok(self.read_bit())
    }

    pub fn read_u32(&mut self) -> Result<u32, BitStreamError> {
        self.read_u32_bits(U32_BITS)
    }

    /// Reads `number_of_bits` bits, least-significant first
    pub fn read_u32_bits(&mut self, number_of_bits: u32) -> Result<u32, BitStreamError> {
        debug_assert!(
            number_of_bits <= U32_BITS,
            "can't read more than 32 bits into a u32"
        );

        if self.current_bit + number_of_bits as usize > self.end_bit_index {
            return Err(BitStreamError::TooShort);
        }

        let mut output: u32 = 0;
        for index in 0..number_of_bits {
            if self.read_bit() {
                output |= 1 << index;
            }
        }
        Ok(output)
    }

    pub fn read_f32(&mut self) -> Result<f32, BitStreamError> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads an enum tag written by [`append_enum`](crate::WritableBitStream::append_enum)
    pub fn read_enum<T: BitEnum>(&mut self) -> Result<T, BitStreamError> {
        let ordinal = self.read_u32_bits(T::BITS)?;
        T::from_ordinal(ordinal).ok_or_else(|| {
            warn!(
                "read enum ordinal {} but the type only has {} cases",
                ordinal,
                T::CASE_COUNT
            );
            BitStreamError::EncodingError
        })
    }

    /// Reads a byte blob written by [`append_data`](crate::WritableBitStream::append_data)
    pub fn read_data(&mut self) -> Result<Vec<u8>, BitStreamError> {
        let start_bit = self.current_bit;
        self.align();

        let length = match self.read_u32() {
            Ok(length) => length as usize,
            Err(error) => {
                self.current_bit = start_bit;
                return Err(error);
            }
        };

        let fits = length
            .checked_mul(8)
            .map(|bits| self.current_bit + bits <= self.end_bit_index)
            .unwrap_or(false);
        if !fits {
            self.current_bit = start_bit;
            return Err(BitStreamError::TooShort);
        }

        let current_byte = self.current_bit / 8;
        let output = self.bytes[current_byte..current_byte + length].to_vec();
        self.current_bit += length * 8;
        Ok(output)
    }

    pub fn is_at_end(&self) -> bool {
        self.current_bit == self.end_bit_index
    }

    /// Number of valid bits in the stream
    pub fn bit_len(&self) -> usize {
        self.end_bit_index
    }

    pub fn current_bit(&self) -> usize {
        self.current_bit
    }

    pub fn remaining_bits(&self) -> usize {
        self.end_bit_index - self.current_bit
    }

    fn read_bit(&mut self) -> bool {
        let bit_shift = self.current_bit % 8;
        let byte_index = self.current_bit / 8;
        self.current_bit += 1;
        (self.bytes[byte_index] >> bit_shift) & 1 != 0
    }

    // discards whatever is left of the current byte
    fn align(&mut self) {
        let remainder = self.current_bit % 8;
        if remainder != 0 {
            self.current_bit += 8 - remainder;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        bit_reader::ReadableBitStream,
        bit_writer::WritableBitStream,
        error::{BitStreamError, EnvelopeError},
    };

    #[test]
    fn read_write_3_bits() {
        let mut writer = WritableBitStream::new();

        writer.append_bool(false);
        writer.append_bool(true);
        writer.append_bool(true);

        let mut reader = ReadableBitStream::new(writer.pack_data());

        assert!(!reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.is_at_end());
    }

    #[test]
    fn read_write_13_bits() {
        let mut writer = WritableBitStream::new();

        writer.append_u32_bits(2, 2);
        writer.append_u32_bits(154, 9);
        writer.append_u32_bits(1, 2);

        let mut reader = ReadableBitStream::new(writer.pack_data());

        assert_eq!(reader.bit_len(), 13);
        assert_eq!(reader.read_u32_bits(2).unwrap(), 2);
        assert_eq!(reader.read_u32_bits(9).unwrap(), 154);
        assert_eq!(reader.read_u32_bits(1).unwrap(), 1);
        assert_eq!(reader.remaining_bits(), 1);
        assert!(!reader.read_bool().unwrap());
        assert!(reader.is_at_end());
    }

    #[test]
    fn padding_bits_are_not_readable() {
        let mut writer = WritableBitStream::new();
        writer.append_bool(true);

        let mut reader = ReadableBitStream::new(writer.pack_data());

        assert!(reader.read_bool().unwrap());
        assert_eq!(reader.read_bool(), Err(BitStreamError::TooShort));
    }

    #[test]
    fn wide_read_past_end_is_too_short() {
        let mut writer = WritableBitStream::new();
        writer.append_u32_bits(5, 7);

        let mut reader = ReadableBitStream::new(writer.pack_data());

        assert_eq!(reader.read_u32_bits(8), Err(BitStreamError::TooShort));
        // the failed read consumed nothing
        assert_eq!(reader.current_bit(), 0);
        assert_eq!(reader.read_u32_bits(7).unwrap(), 5);
    }

    #[test]
    fn zero_width_read_at_end_succeeds() {
        let mut reader = ReadableBitStream::new(WritableBitStream::new().pack_data());

        assert_eq!(reader.read_u32_bits(0).unwrap(), 0);
        assert!(reader.is_at_end());
    }

    #[test]
    fn data_length_beyond_end_is_too_short() {
        let mut writer = WritableBitStream::new();
        writer.append_data(&[1, 2, 3]);
        let mut packed = writer.pack_data();

        // claim 4 bytes follow instead of 3
        packed[4] = 4;

        let mut reader = ReadableBitStream::new(packed);
        assert_eq!(reader.read_data(), Err(BitStreamError::TooShort));
        assert_eq!(reader.current_bit(), 0);
    }

    #[test]
    fn short_envelope_is_rejected() {
        assert_eq!(
            ReadableBitStream::try_new(vec![1, 0, 0]),
            Err(EnvelopeError::MissingHeader { length: 3 })
        );
    }

    #[test]
    fn overrunning_header_is_rejected() {
        assert_eq!(
            ReadableBitStream::try_new(vec![9, 0, 0, 0, 0xFF]),
            Err(EnvelopeError::BitCountOverrun {
                declared: 9,
                available: 8
            })
        );
    }

    #[test]
    #[should_panic(expected = "failed to init bit stream")]
    fn new_panics_on_malformed_envelope() {
        let _ = ReadableBitStream::new(Vec::new());
    }
}
