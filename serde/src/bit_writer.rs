use std::fmt;

use log::trace;

use crate::{
    codable::BitStreamCodable, constants::U32_BITS, enumeration::BitEnum, error::BitStreamError,
};

/// An append-only buffer that packs values at bit granularity.
///
/// Multi-bit fields are written least-significant bit first, starting at the
/// lowest free bit of the current byte, and cross byte boundaries freely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WritableBitStream {
    bytes: Vec<u8>,
    end_bit_index: usize,
}

impl WritableBitStream {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            end_bit_index: 0,
        }
    }

    /// Appends any codable value, in whatever layout its type defines
    pub fn write<T: BitStreamCodable>(&mut self, target: &T) -> Result<(), BitStreamError> {
        target.encode(self)
    }

    pub fn append_bool(&mut self, value: bool) {
        self.write_bit(value);
    }

    pub fn append_u32(&mut self, value: u32) {
        self.append_u32_bits(value, U32_BITS);
    }

    /// Appends the low `number_of_bits` bits of `value`.
    ///
    /// Bits above `number_of_bits` are dropped without complaint; keeping
    /// `value < 2^number_of_bits` is up to the caller.
    pub fn append_u32_bits(&mut self, value: u32, number_of_bits: u32) {
        debug_assert!(
            number_of_bits <= U32_BITS,
            "can't append more than 32 bits from a u32"
        );

        let mut temp = value;
        for _ in 0..number_of_bits {
            self.write_bit(temp & 1 != 0);
            temp >>= 1;
        }
    }

    pub fn append_f32(&mut self, value: f32) {
        self.append_u32(value.to_bits());
    }

    /// Appends an enum tag using the minimum number of bits for its case count
    pub fn append_enum<T: BitEnum>(&mut self, value: &T) {
        self.append_u32_bits(value.ordinal(), T::BITS);
    }

    /// Appends a byte blob: aligns to the next byte, writes a 32-bit length,
    /// then copies the bytes as-is.
    ///
    /// # Panics
    ///
    /// If `data` is longer than `u32::MAX` bytes.
    pub fn append_data(&mut self, data: &[u8]) {
        let length = u32::try_from(data.len()).unwrap_or_else(|_| {
            panic!("can't append a blob of {} bytes to a bit stream", data.len())
        });

        self.align();
        self.append_u32(length);
        self.bytes.extend_from_slice(data);
        self.end_bit_index += data.len() * 8;
    }

    /// Snapshot of the wire envelope: the bit count as a 4-byte little-endian
    /// header followed by the packed bytes.
    ///
    /// # Panics
    ///
    /// If the stream holds more bits than the header can describe.
    pub fn pack_data(&self) -> Vec<u8> {
        let bit_count = u32::try_from(self.end_bit_index).unwrap_or_else(|_| {
            panic!(
                "bit stream of {} bits overflows the envelope header",
                self.end_bit_index
            )
        });

        let mut output = Vec::with_capacity(4 + self.bytes.len());
        output.extend_from_slice(&bit_count.to_le_bytes());
        output.extend_from_slice(&self.bytes);

        trace!(
            "packed bit stream: {} bits in {} bytes",
            self.end_bit_index,
            output.len()
        );

        output
    }

    pub fn bit_len(&self) -> usize {
        self.end_bit_index
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.end_bit_index == 0
    }

    fn write_bit(&mut self, bit: bool) {
        let bit_shift = self.end_bit_index % 8;
        let byte_index = self.end_bit_index / 8;
        if bit_shift == 0 {
            self.bytes.push(0);
        }

        if bit {
            self.bytes[byte_index] |= 1 << bit_shift;
        }
        self.end_bit_index += 1;
    }

    // skipped bits keep the zero they were allocated with
    fn align(&mut self) {
        self.end_bit_index = self.bytes.len() * 8;
    }
}

impl fmt::Display for WritableBitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bit stream {}:", self.end_bit_index)?;
        for byte in &self.bytes {
            write!(f, " {:b}", byte)?;
        }
        Ok(())
    }
}
