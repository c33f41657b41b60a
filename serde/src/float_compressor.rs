use crate::{bit_reader::ReadableBitStream, bit_writer::WritableBitStream, error::BitStreamError};

/// Lossy fixed-point quantizer for floats inside a known range.
///
/// A value is mapped onto `bits` bits as a fraction of `[min_value, max_value]`
/// and written inline in a larger stream. Values outside the range are clamped.
/// The reconstruction error is at most [`FloatCompressor::max_error`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatCompressor {
    min_value: f32,
    max_value: f32,
    bits: u32,
    max_bit_value: u32,
}

impl FloatCompressor {
    /// # Panics
    ///
    /// If `bits` is not between 1 and 32.
    pub const fn new(min_value: f32, max_value: f32, bits: u32) -> Self {
        assert!(
            bits >= 1 && bits <= 32,
            "a float compressor needs between 1 and 32 bits"
        );

        // for 8 bits the highest pattern is 255, not 256
        let max_bit_value = if bits == 32 {
            u32::MAX
        } else {
            (1 << bits) - 1
        };

        Self {
            min_value,
            max_value,
            bits,
            max_bit_value,
        }
    }

    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Largest difference between a value in range and its round trip
    pub fn max_error(&self) -> f32 {
        (self.max_value - self.min_value) / self.max_bit_value as f32
    }

    pub fn write(&self, value: f32, stream: &mut WritableBitStream) {
        stream.append_u32_bits(self.quantize(value), self.bits);
    }

    pub fn write_vec3(&self, value: [f32; 3], stream: &mut WritableBitStream) {
        for component in value {
            self.write(component, stream);
        }
    }

    pub fn read(&self, stream: &mut ReadableBitStream) -> Result<f32, BitStreamError> {
        let bit_pattern = stream.read_u32_bits(self.bits)?;
        Ok(self.dequantize(bit_pattern))
    }

    pub fn read_vec3(&self, stream: &mut ReadableBitStream) -> Result<[f32; 3], BitStreamError> {
        Ok([self.read(stream)?, self.read(stream)?, self.read(stream)?])
    }

    fn quantize(&self, value: f32) -> u32 {
        let range = self.max_value - self.min_value;
        if range <= 0.0 {
            return 0;
        }

        let ratio = ((value - self.min_value) / range) as f64;
        // NaN survives the clamp and then casts to 0
        let clamped_ratio = ratio.clamp(0.0, 1.0);
        (clamped_ratio * self.max_bit_value as f64) as u32
    }

    fn dequantize(&self, bit_pattern: u32) -> f32 {
        let ratio = (bit_pattern as f64 / self.max_bit_value as f64) as f32;
        ratio * (self.max_value - self.min_value) + self.min_value
    }
}

/// Values that can be written through a [`FloatCompressor`].
///
/// Lets derived types mark a field as quantized with
/// `#[bitstream(compressed(min = .., max = .., bits = ..))]`.
pub trait Quantize: Sized {
    fn write_quantized(&self, compressor: &FloatCompressor, stream: &mut WritableBitStream);

    fn read_quantized(
        compressor: &FloatCompressor,
        stream: &mut ReadableBitStream,
    ) -> Result<Self, BitStreamError>;
}

impl Quantize for f32 {
    fn write_quantized(&self, compressor: &FloatCompressor, stream: &mut WritableBitStream) {
        compressor.write(*self, stream);
    }

    fn read_quantized(
        compressor: &FloatCompressor,
        stream: &mut ReadableBitStream,
    ) -> Result<Self, BitStreamError> {
        compressor.read(stream)
    }
}

impl Quantize for [f32; 3] {
    fn write_quantized(&self, compressor: &FloatCompressor, stream: &mut WritableBitStream) {
        compressor.write_vec3(*self, stream);
    }

    fn read_quantized(
        compressor: &FloatCompressor,
        stream: &mut ReadableBitStream,
    ) -> Result<Self, BitStreamError> {
        compressor.read_vec3(stream)
    }
}
