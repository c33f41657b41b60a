use crate::{
    bit_reader::ReadableBitStream, bit_writer::WritableBitStream, codable::BitStreamCodable,
    error::BitStreamError,
};

impl BitStreamCodable for f32 {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        stream.append_f32(*self);
        Ok(())
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        stream.read_f32()
    }
}

impl BitStreamCodable for f64 {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        self.to_bits().encode(stream)
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        Ok(f64::from_bits(u64::decode(stream)?))
    }
}

// Tests

#[cfg(test)]
mod tests {
    use crate::{bit_reader::ReadableBitStream, bit_writer::WritableBitStream};

    #[test]
    fn read_write() {
        // Write
        let mut writer = WritableBitStream::new();

        let in_1: f32 = 88.88;
        let in_2: f64 = -1234.5678;
        let in_3: f32 = f32::NEG_INFINITY;

        writer.append_bool(true);
        writer.write(&in_1).unwrap();
        writer.write(&in_2).unwrap();
        writer.write(&in_3).unwrap();

        // Read
        let mut reader = ReadableBitStream::new(writer.pack_data());

        assert!(reader.read_bool().unwrap());
        let out_1: f32 = reader.read().unwrap();
        let out_2: f64 = reader.read().unwrap();
        let out_3: f32 = reader.read().unwrap();

        assert_eq!(in_1, out_1);
        assert_eq!(in_2, out_2);
        assert_eq!(in_3, out_3);
    }

    #[test]
    fn nan_keeps_its_bit_pattern() {
        let in_nan = f32::from_bits(0x7FC0_1234);

        let mut writer = WritableBitStream::new();
        writer.write(&in_nan).unwrap();

        let mut reader = ReadableBitStream::new(writer.pack_data());
        let out_nan: f32 = reader.read().unwrap();

        assert_eq!(in_nan.to_bits(), out_nan.to_bits());
    }
}
