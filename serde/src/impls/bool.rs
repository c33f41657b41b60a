use crate::{
    bit_reader::ReadableBitStream, bit_writer::WritableBitStream, codable::BitStreamCodable,
    error::BitStreamError,
};

impl BitStreamCodable for bool {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        stream.append_bool(*self);
        Ok(())
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        stream.read_bool()
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

        let in_1 = true;
        let in_2 = false;

        writer.write(&in_1).unwrap();
        writer.write(&in_2).unwrap();

        assert_eq!(writer.bit_len(), 2);

        // Read
        let mut reader = ReadableBitStream::new(writer.pack_data());

        let out_1: bool = reader.read().unwrap();
        let out_2: bool = reader.read().unwrap();

        assert_eq!(in_1, out_1);
        assert_eq!(in_2, out_2);
        assert!(reader.is_at_end());
    }
}
