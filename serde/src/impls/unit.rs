use crate::{
    bit_reader::ReadableBitStream, bit_writer::WritableBitStream, codable::BitStreamCodable,
    error::BitStreamError,
};

impl BitStreamCodable for () {
    fn encode(&self, _: &mut WritableBitStream) -> Result<(), BitStreamError> {
        Ok(())
    }

    fn decode(_: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        Ok(())
    }
}

// Tests

#[cfg(test)]
mod tests {
    use crate::{bit_reader::ReadableBitStream, bit_writer::WritableBitStream};

    #[test]
    fn takes_no_bits() {
        let mut writer = WritableBitStream::new();

        writer.write(&()).unwrap();

        assert!(writer.is_empty());

        let mut reader = ReadableBitStream::new(writer.pack_data());
        reader.read::<()>().unwrap();

        assert!(reader.is_at_end());
    }
}
