use crate::{
    bit_reader::ReadableBitStream, bit_writer::WritableBitStream, codable::BitStreamCodable,
    error::BitStreamError,
};

impl<T: BitStreamCodable> BitStreamCodable for Option<T> {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        if let Some(value) = self {
            stream.append_bool(true);
            value.encode(stream)
        } else {
            stream.append_bool(false);
            Ok(())
        }
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Option<T>, BitStreamError> {
        if stream.read_bool()? {
            Ok(Some(T::decode(stream)?))
        } else {
            Ok(None)
        }
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

        let in_1 = Some(123_u32);
        let in_2: Option<f32> = None;

        writer.write(&in_1).unwrap();
        writer.write(&in_2).unwrap();

        // one presence bit each, plus the value
        assert_eq!(writer.bit_len(), 34);

        // Read
        let mut reader = ReadableBitStream::new(writer.pack_data());

        let out_1: Option<u32> = reader.read().unwrap();
        let out_2: Option<f32> = reader.read().unwrap();

        assert_eq!(in_1, out_1);
        assert_eq!(in_2, out_2);
        assert!(reader.is_at_end());
    }
}
