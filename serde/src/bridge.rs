use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    bit_reader::ReadableBitStream, bit_writer::WritableBitStream, codable::BitStreamCodable,
    error::BitStreamError,
};

/// Writes any `serde` value as one opaque blob.
///
/// The value goes through `bincode` and then [`WritableBitStream::append_data`],
/// so it costs a byte-aligned length prefix and whole bytes. Use it for values
/// that aren't worth a hand-written bit layout.
pub fn encode_bridged<T: Serialize>(
    value: &T,
    stream: &mut WritableBitStream,
) -> Result<(), BitStreamError> {
    let bytes = bincode::serialize(value).map_err(|error| {
        warn!("failed to serialize bridged value: {}", error);
        BitStreamError::EncodingError
    })?;
    stream.append_data(&bytes);
    Ok(())
}

/// Reads a value written by [`encode_bridged`]
pub fn decode_bridged<T: DeserializeOwned>(
    stream: &mut ReadableBitStream,
) -> Result<T, BitStreamError> {
    let bytes = stream.read_data()?;
    bincode::deserialize(&bytes).map_err(|error| {
        warn!("failed to deserialize bridged value: {}", error);
        BitStreamError::EncodingError
    })
}

/// Gives any `serde` type a [`BitStreamCodable`] impl through the bridge
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bridged<T>(pub T);

impl<T> Bridged<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize + DeserializeOwned> BitStreamCodable for Bridged<T> {
    fn encode(&self, stream: &mut WritableBitStream) -> Result<(), BitStreamError> {
        encode_bridged(&self.0, stream)
    }

    fn decode(stream: &mut ReadableBitStream) -> Result<Self, BitStreamError> {
        Ok(Bridged(decode_bridged(stream)?))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::{decode_bridged, encode_bridged, Bridged};
    use crate::{
        bit_reader::ReadableBitStream, bit_writer::WritableBitStream, error::BitStreamError,
    };

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Settings {
        volume: u8,
        name: String,
    }

    #[test]
    fn bridged_value_sits_between_bit_fields() {
        let in_settings = Settings {
            volume: 7,
            name: "lobby".to_string(),
        };

        let mut writer = WritableBitStream::new();
        writer.append_bool(true);
        encode_bridged(&in_settings, &mut writer).unwrap();
        writer.append_u32_bits(5, 3);

        let mut reader = ReadableBitStream::new(writer.pack_data());

        assert!(reader.read_bool().unwrap());
        let out_settings: Settings = decode_bridged(&mut reader).unwrap();
        assert_eq!(reader.read_u32_bits(3).unwrap(), 5);
        assert_eq!(in_settings, out_settings);
        assert!(reader.is_at_end());
    }

    #[test]
    fn garbage_blob_is_an_encoding_error() {
        let mut writer = WritableBitStream::new();
        // a String whose declared length runs past the blob
        writer.append_data(&[0xFF, 0, 0, 0, 0, 0, 0, 0, b'a']);

        let mut reader = ReadableBitStream::new(writer.pack_data());

        assert_eq!(
            reader.read::<Bridged<String>>(),
            Err(BitStreamError::EncodingError)
        );
    }
}
