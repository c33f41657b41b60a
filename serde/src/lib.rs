//! # Bitstream Serde
//! Compact bit-level serialization for real-time game messages.
//!
//! A [`WritableBitStream`] packs booleans, fixed-width integers, floats, enum
//! tags, quantized floats and byte blobs at bit granularity, then
//! [`pack_data`](WritableBitStream::pack_data) turns it into an envelope: a
//! 4-byte little-endian bit count followed by the payload. A
//! [`ReadableBitStream`] replays the same sequence of typed reads on the
//! receiving side and fails with [`BitStreamError::TooShort`] instead of reading
//! past the end.
//!
//! The format carries no schema. Types implement [`BitStreamCodable`], by hand
//! or with `#[derive(BitStreamCodable)]`, so that encode and decode agree on
//! field order.

#![deny(unstable_features, unused_import_braces)]

extern crate self as bitstream_serde;

pub use bitstream_serde_derive::{BitEnum, BitStreamCodable};
// derived bridge impls name serde through this path
#[cfg(feature = "bridge")]
pub use serde;

mod bit_reader;
mod bit_writer;
#[cfg(feature = "bridge")]
mod bridge;
mod codable;
mod constants;
mod enumeration;
mod error;
mod fixed_width;
mod float_compressor;
mod impls;

pub use bit_reader::ReadableBitStream;
pub use bit_writer::WritableBitStream;
#[cfg(feature = "bridge")]
pub use bridge::{decode_bridged, encode_bridged, Bridged};
pub use codable::{decode_packed, encode_packed, BitStreamCodable};
pub use constants::HEADER_SIZE_BYTES;
pub use enumeration::{bits_for_case_count, BitEnum};
pub use error::{BitStreamError, DecodeError, EnvelopeError};
pub use fixed_width::FixedWidth;
pub use float_compressor::{FloatCompressor, Quantize};
