/// Size of the little-endian bit count that prefixes every packed stream
pub const HEADER_SIZE_BYTES: usize = 4;

/// Width of a full-width integer field, and of blob length prefixes
pub const U32_BITS: u32 = u32::BITS;
