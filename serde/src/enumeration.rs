/// Number of bits needed to tell `case_count` cases apart: `ceil(log2(case_count))`.
///
/// A type with a single case needs no bits at all.
pub const fn bits_for_case_count(case_count: u32) -> u32 {
    if case_count <= 1 {
        0
    } else {
        u32::BITS - (case_count - 1).leading_zeros()
    }
}

/// A finite tag type whose cases are numbered densely from zero.
///
/// Usually derived with `#[derive(BitEnum)]`, which numbers cases in
/// declaration order.
pub trait BitEnum: Sized {
    /// How many cases the type has
    const CASE_COUNT: u32;
    /// Width of the tag on the wire
    const BITS: u32 = bits_for_case_count(Self::CASE_COUNT);

    /// Zero-based position of this case
    fn ordinal(&self) -> u32;

    /// The case at `ordinal`, or None if there isn't one
    fn from_ordinal(ordinal: u32) -> Option<Self>;
}
