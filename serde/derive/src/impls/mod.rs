mod bit_enum;
mod bridged;
mod enumeration;
mod structure;
mod tuple_structure;

pub use bit_enum::derive_bit_enum_impl;
pub use bridged::derive_codable_bridged;
pub use enumeration::derive_codable_enum;
pub use structure::derive_codable_struct;
pub use tuple_structure::derive_codable_tuple_struct;
