//! Derive macros for `bitstream-serde`.
//!
//! Both macros expand to paths under `::bitstream_serde`, so they are meant to
//! be used through that crate's re-exports.

use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod impls;
mod shared;

use impls::*;

#[proc_macro_derive(BitStreamCodable, attributes(bitstream))]
pub fn derive_bit_stream_codable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let gen = derive_codable_common(&input).unwrap_or_else(|error| error.to_compile_error());

    proc_macro::TokenStream::from(gen)
}

#[proc_macro_derive(BitEnum)]
pub fn derive_bit_enum(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let gen = match &input.data {
        Data::Enum(enum_) => derive_bit_enum_impl(enum_, &input.ident, &input.generics),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "BitEnum can only be derived for enums",
        )),
    };

    proc_macro::TokenStream::from(gen.unwrap_or_else(|error| error.to_compile_error()))
}

fn derive_codable_common(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let input_name = &input.ident;

    if shared::is_bridged_container(&input.attrs)? {
        return Ok(derive_codable_bridged(input_name, &input.generics));
    }

    match &input.data {
        Data::Enum(enum_) => derive_codable_enum(enum_, input_name, &input.generics),
        Data::Struct(struct_) => match &struct_.fields {
            Fields::Named(fields) => derive_codable_struct(fields, input_name, &input.generics),
            Fields::Unnamed(_) | Fields::Unit => {
                derive_codable_tuple_struct(&struct_.fields, input_name, &input.generics)
            }
        },
        Data::Union(_) => Err(syn::Error::new_spanned(
            input_name,
            "Only structs and enums are supported",
        )),
    }
}
