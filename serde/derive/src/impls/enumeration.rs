use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DataEnum, Fields, Generics, Ident};

use crate::shared::{add_codable_bounds, reject_variant_attributes, FieldEncoding};

/// Tagged enums: the variant's ordinal in the fewest bits that can hold every
/// ordinal, then the variant's fields in declaration order.
pub fn derive_codable_enum(
    enum_: &DataEnum,
    enum_name: &Ident,
    generics: &Generics,
) -> syn::Result<TokenStream> {
    let generics = add_codable_bounds(generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let case_count = enum_.variants.len() as u32;

    let mut encode_arms = TokenStream::new();
    let mut decode_arms = TokenStream::new();

    for (ordinal, variant) in enum_.variants.iter().enumerate() {
        reject_variant_attributes(variant)?;
        let ordinal = ordinal as u32;
        let variant_name = &variant.ident;

        let mut write_fields = TokenStream::new();
        let mut read_fields = Vec::new();
        let mut bindings = Vec::new();

        for (index, field) in variant.fields.iter().enumerate() {
            let encoding = FieldEncoding::from_field(field)?;
            let binding = format_ident!("f{}", index);

            write_fields.extend(encoding.encode(quote! { #binding }));
            read_fields.push((field.ident.clone(), encoding.decode(&field.ty)));
            bindings.push((field.ident.clone(), binding));
        }

        let (pattern, construct) = match &variant.fields {
            Fields::Unit => (
                quote! { Self::#variant_name },
                quote! { Self::#variant_name },
            ),
            Fields::Unnamed(_) => {
                let bound = bindings.iter().map(|(_, binding)| binding);
                let reads = read_fields.iter().map(|(_, read)| read);
                (
                    quote! { Self::#variant_name(#(#bound),*) },
                    quote! { Self::#variant_name(#(#reads),*) },
                )
            }
            Fields::Named(_) => {
                let bound = bindings
                    .iter()
                    .map(|(name, binding)| quote! { #name: #binding });
                let reads = read_fields.iter().map(|(name, read)| quote! { #name: #read });
                (
                    quote! { Self::#variant_name { #(#bound),* } },
                    quote! { Self::#variant_name { #(#reads),* } },
                )
            }
        };

        encode_arms.extend(quote! {
            #pattern => {
                stream.append_u32_bits(#ordinal, BITS);
                #write_fields
            }
        });
        decode_arms.extend(quote! {
            #ordinal => ::std::result::Result::Ok(#construct),
        });
    }

    let encode_body = if enum_.variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            const BITS: u32 = ::bitstream_serde::bits_for_case_count(#case_count);
            match self {
                #encode_arms
            }
            ::std::result::Result::Ok(())
        }
    };

    Ok(quote! {
        impl #impl_generics ::bitstream_serde::BitStreamCodable for #enum_name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn encode(
                &self,
                stream: &mut ::bitstream_serde::WritableBitStream,
            ) -> ::std::result::Result<(), ::bitstream_serde::BitStreamError> {
                #encode_body
            }

            fn decode(
                stream: &mut ::bitstream_serde::ReadableBitStream,
            ) -> ::std::result::Result<Self, ::bitstream_serde::BitStreamError> {
                const BITS: u32 = ::bitstream_serde::bits_for_case_count(#case_count);
                match stream.read_u32_bits(BITS)? {
                    #decode_arms
                    _ => ::std::result::Result::Err(::bitstream_serde::BitStreamError::EncodingError),
                }
            }
        }
    })
}
