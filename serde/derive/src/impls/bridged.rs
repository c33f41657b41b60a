use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, GenericParam, Generics, Ident};

/// The whole value travels as one `serde` blob
pub fn derive_codable_bridged(struct_name: &Ident, generics: &Generics) -> TokenStream {
    let generics = add_bridge_bounds(generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::bitstream_serde::BitStreamCodable for #struct_name #ty_generics #where_clause {
            fn encode(
                &self,
                stream: &mut ::bitstream_serde::WritableBitStream,
            ) -> ::std::result::Result<(), ::bitstream_serde::BitStreamError> {
                ::bitstream_serde::encode_bridged(self, stream)
            }

            fn decode(
                stream: &mut ::bitstream_serde::ReadableBitStream,
            ) -> ::std::result::Result<Self, ::bitstream_serde::BitStreamError> {
                ::bitstream_serde::decode_bridged(stream)
            }
        }
    }
}

fn add_bridge_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param
                .bounds
                .push(parse_quote!(::bitstream_serde::serde::Serialize));
            type_param
                .bounds
                .push(parse_quote!(::bitstream_serde::serde::de::DeserializeOwned));
        }
    }
    generics
}
