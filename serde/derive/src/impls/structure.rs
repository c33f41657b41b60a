use proc_macro2::TokenStream;
use quote::quote;
use syn::{FieldsNamed, Generics, Ident};

use crate::shared::{add_codable_bounds, FieldEncoding};

pub fn derive_codable_struct(
    fields: &FieldsNamed,
    struct_name: &Ident,
    generics: &Generics,
) -> syn::Result<TokenStream> {
    let generics = add_codable_bounds(generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut encode_body = TokenStream::new();
    let mut decode_body = TokenStream::new();

    for field in &fields.named {
        let encoding = FieldEncoding::from_field(field)?;
        let field_name = &field.ident;

        encode_body.extend(encoding.encode(quote! { &self.#field_name }));

        let read_field = encoding.decode(&field.ty);
        decode_body.extend(quote! { #field_name: #read_field, });
    }

    Ok(quote! {
        impl #impl_generics ::bitstream_serde::BitStreamCodable for #struct_name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn encode(
                &self,
                stream: &mut ::bitstream_serde::WritableBitStream,
            ) -> ::std::result::Result<(), ::bitstream_serde::BitStreamError> {
                #encode_body
                ::std::result::Result::Ok(())
            }

            #[allow(unused_variables)]
            fn decode(
                stream: &mut ::bitstream_serde::ReadableBitStream,
            ) -> ::std::result::Result<Self, ::bitstream_serde::BitStreamError> {
                ::std::result::Result::Ok(Self {
                    #decode_body
                })
            }
        }
    })
}
