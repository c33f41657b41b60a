use proc_macro2::TokenStream;
use quote::quote;
use syn::{Fields, Generics, Ident, Index};

use crate::shared::{add_codable_bounds, FieldEncoding};

/// Tuple structs and unit structs. A unit struct occupies no bits.
pub fn derive_codable_tuple_struct(
    fields: &Fields,
    struct_name: &Ident,
    generics: &Generics,
) -> syn::Result<TokenStream> {
    let generics = add_codable_bounds(generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut encode_body = TokenStream::new();
    let mut decode_fields = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let encoding = FieldEncoding::from_field(field)?;
        let index = Index::from(index);

        encode_body.extend(encoding.encode(quote! { &self.#index }));
        decode_fields.push(encoding.decode(&field.ty));
    }

    let construct = match fields {
        Fields::Unit => quote! { Self },
        _ => quote! { Self(#(#decode_fields),*) },
    };

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
                ::std::result::Result::Ok(#construct)
            }
        }
    })
}
