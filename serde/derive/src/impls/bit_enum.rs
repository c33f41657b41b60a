use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Fields, Generics, Ident};

pub fn derive_bit_enum_impl(
    enum_: &DataEnum,
    enum_name: &Ident,
    generics: &Generics,
) -> syn::Result<TokenStream> {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let case_count = enum_.variants.len() as u32;

    let mut ordinal_arms = TokenStream::new();
    let mut from_ordinal_arms = TokenStream::new();

    for (ordinal, variant) in enum_.variants.iter().enumerate() {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "BitEnum variants cannot carry fields, derive BitStreamCodable instead",
            ));
        }
        let ordinal = ordinal as u32;
        let variant_name = &variant.ident;

        ordinal_arms.extend(quote! { Self::#variant_name => #ordinal, });
        from_ordinal_arms.extend(quote! {
            #ordinal => ::std::option::Option::Some(Self::#variant_name),
        });
    }

    let ordinal_body = if enum_.variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { match self { #ordinal_arms } }
    };

    Ok(quote! {
        impl #impl_generics ::bitstream_serde::BitEnum for #enum_name #ty_generics #where_clause {
            const CASE_COUNT: u32 = #case_count;

            fn ordinal(&self) -> u32 {
                #ordinal_body
            }

            fn from_ordinal(ordinal: u32) -> ::std::option::Option<Self> {
                match ordinal {
                    #from_ordinal_arms
                    _ => ::std::option::Option::None,
                }
            }
        }
    })
}
