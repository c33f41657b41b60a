use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Attribute, Expr, Field, GenericParam, Generics, Type, Variant};

const ATTRIBUTE: &str = "bitstream";

/// How a single field is laid out on the wire
pub enum FieldEncoding {
    /// The field type's own `BitStreamCodable` impl
    Codable,
    /// `#[bitstream(bits = N)]`
    Bits(Expr),
    /// `#[bitstream(compressed(min = A, max = B, bits = N))]`
    Compressed { min: Expr, max: Expr, bits: Expr },
    /// `#[bitstream(data)]`
    Data,
    /// `#[bitstream(bridge)]`
    Bridge,
}

impl FieldEncoding {
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut encoding = None;

        for attr in bitstream_attributes(&field.attrs) {
            attr.parse_nested_meta(|meta| {
                let parsed = if meta.path.is_ident("bits") {
                    FieldEncoding::Bits(meta.value()?.parse()?)
                } else if meta.path.is_ident("data") {
                    FieldEncoding::Data
                } else if meta.path.is_ident("bridge") {
                    FieldEncoding::Bridge
                } else if meta.path.is_ident("compressed") {
                    let mut min = None;
                    let mut max = None;
                    let mut bits = None;
                    meta.parse_nested_meta(|inner| {
                        if inner.path.is_ident("min") {
                            min = Some(inner.value()?.parse::<Expr>()?);
                        } else if inner.path.is_ident("max") {
                            max = Some(inner.value()?.parse::<Expr>()?);
                        } else if inner.path.is_ident("bits") {
                            bits = Some(inner.value()?.parse::<Expr>()?);
                        } else {
                            return Err(inner.error("expected `min`, `max` or `bits`"));
                        }
                        Ok(())
                    })?;
                    match (min, max, bits) {
                        (Some(min), Some(max), Some(bits)) => {
                            FieldEncoding::Compressed { min, max, bits }
                        }
                        _ => return Err(meta.error("`compressed` needs `min`, `max` and `bits`")),
                    }
                } else {
                    return Err(meta.error("expected `bits`, `compressed`, `data` or `bridge`"));
                };

                if encoding.is_some() {
                    return Err(meta.error("a field takes only one `bitstream` encoding"));
                }
                encoding = Some(parsed);
                Ok(())
            })?;
        }

        Ok(encoding.unwrap_or(FieldEncoding::Codable))
    }

    /// Statement appending `value`, an expression of type `&FieldType`
    pub fn encode(&self, value: TokenStream) -> TokenStream {
        match self {
            FieldEncoding::Codable => quote! {
                ::bitstream_serde::BitStreamCodable::encode(#value, stream)?;
            },
            FieldEncoding::Bits(bits) => quote! {
                ::bitstream_serde::FixedWidth::write_fixed(#value, #bits, stream);
            },
            FieldEncoding::Compressed { min, max, bits } => quote! {
                ::bitstream_serde::Quantize::write_quantized(
                    #value,
                    &::bitstream_serde::FloatCompressor::new(#min, #max, #bits),
                    stream,
                );
            },
            FieldEncoding::Data => quote! {
                stream.append_data(#value);
            },
            FieldEncoding::Bridge => quote! {
                ::bitstream_serde::encode_bridged(#value, stream)?;
            },
        }
    }

    /// Expression reading a value of type `ty`
    pub fn decode(&self, ty: &Type) -> TokenStream {
        match self {
            FieldEncoding::Codable => quote! {
                <#ty as ::bitstream_serde::BitStreamCodable>::decode(stream)?
            },
            FieldEncoding::Bits(bits) => quote! {
                <#ty as ::bitstream_serde::FixedWidth>::read_fixed(#bits, stream)?
            },
            FieldEncoding::Compressed { min, max, bits } => quote! {
                <#ty as ::bitstream_serde::Quantize>::read_quantized(
                    &::bitstream_serde::FloatCompressor::new(#min, #max, #bits),
                    stream,
                )?
            },
            FieldEncoding::Data => quote! {
                stream.read_data()?
            },
            FieldEncoding::Bridge => quote! {
                ::bitstream_serde::decode_bridged::<#ty>(stream)?
            },
        }
    }
}

/// Whether the container carries `#[bitstream(bridge)]`
pub fn is_bridged_container(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut bridged = false;
    for attr in bitstream_attributes(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("bridge") {
                bridged = true;
                Ok(())
            } else {
                Err(meta.error("only `bridge` is supported on a container"))
            }
        })?;
    }
    Ok(bridged)
}

/// Enum variants take no options of their own, only their fields do
pub fn reject_variant_attributes(variant: &Variant) -> syn::Result<()> {
    match bitstream_attributes(&variant.attrs).next() {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            "`bitstream` options go on the variant's fields, not the variant",
        )),
        None => Ok(()),
    }
}

fn bitstream_attributes(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident(ATTRIBUTE))
}

/// Requires every type parameter to be codable itself
pub fn add_codable_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param
                .bounds
                .push(parse_quote!(::bitstream_serde::BitStreamCodable));
        }
    }
    generics
}
