use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Error, Fields, LitInt, Result,
    parse::{Parse, ParseStream},
};

pub(crate) fn expand_from_payload(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`FromPayload` may only be derived on structs.",
        ))?
    };

    let RecordAttribute { type_code } = RecordAttribute::find(&input.attrs, input)?;

    // Fields are read in declaration order, which is the order they appear
    // in the payload.
    let construction = match &data.fields {
        Fields::Named(fields) => {
            let reads = fields.named.iter().map(|field| {
                let name = &field.ident;
                quote! { #name: Field::read(cursor)? }
            });

            quote! { Self { #(#reads,)* } }
        }
        Fields::Unit => quote! { Self },
        Fields::Unnamed(_) => Err(Error::new_spanned(
            input,
            "`FromPayload` may only be derived on structs with named fields or unit structs.",
        ))?,
    };

    let name = &input.ident;

    let expanded = quote! {
        impl FromPayload for #name {
            const TYPE_CODE: u8 = #type_code;

            #[allow(unused_variables)]
            fn from_payload(cursor: &mut Cursor<'_>) -> ::core::result::Result<Self, CursorError> {
                ::core::result::Result::Ok(#construction)
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct RecordAttribute {
    type_code: LitInt,
}

impl RecordAttribute {
    fn find(attrs: &[Attribute], input: &DeriveInput) -> Result<Self> {
        let Some(attr) = attrs.iter().find(|a| a.path().is_ident("record")) else {
            Err(Error::new_spanned(
                &input.ident,
                "`FromPayload` requires a `#[record(N)]` attribute naming the type code.",
            ))?
        };

        let attribute: Self = attr.meta.require_list()?.parse_args()?;

        // Type codes occupy a single header byte.
        attribute.type_code.base10_parse::<u8>()?;

        Ok(attribute)
    }
}

impl Parse for RecordAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let type_code = input.parse::<LitInt>()?;
        Ok(Self { type_code })
    }
}
