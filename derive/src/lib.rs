use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod from_payload;

#[proc_macro_derive(FromPayload, attributes(record))]
pub fn derive_from_payload(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match from_payload::expand_from_payload(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
