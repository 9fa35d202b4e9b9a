use crate::field_utils::ensure_trailing_field;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Ident, Item, Result, Token, Type, parse::Parse, parse::ParseStream, parse_macro_input,
};

pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EventSourceAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[event_source] only on struct")
                .to_compile_error()
                .into();
        }
    };

    // 仅支持具名字段结构体
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let payload = cfg.payload.unwrap_or_else(|| syn::parse_quote! { () });
    let field = cfg
        .field
        .unwrap_or_else(|| Ident::new("event_emitter", proc_macro2::Span::call_site()));

    let emitter_ty: Type = syn::parse_quote! { ::emitter::EventEmitter<#payload> };
    ensure_trailing_field(fields_named, &field, &emitter_ty);

    let ident = &st.ident;
    let generics = st.generics.clone();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        #st

        impl #impl_generics ::emitter::EventSource<#payload> for #ident #ty_generics #where_clause {
            fn event_emitter(&self) -> &::emitter::EventEmitter<#payload> {
                &self.#field
            }
        }
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

struct EventSourceAttrConfig {
    payload: Option<Type>,
    field: Option<Ident>,
}

impl Parse for EventSourceAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut payload: Option<Type> = None;
        let mut field: Option<Ident> = None;

        if input.is_empty() {
            return Ok(Self { payload, field });
        }

        let elems: Punctuated<EventSourceAttrElem, Token![,]> =
            Punctuated::<EventSourceAttrElem, Token![,]>::parse_terminated(input)?;

        for elem in elems.into_iter() {
            match elem {
                EventSourceAttrElem::Payload(key, ty) => {
                    if payload.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'payload' in attribute",
                        ));
                    }
                    payload = Some(*ty);
                }
                EventSourceAttrElem::Field(key, name) => {
                    if field.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'field' in attribute",
                        ));
                    }
                    field = Some(name);
                }
            }
        }

        Ok(Self { payload, field })
    }
}

enum EventSourceAttrElem {
    Payload(Ident, Box<Type>),
    Field(Ident, Ident),
}

impl Parse for EventSourceAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        if key == "payload" {
            let ty: Type = input.parse()?;
            Ok(EventSourceAttrElem::Payload(key, Box::new(ty)))
        } else if key == "field" {
            let name: Ident = input.parse()?;
            Ok(EventSourceAttrElem::Field(key, name))
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'payload' or 'field'",
            ))
        }
    }
}
