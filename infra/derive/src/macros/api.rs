use super::has_derive;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{ItemFn, ItemStruct, LitStr};

/// Expands `#[api_model]`: common derives, schema derive and the serde rename policy.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> syn::Result<TokenStream> {
    let mut rename_all: Option<LitStr> = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("rename_all") {
            if rename_all.is_some() {
                return Err(meta.error("duplicate `rename_all`"));
            }
            rename_all = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported argument; expected `rename_all = \"...\"`"))
        }
    });
    syn::parse::Parser::parse2(parser, args)?;

    let mut derives = Vec::new();
    for (name, path) in [
        ("Debug", quote!(Debug)),
        ("Serialize", quote!(::serde::Serialize)),
        ("Deserialize", quote!(::serde::Deserialize)),
    ] {
        if !has_derive(&input.attrs, name) {
            derives.push(path);
        }
    }
    let derive_attr = (!derives.is_empty()).then(|| quote!(#[derive(#(#derives),*)]));

    let schema_attr = (!has_derive(&input.attrs, "ToSchema"))
        .then(|| quote!(#[cfg_attr(feature = "server", derive(::utoipa::ToSchema))]));

    let serde_rename = existing_rename(&input)?;
    let rename_attr = match (rename_all, serde_rename) {
        (Some(wanted), Some(existing)) if wanted.value() != existing.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "conflicting serde rename_all; drop it or match api_model(rename_all = ...)",
            ));
        },
        (_, Some(_)) => None,
        (wanted, None) => {
            let value = wanted.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
            Some(quote!(#[serde(rename_all = #value)]))
        },
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #input
    })
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path` behind the `server` feature.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn existing_rename(input: &ItemStruct) -> syn::Result<Option<LitStr>> {
    let mut found = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                found = Some(meta.value()?.parse()?);
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(found)
}
