use super::has_derive;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Type, Variant};

const NAMED_FIELDS_ONLY: &str = "pantry_error variants must use named fields (`Variant { .. }`)";

/// What the expansion needs to know about a single enum variant.
struct ErrorVariant {
    ident: Ident,
    cfg: Vec<Attribute>,
    source: Option<(Ident, Type)>,
    has_context: bool,
    has_message: bool,
}

impl ErrorVariant {
    fn parse(variant: &Variant) -> syn::Result<Self> {
        let fields = match &variant.fields {
            Fields::Named(fields) => fields,
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new_spanned(unnamed, NAMED_FIELDS_ONLY));
            },
            Fields::Unit => return Err(syn::Error::new_spanned(&variant.ident, NAMED_FIELDS_ONLY)),
        };

        let mut has_context = false;
        let mut has_message = false;
        let mut source = None;

        for field in &fields.named {
            let Some(name) = &field.ident else { continue };
            if name == "context" {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "`context` must be `Option<Cow<'static, str>>`",
                    ));
                }
                has_context = true;
            } else if name == "message" {
                has_message = true;
            } else if name == "source" || marked_source(field) {
                source = Some((name.clone(), field.ty.clone()));
            }
        }

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "variants with a source need `context: Option<Cow<'static, str>>`",
            ));
        }

        Ok(Self {
            ident: variant.ident.clone(),
            cfg: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).cloned().collect(),
            source,
            has_context,
            has_message,
        })
    }
}

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "pantry_error only supports enums"));
    };

    let variants = data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;

    let name = &input.ident;
    let ext = format_ident!("{name}Ext");

    let mut derives = Vec::new();
    if !has_derive(&input.attrs, "Debug") {
        derives.push(quote!(Debug));
    }
    if !has_derive(&input.attrs, "Error") {
        derives.push(quote!(::thiserror::Error));
    }
    let derive_attr = (!derives.is_empty()).then(|| quote!(#[derive(#(#derives),*)]));

    let context_arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let (ident, cfg) = (&v.ident, &v.cfg);
        quote!(#(#cfg)* #name::#ident { context, .. } => *context = Some(ctx.into()),)
    });

    let source_impls = variants.iter().filter(|v| v.ident != "Internal").filter_map(|v| {
        let (field, ty) = v.source.as_ref()?;
        let (ident, cfg) = (&v.ident, &v.cfg);
        Some(quote! {
            #(#cfg)*
            #[automatically_derived]
            impl ::core::convert::From<#ty> for #name {
                #[inline]
                fn from(#field: #ty) -> Self {
                    Self::#ident { #field, context: None }
                }
            }

            #(#cfg)*
            #[automatically_derived]
            impl<T> #ext<T> for ::core::result::Result<T, #ty> {
                #[inline]
                fn context(
                    self,
                    ctx: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::core::result::Result<T, #name> {
                    self.map_err(|#field| #name::#ident { #field, context: Some(ctx.into()) })
                }
            }
        })
    });

    let internal_impls = variants
        .iter()
        .find(|v| v.ident == "Internal" && v.has_message && v.has_context)
        .map(|v| {
            let cfg = &v.cfg;
            quote! {
                #(#cfg)*
                impl ::core::convert::From<&'static str> for #name {
                    #[inline]
                    fn from(message: &'static str) -> Self {
                        Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
                    }
                }

                #(#cfg)*
                impl ::core::convert::From<String> for #name {
                    #[inline]
                    fn from(message: String) -> Self {
                        Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
                    }
                }
            }
        });

    Ok(quote! {
        #derive_attr
        #input

        /// Attaches a human readable context to a failed result.
        pub trait #ext<T> {
            /// Converts the error into the crate error and records `ctx` on it.
            ///
            /// # Errors
            /// Returns the original failure, annotated with `ctx`.
            fn context(
                self,
                ctx: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #name> {
            #[inline]
            fn context(self, ctx: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    #[allow(unreachable_patterns)]
                    match &mut err {
                        #(#context_arms)*
                        _ => {}
                    }
                    err
                })
            }
        }

        #(#source_impls)*
        #internal_impls

        #[allow(dead_code, clippy::ref_option)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            match context {
                Some(ctx) => ::std::borrow::Cow::Owned(format!(" ({ctx})")),
                None => ::std::borrow::Cow::Borrowed(""),
            }
        }
    })
}

fn marked_source(field: &Field) -> bool {
    field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
}

/// Accepts `Option<Cow<'static, str>>` with any path prefix on `Option`/`Cow`.
fn is_context_type(ty: &Type) -> bool {
    let rendered: String = quote!(#ty).to_string().chars().filter(|c| !c.is_whitespace()).collect();
    let Some(inner) = rendered.strip_prefix("Option<").or_else(|| {
        rendered.strip_prefix("std::option::Option<").or_else(|| rendered.strip_prefix("core::option::Option<"))
    }) else {
        return false;
    };
    inner.ends_with("Cow<'static,str>>")
        && matches!(
            inner.trim_end_matches("Cow<'static,str>>"),
            "" | "std::borrow::" | "::std::borrow::" | "alloc::borrow::"
        )
}
