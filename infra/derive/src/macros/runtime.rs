use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, ItemFn, ReturnType, Type};

/// Expands `#[pantry_runtime::main]`.
pub fn expand_main(args: TokenStream, input: ItemFn) -> syn::Result<TokenStream> {
    if input.sig.asyncness.is_none() {
        return Err(Error::new_spanned(
            input.sig.fn_token,
            "#[pantry_runtime::main] requires an `async fn`",
        ));
    }
    if !returns_result(&input.sig.output) {
        return Err(Error::new_spanned(
            &input.sig.output,
            "#[pantry_runtime::main] requires a `Result` return type",
        ));
    }

    let profile = profile_tokens(args)?;
    let ItemFn { attrs, vis, sig, block } = input;
    let (name, output) = (&sig.ident, &sig.output);

    Ok(quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let runtime = ::pantry_runtime::build_runtime(&::pantry_runtime::RuntimeConfig::from_profile(#profile))?;
            runtime.block_on(async move #block)
        }
    })
}

fn profile_tokens(args: TokenStream) -> syn::Result<TokenStream> {
    if args.is_empty() {
        return Ok(quote!(::pantry_runtime::RuntimeProfile::Default));
    }

    let ident: syn::Ident = syn::parse2(args)?;
    let variant = match ident.to_string().as_str() {
        "default" => quote!(Default),
        "high_performance" => quote!(HighPerformance),
        "memory_efficient" => quote!(MemoryEfficient),
        _ => {
            return Err(Error::new_spanned(
                ident,
                "unknown runtime profile; use `high_performance`, `memory_efficient` or `default`",
            ));
        },
    };
    Ok(quote!(::pantry_runtime::RuntimeProfile::#variant))
}

fn returns_result(output: &ReturnType) -> bool {
    match output {
        ReturnType::Type(_, ty) => match ty.as_ref() {
            Type::Path(path) => path.path.segments.last().is_some_and(|s| s.ident == "Result"),
            _ => false,
        },
        ReturnType::Default => false,
    }
}
