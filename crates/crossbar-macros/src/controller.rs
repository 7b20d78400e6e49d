use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Ident, ImplItem, ItemImpl, LitStr, Path, Token, Type, parenthesized,
    parse::{Parse, ParseStream, Result},
    punctuated::Punctuated,
};

// ─── Input AST types ─────────────────────────────────────────────────────────

/// Parsed `#[controller(name = "...", create = path)]` arguments.
#[derive(Default)]
pub struct ControllerArgs {
    name: Option<LitStr>,
    create: Option<Path>,
}

impl Parse for ControllerArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = Self::default();
        while !input.is_empty() {
            while input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
            if input.is_empty() {
                break;
            }
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            match key.to_string().as_str() {
                "name" => args.name = Some(input.parse()?),
                "create" => args.create = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown controller key `{other}`; expected name or create"),
                    ));
                }
            }
        }
        Ok(args)
    }
}

/// Parsed `#[route("/path")]` / `#[route("/path", method(GET, POST))]`.
struct RouteArgs {
    path: LitStr,
    methods: Vec<Ident>,
}

impl Parse for RouteArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let path: LitStr = input.parse()?;

        let mut methods = Vec::new();
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if !input.is_empty() {
                let key: Ident = input.parse()?;
                if key != "method" {
                    return Err(syn::Error::new(key.span(), "expected `method(...)`"));
                }
                let content;
                parenthesized!(content in input);
                let idents: Punctuated<Ident, Token![,]> =
                    content.parse_terminated(Ident::parse, Token![,])?;
                methods = idents.into_iter().collect();
            }
        }

        // Tolerate one trailing comma after `method(...)`.
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after route arguments"));
        }

        Ok(Self { path, methods })
    }
}

// ─── Validation helpers ──────────────────────────────────────────────────────

/// Maps an uppercase method token to its `HttpMethod` variant ident.
fn method_variant(ident: &Ident) -> Result<Ident> {
    let variant = match ident.to_string().as_str() {
        "GET" => "Get",
        "HEAD" => "Head",
        "POST" => "Post",
        "PUT" => "Put",
        "PATCH" => "Patch",
        "DELETE" => "Delete",
        "OPTIONS" => "Options",
        "TRACE" => "Trace",
        other => {
            return Err(syn::Error::new(
                ident.span(),
                format!(
                    "unknown HTTP method `{other}`; expected GET, HEAD, POST, PUT, PATCH, \
                     DELETE, OPTIONS, or TRACE"
                ),
            ));
        }
    };
    Ok(Ident::new(variant, ident.span()))
}

/// Extracts the plain type name used for `stringify!`-based action names.
fn type_ident(ty: &Type) -> Result<Ident> {
    if let Type::Path(type_path) = ty {
        if type_path.qself.is_none() {
            if let Some(segment) = type_path.path.segments.last() {
                if segment.arguments.is_none() {
                    return Ok(segment.ident.clone());
                }
            }
        }
    }
    Err(syn::Error::new_spanned(
        ty,
        "#[controller] requires a plain, non-generic type name",
    ))
}

// ─── Code generation ─────────────────────────────────────────────────────────

pub fn expand(args: ControllerArgs, mut item: ItemImpl) -> Result<TokenStream> {
    if let Some((_, trait_path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            trait_path,
            "#[controller] goes on an inherent impl block, not a trait impl",
        ));
    }
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "#[controller] does not support generic controllers",
        ));
    }

    let self_ty = (*item.self_ty).clone();
    let type_ident = type_ident(&self_ty)?;

    // ── Collect routes, stripping `#[route]` markers from the impl ────────────
    let mut routes: Vec<(Ident, RouteArgs)> = Vec::new();
    for impl_item in &mut item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        let mut kept = Vec::new();
        for attr in method.attrs.drain(..) {
            if attr.path().is_ident("route") {
                routes.push((method.sig.ident.clone(), attr.parse_args()?));
            } else {
                kept.push(attr);
            }
        }
        method.attrs = kept;
    }

    let cb = quote! { ::crossbar };

    // ── Controller name: explicit override beats the type name ───────────────
    let name_tokens = match &args.name {
        Some(name) => quote! { #name },
        None => quote! { ::std::stringify!(#type_ident) },
    };

    // ── RouteEntry vec ────────────────────────────────────────────────────────
    let mut entry_tokens = Vec::new();
    for (method_ident, route) in &routes {
        let path = &route.path;
        let variants = route
            .methods
            .iter()
            .map(method_variant)
            .collect::<Result<Vec<_>>>()?;

        entry_tokens.push(quote! {
            #cb::framework::RouteEntry::new(
                #cb::core::RouteMetadata::new(
                    #path,
                    [ #( #cb::core::HttpMethod::#variants ),* ],
                ),
                #cb::framework::Action::new(
                    ::std::concat!(
                        ::std::stringify!(#type_ident), "::", ::std::stringify!(#method_ident)
                    ),
                    |controller, request| {
                        match #cb::framework::Controller::as_any(controller)
                            .downcast_ref::<#self_ty>()
                        {
                            ::std::option::Option::Some(this) => this.#method_ident(request),
                            ::std::option::Option::None => ::std::result::Result::Err(
                                ::std::concat!(
                                    "action `", ::std::stringify!(#method_ident),
                                    "` invoked on a foreign controller"
                                )
                                .into(),
                            ),
                        }
                    },
                ),
            )
        });
    }

    // ── Instantiation hook: named factory beats Default ───────────────────────
    let create_tokens = match &args.create {
        Some(factory) => quote! {
            fn create() -> ::std::result::Result<
                #cb::framework::ControllerRef,
                #cb::framework::BoxError,
            > {
                let controller: #cb::framework::ControllerRef =
                    ::std::sync::Arc::new(#factory()?);
                ::std::result::Result::Ok(controller)
            }
        },
        None => quote! {
            fn create() -> ::std::result::Result<
                #cb::framework::ControllerRef,
                #cb::framework::BoxError,
            > {
                let controller: #cb::framework::ControllerRef =
                    ::std::sync::Arc::new(<#self_ty as ::std::default::Default>::default());
                ::std::result::Result::Ok(controller)
            }
        },
    };

    Ok(quote! {
        #item

        impl #cb::framework::Controller for #self_ty {
            fn name(&self) -> &'static str {
                #name_tokens
            }

            fn handler_methods(&self) -> ::std::vec::Vec<#cb::framework::RouteEntry> {
                ::std::vec![ #( #entry_tokens ),* ]
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl #self_ty {
            /// Candidate descriptor for this controller, ready to hand to
            /// the registry builder.
            pub fn descriptor() -> #cb::framework::ControllerDescriptor {
                #create_tokens
                #cb::framework::ControllerDescriptor {
                    name: #name_tokens,
                    create,
                }
            }
        }
    })
}
