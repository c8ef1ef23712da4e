//! Implementation of the `#[derive(Factorized)]` macro.
//!
//! The generated code refers to the runtime side of the factory through
//! `::functional_io::factory`, so the deriving crate must depend on
//! `functional_io` (the library itself re-exports its own name for that).

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, LitStr, Variant, parse_macro_input, parse_quote};

/// Main implementation of the Factorized derive macro.
pub fn derive_factorized_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let type_name = serialized_name(input)?;

    match &input.data {
        Data::Struct(data_struct) => Ok(generate_struct(
            &input.ident,
            &input.generics,
            &type_name,
            &data_struct.fields,
        )),
        Data::Enum(data_enum) => Ok(generate_enum(
            &input.ident,
            &input.generics,
            &type_name,
            &data_enum.variants.iter().collect::<Vec<_>>(),
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Factorized cannot be derived for unions.",
        )),
    }
}

/// Reads `#[factorized(name = "...")]`, falling back to the Rust identifier.
fn serialized_name(input: &DeriveInput) -> syn::Result<String> {
    let mut name = input.ident.to_string();

    for attribute in &input.attrs {
        if !attribute.path().is_ident("factorized") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                name = value.value();
                Ok(())
            } else {
                Err(meta.error("unsupported factorized attribute, expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(name)
}

/// Destructuring information for one field list.
struct Shape {
    field_names: Vec<String>,
    bindings: Vec<Ident>,
    pattern: TokenStream2,
}

fn shape_of(path: &TokenStream2, fields: &Fields) -> Shape {
    match fields {
        Fields::Named(named) => {
            let idents: Vec<&Ident> = named
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let bindings: Vec<Ident> = (0..idents.len())
                .map(|index| format_ident!("__field_{}", index))
                .collect();
            Shape {
                field_names: idents.iter().map(ToString::to_string).collect(),
                pattern: quote! { #path { #(#idents: #bindings),* } },
                bindings,
            }
        }
        Fields::Unnamed(unnamed) => {
            let bindings: Vec<Ident> = (0..unnamed.unnamed.len())
                .map(|index| format_ident!("__field_{}", index))
                .collect();
            Shape {
                field_names: (0..bindings.len()).map(|index| index.to_string()).collect(),
                pattern: quote! { #path ( #(#bindings),* ) },
                bindings,
            }
        }
        Fields::Unit => Shape {
            field_names: Vec::new(),
            bindings: Vec::new(),
            pattern: quote! { #path },
        },
    }
}

/// Adds `T: Debug` for every type parameter so `Display` can format fields.
fn display_generics(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let parameters: Vec<Ident> = generics
        .type_params()
        .map(|parameter| parameter.ident.clone())
        .collect();
    let where_clause = generics.make_where_clause();
    for parameter in parameters {
        where_clause
            .predicates
            .push(parse_quote!(#parameter: ::core::fmt::Debug));
    }
    generics
}

fn write_arm(shape: &Shape, type_name: &str, tag: Option<&str>) -> TokenStream2 {
    let pattern = &shape.pattern;
    let bindings = &shape.bindings;
    let tag = match tag {
        Some(tag) => quote! { ::core::option::Option::Some(#tag) },
        None => quote! { ::core::option::Option::None },
    };

    quote! {
        #pattern => ::functional_io::factory::write_instance(
            __formatter,
            #type_name,
            #tag,
            &[#(#bindings as &dyn ::core::fmt::Debug),*],
        )
    }
}

fn generate_struct(name: &Ident, generics: &Generics, type_name: &str, fields: &Fields) -> TokenStream2 {
    let shape = shape_of(&quote! { Self }, fields);
    let field_names = &shape.field_names;
    let arm = write_arm(&shape, type_name, None);

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let display = display_generics(generics);
    let (display_impl_generics, _, display_where_clause) = display.split_for_impl();

    quote! {
        #[automatically_derived]
        impl #impl_generics ::functional_io::factory::TypeRepresentation for #name #type_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const VARIANTS: &'static [&'static str] = &[];

            fn tag(&self) -> ::core::option::Option<&'static str> {
                ::core::option::Option::None
            }

            fn field_names(&self) -> &'static [&'static str] {
                &[#(#field_names),*]
            }
        }

        #[automatically_derived]
        impl #display_impl_generics ::core::fmt::Display for #name #type_generics #display_where_clause {
            fn fmt(&self, __formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    #arm
                }
            }
        }
    }
}

fn generate_enum(
    name: &Ident,
    generics: &Generics,
    type_name: &str,
    variants: &[&Variant],
) -> TokenStream2 {
    let tags: Vec<String> = variants.iter().map(|variant| variant.ident.to_string()).collect();
    let wildcards: Vec<TokenStream2> = variants
        .iter()
        .map(|variant| {
            let ident = &variant.ident;
            quote! { Self::#ident { .. } }
        })
        .collect();
    let shapes: Vec<Shape> = variants
        .iter()
        .map(|variant| {
            let ident = &variant.ident;
            shape_of(&quote! { Self::#ident }, &variant.fields)
        })
        .collect();
    let field_lists: Vec<TokenStream2> = shapes
        .iter()
        .map(|shape| {
            let field_names = &shape.field_names;
            quote! { &[#(#field_names),*] }
        })
        .collect();
    let write_arms: Vec<TokenStream2> = shapes
        .iter()
        .zip(&tags)
        .map(|(shape, tag)| write_arm(shape, type_name, Some(tag)))
        .collect();
    let predicates: Vec<TokenStream2> = variants
        .iter()
        .zip(&tags)
        .map(|(variant, tag)| generate_predicate(&variant.ident, tag))
        .collect();

    // `match self {}` is rejected for references to uninhabited enums.
    let scrutinee = if variants.is_empty() {
        quote! { *self }
    } else {
        quote! { self }
    };

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
    let display = display_generics(generics);
    let (display_impl_generics, _, display_where_clause) = display.split_for_impl();

    quote! {
        #[automatically_derived]
        impl #impl_generics ::functional_io::factory::TypeRepresentation for #name #type_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const VARIANTS: &'static [&'static str] = &[#(#tags),*];

            fn tag(&self) -> ::core::option::Option<&'static str> {
                match #scrutinee {
                    #(#wildcards => ::core::option::Option::Some(#tags),)*
                }
            }

            fn field_names(&self) -> &'static [&'static str] {
                match #scrutinee {
                    #(#wildcards => #field_lists,)*
                }
            }
        }

        #[automatically_derived]
        impl #display_impl_generics ::core::fmt::Display for #name #type_generics #display_where_clause {
            fn fmt(&self, __formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match #scrutinee {
                    #(#write_arms,)*
                }
            }
        }

        #[automatically_derived]
        impl #impl_generics #name #type_generics #where_clause {
            #(#predicates)*
        }
    }
}

fn generate_predicate(variant_name: &Ident, tag: &str) -> TokenStream2 {
    let method_name = format_ident!("is_{}", to_snake_case(tag));
    let documentation = format!("Returns `true` if this value is the `{tag}` variant.");

    quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub const fn #method_name(&self) -> bool {
            matches!(self, Self::#variant_name { .. })
        }
    }
}

/// Converts a `PascalCase` identifier to `snake_case`.
///
/// Runs of capitals are kept together: `HTTPRequest` becomes `http_request`.
fn to_snake_case(input: &str) -> String {
    let characters: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (index, &character) in characters.iter().enumerate() {
        if character.is_uppercase() {
            let starts_word = index > 0 && {
                let previous = characters[index - 1];
                let next_is_lowercase = characters
                    .get(index + 1)
                    .is_some_and(|next| next.is_lowercase());
                previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase)
            };
            if starts_word {
                result.push('_');
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
