//! `#[derive(Prisms)]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_enum_prisms(
            &input.ident,
            &input.generics,
            data_enum.variants.iter(),
        ),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_methods = variants.map(generate_variant_prism);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// How a variant's payload is matched, rebuilt and typed as a focus.
struct VariantShape {
    focus: TokenStream2,
    pattern: TokenStream2,
    extract: TokenStream2,
    rebuild: TokenStream2,
}

fn variant_shape(variant: &Variant) -> VariantShape {
    let variant_name = &variant.ident;

    match &variant.fields {
        Fields::Unit => VariantShape {
            focus: quote! { () },
            pattern: quote! { Self::#variant_name },
            extract: quote! { () },
            rebuild: quote! { |(): ()| Self::#variant_name },
        },
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            VariantShape {
                focus: quote! { #field_type },
                pattern: quote! { Self::#variant_name(value) },
                extract: quote! { ::core::clone::Clone::clone(value) },
                rebuild: quote! { |value: #field_type| Self::#variant_name(value) },
            }
        }
        Fields::Unnamed(fields) => {
            let field_types: Vec<&Type> = fields.unnamed.iter().map(|field| &field.ty).collect();
            let bindings: Vec<Ident> = (0..field_types.len())
                .map(|index| format_ident!("v{}", index))
                .collect();
            VariantShape {
                focus: quote! { (#(#field_types),*) },
                pattern: quote! { Self::#variant_name(#(#bindings),*) },
                extract: quote! { (#(::core::clone::Clone::clone(#bindings)),*) },
                rebuild: quote! {
                    |(#(#bindings),*): (#(#field_types),*)| Self::#variant_name(#(#bindings),*)
                },
            }
        }
        Fields::Named(fields) => {
            let field_names: Vec<&Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let field_types: Vec<&Type> = fields.named.iter().map(|field| &field.ty).collect();
            if field_names.len() == 1 {
                let field_name = field_names[0];
                let field_type = field_types[0];
                return VariantShape {
                    focus: quote! { #field_type },
                    pattern: quote! { Self::#variant_name { #field_name } },
                    extract: quote! { ::core::clone::Clone::clone(#field_name) },
                    rebuild: quote! {
                        |#field_name: #field_type| Self::#variant_name { #field_name }
                    },
                };
            }
            VariantShape {
                focus: quote! { (#(#field_types),*) },
                pattern: quote! { Self::#variant_name { #(#field_names),* } },
                extract: quote! { (#(::core::clone::Clone::clone(#field_names)),*) },
                rebuild: quote! {
                    |(#(#field_names),*): (#(#field_types),*)| {
                        Self::#variant_name { #(#field_names),* }
                    }
                },
            }
        }
    }
}

fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let doc = format!("Returns a prism focusing on the `{variant_name}` variant.");
    let VariantShape {
        focus,
        pattern,
        extract,
        rebuild,
    } = variant_shape(variant);

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optica::optics::Prism<Self, #focus> + ::core::clone::Clone
        where
            #focus: ::core::clone::Clone,
        {
            ::optica::optics::FunctionPrism::new(
                |source: &Self| match source {
                    #pattern => ::core::option::Option::Some(#extract),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                #rebuild,
            )
        }
    }
}

/// Converts a `PascalCase` variant name to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous = chars[index - 1];
                let next_is_lowercase =
                    chars.get(index + 1).is_some_and(|next| next.is_lowercase());

                // "KeyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous.is_lowercase()
                    || previous.is_ascii_digit()
                    || (previous.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Circle", "circle")]
    #[case("KeyPress", "key_press")]
    #[case("MouseClick", "mouse_click")]
    #[case("none", "none")]
    #[case("HTTPRequest", "http_request")]
    #[case("XMLParser", "xml_parser")]
    #[case("A", "a")]
    #[case("Utf8Error", "utf8_error")]
    fn to_snake_case_converts_variant_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[test]
    fn every_variant_shape_gets_a_prism() {
        let input: DeriveInput = syn::parse_quote! {
            enum Event {
                Quit,
                KeyPress(char),
                Resize(u32, u32),
                Click { x: i32, y: i32 },
            }
        };
        let Data::Enum(data) = &input.data else {
            unreachable!()
        };

        let expanded =
            generate_enum_prisms(&input.ident, &input.generics, data.variants.iter()).to_string();
        for method in ["quit_prism", "key_press_prism", "resize_prism", "click_prism"] {
            assert!(expanded.contains(method), "missing {method}");
        }
    }

    #[test]
    fn multi_field_variants_focus_on_tuples() {
        let variant: Variant = syn::parse_quote! { Resize(u32, u64) };
        let shape = variant_shape(&variant);
        assert_eq!(shape.focus.to_string(), quote! { (u32, u64) }.to_string());
    }

    #[test]
    fn single_named_field_focuses_on_the_field() {
        let variant: Variant = syn::parse_quote! { Named { label: String } };
        let shape = variant_shape(&variant);
        assert_eq!(shape.focus.to_string(), quote! { String }.to_string());
    }
}
