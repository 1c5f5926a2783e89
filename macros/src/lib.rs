use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate an input model for one color notation.
///
/// The struct must have exactly 3 named fields of type `ComponentValue`, one
/// for each component of the notation. An `opacity` field, a `new`
/// constructor taking anything convertible into a `ComponentValue` and an
/// implementation of `crate::models::Model` are added.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        }
        .into();
    }

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Model fields must be named.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.");
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Debug, Default, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    if let syn::Fields::Named(ref mut named) = input.fields {
        named.named.push(
            syn::Field::parse_named
                .parse2(quote! {
                    /// The opacity of the color. Fully opaque when missing.
                    pub opacity: crate::ComponentValue
                })
                .unwrap(),
        );
    }

    let struct_name = input.ident.clone();
    let model_name = struct_name.to_string().to_case(Case::Snake);

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new fully opaque model from its three components.
            pub fn new(
                #field1: impl Into<crate::ComponentValue>,
                #field2: impl Into<crate::ComponentValue>,
                #field3: impl Into<crate::ComponentValue>,
            ) -> Self {
                Self {
                    #field1: #field1.into(),
                    #field2: #field2.into(),
                    #field3: #field3.into(),
                    opacity: crate::ComponentValue::None,
                }
            }

            /// Return this model with the given opacity.
            pub fn with_opacity(mut self, opacity: impl Into<crate::ComponentValue>) -> Self {
                self.opacity = opacity.into();
                self
            }

            /// Returns true when none of the three components are missing.
            pub fn is_complete(&self) -> bool {
                !self.#field1.is_none() && !self.#field2.is_none() && !self.#field3.is_none()
            }
        }

        impl crate::models::Model for #struct_name {
            const NAME: &'static str = #model_name;

            fn components(&self) -> [&crate::ComponentValue; 3] {
                [&self.#field1, &self.#field2, &self.#field3]
            }

            fn opacity(&self) -> &crate::ComponentValue {
                &self.opacity
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
