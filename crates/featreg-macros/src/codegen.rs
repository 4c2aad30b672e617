use proc_macro2::{Span, TokenStream};
use quote::quote;

use featreg_core::{Catalog, FeatureSpec};

/// Token output of `generate_feature_table!` for an already built catalog.
pub(crate) fn feature_table_tokens(catalog: &Catalog) -> TokenStream {
    let count = catalog.len();

    let idents: Vec<syn::Ident> = catalog
        .iter()
        .map(|spec| syn::Ident::new(&spec.ident, Span::call_site()))
        .collect();

    let variants = idents.iter().zip(catalog.iter()).enumerate().map(|(ordinal, (ident, spec))| {
        // Catalog::build caps the count at u16::MAX + 1.
        let discriminant = ordinal as u16;
        let doc = variant_doc(spec);
        quote! {
            #[doc = #doc]
            #ident = #discriminant
        }
    });

    let infos = catalog.iter().map(info_tokens);

    quote! {
        /// Closed set of feature toggles, in case-insensitive name order.
        ///
        /// The discriminant is the feature's ordinal.
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[repr(u16)]
        pub enum Feature {
            #(#variants),*
        }

        static FEATURE_INFOS: [FeatureInfo; #count] = [
            #(#infos),*
        ];

        impl Feature {
            /// Number of features; one past the highest ordinal.
            pub const COUNT: usize = #count;

            /// Every feature, indexed by ordinal.
            pub const ALL: [Feature; #count] = [
                #(Feature::#idents),*
            ];
        }
    }
}

fn info_tokens(spec: &FeatureSpec) -> TokenStream {
    let name = &spec.ident;
    let source_name = &spec.source_name;
    let description = &spec.description;
    let category = option_tokens(spec.category.as_deref());
    let bug = option_tokens(spec.bug.as_deref());

    quote! {
        FeatureInfo {
            name: #name,
            source_name: #source_name,
            category: #category,
            description: #description,
            bug: #bug,
        }
    }
}

fn option_tokens(value: Option<&str>) -> TokenStream {
    match value {
        Some(v) => quote! { Some(#v) },
        None => quote! { None },
    }
}

fn variant_doc(spec: &FeatureSpec) -> String {
    if spec.description.is_empty() {
        format!("`{}`", spec.source_name)
    } else {
        spec.description.clone()
    }
}
