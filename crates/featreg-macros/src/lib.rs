use proc_macro::TokenStream;
use proc_macro2::Span;

use featreg_core::{Catalog, FEATURE_FILES_ENV};

mod codegen;


/// Generate the `Feature` enum and its static tables.
///
/// Usage: `generate_feature_table!()`
///
/// Reads every data file listed in `FEATREG_FEATURE_FILES` (set by the
/// registry's build.rs), merges them into a [`Catalog`] and emits:
/// - `pub enum Feature` with one `u16`-discriminant variant per feature
/// - `static FEATURE_INFOS: [FeatureInfo; N]`, indexed by ordinal
/// - `Feature::COUNT` and `Feature::ALL`
///
/// `FeatureInfo` must be in scope at the call site. Catalog problems are
/// reported as compile errors.
#[proc_macro]
pub fn generate_feature_table(input: TokenStream) -> TokenStream {
    if !input.is_empty() {
        return syn::Error::new(Span::call_site(), "generate_feature_table! takes no arguments")
            .to_compile_error()
            .into();
    }

    match load_catalog() {
        Ok(catalog) => codegen::feature_table_tokens(&catalog).into(),
        Err(msg) => syn::Error::new(Span::call_site(), msg).to_compile_error().into(),
    }
}

fn load_catalog() -> Result<Catalog, String> {
    let files = std::env::var_os(FEATURE_FILES_ENV).ok_or_else(|| {
        format!("Environment variable {FEATURE_FILES_ENV} not set. Is build.rs configured correctly?")
    })?;

    let paths: Vec<_> = std::env::split_paths(&files).collect();
    if paths.is_empty() {
        return Err(format!("{FEATURE_FILES_ENV} lists no feature files"));
    }

    Catalog::from_paths(&paths).map_err(|e| format!("failed to build feature table: {e}"))
}
