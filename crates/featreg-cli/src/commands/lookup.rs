use featreg::{Feature, FeatureError};

use super::suggest::suggest_feature;

pub struct LookupArgs {
    pub names: Vec<String>,
    pub exact: bool,
}

pub fn run(args: LookupArgs) {
    let mut failed = false;
    for name in &args.names {
        match resolve(name, args.exact) {
            Ok(feature) => println!("{:>3}  {}", feature.ordinal(), feature),
            Err(e) => {
                eprintln!("error: {e}");
                if let Some(suggestion) = suggest_feature(name) {
                    eprintln!();
                    eprintln!("Did you mean '{suggestion}'?");
                }
                failed = true;
            }
        }
    }

    if failed {
        eprintln!();
        eprintln!("Run 'featreg list' for the full list.");
        std::process::exit(1);
    }
}

/// Resolve one command-line name; `exact` requires the canonical spelling.
pub fn resolve(name: &str, exact: bool) -> Result<Feature, FeatureError> {
    let found = if exact {
        Feature::from_name(name)
    } else {
        Feature::from_name_ignore_case(name)
    };
    found.ok_or_else(|| FeatureError::UnknownName(name.to_owned()))
}
