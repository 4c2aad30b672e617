use featreg::feature_name_by_ordinal;

pub struct NameArgs {
    pub ordinals: Vec<usize>,
}

pub fn run(args: NameArgs) {
    let mut failed = false;
    for &ordinal in &args.ordinals {
        match feature_name_by_ordinal(ordinal) {
            Ok(name) => println!("{name}"),
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
