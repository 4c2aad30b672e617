mod cli;
mod commands;
mod logging;

use cli::{CheckParams, ListParams, LookupParams, NameParams, build_cli, verbosity};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(verbosity(&matches));

    match matches.subcommand() {
        Some(("list", m)) => {
            let params = ListParams::from_matches(m);
            commands::list::run(params.into());
        }
        Some(("name", m)) => {
            let params = NameParams::from_matches(m);
            commands::name::run(params.into());
        }
        Some(("lookup", m)) => {
            let params = LookupParams::from_matches(m);
            commands::lookup::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
