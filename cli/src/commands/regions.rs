use anyhow::Result;
use choromap::{clean_name, RegionProfile};

use super::load_country;

/// Print `name<TAB>key`, flagging names that an alias rewrote.
pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RegionsArgs) -> Result<()> {
    let config = cli.load_config()?;
    let map = load_country(&config, &args.country, &args.geo)?;
    let profile = map.profile();

    let choromap::MapState::Ready(collection) = map.state() else { return Ok(()) };
    for feature in collection.iter() {
        let Some(name) = feature.name.as_deref() else {
            println!("(unnamed)");
            continue;
        };
        let key = profile.normalize_name(name);
        if key == clean_name(name) {
            println!("{name}\t{key}");
        } else {
            println!("{name}\t{key}\t(alias)");
        }
    }

    Ok(())
}
