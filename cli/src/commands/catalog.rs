use anyhow::Result;
use choromap::{build_registry, ChartCategory, ChartTypeInfo, VariableKind};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::CatalogArgs) -> Result<()> {
    let registry = build_registry();

    let kinds = args.recommend.iter()
        .map(|kind| kind.parse::<VariableKind>())
        .collect::<Result<Vec<_>>>()?;

    let infos: Vec<&ChartTypeInfo> = if kinds.is_empty() {
        registry.catalog().iter().collect()
    } else {
        registry.recommend(&kinds)
    };
    let infos: Vec<&ChartTypeInfo> = infos.into_iter()
        .filter(|info| !args.geo || info.category == ChartCategory::Geo)
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for info in infos {
        let drawable = if registry.get(&info.id).is_some() { "*" } else { " " };
        println!("{drawable} {:<28} {}", info.id, info.name);
    }

    Ok(())
}
