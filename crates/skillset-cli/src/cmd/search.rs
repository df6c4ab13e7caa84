use crate::output::{print_json, print_table};
use skillset_core::catalog::Catalog;

pub fn run(query: &str, json: bool) -> anyhow::Result<()> {
    let hits = Catalog::builtin().search(query);

    if json {
        print_json(&hits)?;
        return Ok(());
    }

    if hits.is_empty() {
        println!("No skills matching '{query}'");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = hits
        .iter()
        .map(|s| vec![s.id.clone(), s.domain.clone(), s.name.clone()])
        .collect();
    print_table(&["ID", "DOMAIN", "NAME"], rows);
    Ok(())
}
