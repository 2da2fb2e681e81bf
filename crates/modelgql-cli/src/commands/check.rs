use anyhow::Result;
use modelgql_schema::SchemaBuilder;

use crate::cli::CheckArgs;
use crate::output::print_issues;

pub fn check(args: &CheckArgs) -> Result<()> {
    let registry = super::load_registry(&args.registry)?;

    let mut builder = SchemaBuilder::new(&registry);
    if !args.expose.is_empty() {
        builder = builder.expose(&args.expose);
    }

    let issues = builder.issues();
    print_issues(&issues);

    if !issues.is_empty() {
        anyhow::bail!("{} registry issue(s) found", issues.len());
    }
    Ok(())
}
