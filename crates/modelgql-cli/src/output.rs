use colored::Colorize;
use modelgql_schema::RegistryIssue;
use tabled::builder::Builder;
use tabled::settings::Style;

pub fn print_success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn print_issues(issues: &[RegistryIssue]) {
    if issues.is_empty() {
        print_success("Registry is consistent");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["Kind", "Entity", "Detail"]);
    for issue in issues {
        let (kind, entity) = describe(issue);
        builder.push_record([kind.to_string(), entity.to_string(), issue.to_string()]);
    }
    let table = builder.build().with(Style::rounded()).to_string();
    println!("{table}");
    println!("{}: {}", "Issues".yellow(), issues.len());
}

fn describe(issue: &RegistryIssue) -> (&'static str, &str) {
    match issue {
        RegistryIssue::MissingPrimaryKey { entity } => ("missing-primary-key", entity.as_str()),
        RegistryIssue::MultiplePrimaryKeys { entity, .. } => {
            ("multiple-primary-keys", entity.as_str())
        }
        RegistryIssue::UnresolvedAssociation { entity, .. } => {
            ("unresolved-association", entity.as_str())
        }
        RegistryIssue::DuplicateField { entity, .. } => ("duplicate-field", entity.as_str()),
        RegistryIssue::UnknownEntity { entity } => ("unknown-entity", entity.as_str()),
    }
}
