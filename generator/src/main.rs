mod cli;

use std::{error::Error, iter, process::ExitCode};

use clap::Parser;
use ifc_catalog::{input, Catalog, CatalogError, CatalogOptions, OutputPaths};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn run(cli: &cli::Cli) -> Result<(), CatalogError> {
    let mut options = CatalogOptions::with_prefix(&cli.prefix);
    if !cli.bases.is_empty() {
        options.allowed_bases = cli.bases.clone();
    }
    options.missing_enum = match cli.missing_enum {
        cli::MissingEnumAction::Deny => ifc_catalog::MissingEnumAction::Deny,
        cli::MissingEnumAction::Warn => ifc_catalog::MissingEnumAction::Warn,
    };

    let text = input::read_input(&cli.input)?;
    let document = input::parse_document(&text, cli.allow_dtd)?;
    let catalog = Catalog::build(&text, &document, &options)?;
    catalog.write(&OutputPaths::in_dir(&cli.out_dir))?;

    info!(
        roots = catalog.root_entities.len(),
        entities = catalog.entities.len(),
        "catalog generated"
    );
    Ok(())
}

/// Joins an error and all of its sources into one line.
fn error_chain(error: &(dyn Error + 'static)) -> String {
    iter::successors(Some(error), |&e| e.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_chain_includes_sources() {
        let error = CatalogError::Schema(ifc_xsd::XsdError::NoComplexTypes);
        assert_eq!(
            error_chain(&error),
            "invalid schema declaration: the schema does not declare any complex types"
        );
    }
}
