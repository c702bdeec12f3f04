//! oxide-ddl CLI
//!
//! Reads an attribute descriptor as JSON and prints its column definition.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use oxide_ddl::{AttributeDescriptor, Dialect, TableRef, TranslationContext, Translator};

/// Translate a column description into dialect-specific SQL.
#[derive(Parser, Debug)]
#[command(name = "oxide-ddl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target SQL dialect.
    #[arg(short, long, env = "OXIDE_DDL_DIALECT", default_value = "postgres")]
    dialect: Dialect,

    /// Statement the column definition is used in.
    #[arg(short, long, value_enum, default_value_t = ContextArg::CreateTable)]
    context: ContextArg,

    /// Table being created or altered.
    #[arg(short, long)]
    table: Option<String>,

    /// Schema of the table.
    #[arg(short, long, requires = "table")]
    schema: Option<String>,

    /// Column used by a named foreign key constraint.
    #[arg(long)]
    foreign_key: Option<String>,

    /// Explicit foreign key constraint name.
    #[arg(long)]
    constraint_name: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// JSON descriptor file (stdin if absent or `-`).
    input: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ContextArg {
    CreateTable,
    AddColumn,
    ChangeColumn,
}

impl Cli {
    fn translation_context(&self) -> TranslationContext {
        let mut context = match self.context {
            ContextArg::CreateTable => TranslationContext::create_table(),
            ContextArg::AddColumn => TranslationContext::add_column(),
            ContextArg::ChangeColumn => TranslationContext::change_column(),
        };
        if let Some(table) = &self.table {
            let table = match &self.schema {
                Some(schema) => TableRef::qualified(table.as_str(), schema.as_str()),
                None => TableRef::from(table.as_str()),
            };
            context = context.with_table(table);
        }
        if let Some(column) = &self.foreign_key {
            context = context.with_foreign_key(column.as_str());
        }
        if let Some(name) = &self.constraint_name {
            context = context.with_constraint_name(name.as_str());
        }
        context
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            _ => {
                let mut input = String::new();
                io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read stdin")?;
                Ok(input)
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = cli.read_input()?;
    let attribute: AttributeDescriptor =
        serde_json::from_str(&input).context("Invalid attribute descriptor")?;

    let fragment = Translator::new(cli.dialect)
        .translate(&attribute, &cli.translation_context())
        .with_context(|| format!("Failed to translate attribute for {}", cli.dialect))?;

    for part in fragment.fragments() {
        println!("{part}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_ddl::ContextKind;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["oxide-ddl"]).unwrap();
        assert_eq!(cli.dialect, Dialect::Postgres);
        assert_eq!(cli.context, ContextArg::CreateTable);
        assert!(cli.input.is_none());
        assert_eq!(cli.translation_context(), TranslationContext::default());
    }

    #[test]
    fn test_add_column_context() {
        let cli = Cli::try_parse_from([
            "oxide-ddl",
            "--dialect",
            "mysql",
            "--context",
            "add-column",
            "--table",
            "users",
            "--schema",
            "app",
            "--foreign-key",
            "owner_id",
            "attribute.json",
        ])
        .unwrap();
        assert_eq!(cli.dialect, Dialect::Mysql);
        let context = cli.translation_context();
        assert_eq!(context.kind, ContextKind::AddColumn);
        assert_eq!(context.table, Some(TableRef::qualified("users", "app")));
        assert_eq!(context.foreign_key.as_deref(), Some("owner_id"));
        assert_eq!(cli.input, Some(PathBuf::from("attribute.json")));
    }

    #[test]
    fn test_unknown_dialect_is_rejected() {
        assert!(Cli::try_parse_from(["oxide-ddl", "--dialect", "oracle"]).is_err());
    }

    #[test]
    fn test_schema_requires_table() {
        assert!(Cli::try_parse_from(["oxide-ddl", "--schema", "app"]).is_err());
    }
}
