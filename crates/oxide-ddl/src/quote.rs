//! Identifier and table-name quoting.

use crate::descriptor::TableRef;
use crate::dialect::{DialectProfile, QuotePair, SchemaStyle};
use crate::error::{Result, TranslateError};

impl DialectProfile {
    /// Quotes an identifier, doubling any embedded closing quote.
    #[must_use]
    pub fn quote_identifier(&self, name: &str) -> String {
        let QuotePair { open, close } = self.identifier_quote;
        let mut sql = String::with_capacity(name.len() + 2);
        sql.push(open);
        for ch in name.chars() {
            if ch == close {
                sql.push(close);
            }
            sql.push(ch);
        }
        sql.push(close);
        sql
    }

    /// Quotes an identifier that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::InvalidIdentifier`] when `name` is absent.
    pub fn require_identifier(&self, name: Option<&str>, usage: &'static str) -> Result<String> {
        name.map(|name| self.quote_identifier(name))
            .ok_or_else(|| TranslateError::invalid_identifier(usage, name))
    }

    /// Quotes a possibly schema-qualified table name.
    #[must_use]
    pub fn quote_table(&self, table: &TableRef) -> String {
        match table.schema() {
            None => self.quote_identifier(table.table_name()),
            Some(schema) => match self.schemas {
                SchemaStyle::Native => format!(
                    "{}.{}",
                    self.quote_identifier(schema),
                    self.quote_identifier(table.table_name())
                ),
                SchemaStyle::Flattened => {
                    self.quote_identifier(&format!("{schema}.{}", table.table_name()))
                }
            },
        }
    }
}
