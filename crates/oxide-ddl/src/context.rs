//! Translation context and output fragments.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::TableRef;

/// The statement a column definition is rendered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContextKind {
    /// Column inside `CREATE TABLE`.
    #[default]
    CreateTable,
    /// `ALTER TABLE ... ADD COLUMN`.
    AddColumn,
    /// `ALTER TABLE ... ALTER COLUMN`.
    ChangeColumn,
}

/// Where a column definition will be used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationContext {
    /// Statement kind.
    #[serde(default)]
    pub kind: ContextKind,
    /// Table being created or altered.
    #[serde(default)]
    pub table: Option<TableRef>,
    /// Column name used by a named foreign key constraint.
    #[serde(default)]
    pub foreign_key: Option<String>,
    /// Explicit foreign key constraint name.
    #[serde(default)]
    pub constraint_name: Option<String>,
}

impl TranslationContext {
    /// Context for a `CREATE TABLE` column.
    #[must_use]
    pub fn create_table() -> Self {
        Self::default()
    }

    /// Context for `ALTER TABLE ... ADD COLUMN`.
    #[must_use]
    pub fn add_column() -> Self {
        Self {
            kind: ContextKind::AddColumn,
            ..Self::default()
        }
    }

    /// Context for `ALTER TABLE ... ALTER COLUMN`.
    #[must_use]
    pub fn change_column() -> Self {
        Self {
            kind: ContextKind::ChangeColumn,
            ..Self::default()
        }
    }

    /// Sets the table being created or altered.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<TableRef>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the foreign key column name.
    #[must_use]
    pub fn with_foreign_key(mut self, column: impl Into<String>) -> Self {
        self.foreign_key = Some(column.into());
        self
    }

    /// Sets an explicit constraint name.
    #[must_use]
    pub fn with_constraint_name(mut self, name: impl Into<String>) -> Self {
        self.constraint_name = Some(name.into());
        self
    }

    /// Whether this is an `ADD COLUMN` context.
    #[must_use]
    pub const fn is_add_column(&self) -> bool {
        matches!(self.kind, ContextKind::AddColumn)
    }

    /// Whether this is an `ALTER COLUMN` context.
    #[must_use]
    pub const fn is_change_column(&self) -> bool {
        matches!(self.kind, ContextKind::ChangeColumn)
    }
}

/// Output of a translation.
///
/// Most definitions are a single string. A sequence holds sub-clauses
/// the caller issues separately (one statement each), in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fragment {
    /// A single definition.
    Single(String),
    /// Ordered sub-clauses.
    Sequence(Vec<String>),
}

impl Fragment {
    /// Creates a single-string fragment.
    #[must_use]
    pub fn single(sql: impl Into<String>) -> Self {
        Self::Single(sql.into())
    }

    /// Returns the parts in order.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        match self {
            Self::Single(sql) => core::slice::from_ref(sql),
            Self::Sequence(parts) => parts,
        }
    }

    /// Collapses a one-element sequence into a single fragment.
    pub(crate) fn from_parts(mut parts: Vec<String>) -> Self {
        if parts.len() == 1 {
            Self::Single(parts.remove(0))
        } else {
            Self::Sequence(parts)
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragments().join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builders() {
        let context = TranslationContext::add_column()
            .with_table(TableRef::qualified("users", "app"))
            .with_foreign_key("owner_id")
            .with_constraint_name("users_owner_fk");
        assert!(context.is_add_column());
        assert!(!context.is_change_column());
        assert_eq!(context.table.as_ref().map(TableRef::table_name), Some("users"));
        assert_eq!(context.foreign_key.as_deref(), Some("owner_id"));
        assert_eq!(TranslationContext::default().kind, ContextKind::CreateTable);
    }

    #[test]
    fn test_fragment_display() {
        assert_eq!(Fragment::single("INTEGER").to_string(), "INTEGER");
        let sequence = Fragment::Sequence(vec!["DATA TYPE INTEGER".into(), "NOT NULL".into()]);
        assert_eq!(sequence.to_string(), "DATA TYPE INTEGER; NOT NULL");
        assert_eq!(sequence.fragments().len(), 2);
    }

    #[test]
    fn test_from_parts_collapses_single() {
        assert_eq!(
            Fragment::from_parts(vec!["INTEGER".into()]),
            Fragment::single("INTEGER")
        );
    }
}
