//! Attribute-to-SQL translation.
//!
//! A column definition is assembled clause by clause in a fixed order:
//!
//! 1. type (with enum `CHECK` emulation)
//! 2. position (`FIRST` / `AFTER`)
//! 3. nullability
//! 4. autoincrement
//! 5. `UNIQUE`, `PRIMARY KEY`
//! 6. `DEFAULT`
//! 7. comment
//! 8. foreign key
//!
//! Clauses a dialect cannot express are skipped and reported at `debug`
//! level. Skipping never reorders the remaining clauses.

use tracing::debug;

use crate::context::{Fragment, TranslationContext};
use crate::descriptor::{AttributeDescriptor, DefaultValue};
use crate::dialect::{
    AlterColumnStyle, AutoIncrementStyle, CommentStyle, Dialect, DialectProfile, EnumStyle,
    NullPolicy,
};
use crate::error::Result;
use crate::literal::{encode_default, quote_string};
use crate::reference::build_reference;
use crate::types::DataType;

/// Translates one attribute into a column definition for `profile`.
///
/// # Errors
///
/// Returns [`crate::TranslateError::InvalidIdentifier`] when the dialect
/// emulates an enum with a `CHECK` constraint and the attribute has
/// neither a `field` nor a `key`.
pub fn translate(
    attribute: &AttributeDescriptor,
    context: &TranslationContext,
    profile: &DialectProfile,
) -> Result<Fragment> {
    let mut sql = String::new();
    let mut trailing = Vec::new();
    let alter_style = if context.is_change_column() {
        profile.alter_column
    } else {
        AlterColumnStyle::Inline
    };

    let default = attribute
        .default_value
        .as_ref()
        .and_then(|value| encode_default_clause(value, attribute, profile));

    let checked_enum = push_type(&mut sql, attribute, alter_style, profile)?;
    push_position(&mut sql, attribute, profile);

    match alter_style {
        AlterColumnStyle::DataType => {
            if let Some(allow_null) = attribute.allow_null {
                let clause = if allow_null { "DROP NOT NULL" } else { "NOT NULL" };
                trailing.push(String::from(clause));
            }
        }
        AlterColumnStyle::Clauses => match attribute.allow_null {
            Some(true) => sql.push_str(" DROP NOT NULL"),
            Some(false) => sql.push_str(" NOT NULL"),
            None => {}
        },
        AlterColumnStyle::Inline => {
            push_nullability(&mut sql, attribute, checked_enum, default.is_some(), profile);
        }
    }

    if attribute.auto_increment {
        push_auto_increment(&mut sql, attribute, profile);
    }
    push_keys(&mut sql, attribute, context, profile);

    if let Some(literal) = default {
        sql.push_str(" DEFAULT ");
        sql.push_str(&literal);
    }

    if let Some(statement) = push_comment(&mut sql, attribute, context, profile) {
        trailing.push(statement);
    }

    if let Some(clause) = build_reference(attribute, context, profile)? {
        sql.push_str(&clause);
    }

    let mut parts = Vec::with_capacity(trailing.len() + 1);
    parts.push(sql);
    parts.extend(trailing);
    let fragment = Fragment::from_parts(parts);
    debug!(dialect = %profile.dialect, sql = %fragment, "Translated attribute");
    Ok(fragment)
}

fn encode_default_clause(
    value: &DefaultValue,
    attribute: &AttributeDescriptor,
    profile: &DialectProfile,
) -> Option<String> {
    let literal = encode_default(value, &attribute.data_type, profile);
    if literal.is_none() {
        debug!(
            dialect = %profile.dialect,
            clause = "DEFAULT",
            data_type = %attribute.data_type.to_sql(profile),
            "Default value not supported for column type"
        );
    }
    literal
}

/// Writes the base type. Returns whether the type is an enum emulated
/// with a `CHECK` constraint.
fn push_type(
    sql: &mut String,
    attribute: &AttributeDescriptor,
    alter_style: AlterColumnStyle,
    profile: &DialectProfile,
) -> Result<bool> {
    if alter_style == AlterColumnStyle::DataType {
        sql.push_str("DATA TYPE ");
    }
    sql.push_str(&attribute.data_type.to_sql(profile));

    let (DataType::Enum(values), EnumStyle::Check(_)) = (&attribute.data_type, profile.enums)
    else {
        return Ok(false);
    };
    let column = profile.require_identifier(attribute.column_name(), "CHECK constraint")?;
    let keyword = if alter_style == AlterColumnStyle::Clauses {
        "ADD CHECK"
    } else {
        "CHECK"
    };
    let values: Vec<String> = values.iter().map(|v| quote_string(v, profile)).collect();
    sql.push_str(&format!(" {keyword} ({column} IN({}))", values.join(", ")));
    Ok(true)
}

fn push_position(sql: &mut String, attribute: &AttributeDescriptor, profile: &DialectProfile) {
    if !attribute.first && attribute.after.is_none() {
        return;
    }
    if !profile.positional_columns {
        debug!(
            dialect = %profile.dialect,
            clause = "FIRST/AFTER",
            "Column positioning not supported"
        );
        return;
    }
    if attribute.first {
        sql.push_str(" FIRST");
    } else if let Some(after) = &attribute.after {
        sql.push_str(" AFTER ");
        sql.push_str(&profile.quote_identifier(after));
    }
}

fn push_nullability(
    sql: &mut String,
    attribute: &AttributeDescriptor,
    checked_enum: bool,
    has_default: bool,
    profile: &DialectProfile,
) {
    let not_null = attribute.allow_null == Some(false);
    match profile.null_policy {
        NullPolicy::Implicit => {
            if not_null {
                sql.push_str(" NOT NULL");
            }
        }
        NullPolicy::Explicit => {
            if not_null {
                sql.push_str(" NOT NULL");
            } else if !attribute.primary_key && !has_default && !checked_enum {
                sql.push_str(" NULL");
            }
        }
        NullPolicy::PrimaryKeyNotNull => {
            if not_null || attribute.primary_key {
                sql.push_str(" NOT NULL");
            }
        }
    }
}

fn push_auto_increment(
    sql: &mut String,
    attribute: &AttributeDescriptor,
    profile: &DialectProfile,
) {
    match profile.auto_increment {
        AutoIncrementStyle::Keyword(keyword) => {
            sql.push(' ');
            sql.push_str(keyword);
        }
        AutoIncrementStyle::PrimaryKeyKeyword(keyword) => {
            if attribute.primary_key {
                sql.push(' ');
                sql.push_str(keyword);
            } else {
                debug!(
                    dialect = %profile.dialect,
                    clause = keyword,
                    "Autoincrement requires a primary key"
                );
            }
        }
        AutoIncrementStyle::Serial => {
            if attribute.auto_increment_identity {
                sql.push_str(" GENERATED BY DEFAULT AS IDENTITY");
            } else {
                sql.push_str(" SERIAL");
            }
        }
        AutoIncrementStyle::Identity => sql.push_str(" IDENTITY(1,1)"),
        AutoIncrementStyle::Generated {
            honors_initial,
            spaced,
        } => {
            let start = if honors_initial {
                attribute.initial_auto_increment.unwrap_or(1)
            } else {
                1
            };
            let gap = if spaced { " " } else { "" };
            sql.push_str(&format!(
                " GENERATED BY DEFAULT AS IDENTITY{gap}(START WITH {start}, INCREMENT BY 1)"
            ));
        }
    }
}

fn push_keys(
    sql: &mut String,
    attribute: &AttributeDescriptor,
    context: &TranslationContext,
    profile: &DialectProfile,
) {
    if attribute.unique {
        if context.is_change_column() && !profile.alter_column_unique {
            debug!(
                dialect = %profile.dialect,
                clause = "UNIQUE",
                "Uniqueness cannot be changed while altering a column"
            );
        } else if attribute.auto_increment
            && attribute.primary_key
            && !profile.unique_on_identity_key
        {
            debug!(
                dialect = %profile.dialect,
                clause = "UNIQUE",
                "UNIQUE is implied by the identity primary key"
            );
        } else {
            sql.push_str(" UNIQUE");
        }
    }
    if attribute.primary_key {
        sql.push_str(" PRIMARY KEY");
    }
}

/// Writes an inline comment, or returns a separate comment statement.
///
/// `COMMENT ON COLUMN` needs both the table and the column; without them
/// the comment stays inline.
fn push_comment(
    sql: &mut String,
    attribute: &AttributeDescriptor,
    context: &TranslationContext,
    profile: &DialectProfile,
) -> Option<String> {
    let comment = attribute.comment.as_deref().filter(|c| !c.is_empty())?;
    if profile.comments == CommentStyle::Unsupported {
        debug!(
            dialect = %profile.dialect,
            clause = "COMMENT",
            "Column comments not supported"
        );
        return None;
    }
    let literal = quote_string(comment, profile);
    if profile.comments == CommentStyle::OnColumn && context.is_add_column() {
        let column = attribute.column_name().or(context.foreign_key.as_deref());
        if let (Some(table), Some(column)) = (&context.table, column) {
            return Some(format!(
                "COMMENT ON COLUMN {}.{} IS {literal}",
                profile.quote_table(table),
                profile.quote_identifier(column)
            ));
        }
    }
    sql.push_str(" COMMENT ");
    sql.push_str(&literal);
    None
}

/// Translator bound to one dialect.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    profile: &'static DialectProfile,
}

impl Translator {
    /// Creates a translator for the given dialect.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            profile: dialect.profile(),
        }
    }

    /// Returns the dialect profile in use.
    #[must_use]
    pub const fn profile(&self) -> &'static DialectProfile {
        self.profile
    }

    /// Translates one attribute.
    ///
    /// # Errors
    ///
    /// See [`translate`].
    pub fn translate(
        &self,
        attribute: &AttributeDescriptor,
        context: &TranslationContext,
    ) -> Result<Fragment> {
        translate(attribute, context, self.profile)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}
