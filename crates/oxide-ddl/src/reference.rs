//! Foreign key clauses.

use tracing::debug;

use crate::context::TranslationContext;
use crate::descriptor::{AttributeDescriptor, ReferentialAction, References, TableRef};
use crate::dialect::{ConstraintNaming, DialectProfile, ReferenceStyle};
use crate::error::Result;

/// Builds the foreign key clause of an attribute.
///
/// The returned clause carries its own leading separator: a space for an
/// inline `REFERENCES`, or a comma when the dialect attaches a named
/// constraint after the column. Returns `None` when the attribute has no
/// reference or foreign keys are disabled for it.
///
/// # Errors
///
/// Fails only if a required identifier is missing.
pub fn build_reference(
    attribute: &AttributeDescriptor,
    context: &TranslationContext,
    profile: &DialectProfile,
) -> Result<Option<String>> {
    let Some(references) = &attribute.references else {
        return Ok(None);
    };
    if attribute.without_foreign_key_constraints {
        debug!(
            dialect = %profile.dialect,
            clause = "REFERENCES",
            "Foreign key suppressed by attribute"
        );
        return Ok(None);
    }

    let target = reference_target(references, context, profile);
    let clause = references_clause(attribute, references, &target, profile);

    if let Some((naming, table, column)) = named_constraint(attribute, context, profile) {
        let name = match &context.constraint_name {
            Some(name) => profile.quote_identifier(name),
            None => constraint_name(naming, table, column, profile),
        };
        let separator = if naming.leading_comma { ", " } else { " " };
        let column = profile.require_identifier(Some(column), "FOREIGN KEY")?;
        return Ok(Some(format!(
            "{separator}{} {name} FOREIGN KEY ({column}) {clause}",
            naming.keyword
        )));
    }

    Ok(Some(format!(" {clause}")))
}

fn reference_target(
    references: &References,
    context: &TranslationContext,
    profile: &DialectProfile,
) -> TableRef {
    if profile.inherit_reference_schema && references.table.schema().is_none() {
        if let Some(schema) = context.table.as_ref().and_then(TableRef::schema) {
            return TableRef::qualified(references.table.table_name(), schema);
        }
    }
    references.table.clone()
}

fn references_clause(
    attribute: &AttributeDescriptor,
    references: &References,
    target: &TableRef,
    profile: &DialectProfile,
) -> String {
    let mut sql = String::from("REFERENCES ");
    sql.push_str(&profile.quote_table(target));
    sql.push_str(" (");
    sql.push_str(&profile.quote_identifier(references.key_or_default()));
    sql.push(')');

    let mut on_delete = attribute.on_delete_action();
    let mut on_update = attribute.on_update_action();

    if !profile.self_reference_actions && attribute.is_self_reference() {
        if on_delete.is_some() || on_update.is_some() {
            debug!(
                dialect = %profile.dialect,
                clause = "ON DELETE/ON UPDATE",
                "Referential actions dropped on self reference"
            );
        }
        on_delete = None;
        on_update = None;
    }
    if on_update == Some(ReferentialAction::Cascade) && !profile.on_update_cascade {
        debug!(
            dialect = %profile.dialect,
            clause = "ON UPDATE CASCADE",
            "Referential action not supported"
        );
        on_update = None;
    }

    if let Some(action) = on_delete {
        sql.push_str(" ON DELETE ");
        sql.push_str(action.as_sql());
    }
    if let Some(action) = on_update {
        sql.push_str(" ON UPDATE ");
        sql.push_str(action.as_sql());
    }

    if let Some(deferrable) = references.deferrable {
        if profile.deferrable_constraints {
            sql.push(' ');
            sql.push_str(deferrable.as_sql());
        } else {
            debug!(
                dialect = %profile.dialect,
                clause = "DEFERRABLE",
                "Deferrable constraints not supported"
            );
        }
    }

    sql
}

fn named_constraint<'a>(
    attribute: &'a AttributeDescriptor,
    context: &'a TranslationContext,
    profile: &DialectProfile,
) -> Option<(ConstraintNaming, &'a TableRef, &'a str)> {
    let ReferenceStyle::NamedOnAdd(naming) = profile.references else {
        return None;
    };
    if !context.is_add_column() {
        return None;
    }
    let table = context.table.as_ref()?;
    let column = context
        .foreign_key
        .as_deref()
        .or_else(|| attribute.column_name())?;
    Some((naming, table, column))
}

fn constraint_name(
    naming: ConstraintNaming,
    table: &TableRef,
    column: &str,
    profile: &DialectProfile,
) -> String {
    let column = if naming.quote_column {
        profile.quote_identifier(column)
    } else {
        column.to_string()
    };
    let table_name = table.table_name();
    let name = format!("{table_name}_{column}{}", naming.suffix);
    if naming.quote_name || !is_plain_identifier(table_name) {
        profile.quote_identifier(&name)
    } else {
        name
    }
}

fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataType, Deferrable, Dialect};

    fn reference(attribute: &AttributeDescriptor, dialect: Dialect) -> Option<String> {
        build_reference(attribute, &TranslationContext::default(), dialect.profile()).unwrap()
    }

    #[test]
    fn test_no_reference() {
        let attribute = AttributeDescriptor::new(DataType::Integer);
        assert_eq!(reference(&attribute, Dialect::Postgres), None);
    }

    #[test]
    fn test_suppressed_reference() {
        let attribute = AttributeDescriptor::new(DataType::Integer)
            .references(References::to("myTable"))
            .without_foreign_key_constraints();
        assert_eq!(reference(&attribute, Dialect::Mysql), None);
    }

    #[test]
    fn test_actions_are_normalized() {
        let attribute = AttributeDescriptor::new(DataType::Integer)
            .references(References::to("myTable").key("uid"))
            .on_delete("cascade")
            .on_update("restrict");
        assert_eq!(
            reference(&attribute, Dialect::Postgres).as_deref(),
            Some(" REFERENCES \"myTable\" (\"uid\") ON DELETE CASCADE ON UPDATE RESTRICT")
        );
    }

    #[test]
    fn test_unrecognized_and_empty_actions_are_ignored() {
        let attribute = AttributeDescriptor::new(DataType::Integer)
            .references(References::to("myTable"))
            .on_delete("")
            .on_update("DROP TABLE users");
        assert_eq!(
            reference(&attribute, Dialect::Mysql).as_deref(),
            Some(" REFERENCES `myTable` (`id`)")
        );
    }

    #[test]
    fn test_deferrable_only_where_supported() {
        let attribute = AttributeDescriptor::new(DataType::Integer)
            .references(References::to("myTable").deferrable(Deferrable::NotDeferrable));
        assert_eq!(
            reference(&attribute, Dialect::Postgres).as_deref(),
            Some(" REFERENCES \"myTable\" (\"id\") NOT DEFERRABLE")
        );
        assert_eq!(
            reference(&attribute, Dialect::Mssql).as_deref(),
            Some(" REFERENCES [myTable] ([id])")
        );
    }

    #[test]
    fn test_explicit_constraint_name() {
        let attribute =
            AttributeDescriptor::new(DataType::Integer).references(References::to("myTable"));
        let context = TranslationContext::add_column()
            .with_table("otherTable")
            .with_foreign_key("bar")
            .with_constraint_name("fk_bar");
        let clause = build_reference(&attribute, &context, Dialect::Db2.profile()).unwrap();
        assert_eq!(
            clause.as_deref(),
            Some(", CONSTRAINT \"fk_bar\" FOREIGN KEY (\"bar\") REFERENCES \"myTable\" (\"id\")")
        );
    }

    #[test]
    fn test_generated_name_quoted_for_unusual_table() {
        let attribute =
            AttributeDescriptor::new(DataType::Integer).references(References::to("myTable"));
        let context = TranslationContext::add_column()
            .with_table("my table")
            .with_foreign_key("bar");
        let clause = build_reference(&attribute, &context, Dialect::Db2.profile()).unwrap();
        assert_eq!(
            clause.as_deref(),
            Some(
                ", CONSTRAINT \"my table_\"\"bar\"\"_fidx\" FOREIGN KEY (\"bar\") \
                 REFERENCES \"myTable\" (\"id\")"
            )
        );
    }

    #[test]
    fn test_named_constraint_needs_table() {
        let attribute = AttributeDescriptor::new(DataType::Integer)
            .references(References::to("myTable"))
            .field("bar");
        let context = TranslationContext::add_column();
        let clause = build_reference(&attribute, &context, Dialect::Mysql.profile()).unwrap();
        assert_eq!(clause.as_deref(), Some(" REFERENCES `myTable` (`id`)"));
    }

    #[test]
    fn test_named_constraint_falls_back_to_field() {
        let attribute = AttributeDescriptor::new(DataType::Integer)
            .references(References::to("myTable"))
            .field("bar");
        let context = TranslationContext::add_column().with_table("otherTable");
        let clause = build_reference(&attribute, &context, Dialect::Mysql.profile()).unwrap();
        assert_eq!(
            clause.as_deref(),
            Some(
                ", ADD CONSTRAINT `otherTable_bar_foreign_idx` FOREIGN KEY (`bar`) \
                 REFERENCES `myTable` (`id`)"
            )
        );
    }
}
