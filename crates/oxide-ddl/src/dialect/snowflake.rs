//! Snowflake profile.

use super::{
    AlterColumnStyle, AutoIncrementStyle, BinaryLiteral, BinaryStringStyle, CommentStyle,
    ConstraintNaming, Dialect, DialectProfile, EnumStyle, NullPolicy, QuotePair, ReferenceStyle,
    SchemaStyle, StringEscape, TypeNames,
};

pub(super) static SNOWFLAKE: DialectProfile = DialectProfile {
    dialect: Dialect::Snowflake,
    identifier_quote: QuotePair {
        open: '"',
        close: '"',
    },
    string_escape: StringEscape::Doubled,
    national_strings: false,
    native_booleans: true,
    binary_literal: BinaryLiteral::HexString,
    auto_increment: AutoIncrementStyle::Keyword("AUTOINCREMENT"),
    null_policy: NullPolicy::Implicit,
    alter_column: AlterColumnStyle::Inline,
    alter_column_unique: true,
    unique_on_identity_key: true,
    enums: EnumStyle::Plain("VARCHAR(255)"),
    comments: CommentStyle::Inline,
    positional_columns: true,
    references: ReferenceStyle::NamedOnAdd(ConstraintNaming {
        leading_comma: true,
        keyword: "ADD CONSTRAINT",
        suffix: "_foreign_idx",
        quote_column: true,
        quote_name: true,
    }),
    deferrable_constraints: false,
    on_update_cascade: true,
    self_reference_actions: true,
    schemas: SchemaStyle::Native,
    inherit_reference_schema: false,
    parenthesize_expressions: false,
    lob_defaults: false,
    binary_string_defaults: false,
    spatial_constructor: None,
    types: TypeNames {
        varchar: "VARCHAR",
        char: "CHAR",
        text: "TEXT",
        blob: "BLOB",
        boolean: "BOOLEAN",
        double: "DOUBLE PRECISION",
        datetime: "TIMESTAMP",
        uuid: "VARCHAR(36)",
        json: None,
        geometry: None,
        arrays: false,
        binary_string: BinaryStringStyle::Suffix(" BINARY"),
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{translate, AttributeDescriptor, DataType, References, TranslationContext};

    #[test]
    fn test_quoted_column_in_constraint_name() {
        let attribute =
            AttributeDescriptor::new(DataType::Integer).references(References::to("myTable"));
        let context = TranslationContext::add_column()
            .with_table("otherTable")
            .with_foreign_key("bar");
        let fragment = translate(&attribute, &context, &SNOWFLAKE).unwrap();
        assert_eq!(
            fragment.to_string(),
            "INTEGER, ADD CONSTRAINT \"otherTable_\"\"bar\"\"_foreign_idx\" FOREIGN KEY (\"bar\") \
             REFERENCES \"myTable\" (\"id\")"
        );
    }

    #[test]
    fn test_positional_hint() {
        let attribute = AttributeDescriptor::new(DataType::Integer).after("bar");
        let fragment =
            translate(&attribute, &TranslationContext::default(), &SNOWFLAKE).unwrap();
        assert_eq!(fragment.to_string(), "INTEGER AFTER \"bar\"");
    }

    #[test]
    fn test_enum_is_plain_varchar() {
        let attribute = AttributeDescriptor::new(DataType::Enum(vec!["a".to_string()]));
        let fragment =
            translate(&attribute, &TranslationContext::default(), &SNOWFLAKE).unwrap();
        assert_eq!(fragment.to_string(), "VARCHAR(255)");
    }
}
