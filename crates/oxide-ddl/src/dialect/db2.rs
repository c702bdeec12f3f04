//! IBM DB2 profiles: DB2 for LUW and DB2 for i.

use super::{
    AlterColumnStyle, AutoIncrementStyle, BinaryLiteral, BinaryStringStyle, CommentStyle,
    ConstraintNaming, Dialect, DialectProfile, EnumStyle, NullPolicy, QuotePair, ReferenceStyle,
    SchemaStyle, StringEscape, TypeNames,
};

const DB2_TYPES: TypeNames = TypeNames {
    varchar: "VARCHAR",
    char: "CHAR",
    text: "CLOB(2147483647)",
    blob: "BLOB(1M)",
    boolean: "BOOLEAN",
    double: "DOUBLE",
    datetime: "TIMESTAMP",
    uuid: "CHAR(36) FOR BIT DATA",
    json: None,
    geometry: None,
    arrays: false,
    binary_string: BinaryStringStyle::Suffix(" FOR BIT DATA"),
};

pub(super) static DB2: DialectProfile = DialectProfile {
    dialect: Dialect::Db2,
    identifier_quote: QuotePair {
        open: '"',
        close: '"',
    },
    string_escape: StringEscape::Doubled,
    national_strings: false,
    native_booleans: true,
    binary_literal: BinaryLiteral::BlobFunction,
    auto_increment: AutoIncrementStyle::Generated {
        honors_initial: true,
        spaced: false,
    },
    null_policy: NullPolicy::PrimaryKeyNotNull,
    alter_column: AlterColumnStyle::DataType,
    alter_column_unique: false,
    unique_on_identity_key: false,
    enums: EnumStyle::Check("VARCHAR(255)"),
    comments: CommentStyle::Inline,
    positional_columns: false,
    references: ReferenceStyle::NamedOnAdd(ConstraintNaming {
        leading_comma: true,
        keyword: "CONSTRAINT",
        suffix: "_fidx",
        quote_column: true,
        quote_name: false,
    }),
    deferrable_constraints: false,
    on_update_cascade: false,
    self_reference_actions: true,
    schemas: SchemaStyle::Native,
    inherit_reference_schema: false,
    parenthesize_expressions: false,
    lob_defaults: true,
    binary_string_defaults: false,
    spatial_constructor: None,
    types: DB2_TYPES,
};

pub(super) static IBMI: DialectProfile = DialectProfile {
    dialect: Dialect::Ibmi,
    identifier_quote: QuotePair {
        open: '"',
        close: '"',
    },
    string_escape: StringEscape::Doubled,
    national_strings: false,
    native_booleans: false,
    binary_literal: BinaryLiteral::Text,
    auto_increment: AutoIncrementStyle::Generated {
        honors_initial: false,
        spaced: true,
    },
    null_policy: NullPolicy::Implicit,
    alter_column: AlterColumnStyle::Clauses,
    alter_column_unique: true,
    unique_on_identity_key: false,
    enums: EnumStyle::Check("VARCHAR(255)"),
    comments: CommentStyle::Unsupported,
    positional_columns: true,
    references: ReferenceStyle::NamedOnAdd(ConstraintNaming {
        leading_comma: false,
        keyword: "ADD CONSTRAINT",
        suffix: "_foreign_idx",
        quote_column: true,
        quote_name: true,
    }),
    deferrable_constraints: false,
    on_update_cascade: false,
    self_reference_actions: true,
    schemas: SchemaStyle::Native,
    inherit_reference_schema: false,
    parenthesize_expressions: false,
    lob_defaults: true,
    binary_string_defaults: false,
    spatial_constructor: None,
    types: TypeNames {
        boolean: "SMALLINT",
        ..DB2_TYPES
    },
};
