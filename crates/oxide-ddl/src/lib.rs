//! # oxide-ddl
//!
//! Dialect-aware column definitions for `CREATE TABLE` and `ALTER TABLE`.
//!
//! This crate provides:
//! - A typed [`AttributeDescriptor`] describing one column
//! - Static capability profiles for PostgreSQL, MySQL, MariaDB, SQL Server,
//!   SQLite, Snowflake, DB2 and DB2 for IBM i
//! - A pure translator rendering a descriptor as a SQL fragment
//!
//! ## Translating a column
//!
//! ```rust
//! use oxide_ddl::{AttributeDescriptor, DataType, Dialect, TranslationContext, Translator};
//!
//! let id = AttributeDescriptor::new(DataType::Integer)
//!     .auto_increment()
//!     .primary_key();
//!
//! let sql = Translator::new(Dialect::Mysql)
//!     .translate(&id, &TranslationContext::create_table())
//!     .unwrap();
//! assert_eq!(sql.to_string(), "INTEGER auto_increment PRIMARY KEY");
//! ```
//!
//! ## Injection safety
//!
//! Identifiers and string literals are always escaped for the target
//! dialect, so user text never terminates a literal early:
//!
//! ```rust
//! use oxide_ddl::{translate, AttributeDescriptor, DataType, Dialect, TranslationContext};
//!
//! let attribute = AttributeDescriptor::new(DataType::Integer)
//!     .comment("'); DROP TABLE users; --");
//! let sql = translate(
//!     &attribute,
//!     &TranslationContext::default(),
//!     Dialect::Mysql.profile(),
//! )
//! .unwrap();
//! assert_eq!(sql.to_string(), "INTEGER COMMENT '\\'); DROP TABLE users; --'");
//! ```

pub mod context;
pub mod descriptor;
pub mod dialect;
pub mod error;
pub mod literal;
mod quote;
pub mod reference;
pub mod translator;
pub mod types;

pub use context::{ContextKind, Fragment, TranslationContext};
pub use descriptor::{
    AttributeDescriptor, Deferrable, DefaultValue, References, ReferentialAction, SqlFunction,
    TableRef,
};
pub use dialect::{Dialect, DialectProfile};
pub use error::{Result, TranslateError};
pub use translator::{translate, Translator};
pub use types::DataType;
