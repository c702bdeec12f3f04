#![allow(dead_code)]

use oxide_ddl::{
    translate, AttributeDescriptor, DataType, Dialect, Fragment, TranslateError,
    TranslationContext,
};

pub fn integer() -> AttributeDescriptor {
    AttributeDescriptor::new(DataType::Integer)
}

pub fn enum_of(values: &[&str]) -> AttributeDescriptor {
    AttributeDescriptor::new(DataType::Enum(
        values.iter().map(|v| (*v).to_string()).collect(),
    ))
}

pub fn fragment(
    attribute: &AttributeDescriptor,
    context: &TranslationContext,
    dialect: Dialect,
) -> Fragment {
    translate(attribute, context, dialect.profile())
        .unwrap_or_else(|e| panic!("Failed to translate for {dialect}: {attribute:?}\nError: {e}"))
}

/// Renders in a `CREATE TABLE` context.
pub fn render(attribute: &AttributeDescriptor, dialect: Dialect) -> String {
    fragment(attribute, &TranslationContext::default(), dialect).to_string()
}

pub fn render_in(
    attribute: &AttributeDescriptor,
    context: &TranslationContext,
    dialect: Dialect,
) -> String {
    fragment(attribute, context, dialect).to_string()
}

pub fn translate_err(
    attribute: &AttributeDescriptor,
    context: &TranslationContext,
    dialect: Dialect,
) -> TranslateError {
    translate(attribute, context, dialect.profile())
        .expect_err(&format!("Expected translation error for {dialect}: {attribute:?}"))
}

/// Returns the contents of every single-quoted literal in `sql`, with
/// `''` and backslash escapes folded back.
pub fn string_literals(sql: &str, backslash: bool) -> Vec<String> {
    let mut literals = Vec::new();
    let mut chars = sql.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\'' {
            continue;
        }
        let mut literal = String::new();
        loop {
            match chars.next() {
                Some('\\') if backslash => {
                    if let Some(escaped) = chars.next() {
                        literal.push(escaped);
                    }
                }
                Some('\'') if chars.peek() == Some(&'\'') => {
                    chars.next();
                    literal.push('\'');
                }
                Some('\'') => break,
                Some(other) => literal.push(other),
                None => panic!("Unterminated literal in {sql}"),
            }
        }
        literals.push(literal);
    }
    literals
}
