use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Unit and namespace names end up verbatim in generated type names,
    // so they have to be plain identifiers.
    static ref IDENT_PATTERN: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

pub fn is_identifier(value: &str) -> bool {
    IDENT_PATTERN.is_match(value)
}

pub fn check_identifier(what: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    if is_identifier(value) {
        Ok(())
    } else {
        Err(format!("{} '{}' is not a valid identifier", what, value).into())
    }
}
