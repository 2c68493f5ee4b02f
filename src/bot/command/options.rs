//! Typed access to resolved slash command options.

use serenity::all::{ResolvedOption, ResolvedValue, User};

use crate::error::AppError;

pub fn integer(options: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    options.iter().find(|o| o.name == name).and_then(|o| match o.value {
        ResolvedValue::Integer(value) => Some(value),
        _ => None,
    })
}

pub fn string<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find(|o| o.name == name).and_then(|o| match o.value {
        ResolvedValue::String(value) => Some(value),
        _ => None,
    })
}

pub fn user<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a User> {
    options.iter().find(|o| o.name == name).and_then(|o| match o.value {
        ResolvedValue::User(user, _) => Some(user),
        _ => None,
    })
}

/// Discord enforces required options client-side; a missing one means the registered
/// definition and the handler disagree.
fn missing(name: &str) -> AppError {
    AppError::BadRequest(format!("Missing required option `{}`.", name))
}

pub fn required_integer(options: &[ResolvedOption<'_>], name: &str) -> Result<i64, AppError> {
    integer(options, name).ok_or_else(|| missing(name))
}

pub fn required_string<'a>(options: &[ResolvedOption<'a>], name: &str) -> Result<&'a str, AppError> {
    string(options, name).ok_or_else(|| missing(name))
}
