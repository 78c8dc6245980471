//! Text transformations. Inputs are already-validated `&str`; outputs are owned.

pub fn greet(name: &str) -> String {
    format!("Hello, {name}! Welcome to cbridge.")
}

/// Full Unicode uppercasing, so the output may be longer than the input ("ß" -> "SS").
pub fn to_uppercase(input: &str) -> String {
    input.to_uppercase()
}

/// Number of Unicode scalar values, saturated to `i32`.
pub fn char_count(input: &str) -> i32 {
    i32::try_from(input.chars().count()).unwrap_or(i32::MAX)
}
