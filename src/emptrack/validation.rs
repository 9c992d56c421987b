//! Salary normalization.
//!
//! Raw salary input may carry currency symbols, thousands separators and
//! whitespace. Everything except ASCII digits, `.` and `-` is stripped and the
//! remainder must parse as a finite number. Negative values are accepted.

pub const INVALID_SALARY_MESSAGE: &str = "Please enter a valid number for the salary.";

/// Strips every character that is not a digit, `.` or `-`.
pub fn sanitize_salary(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Parses a raw salary answer, `None` when no finite number remains.
pub fn parse_salary(raw: &str) -> Option<f64> {
    sanitize_salary(raw)
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Prompt-level validator: the prompt re-asks until this passes.
pub fn validate_salary(raw: &str) -> Result<(), String> {
    match parse_salary(raw) {
        Some(_) => Ok(()),
        None => Err(INVALID_SALARY_MESSAGE.to_string()),
    }
}
