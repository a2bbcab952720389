//! Small helpers shared by the service layer.

#[cfg(test)]
pub mod test;

/// Trims the value and drops it if nothing remains
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
