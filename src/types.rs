//! Common types and data structures

use std::collections::HashMap;

/// Values held by the page's native controls, keyed by control `name`.
/// Radio groups store the selected option's `value`.
#[derive(Debug, Default)]
pub struct FormState {
    values: HashMap<String, String>,
}

impl FormState {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Editable text buffer for `name`, created empty on first use.
    pub fn text_mut(&mut self, name: &str) -> &mut String {
        self.values.entry(name.to_string()).or_default()
    }
}

/// Filter typed text the way a native number field would: digits, one
/// decimal point, and a leading minus sign.
pub fn sanitize_number(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut seen_dot = false;
    for (i, c) in text.trim().chars().enumerate() {
        match c {
            '0'..='9' => out.push(c),
            '.' if !seen_dot => {
                seen_dot = true;
                out.push(c);
            }
            '-' if i == 0 => out.push(c),
            _ => {}
        }
    }
    out
}
