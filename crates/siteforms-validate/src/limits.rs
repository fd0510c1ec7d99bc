//! Tunable bounds for the contact form rules.

use crate::file::MIB;
use serde::{Deserialize, Serialize};

/// Bounds used to build the contact rule table.
///
/// Every field has a default, so a partial configuration only overrides what
/// it names. The defaults reproduce the stock contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLimits {
    pub company_name_min_length: usize,
    pub address_min_length: usize,
    pub postcode_min_digits: usize,
    pub postcode_max_digits: usize,
    pub phone_min_digits: usize,
    pub idea_min_length: usize,
    /// Maximum attachment size in bytes
    pub max_file_size: u64,
    /// Allowed attachment MIME types; empty accepts any type
    pub allowed_file_types: Vec<String>,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            company_name_min_length: 2,
            address_min_length: 5,
            postcode_min_digits: 4,
            postcode_max_digits: 10,
            phone_min_digits: 10,
            idea_min_length: 30,
            max_file_size: 10 * MIB,
            allowed_file_types: Vec::new(),
        }
    }
}

impl FormLimits {
    /// Human form of the file size limit, e.g. `10MB`.
    pub fn max_file_size_label(&self) -> String {
        if self.max_file_size >= MIB && self.max_file_size % MIB == 0 {
            format!("{}MB", self.max_file_size / MIB)
        } else {
            format!("{} bytes", self.max_file_size)
        }
    }
}
