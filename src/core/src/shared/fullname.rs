use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

impl FullName {
    pub fn new(first_name: String, last_name: String) -> Self {
        FullName {
            first_name,
            last_name,
        }
    }

    /// Short roster form, e.g. "L. Messi".
    pub fn short(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{}. {}", initial, self.last_name),
            None => self.last_name.clone(),
        }
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form() {
        let name = FullName::new("Lionel".to_string(), "Messi".to_string());
        assert_eq!(name.short(), "L. Messi");
        assert_eq!(name.to_string(), "Lionel Messi");
    }

    #[test]
    fn test_short_form_without_first_name() {
        let name = FullName::new(String::new(), "Pele".to_string());
        assert_eq!(name.short(), "Pele");
    }
}
