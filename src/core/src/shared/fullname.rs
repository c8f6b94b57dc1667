use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
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

    /// Initials shown when no avatar is available, e.g. "MR" for Mario Rossi.
    pub fn initials(&self) -> String {
        let mut initials = String::with_capacity(2);

        for name in [&self.first_name, &self.last_name] {
            if let Some(letter) = name.chars().next() {
                initials.extend(letter.to_uppercase());
            }
        }

        initials
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_initials() {
        let name = FullName::new(String::from("Mario"), String::from("Rossi"));

        assert_eq!(name.to_string(), "Mario Rossi");
        assert_eq!(name.initials(), "MR");
    }
}
