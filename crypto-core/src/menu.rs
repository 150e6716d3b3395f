/// One pass through the console menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Price,
    Trending,
    Search,
    Exit,
    /// Anything else the user typed, kept for logging.
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => MenuChoice::Price,
            "2" => MenuChoice::Trending,
            "3" => MenuChoice::Search,
            "4" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

impl From<&str> for MenuChoice {
    fn from(raw: &str) -> Self {
        MenuChoice::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_choices() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Price);
        assert_eq!(MenuChoice::parse("2"), MenuChoice::Trending);
        assert_eq!(MenuChoice::parse(" 3 "), MenuChoice::Search);
        assert_eq!(MenuChoice::from("4\n"), MenuChoice::Exit);
    }

    #[test]
    fn everything_else_is_invalid() {
        for raw in ["", "0", "5", "exit", "1.0", "one", "12"] {
            assert_eq!(MenuChoice::parse(raw), MenuChoice::Invalid(raw.trim().to_string()));
        }
    }
}
