//! Main menu choices.

/// One menu selection. Anything unrecognized stays in the menu and re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ManualEntry,
    LoadCsv,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ManualEntry),
            "2" => Some(Self::LoadCsv),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::ManualEntry));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::LoadCsv));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(MenuChoice::parse(" 1 \n"), Some(MenuChoice::ManualEntry));
    }

    #[test]
    fn test_parse_invalid_choices() {
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse("12"), None);
    }
}
