use std::fmt;
use std::str::FromStr;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCat,
    ListCats,
    FindCat,
    UpdateAge,
    AddFeature,
    DeleteCat,
    DeleteAll,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order
    pub fn all() -> [MenuChoice; 8] {
        [
            MenuChoice::AddCat,
            MenuChoice::ListCats,
            MenuChoice::FindCat,
            MenuChoice::UpdateAge,
            MenuChoice::AddFeature,
            MenuChoice::DeleteCat,
            MenuChoice::DeleteAll,
            MenuChoice::Exit,
        ]
    }

    pub fn key(&self) -> char {
        match self {
            MenuChoice::AddCat => '1',
            MenuChoice::ListCats => '2',
            MenuChoice::FindCat => '3',
            MenuChoice::UpdateAge => '4',
            MenuChoice::AddFeature => '5',
            MenuChoice::DeleteCat => '6',
            MenuChoice::DeleteAll => '7',
            MenuChoice::Exit => '0',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddCat => "Add cat",
            MenuChoice::ListCats => "Show all cats",
            MenuChoice::FindCat => "Find cat by name",
            MenuChoice::UpdateAge => "Update cat's age",
            MenuChoice::AddFeature => "Add cat's characteristic",
            MenuChoice::DeleteCat => "Delete cat by name",
            MenuChoice::DeleteAll => "Delete all cats",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => MenuChoice::all()
                .into_iter()
                .find(|choice| choice.key() == c)
                .ok_or_else(|| format!("Unknown menu choice: {}", s)),
            _ => Err(format!("Unknown menu choice: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!("0".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::AddCat));
        assert_eq!("4".parse::<MenuChoice>(), Ok(MenuChoice::UpdateAge));
        assert_eq!("7".parse::<MenuChoice>(), Ok(MenuChoice::DeleteAll));
    }

    #[test]
    fn test_reject_unknown() {
        assert!("8".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
        assert!("11".parse::<MenuChoice>().is_err());
        assert!("a".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<char> = MenuChoice::all().iter().map(|c| c.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuChoice::DeleteCat.to_string(), "6. Delete cat by name");
    }
}
