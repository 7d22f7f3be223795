//! Interactive menu shell
//!
//! The shell shows the main menu, reads one choice per line, collects the
//! inputs that choice needs and runs the matching [`CatLens`] operation.
//! Operation failures are printed and the menu is shown again; only I/O
//! errors on the terminal itself end the loop early.
//!
//! Input and output are generic so the loop can be driven from tests.

mod menu;

pub use menu::MenuChoice;

use anyhow::Result;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use tracing::debug;

use crate::database::CatStore;
use crate::lens::cats::{
    parse_age, CatAddArgs, CatAgeArgs, CatFeatureArgs, CatLens, DeleteOutcome, FindOutcome,
    UpdateOutcome,
};

const MENU_TITLE: &str = "MongoDB CRUD menu:";
const FAREWELL: &str = "Exit...";

/// Interactive read-evaluate-print loop over a cat store
pub struct Shell<'a, R, W> {
    lens: CatLens<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a dyn CatStore, input: R, output: W) -> Self {
        Self {
            lens: CatLens::new(store),
            input,
            output,
        }
    }

    /// Run until the user picks "0" or the input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_field("Enter action number: ")? else {
                break;
            };

            let flow = match line.trim().parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => ControlFlow::Break(()),
                Ok(choice) => {
                    debug!("menu choice: {}", choice);
                    self.dispatch(choice)?
                }
                Err(_) => {
                    writeln!(self.output, "Incorrect choice, try again.")?;
                    ControlFlow::Continue(())
                }
            };
            if flow.is_break() {
                break;
            }
        }

        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", MENU_TITLE)?;
        for choice in MenuChoice::all() {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    /// Prompt and read one line, without its line terminator
    ///
    /// Returns `None` once the input is exhausted.
    fn read_field(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>> {
        match choice {
            MenuChoice::AddCat => return self.add_cat(),
            MenuChoice::ListCats => {
                let message = match self.lens.list_all() {
                    Ok(cats) if cats.is_empty() => "No cats found.".to_string(),
                    Ok(cats) => cats
                        .iter()
                        .map(|cat| cat.to_string())
                        .collect::<Vec<_>>()
                        .join("\n"),
                    Err(e) => format!("Error getting cats: {}", e),
                };
                self.say(&message)?;
            }
            MenuChoice::FindCat => {
                let Some(name) = self.read_field("Cat name to search for: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let message = match self.lens.find_by_name(&name) {
                    Ok(FindOutcome::Found(cat)) => cat.to_string(),
                    Ok(FindOutcome::NotFound) => "No cat with that name found.".to_string(),
                    Err(e) => format!("Error while searching for a cat: {}", e),
                };
                self.say(&message)?;
            }
            MenuChoice::UpdateAge => return self.update_age(),
            MenuChoice::AddFeature => {
                let Some(name) = self.read_field("Cat name: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let Some(feature) = self.read_field("New characteristic: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let args = CatFeatureArgs::new(&name, &feature);
                let message = match self.lens.add_feature(&args) {
                    Ok(UpdateOutcome::Modified) => format!(
                        "New characteristic '{}' added for cat {}.",
                        args.feature, args.name
                    ),
                    Ok(UpdateOutcome::Unchanged) => format!(
                        "Cat {} unchanged, characteristic not added.",
                        args.name
                    ),
                    Ok(UpdateOutcome::NotFound) => "Cat not found.".to_string(),
                    Err(e) => format!("Error when adding characteristic: {}", e),
                };
                self.say(&message)?;
            }
            MenuChoice::DeleteCat => {
                let Some(name) = self.read_field("Delete cat by name: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let message = match self.lens.delete_by_name(&name) {
                    Ok(DeleteOutcome::Deleted) => format!("Cat {} has been deleted.", name),
                    Ok(DeleteOutcome::NotFound) => "Cat not found.".to_string(),
                    Err(e) => format!("Error deleting cat: {}", e),
                };
                self.say(&message)?;
            }
            MenuChoice::DeleteAll => {
                let message = match self.lens.delete_all() {
                    Ok(outcome) => format!("Deleted {} cats.", outcome.deleted),
                    Err(e) => format!("Error deleting all cats: {}", e),
                };
                self.say(&message)?;
            }
            MenuChoice::Exit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn add_cat(&mut self) -> Result<ControlFlow<()>> {
        let Some(name) = self.read_field("Cat name: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(age) = self.read_field("Cat age: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let age = match parse_age(&age) {
            Ok(age) => age,
            Err(e) => {
                self.say(&format!("Error: {}", e))?;
                return Ok(ControlFlow::Continue(()));
            }
        };
        let Some(features) = self.read_field("Enter characteristics separated by commas: ")?
        else {
            return Ok(ControlFlow::Break(()));
        };

        let message = match self.lens.add(&CatAddArgs::new(&name, age, &features)) {
            Ok(outcome) => format!("Cat added with _id: {}", outcome.id),
            Err(e) => format!("Error adding cat: {}", e),
        };
        self.say(&message)?;
        Ok(ControlFlow::Continue(()))
    }

    fn update_age(&mut self) -> Result<ControlFlow<()>> {
        let Some(name) = self.read_field("Cat name: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(age) = self.read_field("New age: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let age = match parse_age(&age) {
            Ok(age) => age,
            Err(e) => {
                self.say(&format!("Error: {}", e))?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        let args = CatAgeArgs::new(&name, age);
        let message = match self.lens.update_age(&args) {
            Ok(UpdateOutcome::Modified) => {
                format!("Cat {} age updated to {} years.", args.name, args.age)
            }
            Ok(UpdateOutcome::Unchanged) => {
                format!("Cat {} already has age {}.", args.name, args.age)
            }
            Ok(UpdateOutcome::NotFound) => "Cat not found.".to_string(),
            Err(e) => format!("Error when updating age: {}", e),
        };
        self.say(&message)?;
        Ok(ControlFlow::Continue(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryCatStore;
    use mongodb::bson::doc;

    fn run_session(store: &MemoryCatStore, input: &str) -> String {
        let mut output = Vec::new();
        Shell::new(store, input.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let store = MemoryCatStore::new();
        let output = run_session(&store, "0\n");
        assert!(output.contains(MENU_TITLE));
        assert!(output.contains("7. Delete all cats"));
        assert!(output.ends_with("Exit...\n"));
        assert_eq!(store.call_count(), 0);
    }

    #[test]
    fn test_end_of_input_exits() {
        let store = MemoryCatStore::new();
        let output = run_session(&store, "");
        assert!(output.ends_with("Exit...\n"));
    }

    #[test]
    fn test_end_of_input_mid_operation() {
        let store = MemoryCatStore::new();
        let output = run_session(&store, "1\nWhiskers\n");
        assert!(output.ends_with("Exit...\n"));
        assert_eq!(store.call_count(), 0);
    }

    #[test]
    fn test_incorrect_choice() {
        let store = MemoryCatStore::new();
        let output = run_session(&store, "9\nadd\n0\n");
        assert_eq!(output.matches("Incorrect choice, try again.").count(), 2);
        assert!(output.ends_with("Exit...\n"));
    }

    #[test]
    fn test_invalid_age_on_add_skips_store() {
        let store = MemoryCatStore::new();
        let output = run_session(&store, "1\nWhiskers\nthree\n0\n");
        assert!(output.contains("Error: Cat age must be an integer, got 'three'"));
        assert!(!output.contains("Enter characteristics"));
        assert_eq!(store.call_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_age_on_update_skips_store() {
        let store = MemoryCatStore::new();
        let output = run_session(&store, "4\nWhiskers\n4.5\n0\n");
        assert!(output.contains("Cat age must be an integer"));
        assert_eq!(store.call_count(), 0);
    }

    #[test]
    fn test_add_list_and_find() {
        let store = MemoryCatStore::new();
        let output = run_session(
            &store,
            "1\nWhiskers\n3\nfluffy,loud\n2\n3\nWhiskers\n3\nTom\n0\n",
        );
        assert!(output.contains("Cat added with _id: "));
        assert!(output.matches("fluffy,loud").count() >= 2);
        assert!(output.contains("No cat with that name found."));

        let cats = store.snapshot();
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].name(), Some("Whiskers"));
        assert_eq!(cats[0].age(), Some(3));
        assert_eq!(cats[0].features(), Some("fluffy,loud"));
        let id = cats[0].id().unwrap();
        assert!(output.contains(&format!("Cat added with _id: {}", id)));
    }

    #[test]
    fn test_foreign_documents_are_printed_as_stored() {
        let store = MemoryCatStore::new();
        store.insert_document(doc! { "name": "Tom", "age": 3.0, "color": "black" });
        store.insert_document(doc! { "name": "Felix" });
        store.insert_document(doc! { "name": "Kitty", "age": 2, "features": ["a", "b"] });

        let output = run_session(&store, "2\n3\nTom\n0\n");
        assert!(!output.contains("Error getting cats"));
        assert!(!output.contains("Error while searching"));
        assert_eq!(output.matches("color").count(), 2);
        assert!(output.contains("Felix"));
        assert!(output.contains("Kitty"));
        for cat in store.snapshot() {
            assert!(output.contains(&cat.document().to_string()));
        }
        // only Kitty ever had a features key
        assert_eq!(output.matches("features").count(), 1);
    }

    #[test]
    fn test_list_empty_collection() {
        let store = MemoryCatStore::new();
        let output = run_session(&store, "2\n0\n");
        assert!(output.contains("No cats found."));
        assert_eq!(store.call_count(), 1);
    }

    #[test]
    fn test_names_are_kept_verbatim() {
        let store = MemoryCatStore::new();
        let output = run_session(&store, "1\n Mr Whiskers \n2\n\n3\n Mr Whiskers \n0\n");
        assert!(!output.contains("No cat with that name found."));
        assert_eq!(store.snapshot()[0].name(), Some(" Mr Whiskers "));
        assert_eq!(store.snapshot()[0].features(), Some(""));
    }

    #[test]
    fn test_choice_whitespace_and_crlf() {
        let store = MemoryCatStore::new();
        let output = run_session(&store, " 2 \r\n0\r\n");
        assert!(output.contains("No cats found."));
        assert!(!output.contains("Incorrect choice"));
    }

    #[test]
    fn test_update_age_messages() {
        let store = MemoryCatStore::new();
        let output = run_session(
            &store,
            "1\nWhiskers\n3\nfluffy\n4\nWhiskers\n4\n4\nWhiskers\n4\n4\nTom\n1\n0\n",
        );
        assert!(output.contains("Cat Whiskers age updated to 4 years."));
        assert!(output.contains("Cat Whiskers already has age 4."));
        assert!(output.contains("Cat not found."));
        assert_eq!(store.snapshot()[0].age(), Some(4));
    }

    #[test]
    fn test_add_feature_messages() {
        let store = MemoryCatStore::new();
        let output = run_session(
            &store,
            "1\nWhiskers\n3\nfluffy\n5\nWhiskers\nsleepy\n5\nTom\nsleepy\n0\n",
        );
        assert!(output.contains("New characteristic 'sleepy' added for cat Whiskers."));
        assert!(output.contains("Cat not found."));
        assert_eq!(store.snapshot()[0].feature(), vec!["sleepy"]);
        assert_eq!(store.snapshot()[0].features(), Some("fluffy"));
    }

    #[test]
    fn test_delete_messages() {
        let store = MemoryCatStore::new();
        let output = run_session(
            &store,
            "1\nWhiskers\n3\n\n1\nTom\n5\n\n6\nWhiskers\n6\nWhiskers\n7\n7\n0\n",
        );
        assert!(output.contains("Cat Whiskers has been deleted."));
        assert!(output.contains("Cat not found."));
        assert!(output.contains("Deleted 1 cats."));
        assert!(output.contains("Deleted 0 cats."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_error_keeps_loop_running() {
        let store = MemoryCatStore::new();
        store.fail_with("connection reset");
        let output = run_session(&store, "2\n1\nWhiskers\n3\nfluffy\n0\n");
        assert!(output.contains("Error getting cats: connection reset"));
        assert!(output.contains("Error adding cat: connection reset"));
        assert!(output.ends_with("Exit...\n"));
        assert_eq!(store.call_count(), 2);
    }
}
