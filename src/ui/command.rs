use std::str::FromStr;

use thiserror::Error;

use crate::form::Field;
use crate::model::{EmployeeId, EmployeeStatus};
use crate::table::{SortColumn, StatusFilter};

pub const HELP: &str = "\
table:  list | search [text] | filter <active|inactive|all> | sort <id|code|first|last>
        page <n> | size <n> | add | edit <id> | toggle <id> | delete <id> | yes | no
form:   set <field> [value] | next | prev | addid | submit | back
any:    help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Search(String),
    Filter(StatusFilter),
    Sort(SortColumn),
    Page(usize),
    Size(usize),
    Add,
    Edit(EmployeeId),
    Toggle(EmployeeId),
    Delete(EmployeeId),
    Yes,
    No,
    Set(Field, String),
    Next,
    Prev,
    AddId,
    Submit,
    Back,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

fn id_arg(arg: &str, usage: &'static str) -> Result<EmployeeId, ParseCommandError> {
    arg.parse::<u64>()
        .map(EmployeeId)
        .map_err(|_| ParseCommandError::Usage(usage))
}

fn number_arg(arg: &str, usage: &'static str) -> Result<usize, ParseCommandError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseCommandError::Usage(usage)),
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Err(ParseCommandError::Empty),
            "list" | "ls" => Command::List,
            "search" => Command::Search(rest.to_string()),
            "filter" => Command::Filter(match rest.to_ascii_lowercase().as_str() {
                "active" => StatusFilter::only(&[EmployeeStatus::Active]),
                "inactive" => StatusFilter::only(&[EmployeeStatus::Inactive]),
                "all" | "" => StatusFilter::default(),
                _ => return Err(ParseCommandError::Usage("filter <active|inactive|all>")),
            }),
            "sort" => Command::Sort(
                rest.parse()
                    .map_err(|_| ParseCommandError::Usage("sort <id|code|first|last>"))?,
            ),
            "page" => Command::Page(number_arg(rest, "page <n>")?),
            "size" => Command::Size(number_arg(rest, "size <n>")?),
            "add" | "new" => Command::Add,
            "edit" => Command::Edit(id_arg(rest, "edit <id>")?),
            "toggle" => Command::Toggle(id_arg(rest, "toggle <id>")?),
            "delete" | "rm" => Command::Delete(id_arg(rest, "delete <id>")?),
            "yes" | "y" => Command::Yes,
            "no" | "n" => Command::No,
            "set" => {
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = name
                    .parse::<Field>()
                    .map_err(|_| ParseCommandError::Usage("set <field> [value]"))?;
                Command::Set(field, value.trim().to_string())
            }
            "next" => Command::Next,
            "prev" | "previous" => Command::Prev,
            "addid" => Command::AddId,
            "submit" => Command::Submit,
            "back" | "cancel" => Command::Back,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(word.to_string())),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_commands() {
        assert_eq!("list".parse(), Ok(Command::List));
        assert_eq!("search  Asha Rao ".parse(), Ok(Command::Search("Asha Rao".into())));
        assert_eq!("search".parse(), Ok(Command::Search(String::new())));
        assert_eq!(
            "filter inactive".parse(),
            Ok(Command::Filter(StatusFilter::only(&[EmployeeStatus::Inactive])))
        );
        assert_eq!("sort first".parse(), Ok(Command::Sort(SortColumn::FirstName)));
        assert_eq!("PAGE 2".parse(), Ok(Command::Page(2)));
        assert_eq!("toggle 7".parse(), Ok(Command::Toggle(EmployeeId(7))));
    }

    #[test]
    fn parses_form_commands() {
        assert_eq!(
            "set mobileNumber 9123456789".parse(),
            Ok(Command::Set(Field::MobileNumber, "9123456789".into()))
        );
        assert_eq!(
            "set currentstate Tamil Nadu".parse(),
            Ok(Command::Set(Field::CurrentState, "Tamil Nadu".into()))
        );
        assert_eq!("set email".parse(), Ok(Command::Set(Field::Email, String::new())));
        assert_eq!("addid".parse(), Ok(Command::AddId));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "fly".parse::<Command>(),
            Err(ParseCommandError::Unknown("fly".into()))
        );
        assert_eq!(
            "delete x".parse::<Command>(),
            Err(ParseCommandError::Usage("delete <id>"))
        );
        assert_eq!("page 0".parse::<Command>(), Err(ParseCommandError::Usage("page <n>")));
        assert_eq!(
            "set salary 10".parse::<Command>(),
            Err(ParseCommandError::Usage("set <field> [value]"))
        );
    }
}
