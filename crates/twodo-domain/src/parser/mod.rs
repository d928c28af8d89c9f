//! Turns raw input into commands.
//!
//! The first whitespace-separated word picks the command (case-insensitive);
//! the rest is handed to that command's argument parser. Parsing never
//! touches shared state.

pub mod tokenizer;

use crate::commands::*;
use crate::field_update::FieldUpdate;
use crate::model::TaskFilter;
use crate::task::{Deadline, Task};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeSet;
use tokenizer::{
    ArgumentMultimap, ALL_PREFIXES, PREFIX_DESCRIPTION, PREFIX_END, PREFIX_NAME, PREFIX_START,
    PREFIX_TAG,
};
use twodo_core::ParseError;

pub const HELP_HINT: &str = "Type 'help' to see all commands.";

#[cfg_attr(test, mockall::automock)]
pub trait Parser {
    fn parse(&self, raw_input: &str) -> Result<Box<dyn Command>, ParseError>;
}

/// The built-in command grammar.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandParser;

impl Parser for CommandParser {
    fn parse(&self, raw_input: &str) -> Result<Box<dyn Command>, ParseError> {
        let input = raw_input.trim();
        let (word, args) = match input.split_once(char::is_whitespace) {
            Some((word, args)) => (word, args.trim()),
            None => (input, ""),
        };
        if word.is_empty() {
            return Err(ParseError::InvalidFormat {
                usage: HELP_HINT.to_string(),
            });
        }

        let word = word.to_lowercase();
        let command: Box<dyn Command> = match word.as_str() {
            w if AddCommand::ALIASES.contains(&w) => Box::new(parse_add(args)?),
            w if DeleteCommand::ALIASES.contains(&w) => {
                Box::new(DeleteCommand::new(parse_index(args, DeleteCommand::USAGE)?))
            }
            w if EditCommand::ALIASES.contains(&w) => Box::new(parse_edit(args)?),
            w if MarkCommand::MARK_ALIASES.contains(&w) => {
                Box::new(MarkCommand::mark(parse_index(args, MarkCommand::MARK_USAGE)?))
            }
            w if MarkCommand::UNMARK_ALIASES.contains(&w) => {
                Box::new(MarkCommand::unmark(parse_index(args, MarkCommand::UNMARK_USAGE)?))
            }
            ClearCommand::COMMAND_WORD => Box::new(ClearCommand::new()),
            w if ListCommand::ALIASES.contains(&w) => Box::new(parse_list(args)?),
            w if FindCommand::ALIASES.contains(&w) => Box::new(parse_find(args)?),
            w if HistoryCommand::ALIASES.contains(&w) => Box::new(HistoryCommand),
            w if CategoryCommand::ALIASES.contains(&w) => Box::new(CategoryCommand),
            w if UndoCommand::ALIASES.contains(&w) => Box::new(UndoCommand),
            w if RedoCommand::ALIASES.contains(&w) => Box::new(RedoCommand),
            HelpCommand::COMMAND_WORD => Box::new(HelpCommand),
            w if ExitCommand::ALIASES.contains(&w) => Box::new(ExitCommand),
            _ => return Err(ParseError::UnknownCommand(word)),
        };
        Ok(command)
    }
}

fn invalid_format(usage: &str) -> ParseError {
    ParseError::InvalidFormat {
        usage: usage.to_string(),
    }
}

/// A positive, 1-based index.
pub fn parse_index(value: &str, usage: &str) -> Result<usize, ParseError> {
    match value.trim().parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(ParseError::InvalidIndex {
            usage: usage.to_string(),
        }),
    }
}

/// `YYYY-MM-DD HH:MM`, or a bare date that takes `default_time`.
pub fn parse_date_time(
    value: &str,
    default_time: NaiveTime,
) -> Result<NaiveDateTime, ParseError> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M")
        .or_else(|_| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").map(|date| date.and_time(default_time))
        })
        .map_err(|_| ParseError::InvalidDate(value.to_string()))
}

/// A deadline from optional start and end values. A start needs an end.
pub fn parse_deadline(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Option<Deadline>, ParseError> {
    let Some(end) = end else {
        return match start {
            Some(_) => Err(ParseError::InvalidDeadline(
                "a start (s/) needs an end (e/)".to_string(),
            )),
            None => Ok(None),
        };
    };
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default();
    let end = parse_date_time(end, end_of_day)?;
    let start = start
        .map(|s| parse_date_time(s, NaiveTime::default()))
        .transpose()?;
    Deadline::new(start, end)
        .map(Some)
        .ok_or_else(|| ParseError::InvalidDeadline("the start is after the end".to_string()))
}

fn parse_tags(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty<'a>(map: &'a ArgumentMultimap, prefix: &str) -> Option<&'a str> {
    map.value(prefix).filter(|v| !v.is_empty())
}

fn parse_add(args: &str) -> Result<AddCommand, ParseError> {
    let map = ArgumentMultimap::tokenize(args, &ALL_PREFIXES);
    if !map.preamble().is_empty() {
        return Err(invalid_format(AddCommand::USAGE));
    }
    let name = non_empty(&map, PREFIX_NAME).ok_or_else(|| ParseError::MissingField {
        field: "n/NAME",
        usage: AddCommand::USAGE.to_string(),
    })?;
    let deadline = parse_deadline(non_empty(&map, PREFIX_START), non_empty(&map, PREFIX_END))?;

    let task = Task::new(name.to_string())
        .with_description(non_empty(&map, PREFIX_DESCRIPTION).map(str::to_string))
        .with_deadline(deadline)
        .with_tags(parse_tags(map.all_values(PREFIX_TAG)));
    Ok(AddCommand::new(task))
}

fn parse_edit(args: &str) -> Result<EditCommand, ParseError> {
    let map = ArgumentMultimap::tokenize(args, &ALL_PREFIXES);
    let index = parse_index(map.preamble(), EditCommand::USAGE)?;

    let mut edit = TaskEdit::default();
    if let Some(name) = map.value(PREFIX_NAME) {
        if name.is_empty() {
            return Err(invalid_format(EditCommand::USAGE));
        }
        edit.name = Some(name.to_string());
    }
    if let Some(description) = map.value(PREFIX_DESCRIPTION) {
        edit.description = match description {
            "" => FieldUpdate::Clear,
            d => FieldUpdate::Set(d.to_string()),
        };
    }
    edit.deadline = match (non_empty(&map, PREFIX_START), map.value(PREFIX_END)) {
        (None, None) => FieldUpdate::NoChange,
        (None, Some("")) => FieldUpdate::Clear,
        (start, end) => parse_deadline(start, end.filter(|e| !e.is_empty()))?.into(),
    };
    if map.contains(PREFIX_TAG) {
        edit.tags = Some(parse_tags(map.all_values(PREFIX_TAG)));
    }

    if edit.is_empty() {
        return Err(ParseError::MissingField {
            field: "to edit (n/, d/, s/, e/ or t/)",
            usage: EditCommand::USAGE.to_string(),
        });
    }
    Ok(EditCommand::new(index, edit))
}

fn parse_list(args: &str) -> Result<ListCommand, ParseError> {
    let filter = match args.to_lowercase().as_str() {
        "" | "undone" => TaskFilter::Incomplete,
        "all" => TaskFilter::All,
        "done" => TaskFilter::Completed,
        _ => return Err(invalid_format(ListCommand::USAGE)),
    };
    Ok(ListCommand::new(filter))
}

fn parse_find(args: &str) -> Result<FindCommand, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(invalid_format(FindCommand::USAGE));
    }
    Ok(FindCommand::new(keywords))
}
