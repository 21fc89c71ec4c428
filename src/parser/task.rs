use crate::commands::task::{DONE_USAGE, SNOOZE_USAGE};
use crate::commands::Command;
use crate::error::CommandError;
use crate::parser::syntax::{PREFIX_DATE, PREFIX_TIME};
use crate::parser::tokenizer::tokenize;
use crate::parser::util::{invalid_format, parse_date_time, parse_index};

pub fn parse_done(args: &str) -> Result<Command, CommandError> {
    if args.trim().is_empty() {
        return Err(invalid_format(DONE_USAGE));
    }
    parse_index(args).map(Command::Done)
}

pub fn parse_snooze(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(args, &[PREFIX_DATE, PREFIX_TIME]);
    if map.preamble().is_empty() || !map.are_prefixes_present(&[PREFIX_DATE, PREFIX_TIME]) {
        return Err(invalid_format(SNOOZE_USAGE));
    }
    let index = parse_index(map.preamble())?;
    let deadline = parse_date_time(
        map.value(PREFIX_DATE).unwrap_or_default(),
        map.value(PREFIX_TIME).unwrap_or_default(),
    )?;
    Ok(Command::Snooze { index, deadline })
}
