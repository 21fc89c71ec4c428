use crate::commands::tag::TAG_USAGE;
use crate::commands::Command;
use crate::error::CommandError;
use crate::parser::syntax::{PREFIX_CONTACT_INDEX, PREFIX_TAG, PREFIX_TASK_INDEX};
use crate::parser::tokenizer::tokenize;
use crate::parser::util::{invalid_format, parse_index, parse_tags};

pub fn parse_tag(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(args, &[PREFIX_CONTACT_INDEX, PREFIX_TASK_INDEX, PREFIX_TAG]);
    if !map.preamble().is_empty() || !map.are_prefixes_present(&[PREFIX_CONTACT_INDEX, PREFIX_TASK_INDEX, PREFIX_TAG]) {
        return Err(invalid_format(TAG_USAGE));
    }
    let contact = parse_index(map.value(PREFIX_CONTACT_INDEX).unwrap_or_default())?;
    let task = parse_index(map.value(PREFIX_TASK_INDEX).unwrap_or_default())?;
    let tags = parse_tags(map.all_values(PREFIX_TAG))?;
    Ok(Command::ContactTaskTag { contact, task, tags })
}
