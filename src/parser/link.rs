use crate::commands::link::{LINK_COLLAB_USAGE, LINK_MEETING_USAGE};
use crate::commands::Command;
use crate::error::CommandError;
use crate::parser::syntax::{PREFIX_LABEL, PREFIX_LINK};
use crate::parser::tokenizer::tokenize;
use crate::parser::util::{invalid_format, parse_collaborative_link, parse_index, parse_link};

pub fn parse_link_meeting(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(args, &[PREFIX_LINK]);
    if map.preamble().is_empty() || !map.contains(PREFIX_LINK) {
        return Err(invalid_format(LINK_MEETING_USAGE));
    }
    let index = parse_index(map.preamble())?;
    let link = parse_link(map.value(PREFIX_LINK).unwrap_or_default())?;
    Ok(Command::LinkMeeting { index, link })
}

pub fn parse_link_collab(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(args, &[PREFIX_LABEL, PREFIX_LINK]);
    if map.preamble().is_empty() || !map.are_prefixes_present(&[PREFIX_LABEL, PREFIX_LINK]) {
        return Err(invalid_format(LINK_COLLAB_USAGE));
    }
    let index = parse_index(map.preamble())?;
    let link = parse_collaborative_link(
        map.value(PREFIX_LABEL).unwrap_or_default(),
        map.value(PREFIX_LINK).unwrap_or_default(),
    )?;
    Ok(Command::LinkCollaborative { index, link })
}
