use crate::commands::edit::{EDIT_CONTACT_USAGE, EDIT_TASK_USAGE, NOTHING_EDITED};
use crate::commands::{Command, EditPersonDescriptor, EditTaskDescriptor};
use crate::error::CommandError;
use crate::parser::syntax::*;
use crate::parser::tokenizer::tokenize;
use crate::parser::util::{
    invalid_format, parse_address, parse_date, parse_description, parse_email, parse_index, parse_link, parse_name,
    parse_phone, parse_tags_for_edit, parse_time,
};

pub fn parse_edit_contact(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    );
    if map.preamble().is_empty() {
        return Err(invalid_format(EDIT_CONTACT_USAGE));
    }
    let index = parse_index(map.preamble())?;

    let descriptor = EditPersonDescriptor {
        name: map.value(PREFIX_NAME).map(parse_name).transpose()?,
        phone: map.value(PREFIX_PHONE).map(parse_phone).transpose()?,
        email: map.value(PREFIX_EMAIL).map(parse_email).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(CommandError::Parse(NOTHING_EDITED.to_string()));
    }

    Ok(Command::EditContact { index, descriptor })
}

pub fn parse_edit_task(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(
        args,
        &[
            PREFIX_DESCRIPTION,
            PREFIX_DATE,
            PREFIX_TIME,
            PREFIX_STARTDATE,
            PREFIX_STARTTIME,
            PREFIX_ENDDATE,
            PREFIX_ENDTIME,
            PREFIX_LINK,
            PREFIX_TAG,
        ],
    );
    if map.preamble().is_empty() {
        return Err(invalid_format(EDIT_TASK_USAGE));
    }
    let index = parse_index(map.preamble())?;

    let descriptor = EditTaskDescriptor {
        description: map.value(PREFIX_DESCRIPTION).map(parse_description).transpose()?,
        date: map.value(PREFIX_DATE).map(parse_date).transpose()?,
        time: map.value(PREFIX_TIME).map(parse_time).transpose()?,
        start_date: map.value(PREFIX_STARTDATE).map(parse_date).transpose()?,
        start_time: map.value(PREFIX_STARTTIME).map(parse_time).transpose()?,
        end_date: map.value(PREFIX_ENDDATE).map(parse_date).transpose()?,
        end_time: map.value(PREFIX_ENDTIME).map(parse_time).transpose()?,
        link: map.value(PREFIX_LINK).map(parse_link).transpose()?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(CommandError::Parse(NOTHING_EDITED.to_string()));
    }

    Ok(Command::EditTask { index, descriptor })
}
