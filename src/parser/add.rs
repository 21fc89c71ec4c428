use crate::commands::add::{ADD_CONTACT_USAGE, ADD_EVENT_USAGE, ADD_TODO_USAGE};
use crate::commands::Command;
use crate::error::CommandError;
use crate::models::{Person, Task};
use crate::parser::syntax::*;
use crate::parser::tokenizer::tokenize;
use crate::parser::util::{
    invalid_format, parse_address, parse_date_time, parse_description, parse_email, parse_link, parse_name,
    parse_phone, parse_tags,
};

pub fn parse_add_contact(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    );
    if !map.are_prefixes_present(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])
        || !map.preamble().is_empty()
    {
        return Err(invalid_format(ADD_CONTACT_USAGE));
    }

    let name = parse_name(map.value(PREFIX_NAME).unwrap_or_default())?;
    let phone = parse_phone(map.value(PREFIX_PHONE).unwrap_or_default())?;
    let email = parse_email(map.value(PREFIX_EMAIL).unwrap_or_default())?;
    let address = parse_address(map.value(PREFIX_ADDRESS).unwrap_or_default())?;
    let tags = parse_tags(map.all_values(PREFIX_TAG))?;

    Ok(Command::AddContact(Person::new(name, phone, email, address, tags)))
}

pub fn parse_add_todo(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(
        args,
        &[PREFIX_DESCRIPTION, PREFIX_DATE, PREFIX_TIME, PREFIX_LINK, PREFIX_TAG],
    );
    if !map.are_prefixes_present(&[PREFIX_DESCRIPTION, PREFIX_DATE, PREFIX_TIME]) || !map.preamble().is_empty() {
        return Err(invalid_format(ADD_TODO_USAGE));
    }

    let description = parse_description(map.value(PREFIX_DESCRIPTION).unwrap_or_default())?;
    let deadline = parse_date_time(
        map.value(PREFIX_DATE).unwrap_or_default(),
        map.value(PREFIX_TIME).unwrap_or_default(),
    )?;
    let link = map.value(PREFIX_LINK).map(parse_link).transpose()?;
    let tags = parse_tags(map.all_values(PREFIX_TAG))?;

    let todo = Task::todo(&description, deadline)?.with_link(link).with_tags(tags);
    Ok(Command::AddTodo(todo))
}

pub fn parse_add_event(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(
        args,
        &[
            PREFIX_DESCRIPTION,
            PREFIX_STARTDATE,
            PREFIX_STARTTIME,
            PREFIX_ENDDATE,
            PREFIX_ENDTIME,
            PREFIX_LINK,
            PREFIX_TAG,
        ],
    );
    let required = [
        PREFIX_DESCRIPTION,
        PREFIX_STARTDATE,
        PREFIX_STARTTIME,
        PREFIX_ENDDATE,
        PREFIX_ENDTIME,
    ];
    if !map.are_prefixes_present(&required) || !map.preamble().is_empty() {
        return Err(invalid_format(ADD_EVENT_USAGE));
    }

    let description = parse_description(map.value(PREFIX_DESCRIPTION).unwrap_or_default())?;
    let start = parse_date_time(
        map.value(PREFIX_STARTDATE).unwrap_or_default(),
        map.value(PREFIX_STARTTIME).unwrap_or_default(),
    )?;
    let end = parse_date_time(
        map.value(PREFIX_ENDDATE).unwrap_or_default(),
        map.value(PREFIX_ENDTIME).unwrap_or_default(),
    )?;
    let link = map.value(PREFIX_LINK).map(parse_link).transpose()?;
    let tags = parse_tags(map.all_values(PREFIX_TAG))?;

    let event = Task::event(&description, start, end)?.with_link(link).with_tags(tags);
    Ok(Command::AddEvent(event))
}
