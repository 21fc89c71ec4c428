use crate::commands::{resolve, CommandResult};
use crate::error::{CommandError, ListKind};
use crate::index::Index;
use crate::model::Model;
use crate::models::{CollaborativeLink, Link};

pub const LINK_MEETING_USAGE: &str = "link meeting: Attaches a meeting link to the task identified by the index number \
used in the displayed task list. Any previous meeting link is replaced.\n\
Parameters: INDEX (must be a positive integer) link/URL\n\
Example: link meeting 3 link/https://zoom.us/j/123456";

pub const LINK_COLLAB_USAGE: &str = "link collab: Attaches a labelled collaborative link to the task identified by the index number \
used in the displayed task list. Any previous collaborative link is replaced.\n\
Parameters: INDEX (must be a positive integer) label/LABEL link/URL\n\
Example: link collab 1 label/Google Drive link/https://drive.google.com/drive/folders/abc";

pub fn link_meeting(model: &mut dyn Model, index: Index, link: &Link) -> Result<CommandResult, CommandError> {
    let target = resolve(&model.filtered_task_list(), index, ListKind::Task)?;
    let mut edited = target.clone();
    edited.set_link(Some(link.clone()));
    model.set_task(&target, edited);
    Ok(CommandResult::new(format!(
        "Linked {} to {}",
        target.description(),
        link
    )))
}

pub fn link_collaborative(
    model: &mut dyn Model,
    index: Index,
    link: &CollaborativeLink,
) -> Result<CommandResult, CommandError> {
    let target = resolve(&model.filtered_task_list(), index, ListKind::Task)?;
    let mut edited = target.clone();
    edited.set_collaborative_link(Some(link.clone()));
    model.set_task(&target, edited);
    Ok(CommandResult::new(format!(
        "Linked {} to {}",
        target.description(),
        link
    )))
}
