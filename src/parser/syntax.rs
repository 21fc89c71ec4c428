use std::fmt;

/// A field marker such as `n/` introducing a value in command text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_DESCRIPTION: Prefix = Prefix::new("desc/");
pub const PREFIX_DATE: Prefix = Prefix::new("date/");
pub const PREFIX_TIME: Prefix = Prefix::new("time/");
pub const PREFIX_LINK: Prefix = Prefix::new("link/");
pub const PREFIX_STARTDATE: Prefix = Prefix::new("startdate/");
pub const PREFIX_STARTTIME: Prefix = Prefix::new("starttime/");
pub const PREFIX_ENDDATE: Prefix = Prefix::new("enddate/");
pub const PREFIX_ENDTIME: Prefix = Prefix::new("endtime/");
pub const PREFIX_LABEL: Prefix = Prefix::new("label/");
pub const PREFIX_CONTACT_INDEX: Prefix = Prefix::new("c/");
pub const PREFIX_TASK_INDEX: Prefix = Prefix::new("task/");
