//! Integer-coded notification visibility and priority

use serde::Serialize;

use crate::error::FieldParseError;

/// Lock-screen visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Secret,
    Private,
    #[default]
    Public,
}

impl Visibility {
    pub fn code(&self) -> i32 {
        match self {
            Visibility::Secret => -1,
            Visibility::Private => 0,
            Visibility::Public => 1,
        }
    }

    pub fn parse(s: &str) -> Result<Self, FieldParseError> {
        match parse_code(s)? {
            -1 => Ok(Visibility::Secret),
            0 => Ok(Visibility::Private),
            1 => Ok(Visibility::Public),
            value => Err(FieldParseError::UnknownValue {
                field: "visibility",
                value,
            }),
        }
    }
}

/// Notification priority, from least to most intrusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Min,
    Low,
    Default,
    High,
    #[default]
    Max,
}

impl Priority {
    pub fn code(&self) -> i32 {
        match self {
            Priority::Min => -2,
            Priority::Low => -1,
            Priority::Default => 0,
            Priority::High => 1,
            Priority::Max => 2,
        }
    }

    pub fn parse(s: &str) -> Result<Self, FieldParseError> {
        match parse_code(s)? {
            -2 => Ok(Priority::Min),
            -1 => Ok(Priority::Low),
            0 => Ok(Priority::Default),
            1 => Ok(Priority::High),
            2 => Ok(Priority::Max),
            value => Err(FieldParseError::UnknownValue {
                field: "priority",
                value,
            }),
        }
    }
}

fn parse_code(s: &str) -> Result<i32, FieldParseError> {
    s.trim()
        .parse()
        .map_err(|_| FieldParseError::InvalidNumber(s.to_string()))
}
