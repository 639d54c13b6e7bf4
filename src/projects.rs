use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::{fmt, io};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::Serialize;

/// One portfolio entry. The name is free text and may carry a trailing
/// status marker such as "(wip)".
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub publish_date: NaiveDate,
    pub url_path: String,
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, name={}, published={}, url={}",
               self.id,
               self.name,
               self.publish_date,
               self.url_path
        )
    }
}

lazy_static! {
    static ref PROJECTS: Vec<Project> = vec![
        Project {
            id: 1,
            name: "kitchenet".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2024, 10, 17).unwrap(),
            url_path: "https://kitchenet.vercel.app/".to_string(),
        },
        Project {
            id: 2,
            name: "pellicola (wip)".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2022, 11, 5).unwrap(),
            url_path: "https://pellicola.netlify.app/".to_string(),
        },
        Project {
            id: 3,
            name: "off my chest".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2022, 8, 22).unwrap(),
            url_path: "https://offmychest.netlify.app/".to_string(),
        },
    ];
}

/// Returns the project entries in declaration order.
///
/// Declaration order is display order. Ids are unique but not required to
/// be contiguous, and the list is not sorted by date.
pub fn projects() -> &'static [Project] {
    PROJECTS.as_slice()
}

/// Ids are an identity, so a duplicated one is a declaration mistake.
pub fn validate_ids(list: &[Project]) -> io::Result<()> {
    let mut seen = HashSet::new();
    for project in list {
        if !seen.insert(project.id) {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("Duplicated project id {} ({})", project.id, project.name)));
        }
    }
    Ok(())
}
