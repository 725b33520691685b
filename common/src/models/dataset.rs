use serde::{Deserialize, Serialize};

use crate::models::host::HostRecord;

/// A parsed host-scan export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub hosts: Vec<HostRecord>,
}

impl Dataset {
    pub fn new(hosts: Vec<HostRecord>) -> Self {
        Self { hosts }
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HostRecord> {
        self.hosts.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a HostRecord;
    type IntoIter = std::slice::Iter<'a, HostRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}
