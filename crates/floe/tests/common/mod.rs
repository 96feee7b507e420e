//! Shared record fixtures for integration tests.
#![allow(dead_code)] // not every test binary uses every fixture

use floe::prelude::*;

///
/// Transport
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transport {
    pub mode: String,
    pub line: String,
}

impl Transport {
    pub fn new(mode: &str, line: &str) -> Self {
        Self {
            mode: mode.to_string(),
            line: line.to_string(),
        }
    }
}

impl Record for Transport {
    fn to_item(&self) -> Item {
        Item::new()
            .with("mode", self.mode.clone())
            .with("line", self.line.clone())
    }

    fn from_item(item: &Item) -> Result<Self, ReadError> {
        Ok(Self {
            mode: item.text("mode")?.to_string(),
            line: item.text("line")?.to_string(),
        })
    }
}

///
/// Person
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: i64,
}

impl Record for Person {
    fn to_item(&self) -> Item {
        Item::new()
            .with("name", self.name.clone())
            .with("age", self.age)
    }

    fn from_item(item: &Item) -> Result<Self, ReadError> {
        Ok(Self {
            name: item.text("name")?.to_string(),
            age: item.int("age")?,
        })
    }
}

///
/// Flag
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Flag {
    pub id: i64,
    pub maybe: Option<String>,
}

impl Record for Flag {
    fn to_item(&self) -> Item {
        let item = Item::new().with("id", self.id);
        match &self.maybe {
            Some(value) => item.with("maybe", value.clone()),
            None => item,
        }
    }

    fn from_item(item: &Item) -> Result<Self, ReadError> {
        Ok(Self {
            id: item.int("id")?,
            maybe: item.opt_text("maybe")?.map(ToString::to_string),
        })
    }
}
