use serde::de::Error;
use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

use crate::NUM_COLUMNS;

/// Drops a piece in a column numbered `1..=7` from the left.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Action {
    DropPiece(u64),
}

impl Action {
    pub fn column(&self) -> usize {
        let Action::DropPiece(column) = self;
        *column as usize
    }
}

fn is_valid_column(column: u64) -> bool {
    (1..=NUM_COLUMNS as u64).contains(&column)
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let column_num = s.trim().parse()?;

        if !is_valid_column(column_num) {
            return Err(anyhow!("Column number must be between 1 and 7"));
        }

        Ok(Action::DropPiece(column_num))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.column() as u64)
    }
}

struct ActionVisitor;

impl<'de> Visitor<'de> for ActionVisitor {
    type Value = Action;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer from 1-7 naming the column a piece was dropped in")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if !is_valid_column(v) {
            return Err(E::custom(format!("column {} is out of range", v)));
        }

        Ok(Action::DropPiece(v))
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_u64(ActionVisitor)
    }
}
