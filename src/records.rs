//! Composite records for key-based sorting.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::SortBenchError;
use crate::footprint::{DeepSize, Sizer};

/// A named person with an age and a grade
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub grade: f64,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, grade: f64) -> Self {
        Self { name: name.into(), age, grade }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Age: {}, Grade: {})", self.name, self.age, self.grade)
    }
}

impl FromStr for Person {
    type Err = SortBenchError;

    /// Parses `name,age,grade`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SortBenchError::InvalidRecord {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [name, age, grade] = fields.as_slice() else {
            return Err(invalid("expected three comma-separated fields"));
        };
        if name.is_empty() {
            return Err(invalid("name is empty"));
        }
        let age = age.parse().map_err(|_| invalid("age is not a non-negative integer"))?;
        let grade = grade.parse().map_err(|_| invalid("grade is not a number"))?;

        Ok(Person::new(*name, age, grade))
    }
}

impl DeepSize for Person {
    fn heap_children(&self, sizer: &mut Sizer) -> usize {
        self.name.heap_children(sizer)
            + self.age.heap_children(sizer)
            + self.grade.heap_children(sizer)
    }
}
