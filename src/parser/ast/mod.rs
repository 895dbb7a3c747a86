//! Output data model for parsed workout lines
//!
//! All types are plain owned data: created fresh per parse call, immutable
//! once returned, and free of any reference back into the input string.
//! With the `serde` feature enabled they derive `Serialize`/`Deserialize`
//! so downstream stores can persist them as-is.

use std::fmt;

use smol_str::SmolStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the exercises in a [`WorkoutSet`] relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SetKind {
    /// A single exercise performed on its own
    Normal,
    /// Two or more exercises performed back-to-back, chained with `ss`
    Superset,
    /// Exercises performed in rotation, chained with `+`
    Circuit,
}

impl SetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Superset => "superset",
            Self::Circuit => "circuit",
        }
    }

    /// The connector text between exercises when rendering
    fn connector(self) -> &'static str {
        match self {
            Self::Normal => ", ",
            Self::Superset => " ss ",
            Self::Circuit => " + ",
        }
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One movement with its set scheme and optional load/effort annotations
///
/// Invariants upheld by the parser: `name` is never empty, `sets` and
/// `reps` are always ≥ 1. A candidate that cannot satisfy them is dropped
/// during parsing instead of being emitted with defaults.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exercise {
    /// Exercise name, trimmed; everything before the sets×reps token
    pub name: SmolStr,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Normalized weight, `"<number> <unit>"`, unit in its original casing
    pub weight: Option<String>,
    /// Rate of perceived exertion from an `@RPE<number>` token
    pub rpe: Option<f32>,
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.name, self.sets, self.reps)?;
        if let Some(weight) = &self.weight {
            write!(f, " {weight}")?;
        }
        if let Some(rpe) = self.rpe {
            write!(f, " @RPE{rpe}")?;
        }
        Ok(())
    }
}

/// A grouping of one or more exercises sharing a relationship
///
/// Only emitted when at least one exercise parsed; the exercise list is
/// never empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkoutSet {
    /// Serialized as `type`, the name the downstream store expects
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: SetKind,
    /// Exercises in the order they appeared in the input
    pub exercises: Vec<Exercise>,
}

impl fmt::Display for WorkoutSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for exercise in &self.exercises {
            if !first {
                f.write_str(self.kind.connector())?;
            }
            write!(f, "{exercise}")?;
            first = false;
        }
        Ok(())
    }
}

/// A fully parsed line: workout sets in input-segment order
///
/// May be empty when no segment of the input yielded a usable exercise;
/// callers should treat that as "nothing recognized", distinct from a
/// parse error.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Workout {
    pub sets: Vec<WorkoutSet>,
}

impl Workout {
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutSet> {
        self.sets.iter()
    }

    /// Total number of exercises across all sets
    pub fn exercise_count(&self) -> usize {
        self.sets.iter().map(|set| set.exercises.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Workout {
    type Item = &'a WorkoutSet;
    type IntoIter = std::slice::Iter<'a, WorkoutSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for set in &self.sets {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{set}")?;
            first = false;
        }
        Ok(())
    }
}
