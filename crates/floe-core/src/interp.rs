use crate::{item::Item, op::Op};
use serde::{Deserialize, Serialize};

///
/// WriteOutcome
///
/// Result of one write request. A failed condition is an expected, normal
/// outcome of a conditional write, never an error: the store was consulted,
/// the guard did not hold, and the write was skipped.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum WriteOutcome {
    /// The write was performed.
    Applied,
    /// The condition did not hold against the stored item; nothing changed.
    ConditionFailed,
}

impl WriteOutcome {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    #[must_use]
    pub const fn is_rejected(self) -> bool {
        matches!(self, Self::ConditionFailed)
    }
}

///
/// Outcome
///
/// What an interpreter yields for one executed description. The shape is
/// determined by the request kind: reads yield rows, point reads yield an
/// optional row, writes yield a `WriteOutcome`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Outcome {
    /// Point-read result.
    Row(Option<Item>),
    /// Scan/query/batch-read result, in the target's key order.
    Rows(Vec<Item>),
    /// Write result.
    Write(WriteOutcome),
}

impl Outcome {
    /// Stable label for diagnostics and shape-mismatch reporting.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Row(_) => "row",
            Self::Rows(_) => "rows",
            Self::Write(_) => "write",
        }
    }
}

///
/// Interpreter
///
/// The execution boundary. The core hands an interpreter one description at
/// a time; the interpreter pattern-matches the request kind, performs the
/// actual storage work, and reports an `Outcome`. Retry, pagination, and
/// transport concerns all live behind this trait.
///

pub trait Interpreter {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&mut self, op: Op) -> Result<Outcome, Self::Error>;
}
