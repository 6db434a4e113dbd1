//! Expression nodes, plus the assignment statements built from them.

mod assign;
mod call;
mod closure;
mod operators;

pub use assign::{Assignment, AssignmentMode, TupleAssignment};
pub use call::{Argument, Call, Member};
pub use closure::{Capture, CaptureStrength, Closure, ClosureParam};
pub use operators::{Infix, Postfix, PostfixOp, Prefix};
