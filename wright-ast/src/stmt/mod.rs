//! Statement nodes.

mod branch;
mod do_catch;
mod jump;
mod loops;
mod switch;
mod trivia;

pub use branch::{Condition, Else, Guard, If};
pub use do_catch::{Catch, DoCatch};
pub use jump::{Break, Continue, Defer, Return, Throw};
pub use loops::{ForIn, RepeatWhile, While};
pub use switch::{Switch, SwitchCase};
pub use trivia::{Comment, Raw};
