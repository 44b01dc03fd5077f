//! Parsers that work on any [`Sequence`](crate::Sequence): text, bytes or tokens

pub mod is_a;
pub mod tag;
pub mod take;
pub mod take_until;
pub mod take_while;

pub use is_a::{is_a, is_not};
pub use tag::{Tag, tag};
pub use take::{Take, take};
pub use take_until::{TakeUntil, take_until, take_until1};
pub use take_while::{
    TakeWhile, TakeWhileBounded, take_till, take_till1, take_while, take_while1,
    take_while_bounded,
};
