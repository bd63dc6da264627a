pub mod color;
pub mod duration;
pub mod parse;
pub mod queue;
pub mod snowflake;
pub mod time;
