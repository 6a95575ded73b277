//! One module per CloudFormation action

pub mod create;
pub mod delete;
pub mod list;
pub mod read;
pub mod update;
