pub mod mortgage;
pub mod registry;
