/// `tx languages` - list the languages the service supports.
pub mod languages;

/// `tx` - the interactive translation session.
pub mod session;
