mod maximum_resolver;

pub use maximum_resolver::{MaximumResolver, Nominator};
