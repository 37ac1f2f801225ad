mod console;
mod reconciliation;
mod reporter;
#[cfg(test)]
mod tests;

pub use console::Console;
pub use reconciliation::reconcile;
pub use reporter::Reporter;
