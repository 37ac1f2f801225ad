mod args;
mod errors;
mod options;
#[cfg(test)]
mod tests;

pub use args::Args;
pub use errors::ConfigError;
pub use options::BatchOptions;
