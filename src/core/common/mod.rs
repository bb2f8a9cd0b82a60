pub mod error;
pub use error::OxiknnError;
pub mod functions;
pub mod traits;

#[cfg(test)]
mod tests {
    mod error_tests;
}
