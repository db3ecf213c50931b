pub mod generator;
pub mod record;
pub mod value;
#[cfg(test)]
mod tests;

pub use generator::Generator;
pub use record::Record;
pub use value::Value;
