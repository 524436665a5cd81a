pub mod credential;
pub mod instructions;
pub mod output;

pub use credential::read_api_key;
pub use instructions::read_instructions;
pub use output::write_manifest;
