pub mod fs;
pub mod yaml;
