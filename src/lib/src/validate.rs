pub mod drift;
pub mod ks;
pub mod structural;
