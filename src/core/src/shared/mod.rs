pub mod fullname;

pub use fullname::FullName;
