//! Concrete form elements

mod checkbox;
mod password;
mod text;
mod textarea;

pub use checkbox::{truthy, Checkbox};
pub use password::{hash_password, Password};
pub use text::{Hidden, Text};
pub use textarea::Textarea;
