mod account;
mod email;
mod notifications;
mod password;
mod profile;

pub use account::*;
pub use email::*;
pub use notifications::*;
pub use password::*;
pub use profile::*;
