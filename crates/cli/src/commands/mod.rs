pub mod call;
pub mod onboard;
pub mod status;
pub mod tools;
