pub mod client;
pub mod clock;
pub mod parser;
pub mod poller;
pub mod validator;
