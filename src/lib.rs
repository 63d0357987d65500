pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod logs;
pub mod messages;
pub mod service;
pub mod types;

pub use crate::core::{HttpTransport, Method, Request, Transport};
pub use error::{Error, Result};
pub use messages::{MessageLog, MessageSink};
pub use service::HeroService;
pub use types::{Hero, HeroRef, NewHero};
