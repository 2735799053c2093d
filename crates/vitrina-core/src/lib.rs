pub mod config;
pub mod error;
pub mod carousel;
pub mod relay;

pub use carousel::{Carousel, CarouselConfig, CarouselEvent, Surface};
pub use config::{AppConfig, ServerConfig, TelegramConfig};
pub use error::{Error, Result};
pub use relay::{Submission, TelegramClient};
