//! Color lookup widget: a thin typed wrapper over thecolorapi.com.
//!
//! Validates user input (`#4f46e5`, `4f46e5`, `#fff`, `rgb(79,70,229)`),
//! fetches color details and generated palettes, and projects them into the
//! strings the widget renders (`rgb(…)`, `hsl(…)`, `cmyk(…)`, with `N/A`
//! fallbacks for sections the API omits).
//!
//! ```no_run
//! # async fn demo() -> Result<(), color_widget::ColorError> {
//! use color_widget::{ColorCard, ColorClient, ColorQuery, SchemeMode};
//!
//! let client = ColorClient::new();
//! let query = ColorQuery::parse("#4f46e5")?;
//! let info = client.lookup(&query).await?;
//! let card = ColorCard::from_info(&info);
//! println!("{} is {}", card.hex, card.name);
//!
//! let palette = client
//!     .scheme(card.hex.as_str(), SchemeMode::AnalogicComplement, 5)
//!     .await?;
//! # let _ = palette;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod api;
pub mod client;
pub mod error;
pub mod input;
pub mod view;

pub use api::{ColorInfo, SchemeResponse};
pub use client::{ColorClient, SchemeMode, DEFAULT_BASE_URL};
pub use error::ColorError;
pub use input::{random_hex, ColorQuery};
pub use view::{palette_hex, ColorCard};
