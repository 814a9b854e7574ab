//! Recipe browser widget: a thin typed wrapper over TheMealDB.
//!
//! Searches meals by name, fetches detail records (by ID or at random), and
//! projects them into what the widget renders: the `Category • Area • Tags`
//! meta line, the paired ingredient list, the result-count label, and the
//! external link chips.
//!
//! ```no_run
//! # async fn demo() -> Result<(), meals_widget::MealError> {
//! use meals_widget::{count_label, meta_line, MealClient};
//!
//! let client = MealClient::new();
//! let meals = client.search("laksa").await?;
//! println!("{}", count_label(meals.len()));
//! if let Some(meal) = meals.first() {
//!     println!("{}\n{}", meal.name, meta_line(meal));
//!     for item in meal.ingredients() {
//!         println!("- {item}");
//!     }
//! }
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
pub mod view;

pub use api::{Meal, MealsResponse};
pub use client::{MealClient, DEFAULT_BASE_URL};
pub use error::MealError;
pub use view::{count_label, instructions, link_chips, meta_line};
