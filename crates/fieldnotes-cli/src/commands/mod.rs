//! One module per subcommand. Every command renders to a `String` so
//! tests can assert on output without capturing stdout.

pub mod list;
pub mod search;
pub mod show;
pub mod sitemap;
pub mod tags;
