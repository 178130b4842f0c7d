//! Shared test harness modules for the PokeMe CLI.

use super::*;

mod helpers;
mod rank_unit;
