//! Unit test suite for post-shortcodes
//!
//! Smaller suites covering the registry dispatch surface and the plugin
//! configuration live here; the expanders, sanitizers, and guard carry
//! their tests next to the code.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod config_tests;
mod registry_tests;
