// SPDX-License-Identifier: MPL-2.0
//! Internationalization support backed by Fluent.
//!
//! Translations live in `assets/i18n/*.ftl` bundles embedded into the binary;
//! the active locale is resolved from the CLI flag, then the config file,
//! then the OS locale.

pub mod fluent;

pub use fluent::I18n;
