// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/dropshop-rs/blob/main/licenses/COPYRIGHT.md

//! ANSI colors for pretty-printing to terminals.

use std::fmt::{Debug, Display};

pub const RED: &str = "\x1b[0;31m";
pub const BLUE: &str = "\x1b[0;34m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const GREY: &str = "\x1b[0;90m";
pub const MINT: &str = "\x1b[38;5;48m";
pub const LAVENDER: &str = "\x1b[38;5;183m";
pub const PINK: &str = "\x1b[38;5;161m";
pub const RESET: &str = "\x1b[0;0m";

/// Colors a value for display.
pub trait Color {
    fn red(&self) -> String;
    fn blue(&self) -> String;
    fn yellow(&self) -> String;
    fn grey(&self) -> String;
    fn mint(&self) -> String;
    fn lavender(&self) -> String;
    fn pink(&self) -> String;
}

macro_rules! color_method {
    ($name:ident, $color:ident) => {
        fn $name(&self) -> String {
            format!("{}{}{RESET}", $color, self)
        }
    };
}

impl<T: Display> Color for T {
    color_method!(red, RED);
    color_method!(blue, BLUE);
    color_method!(yellow, YELLOW);
    color_method!(grey, GREY);
    color_method!(mint, MINT);
    color_method!(lavender, LAVENDER);
    color_method!(pink, PINK);
}

/// Colors a value via its [`Debug`] representation.
pub trait DebugColor {
    fn debug_red(&self) -> String;
    fn debug_yellow(&self) -> String;
    fn debug_grey(&self) -> String;
    fn debug_mint(&self) -> String;
    fn debug_lavender(&self) -> String;
    fn debug_pink(&self) -> String;
}

macro_rules! debug_color_method {
    ($name:ident, $color:ident) => {
        fn $name(&self) -> String {
            format!("{}{:?}{RESET}", $color, self)
        }
    };
}

impl<T: Debug> DebugColor for T {
    debug_color_method!(debug_red, RED);
    debug_color_method!(debug_yellow, YELLOW);
    debug_color_method!(debug_grey, GREY);
    debug_color_method!(debug_mint, MINT);
    debug_color_method!(debug_lavender, LAVENDER);
    debug_color_method!(debug_pink, PINK);
}
