//! # ubasic+
//!
//! A block structured integer BASIC for small classroom robots.
//!
//! Programs live in 512 bytes of program memory and are interpreted
//! straight from their text. There are no line numbers, no `goto` and
//! no parse tree. Loops rewind the tokenizer instead.
//!
//! ```text
//! speed 50 50;
//! while 1 {
//!     sense 16 s;
//!     if s { motors 0 0 } else { motors 1 1 }
//! }
//! ```
//!
//! The robot itself is reached through the
//! [`Hardware`](mach/trait.Hardware.html) trait. The `ubasic` command,
//! installed with `cargo install ubasic-plus`, runs programs against a
//! console stand-in and manages the program store.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

#[path = "doc/appendix_c.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_C;

pub mod lang;
pub mod mach;
pub mod term;
