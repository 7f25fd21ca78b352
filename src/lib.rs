//! Single-step interpreter for a small MIPS subset: text decoder, executor and an
//! interactive session layer on top of them.

pub mod mips;
pub mod session;
