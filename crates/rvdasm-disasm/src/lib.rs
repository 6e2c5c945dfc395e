//! # rvdasm-disasm
//!
//! RISC-V instruction decoder for rvdasm.
//!
//! Decodes the RV32I/RV64I base integer instruction set and the M
//! (multiply/divide) extension. The decoder is total: every 32-bit word
//! decodes to either an instruction or the distinguishable `Unknown`
//! variant, never an error.

pub mod riscv;

pub use riscv::{decode, extract_bits, reg_name, Instr};
