use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Array length does not match a 128-bit value")]
    InvalidArrayLength,
    #[msg("Invalid hex character")]
    InvalidHexCharacter,
    #[msg("Hex string does not fit into 128 bits")]
    HexOverflow,
    #[msg("Invalid decimal string")]
    InvalidDecimalString,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("Value does not fit into 64 unsigned bits")]
    NotA64BitValue,
}
