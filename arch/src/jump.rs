use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

/// Jump condition field of a c-instruction; an absent jump is encoded
/// as 000 by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display)]
#[repr(u8)]
pub enum Jump {
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}
