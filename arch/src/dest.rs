use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

/// Destination field of a c-instruction. Bit 2 writes A, bit 1 writes D,
/// bit 0 writes M; an absent dest is encoded as 000 by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display)]
#[repr(u8)]
pub enum Dest {
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}
