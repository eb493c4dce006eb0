use crate::{comp::Comp, dest::Dest, jump::Jump};

use color_print::cformat;

/// Operand of an a-instruction. A symbol carries its resolved value as
/// an `Option`: `None` means the parser has not finalized it yet, and
/// never survives a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Constant(u16),
    Symbol(String, Option<u16>),
}

impl Operand {
    pub fn value(&self) -> Result<u16, String> {
        match self {
            Operand::Constant(value) => Ok(*value),
            Operand::Symbol(_, Some(value)) => Ok(*value),
            Operand::Symbol(name, None) => Err(format!("Unresolved symbol: `{name}`")),
        }
    }

    pub fn cformat(&self) -> String {
        match self {
            Operand::Constant(value) => cformat!("<yellow>{}</>", value),
            Operand::Symbol(name, Some(value)) => cformat!("<green>{}({})</>", value, name),
            Operand::Symbol(name, None) => cformat!("<red,underline>{}</>", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    A(Operand),
    C {
        dest: Option<Dest>,
        comp: Comp,
        jump: Option<Jump>,
    },
}

impl Inst {
    /// Encode into the 16-bit machine word.
    ///
    /// An a-instruction is `0` followed by the 15-bit operand value; a
    /// value that needs more than 15 bits is an error, never truncated.
    /// A c-instruction is `111` + comp (7) + dest (3) + jump (3), with
    /// absent dest/jump fields encoded as all zero.
    pub fn to_bin(&self) -> Result<u16, String> {
        match self {
            Inst::A(operand) => {
                let value = operand.value()?;
                if value > 0x7FFF {
                    return Err(format!("Address does not fit in 15 bits: {value}"));
                }
                Ok(value)
            }
            Inst::C { dest, comp, jump } => {
                let comp = u8::from(*comp) as u16;
                let dest = dest.map_or(0, u8::from) as u16;
                let jump = jump.map_or(0, u8::from) as u16;
                Ok(0b111 << 13 | comp << 6 | dest << 3 | jump)
            }
        }
    }

    pub fn cformat(&self) -> String {
        match self {
            Inst::A(operand) => cformat!("<red>@</>{}", operand.cformat()),
            Inst::C { dest, comp, jump } => {
                let dest = match dest {
                    Some(dest) => cformat!("<blue>{}</>=", dest),
                    None => String::new(),
                };
                let jump = match jump {
                    Some(jump) => cformat!(";<green>{}</>", jump),
                    None => String::new(),
                };
                format!("{}{}{}", dest, cformat!("<red>{}</>", comp), jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_bin {
        ($($name:ident: $inst:expr => $bin:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let word = $inst.to_bin().unwrap();
                    assert_eq!(format!("{:016b}", word), $bin);
                }
            )*
        }
    }

    test_bin! {
        a_constant: Inst::A(Operand::Constant(2)) => "0000000000000010",
        a_zero: Inst::A(Operand::Constant(0)) => "0000000000000000",
        a_max: Inst::A(Operand::Constant(32767)) => "0111111111111111",
        a_symbol: Inst::A(Operand::Symbol("i".to_string(), Some(16))) => "0000000000010000",
        c_d_eq_a: Inst::C { dest: Some(Dest::D), comp: Comp::A, jump: None } => "1110110000010000",
        c_d_eq_d_plus_a: Inst::C { dest: Some(Dest::D), comp: Comp::DPlusA, jump: None } => "1110000010010000",
        c_m_eq_d: Inst::C { dest: Some(Dest::M), comp: Comp::D, jump: None } => "1110001100001000",
        c_jump: Inst::C { dest: None, comp: Comp::Zero, jump: Some(Jump::JMP) } => "1110101010000111",
        c_full: Inst::C { dest: Some(Dest::AMD), comp: Comp::MPlusOne, jump: Some(Jump::JLE) } => "1111110111111110",
        c_d_jgt: Inst::C { dest: None, comp: Comp::D, jump: Some(Jump::JGT) } => "1110001100000001",
    }

    #[test]
    fn a_over_15_bits_fails() {
        let err = Inst::A(Operand::Constant(32768)).to_bin().unwrap_err();
        assert!(err.contains("15 bits"));
    }

    #[test]
    fn unresolved_symbol_fails() {
        let inst = Inst::A(Operand::Symbol("loop".to_string(), None));
        assert!(inst.to_bin().unwrap_err().contains("loop"));
    }
}
