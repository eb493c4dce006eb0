use arch::inst::Inst;

use crate::error::EncodeError;

/// Encode a resolved instruction sequence into 16-character binary
/// strings, one per instruction, in the same order. Pure: no state is
/// shared between calls.
pub fn encode(insts: &[Inst]) -> Result<Vec<String>, EncodeError> {
    insts
        .iter()
        .enumerate()
        .map(|(index, inst)| {
            inst.to_bin()
                .map(|word| format!("{:016b}", word))
                .map_err(|reason| EncodeError { index, reason })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch::comp::Comp;
    use arch::inst::Operand;

    #[test]
    fn words_are_fixed_width() {
        let insts = vec![
            Inst::A(Operand::Constant(1)),
            Inst::C {
                dest: None,
                comp: Comp::Zero,
                jump: Some(arch::jump::Jump::JMP),
            },
        ];
        let words = encode(&insts).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.iter().all(|w| w.len() == 16));
        assert!(words[0].starts_with('0'));
        assert!(words[1].starts_with("111"));
    }

    #[test]
    fn error_carries_instruction_index() {
        let insts = vec![
            Inst::A(Operand::Constant(1)),
            Inst::A(Operand::Symbol("x".to_string(), None)),
        ];
        let err = encode(&insts).unwrap_err();
        assert_eq!(err.index, 1);
    }
}
