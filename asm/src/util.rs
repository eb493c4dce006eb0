use arch::inst::Inst;
use color_print::cformat;

/// Print an assembled listing: instruction index, machine word, and the
/// formatted instruction.
pub fn print_dump(insts: &[Inst]) {
    println!("------+------------------+---------------------");
    for (pc, inst) in insts.iter().enumerate() {
        let bin = match inst.to_bin() {
            Ok(word) => format!("{:016b}", word),
            Err(_) => cformat!("<red,bold>!!!!!!!!!!!!!!!!</>"),
        };
        println!(" {:>4} | {} | {}", pc, bin, inst.cformat());
    }
    println!("------+------------------+---------------------");
}
