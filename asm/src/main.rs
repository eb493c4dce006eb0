use color_print::{cformat, cprintln};
use hackasm::{encoder, parser::Parser, util};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file
    #[clap(short, long, default_value = "main.hack")]
    output: String,

    /// Dump assembled listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser as _;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    println!("1. Read and Parse Source");
    println!("  < {}", args.input);
    let source = std::fs::read_to_string(&args.input)
        .expect(&cformat!("<red,bold>Failed to open file</>: {}", args.input));

    let mut parser = Parser::new();
    parser.load_source(&source);
    let insts = match parser.parse() {
        Ok(insts) => insts,
        Err(err) => {
            err.print_diag(&args.input);
            std::process::exit(1);
        }
    };

    println!("2. Encode Binary");
    println!("  > {}", args.output);
    let words = match encoder::encode(&insts) {
        Ok(words) => words,
        Err(err) => {
            cprintln!("<red,bold>error</>: {}", err);
            std::process::exit(1);
        }
    };
    std::fs::write(&args.output, words.join("\n") + "\n")
        .expect(&cformat!("<red,bold>Failed to write file</>: {}", args.output));

    if args.dump {
        util::print_dump(&insts);
    }
}
