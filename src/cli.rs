use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 seqsplice version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   random DNA records with a name hidden inside
   the sequence is written to <ID>.fasta and its composition is reported";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    styles = STYLES
)]
pub struct Cli {
    /// seed for the random number generator. runs with the same seed and the same answers
    /// produce identical records. if omitted, the generator is seeded from the OS.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_optional() {
        let cli = Cli::parse_from(["seqsplice"]);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn seed_is_parsed() {
        let cli = Cli::parse_from(["seqsplice", "--seed", "42"]);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn seed_must_be_numeric() {
        assert!(Cli::try_parse_from(["seqsplice", "--seed", "abc"]).is_err());
    }
}
