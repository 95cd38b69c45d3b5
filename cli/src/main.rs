//! Binary entrypoint for fontdex-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = fontdex_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
