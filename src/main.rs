use anyhow::Result;

fn main() -> Result<()> {
    scrubber_cli::run_cli()
}
