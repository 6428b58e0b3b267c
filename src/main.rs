//! The nb command-line executable.

fn main() -> anyhow::Result<()> {
    notabene::run()
}
