//! keyword-merge command-line entry point

use anyhow::Result;

fn main() -> Result<()> {
    keyword_merge::cli::run()
}
