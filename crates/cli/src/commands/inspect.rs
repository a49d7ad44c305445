//! Commands that print what a config file contains.

use anyhow::Result;
use envconf::Store;

use crate::args::OutputFormat;
use crate::formatters::{format_names, format_store};

/// Keys of the current section.
pub fn list(store: &Store, output: OutputFormat) -> Result<()> {
    print_nonempty(format_names(output, &store.list())?);
    Ok(())
}

pub fn sections(store: &Store, output: OutputFormat) -> Result<()> {
    print_nonempty(format_names(output, &store.sections())?);
    Ok(())
}

pub fn dump(store: &Store, output: OutputFormat) -> Result<()> {
    print_nonempty(format_store(output, store)?);
    Ok(())
}

fn print_nonempty(text: String) {
    if !text.is_empty() {
        println!("{text}");
    }
}
