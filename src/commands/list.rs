use crate::core::storage::Store;
use crate::error::Result;

/// Print every saved command name, one per line.
pub fn run(store: &Store) -> Result<()> {
    for name in store.list()? {
        println!("{}", name);
    }
    Ok(())
}
