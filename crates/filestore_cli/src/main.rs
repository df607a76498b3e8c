//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `filestore_core` linkage and
//!   storage bootstrap.
//! - Keep output deterministic for quick local sanity checks.

use filestore_core::db::migrations::latest_version;
use filestore_core::db::open_db_in_memory;

fn main() {
    println!("filestore_core version={}", filestore_core::core_version());

    match open_db_in_memory() {
        Ok(_conn) => println!("storage=ok schema_version={}", latest_version()),
        Err(err) => {
            eprintln!("storage=error detail={err}");
            std::process::exit(1);
        }
    }
}
