//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rosterbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    let book = rosterbook_core::sample_address_book();
    println!("rosterbook_core version={}", rosterbook_core::core_version());
    println!(
        "sample_book persons={} assignments={}",
        book.persons().len(),
        book.assignments().len()
    );
}
