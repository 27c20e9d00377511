pub mod report;
pub mod scan;
pub mod wordlist;

pub use scan::{ScanOptions, ScanResultCallback, execute_scan};
pub use wordlist::{default_wordlist, load_wordlist, parse_wordlist};
