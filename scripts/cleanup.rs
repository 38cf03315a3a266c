#!/usr/bin/env rust-script
//! Cleans up the files that were produced by bench runs.
//!
//! ```cargo
//! [dependencies]
//! glob = "*"
//! ```
extern crate glob;

fn main() {
    for globresult in glob::glob("./log_files/**/*.log").unwrap() {
        match globresult {
            Err(e) => eprintln!("Evaluating pattern produced error {}", e),
            Ok(pathbuf) => {
                std::fs::remove_file(&pathbuf).unwrap();
            }
        }
    }
    std::fs::remove_dir("./log_files/").ok();
}
