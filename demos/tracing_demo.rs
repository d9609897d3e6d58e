//! Demonstrates how discarded close failures surface through `tracing`.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example tracing_demo --features tracing
//! ```

use mooring::{Close, Open, OpenClose};

/// A port that opens cleanly but always fails to close.
struct WedgedPort {
    engaged: bool,
}

impl Open for WedgedPort {
    type Error = String;

    fn open(&mut self) -> Result<(), String> {
        self.engaged = true;
        Ok(())
    }
}

impl Close for WedgedPort {
    type Error = String;

    fn close(&mut self) -> Result<(), String> {
        self.engaged = false;
        Err("port wedged".to_string())
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    let mut port = WedgedPort { engaged: false };

    // The close failure is discarded; with a subscriber installed it shows
    // up as a warning instead of vanishing.
    let result = port.use_with(|p| {
        assert!(p.engaged);
        Ok("payload sent")
    });

    println!("primary outcome: {:?}", result);
}
