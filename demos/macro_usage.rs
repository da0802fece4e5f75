//! Example: building packets with the `packet!` macro and reading their headers
//!
//! Run with: `cargo run --example macro_usage`

use packet_header::{packet, read_length, try_read_length};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== packet! Macro Examples ===\n");

    let empty = packet![];
    println!("Empty packet: {:?}", empty);

    let values = packet![1, 2, 3, 4, 5];
    println!("Packet with values: {:?}", values);

    let repeated = packet![42; 5];
    println!("Packet with repeated values: {}", repeated);

    let data = packet![10, 20, 30, 40, 50, 60, 70, 80, 90, 100];
    println!("\nSlice syntax examples:");
    println!("  First 3 elements: {:?}", &data[..3]);
    println!("  Last 3 elements: {:?}", &data[7..]);
    println!("  Middle elements (3-7): {:?}", &data[3..7]);

    println!("\nIterating over packet values:");
    for (i, value) in values.iter().enumerate() {
        println!("  [{}] = {}", i, value);
    }

    println!("\nReading headers from wire bytes:");
    let bytes = data.to_bytes();
    println!("  Encoded {} bytes, header {:02X?}", bytes.len(), &bytes[..2]);
    println!("  read_length(bytes)        = {}", read_length(Some(bytes.as_slice()))?);
    println!("  read_length(None)         = {}", read_length(None)?);
    println!("  try_read_length(None)     = {:?}", try_read_length(None)?);
    println!(
        "  try_read_length(empty)    = {:?}",
        try_read_length(Some(empty.to_bytes().as_slice()))?
    );

    Ok(())
}
