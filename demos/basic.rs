//! Save a small secret once, then load it back on every run.

use std::path::Path;

use anyhow::Result;

const SECRET: &str = "bar";
const FILE: &str = "secret.conf";

fn main() -> Result<()> {
    if !Path::new(FILE).exists() {
        println!("Saving a file with 'foobar'");
        fcrypto::save_file(b"foobar", FILE, SECRET)?;
    } else {
        println!("Loading existing {}", FILE);
    }

    let content = fcrypto::load_file(FILE, SECRET)?;
    println!("Decrypting the file...");
    println!("File content: {}", String::from_utf8_lossy(&content));

    Ok(())
}
