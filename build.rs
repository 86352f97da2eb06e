use std::env;
use std::fs;
use std::path::Path;
use std::io::Write;

fn main() {
    println!("cargo:rerun-if-changed=assets/fortunes.txt");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("builtin_fortunes.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let source = Path::new("assets").join("fortunes.txt");
    let content = fs::read_to_string(&source)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", source.display(), e));

    // Same filtering rules as FortuneCatalog::parse, so the runtime
    // never has to reject the built-in list.
    let fortunes: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    if fortunes.is_empty() {
        panic!("{} contains no fortunes", source.display());
    }

    writeln!(f, "pub const BUILTIN_FORTUNES: &[&str] = &[").unwrap();
    for fortune in &fortunes {
        // Debug formatting of a str is a valid Rust string literal.
        writeln!(f, "    {:?},", fortune).unwrap();
    }
    writeln!(f, "];").unwrap();
}
