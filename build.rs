use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// Source CSV files and the names of their compressed counterparts in `OUT_DIR`.
const EMBEDDED_FILES: &[(&str, &str)] = &[
    ("data/lexicon.csv", "lexicon.csv.gz"),
    ("data/lexicon_exceptions.csv", "lexicon_exceptions.csv.gz"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    for (input_path, output_name) in EMBEDDED_FILES {
        // Ensure that Cargo re-runs the build script if the input file changes
        println!("cargo:rerun-if-changed={}", input_path);

        let mut input_file = File::open(input_path)?;
        let output_file = File::create(out_dir.join(output_name))?;

        let mut encoder = GzEncoder::new(output_file, Compression::default());
        io::copy(&mut input_file, &mut encoder)?;
        encoder.finish()?;
    }

    Ok(())
}
