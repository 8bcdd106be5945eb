//! Read XMP metadata from a file
//!
//! Prints the document properties, thumbnails and fonts found in the XMP
//! packet of any file (JPEG, PDF, AI, ...).
//!
//! ```bash
//! RUST_LOG=xmpsift=debug cargo run --example read_xmp -- poster.pdf
//! ```

use std::env;

use tracing_subscriber::EnvFilter;
use xmpsift::{ScanOptions, StFntMapper, XmpFile};

fn read_xmp_from_file() -> Result<(), Box<dyn std::error::Error>> {
    // There should be only one argument: a path to a file to be read.
    let args: Vec<String> = env::args().collect();

    let path = match args.len() {
        // args[0] = path to executable
        2 => Ok(&args[1]),
        n => Err(format!(
            "expected 1 argument (file name), got {} arguments",
            n - 1
        )),
    }?;

    let mut xmp_file = XmpFile::with_options(ScanOptions::default());
    xmp_file.open(path)?;

    let xmp = xmp_file
        .get_xmp()
        .ok_or_else(|| format!("unable to process XMP in file {}", path))?;

    if !xmp.has_packet() {
        println!("No XMP packet found in {}", path);
        return Ok(());
    }

    let props = xmp.properties();
    println!("dc:title = {}", props.title);
    println!("dc:creator = {}", props.creator);
    if let Some(tool) = &props.creator_tool {
        println!("xmp:CreatorTool = {}", tool);
    }
    if let Some(created) = &props.created {
        println!("xmp:CreateDate = {}", created);
    }
    if let Some(modified) = &props.modified {
        println!("xmp:ModifyDate = {}", modified);
    }
    if let Some(pages) = props.num_pages {
        println!("xmpTPg:NPages = {}", pages);
    }

    for (i, thumb) in xmp.thumbnails().iter().enumerate() {
        let size = thumb.decode_image().map(|bytes| bytes.len()).unwrap_or(0);
        println!(
            "thumbnail[{}] = {} {}x{} ({} bytes)",
            i, thumb.format, thumb.width, thumb.height, size
        );
    }

    for font in xmpsift::extract::fonts_with(xmp, &StFntMapper)? {
        println!("font = {} ({} {})", font.name, font.family, font.face);
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = read_xmp_from_file() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
