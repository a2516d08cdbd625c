//! Build a TIFF namespace by hand
//!
//! This example fills in basic image properties field by field, corrects
//! them, and checks the namespace before using it.

use xmpns::{Namespace, PropertyMap, TiffNamespace, Xmp, XmpRightsNamespace, XmpValue};

fn build_tiff_namespace() -> Result<(), Box<dyn std::error::Error>> {
    let mut tiff = Namespace::<TiffNamespace>::new()?;

    // Image dimensions and resolution
    tiff.set("ImageWidth", 2400);
    tiff.set("ImageLength", 3000);
    tiff.set("XResolution", 400.0);
    tiff.set("YResolution", 400.0);

    // Start out assuming a bitonal image
    tiff.set("BitsPerSample", 1);
    tiff.set("SamplesPerPixel", 1);
    println!("{}", tiff);

    // It's actually an 8-bit RGB image
    tiff.set("BitsPerSample", 8);
    tiff.set("SamplesPerPixel", 3);
    println!("BitsPerSample = {}", tiff.get("BitsPerSample")?);

    match tiff.validate() {
        Ok(()) => println!("{} ({}) is valid", tiff.prefix(), tiff.uri()),
        Err(e) => println!("{} is not valid: {}", tiff.prefix(), e),
    }

    // Fill in rights through the generic mapping interface
    let mut rights = Namespace::<XmpRightsNamespace>::new()?;
    fill(&mut rights, &[("Marked", "True"), ("Certificate", "none")]);
    println!("{} valid: {}", rights, rights.is_valid());

    let xmp = Xmp::new();
    for name in Xmp::default_names() {
        println!("{:<10} {}", name, xmp.uri(name)?);
    }

    Ok(())
}

fn fill(map: &mut dyn PropertyMap, fields: &[(&str, &str)]) {
    for (key, value) in fields {
        map.set(key.to_string(), XmpValue::from(*value));
    }
}

fn main() {
    if let Err(e) = build_tiff_namespace() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
