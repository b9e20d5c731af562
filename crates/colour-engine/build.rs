use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// IEC 61966-2-1 decode, used for OKLab and CIE Lab
fn srgb_to_linear_iec(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG 2.1 relative-luminance decode (0.03928 threshold)
fn srgb_to_linear_wcag(srgb: f64) -> f64 {
    if srgb <= 0.03928 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn write_table(file: &mut File, name: &str, doc: &str, f: fn(f64) -> f64) {
    writeln!(file, "/// {doc}").unwrap();
    writeln!(file, "/// Index: 8-bit channel value, Value: linear light").unwrap();
    writeln!(file, "pub static {name}: [f64; 256] = [").unwrap();
    for i in 0..256 {
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:.17},", f(i as f64 / 255.0)).unwrap();
    }
    writeln!(file, "\n];").unwrap();
    writeln!(file).unwrap();
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    write_table(
        &mut file,
        "SRGB_TO_LINEAR",
        "Lookup table for sRGB to linear conversion (IEC 61966-2-1)",
        srgb_to_linear_iec,
    );
    write_table(
        &mut file,
        "WCAG_TO_LINEAR",
        "Lookup table for WCAG relative luminance channel decode",
        srgb_to_linear_wcag,
    );

    println!("cargo::rerun-if-changed=build.rs");
}
