use std::env;

// (input variable, normalised variable seen by the crate)
const OVERRIDES: [(&str, &str); 2] = [
    ("FUGUE_ENDIAN_NATIVE_INT", "FUGUE_ENDIAN_NATIVE_INT_BITS"),
    ("FUGUE_ENDIAN_NATIVE_FLOAT", "FUGUE_ENDIAN_NATIVE_FLOAT_BITS"),
];

fn order_bits(name: &str) -> Option<u8> {
    match name.trim().to_ascii_lowercase().as_str() {
        "le" | "little" => Some(0),
        "be" | "big" => Some(1),
        "h316" | "honeywell316" | "le-swap" => Some(2),
        "pdp" | "pdp11" | "be-swap" => Some(3),
        _ => None,
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    for (input, output) in OVERRIDES {
        println!("cargo:rerun-if-env-changed={}", input);

        if let Ok(value) = env::var(input) {
            let bits = order_bits(&value)
                .unwrap_or_else(|| panic!("{} is not a recognised byte order: `{}`", input, value));
            println!("cargo:rustc-env={}={}", output, bits);
        }
    }
}
