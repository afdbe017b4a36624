use matcolor::error::ColorFormatError;
use matcolor::scheme::Variant;
use matcolor::theme::{Contrast, MaterialTheme};
use matcolor::StandardRgb;

fn main() -> Result<(), ColorFormatError> {
    // 1. Pick a seed color
    let seed: StandardRgb = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("#63A002FF")
        .parse()?;

    // 2. Derive light and dark themes
    let light = MaterialTheme::new(seed, false, Contrast::Standard, Variant::TonalSpot);
    let dark = MaterialTheme::new(seed, true, Contrast::Standard, Variant::TonalSpot);

    // 3. Show the roles
    println!("\n    seed {}\n", seed.to_rgb_hex());
    println!("    {:<28} {:<9} {:<9}", "role", "light", "dark");
    for ((role, light), (_, dark)) in light.colors().zip(dark.colors()) {
        println!(
            "    {:<28} {} {}",
            role.name(),
            light.to_rgb_hex(),
            dark.to_rgb_hex()
        );
    }
    println!();

    Ok(())
}
