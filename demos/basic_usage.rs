// ============================================================================
// Basic Usage Example
// ============================================================================

use scaled_arithmetic::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    {
        if let Err(err) = scaled_arithmetic::utils::init_logging(tracing::Level::TRACE) {
            eprintln!("logging disabled: {}", err);
        }
    }

    println!("=== Scaled Arithmetic Example ===\n");

    // Three decimals: raw 1500 means 1.5
    let scale = 1000i64;
    let price = 1500i64;
    let quantity = 2250i64;

    println!("Raw arithmetic at scale {}:", scale);
    let product = ScaledArithmetic::multiply(price, quantity, scale);
    let quotient = ScaledArithmetic::divide(price, quantity, scale);
    println!(
        "  {} x {} = {}",
        ScaledArithmetic::format(price, scale, &InvariantFormat),
        ScaledArithmetic::format(quantity, scale, &InvariantFormat),
        ScaledArithmetic::format(product, scale, &InvariantFormat)
    );
    println!(
        "  {} / {} = {}",
        ScaledArithmetic::format(price, scale, &InvariantFormat),
        ScaledArithmetic::format(quantity, scale, &InvariantFormat),
        ScaledArithmetic::format(quotient, scale, &InvariantFormat)
    );

    // Floor and ceiling snap to whole units
    let value = -1234i64;
    println!(
        "\nFloor / ceiling of {}:",
        ScaledArithmetic::format(value, scale, &InvariantFormat)
    );
    println!("  floor   = {}", ScaledArithmetic::floor(value, scale));
    println!("  ceiling = {}", ScaledArithmetic::ceiling(value, scale));

    // Every rounding mode on a tie and a non-tie
    println!("\nRounding the last digit:");
    for mode in MidpointRounding::ALL {
        println!(
            "  {:<20} 25 -> {:>3}   -25 -> {:>4}   -21 -> {:>4}",
            mode.name(),
            ScaledArithmetic::round(25i64, mode),
            ScaledArithmetic::round(-25i64, mode),
            ScaledArithmetic::round(-21i64, mode)
        );
    }

    // Locale-aware text through a context
    println!("\nLocales:");
    for (name, ctx) in [
        ("invariant", DecimalContext::invariant(4)),
        ("european", DecimalContext::european(4)),
        ("swiss", DecimalContext::swiss(4)),
    ] {
        match ctx.format(-12_345_678i64) {
            Ok(text) => println!("  {:<10} {}", name, text),
            Err(err) => println!("  {:<10} error: {}", name, err),
        }
    }

    let ctx = DecimalContext::european(2);
    println!("\nParsing with {:?}:", ctx.rounding);
    for text in ["1.234,565", "-0,005", "12,3x", "99.999.999.999.999.999,99"] {
        match ctx.parse::<i64>(text) {
            Ok(raw) => println!("  {:<28} -> raw {}", text, raw),
            Err(err) => println!("  {:<28} -> {}", text, err),
        }
    }

    // Typed wrapper
    println!("\nFixedDecimal:");
    let total = "19.99"
        .parse::<Money>()
        .and_then(|unit| unit.checked_mul(Money::from_integer(3)?));
    match total {
        Ok(total) => println!("  3 x 19.99 = {}", total),
        Err(err) => println!("  error: {}", err),
    }
}
