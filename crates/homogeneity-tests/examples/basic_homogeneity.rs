//! Basic homogeneity testing example

use homogeneity_tests::{
    buishand_q_test, pettitt_test, run_all, snht_test, HomogeneityMethod, HomogeneityParameters,
    HomogeneityTest,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Homogeneity Test Examples ===\n");

    // Example 1: annual totals with a drop after a station relocation
    println!("1. Pettitt - Analytic p-value");
    let annual: Vec<f64> = vec![
        812.0, 790.0, 845.0, 828.0, 801.0, 836.0, 819.0, 842.0, 807.0, 825.0, 731.0, 748.0,
        722.0, 754.0, 740.0, 729.0, 751.0, 737.0, 744.0, 726.0,
    ];
    let result = pettitt_test(&annual, 0.05, None)?;
    println!("{result}");

    // Example 2: gaps in the record are skipped, labels keep raw positions
    println!("2. SNHT - Gappy record");
    let mut gappy = annual.clone();
    gappy[3] = f64::NAN;
    gappy[15] = f64::NAN;
    let result = snht_test(&gappy, 0.05, Some(2_000))?;
    println!("  Change point at raw position {}", result.cp());
    println!("  T = {:.4}, p = {:?}", result.statistic(), result.p());
    println!("  {}\n", result.avg());

    // Example 3: labels from a year index
    println!("3. Buishand range - Year labels");
    let years: Vec<u16> = (2001..2021).collect();
    let result = HomogeneityTest::new(HomogeneityMethod::BuishandRange)
        .with_simulations(2_000)
        .with_seed(7)
        .run_labeled(&annual, &years)?;
    println!("  Last year before the change: {}", result.cp());
    println!("  Shift: {:.1}\n", result.avg().shift());

    // Example 4: single-column table input
    println!("4. Buishand Q - Table input");
    let table: Vec<Vec<f64>> = annual.iter().map(|&v| vec![v]).collect();
    let result = buishand_q_test(&table, 0.05, None)?;
    println!("  Q = {:.4} at {}\n", result.statistic(), result.cp());

    // Example 5: every method at once
    println!("5. All methods");
    let params = HomogeneityParameters {
        simulations: Some(1_000),
        seed: Some(42),
        ..Default::default()
    };
    for result in run_all(&annual, &params)? {
        println!(
            "  {:<26} {} = {:>9.4}  cp = {:>2}  p = {:.4}",
            result.method().to_string(),
            result.statistic_name(),
            result.statistic(),
            result.cp(),
            result.p().unwrap_or(f64::NAN)
        );
    }

    Ok(())
}
