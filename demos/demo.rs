// demos/demo.rs
use euro_mc::mc::mc_engine::McConfig;
use euro_mc::output::{self, Histogram, DEFAULT_BINS};
use euro_mc::report::PricingComparison;
use euro_mc::{MarketParams, OptionKind, PricerResult};

fn main() -> PricerResult<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    println!("Running euro-mc Monte Carlo Demo\n");

    let market = MarketParams::new(100.0, 110.0, 0.1, 0.0, 1.0, OptionKind::Call);
    let mut summary = Vec::new();

    for kind in [OptionKind::Call, OptionKind::Put] {
        let cfg = McConfig {
            market: market.with_kind(kind),
            num_simulations: 10_000,
            seed: Some(12345),
            ..Default::default()
        };

        println!("--- European {} Pricing ---", kind);
        let (comparison, simulation) = PricingComparison::compute(&cfg)?;
        println!("Estimated option price: {}", comparison.mc_price);
        println!("Black-Scholes option price: {}", comparison.analytic_price);
        println!("Difference: {}", comparison.difference);
        println!("Standard error: {}\n", comparison.std_error);

        print!("{}", Histogram::new(&simulation.payoffs, DEFAULT_BINS)?.render(40));
        println!();

        std::fs::create_dir_all("results")?;
        let payoffs_file = format!("results/payoffs_{}.csv", kind);
        output::write_payoffs_to_csv(&payoffs_file, &simulation.payoffs)?;
        println!("Payoffs written to {}\n", payoffs_file);

        summary.push((kind, comparison));
    }

    // Put-call parity holds for the closed-form prices: C - P = S - K e^{-rT}
    let call = &summary[0].1;
    let put = &summary[1].1;
    let parity = market.spot - market.strike * (-market.rate * market.expiry).exp();
    println!(
        "Parity check (analytic): C - P = {:.6}, S - K e^(-rT) = {:.6}",
        call.analytic_price - put.analytic_price,
        parity
    );

    let rows = vec![
        ("mc_price_call", call.mc_price.to_string()),
        ("analytic_price_call", call.analytic_price.to_string()),
        ("difference_call", call.difference.to_string()),
        ("mc_price_put", put.mc_price.to_string()),
        ("analytic_price_put", put.analytic_price.to_string()),
        ("difference_put", put.difference.to_string()),
    ];
    output::write_summary_to_csv("results/summary.csv", &rows)?;
    println!("Summary data written to results/summary.csv");

    Ok(())
}
